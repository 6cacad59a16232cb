use tauri::State;

use super::channel::HostChannel;
use super::events::HostEvent;
use crate::host::HostRuntime;

/// Initialization script exposing `window.hostIpc.postMessage(payload)` to
/// the page. The payload is forwarded untouched to `post_message`.
pub const BRIDGE_SCRIPT: &str = r#"(function () {
  if (window.hostIpc) return;
  Object.defineProperty(window, 'hostIpc', {
    value: Object.freeze({
      postMessage: function (payload) {
        return window.__TAURI_INTERNALS__.invoke('post_message', { payload: String(payload) });
      }
    })
  });
})();"#;

/// Post a serialized event descriptor from the page to the host.
#[tauri::command]
pub fn post_message(runtime: State<'_, HostRuntime>, payload: String) -> Result<(), String> {
    runtime
        .post_message(&payload)
        .map_err(|e| format!("Failed to post host message: {}", e))
}

/// Wire names of every event the host understands.
#[tauri::command]
pub fn list_host_events() -> Vec<&'static str> {
    HostEvent::ALL.iter().map(|event| event.name()).collect()
}
