use std::sync::Arc;

use super::channel::{ChannelError, HostChannel};
use super::events::HostEvent;

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("no host channel is attached")]
    ChannelUnavailable,
    #[error("failed to encode host event: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Channel(#[from] ChannelError),
}

/// UI-side emitter of host events.
///
/// Holds no state besides the channel handle: each call posts exactly one
/// descriptor and repeated calls post identical messages.
#[derive(Clone)]
pub struct HostBridge {
    channel: Option<Arc<dyn HostChannel>>,
}

impl HostBridge {
    pub fn new(channel: Arc<dyn HostChannel>) -> Self {
        Self {
            channel: Some(channel),
        }
    }

    /// A bridge with no host behind it. Every emit fails with
    /// `BridgeError::ChannelUnavailable`.
    pub fn detached() -> Self {
        Self { channel: None }
    }

    pub fn is_attached(&self) -> bool {
        self.channel.is_some()
    }

    pub fn emit(&self, event: HostEvent) -> Result<(), BridgeError> {
        let channel = self.channel.as_ref().ok_or(BridgeError::ChannelUnavailable)?;
        let payload = event.to_json()?;
        channel.post_message(&payload)?;
        tracing::trace!("Posted host event {}", event);
        Ok(())
    }

    pub fn emit_drag_window(&self) -> Result<(), BridgeError> {
        self.emit(HostEvent::DragWindow)
    }

    pub fn emit_toggle_setting(&self) -> Result<(), BridgeError> {
        self.emit(HostEvent::ToggleSetting)
    }
}

impl std::fmt::Debug for HostBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostBridge")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipc::channel::RecordingChannel;
    use serde_json::{json, Value};

    fn recording_bridge() -> (HostBridge, Arc<RecordingChannel>) {
        let channel = Arc::new(RecordingChannel::new());
        (HostBridge::new(channel.clone()), channel)
    }

    fn parse(payload: &str) -> Value {
        serde_json::from_str(payload).expect("payload should be valid JSON")
    }

    #[test]
    fn emit_drag_window_posts_one_descriptor() {
        let (bridge, channel) = recording_bridge();
        bridge.emit_drag_window().unwrap();

        let messages = channel.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(parse(&messages[0]), json!({ "event": "main:drag:window" }));
    }

    #[test]
    fn emits_arrive_in_call_order() {
        let (bridge, channel) = recording_bridge();
        bridge.emit_toggle_setting().unwrap();
        bridge.emit_drag_window().unwrap();

        let messages: Vec<Value> = channel.messages().iter().map(|m| parse(m)).collect();
        assert_eq!(
            messages,
            vec![
                json!({ "event": "main:toggle:setting" }),
                json!({ "event": "main:drag:window" }),
            ]
        );
    }

    #[test]
    fn repeated_emits_are_identical_and_not_deduplicated() {
        let (bridge, channel) = recording_bridge();
        for _ in 0..5 {
            bridge.emit_toggle_setting().unwrap();
        }

        let messages = channel.messages();
        assert_eq!(messages.len(), 5);
        assert!(messages.iter().all(|m| m == &messages[0]));
    }

    #[test]
    fn every_event_posts_a_known_single_key_object() {
        let (bridge, channel) = recording_bridge();
        for event in HostEvent::ALL {
            bridge.emit(event).unwrap();
        }

        for (payload, event) in channel.messages().iter().zip(HostEvent::ALL) {
            let value = parse(payload);
            let object = value.as_object().unwrap();
            assert_eq!(object.len(), 1);
            let name = object["event"].as_str().unwrap();
            assert!(!name.is_empty());
            assert_eq!(HostEvent::from_name(name), Some(event));
        }
    }

    #[test]
    fn detached_bridge_reports_missing_channel() {
        let bridge = HostBridge::detached();
        assert!(!bridge.is_attached());
        assert!(matches!(
            bridge.emit_drag_window(),
            Err(BridgeError::ChannelUnavailable)
        ));
    }

    #[test]
    fn channel_rejection_is_surfaced() {
        let (bridge, channel) = recording_bridge();
        channel.set_rejecting(Some("closed"));
        let err = bridge.emit_toggle_setting().unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Channel(ChannelError::Rejected(ref reason)) if reason == "closed"
        ));
        assert!(channel.messages().is_empty());
    }

    #[test]
    fn cloned_bridges_share_the_channel() {
        let (bridge, channel) = recording_bridge();
        let other = bridge.clone();
        bridge.emit_drag_window().unwrap();
        other.emit_drag_window().unwrap();
        assert_eq!(channel.messages().len(), 2);
    }
}
