use tauri::{AppHandle, LogicalSize, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use super::{layout, HostError, WindowController};
use crate::config::HostConfig;
use crate::ipc::commands::BRIDGE_SCRIPT;

pub const MAIN_WINDOW: &str = "main";

impl WindowController for WebviewWindow {
    fn start_drag(&self) -> Result<(), HostError> {
        self.start_dragging()
            .map_err(|e| HostError::Window(format!("Failed to start drag: {}", e)))
    }

    fn inner_height(&self) -> Result<f64, HostError> {
        let scale = self
            .scale_factor()
            .map_err(|e| HostError::Window(format!("Failed to read scale factor: {}", e)))?;
        let size = self
            .inner_size()
            .map_err(|e| HostError::Window(format!("Failed to read window size: {}", e)))?;
        Ok(size.to_logical::<f64>(scale).height)
    }

    fn set_inner_size(&self, width: f64, height: f64) -> Result<(), HostError> {
        self.set_size(LogicalSize::new(width, height))
            .map_err(|e| HostError::Window(format!("Failed to resize window: {}", e)))
    }
}

/// Create the borderless bar window with the host bridge script installed,
/// then move it into place on the primary monitor before showing it.
pub fn create_main_window(app: &AppHandle, config: &HostConfig) -> Result<WebviewWindow, String> {
    let url: tauri::Url = config
        .url
        .parse()
        .map_err(|e| format!("Invalid bar URL '{}': {}", config.url, e))?;

    let window = WebviewWindowBuilder::new(app, MAIN_WINDOW, WebviewUrl::External(url))
        .title("hostbar")
        .inner_size(config.width, config.height)
        .min_inner_size(config.width, config.height)
        .resizable(false)
        .decorations(false)
        .always_on_top(config.always_on_top)
        .focused(true)
        .visible(false)
        .initialization_script(BRIDGE_SCRIPT)
        .build()
        .map_err(|e| format!("Failed to create main window: {}", e))?;

    match window.primary_monitor() {
        Ok(Some(monitor)) => {
            let position = layout::initial_position(*monitor.size(), monitor.scale_factor(), config);
            if let Err(e) = window.set_position(position) {
                tracing::warn!("Failed to position main window: {}", e);
            }
        }
        Ok(None) => tracing::warn!("No primary monitor; leaving main window at default position"),
        Err(e) => tracing::warn!("Failed to query primary monitor: {}", e),
    }

    window
        .show()
        .map_err(|e| format!("Failed to show main window: {}", e))?;
    tracing::info!("Main window loading {}", config.url);
    Ok(window)
}

/// Look up the bar window, if it is still open.
pub fn main_window(app: &AppHandle) -> Option<WebviewWindow> {
    app.get_webview_window(MAIN_WINDOW)
}
