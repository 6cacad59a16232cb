pub mod layout;
pub mod window;

use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender};

use crate::config::HostConfig;
use crate::ipc::channel::{ChannelError, HostChannel};
use crate::ipc::events::HostEvent;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("window operation failed: {0}")]
    Window(String),
}

/// Operations the host performs on the bar window in response to events.
/// Sizes are logical pixels.
pub trait WindowController {
    fn start_drag(&self) -> Result<(), HostError>;
    fn inner_height(&self) -> Result<f64, HostError>;
    fn set_inner_size(&self, width: f64, height: f64) -> Result<(), HostError>;
}

/// Apply a single host event to the window.
pub fn apply_event<W: WindowController + ?Sized>(
    window: &W,
    event: HostEvent,
    config: &HostConfig,
) -> Result<(), HostError> {
    match event {
        HostEvent::DragWindow => window.start_drag(),
        HostEvent::ToggleSetting => {
            let size = layout::toggled_size(window.inner_height()?, config);
            tracing::debug!("Toggling settings panel to {}x{}", size.width, size.height);
            window.set_inner_size(size.width, size.height)
        }
    }
}

/// Receiving end of the host channel. Posting decodes the body and queues
/// the event for the dispatcher, keeping arrival order.
#[derive(Debug, Clone)]
pub struct HostRuntime {
    events: Sender<HostEvent>,
}

/// Queued events waiting to be applied.
#[derive(Debug)]
pub struct HostEvents {
    events: Receiver<HostEvent>,
}

impl HostRuntime {
    pub fn new() -> (Self, HostEvents) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { events: tx }, HostEvents { events: rx })
    }
}

impl HostChannel for HostRuntime {
    fn post_message(&self, payload: &str) -> Result<(), ChannelError> {
        let event: HostEvent = payload.parse().map_err(|e| {
            tracing::warn!("Dropping host message {}: {}", payload, e);
            ChannelError::Rejected(format!("{e}"))
        })?;
        self.events
            .send(event)
            .map_err(|_| ChannelError::Disconnected)
    }
}

impl HostEvents {
    /// Events queued so far, without blocking.
    pub fn drain(&self) -> Vec<HostEvent> {
        self.events.try_iter().collect()
    }

    /// Spawn the dispatcher thread. It applies every event in order to the
    /// window returned by `window` and exits once all runtimes are dropped.
    pub fn spawn_dispatcher<W, F>(
        self,
        config: HostConfig,
        window: F,
    ) -> std::io::Result<JoinHandle<()>>
    where
        W: WindowController + 'static,
        F: Fn() -> Option<W> + Send + 'static,
    {
        std::thread::Builder::new()
            .name("host-dispatch".to_string())
            .spawn(move || {
                for event in self.events.iter() {
                    let Some(target) = window() else {
                        tracing::warn!("Main window not found; skipping host event {}", event);
                        continue;
                    };
                    if let Err(e) = apply_event(&target, event, &config) {
                        tracing::error!("Failed to apply host event {}: {}", event, e);
                    }
                }
                tracing::info!("Host channel closed; dispatcher exiting");
            })
    }
}
