//! Event names posted from the web UI to the host.
//! Frontend -> Backend signals, encoded as `{"event": <name>}`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Start a native drag of the main window.
pub const DRAG_WINDOW: &str = "main:drag:window";

/// Expand or collapse the settings panel below the bar.
pub const TOGGLE_SETTING: &str = "main:toggle:setting";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    DragWindow,
    ToggleSetting,
}

/// Wire form of an outbound event. Exactly one key.
#[derive(Debug, Serialize)]
struct EventDescriptor<'a> {
    event: &'a str,
}

/// Wire form accepted from the page. `message` is tolerated and ignored
/// by every current event.
#[derive(Debug, Deserialize)]
struct InboundMessage {
    event: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed host message: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unknown host event '{0}'")]
    UnknownEvent(String),
}

impl HostEvent {
    pub const ALL: [HostEvent; 2] = [HostEvent::DragWindow, HostEvent::ToggleSetting];

    pub fn name(self) -> &'static str {
        match self {
            HostEvent::DragWindow => DRAG_WINDOW,
            HostEvent::ToggleSetting => TOGGLE_SETTING,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            DRAG_WINDOW => Some(HostEvent::DragWindow),
            TOGGLE_SETTING => Some(HostEvent::ToggleSetting),
            _ => None,
        }
    }

    /// Serialize to the descriptor posted on the host channel.
    pub fn to_json(self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&EventDescriptor { event: self.name() })
    }
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HostEvent {
    type Err = DecodeError;

    fn from_str(body: &str) -> Result<Self, Self::Err> {
        let inbound: InboundMessage = serde_json::from_str(body)?;
        if let Some(message) = inbound.message.as_deref() {
            tracing::debug!("Host event '{}' carried message: {}", inbound.event, message);
        }
        HostEvent::from_name(&inbound.event).ok_or(DecodeError::UnknownEvent(inbound.event))
    }
}
