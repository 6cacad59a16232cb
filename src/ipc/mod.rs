pub mod bridge;
pub mod channel;
pub mod commands;
pub mod events;

pub use bridge::{BridgeError, HostBridge};
pub use channel::{ChannelError, HostChannel, RecordingChannel};
pub use events::{DecodeError, HostEvent};
