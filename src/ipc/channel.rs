use std::sync::Arc;

use crossbeam_channel::Sender;
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    #[error("host channel is disconnected")]
    Disconnected,
    #[error("host rejected message: {0}")]
    Rejected(String),
}

/// Endpoint through which serialized event descriptors reach the host.
///
/// Delivery failures are reported synchronously. Implementations must keep
/// the order of messages posted from a single thread.
pub trait HostChannel: Send + Sync {
    fn post_message(&self, payload: &str) -> Result<(), ChannelError>;
}

impl<C: HostChannel + ?Sized> HostChannel for Arc<C> {
    fn post_message(&self, payload: &str) -> Result<(), ChannelError> {
        (**self).post_message(payload)
    }
}

/// Raw payloads queued for a consumer on another thread.
impl HostChannel for Sender<String> {
    fn post_message(&self, payload: &str) -> Result<(), ChannelError> {
        self.send(payload.to_string())
            .map_err(|_| ChannelError::Disconnected)
    }
}

/// Keeps every posted payload in order. Can be switched to reject.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    messages: Mutex<Vec<String>>,
    reject_with: Mutex<Option<String>>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn take_messages(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock())
    }

    /// Reject every following post with `reason`, or accept again with `None`.
    pub fn set_rejecting(&self, reason: Option<&str>) {
        *self.reject_with.lock() = reason.map(str::to_string);
    }
}

impl HostChannel for RecordingChannel {
    fn post_message(&self, payload: &str) -> Result<(), ChannelError> {
        if let Some(reason) = self.reject_with.lock().as_ref() {
            return Err(ChannelError::Rejected(reason.clone()));
        }
        self.messages.lock().push(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_channel_preserves_order() {
        let (tx, rx) = crossbeam_channel::unbounded::<String>();
        tx.post_message("a").unwrap();
        tx.post_message("b").unwrap();
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn sender_channel_reports_disconnected_receiver() {
        let (tx, rx) = crossbeam_channel::unbounded::<String>();
        drop(rx);
        assert_eq!(tx.post_message("a"), Err(ChannelError::Disconnected));
    }

    #[test]
    fn recording_channel_rejects_until_reset() {
        let channel = RecordingChannel::new();
        channel.set_rejecting(Some("busy"));
        assert_eq!(
            channel.post_message("x"),
            Err(ChannelError::Rejected("busy".to_string()))
        );
        assert!(channel.messages().is_empty());

        channel.set_rejecting(None);
        channel.post_message("y").unwrap();
        assert_eq!(channel.take_messages(), vec!["y"]);
        assert!(channel.messages().is_empty());
    }

    #[test]
    fn arc_channel_forwards_to_inner() {
        let inner = Arc::new(RecordingChannel::new());
        let shared: Arc<dyn HostChannel> = inner.clone();
        shared.post_message("z").unwrap();
        assert_eq!(inner.messages(), vec!["z"]);
    }
}
