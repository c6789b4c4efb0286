use futures::channel::mpsc::UnboundedSender;
use session::{Transport, TransportError};

/// Hands outbound frames to the socket writer task.
pub struct ChannelTransport {
    tx: UnboundedSender<String>,
}

impl ChannelTransport {
    #[must_use]
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self { tx }
    }
}

impl Transport for ChannelTransport {
    fn send_text(&mut self, text: String) -> Result<(), TransportError> {
        self.tx.unbounded_send(text).map_err(|_| TransportError::Closed)
    }
}
