use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Many-to-one mailbox owned by the receiving side.
///
/// The owner hands out senders while it is open. Once sealed it keeps
/// no sender of its own, so `recv` yields `None` as soon as every handed
/// out sender is dropped.
#[derive(Debug)]
pub struct Channel<T> {
    tx: Option<UnboundedSender<T>>,
    rx: UnboundedReceiver<T>,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        let (tx, rx) = unbounded_channel();
        Self { tx: Some(tx), rx }
    }
}

impl<T> Channel<T> {
    /// new sender, or None once sealed
    pub fn sender(&self) -> Option<UnboundedSender<T>> {
        self.tx.clone()
    }

    /// drop the owner's sender so the mailbox closes with its last client
    pub fn seal(&mut self) {
        self.tx = None;
    }

    pub fn rx(&mut self) -> &mut UnboundedReceiver<T> {
        &mut self.rx
    }
}
