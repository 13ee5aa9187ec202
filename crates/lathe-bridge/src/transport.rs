use tokio::sync::oneshot;

use lathe_common::BridgeError;

/// One-shot answer handle passed to the transport alongside a request.
///
/// The transport calls exactly one of `resolve` / `fail`, in whatever
/// callback context the host runtime provides. Dropping the responder
/// unanswered surfaces to the caller as [`BridgeError::Disconnected`];
/// holding it forever leaves the caller pending, which is the contract:
/// the bridge has no timeout.
#[derive(Debug)]
pub struct QueryResponder {
    tx: oneshot::Sender<Result<String, BridgeError>>,
}

impl QueryResponder {
    pub(crate) fn channel() -> (Self, oneshot::Receiver<Result<String, BridgeError>>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Deliver the host's success payload (raw text; the bridge decodes).
    pub fn resolve(self, text: impl Into<String>) {
        // The caller may have gone away; nothing to do then.
        let _ = self.tx.send(Ok(text.into()));
    }

    /// Deliver the host's failure callback.
    pub fn fail(self, code: i32, message: impl Into<String>) {
        let _ = self.tx.send(Err(BridgeError::Query {
            code,
            message: message.into(),
        }));
    }
}

/// The host's query primitive, as the shell sees it.
///
/// `query` must not block: it hands the serialized envelope to the host
/// and returns immediately; the answer comes back through the responder.
/// Correlating a responder with its request is entirely the transport's
/// responsibility — implementations may have any number of queries in
/// flight.
pub trait HostQuery: Send + Sync {
    fn query(&self, request: String, responder: QueryResponder);
}
