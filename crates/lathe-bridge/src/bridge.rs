use std::sync::Arc;

use tracing::{debug, trace};

use lathe_common::BridgeError;

use crate::envelope::QueryRequest;
use crate::response::Response;
use crate::transport::{HostQuery, QueryResponder};

/// Async request/response wrapper over the host's query primitive.
///
/// Detached (standalone/dev, no host runtime) every call resolves
/// immediately with the mock success value. Attached, the envelope is
/// serialized and handed to the transport together with a one-shot
/// responder; any number of calls may be outstanding at once and nothing
/// here serializes or times them out.
pub struct RequestBridge {
    transport: Option<Arc<dyn HostQuery>>,
}

impl RequestBridge {
    /// A bridge with no host attached. Every `send` resolves with
    /// `{ "success": true }` and never touches a transport.
    pub fn detached() -> Self {
        Self { transport: None }
    }

    /// A bridge backed by a live host transport.
    pub fn attached(transport: Arc<dyn HostQuery>) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.transport.is_some()
    }

    /// Submit a request and await the host's answer.
    pub async fn send(&self, request: QueryRequest) -> Result<Response, BridgeError> {
        let transport = match self.transport {
            Some(ref t) => t,
            None => {
                debug!(kind = %request.kind, "bridge detached, answering with mock response");
                return Ok(Response::mock_ok());
            }
        };

        let raw = request.to_json()?;
        trace!(kind = %request.kind, len = raw.len(), "submitting query");

        let (responder, rx) = QueryResponder::channel();
        transport.query(raw, responder);

        match rx.await {
            Ok(Ok(text)) => Ok(Response::decode(text)),
            Ok(Err(err)) => Err(err),
            Err(_) => Err(BridgeError::Disconnected),
        }
    }
}
