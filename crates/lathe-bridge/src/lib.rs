//! Request/response bridge between the web shell and the native host.
//!
//! The host exposes a single synchronous query primitive with asynchronous
//! success/failure callbacks. This crate wraps it into ordinary async
//! calls:
//! - `RequestBridge::send` submits an envelope and awaits the answer
//! - with no host attached (standalone/dev), every call resolves with a
//!   fixed mock success value and nothing touches the transport
//! - correlation of concurrent calls is the transport's job; the bridge
//!   keeps no request-id bookkeeping of its own

pub mod bridge;
pub mod envelope;
pub mod response;
pub mod transport;

pub use bridge::RequestBridge;
pub use envelope::QueryRequest;
pub use response::Response;
pub use transport::{HostQuery, QueryResponder};
