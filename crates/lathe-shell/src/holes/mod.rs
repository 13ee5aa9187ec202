//! Hole regions: named rectangles whose screen bounds are mirrored to the
//! host for input routing.
//!
//! The registry is the local source of truth; observers bind one UI
//! element each, keep the registry current, and push bounds to the host
//! best-effort.

mod geometry;
mod observer;
mod registry;

pub use geometry::{GeometryEvent, GeometryFeed, GeometrySource, LayoutRect};
pub use observer::HoleObserver;
pub use registry::{HoleRegistry, SharedHoleRegistry};
