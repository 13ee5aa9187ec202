//! The Lathe web shell: local UI state and its synchronization with the
//! native host.
//!
//! Three concerns live here:
//! - hole regions: a process-wide registry of interactive screen regions
//!   plus per-element observers that mirror geometry to the host so native
//!   input routing stays correct
//! - stores: navigation tabs, document/app flags, and the home screen's
//!   recent-files/account state
//! - the host→UI push channel and the session wiring that ties stores,
//!   registry, and bridge together

pub mod holes;
pub mod push;
pub mod session;
pub mod stores;

pub use holes::{
    GeometryEvent, GeometryFeed, GeometrySource, HoleObserver, HoleRegistry, LayoutRect,
    SharedHoleRegistry,
};
pub use push::{StatePush, StatePushChannel};
pub use session::ShellSession;
pub use stores::{AppStateUpdate, AppStore, HomeStore, NavigationStore, RecentFile, UserInfo};
