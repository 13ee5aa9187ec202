use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::TabId;

/// Change notifications for the shell's local stores.
///
/// Stores themselves are plain state; the session and push layers publish
/// on the bus after a mutation so rendering code can subscribe instead of
/// polling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShellEvent {
    ActiveTabChanged(TabId),
    TabVisibilityChanged { tab: TabId, visible: bool },
    AppStateChanged,
    RecentFilesChanged,
    UserChanged,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<ShellEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.sender.subscribe()
    }

    /// Publish an event, returning the number of subscribers that saw it.
    pub fn publish(&self, event: ShellEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}
