//! Host→UI state push channel.
//!
//! The host invokes one entry point, any number of times, with a partial
//! state object; each present field is applied independently. Strictly
//! one-way: no acknowledgement flows back.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;

use lathe_common::{EventBus, ShellEvent, TabId};

use crate::stores::{AppStateUpdate, AppStore, NavigationStore};

/// Partial state as the host sends it.
///
/// Tab fields stay string-keyed on purpose: an id outside the closed tab
/// set must degrade to a guard no-op, not a decode error that would drop
/// the rest of the push.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatePush {
    pub active_tab_id: Option<String>,
    pub tab_visibility: Option<HashMap<String, bool>>,
    pub title: Option<String>,
    pub has_unsaved_changes: Option<bool>,
    pub can_undo: Option<bool>,
    pub can_redo: Option<bool>,
    pub can_save: Option<bool>,
}

/// The sink the runtime registers once at startup for the host to call.
pub struct StatePushChannel {
    navigation: Arc<Mutex<NavigationStore>>,
    app: Arc<Mutex<AppStore>>,
    bus: EventBus,
}

impl StatePushChannel {
    pub fn new(
        navigation: Arc<Mutex<NavigationStore>>,
        app: Arc<Mutex<AppStore>>,
        bus: EventBus,
    ) -> Self {
        Self {
            navigation,
            app,
            bus,
        }
    }

    /// Apply one partial push. Navigation fields go first, active tab
    /// before visibility, then the app flags. Pushes have always been
    /// applied in that order and hosts depend on it.
    pub fn apply(&self, push: StatePush) {
        if let Some(ref raw) = push.active_tab_id {
            match raw.parse::<TabId>() {
                Ok(id) => {
                    if self.navigation.lock().unwrap().set_active_tab(id) {
                        self.bus.publish(ShellEvent::ActiveTabChanged(id));
                    }
                }
                Err(err) => debug!(%err, "push: active tab ignored"),
            }
        }

        if let Some(ref visibility) = push.tab_visibility {
            for (raw, &visible) in visibility {
                match raw.parse::<TabId>() {
                    Ok(tab) => {
                        if self.navigation.lock().unwrap().update_visibility(tab, visible) {
                            self.bus
                                .publish(ShellEvent::TabVisibilityChanged { tab, visible });
                        }
                    }
                    Err(err) => debug!(%err, "push: visibility key ignored"),
                }
            }
        }

        let update = AppStateUpdate {
            title: push.title,
            has_unsaved_changes: push.has_unsaved_changes,
            can_undo: push.can_undo,
            can_redo: push.can_redo,
            can_save: push.can_save,
        };
        if self.app.lock().unwrap().apply(update) {
            self.bus.publish(ShellEvent::AppStateChanged);
        }
    }
}
