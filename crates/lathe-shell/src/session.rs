//! Session wiring: one bridge, one registry, one set of stores.
//!
//! Constructed once at startup and owned for the lifetime of the page.
//! `standalone()` builds the host-less variant every dev workflow and
//! test relies on; `attached()` is what the real embedding uses.

use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use tracing::{debug, warn};

use lathe_bridge::{HostQuery, QueryRequest, RequestBridge};
use lathe_common::{EventBus, ShellEvent, TabId};

use crate::holes::{GeometrySource, HoleObserver, HoleRegistry, SharedHoleRegistry};
use crate::push::{StatePush, StatePushChannel};
use crate::stores::{AppStore, HomeStore, NavigationStore};

pub struct ShellSession {
    bridge: Arc<RequestBridge>,
    registry: SharedHoleRegistry,
    navigation: Arc<Mutex<NavigationStore>>,
    app: Arc<Mutex<AppStore>>,
    home: Arc<HomeStore>,
    push: StatePushChannel,
    bus: EventBus,
}

impl ShellSession {
    /// A session with no host: every bridge call answers with the mock
    /// success value.
    pub fn standalone() -> Self {
        Self::with_bridge(RequestBridge::detached())
    }

    /// A session backed by a live host transport.
    pub fn attached(transport: Arc<dyn HostQuery>) -> Self {
        Self::with_bridge(RequestBridge::attached(transport))
    }

    fn with_bridge(bridge: RequestBridge) -> Self {
        let bridge = Arc::new(bridge);
        let bus = EventBus::new(64);
        let navigation = Arc::new(Mutex::new(NavigationStore::new()));
        let app = Arc::new(Mutex::new(AppStore::new()));
        let push = StatePushChannel::new(navigation.clone(), app.clone(), bus.clone());

        Self {
            registry: Arc::new(Mutex::new(HoleRegistry::new())),
            navigation,
            app,
            home: Arc::new(HomeStore::new(bridge.clone())),
            push,
            bus,
            bridge,
        }
    }

    pub fn bridge(&self) -> &Arc<RequestBridge> {
        &self.bridge
    }

    pub fn registry(&self) -> &SharedHoleRegistry {
        &self.registry
    }

    pub fn navigation(&self) -> &Arc<Mutex<NavigationStore>> {
        &self.navigation
    }

    pub fn app(&self) -> &Arc<Mutex<AppStore>> {
        &self.app
    }

    pub fn home(&self) -> &Arc<HomeStore> {
        &self.home
    }

    /// The sink to hand to the host glue; it may be called any number of
    /// times, at any time.
    pub fn push_channel(&self) -> &StatePushChannel {
        &self.push
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.bus.subscribe()
    }

    /// One `getState` pull at startup, covering the window where the
    /// host has not pushed anything yet. Anything short of a well-formed
    /// `{ success: true, state: {...} }` answer is logged and dropped —
    /// the host's own pushes will catch us up.
    pub async fn pull_initial_state(&self) {
        let response = match self.bridge.send(QueryRequest::new("getState")).await {
            Ok(response) => response,
            Err(err) => {
                debug!(error = %err, "initial state pull failed");
                return;
            }
        };
        if !response.is_success() {
            debug!("initial state pull answered without success");
            return;
        }
        let state = match response.field("state") {
            Some(state) => state.clone(),
            None => return,
        };
        match serde_json::from_value::<StatePush>(state) {
            Ok(push) => self.push.apply(push),
            Err(err) => debug!(error = %err, "initial state decode skipped"),
        }
    }

    /// UI-initiated tab selection: guarded local transition, then a
    /// `selectTab` notification so the host can switch its own rendered
    /// view. The request goes out even when the local guard said no, and
    /// its outcome never reaches the caller.
    pub async fn select_tab(&self, id: TabId) {
        if self.navigation.lock().unwrap().set_active_tab(id) {
            self.bus.publish(ShellEvent::ActiveTabChanged(id));
        }

        let request = QueryRequest::new("selectTab").with("tabId", id.as_str());
        if let Err(err) = self.bridge.send(request).await {
            warn!(tab = %id, error = %err, "selectTab notification failed");
        }
    }

    /// Attach an observer for one hole backed by this session's registry
    /// and bridge.
    pub async fn observe_hole(
        &self,
        hole_id: impl Into<String>,
        source: Arc<dyn GeometrySource>,
    ) -> HoleObserver {
        HoleObserver::attach(hole_id, source, self.registry.clone(), self.bridge.clone()).await
    }
}
