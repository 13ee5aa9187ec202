use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use lathe_bridge::{QueryRequest, RequestBridge};

use super::geometry::{GeometryEvent, GeometryFeed, GeometrySource};
use super::registry::SharedHoleRegistry;

/// Binds the lifecycle of one UI element to one registry entry and keeps
/// the host informed of its geometry.
///
/// Every refresh writes the registry first, synchronously and
/// unconditionally, then pushes to the host best-effort. A failed push is
/// logged and swallowed; the local registry value stands regardless. The
/// host is NOT told when a hole goes away: unregistration is local only,
/// matching the host protocol as it exists today.
pub struct HoleObserver {
    inner: Arc<ObserverInner>,
    watch_task: Option<JoinHandle<()>>,
    attached: bool,
}

struct ObserverInner {
    hole_id: String,
    source: Arc<dyn GeometrySource>,
    registry: SharedHoleRegistry,
    bridge: Arc<RequestBridge>,
}

impl ObserverInner {
    async fn refresh(&self) {
        let rect = match self.source.measure() {
            Some(rect) => rect,
            None => return,
        };
        let bounds = rect.rounded();

        // Local state always advances, decoupled from the push below.
        self.registry.lock().unwrap().update(&self.hole_id, bounds);

        let request = QueryRequest::new("updateHoleBounds")
            .with("id", self.hole_id.as_str())
            .with(
                "bounds",
                serde_json::to_value(bounds).unwrap_or(serde_json::Value::Null),
            );
        if let Err(err) = self.bridge.send(request).await {
            warn!(hole = %self.hole_id, error = %err, "hole bounds push failed");
        }
    }
}

impl HoleObserver {
    /// Register the hole and, if the element is already measurable,
    /// perform the initial refresh.
    pub async fn attach(
        hole_id: impl Into<String>,
        source: Arc<dyn GeometrySource>,
        registry: SharedHoleRegistry,
        bridge: Arc<RequestBridge>,
    ) -> Self {
        let hole_id = hole_id.into();
        registry.lock().unwrap().register(&hole_id);

        let inner = Arc::new(ObserverInner {
            hole_id,
            source,
            registry,
            bridge,
        });
        inner.refresh().await;

        Self {
            inner,
            watch_task: None,
            attached: true,
        }
    }

    pub fn hole_id(&self) -> &str {
        &self.inner.hole_id
    }

    /// Re-measure and propagate. Safe to call at any time; a currently
    /// unmounted element changes nothing.
    pub async fn refresh(&self) {
        self.inner.refresh().await;
    }

    /// Start reacting to the geometry feed: window resizes and size
    /// changes of this observer's own element. No coalescing — every
    /// notification triggers its own refresh.
    pub fn watch(&mut self, feed: &GeometryFeed) {
        let mut rx = feed.subscribe();
        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(GeometryEvent::WindowResized) => inner.refresh().await,
                    Ok(GeometryEvent::Element { ref hole_id }) if *hole_id == inner.hole_id => {
                        inner.refresh().await
                    }
                    Ok(_) => {}
                    // Missed notifications: one catch-up measure resyncs us.
                    Err(RecvError::Lagged(skipped)) => {
                        debug!(hole = %inner.hole_id, skipped, "geometry feed lagged");
                        inner.refresh().await;
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
        self.watch_task = Some(task);
    }

    /// Remove the registry entry and stop watching. Idempotent.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        if let Some(task) = self.watch_task.take() {
            task.abort();
        }
        self.inner
            .registry
            .lock()
            .unwrap()
            .unregister(&self.inner.hole_id);
    }
}

impl Drop for HoleObserver {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holes::geometry::LayoutRect;
    use crate::holes::registry::HoleRegistry;
    use lathe_bridge::{HostQuery, QueryResponder};
    use lathe_common::HoleBounds;
    use serde_json::Value;
    use std::sync::Mutex;
    use std::time::Duration;

    struct MovableSource(Mutex<Option<LayoutRect>>);

    impl MovableSource {
        fn new(rect: Option<LayoutRect>) -> Arc<Self> {
            Arc::new(Self(Mutex::new(rect)))
        }

        fn set(&self, rect: LayoutRect) {
            *self.0.lock().unwrap() = Some(rect);
        }
    }

    impl GeometrySource for MovableSource {
        fn measure(&self) -> Option<LayoutRect> {
            *self.0.lock().unwrap()
        }
    }

    struct Recording {
        calls: Mutex<Vec<Value>>,
    }

    impl Recording {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
            })
        }

        fn count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl HostQuery for Recording {
        fn query(&self, request: String, responder: QueryResponder) {
            self.calls
                .lock()
                .unwrap()
                .push(serde_json::from_str(&request).unwrap());
            responder.resolve(r#"{"success":true}"#.to_string());
        }
    }

    struct Failing;

    impl HostQuery for Failing {
        fn query(&self, _request: String, responder: QueryResponder) {
            responder.fail(500, "host unavailable");
        }
    }

    fn shared_registry() -> SharedHoleRegistry {
        Arc::new(Mutex::new(HoleRegistry::new()))
    }

    #[tokio::test]
    async fn attach_with_unmounted_element_keeps_zeroed_entry() {
        let registry = shared_registry();
        let bridge = Arc::new(RequestBridge::detached());
        let _observer = HoleObserver::attach(
            "toolbar",
            MovableSource::new(None),
            registry.clone(),
            bridge,
        )
        .await;

        assert_eq!(
            registry.lock().unwrap().get("toolbar"),
            Some(HoleBounds::ZERO)
        );
    }

    #[tokio::test]
    async fn attach_measures_and_pushes_immediately() {
        let registry = shared_registry();
        let transport = Recording::new();
        let bridge = Arc::new(RequestBridge::attached(transport.clone()));

        let _observer = HoleObserver::attach(
            "toolbar",
            MovableSource::new(Some(LayoutRect::new(10.2, 19.8, 100.4, 39.9))),
            registry.clone(),
            bridge,
        )
        .await;

        assert_eq!(
            registry.lock().unwrap().get("toolbar"),
            Some(HoleBounds::new(10, 20, 100, 40))
        );
        let calls = transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0]["type"], "updateHoleBounds");
        assert_eq!(calls[0]["payload"]["id"], "toolbar");
        assert_eq!(calls[0]["payload"]["bounds"]["width"], 100);
    }

    #[tokio::test]
    async fn registry_advances_even_when_push_fails() {
        let registry = shared_registry();
        let bridge = Arc::new(RequestBridge::attached(Arc::new(Failing)));
        let source = MovableSource::new(Some(LayoutRect::new(10.0, 20.0, 100.0, 40.0)));

        let observer =
            HoleObserver::attach("toolbar", source.clone(), registry.clone(), bridge).await;
        source.set(LayoutRect::new(15.0, 25.0, 110.0, 45.0));
        observer.refresh().await;

        assert_eq!(
            registry.lock().unwrap().get("toolbar"),
            Some(HoleBounds::new(15, 25, 110, 45))
        );
    }

    #[tokio::test]
    async fn detach_unregisters_without_telling_the_host() {
        let registry = shared_registry();
        let transport = Recording::new();
        let bridge = Arc::new(RequestBridge::attached(transport.clone()));

        let mut observer = HoleObserver::attach(
            "sidebar",
            MovableSource::new(Some(LayoutRect::new(0.0, 0.0, 300.0, 900.0))),
            registry.clone(),
            bridge,
        )
        .await;

        let before = transport.count();
        observer.detach();
        observer.detach(); // idempotent

        assert_eq!(registry.lock().unwrap().get("sidebar"), None);
        assert_eq!(transport.count(), before);
    }

    #[tokio::test]
    async fn drop_detaches() {
        let registry = shared_registry();
        let bridge = Arc::new(RequestBridge::detached());
        {
            let _observer = HoleObserver::attach(
                "toolbar",
                MovableSource::new(None),
                registry.clone(),
                bridge,
            )
            .await;
            assert_eq!(registry.lock().unwrap().len(), 1);
        }
        assert!(registry.lock().unwrap().is_empty());
    }

    async fn wait_for_bounds(
        registry: &SharedHoleRegistry,
        id: &str,
        expected: HoleBounds,
    ) -> bool {
        for _ in 0..200 {
            if registry.lock().unwrap().get(id) == Some(expected) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        false
    }

    #[tokio::test]
    async fn watch_reacts_to_window_resize() {
        let registry = shared_registry();
        let bridge = Arc::new(RequestBridge::detached());
        let source = MovableSource::new(Some(LayoutRect::new(0.0, 0.0, 100.0, 40.0)));
        let feed = GeometryFeed::new(8);

        let mut observer =
            HoleObserver::attach("toolbar", source.clone(), registry.clone(), bridge).await;
        observer.watch(&feed);

        source.set(LayoutRect::new(0.0, 0.0, 200.0, 40.0));
        feed.window_resized();

        assert!(wait_for_bounds(&registry, "toolbar", HoleBounds::new(0, 0, 200, 40)).await);
    }

    #[tokio::test]
    async fn watch_ignores_other_holes_element_events() {
        let registry = shared_registry();
        let transport = Recording::new();
        let bridge = Arc::new(RequestBridge::attached(transport.clone()));
        let source = MovableSource::new(Some(LayoutRect::new(0.0, 0.0, 100.0, 40.0)));
        let feed = GeometryFeed::new(8);

        let mut observer =
            HoleObserver::attach("toolbar", source.clone(), registry.clone(), bridge).await;
        observer.watch(&feed);
        let after_attach = transport.count();

        feed.element_resized("sidebar");
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(transport.count(), after_attach);

        source.set(LayoutRect::new(5.0, 5.0, 120.0, 50.0));
        feed.element_resized("toolbar");
        assert!(wait_for_bounds(&registry, "toolbar", HoleBounds::new(5, 5, 120, 50)).await);
    }
}
