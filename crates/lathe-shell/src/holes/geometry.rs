use tokio::sync::broadcast;

use lathe_common::HoleBounds;

/// Raw floating-point layout measurement of one element, viewport-relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Round to the integer pixel bounds that get stored and pushed.
    pub fn rounded(&self) -> HoleBounds {
        HoleBounds::from_layout(self.x, self.y, self.width, self.height)
    }
}

/// Anything that can report the current bounds of a UI element.
///
/// `None` means the element is not mounted right now. Implementations
/// wrap whatever the embedding layer measures with; observers only ever
/// call `measure`.
pub trait GeometrySource: Send + Sync {
    fn measure(&self) -> Option<LayoutRect>;
}

/// A geometry-change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryEvent {
    /// One element's size or position changed.
    Element { hole_id: String },
    /// The whole window resized; every hole re-measures.
    WindowResized,
}

/// Fan-out of geometry events to any number of observers.
pub struct GeometryFeed {
    sender: broadcast::Sender<GeometryEvent>,
}

impl GeometryFeed {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GeometryEvent> {
        self.sender.subscribe()
    }

    /// Notify that one element's geometry changed.
    pub fn element_resized(&self, hole_id: &str) -> usize {
        self.sender
            .send(GeometryEvent::Element {
                hole_id: hole_id.to_string(),
            })
            .unwrap_or(0)
    }

    /// Notify that the window resized.
    pub fn window_resized(&self) -> usize {
        self.sender.send(GeometryEvent::WindowResized).unwrap_or(0)
    }
}

impl Clone for GeometryFeed {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}
