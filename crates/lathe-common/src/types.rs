use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Viewport-relative bounds of a hole region, in integer pixels.
///
/// Layout engines measure in floating point; bounds are rounded to the
/// nearest integer before they are stored or put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoleBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl HoleBounds {
    /// The zeroed placeholder a hole holds between registration and its
    /// first measurement.
    pub const ZERO: HoleBounds = HoleBounds {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Round a floating-point layout measurement to integer pixel bounds.
    pub fn from_layout(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
            width: width.round() as i32,
            height: height.round() as i32,
        }
    }
}

impl fmt::Display for HoleBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}@{},{}",
            self.width, self.height, self.x, self.y
        )
    }
}

/// Identifier of a top-level navigation tab.
///
/// The tab set is closed: the host and the UI agree on these nine ids and
/// nothing else. Wire form is kebab-case (`multi-device`, `debug-tool`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabId {
    Home,
    Prepare,
    Preview,
    Device,
    MultiDevice,
    Project,
    Calibration,
    Auxiliary,
    DebugTool,
}

impl TabId {
    pub const ALL: [TabId; 9] = [
        TabId::Home,
        TabId::Prepare,
        TabId::Preview,
        TabId::Device,
        TabId::MultiDevice,
        TabId::Project,
        TabId::Calibration,
        TabId::Auxiliary,
        TabId::DebugTool,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Home => "home",
            TabId::Prepare => "prepare",
            TabId::Preview => "preview",
            TabId::Device => "device",
            TabId::MultiDevice => "multi-device",
            TabId::Project => "project",
            TabId::Calibration => "calibration",
            TabId::Auxiliary => "auxiliary",
            TabId::DebugTool => "debug-tool",
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab id: {0}")]
pub struct UnknownTabId(pub String);

impl FromStr for TabId {
    type Err = UnknownTabId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownTabId(s.to_string()))
    }
}

/// A top-level navigable section of the UI.
///
/// Only `visible` mutates after startup; id, label and icon are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub label: String,
    pub icon: String,
    pub visible: bool,
}

impl Tab {
    pub fn new(id: TabId, label: &str, icon: &str, visible: bool) -> Self {
        Self {
            id,
            label: label.to_string(),
            icon: icon.to_string(),
            visible,
        }
    }
}
