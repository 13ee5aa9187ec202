use lathe_common::{Tab, TabId};

/// Tab selection state machine.
///
/// The tab set is fixed at startup; only visibility flags and the active
/// selection mutate. The sole guard in the selection path is "the target
/// tab must currently be visible". Hiding the active tab on purpose does
/// NOT re-select — selection and visibility are tracked independently,
/// and the host relies on that when it flips visibility mid-session.
#[derive(Debug, Clone)]
pub struct NavigationStore {
    active_tab: TabId,
    tabs: Vec<Tab>,
}

impl NavigationStore {
    pub fn new() -> Self {
        Self {
            active_tab: TabId::Prepare,
            tabs: vec![
                Tab::new(TabId::Home, "Home", "home", true),
                Tab::new(TabId::Prepare, "Prepare", "box", true),
                Tab::new(TabId::Preview, "Preview", "eye", true),
                Tab::new(TabId::Device, "Device", "printer", true),
                Tab::new(TabId::MultiDevice, "Multi-device", "layoutGrid", true),
                Tab::new(TabId::Project, "Project", "folderOpen", true),
                Tab::new(TabId::Calibration, "Calibration", "settings2", true),
                Tab::new(TabId::Auxiliary, "Auxiliary", "settings2", false),
                Tab::new(TabId::DebugTool, "Debug Tool", "settings2", false),
            ],
        }
    }

    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn visible_tabs(&self) -> Vec<&Tab> {
        self.tabs.iter().filter(|t| t.visible).collect()
    }

    pub fn is_visible(&self, id: TabId) -> bool {
        self.tab(id).map(|t| t.visible).unwrap_or(false)
    }

    /// Transition the active tab. Guarded: a hidden target is a silent
    /// no-op and the prior selection stands. Returns whether the
    /// transition happened.
    pub fn set_active_tab(&mut self, id: TabId) -> bool {
        match self.tab(id) {
            Some(tab) if tab.visible => {
                self.active_tab = id;
                true
            }
            _ => false,
        }
    }

    /// Flip a tab's visibility flag. Never touches the active selection,
    /// even when hiding the active tab. Returns whether the flag value
    /// actually changed.
    pub fn update_visibility(&mut self, id: TabId, visible: bool) -> bool {
        match self.tabs.iter_mut().find(|t| t.id == id) {
            Some(tab) if tab.visible != visible => {
                tab.visible = visible;
                true
            }
            _ => false,
        }
    }
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new()
    }
}
