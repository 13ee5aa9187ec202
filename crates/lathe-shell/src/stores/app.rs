use serde::{Deserialize, Serialize};

/// Host-pushed document/application flags.
#[derive(Debug, Clone)]
pub struct AppStore {
    title: String,
    has_unsaved_changes: bool,
    just_saved: bool,
    can_undo: bool,
    can_redo: bool,
    can_save: bool,
}

/// One partial update. Absent fields leave the current value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppStateUpdate {
    pub title: Option<String>,
    pub has_unsaved_changes: Option<bool>,
    pub can_undo: Option<bool>,
    pub can_redo: Option<bool>,
    pub can_save: Option<bool>,
}

impl AppStateUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.has_unsaved_changes.is_none()
            && self.can_undo.is_none()
            && self.can_redo.is_none()
            && self.can_save.is_none()
    }
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            title: "Lathe".to_string(),
            has_unsaved_changes: false,
            just_saved: false,
            can_undo: false,
            can_redo: false,
            can_save: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.has_unsaved_changes
    }

    /// Edge flag: set when an update takes `has_unsaved_changes` from
    /// true to false (the document was just saved). Stays set until
    /// `clear_just_saved`, so UI feedback can outlive the update itself.
    pub fn just_saved(&self) -> bool {
        self.just_saved
    }

    pub fn can_undo(&self) -> bool {
        self.can_undo
    }

    pub fn can_redo(&self) -> bool {
        self.can_redo
    }

    pub fn can_save(&self) -> bool {
        self.can_save
    }

    /// Apply a partial update field by field. Returns whether the update
    /// carried anything at all.
    pub fn apply(&mut self, update: AppStateUpdate) -> bool {
        let applied = !update.is_empty();

        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(unsaved) = update.has_unsaved_changes {
            if self.has_unsaved_changes && !unsaved {
                self.just_saved = true;
            }
            self.has_unsaved_changes = unsaved;
        }
        if let Some(can_undo) = update.can_undo {
            self.can_undo = can_undo;
        }
        if let Some(can_redo) = update.can_redo {
            self.can_redo = can_redo;
        }
        if let Some(can_save) = update.can_save {
            self.can_save = can_save;
        }

        applied
    }

    pub fn clear_just_saved(&mut self) {
        self.just_saved = false;
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}
