use tracing::debug;

use crate::core::MetricTable;

/// Static table plus the working copy shown while a slide is in edit mode.
///
/// Edits never touch the pristine table. `cancel` restores it, discarding
/// earlier saved edits too.
#[derive(Debug, Clone, PartialEq)]
pub struct EditableTable {
    pristine: MetricTable,
    working: MetricTable,
    editing: bool,
    blank_clears: bool,
}

impl EditableTable {
    #[must_use]
    pub fn new(pristine: MetricTable) -> Self {
        Self {
            working: pristine.clone(),
            pristine,
            editing: false,
            blank_clears: false,
        }
    }

    /// When set, an empty field marks the slot as not reported instead of
    /// being ignored.
    #[must_use]
    pub fn with_blank_clears(mut self, blank_clears: bool) -> Self {
        self.blank_clears = blank_clears;
        self
    }

    #[must_use]
    pub fn pristine(&self) -> &MetricTable {
        &self.pristine
    }

    /// Values to chart: the draft while editing, the last saved values otherwise.
    #[must_use]
    pub fn current(&self) -> &MetricTable {
        &self.working
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.working != self.pristine
    }

    pub fn begin_edit(&mut self) -> bool {
        let changed = !self.editing;
        self.editing = true;
        changed
    }

    /// Applies one keystroke's worth of field text.
    ///
    /// Returns `false`, leaving the table untouched, when not editing, when
    /// the text is not a finite number, or when the slot does not exist.
    pub fn set_value_from_text(&mut self, competitor: &str, index: usize, text: &str) -> bool {
        if !self.editing {
            return false;
        }
        let trimmed = text.trim();
        let value = if trimmed.is_empty() {
            if !self.blank_clears {
                return false;
            }
            None
        } else {
            match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() => Some(value),
                _ => return false,
            }
        };
        self.working.set_value(competitor, index, value).is_ok()
    }

    /// Leaves edit mode keeping the draft.
    pub fn save(&mut self) -> bool {
        if !self.editing {
            return false;
        }
        self.editing = false;
        debug!(modified = self.is_modified(), "draft saved");
        true
    }

    /// Leaves edit mode and restores the pristine values.
    pub fn cancel(&mut self) -> bool {
        let changed = self.editing || self.is_modified();
        self.working = self.pristine.clone();
        self.editing = false;
        if changed {
            debug!("draft discarded");
        }
        changed
    }
}
