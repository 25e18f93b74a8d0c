use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::{Competitor, CompetitorId};

/// Competitors currently opted into chart rendering.
///
/// Pure view state: a fresh set starts with every competitor visible.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisibilitySet {
    visible: IndexSet<CompetitorId>,
}

impl VisibilitySet {
    #[must_use]
    pub fn all(competitors: &[Competitor]) -> Self {
        Self {
            visible: competitors.iter().map(|c| c.id.clone()).collect(),
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            visible: ids.into_iter().map(CompetitorId::new).collect(),
        }
    }

    /// Flips `id` and returns whether it is visible afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.visible.shift_remove(id) {
            false
        } else {
            self.visible.insert(CompetitorId::new(id));
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompetitorId> {
        self.visible.iter()
    }
}
