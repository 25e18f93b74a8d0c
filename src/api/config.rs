use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisDomainPolicy, KeywordSortState};
use crate::error::{DeckError, DeckResult};
use crate::interaction::OriginAllowList;

/// Deck bootstrap configuration.
///
/// Serializable so a host page can ship one JSON blob instead of wiring each
/// option separately. Every field falls back to the shipped default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    #[serde(default = "default_start_slide")]
    pub start_slide: usize,
    /// Target of the "home" control: the table of contents.
    #[serde(default = "default_home_slide")]
    pub home_slide: usize,
    #[serde(default)]
    pub allowed_origins: OriginAllowList,
    #[serde(default = "default_axis_policy")]
    pub axis_policy: AxisDomainPolicy,
    #[serde(default = "default_compact_axis_policy")]
    pub compact_axis_policy: AxisDomainPolicy,
    #[serde(default)]
    pub keyword_sort: KeywordSortState,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            start_slide: default_start_slide(),
            home_slide: default_home_slide(),
            allowed_origins: OriginAllowList::default(),
            axis_policy: default_axis_policy(),
            compact_axis_policy: default_compact_axis_policy(),
            keyword_sort: KeywordSortState::default(),
        }
    }
}

impl DeckConfig {
    #[must_use]
    pub fn with_start_slide(mut self, start_slide: usize) -> Self {
        self.start_slide = start_slide;
        self
    }

    #[must_use]
    pub fn with_home_slide(mut self, home_slide: usize) -> Self {
        self.home_slide = home_slide;
        self
    }

    /// Replaces the trusted hosting origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: OriginAllowList) -> Self {
        self.allowed_origins = origins;
        self
    }

    #[must_use]
    pub fn with_axis_policy(mut self, policy: AxisDomainPolicy) -> Self {
        self.axis_policy = policy;
        self
    }

    #[must_use]
    pub fn with_compact_axis_policy(mut self, policy: AxisDomainPolicy) -> Self {
        self.compact_axis_policy = policy;
        self
    }

    #[must_use]
    pub fn with_keyword_sort(mut self, sort: KeywordSortState) -> Self {
        self.keyword_sort = sort;
        self
    }

    /// Checks slide targets against a deck of `slide_count` slides and both axis policies.
    pub fn validate(&self, slide_count: usize) -> DeckResult<()> {
        if slide_count == 0 {
            return Err(DeckError::InvalidData(
                "slide deck must contain at least one slide".to_owned(),
            ));
        }
        for index in [self.start_slide, self.home_slide] {
            if index >= slide_count {
                return Err(DeckError::SlideOutOfRange { index, slide_count });
            }
        }
        self.axis_policy.validate()?;
        self.compact_axis_policy.validate()?;
        Ok(())
    }

    pub fn to_json_pretty(&self) -> DeckResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DeckError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> DeckResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| DeckError::InvalidData(format!("failed to parse config: {e}")))?;
        debug!(
            start_slide = config.start_slide,
            home_slide = config.home_slide,
            origins = config.allowed_origins.origins().len(),
            "loaded deck config"
        );
        Ok(config)
    }
}

fn default_start_slide() -> usize {
    0
}

fn default_home_slide() -> usize {
    1
}

fn default_axis_policy() -> AxisDomainPolicy {
    AxisDomainPolicy::STANDARD
}

fn default_compact_axis_policy() -> AxisDomainPolicy {
    AxisDomainPolicy::COMPACT
}
