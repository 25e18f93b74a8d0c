use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{DeckError, DeckResult};

use super::{MetricTable, VisibilitySet};

/// Tuning for value-axis autoscaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomainPolicy {
    /// Multiplier applied to the largest visible value before rounding up.
    pub headroom: f64,
    /// Upper bound used when nothing positive is visible.
    pub fallback_span: f64,
}

impl AxisDomainPolicy {
    /// Line charts on the category dashboards.
    pub const STANDARD: Self = Self {
        headroom: 1.15,
        fallback_span: 100.0,
    };

    /// Keyword-opportunity charts.
    pub const COMPACT: Self = Self {
        headroom: 1.1,
        fallback_span: 100.0,
    };

    #[must_use]
    pub fn new(headroom: f64, fallback_span: f64) -> Self {
        Self {
            headroom,
            fallback_span,
        }
    }

    pub fn validate(self) -> DeckResult<Self> {
        if !self.headroom.is_finite() || self.headroom < 1.0 {
            return Err(DeckError::InvalidData(
                "axis headroom must be finite and >= 1".to_owned(),
            ));
        }
        if !self.fallback_span.is_finite() || self.fallback_span <= 0.0 {
            return Err(DeckError::InvalidData(
                "axis fallback span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

impl Default for AxisDomainPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Inclusive `[min, max]` value-axis range. `min` is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    #[must_use]
    pub fn as_tuple(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Largest reported value across the visible series, if any.
#[must_use]
pub fn visible_max(table: &MetricTable, visible: &VisibilitySet) -> Option<f64> {
    table
        .iter()
        .filter(|(id, _)| visible.contains(id.as_str()))
        .flat_map(|(_, series)| series.defined())
        .filter(|value| value.is_finite())
        .reduce(f64::max)
}

/// Resolves `[0, ceil(max * headroom)]` over the visible series.
///
/// Recomputed from the table on every call; there is no cached state, so the
/// result always reflects the current visible set.
pub fn resolve_axis_domain(
    table: &MetricTable,
    visible: &VisibilitySet,
    policy: AxisDomainPolicy,
) -> DeckResult<AxisDomain> {
    let policy = policy.validate()?;
    let max = match visible_max(table, visible) {
        Some(max) if max > 0.0 => (max * policy.headroom).ceil(),
        _ => policy.fallback_span,
    };
    trace!(
        visible = visible.len(),
        max,
        headroom = policy.headroom,
        "resolve axis domain"
    );
    Ok(AxisDomain { min: 0.0, max })
}
