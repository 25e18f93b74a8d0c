use serde::{Deserialize, Serialize};

/// Period-over-period percentage change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Delta {
    Change {
        /// Absolute value of the signed percentage change.
        magnitude_percent: f64,
        /// `true` when the signed change is `>= 0`.
        is_increase: bool,
    },
    /// Either endpoint is absent, or the previous value is zero.
    NoComparison,
}

impl Delta {
    /// Computes `(current - previous) / previous * 100`.
    ///
    /// `Some(0.0)` is a legitimate current value; only `None`, non-finite
    /// inputs and a zero `previous` yield [`Delta::NoComparison`].
    #[must_use]
    pub fn between(current: Option<f64>, previous: Option<f64>) -> Self {
        let (Some(current), Some(previous)) = (current, previous) else {
            return Self::NoComparison;
        };
        if !current.is_finite() || !previous.is_finite() || previous == 0.0 {
            return Self::NoComparison;
        }

        let change = (current - previous) / previous * 100.0;
        Self::Change {
            magnitude_percent: change.abs(),
            is_increase: change >= 0.0,
        }
    }

    #[must_use]
    pub fn is_comparable(self) -> bool {
        matches!(self, Self::Change { .. })
    }

    #[must_use]
    pub fn magnitude_percent(self) -> Option<f64> {
        match self {
            Self::Change {
                magnitude_percent, ..
            } => Some(magnitude_percent),
            Self::NoComparison => None,
        }
    }

    #[must_use]
    pub fn is_increase(self) -> Option<bool> {
        match self {
            Self::Change { is_increase, .. } => Some(is_increase),
            Self::NoComparison => None,
        }
    }

    /// Signed value, negative for decreases.
    #[must_use]
    pub fn signed_percent(self) -> Option<f64> {
        match self {
            Self::Change {
                magnitude_percent,
                is_increase,
            } => Some(if is_increase {
                magnitude_percent
            } else {
                -magnitude_percent
            }),
            Self::NoComparison => None,
        }
    }

    /// Card label such as `+10.0%` or `-4.2%`.
    #[must_use]
    pub fn label(self) -> Option<String> {
        match self {
            Self::Change {
                magnitude_percent,
                is_increase,
            } => {
                let sign = if is_increase { '+' } else { '-' };
                Some(format!("{sign}{magnitude_percent:.1}%"))
            }
            Self::NoComparison => None,
        }
    }
}
