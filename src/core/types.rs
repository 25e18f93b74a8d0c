use std::borrow::Borrow;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// Stable competitor key shared by every metric table (`"fortinet"`, `"cisco"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetitorId(String);

impl CompetitorId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CompetitorId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CompetitorId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for CompetitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tracked entity with its chart stroke color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    pub color: String,
}

impl Competitor {
    /// Creates a competitor; `color` must be a `#RRGGBB` hex triplet.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> DeckResult<Self> {
        let color = color.into();
        if !is_hex_color(&color) {
            return Err(DeckError::InvalidData(format!(
                "competitor color must be #RRGGBB, got `{color}`"
            )));
        }
        Ok(Self {
            id: CompetitorId::new(id),
            name: name.into(),
            color,
        })
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Finds a competitor by id. Tables reference competitors, they never embed them.
#[must_use]
pub fn find_competitor<'a>(competitors: &'a [Competitor], id: &str) -> Option<&'a Competitor> {
    competitors.iter().find(|c| c.id.as_str() == id)
}

/// Position in the shared period list. Index `i` means the same month for every series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PeriodIndex(pub(crate) usize);

impl PeriodIndex {
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// Period immediately before this one, if any.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

/// Ordered calendar periods with their display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PeriodAxisRepr")]
pub struct PeriodAxis {
    keys: Vec<String>,
    labels: Vec<String>,
}

#[derive(Deserialize)]
struct PeriodAxisRepr {
    keys: Vec<String>,
    labels: Vec<String>,
}

impl TryFrom<PeriodAxisRepr> for PeriodAxis {
    type Error = DeckError;

    fn try_from(repr: PeriodAxisRepr) -> Result<Self, Self::Error> {
        if repr.keys.is_empty() || repr.keys.len() != repr.labels.len() {
            return Err(DeckError::InvalidData(format!(
                "period axis needs matching non-empty keys and labels, got {} keys and {} labels",
                repr.keys.len(),
                repr.labels.len()
            )));
        }
        Ok(Self {
            keys: repr.keys,
            labels: repr.labels,
        })
    }
}

impl PeriodAxis {
    /// Builds an axis from `YYYY-MM` keys, deriving `Mon YYYY` labels.
    pub fn from_month_keys<S: AsRef<str>>(keys: &[S]) -> DeckResult<Self> {
        if keys.is_empty() {
            return Err(DeckError::InvalidData(
                "period axis must contain at least one period".to_owned(),
            ));
        }

        let mut out_keys = Vec::with_capacity(keys.len());
        let mut labels = Vec::with_capacity(keys.len());
        for key in keys {
            let key = key.as_ref();
            let date = NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d").map_err(
                |e| DeckError::InvalidData(format!("invalid month key `{key}`: {e}")),
            )?;
            out_keys.push(key.to_owned());
            labels.push(date.format("%b %Y").to_string());
        }

        Ok(Self {
            keys: out_keys,
            labels,
        })
    }

    /// Builds an axis from display labels only; keys mirror the labels.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> DeckResult<Self> {
        if labels.is_empty() {
            return Err(DeckError::InvalidData(
                "period axis must contain at least one period".to_owned(),
            ));
        }
        let labels: Vec<String> = labels.iter().map(|l| l.as_ref().to_owned()).collect();
        Ok(Self {
            keys: labels.clone(),
            labels,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label of `period`; empty for an index minted by a longer axis.
    #[must_use]
    pub fn label(&self, period: PeriodIndex) -> &str {
        self.labels.get(period.0).map_or("", String::as_str)
    }

    /// Validates `index` against this axis.
    pub fn period(&self, index: usize) -> DeckResult<PeriodIndex> {
        if index >= self.len() {
            return Err(DeckError::PeriodOutOfRange {
                index,
                period_count: self.len(),
            });
        }
        Ok(PeriodIndex(index))
    }

    /// Last period of the axis.
    #[must_use]
    pub fn latest(&self) -> PeriodIndex {
        PeriodIndex(self.len().saturating_sub(1))
    }

    pub fn iter(&self) -> impl Iterator<Item = (PeriodIndex, &str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (PeriodIndex(i), label.as_str()))
    }

    /// Sub-axis covering `start..end`, used by tabs that skip leading periods.
    pub fn window(&self, start: usize, end: usize) -> DeckResult<Self> {
        if start >= end || end > self.len() {
            return Err(DeckError::InvalidData(format!(
                "period window {start}..{end} is outside 0..{}",
                self.len()
            )));
        }
        Ok(Self {
            keys: self.keys[start..end].to_vec(),
            labels: self.labels[start..end].to_vec(),
        })
    }
}
