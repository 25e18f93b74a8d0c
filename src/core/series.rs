use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{DeckError, DeckResult};

use super::{CompetitorId, PeriodAxis, PeriodIndex, VisibilitySet};

/// Chronological values for one competitor and one metric.
///
/// `None` means "not reported for that period", which is distinct from `Some(0.0)`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSeries(Vec<Option<f64>>);

impl MetricSeries {
    #[must_use]
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self(values)
    }

    /// Convenience for fully-reported series.
    #[must_use]
    pub fn reported(values: &[f64]) -> Self {
        Self(values.iter().copied().map(Some).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[Option<f64>] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied().flatten()
    }

    /// Reported values, skipping absent slots.
    pub fn defined(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().filter_map(|value| *value)
    }
}

/// One metric across competitors: competitor id -> fixed-length series.
///
/// Serializes as the `{ "fortinet": [null, 4500000, ...], ... }` dataset shape.
/// All series share `period_count` slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<CompetitorId, MetricSeries>",
    into = "IndexMap<CompetitorId, MetricSeries>"
)]
pub struct MetricTable {
    period_count: usize,
    series: IndexMap<CompetitorId, MetricSeries>,
}

impl MetricTable {
    #[must_use]
    pub fn new(period_count: usize) -> Self {
        Self {
            period_count,
            series: IndexMap::new(),
        }
    }

    /// Builds a table from `(id, values)` pairs, checking every length.
    pub fn from_series<'a, I>(period_count: usize, rows: I) -> DeckResult<Self>
    where
        I: IntoIterator<Item = (&'a str, Vec<Option<f64>>)>,
    {
        let mut table = Self::new(period_count);
        for (id, values) in rows {
            table.insert(id, MetricSeries::new(values))?;
        }
        Ok(table)
    }

    /// Inserts or replaces the series for `id`.
    pub fn insert(&mut self, id: impl Into<String>, series: MetricSeries) -> DeckResult<()> {
        let id = CompetitorId::new(id);
        if series.len() != self.period_count {
            return Err(DeckError::SeriesLengthMismatch {
                competitor: id.to_string(),
                expected: self.period_count,
                actual: series.len(),
            });
        }
        self.series.insert(id, series);
        Ok(())
    }

    #[must_use]
    pub fn period_count(&self) -> usize {
        self.period_count
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn series(&self, id: &str) -> Option<&MetricSeries> {
        self.series.get(id)
    }

    /// Value for `id` at `period`; unknown competitors read as absent.
    #[must_use]
    pub fn value(&self, id: &str, period: PeriodIndex) -> Option<f64> {
        self.series.get(id).and_then(|s| s.get(period.get()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CompetitorId, &MetricSeries)> {
        self.series.iter()
    }

    /// Overwrites one slot.
    pub fn set_value(&mut self, id: &str, index: usize, value: Option<f64>) -> DeckResult<()> {
        let period_count = self.period_count;
        let series = self
            .series
            .get_mut(id)
            .ok_or_else(|| DeckError::UnknownCompetitor(id.to_owned()))?;
        let slot = series
            .0
            .get_mut(index)
            .ok_or(DeckError::PeriodOutOfRange {
                index,
                period_count,
            })?;
        *slot = value;
        Ok(())
    }

    /// Copy of the table restricted to periods `start..end`.
    pub fn window(&self, start: usize, end: usize) -> DeckResult<Self> {
        if start >= end || end > self.period_count {
            return Err(DeckError::InvalidData(format!(
                "series window {start}..{end} is outside 0..{}",
                self.period_count
            )));
        }
        let series = self
            .series
            .iter()
            .map(|(id, s)| (id.clone(), MetricSeries::new(s.0[start..end].to_vec())))
            .collect();
        Ok(Self {
            period_count: end - start,
            series,
        })
    }

    pub fn ensure_period_count(&self, expected: usize) -> DeckResult<()> {
        if let Some((id, series)) = self.series.iter().find(|(_, s)| s.len() != expected) {
            return Err(DeckError::SeriesLengthMismatch {
                competitor: id.to_string(),
                expected,
                actual: series.len(),
            });
        }
        if !self.series.is_empty() && self.period_count != expected {
            return Err(DeckError::InvalidData(format!(
                "table has {} periods, expected {expected}",
                self.period_count
            )));
        }
        Ok(())
    }

    /// Per-period rows carrying only the visible competitors, in table order.
    pub fn chart_rows(
        &self,
        periods: &PeriodAxis,
        visible: &VisibilitySet,
    ) -> DeckResult<Vec<ChartRow>> {
        if periods.len() != self.period_count {
            return Err(DeckError::InvalidData(format!(
                "period axis has {} labels for a {}-period table",
                periods.len(),
                self.period_count
            )));
        }

        Ok(periods
            .iter()
            .map(|(period, label)| ChartRow {
                label: label.to_owned(),
                values: self
                    .series
                    .iter()
                    .filter(|(id, _)| visible.contains(id.as_str()))
                    .map(|(id, s)| (id.clone(), s.get(period.get())))
                    .collect(),
            })
            .collect())
    }
}

impl TryFrom<IndexMap<CompetitorId, MetricSeries>> for MetricTable {
    type Error = DeckError;

    fn try_from(series: IndexMap<CompetitorId, MetricSeries>) -> Result<Self, Self::Error> {
        let period_count = series.values().next().map_or(0, MetricSeries::len);
        let table = Self {
            period_count,
            series,
        };
        table.ensure_period_count(period_count)?;
        Ok(table)
    }
}

impl From<MetricTable> for IndexMap<CompetitorId, MetricSeries> {
    fn from(table: MetricTable) -> Self {
        table.series
    }
}

/// One x-axis position handed to the chart renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub values: SmallVec<[(CompetitorId, Option<f64>); 8]>,
}

impl ChartRow {
    #[must_use]
    pub fn value(&self, id: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(candidate, _)| candidate.as_str() == id)
            .and_then(|(_, value)| *value)
    }

    #[must_use]
    pub fn has_series(&self, id: &str) -> bool {
        self.values.iter().any(|(candidate, _)| candidate.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::{MetricSeries, MetricTable};
    use crate::core::{PeriodAxis, VisibilitySet};

    fn table() -> MetricTable {
        MetricTable::from_series(
            3,
            [
                ("a", vec![None, Some(10.0), Some(0.0)]),
                ("b", vec![Some(5.0), Some(6.0), Some(7.0)]),
            ],
        )
        .expect("table")
    }

    #[test]
    fn insert_rejects_wrong_length() {
        let mut t = table();
        assert!(t.insert("c", MetricSeries::reported(&[1.0])).is_err());
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn absent_and_zero_stay_distinct() {
        let t = table();
        let axis = PeriodAxis::from_labels(&["p0", "p1", "p2"]).expect("axis");
        assert_eq!(t.value("a", axis.period(0).expect("p0")), None);
        assert_eq!(t.value("a", axis.period(2).expect("p2")), Some(0.0));
    }

    #[test]
    fn chart_rows_skip_hidden_series() {
        let t = table();
        let axis = PeriodAxis::from_labels(&["p0", "p1", "p2"]).expect("axis");
        let rows = t
            .chart_rows(&axis, &VisibilitySet::from_ids(["b"]))
            .expect("rows");
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| !row.has_series("a")));
        assert_eq!(rows[2].value("b"), Some(7.0));
    }

    #[test]
    fn window_keeps_slot_alignment() {
        let w = table().window(1, 3).expect("window");
        assert_eq!(w.period_count(), 2);
        assert_eq!(w.series("a").expect("a").values(), &[Some(10.0), Some(0.0)]);
    }

    #[test]
    fn set_value_reports_unknown_targets() {
        let mut t = table();
        assert!(t.set_value("zzz", 0, Some(1.0)).is_err());
        assert!(t.set_value("a", 9, Some(1.0)).is_err());
        t.set_value("a", 0, Some(1.0)).expect("set");
        assert_eq!(t.series("a").expect("a").get(0), Some(1.0));
    }
}
