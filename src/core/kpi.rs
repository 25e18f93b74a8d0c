use super::{Competitor, Delta, MetricTable, PeriodIndex};

/// Sum across competitors for one period, counting absent values as zero.
#[must_use]
pub fn period_total(table: &MetricTable, competitors: &[Competitor], period: PeriodIndex) -> f64 {
    competitors
        .iter()
        .map(|c| table.value(c.id.as_str(), period).unwrap_or(0.0))
        .sum()
}

/// Change of the all-competitor total against the previous period.
///
/// The first period has nothing to compare against.
#[must_use]
pub fn period_total_change(
    table: &MetricTable,
    competitors: &[Competitor],
    period: PeriodIndex,
) -> Delta {
    let current = period_total(table, competitors, period);
    let previous = period
        .previous()
        .map(|p| period_total(table, competitors, p));
    Delta::between(Some(current), previous)
}

/// Competitor with the largest value in `period`; absent reads as zero and the
/// earliest competitor wins ties.
#[must_use]
pub fn period_leader<'a>(
    table: &MetricTable,
    competitors: &'a [Competitor],
    period: PeriodIndex,
) -> Option<&'a Competitor> {
    let mut leader: Option<(&Competitor, f64)> = None;
    for competitor in competitors {
        let value = table.value(competitor.id.as_str(), period).unwrap_or(0.0);
        match leader {
            Some((_, best)) if value <= best => {}
            _ => leader = Some((competitor, value)),
        }
    }
    leader.map(|(competitor, _)| competitor)
}

/// Change of one competitor's series between two periods.
#[must_use]
pub fn series_change(table: &MetricTable, id: &str, from: PeriodIndex, to: PeriodIndex) -> Delta {
    Delta::between(table.value(id, to), table.value(id, from))
}

/// Percent change of one competitor against the previous period.
#[must_use]
pub fn period_change(table: &MetricTable, id: &str, period: PeriodIndex) -> Delta {
    match period.previous() {
        Some(previous) => series_change(table, id, previous, period),
        None => Delta::NoComparison,
    }
}

/// Absolute change against the previous period, for scores where points matter
/// more than percentages. An absent or zero previous value has no comparison.
#[must_use]
pub fn period_point_change(table: &MetricTable, id: &str, period: PeriodIndex) -> Option<f64> {
    let previous = table.value(id, period.previous()?)?;
    let current = table.value(id, period)?;
    (previous != 0.0).then(|| current - previous)
}

#[cfg(test)]
mod tests {
    use super::{
        period_change, period_leader, period_point_change, period_total, period_total_change,
    };
    use crate::core::{Competitor, Delta, MetricTable, PeriodAxis};

    fn fixture() -> (Vec<Competitor>, MetricTable, PeriodAxis) {
        let competitors = vec![
            Competitor::new("a", "A", "#000000").expect("a"),
            Competitor::new("b", "B", "#FFFFFF").expect("b"),
        ];
        let table = MetricTable::from_series(
            3,
            [
                ("a", vec![None, Some(100.0), Some(50.0)]),
                ("b", vec![None, Some(100.0), Some(150.0)]),
            ],
        )
        .expect("table");
        let axis = PeriodAxis::from_labels(&["p0", "p1", "p2"]).expect("axis");
        (competitors, table, axis)
    }

    #[test]
    fn totals_treat_absent_as_zero() {
        let (competitors, table, axis) = fixture();
        assert_eq!(period_total(&table, &competitors, axis.period(0).expect("p0")), 0.0);
        assert_eq!(period_total(&table, &competitors, axis.period(2).expect("p2")), 200.0);
    }

    #[test]
    fn total_change_needs_non_zero_previous() {
        let (competitors, table, axis) = fixture();
        assert_eq!(
            period_total_change(&table, &competitors, axis.period(0).expect("p0")),
            Delta::NoComparison
        );
        assert_eq!(
            period_total_change(&table, &competitors, axis.period(1).expect("p1")),
            Delta::NoComparison
        );
        assert_eq!(
            period_total_change(&table, &competitors, axis.period(2).expect("p2")).label(),
            Some("+0.0%".to_owned())
        );
    }

    #[test]
    fn leader_ties_go_to_first_competitor() {
        let (competitors, table, axis) = fixture();
        let p1 = axis.period(1).expect("p1");
        let p2 = axis.period(2).expect("p2");
        assert_eq!(
            period_leader(&table, &competitors, p1).map(|c| c.id.as_str()),
            Some("a")
        );
        assert_eq!(
            period_leader(&table, &competitors, p2).map(|c| c.id.as_str()),
            Some("b")
        );
    }

    #[test]
    fn point_change_needs_a_nonzero_previous_value() {
        let axis = PeriodAxis::from_labels(&["p0", "p1", "p2", "p3"]).expect("axis");
        let table = MetricTable::from_series(
            4,
            [("a", vec![Some(0.0), Some(80.0), Some(83.0), None])],
        )
        .expect("table");
        let at = |i| axis.period(i).expect("period");
        assert_eq!(period_point_change(&table, "a", at(0)), None);
        assert_eq!(period_point_change(&table, "a", at(1)), None);
        assert_eq!(period_point_change(&table, "a", at(2)), Some(3.0));
        assert_eq!(period_point_change(&table, "a", at(3)), None);
        assert_eq!(period_change(&table, "a", at(1)), Delta::NoComparison);
        assert!(period_change(&table, "a", at(2)).is_comparable());
    }
}
