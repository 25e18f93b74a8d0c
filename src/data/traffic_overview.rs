//! Tabbed organic traffic slide: overall, branded and non-branded visits from Oct 2025.

use crate::api::{InsightCard, MetricPanel, MetricTab, MetricTabKind, Sentiment};
use crate::core::{AxisDomainPolicy, MetricTable, PeriodAxis};
use crate::error::DeckResult;

use super::seo::{self, BRANDED_TRAFFIC, MONTHS, NON_BRANDED_TRAFFIC, ORGANIC_TRAFFIC};

/// September carries no traffic data and is left off the chart.
pub const FIRST_PERIOD: usize = 1;

/// Branded tables are kept in thousands; the chart plots visits and drops zeros.
fn in_visits(rows: &[(&'static str, [Option<f64>; 5])]) -> DeckResult<MetricTable> {
    MetricTable::from_series(
        MONTHS.len(),
        rows.iter().map(|(id, values)| {
            let visits = values
                .iter()
                .map(|v| v.filter(|thousands| *thousands != 0.0).map(|t| t * 1_000.0))
                .collect();
            (*id, visits)
        }),
    )
}

pub fn tabs() -> DeckResult<Vec<MetricTab>> {
    let all = PeriodAxis::from_month_keys(&MONTHS)?;
    let periods = all.window(FIRST_PERIOD, all.len())?;
    let window = |table: MetricTable| table.window(FIRST_PERIOD, all.len());

    Ok(vec![
        MetricTab::new(
            MetricTabKind::Traffic,
            "Overall Traffic",
            periods.clone(),
            window(seo::table(&ORGANIC_TRAFFIC)?)?,
        )?
        .with_blank_clears(true)
        .with_insights(vec![
            InsightCard::new(
                Sentiment::Positive,
                "Fortinet",
                ["Traffic increased by 6.7%, growing from 4.5M to 4.8M between Oct ’25 and Jan ’26."],
            ),
            InsightCard::new(
                Sentiment::Neutral,
                "Cisco",
                ["Traffic declined by 77% (19.7M → 4.5M) during the same period. A spike to 33.5M in Nov ’25 was likely spam-driven."],
            ),
            InsightCard::new(
                Sentiment::Negative,
                "CrowdStrike",
                ["Traffic decreased by 35%, from 679K to 439K, during the same timeline."],
            ),
        ]),
        MetricTab::new(
            MetricTabKind::BrandedTraffic,
            "Branded",
            periods.clone(),
            window(in_visits(&BRANDED_TRAFFIC)?)?,
        )?
        .with_blank_clears(true)
        .with_insights(vec![InsightCard::new(
            Sentiment::Neutral,
            "Branded Decline",
            ["Branded traffic declined across all brands, with Cisco still leading despite a 30.4% drop, followed by Fortinet at -38.4%."],
        )]),
        MetricTab::new(
            MetricTabKind::NonBrandedTraffic,
            "Non-Branded",
            periods,
            window(in_visits(&NON_BRANDED_TRAFFIC)?)?,
        )?
        .with_blank_clears(true)
        .with_insights(vec![InsightCard::new(
            Sentiment::Neutral,
            "Non-Branded Leader",
            ["Fortinet leads in non-branded traffic with 4.3M in Jan ’26, growing 18.2% from Oct ’25 to Jan ’26."],
        )]),
    ])
}

pub fn panel(policy: AxisDomainPolicy) -> DeckResult<MetricPanel> {
    MetricPanel::new(seo::competitors()?, tabs()?, policy)
}
