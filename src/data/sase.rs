//! SASE category slide, Oct 2025 through Jan 2026.

use crate::api::{InsightCard, MetricPanel, MetricTab, MetricTabKind, Sentiment};
use crate::core::{AxisDomainPolicy, Competitor, PeriodAxis};
use crate::error::DeckResult;

use super::seo::table;

pub const MONTH_LABELS: [&str; 4] = ["Oct 2025", "Nov 2025", "Dec 2025", "Jan 2026"];

/// AI overview tracking starts in November.
pub const AIO_FIRST_PERIOD: usize = 1;

pub const VENDORS: [(&str, &str, &str); 6] = [
    ("fortinet", "Fortinet", "#EF4444"),
    ("cisco", "Cisco", "#FF7AB6"),
    ("hpe", "HPE", "#7ED957"),
    ("paloalto", "Palo Alto", "#FFB14A"),
    ("checkpoint", "Check Point", "#6C9AFF"),
    ("crowdstrike", "CrowdStrike", "#1F2937"),
];

type Row = (&'static str, [Option<f64>; 4]);

const fn row(id: &'static str, v: [f64; 4]) -> Row {
    (id, [Some(v[0]), Some(v[1]), Some(v[2]), Some(v[3])])
}

pub const TOTAL_KEYWORDS: [Row; 6] = [
    row("fortinet", [175.0, 181.0, 189.0, 196.0]),
    row("cisco", [129.0, 144.0, 154.0, 160.0]),
    row("hpe", [33.0, 45.0, 65.0, 70.0]),
    row("paloalto", [179.0, 182.0, 195.0, 200.0]),
    row("checkpoint", [65.0, 99.0, 114.0, 114.0]),
    row("crowdstrike", [35.0, 44.0, 48.0, 48.0]),
];

pub const CUMULATIVE_TRAFFIC: [Row; 6] = [
    row("fortinet", [11_031.0, 8_746.0, 10_024.0, 10_015.0]),
    row("cisco", [1_921.0, 2_090.0, 1_976.0, 2_109.0]),
    row("hpe", [227.0, 107.0, 137.0, 118.0]),
    row("paloalto", [8_998.0, 9_442.0, 10_263.0, 10_660.0]),
    row("checkpoint", [818.0, 1_270.0, 1_368.0, 1_372.0]),
    row("crowdstrike", [325.0, 423.0, 436.0, 436.0]),
];

pub const PAGE_ONE_KEYWORDS: [Row; 6] = [
    row("fortinet", [165.0, 167.0, 179.0, 188.0]),
    row("cisco", [114.0, 128.0, 128.0, 131.0]),
    row("hpe", [14.0, 13.0, 16.0, 15.0]),
    row("paloalto", [173.0, 174.0, 182.0, 188.0]),
    row("checkpoint", [37.0, 54.0, 57.0, 52.0]),
    row("crowdstrike", [17.0, 15.0, 13.0, 13.0]),
];

/// The October column is a placeholder zero and is never charted.
pub const AI_OVERVIEW: [Row; 6] = [
    row("fortinet", [0.0, 125.0, 127.0, 125.0]),
    row("cisco", [0.0, 105.0, 110.0, 110.0]),
    row("hpe", [0.0, 38.0, 53.0, 55.0]),
    row("paloalto", [0.0, 127.0, 136.0, 130.0]),
    row("checkpoint", [0.0, 76.0, 85.0, 81.0]),
    row("crowdstrike", [0.0, 32.0, 43.0, 44.0]),
];

pub fn vendors() -> DeckResult<Vec<Competitor>> {
    VENDORS
        .iter()
        .map(|(id, name, color)| Competitor::new(*id, *name, *color))
        .collect()
}

pub fn periods() -> DeckResult<PeriodAxis> {
    PeriodAxis::from_labels(&MONTH_LABELS)
}

/// Tabs of the SASE dashboard slide, in display order.
pub fn tabs() -> DeckResult<Vec<MetricTab>> {
    let periods = periods()?;
    let aio_periods = periods.window(AIO_FIRST_PERIOD, periods.len())?;
    let aio = table(&AI_OVERVIEW)?.window(AIO_FIRST_PERIOD, periods.len())?;

    Ok(vec![
        MetricTab::new(
            MetricTabKind::Keywords,
            "Total Keywords",
            periods.clone(),
            table(&TOTAL_KEYWORDS)?,
        )?
        .with_insights(vec![InsightCard::new(
            Sentiment::Positive,
            "Strong Keyword Growth",
            ["Fortinet shows steady growth from 175 to 196 keywords (+12% over 4 months), closely matching Palo Alto's 200, demonstrating strong content expansion in the emerging SASE category."],
        )]),
        MetricTab::new(
            MetricTabKind::PageOneKeywords,
            "Page 1 Keywords",
            periods.clone(),
            table(&PAGE_ONE_KEYWORDS)?,
        )?
        .with_insights(vec![InsightCard::new(
            Sentiment::Positive,
            "Excellent Visibility Ratio",
            ["Fortinet achieves 188 Page 1 rankings (95.9% of total keywords), matching Palo Alto's 188, demonstrating exceptional content relevance and strong competitive positioning in SASE category."],
        )]),
        MetricTab::new(
            MetricTabKind::Traffic,
            "Cumulative Traffic",
            periods,
            table(&CUMULATIVE_TRAFFIC)?,
        )?
        .with_insights(vec![InsightCard::new(
            Sentiment::Negative,
            "Traffic Volatility Challenge",
            [
                "Fortinet shows volatile traffic pattern (11K→8.7K→10K), ending flat at 10,015 while Palo Alto demonstrates consistent growth (+18.5%, reaching 10,660).",
                "Despite leading in keywords (196) and strong Page 1 presence (95.9%), traffic instability suggests content optimization opportunity to stabilize and grow SASE traffic.",
            ],
        )]),
        MetricTab::new(
            MetricTabKind::AiOverview,
            "AIO (AI Overview)",
            aio_periods,
            aio,
        )?
        .with_insights(vec![InsightCard::new(
            Sentiment::Neutral,
            "Stable AI Overview Presence",
            ["Palo Alto leads (127 → 130) with Fortinet close behind (125 → 125). HPE shows strong growth (+44.7%), while category demonstrates growing AI Overview adoption across SASE queries."],
        )]),
    ])
}

pub fn panel(policy: AxisDomainPolicy) -> DeckResult<MetricPanel> {
    MetricPanel::new(vendors()?, tabs()?, policy)
}

#[cfg(test)]
mod tests {
    use super::{AI_OVERVIEW, tabs};
    use crate::api::MetricTabKind;

    #[test]
    fn ai_overview_tab_drops_the_placeholder_column() {
        let tabs = tabs().expect("tabs");
        let aio = tabs
            .iter()
            .find(|tab| tab.kind() == MetricTabKind::AiOverview)
            .expect("aio tab");
        assert_eq!(aio.periods().labels(), ["Nov 2025", "Dec 2025", "Jan 2026"]);
        assert_eq!(
            aio.table().pristine().series("fortinet").map(|s| s.values().to_vec()),
            Some(AI_OVERVIEW[0].1[1..].to_vec())
        );
    }
}
