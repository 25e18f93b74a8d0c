//! Keyword opportunities slide: organic and page-one keyword counts, Oct 2025 onward.

use crate::api::{InsightCard, MetricPanel, MetricTab, MetricTabKind, Sentiment};
use crate::core::{AxisDomainPolicy, MetricTable, PeriodAxis};
use crate::error::DeckResult;

use super::seo::{self, MONTHS, ORGANIC_KEYWORDS, PAGE_ONE_KEYWORDS};

/// September carries no keyword data and is left off the chart.
pub const FIRST_PERIOD: usize = 1;

fn windowed(table: MetricTable, periods: &PeriodAxis) -> DeckResult<MetricTable> {
    table.window(FIRST_PERIOD, periods.len())
}

pub fn tabs() -> DeckResult<Vec<MetricTab>> {
    let all = PeriodAxis::from_month_keys(&MONTHS)?;
    let periods = all.window(FIRST_PERIOD, all.len())?;

    Ok(vec![
        MetricTab::new(
            MetricTabKind::Keywords,
            "Total Organic Keywords",
            periods.clone(),
            windowed(seo::table(&ORGANIC_KEYWORDS)?, &all)?,
        )?
        .with_blank_clears(true)
        .with_insights(vec![
            InsightCard::new(
                Sentiment::Positive,
                "Fortinet's Strong Growth",
                ["Fortinet demonstrates +13.9% keyword growth (296K → 337K Oct-Jan), showing strong content momentum and improving organic visibility, second-best growth rate after HPE (+17.3%)."],
            ),
            InsightCard::new(
                Sentiment::Neutral,
                "Cisco's Market Position",
                ["Cisco maintains highest volume at 734K keywords (+1.4% growth), an opportunity for Fortinet to gain market share through aggressive content expansion while Cisco shows minimal growth."],
            ),
        ]),
        MetricTab::new(
            MetricTabKind::PageOneKeywords,
            "Page 1 Keywords",
            periods,
            windowed(seo::table(&PAGE_ONE_KEYWORDS)?, &all)?,
        )?
        .with_blank_clears(true)
        .with_insights(vec![
            InsightCard::new(
                Sentiment::Positive,
                "Best-in-Class Conversion",
                ["Fortinet achieves 45K Page 1 keywords (+7.1% growth), representing 13.4% conversion rate, highest efficiency among all competitors in Jan, indicating superior content quality."],
            ),
            InsightCard::new(
                Sentiment::Neutral,
                "Cisco Leads Volume",
                ["Cisco leads absolute Page 1 volume (89K, +2.3% growth) but Fortinet's higher conversion rate suggests better content relevance and potential to capture more high-value keywords."],
            ),
        ]),
    ])
}

pub fn panel(policy: AxisDomainPolicy) -> DeckResult<MetricPanel> {
    MetricPanel::new(seo::competitors()?, tabs()?, policy)
}

#[cfg(test)]
mod tests {
    use super::panel;
    use crate::core::AxisDomainPolicy;

    #[test]
    fn chart_starts_in_october() {
        let panel = panel(AxisDomainPolicy::COMPACT).expect("panel");
        let rows = panel.chart_rows().expect("rows");
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].label, "Oct 2025");
        assert_eq!(rows[0].value("fortinet"), Some(296_000.0));
    }
}
