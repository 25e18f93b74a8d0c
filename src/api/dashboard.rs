use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    Competitor, Delta, KeywordRecord, KeywordSortState, MetricTable, PeriodIndex, SortKey,
    find_competitor, format_number, period_change, period_leader, period_point_change,
    period_total, period_total_change,
};
use crate::data::seo::{Anomaly, AnomalyKind, QuickWin, SeoDataset};
use crate::error::DeckResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficKpis {
    pub period_label: String,
    pub total_traffic: f64,
    pub total_traffic_label: String,
    /// Against the previous period; none for the first period.
    pub traffic_change: Delta,
    pub top_competitor: Option<Competitor>,
    pub top_competitor_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorCard {
    pub competitor: Competitor,
    pub organic_traffic: String,
    pub organic_keywords: String,
    pub page_one_keywords: String,
}

/// Authority score and referring domains of one competitor, with full-range trends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorityCard {
    pub competitor: Competitor,
    pub authority_score: String,
    /// Points against the previous period.
    pub authority_change: Option<f64>,
    /// `+1` / `-2`; hidden when the score did not move.
    pub authority_change_label: Option<String>,
    pub authority_trend: Vec<Option<f64>>,
    pub referring_domains: String,
    pub referring_domains_change: Delta,
    /// Hidden when there is no comparison or the count did not move.
    pub referring_domains_change_label: Option<String>,
    pub referring_domains_trend: Vec<Option<f64>>,
}

/// Branded against non-branded traffic of one competitor for the selected period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandedSplit {
    pub competitor: Competitor,
    /// Charted branded value; absent reads as zero.
    pub branded: f64,
    /// Charted non-branded value; absent reads as zero, a reported zero is not plotted.
    pub non_branded: Option<f64>,
    pub branded_label: String,
    pub non_branded_label: String,
    /// At least one of the two values was reported (a zero non-branded value does not count).
    pub has_data: bool,
    /// Either value is missing, or non-branded traffic is zero.
    pub has_issue: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalyCallout<'a> {
    pub kind: AnomalyKind,
    pub message: &'a str,
    pub competitor: Option<&'a Competitor>,
}

/// Month-selectable overview of the whole dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    data: SeoDataset,
    period: PeriodIndex,
    sort: KeywordSortState,
}

impl DashboardView {
    /// Starts on the latest period.
    #[must_use]
    pub fn new(data: SeoDataset, sort: KeywordSortState) -> Self {
        Self {
            period: data.periods.latest(),
            data,
            sort,
        }
    }

    pub fn sample() -> DeckResult<Self> {
        Ok(Self::new(SeoDataset::sample()?, KeywordSortState::default()))
    }

    #[must_use]
    pub fn data(&self) -> &SeoDataset {
        &self.data
    }

    #[must_use]
    pub fn period(&self) -> PeriodIndex {
        self.period
    }

    /// Out-of-range indices are rejected and the selection is kept.
    pub fn select_period(&mut self, index: usize) -> DeckResult<()> {
        self.period = self.data.periods.period(index)?;
        debug!(period = index, label = self.period_label(), "dashboard period selected");
        Ok(())
    }

    #[must_use]
    pub fn period_label(&self) -> &str {
        self.data.periods.label(self.period)
    }

    #[must_use]
    pub fn kpis(&self) -> TrafficKpis {
        let table = &self.data.organic_traffic;
        let competitors = &self.data.competitors;
        let total = period_total(table, competitors, self.period);
        let top = period_leader(table, competitors, self.period);
        TrafficKpis {
            period_label: self.period_label().to_owned(),
            total_traffic: total,
            total_traffic_label: format_number(Some(total)),
            traffic_change: period_total_change(table, competitors, self.period),
            top_competitor_label: format_number(
                top.and_then(|c| table.value(c.id.as_str(), self.period)),
            ),
            top_competitor: top.cloned(),
        }
    }

    #[must_use]
    pub fn competitor_cards(&self) -> Vec<CompetitorCard> {
        self.data
            .competitors
            .iter()
            .map(|competitor| {
                let id = competitor.id.as_str();
                CompetitorCard {
                    competitor: competitor.clone(),
                    organic_traffic: format_number(
                        self.data.organic_traffic.value(id, self.period),
                    ),
                    organic_keywords: format_number(
                        self.data.organic_keywords.value(id, self.period),
                    ),
                    page_one_keywords: format_number(
                        self.data.page_one_keywords.value(id, self.period),
                    ),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn authority_cards(&self) -> Vec<AuthorityCard> {
        let authority = &self.data.domain_authority;
        let domains = &self.data.referring_domains;
        self.data
            .competitors
            .iter()
            .map(|competitor| {
                let id = competitor.id.as_str();
                let authority_change = period_point_change(authority, id, self.period);
                let referring_domains_change = period_change(domains, id, self.period);
                AuthorityCard {
                    competitor: competitor.clone(),
                    authority_score: format_number(authority.value(id, self.period)),
                    authority_change,
                    authority_change_label: authority_change
                        .filter(|points| *points != 0.0)
                        .map(|points| format!("{}{points}", if points > 0.0 { "+" } else { "" })),
                    authority_trend: trend(authority, id),
                    referring_domains: format_number(domains.value(id, self.period)),
                    referring_domains_change,
                    referring_domains_change_label: referring_domains_change
                        .magnitude_percent()
                        .filter(|percent| *percent != 0.0)
                        .and(referring_domains_change.label()),
                    referring_domains_trend: trend(domains, id),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn branded_comparison(&self) -> Vec<BrandedSplit> {
        self.data
            .competitors
            .iter()
            .map(|competitor| {
                let id = competitor.id.as_str();
                let branded = self.data.branded_traffic.value(id, self.period);
                let non_branded = self.data.non_branded_traffic.value(id, self.period);
                let non_branded_reported = non_branded.is_some_and(|v| v != 0.0);
                BrandedSplit {
                    competitor: competitor.clone(),
                    branded: branded.unwrap_or(0.0),
                    non_branded: match non_branded {
                        Some(v) if v == 0.0 => None,
                        other => Some(other.unwrap_or(0.0)),
                    },
                    branded_label: format_number(branded),
                    non_branded_label: format_number(non_branded),
                    has_data: branded.is_some() || non_branded_reported,
                    has_issue: branded.is_none() || !non_branded_reported,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn sort_state(&self) -> KeywordSortState {
        self.sort
    }

    /// Column header click.
    pub fn select_sort_key(&mut self, key: SortKey) {
        self.sort.select(key);
        debug!(key = ?self.sort.key, direction = ?self.sort.direction, "keyword sort changed");
    }

    #[must_use]
    pub fn sorted_keywords(&self) -> Vec<KeywordRecord> {
        self.sort.apply(&self.data.top_keywords)
    }

    /// Callouts with their competitor references resolved; dangling ids resolve to `None`.
    #[must_use]
    pub fn anomalies(&self) -> Vec<AnomalyCallout<'_>> {
        self.data
            .anomalies
            .iter()
            .map(|anomaly: &Anomaly| AnomalyCallout {
                kind: anomaly.kind,
                message: &anomaly.message,
                competitor: anomaly
                    .competitor
                    .as_deref()
                    .and_then(|id| find_competitor(&self.data.competitors, id)),
            })
            .collect()
    }

    #[must_use]
    pub fn quick_wins(&self) -> &[QuickWin] {
        &self.data.quick_wins
    }
}

fn trend(table: &MetricTable, id: &str) -> Vec<Option<f64>> {
    table
        .series(id)
        .map(|series| series.values().to_vec())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Dashboard,
    Presentation,
}

/// Top-level switch between the dashboard and the slide deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppShell {
    mode: ViewMode,
}

impl AppShell {
    #[must_use]
    pub fn new(mode: ViewMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn mode(self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    pub fn toggle_mode(&mut self) -> ViewMode {
        self.mode = match self.mode {
            ViewMode::Dashboard => ViewMode::Presentation,
            ViewMode::Presentation => ViewMode::Dashboard,
        };
        debug!(mode = ?self.mode, "view mode toggled");
        self.mode
    }
}
