use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    AxisDomain, AxisDomainPolicy, ChartRow, Competitor, MetricTable, PeriodAxis, VisibilitySet,
    find_competitor, resolve_axis_domain,
};
use crate::error::{DeckError, DeckResult};
use crate::interaction::TabSet;

use super::EditableTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricTabKind {
    Keywords,
    PageOneKeywords,
    Traffic,
    BrandedTraffic,
    NonBrandedTraffic,
    AiOverview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Static narrative card shown beside a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightCard {
    pub sentiment: Sentiment,
    pub headline: String,
    pub body: Vec<String>,
}

impl InsightCard {
    pub fn new<I, S>(sentiment: Sentiment, headline: impl Into<String>, body: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sentiment,
            headline: headline.into(),
            body: body.into_iter().map(Into::into).collect(),
        }
    }
}

/// One tab of a metric panel: its periods, editable values and narrative.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTab {
    kind: MetricTabKind,
    label: String,
    periods: PeriodAxis,
    table: EditableTable,
    insights: Vec<InsightCard>,
}

impl MetricTab {
    pub fn new(
        kind: MetricTabKind,
        label: impl Into<String>,
        periods: PeriodAxis,
        table: MetricTable,
    ) -> DeckResult<Self> {
        table.ensure_period_count(periods.len())?;
        Ok(Self {
            kind,
            label: label.into(),
            periods,
            table: EditableTable::new(table),
            insights: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_insights(mut self, insights: Vec<InsightCard>) -> Self {
        self.insights = insights;
        self
    }

    #[must_use]
    pub fn with_blank_clears(mut self, blank_clears: bool) -> Self {
        self.table = self.table.with_blank_clears(blank_clears);
        self
    }

    #[must_use]
    pub fn kind(&self) -> MetricTabKind {
        self.kind
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn periods(&self) -> &PeriodAxis {
        &self.periods
    }

    #[must_use]
    pub fn table(&self) -> &EditableTable {
        &self.table
    }

    #[must_use]
    pub fn insights(&self) -> &[InsightCard] {
        &self.insights
    }
}

/// Tabbed chart slide with a competitor filter and a shared edit mode.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricPanel {
    competitors: Vec<Competitor>,
    tabs: Vec<MetricTab>,
    active: TabSet<MetricTabKind>,
    visible: VisibilitySet,
    policy: AxisDomainPolicy,
}

impl MetricPanel {
    /// All competitors start visible and the first tab starts active.
    pub fn new(
        competitors: Vec<Competitor>,
        tabs: Vec<MetricTab>,
        policy: AxisDomainPolicy,
    ) -> DeckResult<Self> {
        let policy = policy.validate()?;
        for (i, tab) in tabs.iter().enumerate() {
            if tabs[..i].iter().any(|other| other.kind == tab.kind) {
                return Err(DeckError::InvalidData(format!(
                    "duplicate metric tab: {:?}",
                    tab.kind
                )));
            }
            if let Some((id, _)) = tab
                .table
                .pristine()
                .iter()
                .find(|(id, _)| find_competitor(&competitors, id.as_str()).is_none())
            {
                return Err(DeckError::UnknownCompetitor(id.to_string()));
            }
        }
        let active = TabSet::new(tabs.iter().map(MetricTab::kind).collect())?;
        Ok(Self {
            visible: VisibilitySet::all(&competitors),
            competitors,
            tabs,
            active,
            policy,
        })
    }

    #[must_use]
    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    #[must_use]
    pub fn tabs(&self) -> &[MetricTab] {
        &self.tabs
    }

    #[must_use]
    pub fn active_kind(&self) -> MetricTabKind {
        self.active.active()
    }

    #[must_use]
    pub fn active_tab(&self) -> &MetricTab {
        &self.tabs[self.active.active_index()]
    }

    fn active_tab_mut(&mut self) -> &mut MetricTab {
        &mut self.tabs[self.active.active_index()]
    }

    pub fn select_tab(&mut self, kind: MetricTabKind) -> bool {
        let selected = self.active.select(kind);
        if selected {
            debug!(tab = ?kind, "metric tab selected");
        }
        selected
    }

    #[must_use]
    pub fn visible(&self) -> &VisibilitySet {
        &self.visible
    }

    #[must_use]
    pub fn is_visible(&self, competitor: &str) -> bool {
        self.visible.contains(competitor)
    }

    /// Flips one competitor's visibility. Unknown ids are ignored and return `None`;
    /// otherwise returns the new visibility.
    pub fn toggle_competitor(&mut self, competitor: &str) -> Option<bool> {
        find_competitor(&self.competitors, competitor)?;
        let now_visible = self.visible.toggle(competitor);
        debug!(competitor, visible = now_visible, "competitor visibility toggled");
        Some(now_visible)
    }

    #[must_use]
    pub fn insights(&self) -> &[InsightCard] {
        self.active_tab().insights()
    }

    /// Rows for the active tab's chart, visible competitors only.
    pub fn chart_rows(&self) -> DeckResult<Vec<ChartRow>> {
        let tab = self.active_tab();
        tab.table.current().chart_rows(&tab.periods, &self.visible)
    }

    /// Value-axis range for the active tab, from the current values and visible set.
    pub fn axis_domain(&self) -> DeckResult<AxisDomain> {
        resolve_axis_domain(self.active_tab().table.current(), &self.visible, self.policy)
    }

    #[must_use]
    pub fn policy(&self) -> AxisDomainPolicy {
        self.policy
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.tabs.iter().any(|tab| tab.table.is_editing())
    }

    /// Enters edit mode on every tab.
    pub fn begin_edit(&mut self) -> bool {
        let mut changed = false;
        for tab in &mut self.tabs {
            changed |= tab.table.begin_edit();
        }
        changed
    }

    /// Edits one slot of the active tab. See [`EditableTable::set_value_from_text`].
    pub fn set_value_from_text(&mut self, competitor: &str, index: usize, text: &str) -> bool {
        self.active_tab_mut()
            .table
            .set_value_from_text(competitor, index, text)
    }

    pub fn save(&mut self) -> bool {
        let mut changed = false;
        for tab in &mut self.tabs {
            changed |= tab.table.save();
        }
        changed
    }

    /// Restores every tab to its static values and leaves edit mode.
    pub fn cancel(&mut self) -> bool {
        let mut changed = false;
        for tab in &mut self.tabs {
            changed |= tab.table.cancel();
        }
        changed
    }
}
