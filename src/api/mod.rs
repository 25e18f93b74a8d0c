//! View controllers a host page drives: deck navigation, the dashboard and
//! tabbed metric slides, plus their configuration and interchange formats.

mod config;
mod dashboard;
mod edit_draft;
mod json_contract;
mod metric_panel;
mod presentation;

pub use config::DeckConfig;
pub use dashboard::{
    AnomalyCallout, AppShell, AuthorityCard, BrandedSplit, CompetitorCard, DashboardView,
    TrafficKpis, ViewMode,
};
pub use edit_draft::EditableTable;
pub use json_contract::{DATASET_JSON_SCHEMA_V1, DatasetJsonContractV1, DatasetSnapshot};
pub use metric_panel::{InsightCard, MetricPanel, MetricTab, MetricTabKind, Sentiment};
pub use presentation::{
    DeckContext, DeckEvent, DeckObserver, PresentationController, PresentationMount,
};
