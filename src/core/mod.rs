pub mod delta;
pub mod domain;
pub mod format;
pub mod keywords;
pub mod kpi;
pub mod series;
pub mod types;
pub mod visibility;

pub use delta::Delta;
pub use domain::{AxisDomain, AxisDomainPolicy, resolve_axis_domain, visible_max};
pub use format::{NO_DATA_LABEL, format_axis_number, format_number};
pub use keywords::{
    AiPresence, KeywordRecord, KeywordSortState, SortDirection, SortKey, sort_keywords,
};
pub use kpi::{
    period_change, period_leader, period_point_change, period_total, period_total_change,
    series_change,
};
pub use series::{ChartRow, MetricSeries, MetricTable};
pub use types::{Competitor, CompetitorId, PeriodAxis, PeriodIndex, find_competitor};
pub use visibility::VisibilitySet;
