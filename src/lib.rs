//! serp-deck: derived metrics and view state for a competitive SEO dashboard
//! and its companion slide deck.
//!
//! The crate computes what a chart renderer needs (rows, axis domains,
//! formatted labels, card contents) and owns the navigation state machines.
//! Rendering itself stays with the host.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{DashboardView, DeckConfig, MetricPanel, PresentationController};
pub use error::{DeckError, DeckResult};
