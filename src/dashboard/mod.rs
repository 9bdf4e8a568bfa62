//! Dashboard module
//!
//! Provides the dashboard page showing summary cards, charts and a data
//! table for the bundled sample dataset. Includes the HTMX fragment handler
//! for switching the performance chart between bar, line and area views.

mod aggregation;
mod cards;
mod chart_kind;
mod charts;
mod handlers;
mod tables;

pub use handlers::{get_dashboard_page, get_performance_chart};
