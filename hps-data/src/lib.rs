//! Dataset loading, selection model, aggregation and dispatch for the
//! hospital facilities dashboard.
//!
//! Data flow for one render pass:
//! 1. [`loader`] builds the combined table once (from disk or embedded text).
//! 2. [`selection::Selection`] holds the sidebar choices.
//! 3. [`dispatch::render`] picks one of six routines in [`aggregate`].
//! 4. The routine returns [`chart::ChartSpec`]s, drawn by the dashboard or
//!    printed by the CLI.

pub mod aggregate;
pub mod chart;
pub mod dispatch;
pub mod loader;
pub mod selection;
