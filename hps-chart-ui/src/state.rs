//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Sidebar signals start at the [`Selection`] defaults and reset on reload.

use hps_data::chart::ChartSpec;
use hps_data::selection::{ChartType, GroupingDimension, Selection, VariableChoice};
use hps_db::Database;
use dioxus::prelude::*;

/// Shared state for the facilities dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Combined table (None until loaded)
    pub db: Signal<Option<Database>>,
    pub loading: Signal<bool>,
    pub error_msg: Signal<Option<String>>,
    /// "Select Variables to Plot" (not used by any aggregation)
    pub variables: Signal<Vec<VariableChoice>>,
    pub grouping: Signal<GroupingDimension>,
    pub chart_type: Signal<ChartType>,
    /// Charts produced by the last dispatch, one container each
    pub charts: Signal<Vec<ChartSpec>>,
}

impl AppState {
    pub fn new() -> Self {
        let defaults = Selection::default();
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            variables: Signal::new(defaults.variables),
            grouping: Signal::new(defaults.grouping),
            chart_type: Signal::new(defaults.chart_type),
            charts: Signal::new(Vec::new()),
        }
    }

    /// Snapshot of the sidebar controls. Subscribes the caller to all three.
    pub fn selection(&self) -> Selection {
        Selection {
            variables: (self.variables)(),
            grouping: (self.grouping)(),
            chart_type: (self.chart_type)(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
