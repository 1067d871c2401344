//! Hospital facilities EDA dashboard.
//!
//! Shows the number of distinct facilities per year, country-wide or broken
//! down by state or city, as D3.js bar or pie charts.
//!
//! Data flow:
//! 1. `build.rs` copies each configured year's CSV into `OUT_DIR` and
//!    generates the `DATASETS` table of `include_str!` entries.
//! 2. On mount: the embedded CSVs are loaded, in year order, into one
//!    in-memory SQLite table (the combined table).
//! 3. On every sidebar change: the selection is dispatched to one of six
//!    aggregation routines and each resulting chart is rendered via D3.js.

use dioxus::prelude::*;
use hps_chart_ui::components::{ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, Sidebar};
use hps_chart_ui::js_bridge;
use hps_chart_ui::state::AppState;
use hps_data::dispatch;
use hps_data::loader::{load_embedded, EmbeddedDataset};

include!(concat!(env!("OUT_DIR"), "/datasets.rs"));

const PAGE_TITLE: &str = "Weather EDA dashboard";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("facilities-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Build the combined table once on mount ───
    use_effect(move || {
        match load_embedded(DATASETS) {
            Ok(db) => {
                state.db.set(Some(db));
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("Failed to load datasets: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load datasets: {:#}", e)));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: Dispatch and render ───
    // Re-runs whenever loading or any sidebar control changes.
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let selection = state.selection();

        // Clone out of the signal so the read borrow ends before we write.
        let Some(db) = state.db.read().clone() else {
            return;
        };

        match dispatch::render(&db, &selection) {
            Ok(charts) => {
                log::info!(
                    "[HPS] dashboard: {} / {} -> {} chart(s)",
                    selection.grouping,
                    selection.chart_type,
                    charts.len()
                );
                for (i, spec) in charts.iter().enumerate() {
                    js_bridge::render_chart(&js_bridge::chart_dom_id(i), spec);
                }
                state.charts.set(charts);
                state.error_msg.set(None);
            }
            Err(e) => {
                log::error!("Failed to render charts: {:#}", e);
                for i in 0..state.charts.peek().len() {
                    js_bridge::destroy_chart(&js_bridge::chart_dom_id(i));
                }
                state.charts.set(Vec::new());
                state
                    .error_msg
                    .set(Some(format!("Failed to render charts: {:#}", e)));
            }
        }
    });

    let selection_summary = format!(
        "Grouped by {} · {}",
        (state.grouping)(),
        (state.chart_type)()
    );

    // ─── Render ───
    rsx! {
        document::Title { "{PAGE_TITLE}" }
        div {
            style: "display: flex; min-height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            Sidebar {}

            main {
                style: "flex: 1; min-width: 0; padding: 16px 24px;",

                ChartHeader {
                    title: "📊 Number of Facilities by Year (Total for Country or By State)".to_string(),
                    subtitle: selection_summary,
                }

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                } else if *state.loading.read() {
                    LoadingSpinner {}
                } else if state.charts.read().is_empty() {
                    p {
                        style: "color: #888;",
                        "No facilities to display."
                    }
                } else {
                    for (i, spec) in state.charts.read().iter().enumerate() {
                        ChartContainer {
                            key: "{i}",
                            id: js_bridge::chart_dom_id(i),
                            empty: spec.is_empty(),
                        }
                    }
                }
            }
        }
    }
}
