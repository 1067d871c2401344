//! "Select Variable" dropdown for the grouping dimension.

use crate::state::AppState;
use hps_data::selection::GroupingDimension;
use dioxus::prelude::*;

/// Grouping dimension dropdown.
/// Updates AppState.grouping on change, which re-runs the chart dispatch.
#[component]
pub fn GroupingSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.grouping)();

    let on_change = move |evt: Event<FormData>| {
        match evt.value().parse::<GroupingDimension>() {
            Ok(grouping) => state.grouping.set(grouping),
            Err(e) => log::warn!("[HPS] ui: {}", e),
        }
    };

    rsx! {
        div {
            style: "margin: 12px 0;",
            label {
                r#for: "grouping-select",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "Select Variable:"
            }
            select {
                id: "grouping-select",
                style: "width: 100%;",
                onchange: on_change,
                for grouping in GroupingDimension::ALL {
                    option {
                        value: "{grouping.slug()}",
                        selected: grouping == selected,
                        "{grouping.label()}"
                    }
                }
            }
        }
    }
}
