//! "Select Chart Type" radio buttons.

use crate::state::AppState;
use hps_data::selection::ChartType;
use dioxus::prelude::*;

#[component]
pub fn ChartTypeRadio() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.chart_type)();

    rsx! {
        fieldset {
            style: "margin: 12px 0; border: none; padding: 0;",
            legend {
                style: "font-weight: bold; margin-bottom: 4px;",
                "Select Chart Type:"
            }
            for chart_type in ChartType::ALL {
                label {
                    key: "{chart_type.slug()}",
                    style: "display: block; margin: 2px 0;",
                    input {
                        r#type: "radio",
                        name: "chart-type",
                        value: "{chart_type.slug()}",
                        checked: chart_type == current,
                        onchange: move |_| state.chart_type.set(chart_type),
                    }
                    " {chart_type.label()}"
                }
            }
        }
    }
}
