//! "Select Variables to Plot" multi-select.

use crate::state::AppState;
use hps_data::selection::{Selection, VariableChoice};
use dioxus::prelude::*;

/// One checkbox per variable. The choice is kept in AppState but no chart
/// reads it.
#[component]
pub fn VariableMultiSelect() -> Element {
    let state = use_context::<AppState>();
    let selected = (state.variables)();

    rsx! {
        fieldset {
            style: "margin: 8px 0; border: none; padding: 0;",
            legend {
                style: "font-weight: bold; margin-bottom: 4px;",
                "Select Variables to Plot:"
            }
            for variable in VariableChoice::ALL {
                label {
                    key: "{variable.slug()}",
                    style: "display: block; margin: 2px 0;",
                    input {
                        r#type: "checkbox",
                        value: "{variable.slug()}",
                        checked: selected.contains(&variable),
                        onchange: move |_| toggle(state, variable),
                    }
                    " {variable.label()}"
                }
            }
        }
    }
}

fn toggle(mut state: AppState, variable: VariableChoice) {
    let mut selection = Selection {
        variables: (state.variables)(),
        ..Selection::default()
    };
    selection.toggle_variable(variable);
    state.variables.set(selection.variables);
}
