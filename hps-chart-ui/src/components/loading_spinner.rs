//! Loading indicator.

use dioxus::prelude::*;

/// Shown while the yearly datasets are being loaded into the combined table.
#[component]
pub fn LoadingSpinner(#[props(default = "Loading datasets...".to_string())] message: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{message}"
        }
    }
}
