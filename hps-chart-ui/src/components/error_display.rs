//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shows a load or render failure in place of the charts.
///
/// Multi-line messages (an `anyhow` chain rendered with `{:#}`) keep their
/// line breaks.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A; white-space: pre-wrap;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
