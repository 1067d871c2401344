//! Sidebar holding the three selection controls.

use super::{ChartTypeRadio, GroupingSelector, VariableMultiSelect};
use dioxus::prelude::*;

#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside {
            style: "flex: 0 0 260px; padding: 16px; background: #F0F2F6; border-right: 1px solid #E0E0E0; min-height: 100vh; box-sizing: border-box;",
            h3 {
                style: "margin: 0 0 12px 0; font-size: 16px;",
                "Please Select Variables Here:"
            }
            VariableMultiSelect {}
            GroupingSelector {}
            ChartTypeRadio {}
        }
    }
}
