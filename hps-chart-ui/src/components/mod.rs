//! Reusable Dioxus RSX components for the facilities dashboard.

mod chart_container;
mod chart_header;
mod chart_type_radio;
mod error_display;
mod grouping_selector;
mod loading_spinner;
mod sidebar;
mod variable_multi_select;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use chart_type_radio::ChartTypeRadio;
pub use error_display::ErrorDisplay;
pub use grouping_selector::GroupingSelector;
pub use loading_spinner::LoadingSpinner;
pub use sidebar::Sidebar;
pub use variable_multi_select::VariableMultiSelect;
