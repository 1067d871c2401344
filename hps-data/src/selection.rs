//! Sidebar selection model.
//!
//! Three independent controls with no cross-validation:
//! - variables to plot (multi-select, informational only)
//! - the grouping dimension (single choice)
//! - the chart type (radio)
//!
//! Each choice parses from either its UI label or a kebab-case slug, so the
//! same types back the dashboard `<select>` values and CLI flags.

use hps_utils::error::SelectionError;
use std::fmt;
use std::str::FromStr;

/// Match `s` against each option's label or slug, ignoring ASCII case.
fn parse_choice<T: Copy>(
    s: &str,
    all: &[T],
    label: fn(T) -> &'static str,
    slug: fn(T) -> &'static str,
    what: &str,
) -> Result<T, SelectionError> {
    let s = s.trim();
    all.iter()
        .copied()
        .find(|c| label(*c).eq_ignore_ascii_case(s) || slug(*c).eq_ignore_ascii_case(s))
        .ok_or_else(|| SelectionError(format!("unknown {}: '{}'", what, s)))
}

/// Columns offered by the "Select Variables to Plot" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableChoice {
    FacilityName,
    City,
    State,
}

impl VariableChoice {
    pub const ALL: [VariableChoice; 3] = [
        VariableChoice::FacilityName,
        VariableChoice::City,
        VariableChoice::State,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VariableChoice::FacilityName => "Facility Name",
            VariableChoice::City => "City",
            VariableChoice::State => "State",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            VariableChoice::FacilityName => "facility-name",
            VariableChoice::City => "city",
            VariableChoice::State => "state",
        }
    }
}

impl FromStr for VariableChoice {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, &Self::ALL[..], Self::label, Self::slug, "variable")
    }
}

/// The dimension facilities are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupingDimension {
    #[default]
    City,
    State,
    HospitalType,
    HospitalOwnership,
}

impl GroupingDimension {
    pub const ALL: [GroupingDimension; 4] = [
        GroupingDimension::City,
        GroupingDimension::State,
        GroupingDimension::HospitalType,
        GroupingDimension::HospitalOwnership,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GroupingDimension::City => "City",
            GroupingDimension::State => "State",
            GroupingDimension::HospitalType => "Hospital Type",
            GroupingDimension::HospitalOwnership => "Hospital Ownership",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            GroupingDimension::City => "city",
            GroupingDimension::State => "state",
            GroupingDimension::HospitalType => "hospital-type",
            GroupingDimension::HospitalOwnership => "hospital-ownership",
        }
    }
}

impl FromStr for GroupingDimension {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, &Self::ALL[..], Self::label, Self::slug, "grouping dimension")
    }
}

impl fmt::Display for GroupingDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bar chart of counts or pie chart of percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartType {
    #[default]
    Count,
    Percentage,
}

impl ChartType {
    pub const ALL: [ChartType; 2] = [ChartType::Count, ChartType::Percentage];

    pub fn label(self) -> &'static str {
        match self {
            ChartType::Count => "Count (Bar Chart)",
            ChartType::Percentage => "Percentage (Pie Chart)",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ChartType::Count => "count",
            ChartType::Percentage => "percentage",
        }
    }
}

impl FromStr for ChartType {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, &Self::ALL[..], Self::label, Self::slug, "chart type")
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current state of all three sidebar controls.
///
/// `variables` is shown and editable but no aggregation reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub variables: Vec<VariableChoice>,
    pub grouping: GroupingDimension,
    pub chart_type: ChartType,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            variables: vec![VariableChoice::FacilityName],
            grouping: GroupingDimension::default(),
            chart_type: ChartType::default(),
        }
    }
}

impl Selection {
    pub fn new(grouping: GroupingDimension, chart_type: ChartType) -> Self {
        Self {
            grouping,
            chart_type,
            ..Self::default()
        }
    }

    /// Add or remove `variable`, keeping the list in option order.
    pub fn toggle_variable(&mut self, variable: VariableChoice) {
        if self.variables.contains(&variable) {
            self.variables.retain(|v| *v != variable);
        } else {
            self.variables.push(variable);
            self.variables.sort_by_key(|v| {
                VariableChoice::ALL
                    .iter()
                    .position(|c| c == v)
                    .unwrap_or(usize::MAX)
            });
        }
    }
}
