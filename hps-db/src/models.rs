//! Query result model structs for facility aggregates.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend, or written as CSV rows by the CLI.
//! `facilities` is always a distinct count of facility names.

use serde::Serialize;

/// Country-wide facility count for one year.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearCount {
    pub year: i32,
    pub facilities: i64,
}

/// Facility count for one (year, state) group.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearStateCount {
    pub year: i32,
    pub state: String,
    pub facilities: i64,
}

/// Facility count for one (year, state, city) group.
///
/// City names repeat across states (e.g. "COLUMBUS" in GA and OH), so the
/// state stays part of the key.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearStateCityCount {
    pub year: i32,
    pub state: String,
    pub city: String,
    pub facilities: i64,
}

/// Facility count for one state within a single year.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StateCount {
    pub state: String,
    pub facilities: i64,
}

/// Per-year shape of the combined table: raw rows versus distinct facilities.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableSummary {
    pub year: i32,
    pub rows: i64,
    pub facilities: i64,
}

/// An aggregate row paired with its share of the denominator scope, in percent.
///
/// The group's own fields are flattened so the JSON/CSV shape is the base row
/// plus a trailing `percentage`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Share<T> {
    #[serde(flatten)]
    pub group: T,
    pub percentage: f64,
}

/// Rows that can take part in a percentage-of-total calculation.
pub trait FacilityCount {
    /// Distinct facility count for this group.
    fn facilities(&self) -> i64;
}

impl FacilityCount for YearCount {
    fn facilities(&self) -> i64 {
        self.facilities
    }
}

impl FacilityCount for YearStateCityCount {
    fn facilities(&self) -> i64 {
        self.facilities
    }
}

impl FacilityCount for StateCount {
    fn facilities(&self) -> i64 {
        self.facilities
    }
}
