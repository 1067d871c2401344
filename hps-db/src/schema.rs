//! SQL schema for the in-memory SQLite database.
//!
//! The combined table is a single `facilities` relation; every aggregate is
//! derived from it on-the-fly with `GROUP BY` + `COUNT(DISTINCT facility_name)`.

/// Returns the full SQL schema as a single batch string.
///
/// `row_id` records insertion order (year order, then file order), which
/// `query_years` uses to report years in first-appearance order. Text
/// columns are nullable: empty CSV fields are stored as `NULL`.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS facilities (
        row_id INTEGER PRIMARY KEY,
        year INTEGER NOT NULL,
        facility_name TEXT,
        city TEXT,
        state TEXT,
        hospital_type TEXT,
        hospital_ownership TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_facilities_year ON facilities(year);
    CREATE INDEX IF NOT EXISTS idx_facilities_year_state ON facilities(year, state);
    "#
}
