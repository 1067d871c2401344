//! Typed aggregation queries over the combined `facilities` table.
//!
//! All queries return typed structs from [`crate::models`] that can be
//! serialized to JSON for consumption by D3.js chart components.
//!
//! Every count is `COUNT(DISTINCT facility_name)`: a facility listed several
//! times in one group counts once. Groups with a `NULL` key are skipped and
//! results are ordered by their key columns.

use crate::models::{StateCount, TableSummary, YearCount, YearStateCityCount, YearStateCount};
use crate::Database;
use rusqlite::params;

impl Database {
    /// Total number of rows in the combined table.
    pub fn row_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count = conn.query_row("SELECT COUNT(*) FROM facilities", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Distinct years present, in the order they were loaded.
    pub fn query_years(&self) -> anyhow::Result<Vec<i32>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year FROM facilities
             GROUP BY year
             ORDER BY MIN(row_id)",
        )?;
        let years = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i32>, _>>()?;
        Ok(years)
    }

    /// Country-wide facility count per year.
    pub fn query_facilities_by_year(&self) -> anyhow::Result<Vec<YearCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year, COUNT(DISTINCT facility_name)
             FROM facilities
             GROUP BY year
             ORDER BY year",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(YearCount {
                    year: row.get(0)?,
                    facilities: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[HPS] query: query_facilities_by_year returned {} groups",
            rows.len()
        );
        Ok(rows)
    }

    /// Facility count per (year, state).
    pub fn query_facilities_by_year_state(&self) -> anyhow::Result<Vec<YearStateCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year, state, COUNT(DISTINCT facility_name)
             FROM facilities
             WHERE state IS NOT NULL
             GROUP BY year, state
             ORDER BY year, state",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(YearStateCount {
                    year: row.get(0)?,
                    state: row.get(1)?,
                    facilities: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[HPS] query: query_facilities_by_year_state returned {} groups",
            rows.len()
        );
        Ok(rows)
    }

    /// Facility count per (year, state, city).
    pub fn query_facilities_by_year_state_city(
        &self,
    ) -> anyhow::Result<Vec<YearStateCityCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year, state, city, COUNT(DISTINCT facility_name)
             FROM facilities
             WHERE state IS NOT NULL AND city IS NOT NULL
             GROUP BY year, state, city
             ORDER BY year, state, city",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(YearStateCityCount {
                    year: row.get(0)?,
                    state: row.get(1)?,
                    city: row.get(2)?,
                    facilities: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[HPS] query: query_facilities_by_year_state_city returned {} groups",
            rows.len()
        );
        Ok(rows)
    }

    /// Facility count per state, restricted to a single year.
    pub fn query_facilities_by_state(&self, year: i32) -> anyhow::Result<Vec<StateCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT state, COUNT(DISTINCT facility_name)
             FROM facilities
             WHERE year = ?1 AND state IS NOT NULL
             GROUP BY state
             ORDER BY state",
        )?;
        let rows = stmt
            .query_map(params![year], |row| {
                Ok(StateCount {
                    state: row.get(0)?,
                    facilities: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[HPS] query: query_facilities_by_state({}) returned {} groups",
            year,
            rows.len()
        );
        Ok(rows)
    }

    /// Row and distinct-facility counts per year, in load order.
    pub fn query_table_summary(&self) -> anyhow::Result<Vec<TableSummary>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year, COUNT(*), COUNT(DISTINCT facility_name)
             FROM facilities
             GROUP BY year
             ORDER BY MIN(row_id)",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(TableSummary {
                    year: row.get(0)?,
                    rows: row.get(1)?,
                    facilities: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
