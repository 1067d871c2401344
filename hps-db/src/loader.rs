//! CSV loading for populating the in-memory `facilities` table.
//!
//! Each yearly CMS patient-satisfaction file has a header row and many more
//! columns than the dashboard needs. Columns are located by header name;
//! everything else is ignored, including any `Year` column already present
//! (the caller's year stamp wins).
//!
//! # Required columns
//!
//! - `Facility Name`, `City`, `State` are aggregated and must be present.
//! - `Hospital Type`, `Hospital Ownership` are stored when present, `NULL`
//!   otherwise.

use crate::Database;
use hps_utils::error::DatasetError;
use rusqlite::params;

const FACILITY_NAME: &str = "Facility Name";
const CITY: &str = "City";
const STATE: &str = "State";
const HOSPITAL_TYPE: &str = "Hospital Type";
const HOSPITAL_OWNERSHIP: &str = "Hospital Ownership";

/// Field positions of the columns we keep, resolved from the header row.
struct ColumnIndex {
    facility_name: usize,
    city: usize,
    state: usize,
    hospital_type: Option<usize>,
    hospital_ownership: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(year: i32, headers: &csv::StringRecord) -> Result<Self, DatasetError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| DatasetError::MissingColumn {
                year,
                column: name.to_string(),
            })
        };

        Ok(Self {
            facility_name: require(FACILITY_NAME)?,
            city: require(CITY)?,
            state: require(STATE)?,
            hospital_type: find(HOSPITAL_TYPE),
            hospital_ownership: find(HOSPITAL_OWNERSHIP),
        })
    }
}

/// Cell texts read as missing values. Matched exactly, case and whitespace
/// included, the same set dataframe CSV readers treat as NA by default.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Field value as written, or `None` when the field is absent or an NA token.
///
/// Values are not trimmed: `"Mercy"` and `"Mercy "` are different facilities.
fn field(record: &csv::StringRecord, idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| record.get(i))
        .filter(|v| !NA_VALUES.iter().any(|na| na == v))
}

impl Database {
    /// Load one year's CSV text into the combined table, stamping every row
    /// with `year`. Returns the number of rows inserted.
    ///
    /// Rows are appended after anything already loaded, so calling this once
    /// per year in year order yields the concatenated table. The whole file is
    /// inserted in one transaction: on error nothing from this year is kept.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::MissingColumn`] if a required header is absent
    /// - [`DatasetError::MalformedRow`] if a record has more fields than the header
    /// - the underlying `csv` error for undecodable input
    ///
    /// # Example CSV
    /// ```text
    /// Facility ID,Facility Name,City,State,Hospital Type,Hospital Ownership
    /// 050002,ST ROSE HOSPITAL,HAYWARD,CA,Acute Care Hospitals,Voluntary non-profit - Private
    /// ```
    pub fn load_year(&self, year: i32, csv_data: &str) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.clone();
        let columns = ColumnIndex::from_headers(year, &headers)?;

        let tx = conn.transaction()?;
        let mut count = 0usize;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO facilities
                 (year, facility_name, city, state, hospital_type, hospital_ownership)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;

            for result in rdr.records() {
                let r = result?;
                if r.len() > headers.len() {
                    let line = r.position().map(|p| p.line()).unwrap_or(0);
                    return Err(DatasetError::MalformedRow { year, line }.into());
                }

                stmt.execute(params![
                    year,
                    field(&r, Some(columns.facility_name)),
                    field(&r, Some(columns.city)),
                    field(&r, Some(columns.state)),
                    field(&r, columns.hospital_type),
                    field(&r, columns.hospital_ownership),
                ])?;
                count += 1;
            }
        }
        tx.commit()?;

        log::info!("[HPS] loader: Loaded {} rows for {}", count, year);
        Ok(count)
    }
}
