//! Builds the combined facility table from the yearly CSV files.
//!
//! Two entry points share [`Database::load_year`]:
//! - [`load_combined_table`] reads `<dir>/cms_hospital_patient_satisfaction_<year>.csv`
//!   from disk (CLI, native tests).
//! - [`load_embedded`] takes CSV text compiled into the binary (WASM dashboard).
//!
//! Years are loaded in the order given. Any missing or malformed file aborts
//! the whole load; there is no partial table.

use anyhow::Context;
use hps_db::Database;
use hps_utils::dataset::{csv_path, DATA_DIR};
use hps_utils::error::DatasetError;
use std::path::Path;

/// One year's CSV as embedded by a build script.
///
/// `csv` is `None` when the file was absent at build time.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedDataset {
    pub year: i32,
    pub csv: Option<&'static str>,
}

/// Read every configured year from `dir` into a fresh database.
pub fn load_combined_table(dir: impl AsRef<Path>, years: &[i32]) -> anyhow::Result<Database> {
    let dir = dir.as_ref();
    let db = Database::new()?;

    for &year in years {
        let path = csv_path(dir, year);
        if !path.exists() {
            return Err(DatasetError::MissingFile { year, path }.into());
        }
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        db.load_year(year, &text)
            .with_context(|| format!("Failed to load {}", path.display()))?;
    }

    log::info!(
        "[HPS] loader: Combined table has {} rows from {} years in {}",
        db.row_count()?,
        years.len(),
        dir.display()
    );
    Ok(db)
}

/// Load CSV text embedded at compile time, in slice order.
pub fn load_embedded(datasets: &[EmbeddedDataset]) -> anyhow::Result<Database> {
    let db = Database::new()?;

    for dataset in datasets {
        let csv = dataset.csv.ok_or_else(|| DatasetError::MissingFile {
            year: dataset.year,
            path: csv_path(DATA_DIR, dataset.year),
        })?;
        db.load_year(dataset.year, csv)?;
    }

    log::info!(
        "[HPS] loader: Combined table has {} rows from {} embedded years",
        db.row_count()?,
        datasets.len()
    );
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hps_utils::dataset::csv_file_name;
    use std::fs;

    const CSV_2016: &str = "\
Facility Name,City,State,Hospital Type,Hospital Ownership
Mercy,FRESNO,CA,Acute Care Hospitals,Proprietary
Kaiser,OAKLAND,CA,Acute Care Hospitals,Voluntary non-profit - Private
Baylor,DALLAS,TX,Acute Care Hospitals,Voluntary non-profit - Private
";

    const CSV_2017: &str = "\
Facility Name,City,State,Hospital Type,Hospital Ownership
Mercy,FRESNO,CA,Acute Care Hospitals,Proprietary
Baylor,DALLAS,TX,Acute Care Hospitals,Voluntary non-profit - Private
";

    fn write_year(dir: &Path, year: i32, contents: &str) {
        fs::write(dir.join(csv_file_name(year)), contents).unwrap();
    }

    #[test]
    fn load_combined_table_concatenates_years() {
        let dir = tempfile::tempdir().unwrap();
        write_year(dir.path(), 2016, CSV_2016);
        write_year(dir.path(), 2017, CSV_2017);

        let db = load_combined_table(dir.path(), &[2016, 2017]).unwrap();
        assert_eq!(db.row_count().unwrap(), 5);

        let summary = db.query_table_summary().unwrap();
        let per_year: Vec<(i32, i64)> = summary.iter().map(|s| (s.year, s.rows)).collect();
        assert_eq!(per_year, vec![(2016, 3), (2017, 2)]);
    }

    #[test]
    fn load_combined_table_only_reads_configured_years() {
        let dir = tempfile::tempdir().unwrap();
        write_year(dir.path(), 2016, CSV_2016);
        write_year(dir.path(), 2017, CSV_2017);

        let db = load_combined_table(dir.path(), &[2017]).unwrap();
        assert_eq!(db.query_years().unwrap(), vec![2017]);
        assert_eq!(db.row_count().unwrap(), 2);
    }

    #[test]
    fn load_combined_table_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_year(dir.path(), 2016, CSV_2016);

        let err = load_combined_table(dir.path(), &[2016, 2017])
            .err()
            .expect("missing 2017 file should fail");
        match err.downcast_ref::<DatasetError>() {
            Some(DatasetError::MissingFile { year, path }) => {
                assert_eq!(*year, 2017);
                assert!(path.ends_with(csv_file_name(2017)));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn load_combined_table_reports_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        write_year(dir.path(), 2016, "Facility Name,City\nMercy,FRESNO\n");

        let err = load_combined_table(dir.path(), &[2016])
            .err()
            .expect("missing State column should fail");
        assert!(matches!(
            err.downcast_ref::<DatasetError>(),
            Some(DatasetError::MissingColumn { year: 2016, .. })
        ));
    }

    #[test]
    fn load_combined_table_empty_year_list() {
        let dir = tempfile::tempdir().unwrap();
        let db = load_combined_table(dir.path(), &[]).unwrap();
        assert_eq!(db.row_count().unwrap(), 0);
    }

    #[test]
    fn bundled_sample_data_loads() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join(DATA_DIR);
        let db = load_combined_table(&dir, hps_utils::dataset::YEARS).unwrap();

        let summary = db.query_table_summary().unwrap();
        let shape: Vec<(i32, i64, i64)> = summary
            .iter()
            .map(|s| (s.year, s.rows, s.facilities))
            .collect();
        // ST ROSE HOSPITAL is listed twice in 2016
        assert_eq!(shape, vec![(2016, 10, 9), (2017, 8, 8)]);
    }

    #[test]
    fn load_embedded_uses_slice_order() {
        let datasets = [
            EmbeddedDataset { year: 2016, csv: Some(CSV_2016) },
            EmbeddedDataset { year: 2017, csv: Some(CSV_2017) },
        ];
        let db = load_embedded(&datasets).unwrap();
        assert_eq!(db.query_years().unwrap(), vec![2016, 2017]);
        assert_eq!(db.row_count().unwrap(), 5);
    }

    #[test]
    fn load_embedded_missing_year_is_fatal() {
        let datasets = [
            EmbeddedDataset { year: 2016, csv: Some(CSV_2016) },
            EmbeddedDataset { year: 2017, csv: None },
        ];
        let err = load_embedded(&datasets).err().expect("should fail");
        assert!(matches!(
            err.downcast_ref::<DatasetError>(),
            Some(DatasetError::MissingFile { year: 2017, .. })
        ));
    }
}
