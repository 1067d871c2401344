//! Shared configuration and error types for HPS crates.
//!
//! Kept free of heavy dependencies so build scripts can pull it in as a
//! `[build-dependencies]` entry.

/// Where the yearly patient-satisfaction CSVs live and which years to load.
pub mod dataset {
    use std::path::{Path, PathBuf};

    /// Directory holding the yearly CSV files, relative to the working directory.
    pub const DATA_DIR: &str = "data";

    /// Years loaded into the combined table, in load order.
    pub const YEARS: &[i32] = &[2016, 2017];

    /// Common prefix of every yearly file name.
    pub const FILE_PREFIX: &str = "cms_hospital_patient_satisfaction_";

    /// File name for one year, e.g. `cms_hospital_patient_satisfaction_2016.csv`.
    pub fn csv_file_name(year: i32) -> String {
        format!("{}{}.csv", FILE_PREFIX, year)
    }

    /// Full path of the CSV for `year` under `dir`.
    pub fn csv_path(dir: impl AsRef<Path>, year: i32) -> PathBuf {
        dir.as_ref().join(csv_file_name(year))
    }

    /// Parse a comma separated year list such as `"2016,2017"`.
    ///
    /// Blank entries are skipped so `""` yields an empty list.
    pub fn parse_years(s: &str) -> Result<Vec<i32>, crate::error::DatasetError> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i32>()
                    .map_err(|_| crate::error::DatasetError::InvalidYear(part.to_string()))
            })
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_csv_file_name() {
            assert_eq!(
                csv_file_name(2016),
                "cms_hospital_patient_satisfaction_2016.csv"
            );
        }

        #[test]
        fn test_csv_path_joins_dir() {
            let path = csv_path("data", 2017);
            assert_eq!(
                path,
                Path::new("data").join("cms_hospital_patient_satisfaction_2017.csv")
            );
        }

        #[test]
        fn test_parse_years() {
            assert_eq!(parse_years("2016, 2017").unwrap(), vec![2016, 2017]);
            assert!(parse_years("").unwrap().is_empty());
            assert!(parse_years("2016,abc").is_err());
        }

        #[test]
        fn test_default_years_are_ordered() {
            assert!(YEARS.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;
    use std::path::PathBuf;

    /// Failures while reading the yearly datasets.
    #[derive(Debug, Clone, PartialEq)]
    pub enum DatasetError {
        /// The CSV for a configured year does not exist.
        MissingFile { year: i32, path: PathBuf },
        /// A column the aggregations depend on is absent from the header.
        MissingColumn { year: i32, column: String },
        /// A record has more fields than the header row.
        MalformedRow { year: i32, line: u64 },
        /// A year list entry is not an integer.
        InvalidYear(String),
    }

    impl fmt::Display for DatasetError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                DatasetError::MissingFile { year, path } => {
                    write!(f, "Dataset for {} not found at {}", year, path.display())
                }
                DatasetError::MissingColumn { year, column } => {
                    write!(f, "Dataset for {} has no '{}' column", year, column)
                }
                DatasetError::MalformedRow { year, line } => {
                    write!(
                        f,
                        "Dataset for {} has too many fields on line {}",
                        year, line
                    )
                }
                DatasetError::InvalidYear(s) => write!(f, "Invalid year: {}", s),
            }
        }
    }

    impl std::error::Error for DatasetError {}

    /// An unrecognised selection value (grouping dimension, chart type, variable).
    #[derive(Debug, Clone, PartialEq)]
    pub struct SelectionError(pub String);

    impl fmt::Display for SelectionError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Selection error: {}", self.0)
        }
    }

    impl std::error::Error for SelectionError {}
}
