//! Command implementations for the HPS CLI.
//!
//! Both subcommands load the combined table the same way the dashboard does
//! and write plain CSV to stdout.

use clap::{Args, Subcommand};
use hps_data::selection::{ChartType, GroupingDimension};
use hps_utils::dataset::{parse_years, DATA_DIR, YEARS};
use std::path::PathBuf;

pub mod inspect;
pub mod summary;

/// Where to read the yearly CSVs from.
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Directory containing cms_hospital_patient_satisfaction_<year>.csv files
    #[arg(short = 'd', long, default_value = DATA_DIR)]
    pub data_dir: PathBuf,

    /// Comma separated years to load, in order (defaults to the built-in list)
    #[arg(short = 'y', long)]
    pub years: Option<String>,
}

impl DatasetArgs {
    /// Years from `--years`, or the built-in list.
    pub fn years(&self) -> anyhow::Result<Vec<i32>> {
        match &self.years {
            Some(s) => Ok(parse_years(s)?),
            None => Ok(YEARS.to_vec()),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the aggregate tables behind a dashboard selection
    Summary {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Grouping dimension: city, state, hospital-type, hospital-ownership
        #[arg(short = 'g', long, default_value = "city")]
        group: GroupingDimension,

        /// Chart type: count or percentage
        #[arg(short = 'c', long, default_value = "count")]
        chart: ChartType,
    },

    /// Print per-year row and distinct facility counts of the combined table
    Inspect {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Summary {
            dataset,
            group,
            chart,
        } => summary::run_summary(&dataset.data_dir, &dataset.years()?, group, chart, &mut out),
        Command::Inspect { dataset } => {
            inspect::run_inspect(&dataset.data_dir, &dataset.years()?, &mut out)
        }
    }
}
