//! `inspect`: per-year shape of the combined table.

use hps_data::loader::load_combined_table;
use log::info;
use std::io::Write;
use std::path::Path;

/// Write `Year,Rows,Facilities` for every loaded year.
pub fn run_inspect(data_dir: &Path, years: &[i32], out: &mut impl Write) -> anyhow::Result<()> {
    let db = load_combined_table(data_dir, years)?;
    let summary = db.query_table_summary()?;

    let mut wtr = csv::Writer::from_writer(&mut *out);
    wtr.write_record(["Year", "Rows", "Facilities"])?;
    for s in &summary {
        wtr.write_record([s.year.to_string(), s.rows.to_string(), s.facilities.to_string()])?;
    }
    wtr.flush()?;

    info!("Combined table: {} rows", db.row_count()?);
    Ok(())
}
