//! `summary`: print the aggregate tables behind a dashboard selection.
//!
//! Output is one block per chart: a `# <title>` line followed by the
//! aggregate table as CSV, blocks separated by a blank line.

use hps_data::chart::ChartSpec;
use hps_data::dispatch;
use hps_data::loader::load_combined_table;
use hps_data::selection::{ChartType, GroupingDimension, Selection};
use log::info;
use std::io::Write;
use std::path::Path;

pub fn run_summary(
    data_dir: &Path,
    years: &[i32],
    group: GroupingDimension,
    chart: ChartType,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let db = load_combined_table(data_dir, years)?;
    let selection = Selection::new(group, chart);
    let route = dispatch::route(&selection);
    let charts = dispatch::render(&db, &selection)?;

    info!(
        "{} / {} -> {:?}: {} chart(s)",
        group,
        chart,
        route,
        charts.len()
    );

    for (i, spec) in charts.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_chart(spec, out)?;
    }
    Ok(())
}

fn write_chart(spec: &ChartSpec, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "# {}", spec.title)?;
    let mut wtr = csv::Writer::from_writer(&mut *out);
    wtr.write_record(&spec.table.columns)?;
    for row in &spec.table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
