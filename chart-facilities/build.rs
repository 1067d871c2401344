//! Build script for chart-facilities.
//!
//! Copies each configured year's patient-satisfaction CSV into `OUT_DIR` and
//! generates `datasets.rs`, a `DATASETS` slice embedding them via
//! `include_str!`. A missing file is embedded as `None` so the dashboard can
//! report it at startup instead of failing the build.

use hps_utils::dataset::{csv_file_name, csv_path, DATA_DIR, YEARS};
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let data_dir = Path::new("..").join(DATA_DIR);

    let mut generated = String::from("pub const DATASETS: &[EmbeddedDataset] = &[\n");

    for &year in YEARS {
        let src = csv_path(&data_dir, year);
        let name = csv_file_name(year);
        let dest = Path::new(&out_dir).join(&name);

        if src.exists() {
            fs::copy(&src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src.display(), dest.display(), e);
            });
            writeln!(
                generated,
                "    EmbeddedDataset {{ year: {}, csv: Some(include_str!(concat!(env!(\"OUT_DIR\"), \"/{}\"))) }},",
                year, name
            )
            .unwrap();
        } else {
            println!(
                "cargo:warning=Dataset {} not found, the dashboard will report it as missing",
                src.display()
            );
            writeln!(generated, "    EmbeddedDataset {{ year: {}, csv: None }},", year).unwrap();
        }
        println!("cargo:rerun-if-changed={}", src.display());
    }

    generated.push_str("];\n");
    fs::write(Path::new(&out_dir).join("datasets.rs"), generated).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
