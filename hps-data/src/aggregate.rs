//! The six aggregation routines behind the dashboard.
//!
//! | Grouping      | Count                          | Percentage                          |
//! |---------------|--------------------------------|-------------------------------------|
//! | State         | bars per (year, state)         | one pie per year, per-year totals   |
//! | City          | bars per (year, state, city)   | one pie over all years, by city     |
//! | anything else | bars per year                  | one pie by year, grand total        |
//!
//! Denominator scopes differ on purpose: the state pies are normalised per
//! year, the city and year pies against the grand total.

use crate::chart::{AggregateTable, BarSegment, ChartSpec, PieSlice};
use hps_db::models::{FacilityCount, Share};
use hps_db::Database;

const YEAR: &str = "Year";
const STATE: &str = "State";
const CITY: &str = "City";
const FACILITIES: &str = "Number of Facilities";
const PERCENTAGE: &str = "Percentage";

/// Pair every row with its share of the summed facility count.
///
/// An empty or all-zero scope gets 0.0 for every row rather than NaN.
pub fn with_percentages<T: FacilityCount>(rows: Vec<T>) -> Vec<Share<T>> {
    let total: i64 = rows.iter().map(FacilityCount::facilities).sum();
    rows.into_iter()
        .map(|group| {
            let percentage = if total > 0 {
                group.facilities() as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            Share { group, percentage }
        })
        .collect()
}

/// Collapse slices that share a label, summing value and percentage.
///
/// Output keeps the first-appearance order of each label.
pub fn merge_slices(slices: impl IntoIterator<Item = PieSlice>) -> Vec<PieSlice> {
    let mut merged: Vec<PieSlice> = Vec::new();
    for slice in slices {
        match merged.iter_mut().find(|m| m.label == slice.label) {
            Some(existing) => {
                existing.value += slice.value;
                existing.percentage += slice.percentage;
            }
            None => merged.push(slice),
        }
    }
    merged
}

/// Bars per (year, state), coloured by state.
pub fn facilities_by_year_state_count(db: &Database) -> anyhow::Result<Vec<ChartSpec>> {
    let rows = db.query_facilities_by_year_state()?;

    let mut table = AggregateTable::new(&[YEAR, STATE, FACILITIES]);
    let mut bars = Vec::with_capacity(rows.len());
    for r in rows {
        table.push(vec![r.year.to_string(), r.state.clone(), r.facilities.to_string()]);
        bars.push(BarSegment {
            x: r.year,
            color: Some(r.state),
            value: r.facilities,
        });
    }

    Ok(vec![ChartSpec::bar(
        "Number of Facilities by Year and State (Counts)",
        Some(STATE),
        bars,
        table,
    )])
}

/// One pie per year; each state's share of that year's facilities.
pub fn facilities_by_year_state_percentage(db: &Database) -> anyhow::Result<Vec<ChartSpec>> {
    let mut charts = Vec::new();

    for year in db.query_years()? {
        let shares = with_percentages(db.query_facilities_by_state(year)?);

        let mut table = AggregateTable::new(&[YEAR, STATE, FACILITIES, PERCENTAGE]);
        let mut slices = Vec::with_capacity(shares.len());
        for s in shares {
            table.push(vec![
                year.to_string(),
                s.group.state.clone(),
                s.group.facilities.to_string(),
                s.percentage.to_string(),
            ]);
            slices.push(PieSlice {
                label: s.group.state,
                value: s.group.facilities,
                percentage: s.percentage,
            });
        }

        charts.push(ChartSpec::pie(
            format!("Percentage of Facilities by State in {}", year),
            STATE,
            slices,
            table,
        ));
    }

    Ok(charts)
}

/// Bars per (year, state, city), coloured by city.
pub fn facilities_by_year_state_city_count(db: &Database) -> anyhow::Result<Vec<ChartSpec>> {
    let rows = db.query_facilities_by_year_state_city()?;

    let mut table = AggregateTable::new(&[YEAR, STATE, CITY, FACILITIES]);
    let mut bars = Vec::with_capacity(rows.len());
    for r in rows {
        table.push(vec![
            r.year.to_string(),
            r.state,
            r.city.clone(),
            r.facilities.to_string(),
        ]);
        bars.push(BarSegment {
            x: r.year,
            color: Some(r.city),
            value: r.facilities,
        });
    }

    Ok(vec![ChartSpec::bar(
        "Number of Facilities by Year, State, and City (Counts)",
        Some(CITY),
        bars,
        table,
    )])
}

/// A single pie by city over every (year, state, city) group.
///
/// Shares are against the grand total across all years and states. Slices
/// are labelled by city alone, so groups with the same city name merge.
pub fn facilities_by_year_state_city_percentage(
    db: &Database,
) -> anyhow::Result<Vec<ChartSpec>> {
    let shares = with_percentages(db.query_facilities_by_year_state_city()?);

    let mut table = AggregateTable::new(&[YEAR, STATE, CITY, FACILITIES, PERCENTAGE]);
    let mut slices = Vec::with_capacity(shares.len());
    for s in shares {
        table.push(vec![
            s.group.year.to_string(),
            s.group.state,
            s.group.city.clone(),
            s.group.facilities.to_string(),
            s.percentage.to_string(),
        ]);
        slices.push(PieSlice {
            label: s.group.city,
            value: s.group.facilities,
            percentage: s.percentage,
        });
    }

    Ok(vec![ChartSpec::pie(
        "Percentage of Facilities by City",
        CITY,
        merge_slices(slices),
        table,
    )])
}

/// Country-wide bars, one per year.
pub fn facilities_by_year_count(db: &Database) -> anyhow::Result<Vec<ChartSpec>> {
    let rows = db.query_facilities_by_year()?;

    let mut table = AggregateTable::new(&[YEAR, FACILITIES]);
    let mut bars = Vec::with_capacity(rows.len());
    for r in rows {
        table.push(vec![r.year.to_string(), r.facilities.to_string()]);
        bars.push(BarSegment {
            x: r.year,
            color: None,
            value: r.facilities,
        });
    }

    Ok(vec![ChartSpec::bar(
        "Total Number of Facilities by Year (Country-wide - Counts)",
        None,
        bars,
        table,
    )])
}

/// Country-wide pie with one slice per year.
pub fn facilities_by_year_percentage(db: &Database) -> anyhow::Result<Vec<ChartSpec>> {
    let shares = with_percentages(db.query_facilities_by_year()?);

    let mut table = AggregateTable::new(&[YEAR, FACILITIES, PERCENTAGE]);
    let mut slices = Vec::with_capacity(shares.len());
    for s in shares {
        table.push(vec![
            s.group.year.to_string(),
            s.group.facilities.to_string(),
            s.percentage.to_string(),
        ]);
        slices.push(PieSlice {
            label: s.group.year.to_string(),
            value: s.group.facilities,
            percentage: s.percentage,
        });
    }

    Ok(vec![ChartSpec::pie(
        "Percentage of Facilities by Year (Country-wide)",
        YEAR,
        slices,
        table,
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;
    use hps_db::models::StateCount;

    const TOLERANCE: f64 = 1e-9;

    /// Three CA and two TX facilities, the same in 2016 and 2017.
    const YEAR_CSV: &str = "\
Facility Name,City,State,Hospital Type,Hospital Ownership
Mercy,FRESNO,CA,Acute Care Hospitals,Proprietary
Kaiser,OAKLAND,CA,Acute Care Hospitals,Voluntary non-profit - Private
Alta Bates,OAKLAND,CA,Critical Access Hospitals,Government - Local
Baylor,DALLAS,TX,Acute Care Hospitals,Voluntary non-profit - Private
Parkland,DALLAS,TX,Acute Care Hospitals,Government - Hospital District or Authority
";

    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        db.load_year(2016, YEAR_CSV).unwrap();
        db.load_year(2017, YEAR_CSV).unwrap();
        db
    }

    fn bars(chart: &ChartSpec) -> &[BarSegment] {
        match &chart.kind {
            ChartKind::Bar { bars, .. } => bars,
            ChartKind::Pie { .. } => panic!("expected a bar chart"),
        }
    }

    fn slices(chart: &ChartSpec) -> &[PieSlice] {
        match &chart.kind {
            ChartKind::Pie { slices, .. } => slices,
            ChartKind::Bar { .. } => panic!("expected a pie chart"),
        }
    }

    fn percentage_sum(chart: &ChartSpec) -> f64 {
        slices(chart).iter().map(|s| s.percentage).sum()
    }

    #[test]
    fn with_percentages_sums_to_hundred() {
        let rows = vec![
            StateCount { state: "CA".into(), facilities: 3 },
            StateCount { state: "TX".into(), facilities: 2 },
        ];
        let shares = with_percentages(rows);
        assert!((shares[0].percentage - 60.0).abs() < TOLERANCE);
        assert!((shares[1].percentage - 40.0).abs() < TOLERANCE);
    }

    #[test]
    fn with_percentages_zero_total() {
        let rows = vec![StateCount { state: "NV".into(), facilities: 0 }];
        let shares = with_percentages(rows);
        assert_eq!(shares[0].percentage, 0.0);
        assert!(with_percentages(Vec::<StateCount>::new()).is_empty());
    }

    #[test]
    fn merge_slices_sums_repeated_labels() {
        let merged = merge_slices(vec![
            PieSlice { label: "OAKLAND".into(), value: 2, percentage: 20.0 },
            PieSlice { label: "FRESNO".into(), value: 1, percentage: 10.0 },
            PieSlice { label: "OAKLAND".into(), value: 3, percentage: 30.0 },
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].label, "OAKLAND");
        assert_eq!(merged[0].value, 5);
        assert!((merged[0].percentage - 50.0).abs() < TOLERANCE);
        assert_eq!(merged[1].label, "FRESNO");
    }

    #[test]
    fn state_count_bars_per_year() {
        let charts = facilities_by_year_state_count(&sample_db()).unwrap();
        assert_eq!(charts.len(), 1);
        let got: Vec<(i32, Option<&str>, i64)> = bars(&charts[0])
            .iter()
            .map(|b| (b.x, b.color.as_deref(), b.value))
            .collect();
        assert_eq!(
            got,
            vec![
                (2016, Some("CA"), 3),
                (2016, Some("TX"), 2),
                (2017, Some("CA"), 3),
                (2017, Some("TX"), 2),
            ]
        );
        assert_eq!(charts[0].table.columns, vec!["Year", "State", "Number of Facilities"]);
    }

    #[test]
    fn state_percentage_one_pie_per_year() {
        let db = sample_db();
        db.load_year(2017, "Facility Name,City,State\nNew,RENO,NV\n").unwrap();

        let charts = facilities_by_year_state_percentage(&db).unwrap();
        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].title, "Percentage of Facilities by State in 2016");
        assert_eq!(charts[1].title, "Percentage of Facilities by State in 2017");

        for chart in &charts {
            assert!((percentage_sum(chart) - 100.0).abs() < 1e-6);
        }

        let ca_2016 = &slices(&charts[0])[0];
        assert_eq!(ca_2016.label, "CA");
        assert!((ca_2016.percentage - 60.0).abs() < TOLERANCE);

        let ca_2017 = &slices(&charts[1])[0];
        assert!((ca_2017.percentage - 50.0).abs() < TOLERANCE);
    }

    #[test]
    fn city_count_bars_coloured_by_city() {
        let charts = facilities_by_year_state_city_count(&sample_db()).unwrap();
        let chart = &charts[0];
        match &chart.kind {
            ChartKind::Bar { color_label, .. } => assert_eq!(color_label.as_deref(), Some("City")),
            ChartKind::Pie { .. } => panic!("expected a bar chart"),
        }
        assert_eq!(bars(chart).len(), 6);
        assert_eq!(chart.table.rows.len(), 6);
    }

    #[test]
    fn city_percentage_uses_grand_total_and_merges_labels() {
        let charts = facilities_by_year_state_city_percentage(&sample_db()).unwrap();
        assert_eq!(charts.len(), 1);
        let chart = &charts[0];

        // Six (year, state, city) groups collapse into three city slices
        assert_eq!(chart.table.rows.len(), 6);
        let labels: Vec<&str> = slices(chart).iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["FRESNO", "OAKLAND", "DALLAS"]);

        let oakland = &slices(chart)[1];
        assert_eq!(oakland.value, 4);
        assert!((oakland.percentage - 40.0).abs() < 1e-6);
        assert!((percentage_sum(chart) - 100.0).abs() < 1e-6);
    }

    #[test]
    fn year_count_single_bar_per_year() {
        let charts = facilities_by_year_count(&sample_db()).unwrap();
        let got: Vec<(i32, Option<String>, i64)> = bars(&charts[0])
            .iter()
            .map(|b| (b.x, b.color.clone(), b.value))
            .collect();
        assert_eq!(got, vec![(2016, None, 5), (2017, None, 5)]);
    }

    #[test]
    fn year_percentage_slices_labelled_by_year() {
        let charts = facilities_by_year_percentage(&sample_db()).unwrap();
        let chart = &charts[0];
        let labels: Vec<&str> = slices(chart).iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["2016", "2017"]);
        assert!((slices(chart)[0].percentage - 50.0).abs() < TOLERANCE);
        assert!((percentage_sum(chart) - 100.0).abs() < 1e-6);
    }

    /// Leading `width` columns of every table row across `charts`.
    fn table_keys(charts: &[ChartSpec], width: usize) -> Vec<Vec<String>> {
        charts
            .iter()
            .flat_map(|c| c.table.rows.iter().map(move |r| r[..width].to_vec()))
            .collect()
    }

    /// States differ between years so per-year and combined queries can diverge.
    fn uneven_db() -> Database {
        let db = Database::new().unwrap();
        db.load_year(
            2016,
            "Facility Name,City,State\nMercy,FRESNO,CA\nBaylor,DALLAS,TX\n",
        )
        .unwrap();
        db.load_year(
            2017,
            "Facility Name,City,State\nMercy,FRESNO,CA\nBellevue,NEW YORK,NY\nMount Sinai,NEW YORK,NY\n",
        )
        .unwrap();
        db
    }

    #[test]
    fn percentage_keeps_count_grouping_keys() {
        for db in [sample_db(), uneven_db()] {
            let count = facilities_by_year_state_city_count(&db).unwrap();
            let pct = facilities_by_year_state_city_percentage(&db).unwrap();
            assert_eq!(table_keys(&count, 3), table_keys(&pct, 3));

            let count = facilities_by_year_state_count(&db).unwrap();
            let pct = facilities_by_year_state_percentage(&db).unwrap();
            assert_eq!(table_keys(&count, 2), table_keys(&pct, 2));

            let count = facilities_by_year_count(&db).unwrap();
            let pct = facilities_by_year_percentage(&db).unwrap();
            assert_eq!(table_keys(&count, 1), table_keys(&pct, 1));
        }
    }

    #[test]
    fn state_percentage_keys_follow_each_year() {
        let pct = facilities_by_year_state_percentage(&uneven_db()).unwrap();
        assert_eq!(
            table_keys(&pct, 2),
            vec![
                vec!["2016".to_string(), "CA".to_string()],
                vec!["2016".to_string(), "TX".to_string()],
                vec!["2017".to_string(), "CA".to_string()],
                vec!["2017".to_string(), "NY".to_string()],
            ]
        );
    }

    #[test]
    fn duplicate_rows_do_not_change_counts() {
        let db = sample_db();
        let before = facilities_by_year_state_count(&db).unwrap();
        db.load_year(2016, "Facility Name,City,State\nMercy,FRESNO,CA\n").unwrap();
        let after = facilities_by_year_state_count(&db).unwrap();
        assert_eq!(bars(&before[0]), bars(&after[0]));
    }

    #[test]
    fn empty_table_renders_empty_charts() {
        let db = Database::new().unwrap();
        for chart in facilities_by_year_state_count(&db).unwrap() {
            assert!(chart.is_empty());
        }
        assert!(facilities_by_year_state_percentage(&db).unwrap().is_empty());
        assert!(facilities_by_year_state_city_count(&db).unwrap()[0].is_empty());
        assert!(facilities_by_year_state_city_percentage(&db).unwrap()[0].is_empty());
        assert!(facilities_by_year_count(&db).unwrap()[0].is_empty());
        assert!(facilities_by_year_percentage(&db).unwrap()[0].is_empty());
    }
}
