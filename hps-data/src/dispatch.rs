//! Picks exactly one aggregation routine for the current selection.
//!
//! Only State and City have dedicated routines. Hospital Type and Hospital
//! Ownership fall through to the country-wide per-year routines; neither
//! column is grouped on.

use crate::aggregate;
use crate::chart::ChartSpec;
use crate::selection::{ChartType, GroupingDimension, Selection};
use hps_db::Database;

/// The six aggregation routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routine {
    YearStateCount,
    YearStatePercentage,
    YearStateCityCount,
    YearStateCityPercentage,
    YearCount,
    YearPercentage,
}

impl Routine {
    pub fn run(self, db: &Database) -> anyhow::Result<Vec<ChartSpec>> {
        match self {
            Routine::YearStateCount => aggregate::facilities_by_year_state_count(db),
            Routine::YearStatePercentage => aggregate::facilities_by_year_state_percentage(db),
            Routine::YearStateCityCount => aggregate::facilities_by_year_state_city_count(db),
            Routine::YearStateCityPercentage => {
                aggregate::facilities_by_year_state_city_percentage(db)
            }
            Routine::YearCount => aggregate::facilities_by_year_count(db),
            Routine::YearPercentage => aggregate::facilities_by_year_percentage(db),
        }
    }
}

/// Map (grouping, chart type) to its routine. `variables` is not consulted.
pub fn route(selection: &Selection) -> Routine {
    match (selection.grouping, selection.chart_type) {
        (GroupingDimension::State, ChartType::Count) => Routine::YearStateCount,
        (GroupingDimension::State, ChartType::Percentage) => Routine::YearStatePercentage,
        (GroupingDimension::City, ChartType::Count) => Routine::YearStateCityCount,
        (GroupingDimension::City, ChartType::Percentage) => Routine::YearStateCityPercentage,
        (_, ChartType::Count) => Routine::YearCount,
        (_, ChartType::Percentage) => Routine::YearPercentage,
    }
}

/// Run the routine for `selection` against the combined table.
pub fn render(db: &Database, selection: &Selection) -> anyhow::Result<Vec<ChartSpec>> {
    let routine = route(selection);
    log::debug!(
        "[HPS] dispatch: {} / {} -> {:?}",
        selection.grouping,
        selection.chart_type,
        routine
    );
    routine.run(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;
    use crate::selection::VariableChoice;

    fn db_2016_2017() -> Database {
        let csv = "\
Facility Name,City,State,Hospital Type,Hospital Ownership
CA One,FRESNO,CA,Acute Care Hospitals,Proprietary
CA Two,FRESNO,CA,Acute Care Hospitals,Proprietary
CA Three,OAKLAND,CA,Childrens,Government - State
TX One,DALLAS,TX,Acute Care Hospitals,Proprietary
TX Two,AUSTIN,TX,Critical Access Hospitals,Proprietary
";
        let db = Database::new().unwrap();
        db.load_year(2016, csv).unwrap();
        db.load_year(2017, csv).unwrap();
        db
    }

    #[test]
    fn route_covers_every_combination() {
        use ChartType::*;
        use GroupingDimension::*;
        let cases = [
            (State, Count, Routine::YearStateCount),
            (State, Percentage, Routine::YearStatePercentage),
            (City, Count, Routine::YearStateCityCount),
            (City, Percentage, Routine::YearStateCityPercentage),
            (HospitalType, Count, Routine::YearCount),
            (HospitalType, Percentage, Routine::YearPercentage),
            (HospitalOwnership, Count, Routine::YearCount),
            (HospitalOwnership, Percentage, Routine::YearPercentage),
        ];
        for (grouping, chart_type, expected) in cases {
            assert_eq!(route(&Selection::new(grouping, chart_type)), expected);
        }
    }

    #[test]
    fn route_ignores_variables() {
        let mut selection = Selection::new(GroupingDimension::State, ChartType::Count);
        let before = route(&selection);
        selection.toggle_variable(VariableChoice::City);
        selection.toggle_variable(VariableChoice::FacilityName);
        assert_eq!(route(&selection), before);
    }

    #[test]
    fn default_selection_renders_city_bars() {
        let charts = render(&db_2016_2017(), &Selection::default()).unwrap();
        assert_eq!(charts.len(), 1);
        assert_eq!(
            charts[0].title,
            "Number of Facilities by Year, State, and City (Counts)"
        );
    }

    #[test]
    fn state_count_scenario() {
        let selection = Selection::new(GroupingDimension::State, ChartType::Count);
        let charts = render(&db_2016_2017(), &selection).unwrap();
        match &charts[0].kind {
            ChartKind::Bar { bars, .. } => {
                for year in [2016, 2017] {
                    let ca = bars
                        .iter()
                        .find(|b| b.x == year && b.color.as_deref() == Some("CA"))
                        .unwrap();
                    let tx = bars
                        .iter()
                        .find(|b| b.x == year && b.color.as_deref() == Some("TX"))
                        .unwrap();
                    assert_eq!((ca.value, tx.value), (3, 2));
                }
            }
            ChartKind::Pie { .. } => panic!("expected a bar chart"),
        }
    }

    #[test]
    fn hospital_type_falls_through_to_country_wide() {
        let selection = Selection::new(GroupingDimension::HospitalType, ChartType::Count);
        let charts = render(&db_2016_2017(), &selection).unwrap();
        assert_eq!(
            charts[0].title,
            "Total Number of Facilities by Year (Country-wide - Counts)"
        );
        match &charts[0].kind {
            ChartKind::Bar { bars, color_label, .. } => {
                assert!(color_label.is_none());
                assert_eq!(bars.len(), 2);
                assert!(bars.iter().all(|b| b.value == 5));
            }
            ChartKind::Pie { .. } => panic!("expected a bar chart"),
        }
    }

    #[test]
    fn state_percentage_renders_pie_per_year() {
        let selection = Selection::new(GroupingDimension::State, ChartType::Percentage);
        let charts = render(&db_2016_2017(), &selection).unwrap();
        assert_eq!(charts.len(), 2);
        assert!(charts.iter().all(ChartSpec::is_pie));
    }

    #[test]
    fn empty_table_renders_without_error() {
        let db = Database::new().unwrap();
        for grouping in GroupingDimension::ALL {
            for chart_type in ChartType::ALL {
                let charts = render(&db, &Selection::new(grouping, chart_type)).unwrap();
                assert!(charts.iter().all(ChartSpec::is_empty));
            }
        }
    }
}
