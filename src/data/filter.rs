use super::model::{Column, HousingRecord, HousingTable};

// ---------------------------------------------------------------------------
// Filter parameters: one value per sidebar widget
// ---------------------------------------------------------------------------

/// Current widget values. `river == None` means "no selection".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Rows kept have `rm` strictly greater than this.
    pub min_rooms: f64,
    /// Rows kept have `crim` strictly less than this.
    pub max_crime: f64,
    /// Rows kept have `chas` equal to this, when set.
    pub river: Option<i64>,
}

impl FilterParams {
    /// Slider defaults: both sliders start at the minimum of their range and
    /// the selector starts unset. With strict comparisons this already drops
    /// the rows sitting at the minimum room count, and every row until the
    /// crime slider is moved off its minimum.
    pub fn initial(table: &HousingTable) -> Self {
        FilterParams {
            min_rooms: table.range(Column::Rm).map_or(0.0, |(lo, _)| lo),
            max_crime: table.range(Column::Crim).map_or(0.0, |(lo, _)| lo),
            river: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Row predicates
// ---------------------------------------------------------------------------

fn rooms_above(min_rooms: f64) -> impl Fn(&HousingRecord) -> bool {
    move |r| r.rm() > min_rooms
}

fn crime_below(max_crime: f64) -> impl Fn(&HousingRecord) -> bool {
    move |r| r.crim() < max_crime
}

fn river_matches(river: Option<i64>) -> impl Fn(&HousingRecord) -> bool {
    move |r| river.map_or(true, |v| r.chas() == v)
}

fn retain(table: &HousingTable, keep: impl Fn(&HousingRecord) -> bool) -> HousingTable {
    HousingTable::from_records(table.records().iter().copied().filter(|r| keep(r)).collect())
}

/// Narrow `table` by the rooms, crime and river predicates, in that order.
/// The input is left untouched; the result keeps the input's row order.
pub fn filter(table: &HousingTable, params: &FilterParams) -> HousingTable {
    let by_rooms = retain(table, rooms_above(params.min_rooms));
    let by_crime = retain(&by_rooms, crime_below(params.max_crime));
    if params.river.is_some() {
        retain(&by_crime, river_matches(params.river))
    } else {
        by_crime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::row;

    fn sample() -> HousingTable {
        HousingTable::from_records(vec![
            row(0.00632, 0, 6.575, 24.0),
            row(0.02731, 0, 6.421, 21.6),
            row(0.02729, 1, 7.185, 34.7),
            row(0.03237, 0, 6.998, 33.4),
            row(0.06905, 1, 7.147, 36.2),
            row(8.98296, 1, 6.212, 17.8),
            row(88.9762, 0, 3.561, 10.4),
            row(0.01501, 0, 3.561, 50.0),
        ])
    }

    fn params(min_rooms: f64, max_crime: f64, river: Option<i64>) -> FilterParams {
        FilterParams { min_rooms, max_crime, river }
    }

    #[test]
    fn rooms_filter_is_strict() {
        let table = sample();
        let out = filter(&table, &params(6.575, f64::INFINITY, None));
        assert!(out.records().iter().all(|r| r.rm() > 6.575));
        let expected: Vec<_> = table.records().iter().filter(|r| r.rm() > 6.575).copied().collect();
        assert_eq!(out.records(), expected.as_slice());
    }

    #[test]
    fn crime_filter_is_strict() {
        let table = sample();
        let out = filter(&table, &params(f64::NEG_INFINITY, 0.02731, None));
        let crimes: Vec<f64> = out.records().iter().map(|r| r.crim()).collect();
        assert_eq!(crimes, vec![0.00632, 0.02729, 0.01501]);
    }

    #[test]
    fn unset_river_is_identity() {
        let table = sample();
        let out = filter(&table, &params(f64::NEG_INFINITY, f64::INFINITY, None));
        assert_eq!(out, table);
    }

    #[test]
    fn river_selection_keeps_matching_rows() {
        let table = sample();
        let loose = filter(&table, &params(5.0, 10.0, None));
        let out = filter(&table, &params(5.0, 10.0, Some(1)));
        assert!(!out.is_empty());
        assert!(out.records().iter().all(|r| r.chas() == 1));
        let expected: Vec<_> = loose.records().iter().filter(|r| r.chas() == 1).copied().collect();
        assert_eq!(out.records(), expected.as_slice());
    }

    #[test]
    fn predicates_commute() {
        let table = sample();
        let p = params(6.3, 1.0, Some(0));
        let sequential = filter(&table, &p);
        let conjunction: Vec<_> = table
            .records()
            .iter()
            .filter(|r| r.chas() == 0 && r.crim() < 1.0 && r.rm() > 6.3)
            .copied()
            .collect();
        assert_eq!(sequential.records(), conjunction.as_slice());

        let reversed = retain(
            &retain(&retain(&table, river_matches(p.river)), crime_below(p.max_crime)),
            rooms_above(p.min_rooms),
        );
        assert_eq!(reversed, sequential);
    }

    #[test]
    fn minimum_rooms_and_maximum_crime_drop_only_minimum_rooms() {
        let table = sample();
        let (rm_min, _) = table.range(Column::Rm).unwrap();
        let (_, crim_max) = table.range(Column::Crim).unwrap();
        let out = filter(&table, &params(rm_min, crim_max, None));

        // The maximum-crime row also sits at the minimum room count, so the
        // result is exactly the rows above the minimum room count.
        assert!(out.records().iter().all(|r| r.rm() > rm_min));
        assert!(out.records().iter().all(|r| r.crim() < crim_max));
        let expected: Vec<_> = table.records().iter().filter(|r| r.rm() > rm_min).copied().collect();
        assert_eq!(out.records(), expected.as_slice());
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn maximum_crime_bound_still_drops_the_maximum_row() {
        let table = HousingTable::from_records(vec![
            row(0.1, 0, 5.0, 20.0),
            row(0.5, 0, 6.0, 25.0),
            row(9.0, 1, 7.0, 30.0),
        ]);
        let (rm_min, _) = table.range(Column::Rm).unwrap();
        let (_, crim_max) = table.range(Column::Crim).unwrap();
        let out = filter(&table, &params(rm_min, crim_max, None));

        // Strict `<` at the slider's upper end excludes the row sitting on it.
        let crimes: Vec<f64> = out.records().iter().map(|r| r.crim()).collect();
        assert_eq!(crimes, vec![0.5]);
    }

    #[test]
    fn initial_params_use_range_minimums() {
        let table = sample();
        let p = FilterParams::initial(&table);
        assert_eq!(p.min_rooms, 3.561);
        assert_eq!(p.max_crime, 0.00632);
        assert_eq!(p.river, None);
        // Strict crime bound at its minimum keeps nothing.
        assert!(filter(&table, &p).is_empty());
    }

    #[test]
    fn unsatisfiable_thresholds_give_empty_table() {
        let table = sample();
        let out = filter(&table, &params(7.0, 0.01, None));
        assert!(out.is_empty());
        assert!(filter(&HousingTable::default(), &params(0.0, 1.0, Some(1))).is_empty());
    }

    #[test]
    fn source_table_is_not_modified() {
        let table = sample();
        let before = table.clone();
        let _ = filter(&table, &params(6.0, 1.0, Some(1)));
        assert_eq!(table, before);
    }
}
