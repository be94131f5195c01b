use serde::Deserialize;

use crate::config::{ORIGIN_LAT, ORIGIN_LON};

// ---------------------------------------------------------------------------
// Column catalogue
// ---------------------------------------------------------------------------

/// Every column of a [`HousingRecord`], source fields first, then the
/// derived coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Crim,
    Zn,
    Indus,
    Chas,
    Nox,
    Rm,
    Age,
    Dis,
    Rad,
    Tax,
    Ptratio,
    B,
    Lstat,
    Medv,
    Latitude,
    Longitude,
}

/// Name and human-readable description of a column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnInfo {
    pub column: Column,
    pub name: &'static str,
    pub description: &'static str,
}

pub const COLUMNS: [ColumnInfo; 16] = [
    ColumnInfo { column: Column::Crim, name: "crim", description: "Per capita crime rate by town" },
    ColumnInfo { column: Column::Zn, name: "zn", description: "Proportion of residential land zoned for lots over 25,000 sq. ft." },
    ColumnInfo { column: Column::Indus, name: "indus", description: "Proportion of non-retail business acres per town" },
    ColumnInfo { column: Column::Chas, name: "chas", description: "Charles River dummy variable (1 if tract bounds river; 0 otherwise)" },
    ColumnInfo { column: Column::Nox, name: "nox", description: "Nitrogen oxides concentration (parts per 10 million)" },
    ColumnInfo { column: Column::Rm, name: "rm", description: "Average number of rooms per dwelling" },
    ColumnInfo { column: Column::Age, name: "age", description: "Proportion of owner-occupied units built before 1940" },
    ColumnInfo { column: Column::Dis, name: "dis", description: "Weighted distances to five Boston employment centers" },
    ColumnInfo { column: Column::Rad, name: "rad", description: "Index of accessibility to radial highways" },
    ColumnInfo { column: Column::Tax, name: "tax", description: "Full-value property tax rate per $10,000" },
    ColumnInfo { column: Column::Ptratio, name: "ptratio", description: "Pupil-teacher ratio by town" },
    ColumnInfo { column: Column::B, name: "b", description: "1000(Bk - 0.63)^2, where Bk is the proportion of Black residents" },
    ColumnInfo { column: Column::Lstat, name: "lstat", description: "Percentage of lower status of the population" },
    ColumnInfo { column: Column::Medv, name: "medv", description: "Median value of owner-occupied homes in $1000s" },
    ColumnInfo { column: Column::Latitude, name: "latitude", description: "Placeholder latitude derived from the crime rate" },
    ColumnInfo { column: Column::Longitude, name: "longitude", description: "Placeholder longitude derived from the crime rate" },
];

impl Column {
    pub fn info(self) -> &'static ColumnInfo {
        // COLUMNS is declared in enum order.
        &COLUMNS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Whether the column comes from the CSV (as opposed to being derived).
    pub fn is_source(self) -> bool {
        !matches!(self, Column::Latitude | Column::Longitude)
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Column::Chas | Column::Rad)
    }
}

// ---------------------------------------------------------------------------
// HousingRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// The fourteen fields as they appear in the CSV.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SourceRow {
    pub crim: f64,
    pub zn: f64,
    pub indus: f64,
    pub chas: i64,
    pub nox: f64,
    pub rm: f64,
    pub age: f64,
    pub dis: f64,
    pub rad: i64,
    pub tax: f64,
    pub ptratio: f64,
    pub b: f64,
    pub lstat: f64,
    pub medv: f64,
}

/// Mock coordinates: a pure function of the crime rate, not a geocode.
pub fn derived_coordinates(crim: f64) -> (f64, f64) {
    (ORIGIN_LAT + crim / 100.0, ORIGIN_LON - crim / 100.0)
}

/// One housing tract plus its placeholder map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HousingRecord {
    /// Zero-based position in the source CSV.
    pub index: usize,
    pub source: SourceRow,
    pub latitude: f64,
    pub longitude: f64,
}

impl HousingRecord {
    pub fn new(index: usize, source: SourceRow) -> Self {
        let (latitude, longitude) = derived_coordinates(source.crim);
        HousingRecord {
            index,
            source,
            latitude,
            longitude,
        }
    }

    pub fn crim(&self) -> f64 {
        self.source.crim
    }

    pub fn rm(&self) -> f64 {
        self.source.rm
    }

    pub fn chas(&self) -> i64 {
        self.source.chas
    }

    pub fn medv(&self) -> f64 {
        self.source.medv
    }

    /// Numeric value of any column.
    pub fn value(&self, column: Column) -> f64 {
        let s = &self.source;
        match column {
            Column::Crim => s.crim,
            Column::Zn => s.zn,
            Column::Indus => s.indus,
            Column::Chas => s.chas as f64,
            Column::Nox => s.nox,
            Column::Rm => s.rm,
            Column::Age => s.age,
            Column::Dis => s.dis,
            Column::Rad => s.rad as f64,
            Column::Tax => s.tax,
            Column::Ptratio => s.ptratio,
            Column::B => s.b,
            Column::Lstat => s.lstat,
            Column::Medv => s.medv,
            Column::Latitude => self.latitude,
            Column::Longitude => self.longitude,
        }
    }

    /// Cell text for the raw-data table.
    pub fn display(&self, column: Column) -> String {
        if column.is_integer() {
            format!("{}", self.value(column) as i64)
        } else {
            format!("{}", self.value(column))
        }
    }
}

// ---------------------------------------------------------------------------
// HousingTable – an ordered set of records
// ---------------------------------------------------------------------------

/// A loaded dataset or a filtered view of one. Views are built fresh, the
/// records themselves are never edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HousingTable {
    records: Vec<HousingRecord>,
}

impl HousingTable {
    pub fn from_records(records: Vec<HousingRecord>) -> Self {
        HousingTable { records }
    }

    pub fn records(&self) -> &[HousingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed `(min, max)` of a column, `None` for an empty table.
    pub fn range(&self, column: Column) -> Option<(f64, f64)> {
        self.records.iter().map(|r| r.value(column)).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Distinct river-flag values in order of first appearance.
    pub fn river_values(&self) -> Vec<i64> {
        let mut values = Vec::new();
        for r in &self.records {
            if !values.contains(&r.chas()) {
                values.push(r.chas());
            }
        }
        values
    }
}
