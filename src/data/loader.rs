use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::{COLUMNS, HousingRecord, HousingTable, SourceRow};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while loading the dataset. All variants are
/// fatal to the load: there is no retry and no partial table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Download the CSV at `url` and parse it. Issues one blocking request per
/// call; nothing is cached.
pub fn fetch_dataset(url: &str) -> Result<HousingTable, LoadError> {
    let fetch_err = |source| LoadError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = reqwest::blocking::get(url).map_err(fetch_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status,
        });
    }
    let body = response.bytes().map_err(fetch_err)?;
    parse_csv(body.as_ref())
}

/// Parse a local copy of the dataset.
pub fn load_file(path: &Path) -> Result<HousingTable, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_csv(file)
}

/// CSV layout: header row, comma-delimited, one tract per line.
/// Columns are matched by header name; their order does not matter and
/// columns outside the fourteen known ones are ignored.
pub fn parse_csv<R: Read>(input: R) -> Result<HousingTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    if let Some(missing) = COLUMNS
        .iter()
        .filter(|c| c.column.is_source())
        .find(|c| !headers.iter().any(|h| h == c.name))
    {
        return Err(LoadError::MissingColumn(missing.name));
    }

    let records = reader
        .deserialize::<SourceRow>()
        .enumerate()
        .map(|(i, row)| row.map(|source| HousingRecord::new(i, source)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HousingTable::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Column;

    const HEADER: &str = "crim,zn,indus,chas,nox,rm,age,dis,rad,tax,ptratio,b,lstat,medv";

    #[test]
    fn parses_boston_rows() {
        let csv = format!(
            "{HEADER}\n\
             0.00632,18,2.31,0,0.538,6.575,65.2,4.09,1,296,15.3,396.9,4.98,24\n\
             0.02731,0,7.07,0,0.469,6.421,78.9,4.9671,2,242,17.8,396.9,9.14,21.6\n"
        );
        let table = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);

        let first = &table.records()[0];
        assert_eq!(first.crim(), 0.00632);
        assert_eq!(first.rm(), 6.575);
        assert_eq!(first.medv(), 24.0);
        assert_eq!(first.source.rad, 1);
        assert_eq!(first.latitude, 42.3601 + 0.00632 / 100.0);
        assert_eq!(table.records()[1].value(Column::Dis), 4.9671);
        assert_eq!(table.records()[1].index, 1);
    }

    #[test]
    fn columns_matched_by_name() {
        let csv = "medv,extra,lstat,b,ptratio,tax,rad,dis,age,rm,nox,chas,indus,zn,crim\n\
                   24,x,4.98,396.9,15.3,296,1,4.09,65.2,6.575,0.538,1,2.31,18,0.5\n";
        let table = parse_csv(csv.as_bytes()).unwrap();
        let r = &table.records()[0];
        assert_eq!(r.crim(), 0.5);
        assert_eq!(r.chas(), 1);
        assert_eq!(r.medv(), 24.0);
    }

    #[test]
    fn header_only_gives_empty_table() {
        let table = parse_csv(format!("{HEADER}\n").as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "crim,zn,indus,chas,nox,age,dis,rad,tax,ptratio,b,lstat,medv\n";
        match parse_csv(csv.as_bytes()) {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, "rm"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_cell_is_fatal() {
        let csv = format!(
            "{HEADER}\n\
             0.00632,18,2.31,0,0.538,six,65.2,4.09,1,296,15.3,396.9,4.98,24\n"
        );
        assert!(matches!(parse_csv(csv.as_bytes()), Err(LoadError::Csv(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_file(Path::new("/nonexistent/BostonHousing.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
