// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Airport dataset loading and normalization.
//!
//! The dataset is read once from an airport-codes CSV file, normalized into
//! [`AirportRecord`]s and then only ever read. Problems with individual rows
//! (bad coordinates, non-numeric elevations, undecodable lines) never abort
//! the load; they are collected into a [`LoadReport`] instead.

mod normalizer;

pub use normalizer::{normalize, parse_coordinates, parse_elevation, RawAirportRecord};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;

use normalizer::Normalizer;

/// Elevation (in feet) at or above which an airport counts as high altitude.
pub const HIGH_ALTITUDE_THRESHOLD_FT: f64 = 9000.0;

/// Continent value substituted when the source row has none.
pub const MISSING_CONTINENT: &str = "NA";

/// Columns that must be present in the CSV header.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "name",
    "type",
    "continent",
    "iso_country",
    "iso_region",
    "municipality",
    "elevation_ft",
    "coordinates",
];

/// Errors that prevent the dataset from being loaded at all.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Recoverable problem with a single row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowParseError {
    #[error("invalid coordinates: {value:?}")]
    InvalidCoordinates { value: String },

    #[error("invalid elevation: {value:?}")]
    InvalidElevation { value: String },

    #[error("malformed row: {message}")]
    Malformed { message: String },
}

/// A row-level problem together with the 1-based data row it occurred on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIssue {
    pub row: usize,
    pub error: RowParseError,
}

/// Summary of what happened while normalizing the raw rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of data rows encountered.
    pub rows_read: usize,
    /// Number of rows kept in the dataset.
    pub rows_kept: usize,
    /// Every row-level problem, in row order.
    pub issues: Vec<RowIssue>,
}

impl LoadReport {
    /// Number of rows dropped entirely because they could not be decoded.
    #[must_use]
    pub fn rows_dropped(&self) -> usize {
        self.rows_read - self.rows_kept
    }

    /// Check if normalization finished without any row-level problems.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// One normalized airport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub airport_type: String,
    pub continent: String,
    /// ISO country code.
    pub country: String,
    /// ISO sub-region code.
    pub region: String,
    pub municipality: Option<String>,
    pub elevation_ft: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// `None` when the elevation is unknown.
    pub is_high_altitude: Option<bool>,
}

impl AirportRecord {
    /// Latitude/longitude pair, if the coordinates were parseable.
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// The normalized, read-only airport dataset.
#[derive(Debug, Clone, Default)]
pub struct AirportDataset {
    records: Vec<AirportRecord>,
    report: LoadReport,
}

impl AirportDataset {
    pub(crate) fn new(records: Vec<AirportRecord>, report: LoadReport) -> Self {
        Self { records, report }
    }

    /// Load and normalize the dataset from a CSV file.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loading airports from {}", path.display());
        Self::load_from_reader(BufReader::new(file))
    }

    /// Load and normalize the dataset from any CSV source with a header row.
    pub fn load_from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|header| header == **column))
        {
            return Err(LoadError::MissingColumn(*missing));
        }

        let mut normalizer = Normalizer::default();
        for (index, result) in csv_reader.deserialize::<RawAirportRecord>().enumerate() {
            let row = index + 1;
            match result {
                Ok(raw) => normalizer.push(row, raw),
                Err(e) if e.is_io_error() => return Err(LoadError::Csv(e)),
                Err(e) => normalizer.reject(
                    row,
                    RowParseError::Malformed {
                        message: e.to_string(),
                    },
                ),
            }
        }

        let dataset = normalizer.finish();
        dataset.log_report();
        Ok(dataset)
    }

    fn log_report(&self) {
        let report = &self.report;
        info!("Loaded {} airports", report.rows_kept);

        if !report.is_clean() {
            warn!(
                "{} row issue(s) while loading airports ({} row(s) dropped)",
                report.issues.len(),
                report.rows_dropped()
            );
            for issue in &report.issues {
                debug!("Row {}: {}", issue.row, issue.error);
            }
        }
    }

    /// All normalized records, in source order.
    #[must_use]
    pub fn records(&self) -> &[AirportRecord] {
        &self.records
    }

    /// Row-level problems encountered during normalization.
    #[must_use]
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AirportRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a AirportDataset {
    type Item = &'a AirportRecord;
    type IntoIter = std::slice::Iter<'a, AirportRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const HEADER: &str =
        "ident,type,name,elevation_ft,continent,iso_country,iso_region,municipality,coordinates";

    /// Build a dataset from CSV data rows (without header).
    pub(crate) fn dataset_from_rows(rows: &[&str]) -> AirportDataset {
        let mut csv = String::from(HEADER);
        for row in rows {
            csv.push('\n');
            csv.push_str(row);
        }
        AirportDataset::load_from_reader(csv.as_bytes()).unwrap()
    }

    /// The three-airport scenario used throughout the query tests.
    pub(crate) fn sample_dataset() -> AirportDataset {
        dataset_from_rows(&[
            r#"KAAA,large_airport,High Field,9500,NA,US,US-CO,Denver,"-105.0,39.7""#,
            r#"KBBB,heliport,Harbor Pad,200,NA,US,US-CA,Oakland,"-122.2,37.8""#,
            r#"LFPG,large_airport,Charles de Gaulle,1000,EU,FR,FR-IDF,Paris,"2.55,49.0""#,
        ])
    }

    #[test]
    fn test_load_sample_dataset() {
        let dataset = sample_dataset();
        assert_eq!(dataset.len(), 3);
        assert!(dataset.report().is_clean());
        assert_eq!(dataset.report().rows_read, 3);

        let cdg = &dataset.records()[2];
        assert_eq!(cdg.name, "Charles de Gaulle");
        assert_eq!(cdg.airport_type, "large_airport");
        assert_eq!(cdg.country, "FR");
        assert_eq!(cdg.region, "FR-IDF");
        assert_eq!(cdg.municipality.as_deref(), Some("Paris"));
        assert_eq!(cdg.longitude, Some(2.55));
        assert_eq!(cdg.latitude, Some(49.0));
    }

    #[test]
    fn test_high_altitude_flags() {
        let dataset = sample_dataset();
        let flags: Vec<_> = dataset.iter().map(|r| r.is_high_altitude).collect();
        assert_eq!(flags, vec![Some(true), Some(false), Some(false)]);
    }

    #[test]
    fn test_missing_continent_becomes_sentinel() {
        let dataset = dataset_from_rows(&[r#"X1,small_airport,Nowhere,10,,US,US-TX,,"-97.0,30.0""#]);
        let record = &dataset.records()[0];
        assert_eq!(record.continent, MISSING_CONTINENT);
        assert_eq!(record.municipality, None);
    }

    #[test]
    fn test_bad_coordinates_row_is_kept_and_reported() {
        let dataset = dataset_from_rows(&[
            r#"X1,small_airport,Broken,10,EU,DE,DE-BY,Munich,"not,numbers""#,
            r#"X2,small_airport,Fine,20,EU,DE,DE-BY,Munich,"11.7,48.3""#,
        ]);

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].position(), None);
        assert_eq!(dataset.records()[1].position(), Some((48.3, 11.7)));
        assert_eq!(
            dataset.report().issues,
            vec![RowIssue {
                row: 1,
                error: RowParseError::InvalidCoordinates {
                    value: "not,numbers".to_string()
                },
            }]
        );
    }

    #[test]
    fn test_non_numeric_elevation_is_reported() {
        let dataset = dataset_from_rows(&[r#"X1,small_airport,Odd,unknown,EU,DE,DE-BY,,"11.7,48.3""#]);
        let record = &dataset.records()[0];
        assert_eq!(record.elevation_ft, None);
        assert_eq!(record.is_high_altitude, None);
        assert!(matches!(
            dataset.report().issues[0].error,
            RowParseError::InvalidElevation { ref value } if value == "unknown"
        ));
    }

    #[test]
    fn test_short_row_is_dropped() {
        let dataset = dataset_from_rows(&[
            "X1,small_airport,Short",
            r#"X2,small_airport,Fine,20,EU,DE,DE-BY,Munich,"11.7,48.3""#,
        ]);

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.report().rows_read, 2);
        assert_eq!(dataset.report().rows_dropped(), 1);
        assert_eq!(dataset.report().issues[0].row, 1);
        assert!(matches!(
            dataset.report().issues[0].error,
            RowParseError::Malformed { .. }
        ));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "name,type,continent,iso_country,iso_region,municipality,elevation_ft\n";
        let err = AirportDataset::load_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("coordinates")));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = AirportDataset::load_csv(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_load_csv_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("airports.csv");
        let contents = format!(
            "{HEADER}\nLFPG,large_airport,Charles de Gaulle,392,EU,FR,FR-IDF,Paris,\"2.55,49.0\"\n"
        );
        std::fs::write(&path, contents).unwrap();

        let dataset = AirportDataset::load_csv(&path).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].elevation_ft, Some(392.0));
    }
}
