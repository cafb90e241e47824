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

//! Raw row decoding and per-row normalization.

use serde::Deserialize;

use super::{
    AirportDataset, AirportRecord, LoadReport, RowIssue, RowParseError,
    HIGH_ALTITUDE_THRESHOLD_FT, MISSING_CONTINENT,
};

/// One airport row exactly as it appears in the source CSV.
///
/// Columns not listed here (ident, gps_code, iata_code, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAirportRecord {
    #[serde(rename = "name")]
    pub name: String,

    #[serde(rename = "type")]
    pub airport_type: String,

    #[serde(rename = "continent")]
    pub continent: Option<String>,

    #[serde(rename = "iso_country")]
    pub country: String,

    #[serde(rename = "iso_region")]
    pub region: String,

    #[serde(rename = "municipality")]
    pub municipality: Option<String>,

    /// Kept textual so non-numeric values can be reported instead of failing the row.
    #[serde(rename = "elevation_ft")]
    pub elevation_ft: Option<String>,

    /// `"<longitude>,<latitude>"`
    #[serde(rename = "coordinates")]
    pub coordinates: Option<String>,
}

/// Parse a `"<longitude>,<latitude>"` coordinate string.
///
/// Returns `(longitude, latitude)` in the order they are stored.
pub fn parse_coordinates(value: &str) -> Result<(f64, f64), RowParseError> {
    let invalid = || RowParseError::InvalidCoordinates {
        value: value.to_string(),
    };

    let mut parts = value.split(',');
    let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let longitude = parse_finite(first).ok_or_else(invalid)?;
    let latitude = parse_finite(second).ok_or_else(invalid)?;
    Ok((longitude, latitude))
}

/// Parse an elevation in feet. Empty input means "unknown", not an error.
pub fn parse_elevation(value: &str) -> Result<Option<f64>, RowParseError> {
    if value.trim().is_empty() {
        return Ok(None);
    }

    parse_finite(value)
        .map(Some)
        .ok_or_else(|| RowParseError::InvalidElevation {
            value: value.to_string(),
        })
}

fn parse_finite(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Normalize a single raw row, returning the record and any problems found.
fn normalize_record(raw: RawAirportRecord) -> (AirportRecord, Vec<RowParseError>) {
    let mut errors = Vec::new();

    let elevation_ft = match raw.elevation_ft.as_deref().map(parse_elevation) {
        Some(Ok(elevation)) => elevation,
        Some(Err(e)) => {
            errors.push(e);
            None
        }
        None => None,
    };

    let (longitude, latitude) = match parse_coordinates(raw.coordinates.as_deref().unwrap_or("")) {
        Ok((lon, lat)) => (Some(lon), Some(lat)),
        Err(e) => {
            errors.push(e);
            (None, None)
        }
    };

    let record = AirportRecord {
        name: raw.name,
        airport_type: raw.airport_type,
        continent: non_empty(raw.continent).unwrap_or_else(|| MISSING_CONTINENT.to_string()),
        country: raw.country,
        region: raw.region,
        municipality: non_empty(raw.municipality),
        elevation_ft,
        latitude,
        longitude,
        is_high_altitude: elevation_ft.map(|e| e >= HIGH_ALTITUDE_THRESHOLD_FT),
    };

    (record, errors)
}

/// Accumulates normalized records and the load report row by row.
#[derive(Debug, Default)]
pub(crate) struct Normalizer {
    records: Vec<AirportRecord>,
    report: LoadReport,
}

impl Normalizer {
    /// Normalize and keep a decoded row.
    pub(crate) fn push(&mut self, row: usize, raw: RawAirportRecord) {
        let (record, errors) = normalize_record(raw);
        self.report.rows_read += 1;
        self.report.rows_kept += 1;
        self.report
            .issues
            .extend(errors.into_iter().map(|error| RowIssue { row, error }));
        self.records.push(record);
    }

    /// Record a row that could not be decoded at all.
    pub(crate) fn reject(&mut self, row: usize, error: RowParseError) {
        self.report.rows_read += 1;
        self.report.issues.push(RowIssue { row, error });
    }

    pub(crate) fn finish(self) -> AirportDataset {
        AirportDataset::new(self.records, self.report)
    }
}

/// Normalize already-decoded raw rows into a dataset.
///
/// Rows are numbered from 1 in iteration order for the load report.
pub fn normalize<I>(raw_rows: I) -> AirportDataset
where
    I: IntoIterator<Item = RawAirportRecord>,
{
    let mut normalizer = Normalizer::default();
    for (index, raw) in raw_rows.into_iter().enumerate() {
        normalizer.push(index + 1, raw);
    }
    normalizer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(elevation: Option<&str>, coordinates: Option<&str>) -> RawAirportRecord {
        RawAirportRecord {
            name: "Test Field".to_string(),
            airport_type: "small_airport".to_string(),
            continent: None,
            country: "US".to_string(),
            region: "US-TX".to_string(),
            municipality: None,
            elevation_ft: elevation.map(str::to_string),
            coordinates: coordinates.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_coordinates_keeps_stored_order() {
        assert_eq!(parse_coordinates("2.55,49.0"), Ok((2.55, 49.0)));
        assert_eq!(parse_coordinates(" -118.4 , 33.9 "), Ok((-118.4, 33.9)));
    }

    #[test]
    fn test_parse_coordinates_rejects_bad_input() {
        for bad in ["", "1.0", "1.0,2.0,3.0", "a,b", "1.0,", "NaN,1.0", "inf,2"] {
            assert!(
                matches!(parse_coordinates(bad), Err(RowParseError::InvalidCoordinates { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_elevation() {
        assert_eq!(parse_elevation("9000"), Ok(Some(9000.0)));
        assert_eq!(parse_elevation(" 12.5 "), Ok(Some(12.5)));
        assert_eq!(parse_elevation(""), Ok(None));
        assert!(parse_elevation("high").is_err());
    }

    #[test]
    fn test_high_altitude_threshold_is_inclusive() {
        let dataset = normalize(vec![
            raw(Some("9000"), Some("0,0")),
            raw(Some("8999.9"), Some("0,0")),
            raw(None, Some("0,0")),
        ]);

        for record in &dataset {
            match record.elevation_ft {
                Some(e) => assert_eq!(record.is_high_altitude, Some(e >= 9000.0)),
                None => assert_eq!(record.is_high_altitude, None),
            }
        }
        assert_eq!(dataset.records()[0].is_high_altitude, Some(true));
        assert_eq!(dataset.records()[1].is_high_altitude, Some(false));
    }

    #[test]
    fn test_normalize_reports_missing_coordinates() {
        let dataset = normalize(vec![raw(Some("10"), None), raw(Some("10"), Some("5,6"))]);

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].position(), None);
        assert_eq!(dataset.records()[1].position(), Some((6.0, 5.0)));
        assert_eq!(dataset.report().issues.len(), 1);
        assert_eq!(dataset.report().issues[0].row, 1);
        assert_eq!(dataset.records()[0].continent, MISSING_CONTINENT);
    }
}
