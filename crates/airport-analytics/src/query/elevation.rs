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

//! Highest airports below an elevation ceiling, for the map view.

use serde::Serialize;

use crate::dataset::{AirportDataset, AirportRecord};

/// Default number of airports placed on the map.
pub const DEFAULT_MAP_LIMIT: usize = 10;

/// Projection of an airport onto the columns shown with the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElevationRow {
    #[serde(rename = "type")]
    pub airport_type: String,
    pub name: String,
    pub elevation_ft: f64,
    pub region: String,
    pub municipality: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub is_high_altitude: bool,
}

impl ElevationRow {
    /// Project a record; `None` if it has no elevation or no position.
    fn project(record: &AirportRecord) -> Option<Self> {
        let elevation_ft = record.elevation_ft?;
        let (latitude, longitude) = record.position()?;

        Some(Self {
            airport_type: record.airport_type.clone(),
            name: record.name.clone(),
            elevation_ft,
            region: record.region.clone(),
            municipality: record.municipality.clone(),
            latitude,
            longitude,
            is_high_altitude: record.is_high_altitude.unwrap_or(false),
        })
    }
}

/// The `limit` highest airports strictly below `max_elevation_ft`.
///
/// Airports without a parseable position or elevation are skipped. Results are
/// ordered by elevation, highest first; equal elevations keep dataset order.
#[must_use]
pub fn top_low_elevation_airports(
    dataset: &AirportDataset,
    max_elevation_ft: f64,
    limit: usize,
) -> Vec<ElevationRow> {
    let mut rows: Vec<ElevationRow> = dataset
        .iter()
        .filter(|r| r.elevation_ft.is_some_and(|e| e < max_elevation_ft))
        .filter_map(ElevationRow::project)
        .collect();

    rows.sort_by(|a, b| b.elevation_ft.total_cmp(&a.elevation_ft));
    rows.truncate(limit);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::{dataset_from_rows, sample_dataset};

    fn elevations(rows: &[ElevationRow]) -> Vec<f64> {
        rows.iter().map(|r| r.elevation_ft).collect()
    }

    #[test]
    fn test_strictly_below_threshold() {
        let dataset = sample_dataset();

        let rows = top_low_elevation_airports(&dataset, 9500.0, DEFAULT_MAP_LIMIT);
        assert_eq!(elevations(&rows), vec![1000.0, 200.0]);

        let rows = top_low_elevation_airports(&dataset, 9501.0, DEFAULT_MAP_LIMIT);
        assert_eq!(elevations(&rows), vec![9500.0, 1000.0, 200.0]);
        assert!(rows[0].is_high_altitude);
    }

    #[test]
    fn test_projection() {
        let rows = top_low_elevation_airports(&sample_dataset(), 5000.0, 1);
        assert_eq!(
            rows,
            vec![ElevationRow {
                airport_type: "large_airport".to_string(),
                name: "Charles de Gaulle".to_string(),
                elevation_ft: 1000.0,
                region: "FR-IDF".to_string(),
                municipality: Some("Paris".to_string()),
                latitude: 49.0,
                longitude: 2.55,
                is_high_altitude: false,
            }]
        );
    }

    #[test]
    fn test_skips_rows_without_position_or_elevation() {
        let dataset = dataset_from_rows(&[
            r#"A1,small_airport,No Position,500,EU,DE,DE-BY,,"broken""#,
            r#"A2,small_airport,No Elevation,,EU,DE,DE-BY,,"11.0,48.0""#,
            r#"A3,small_airport,Good,300,EU,DE,DE-BY,,"11.0,48.0""#,
        ]);

        let rows = top_low_elevation_airports(&dataset, 14500.0, DEFAULT_MAP_LIMIT);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Good");
    }

    #[test]
    fn test_sorted_descending_and_limited() {
        let dataset = dataset_from_rows(&[
            r#"A1,small_airport,A1,120,EU,DE,DE-BY,,"11.0,48.0""#,
            r#"A2,small_airport,A2,14000,EU,DE,DE-BY,,"11.0,48.0""#,
            r#"A3,small_airport,A3,-50,EU,DE,DE-BY,,"11.0,48.0""#,
            r#"A4,small_airport,A4,14500,EU,DE,DE-BY,,"11.0,48.0""#,
            r#"A5,small_airport,A5,8000,EU,DE,DE-BY,,"11.0,48.0""#,
        ]);

        let rows = top_low_elevation_airports(&dataset, 14500.0, 3);
        assert_eq!(elevations(&rows), vec![14000.0, 8000.0, 120.0]);
        assert!(rows.iter().all(|r| r.elevation_ft < 14500.0));

        assert!(top_low_elevation_airports(&dataset, 14500.0, 0).is_empty());
        assert!(top_low_elevation_airports(&dataset, -50.0, 10).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let dataset = sample_dataset();
        assert_eq!(
            top_low_elevation_airports(&dataset, 14500.0, 10),
            top_low_elevation_airports(&dataset, 14500.0, 10)
        );
    }
}
