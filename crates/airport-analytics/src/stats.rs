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

//! Summary statistics over airport elevations.

use serde::Serialize;
use thiserror::Error;

use crate::dataset::AirportDataset;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("no airport in the dataset has elevation data")]
    EmptyDataset,
}

/// Mean, minimum and maximum elevation in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElevationStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Compute elevation statistics over every airport with a known elevation.
#[allow(clippy::cast_precision_loss, reason = "row counts are far below 2^52")]
pub fn elevation_stats(dataset: &AirportDataset) -> Result<ElevationStats, StatsError> {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for elevation in dataset.iter().filter_map(|r| r.elevation_ft) {
        count += 1;
        sum += elevation;
        min = min.min(elevation);
        max = max.max(elevation);
    }

    if count == 0 {
        return Err(StatsError::EmptyDataset);
    }

    Ok(ElevationStats {
        mean: sum / count as f64,
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::{dataset_from_rows, sample_dataset};

    #[test]
    fn test_elevation_stats_scenario() {
        let stats = elevation_stats(&sample_dataset()).unwrap();
        assert!((stats.mean - 3566.67).abs() < 0.01);
        assert_eq!(stats.min, 200.0);
        assert_eq!(stats.max, 9500.0);
    }

    #[test]
    fn test_rows_without_elevation_are_ignored() {
        let dataset = dataset_from_rows(&[
            r#"A1,small_airport,A1,,EU,DE,DE-BY,,"11.0,48.0""#,
            r#"A2,small_airport,A2,-20,EU,DE,DE-BY,,"11.0,48.0""#,
            r#"A3,small_airport,A3,n/a,EU,DE,DE-BY,,"11.0,48.0""#,
            r#"A4,small_airport,A4,40,EU,DE,DE-BY,,"11.0,48.0""#,
        ]);

        let stats = elevation_stats(&dataset).unwrap();
        assert_eq!(stats, ElevationStats { mean: 10.0, min: -20.0, max: 40.0 });
    }

    #[test]
    fn test_no_elevation_data_is_an_error() {
        let dataset = dataset_from_rows(&[r#"A1,small_airport,A1,,EU,DE,DE-BY,,"11.0,48.0""#]);
        assert_eq!(elevation_stats(&dataset), Err(StatsError::EmptyDataset));
        assert_eq!(elevation_stats(&dataset_from_rows(&[])), Err(StatsError::EmptyDataset));
    }
}
