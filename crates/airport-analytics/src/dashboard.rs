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

//! One full evaluation of every chart for a filter selection.

use log::debug;
use serde::Serialize;

use crate::chart::{
    airport_count_chart, elevation_map, type_distribution_chart, type_share_chart, Chart,
    StatsTable,
};
use crate::dataset::AirportDataset;
use crate::filters::FilterSelection;
use crate::query::{
    airport_type_distribution, top_countries_by_airport_count, top_countries_by_type,
    top_low_elevation_airports, DEFAULT_MAP_LIMIT,
};
use crate::stats::elevation_stats;

/// All charts of the dashboard, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub selection: FilterSelection,
    pub top_countries: Chart,
    pub region_types: Chart,
    pub type_countries: Chart,
    pub elevation_map: Chart,
    /// `None` when no airport has elevation data.
    pub elevation_stats: Option<StatsTable>,
}

impl Dashboard {
    /// Evaluate every query for `selection`.
    #[must_use]
    pub fn build(dataset: &AirportDataset, selection: FilterSelection) -> Self {
        debug!("Building dashboard for {selection:?}");

        let top_countries = airport_count_chart(
            &top_countries_by_airport_count(dataset, selection.top_n),
            selection.top_n,
        );

        let region_types = type_distribution_chart(
            &airport_type_distribution(
                dataset,
                &selection.continent,
                &selection.country,
                &selection.region,
            ),
            &selection.region,
        );

        let type_countries = type_share_chart(
            &top_countries_by_type(dataset, &selection.airport_type, selection.type_top_n),
            &selection.airport_type,
            selection.type_top_n,
        );

        let elevation_map = elevation_map(
            top_low_elevation_airports(dataset, selection.max_elevation_ft, DEFAULT_MAP_LIMIT),
            selection.max_elevation_ft,
        );

        let elevation_stats = elevation_stats(dataset)
            .ok()
            .map(|stats| StatsTable::from_stats(&stats));

        Self {
            selection,
            top_countries,
            region_types,
            type_countries,
            elevation_map,
            elevation_stats,
        }
    }

    /// The four charts in display order.
    #[must_use]
    pub fn charts(&self) -> [&Chart; 4] {
        [
            &self.top_countries,
            &self.region_types,
            &self.type_countries,
            &self.elevation_map,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::sample_dataset;
    use crate::facets::extract_facets;
    use crate::filters::DashboardFilters;

    #[test]
    fn test_build_default_dashboard() {
        let dataset = sample_dataset();
        let selection = DashboardFilters::default()
            .resolve(&extract_facets(&dataset))
            .unwrap();
        let dashboard = Dashboard::build(&dataset, selection);

        assert!(dashboard.charts().iter().all(|c| !c.is_empty()));
        assert_eq!(dashboard.region_types.title(), "Airport Types in US-CO");
        assert_eq!(
            dashboard.type_countries.title(),
            "Top 7 countries with most large_airport"
        );
        assert!(dashboard.elevation_stats.is_some());
    }

    #[test]
    fn test_dashboard_with_no_matching_region() {
        let dataset = sample_dataset();
        let selection = DashboardFilters {
            continent: Some("EU".to_string()),
            country: Some("US".to_string()),
            ..Default::default()
        }
        .resolve(&extract_facets(&dataset))
        .unwrap();

        let dashboard = Dashboard::build(&dataset, selection);
        assert!(dashboard.region_types.is_empty());
        assert!(!dashboard.top_countries.is_empty());
    }
}
