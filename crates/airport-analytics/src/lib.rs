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

//! Airport analytics over the OurAirports airport-codes dataset.
//!
//! The library is organised in layers that can be used independently:
//!
//! - **Dataset layer**: CSV loading and normalization into an immutable
//!   [`AirportDataset`], with row-level problems collected in a [`LoadReport`]
//! - **Facet layer**: distinct continents, countries, regions and airport types
//! - **Query layer**: pure aggregation queries and elevation statistics
//! - **Chart layer**: renderer-neutral chart descriptions for front ends
//!
//! # Quick Start
//!
//! ```no_run
//! use airport_analytics::{
//!     extract_facets, top_countries_by_airport_count, AirportDataset, Dashboard,
//!     DashboardFilters,
//! };
//!
//! let dataset = AirportDataset::load_csv("Data/airport-codes_csv.csv").unwrap();
//!
//! for entry in &top_countries_by_airport_count(&dataset, 10) {
//!     println!("{}: {}", entry.key, entry.count);
//! }
//!
//! let selection = DashboardFilters::default()
//!     .resolve(&extract_facets(&dataset))
//!     .unwrap();
//! let dashboard = Dashboard::build(&dataset, selection);
//! println!("{}", dashboard.top_countries.title());
//! ```
//!
//! # Queries Only
//!
//! ```
//! use airport_analytics::{airport_type_distribution, AirportDataset};
//!
//! let csv = "name,type,continent,iso_country,iso_region,municipality,elevation_ft,coordinates\n\
//!            Heli One,heliport,EU,FR,FR-IDF,Paris,100,\"2.3,48.8\"\n";
//! let dataset = AirportDataset::load_from_reader(csv.as_bytes()).unwrap();
//!
//! let types = airport_type_distribution(&dataset, "EU", "FR", "FR-IDF");
//! assert_eq!(types.get("heliport"), Some(1));
//! ```

pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod facets;
pub mod filters;
pub mod query;
pub mod stats;

pub use chart::{Chart, StatsTable};
pub use dashboard::Dashboard;
pub use dataset::{
    normalize, AirportDataset, AirportRecord, LoadError, LoadReport, RawAirportRecord, RowIssue,
    RowParseError,
};
pub use facets::{extract_facets, Facets};
pub use filters::{DashboardFilters, FilterError, FilterSelection, TopN};
pub use query::{
    airport_type_distribution, top_countries_by_airport_count, top_countries_by_type,
    top_low_elevation_airports, CountEntry, CountTable, ElevationRow, DEFAULT_MAP_LIMIT,
    DEFAULT_TOP_N,
};
pub use stats::{elevation_stats, ElevationStats, StatsError};
