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

//! Frequency queries grouped by country or airport type.

use super::CountTable;
use crate::dataset::AirportDataset;

/// Countries with the most airports, highest first, at most `top_n` entries.
#[must_use]
pub fn top_countries_by_airport_count(dataset: &AirportDataset, top_n: usize) -> CountTable {
    CountTable::tally(dataset.iter().map(|r| r.country.as_str())).truncated(top_n)
}

/// Number of airports of each type in one continent/country/region.
///
/// All three values must match exactly (case-sensitive).
#[must_use]
pub fn airport_type_distribution(
    dataset: &AirportDataset,
    continent: &str,
    country: &str,
    region: &str,
) -> CountTable {
    CountTable::tally(
        dataset
            .iter()
            .filter(|r| r.continent == continent && r.country == country && r.region == region)
            .map(|r| r.airport_type.as_str()),
    )
}

/// Countries with the most airports of `airport_type`, at most `top_n` entries.
#[must_use]
pub fn top_countries_by_type(
    dataset: &AirportDataset,
    airport_type: &str,
    top_n: usize,
) -> CountTable {
    CountTable::tally(
        dataset
            .iter()
            .filter(|r| r.airport_type == airport_type)
            .map(|r| r.country.as_str()),
    )
    .truncated(top_n)
}
