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

//! Distinct filter values (facets) derived from the dataset.

use std::collections::HashSet;

use serde::Serialize;

use crate::dataset::{AirportDataset, AirportRecord};

/// Distinct values of each filterable field, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub continents: Vec<String>,
    pub countries: Vec<String>,
    pub regions: Vec<String>,
    pub airport_types: Vec<String>,
}

impl Facets {
    /// Copy of these facets with every list sorted.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut sorted = self.clone();
        sorted.continents.sort();
        sorted.countries.sort();
        sorted.regions.sort();
        sorted.airport_types.sort();
        sorted
    }
}

/// Collect the distinct values of `field` in first-seen order.
fn distinct<'a, I, F>(records: I, field: F) -> Vec<String>
where
    I: IntoIterator<Item = &'a AirportRecord>,
    F: Fn(&'a AirportRecord) -> &'a str,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .map(field)
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Compute the continent, country, region and airport-type facets.
#[must_use]
pub fn extract_facets(dataset: &AirportDataset) -> Facets {
    Facets {
        continents: distinct(dataset, |r| r.continent.as_str()),
        countries: distinct(dataset, |r| r.country.as_str()),
        regions: distinct(dataset, |r| r.region.as_str()),
        airport_types: distinct(dataset, |r| r.airport_type.as_str()),
    }
}

/// Countries that have at least one airport on `continent`.
#[must_use]
pub fn countries_in(dataset: &AirportDataset, continent: &str) -> Vec<String> {
    distinct(
        dataset.iter().filter(|r| r.continent == continent),
        |r| r.country.as_str(),
    )
}

/// Regions that have at least one airport in `country` on `continent`.
#[must_use]
pub fn regions_in(dataset: &AirportDataset, continent: &str, country: &str) -> Vec<String> {
    distinct(
        dataset
            .iter()
            .filter(|r| r.continent == continent && r.country == country),
        |r| r.region.as_str(),
    )
}
