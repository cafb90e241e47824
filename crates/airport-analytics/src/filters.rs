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

//! User filter selections driving the dashboard queries.
//!
//! [`DashboardFilters`] is what a front end collects (and what the config file
//! stores): every field is optional or has a default. [`DashboardFilters::resolve`]
//! checks it against the dataset facets and produces a [`FilterSelection`] that
//! can be fed straight into the queries.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::facets::Facets;

/// Allowed values for the number of countries in the per-type chart.
pub const TYPE_TOP_N_RANGE: RangeInclusive<u32> = 0..=15;

/// Allowed values for the map elevation ceiling, in feet.
pub const MAX_ELEVATION_RANGE: RangeInclusive<u32> = 0..=29000;

const DEFAULT_TYPE_TOP_N: u32 = 7;
const DEFAULT_MAX_ELEVATION_FT: u32 = 14500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("top country count must be 10 or 25, got {0}")]
    InvalidTopN(usize),

    #[error("unknown {field} '{value}'")]
    UnknownValue { field: &'static str, value: String },
}

/// Number of countries in the airport-count chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum TopN {
    Ten,
    #[default]
    TwentyFive,
}

impl TopN {
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::TwentyFive => 25,
        }
    }
}

impl TryFrom<usize> for TopN {
    type Error = FilterError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(Self::Ten),
            25 => Ok(Self::TwentyFive),
            other => Err(FilterError::InvalidTopN(other)),
        }
    }
}

impl From<TopN> for usize {
    fn from(top_n: TopN) -> Self {
        top_n.get()
    }
}

/// Filter selections as collected from the user or the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardFilters {
    /// Countries shown in the airport-count chart
    #[serde(default)]
    pub top_n: TopN,

    /// Continent for the airport-type chart (first continent if unset)
    #[serde(default)]
    pub continent: Option<String>,

    /// Country for the airport-type chart (first country if unset)
    #[serde(default)]
    pub country: Option<String>,

    /// Region for the airport-type chart (first region if unset)
    #[serde(default)]
    pub region: Option<String>,

    /// Airport type for the per-type chart (first type if unset)
    #[serde(default)]
    pub airport_type: Option<String>,

    /// Countries shown in the per-type chart (0 - 15)
    #[serde(default = "default_type_top_n")]
    pub type_top_n: u32,

    /// Elevation ceiling for the map, in feet (0 - 29000)
    #[serde(default = "default_max_elevation_ft")]
    pub max_elevation_ft: u32,
}

fn default_type_top_n() -> u32 {
    DEFAULT_TYPE_TOP_N
}

fn default_max_elevation_ft() -> u32 {
    DEFAULT_MAX_ELEVATION_FT
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self {
            top_n: TopN::default(),
            continent: None,
            country: None,
            region: None,
            airport_type: None,
            type_top_n: DEFAULT_TYPE_TOP_N,
            max_elevation_ft: DEFAULT_MAX_ELEVATION_FT,
        }
    }
}

/// Fully resolved filter values, ready to pass to the queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSelection {
    pub top_n: usize,
    pub continent: String,
    pub country: String,
    pub region: String,
    pub airport_type: String,
    pub type_top_n: usize,
    pub max_elevation_ft: f64,
}

fn check_range(field: &'static str, value: u32, range: &RangeInclusive<u32>) -> Result<(), FilterError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(FilterError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Use the explicit selection if it is a known value, else the first known value.
///
/// With no known values at all an unset selection resolves to an empty string,
/// which matches nothing.
fn pick(field: &'static str, selected: Option<&str>, known: &[String]) -> Result<String, FilterError> {
    match selected {
        Some(value) if known.iter().any(|k| k == value) => Ok(value.to_string()),
        Some(value) => Err(FilterError::UnknownValue {
            field,
            value: value.to_string(),
        }),
        None => Ok(known.first().cloned().unwrap_or_default()),
    }
}

impl DashboardFilters {
    /// Check the numeric selections against their allowed ranges.
    pub fn validate(&self) -> Result<(), FilterError> {
        check_range("type_top_n", self.type_top_n, &TYPE_TOP_N_RANGE)?;
        check_range("max_elevation_ft", self.max_elevation_ft, &MAX_ELEVATION_RANGE)?;
        Ok(())
    }

    /// Validate and fill unset selections from the dataset facets.
    pub fn resolve(&self, facets: &Facets) -> Result<FilterSelection, FilterError> {
        self.validate()?;

        Ok(FilterSelection {
            top_n: self.top_n.get(),
            continent: pick("continent", self.continent.as_deref(), &facets.continents)?,
            country: pick("country", self.country.as_deref(), &facets.countries)?,
            region: pick("region", self.region.as_deref(), &facets.regions)?,
            airport_type: pick("airport type", self.airport_type.as_deref(), &facets.airport_types)?,
            type_top_n: self.type_top_n as usize,
            max_elevation_ft: f64::from(self.max_elevation_ft),
        })
    }
}
