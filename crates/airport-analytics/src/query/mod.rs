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

//! Aggregation queries backing the dashboard charts.
//!
//! Every query is a pure read of an [`AirportDataset`](crate::AirportDataset)
//! plus caller-supplied parameters. Calling a query twice with the same input
//! yields the same output. A filter that matches nothing produces an empty
//! result rather than an error.

mod counts;
mod elevation;

pub use counts::{airport_type_distribution, top_countries_by_airport_count, top_countries_by_type};
pub use elevation::{top_low_elevation_airports, ElevationRow, DEFAULT_MAP_LIMIT};

use std::collections::HashMap;

use serde::Serialize;

/// Default number of countries returned by the top-N queries.
pub const DEFAULT_TOP_N: usize = 25;

/// One `(key, count)` entry of a [`CountTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub key: String,
    pub count: usize,
}

/// Ordered frequency table, highest count first.
///
/// Entries with equal counts keep the order in which their key was first seen
/// in the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountTable {
    entries: Vec<CountEntry>,
}

impl CountTable {
    /// Count `keys`, then order by count descending with first-seen tie order.
    pub(crate) fn tally<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<CountEntry> = Vec::new();

        for key in keys {
            match index.get(key) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(key, entries.len());
                    entries.push(CountEntry {
                        key: key.to_string(),
                        count: 1,
                    });
                }
            }
        }

        // sort_by is stable, so ties stay in first-seen order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    /// Keep only the first `n` entries.
    #[must_use]
    pub(crate) fn truncated(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[CountEntry] {
        &self.entries
    }

    /// Count for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.count)
    }

    /// Sum of all counts in the table.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Percentage of the table total held by each entry, in entry order.
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "counts are far below 2^52")]
    pub fn shares(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        self.entries
            .iter()
            .map(|e| e.count as f64 * 100.0 / total as f64)
            .collect()
    }

    /// Entries as `(key, count)` pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, usize)> {
        self.entries
            .iter()
            .map(|e| (e.key.clone(), e.count))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a CountTable {
    type Item = &'a CountEntry;
    type IntoIter = std::slice::Iter<'a, CountEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
