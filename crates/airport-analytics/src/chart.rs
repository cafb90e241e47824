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

//! Renderer-neutral chart descriptions.
//!
//! These types carry everything a plotting or mapping front end needs (titles,
//! axis labels, data points, map layer styling) without depending on any
//! particular widget library. They serialize to JSON for external renderers.

use serde::Serialize;

use crate::query::{CountTable, ElevationRow};
use crate::stats::ElevationStats;

/// Width that each statistics table cell is padded to.
pub const STATS_CELL_WIDTH: usize = 15;

/// One labelled value on a line or bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: usize,
}

fn points(table: &CountTable) -> Vec<ChartPoint> {
    table
        .iter()
        .map(|e| ChartPoint {
            label: e.key.clone(),
            value: e.count,
        })
        .collect()
}

/// Line chart with a categorical x axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
}

/// Bar chart with a categorical x axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
    /// Share of the whole pie, 0 - 100.
    pub percent: f64,
    /// `percent` formatted with one decimal, e.g. `"42.9%"`.
    pub percent_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// Initial camera of the map view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 25.0,
            zoom: 1.0,
            pitch: 0.0,
        }
    }
}

/// Scatterplot layer styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScatterLayer {
    /// Marker radius in meters.
    pub radius_m: u32,
    pub color: [u8; 3],
    pub pickable: bool,
}

impl Default for ScatterLayer {
    fn default() -> Self {
        Self {
            radius_m: 100_000,
            color: [209, 61, 61],
            pickable: true,
        }
    }
}

/// Hover tooltip; `{name}` in the template is replaced by the airport name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub html: String,
    pub background_color: String,
    pub color: String,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            html: "Airport Name:<br/> <b>{name}</b> ".to_string(),
            background_color: "steelblue".to_string(),
            color: "white".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Scatter map of airports plus the table of the airports it shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMap {
    pub title: String,
    pub view_state: ViewState,
    pub layer: ScatterLayer,
    pub tooltip: Tooltip,
    pub points: Vec<MapPoint>,
    pub rows: Vec<ElevationRow>,
}

/// Any of the dashboard charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Line(LineChart),
    Bar(BarChart),
    Pie(PieChart),
    Map(ScatterMap),
}

impl Chart {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Line(c) => &c.title,
            Self::Bar(c) => &c.title,
            Self::Pie(c) => &c.title,
            Self::Map(c) => &c.title,
        }
    }

    /// Check if the chart has nothing to draw; front ends show a "no data" state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Line(c) => c.points.is_empty(),
            Self::Bar(c) => c.bars.is_empty(),
            Self::Pie(c) => c.slices.is_empty(),
            Self::Map(c) => c.points.is_empty(),
        }
    }
}

/// Line chart of the countries with the most airports.
#[must_use]
pub fn airport_count_chart(table: &CountTable, top_n: usize) -> Chart {
    Chart::Line(LineChart {
        title: format!("Top {top_n} countries with the Most Airports"),
        x_label: "Country".to_string(),
        y_label: "Number of Airports".to_string(),
        points: points(table),
    })
}

/// Bar chart of airport types within one region.
#[must_use]
pub fn type_distribution_chart(table: &CountTable, region: &str) -> Chart {
    Chart::Bar(BarChart {
        title: format!("Airport Types in {region}"),
        x_label: "Airport Types".to_string(),
        y_label: "Airport Count".to_string(),
        bars: points(table),
    })
}

/// Pie chart of the countries with the most airports of one type.
#[must_use]
pub fn type_share_chart(table: &CountTable, airport_type: &str, top_n: usize) -> Chart {
    let slices = table
        .iter()
        .zip(table.shares())
        .map(|(entry, percent)| PieSlice {
            label: entry.key.clone(),
            value: entry.count,
            percent,
            percent_label: format!("{percent:.1}%"),
        })
        .collect();

    Chart::Pie(PieChart {
        title: format!("Top {top_n} countries with most {airport_type}"),
        slices,
    })
}

/// Scatter map of the highest airports below `max_elevation_ft`.
#[must_use]
pub fn elevation_map(rows: Vec<ElevationRow>, max_elevation_ft: f64) -> Chart {
    let points = rows
        .iter()
        .map(|r| MapPoint {
            name: r.name.clone(),
            latitude: r.latitude,
            longitude: r.longitude,
        })
        .collect();

    Chart::Map(ScatterMap {
        title: format!(
            "{} Highest Airports below {max_elevation_ft} ft in elevation",
            rows.len()
        ),
        view_state: ViewState::default(),
        layer: ScatterLayer::default(),
        tooltip: Tooltip::default(),
        points,
        rows,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsRow {
    pub label: String,
    pub value: String,
}

impl StatsRow {
    fn new(label: &str, feet: f64) -> Self {
        Self {
            label: label.to_string(),
            value: format!("{feet:5.2} ft"),
        }
    }

    /// The row as fixed-width text, each cell left-justified.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!(
            "{:<width$}{:<width$}",
            self.label,
            self.value,
            width = STATS_CELL_WIDTH
        )
    }
}

/// Three-row elevation statistics table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsTable {
    pub rows: Vec<StatsRow>,
}

impl StatsTable {
    #[must_use]
    pub fn from_stats(stats: &ElevationStats) -> Self {
        Self {
            rows: vec![
                StatsRow::new("Minimum:", stats.min),
                StatsRow::new("Maximum:", stats.max),
                StatsRow::new("Average Elevation:", stats.mean),
            ],
        }
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(StatsRow::to_line).collect()
    }
}
