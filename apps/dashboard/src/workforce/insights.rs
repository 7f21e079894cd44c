//! Chart specifications and headline metrics built from an aggregate.
//!
//! Charts are plain data; the dashboard page draws them in the browser.

use std::collections::HashMap;

use serde::Serialize;

use crate::workforce::aggregate::{sort_dimension, AggregateRecord};

pub const BAR_TITLE: &str = "Workforce Distribution by Region and Sector";
pub const PIE_TITLE: &str = "Share by Sector";
pub const WORKER_AXIS_LABEL: &str = "Worker Count";

// ────────────────────────────────────────────────────────────────────────────
// Chart specifications
// ────────────────────────────────────────────────────────────────────────────

/// One bar group member: the bars of a single category across geographies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    pub barmode: &'static str,
    pub series: Vec<BarSeries>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Metrics
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    /// Summed workers, truncated to a whole number.
    pub total_workers: i64,
    /// Category with the largest total; `None` when nothing is selected.
    pub largest_sector: Option<String>,
    pub top_geography: Option<String>,
}

/// Grouped bar chart: x = geography, one series per category.
pub fn bar_chart(
    agg: &[AggregateRecord],
    geography_label: &str,
    industry_label: &str,
) -> BarChart {
    let mut by_category: HashMap<&str, BarSeries> = HashMap::new();
    for record in agg {
        let series = by_category
            .entry(record.category.as_str())
            .or_insert_with(|| BarSeries {
                name: record.category.clone(),
                x: Vec::new(),
                y: Vec::new(),
            });
        series.x.push(record.geography.clone());
        series.y.push(record.workers);
    }

    let mut names: Vec<&str> = by_category.keys().copied().collect();
    sort_dimension(&mut names);
    let series = names
        .into_iter()
        .filter_map(|name| by_category.remove(name))
        .collect();

    BarChart {
        title: BAR_TITLE.to_string(),
        x_label: geography_label.to_string(),
        y_label: WORKER_AXIS_LABEL.to_string(),
        legend_title: industry_label.to_string(),
        barmode: "group",
        series,
    }
}

/// Pie chart: one slice per category, summed across geographies.
pub fn pie_chart(agg: &[AggregateRecord]) -> PieChart {
    let totals = totals_by(agg, |r| &r.category);
    PieChart {
        title: PIE_TITLE.to_string(),
        labels: totals.iter().map(|(k, _)| k.to_string()).collect(),
        values: totals.iter().map(|(_, v)| *v).collect(),
    }
}

pub fn compute_metrics(agg: &[AggregateRecord]) -> Metrics {
    let total: f64 = agg.iter().map(|r| r.workers).sum();
    Metrics {
        total_workers: total.trunc() as i64,
        largest_sector: leader(&totals_by(agg, |r| &r.category)),
        top_geography: leader(&totals_by(agg, |r| &r.geography)),
    }
}

/// Totals per key, in dimension order.
fn totals_by<'a, F>(agg: &'a [AggregateRecord], key: F) -> Vec<(&'a str, f64)>
where
    F: Fn(&'a AggregateRecord) -> &'a String,
{
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for record in agg {
        *totals.entry(key(record).as_str()).or_insert(0.0) += record.workers;
    }
    let mut keys: Vec<&str> = totals.keys().copied().collect();
    sort_dimension(&mut keys);
    keys.into_iter().map(|k| (k, totals[k])).collect()
}

/// Key with the largest total. Ties go to the first key in dimension order.
fn leader(totals: &[(&str, f64)]) -> Option<String> {
    let mut best: Option<(&str, f64)> = None;
    for &(key, value) in totals {
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((key, value)),
        }
    }
    best.map(|(key, _)| key.to_string())
}
