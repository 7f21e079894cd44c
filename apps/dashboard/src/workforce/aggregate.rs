use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::table::Table;
use crate::workforce::detect::DetectedColumns;

/// User-chosen geographies and industries. `None` means "everything present".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Selection {
    pub geographies: Option<Vec<String>>,
    pub industries: Option<Vec<String>>,
}

/// Selection with defaults applied, in sorted order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSelection {
    pub geographies: Vec<String>,
    pub industries: Vec<String>,
}

/// One (geography, category) group and its summed worker count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRecord {
    pub geography: String,
    pub category: String,
    pub workers: f64,
}

fn as_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Sorts and dedups dimension values. Numeric codes such as division numbers
/// order by value when every entry parses as a number, otherwise as text.
pub fn sort_dimension<S: AsRef<str> + Ord>(values: &mut Vec<S>) {
    if values.iter().all(|v| as_number(v.as_ref()).is_some()) {
        values.sort_by(|a, b| {
            let x = as_number(a.as_ref()).unwrap_or_default();
            let y = as_number(b.as_ref()).unwrap_or_default();
            x.total_cmp(&y).then_with(|| a.cmp(b))
        });
    } else {
        values.sort();
    }
    values.dedup();
}

/// Position of each value in dimension order.
fn dimension_rank<'a>(values: impl Iterator<Item = &'a String>) -> HashMap<String, usize> {
    let mut ordered: Vec<String> = values.cloned().collect();
    sort_dimension(&mut ordered);
    ordered.into_iter().enumerate().map(|(i, v)| (v, i)).collect()
}

/// Sorted distinct non-empty values of a column.
pub fn distinct_values(table: &Table, col: usize) -> Vec<String> {
    let mut values: Vec<String> = (0..table.row_count())
        .map(|r| table.cell(r, col))
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect();
    sort_dimension(&mut values);
    values
}

impl Selection {
    pub fn resolve(&self, table: &Table, columns: &DetectedColumns) -> ResolvedSelection {
        let pick = |chosen: &Option<Vec<String>>, col: usize| -> Vec<String> {
            match chosen {
                Some(values) => {
                    let mut values = values.clone();
                    sort_dimension(&mut values);
                    values
                }
                None => distinct_values(table, col),
            }
        };
        ResolvedSelection {
            geographies: pick(&self.geographies, columns.geography_idx),
            industries: pick(&self.industries, columns.industry_idx),
        }
    }
}

/// Rows whose geography AND category are both selected.
pub fn filter_rows(
    table: &Table,
    columns: &DetectedColumns,
    selection: &ResolvedSelection,
) -> Table {
    let geos: HashSet<&str> = selection.geographies.iter().map(String::as_str).collect();
    let inds: HashSet<&str> = selection.industries.iter().map(String::as_str).collect();
    let (g, i) = (columns.geography_idx, columns.industry_idx);
    table.filter_rows(|row| {
        let geo = row.get(g).map(String::as_str).unwrap_or("");
        let ind = row.get(i).map(String::as_str).unwrap_or("");
        geos.contains(geo) && inds.contains(ind)
    })
}

/// Worker count of a cell. Blank or non-numeric cells count as missing.
pub fn worker_count(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Sums worker counts per (geography, category), sorted by geography then
/// category in dimension order.
pub fn aggregate(filtered: &Table, columns: &DetectedColumns) -> Vec<AggregateRecord> {
    let mut groups: HashMap<(String, String), f64> = HashMap::new();
    for row in 0..filtered.row_count() {
        let key = (
            filtered.cell(row, columns.geography_idx).to_string(),
            filtered.cell(row, columns.industry_idx).to_string(),
        );
        let count = worker_count(filtered.cell(row, columns.workers_idx)).unwrap_or(0.0);
        *groups.entry(key).or_insert(0.0) += count;
    }

    let mut records: Vec<AggregateRecord> = groups
        .into_iter()
        .map(|((geography, category), workers)| AggregateRecord {
            geography,
            category,
            workers,
        })
        .collect();

    let geo_rank = dimension_rank(records.iter().map(|r| &r.geography));
    let cat_rank = dimension_rank(records.iter().map(|r| &r.category));
    records.sort_by_key(|r| (geo_rank[&r.geography], cat_rank[&r.category]));
    records
}
