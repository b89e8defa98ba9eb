use statrs::statistics::{Data, Distribution, Max, Median, Min};
use tracing::debug;

use crate::error::Result;
use crate::load::load_gdp_table;
use crate::models::{GdpInfo, NameMapping, NameMatching, Reconciliation, Table, YearSnapshot};
use crate::reconcile::{reconcile_countries_by_name, reconcile_countries_normalized};
use crate::series::parse_cell;

/// Cross-section of `year` for every code in `plot_countries`, matched by
/// exact name.
pub fn build_year_snapshot(table: &Table, plot_countries: &NameMapping, year: i32) -> YearSnapshot {
    let reconciliation = reconcile_countries_by_name(plot_countries, table);
    snapshot_from_reconciliation(table, &reconciliation, year)
}

/// Classify already reconciled codes for `year`.
///
/// Unmatched codes are missing from the source. A matched code lands in
/// `values` as log10 of its value only when the cell parses to a positive
/// number; blank, non-numeric, zero and negative cells all count as missing
/// for the year.
pub fn snapshot_from_reconciliation(
    table: &Table,
    reconciliation: &Reconciliation,
    year: i32,
) -> YearSnapshot {
    let mut snapshot = YearSnapshot {
        year,
        missing_from_source: reconciliation.unmatched.clone(),
        ..YearSnapshot::default()
    };

    for (code, name) in &reconciliation.matched {
        let Some(row) = table.get(name) else {
            snapshot.missing_from_source.insert(code.clone());
            continue;
        };

        match row.year_value(year).and_then(parse_cell) {
            Some(value) if value > 0.0 => {
                snapshot.values.insert(code.clone(), value.log10());
            }
            _ => {
                snapshot.missing_for_year.insert(code.clone());
            }
        }
    }

    debug!(
        "snapshot {}: {} values, {} missing from source, {} missing for year",
        year,
        snapshot.values.len(),
        snapshot.missing_from_source.len(),
        snapshot.missing_for_year.len()
    );
    snapshot
}

/// Load the GDP file and build the snapshot for `year`, using the reconciler
/// selected by `gdpinfo.name_matching`.
pub fn build_map_dict_by_name(
    gdpinfo: &GdpInfo,
    plot_countries: &NameMapping,
    year: i32,
) -> Result<YearSnapshot> {
    let table = load_gdp_table(gdpinfo)?;
    let reconciliation = match gdpinfo.name_matching {
        NameMatching::Exact => reconcile_countries_by_name(plot_countries, &table),
        NameMatching::Normalized => reconcile_countries_normalized(plot_countries, &table),
    };
    Ok(snapshot_from_reconciliation(&table, &reconciliation, year))
}

/// Summary of the log10 values in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation; NaN for a single value.
    pub std_dev: f64,
}

pub fn summarize(snapshot: &YearSnapshot) -> Option<SnapshotStats> {
    if snapshot.values.is_empty() {
        return None;
    }

    let data = Data::new(snapshot.values.values().copied().collect::<Vec<f64>>());
    Some(SnapshotStats {
        count: snapshot.values.len(),
        min: data.min(),
        max: data.max(),
        mean: data.mean().unwrap_or(f64::NAN),
        median: data.median(),
        std_dev: data.std_dev().unwrap_or(f64::NAN),
    })
}
