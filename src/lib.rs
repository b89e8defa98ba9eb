//! gdp-reconcile: reconcile World Bank GDP data with world map country codes
//! and chart it.
//!
//! - Load a delimited GDP table keyed by country name
//! - Build per-country (year, GDP) series for an XY plot
//! - Match map country codes to table names and take single-year snapshots
//! - Render both as SVG with plotters

pub mod countries;
pub mod error;
pub mod load;
pub mod models;
pub mod plot;
pub mod reconcile;
pub mod series;
pub mod snapshot;
pub mod world_map;

#[cfg(test)]
mod testing;

pub use countries::plot_countries;
pub use error::{Error, Result};
pub use load::{load_gdp_table, load_table, load_table_from_reader};
pub use models::{
    year_key, DuplicateKeyPolicy, GdpInfo, NameMapping, NameMatching, Reconciliation, Row, Series,
    Table, YearSnapshot,
};
pub use plot::{render_series, render_xy_plot};
pub use reconcile::{normalize_name, reconcile_countries_by_name, reconcile_countries_normalized};
pub use series::{build_plot_dict, build_plot_values, build_series_batch};
pub use snapshot::{
    build_map_dict_by_name, build_year_snapshot, snapshot_from_reconciliation, summarize,
    SnapshotStats,
};
pub use world_map::{render_snapshot, render_world_map};
