use std::collections::HashMap;

use crate::error::Result;
use crate::load::load_gdp_table;
use crate::models::{GdpInfo, Row, Series, Table};

/// Parse a raw cell, treating blank or non-numeric text as no observation.
pub(crate) fn parse_cell(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// (year, value) points for every year in the configured window that the
/// row holds a numeric value for.
pub fn build_plot_values(gdpinfo: &GdpInfo, row: &Row) -> Series {
    (gdpinfo.min_year..=gdpinfo.max_year)
        .filter_map(|year| {
            row.year_value(year)
                .and_then(parse_cell)
                .map(|value| (year, value))
        })
        .collect()
}

/// Series for each requested country; countries missing from the table map
/// to an empty series so they still get a legend entry.
pub fn build_series_batch<S: AsRef<str>>(
    gdpinfo: &GdpInfo,
    table: &Table,
    countries: &[S],
) -> HashMap<String, Series> {
    countries
        .iter()
        .map(|country| {
            let country = country.as_ref();
            let series = table
                .get(country)
                .map(|row| build_plot_values(gdpinfo, row))
                .unwrap_or_default();
            (country.to_string(), series)
        })
        .collect()
}

/// Load the GDP file and build series for `countries`.
pub fn build_plot_dict<S: AsRef<str>>(
    gdpinfo: &GdpInfo,
    countries: &[S],
) -> Result<HashMap<String, Series>> {
    let table = load_gdp_table(gdpinfo)?;
    Ok(build_series_batch(gdpinfo, &table, countries))
}
