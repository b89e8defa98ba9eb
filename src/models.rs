use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// What to do when two source rows share a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// The later row silently replaces the earlier one.
    #[default]
    LastWins,
    /// Loading fails with [`Error::DuplicateKey`].
    Reject,
}

/// Which reconciler the map path uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameMatching {
    #[default]
    Exact,
    Normalized,
}

/// Description of a GDP source file and the window of years to read from it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GdpInfo {
    #[serde(rename = "gdpfile")]
    pub gdp_file: PathBuf,
    pub separator: char,
    pub quote: char,
    pub min_year: i32,
    pub max_year: i32,
    /// Header of the column holding the country name; rows are keyed by it.
    pub country_name: String,
    pub country_code: String,

    #[serde(default)]
    pub duplicate_keys: DuplicateKeyPolicy,
    #[serde(default)]
    pub name_matching: NameMatching,
}

impl GdpInfo {
    pub fn validate(&self) -> Result<()> {
        if self.min_year > self.max_year {
            return Err(Error::Config(format!(
                "min_year {} is after max_year {}",
                self.min_year, self.max_year
            )));
        }
        single_byte("separator", self.separator)?;
        single_byte("quote", self.quote)?;
        Ok(())
    }

    pub(crate) fn separator_byte(&self) -> Result<u8> {
        single_byte("separator", self.separator)
    }

    pub(crate) fn quote_byte(&self) -> Result<u8> {
        single_byte("quote", self.quote)
    }
}

fn single_byte(what: &str, c: char) -> Result<u8> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(Error::Config(format!("{} {:?} is not a single-byte character", what, c)))
    }
}

/// Column name under which a year's value is stored.
pub fn year_key(year: i32) -> String {
    year.to_string()
}

/// One source row: header name to raw cell text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Raw cell for `year`, if the row has that column.
    pub fn year_value(&self, year: i32) -> Option<&str> {
        self.get(&year_key(year))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Rows keyed by the value of one chosen column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: HashMap<String, Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row, returning the row previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, row: Row) -> Option<Row> {
        self.rows.insert(key.into(), row)
    }

    pub fn get(&self, key: &str) -> Option<&Row> {
        self.rows.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.rows.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Row)> for Table {
    fn from_iter<I: IntoIterator<Item = (K, Row)>>(iter: I) -> Self {
        let mut table = Table::new();
        for (key, row) in iter {
            table.insert(key, row);
        }
        table
    }
}

/// (year, value) observations, strictly increasing by year.
pub type Series = Vec<(i32, f64)>;

/// Plot library country code to country name.
pub type NameMapping = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Code to the name under which the country appears in the table.
    pub matched: BTreeMap<String, String>,
    pub unmatched: BTreeSet<String>,
}

/// Cross-section of one year, split three ways by code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearSnapshot {
    pub year: i32,
    /// log10 of the year's value, for codes with a positive value.
    pub values: BTreeMap<String, f64>,
    pub missing_from_source: BTreeSet<String>,
    pub missing_for_year: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> GdpInfo {
        GdpInfo {
            gdp_file: PathBuf::from("gdp.csv"),
            separator: ',',
            quote: '"',
            min_year: 2000,
            max_year: 2005,
            country_name: "Country Name".to_string(),
            country_code: "Country Code".to_string(),
            duplicate_keys: DuplicateKeyPolicy::default(),
            name_matching: NameMatching::default(),
        }
    }

    #[test]
    fn test_validate_accepts_single_year_window() {
        let mut gdpinfo = info();
        gdpinfo.max_year = gdpinfo.min_year;
        assert!(gdpinfo.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let mut gdpinfo = info();
        gdpinfo.min_year = 2010;
        assert!(matches!(gdpinfo.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_multibyte_separator() {
        let mut gdpinfo = info();
        gdpinfo.separator = '→';
        assert!(matches!(gdpinfo.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_row_year_lookup() {
        let row: Row = [("Country Name", "Foo"), ("1999", "12.5")].into_iter().collect();
        assert_eq!(row.year_value(1999), Some("12.5"));
        assert_eq!(row.year_value(2000), None);
        assert_eq!(row.get("Country Name"), Some("Foo"));
    }

    #[test]
    fn test_table_insert_replaces() {
        let mut table = Table::new();
        assert!(table.insert("Foo", Row::default()).is_none());
        let first: Row = [("a", "1")].into_iter().collect();
        assert!(table.insert("Foo", first).is_some());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Foo").and_then(|r| r.get("a")), Some("1"));
    }
}
