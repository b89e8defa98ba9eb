//! Matching plot library country codes against the names used in the GDP
//! table.
//!
//! [`reconcile_countries_by_name`] compares names byte for byte. Naming drift
//! between providers ("Korea, Rep." vs "Korea, Republic of") is reported in
//! `unmatched`, never guessed at. [`reconcile_countries_normalized`] is an
//! opt-in layer that tolerates case, spacing and dot differences.

use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::debug;

use crate::models::{NameMapping, Reconciliation, Table};

/// Split `plot_countries` into codes whose name is a key of `table` and codes
/// whose name is not.
pub fn reconcile_countries_by_name(plot_countries: &NameMapping, table: &Table) -> Reconciliation {
    let mut reconciliation = Reconciliation::default();

    for (code, name) in plot_countries {
        if table.contains_key(name) {
            reconciliation.matched.insert(code.clone(), name.clone());
        } else {
            reconciliation.unmatched.insert(code.clone());
        }
    }

    debug!(
        "reconciled {} codes: {} matched, {} unmatched",
        plot_countries.len(),
        reconciliation.matched.len(),
        reconciliation.unmatched.len()
    );
    reconciliation
}

/// Lower-case, trim, collapse whitespace runs and drop `.`.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.replace('.', "").to_lowercase())
        .filter(|word| !word.is_empty())
        .join(" ")
}

/// Like [`reconcile_countries_by_name`], but compares normalized names.
///
/// `matched` maps each code to the table's own spelling so the row can still
/// be looked up directly. When several table names normalize alike the
/// lexicographically smallest one is used.
pub fn reconcile_countries_normalized(plot_countries: &NameMapping, table: &Table) -> Reconciliation {
    let mut index: BTreeMap<String, &str> = BTreeMap::new();
    for name in table.keys().sorted() {
        index.entry(normalize_name(name)).or_insert(name);
    }

    let mut reconciliation = Reconciliation::default();
    for (code, name) in plot_countries {
        match index.get(&normalize_name(name)) {
            Some(table_name) => {
                reconciliation.matched.insert(code.clone(), table_name.to_string());
            }
            None => {
                reconciliation.unmatched.insert(code.clone());
            }
        }
    }

    debug!(
        "normalized reconciliation of {} codes: {} matched, {} unmatched",
        plot_countries.len(),
        reconciliation.matched.len(),
        reconciliation.unmatched.len()
    );
    reconciliation
}
