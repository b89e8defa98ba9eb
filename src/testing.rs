//! Generators shared by the property tests.

use proptest::prelude::*;

use crate::models::{NameMapping, Row, Table};

/// Years cells are generated for; wider than the windows the tests use so
/// rows carry columns on both sides of them.
pub(crate) const YEARS: std::ops::RangeInclusive<i32> = 1998..=2006;

/// Raw cell text: mostly numbers, plus the blank, junk and edge values a
/// GDP export actually contains.
pub(crate) fn arb_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (-1.0e13..1.0e13f64).prop_map(|v| v.to_string()),
        2 => r"[0-9]{1,12}(\.[0-9]{1,4})?",
        1 => Just(String::new()),
        1 => r"[ \t]{1,3}",
        1 => r"[a-zA-Z./]{1,6}",
        1 => Just("0".to_string()),
        1 => Just("-0".to_string()),
        1 => r"-[0-9]{1,6}",
        1 => Just("nan".to_string()),
        1 => Just("inf".to_string()),
        1 => Just("-inf".to_string()),
    ]
}

pub(crate) fn arb_row() -> impl Strategy<Value = Row> {
    prop::collection::hash_map(YEARS.prop_map(|y| y.to_string()), arb_cell(), 0..8)
        .prop_map(|cells| cells.into_iter().collect())
}

/// Country names drawn from a small alphabet so map names and table keys
/// collide often.
pub(crate) fn arb_name() -> impl Strategy<Value = String> {
    r"[A-Ca-c][a-c .]{0,2}"
}

pub(crate) fn arb_table() -> impl Strategy<Value = Table> {
    prop::collection::hash_map(arb_name(), arb_row(), 0..10)
        .prop_map(|rows| rows.into_iter().collect())
}

pub(crate) fn arb_mapping() -> impl Strategy<Value = NameMapping> {
    prop::collection::btree_map(r"[a-z]{2}", arb_name(), 0..16)
}
