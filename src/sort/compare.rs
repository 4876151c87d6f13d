/// Record comparison across a key chain.
use std::cmp::Ordering;

use super::key::KeySpec;
use crate::table::Record;

/// Byte-wise comparison of one field (no numeric or locale handling).
#[inline]
pub fn compare_lexical(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// Compare two records key by key; the first unequal key decides.
#[inline]
pub fn compare_records(a: &Record, b: &Record, keys: &KeySpec) -> Ordering {
    for &col in keys.columns() {
        match compare_lexical(a.field(col), b.field(col)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
