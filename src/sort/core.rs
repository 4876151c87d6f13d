/// Stable multi-key sort of table rows, in place.
///
/// Records equal on every key keep their input order.
use tracing::debug;

use super::compare::compare_records;
use super::key::KeySpec;
use crate::table::{Record, Table};

/// Sort `rows` by `keys`. An empty key spec leaves the order untouched.
pub fn sort_records(rows: &mut [Record], keys: &KeySpec) {
    if keys.is_empty() || rows.len() < 2 {
        return;
    }
    rows.sort_by(|a, b| compare_records(a, b, keys));
}

/// Sort the data rows of `table`; the header is not touched.
pub fn sort_table(table: &mut Table, keys: &KeySpec) {
    sort_records(&mut table.rows, keys);
    debug!(rows = table.nrows(), keys = ?keys.columns(), "table sorted");
}

/// True if `rows` are already in `keys` order.
pub fn is_sorted(rows: &[Record], keys: &KeySpec) -> bool {
    rows.windows(2)
        .all(|w| compare_records(&w[0], &w[1], keys) != std::cmp::Ordering::Greater)
}
