use super::*;
use crate::sort::{KeySpec, sort_records};
use crate::table::Record;
use proptest::prelude::*;

fn rec(fields: &[&str]) -> Record {
    Record::from(fields)
}

fn keys(cols: &[usize]) -> KeySpec {
    KeySpec::from_indices(cols, 5).unwrap()
}

fn groups(report: &Report) -> Vec<(String, String, usize)> {
    report
        .iter_groups()
        .map(|(p, s, n)| {
            (
                String::from_utf8_lossy(p).into_owned(),
                String::from_utf8_lossy(s).into_owned(),
                n,
            )
        })
        .collect()
}

fn sample_rows() -> Vec<Record> {
    vec![
        rec(&["FR", "Paris", "2020", "2000000", "100"]),
        rec(&["US", "LA", "2021", "4000000", "500"]),
        rec(&["US", "NYC", "2020", "8000000", "300"]),
    ]
}

#[test]
fn test_country_city_groups() {
    let report = tabulate(&sample_rows(), &keys(&[0, 1]));
    assert_eq!(report.primaries.len(), 2);
    assert_eq!(report.primaries[0].key, b"FR");
    assert_eq!(report.primaries[1].key, b"US");
    assert_eq!(
        groups(&report),
        vec![
            ("FR".to_string(), "Paris".to_string(), 1),
            ("US".to_string(), "LA".to_string(), 1),
            ("US".to_string(), "NYC".to_string(), 1),
        ]
    );
}

#[test]
fn test_runs_are_counted() {
    let rows = vec![
        rec(&["a", "x", "", "", ""]),
        rec(&["a", "x", "", "", ""]),
        rec(&["a", "y", "", "", ""]),
        rec(&["b", "x", "", "", ""]),
        rec(&["b", "x", "", "", ""]),
        rec(&["b", "x", "", "", ""]),
    ];
    let report = tabulate(&rows, &keys(&[0, 1]));
    assert_eq!(
        groups(&report),
        vec![
            ("a".to_string(), "x".to_string(), 2),
            ("a".to_string(), "y".to_string(), 1),
            ("b".to_string(), "x".to_string(), 3),
        ]
    );
    assert_eq!(report.primaries[1].total(), 3);
}

#[test]
fn test_width_is_shared_across_both_columns() {
    let report = tabulate(&sample_rows(), &keys(&[0, 1]));
    assert_eq!(report.width, "Paris".len());

    // Non-key columns do not widen the report.
    let report = tabulate(&sample_rows(), &keys(&[0, 2]));
    assert_eq!(report.width, 4);
}

#[test]
fn test_only_first_two_keys_group() {
    let rows = vec![
        rec(&["a", "x", "1", "", ""]),
        rec(&["a", "x", "2", "", ""]),
    ];
    let report = tabulate(&rows, &keys(&[0, 1, 2]));
    assert_eq!(groups(&report), vec![("a".to_string(), "x".to_string(), 2)]);
}

#[test]
fn test_single_key_groups_on_itself() {
    let rows = vec![
        rec(&["a", "1", "", "", ""]),
        rec(&["a", "2", "", "", ""]),
        rec(&["b", "3", "", "", ""]),
    ];
    let report = tabulate(&rows, &keys(&[0]));
    assert_eq!(
        groups(&report),
        vec![
            ("a".to_string(), "a".to_string(), 2),
            ("b".to_string(), "b".to_string(), 1),
        ]
    );
}

#[test]
fn test_empty_rows() {
    let report = tabulate(&[], &keys(&[0, 1]));
    assert!(report.is_empty());
    assert_eq!(report.width, 0);
    assert_eq!(report.total(), 0);
}

#[test]
fn test_no_keys_empty_report() {
    let report = tabulate(&sample_rows(), &keys(&[]));
    assert!(report.is_empty());
}

#[test]
fn test_unsorted_input_breaks_on_every_change() {
    let rows = vec![
        rec(&["a", "x", "", "", ""]),
        rec(&["b", "x", "", "", ""]),
        rec(&["a", "x", "", "", ""]),
    ];
    let report = tabulate(&rows, &keys(&[0, 1]));
    assert_eq!(report.primaries.len(), 3);
}

#[test]
fn test_empty_values_group() {
    let rows = vec![rec(&["", "", "", "", ""]), rec(&["", "", "", "", ""])];
    let report = tabulate(&rows, &keys(&[0, 1]));
    assert_eq!(groups(&report), vec![(String::new(), String::new(), 2)]);
}

proptest! {
    #[test]
    fn prop_counts_sum_to_rows(
        raw in prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!["", "a", "b", "c"]), 5),
            0..60,
        ),
        k0 in 0usize..5,
        k1 in 0usize..5,
    ) {
        let mut rows: Vec<Record> = raw.iter().map(|r| rec(r)).collect();
        let spec = keys(&[k0, k1]);
        sort_records(&mut rows, &spec);
        let report = tabulate(&rows, &spec);
        prop_assert_eq!(report.total(), rows.len());

        // After sorting, each primary value heads exactly one group.
        let mut seen: Vec<&[u8]> = report.primaries.iter().map(|p| p.key.as_slice()).collect();
        let before = seen.len();
        seen.dedup();
        prop_assert_eq!(before, seen.len());
    }
}
