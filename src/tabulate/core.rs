/// Run-length grouping over sorted records, like `uniq -c` on two key columns.
///
/// Adjacent records with equal primary and secondary key values form one
/// group. Consecutive groups sharing a primary value are collected under a
/// single primary heading.
use crate::sort::KeySpec;
use crate::table::Record;

/// Count of one (primary, secondary) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub key: Vec<u8>,
    pub count: usize,
}

/// Consecutive groups sharing one primary key value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryGroup {
    pub key: Vec<u8>,
    pub groups: Vec<GroupCount>,
}

impl PrimaryGroup {
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Longest primary or secondary value, in bytes.
    pub width: usize,
    pub primaries: Vec<PrimaryGroup>,
}

impl Report {
    /// Sum of all group counts; equals the number of records tabulated.
    pub fn total(&self) -> usize {
        self.primaries.iter().map(PrimaryGroup::total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.primaries.is_empty()
    }

    /// Flattened (primary, secondary, count) triples in report order.
    pub fn iter_groups(&self) -> impl Iterator<Item = (&[u8], &[u8], usize)> {
        self.primaries.iter().flat_map(|p| {
            p.groups
                .iter()
                .map(move |g| (p.key.as_slice(), g.key.as_slice(), g.count))
        })
    }
}

/// Group `rows` (already sorted by `keys`) on the first two key columns.
///
/// With one key the secondary column is the primary column itself; with no
/// keys there is nothing to group on and the report is empty.
pub fn tabulate(rows: &[Record], keys: &KeySpec) -> Report {
    let (Some(pcol), Some(scol)) = (keys.primary(), keys.secondary()) else {
        return Report::default();
    };

    let width = rows
        .iter()
        .map(|r| r.field(pcol).len().max(r.field(scol).len()))
        .max()
        .unwrap_or(0);

    let mut primaries: Vec<PrimaryGroup> = Vec::new();
    for row in rows {
        let (pkey, skey) = (row.field(pcol), row.field(scol));
        match primaries.last_mut() {
            Some(p) if p.key == pkey => match p.groups.last_mut() {
                Some(g) if g.key == skey => g.count += 1,
                _ => p.groups.push(GroupCount {
                    key: skey.to_vec(),
                    count: 1,
                }),
            },
            _ => primaries.push(PrimaryGroup {
                key: pkey.to_vec(),
                groups: vec![GroupCount {
                    key: skey.to_vec(),
                    count: 1,
                }],
            }),
        }
    }

    Report { width, primaries }
}
