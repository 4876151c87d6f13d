/// Record store: reads the header and data rows of a TSV stream into a table
/// of fixed-arity records.
use tracing::debug;

use crate::field::{FieldReader, Terminator};

/// Bounds applied while reading a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLimits {
    /// Fields per record. Rows with fewer fields are dropped.
    pub columns: usize,
    /// Reading stops once this many rows are stored.
    pub max_rows: usize,
    /// Longest field value kept; longer values are truncated.
    pub max_field_len: usize,
}

impl Default for TableLimits {
    fn default() -> Self {
        TableLimits {
            columns: 5,
            max_rows: 1000,
            max_field_len: 50,
        }
    }
}

/// One row of fields, addressed by column index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<Vec<u8>>,
}

impl Record {
    pub fn new(fields: Vec<Vec<u8>>) -> Self {
        Record { fields }
    }

    /// Field at `col`; empty when the record has no such column.
    #[inline]
    pub fn field(&self, col: usize) -> &[u8] {
        self.fields.get(col).map(Vec::as_slice).unwrap_or(b"")
    }

    pub fn fields(&self) -> &[Vec<u8>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl<S: AsRef<[u8]>> From<&[S]> for Record {
    fn from(fields: &[S]) -> Self {
        Record::new(fields.iter().map(|f| f.as_ref().to_vec()).collect())
    }
}

/// What was lost while reading, for callers that want to report it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Rows that ended before `columns` fields were read.
    pub dropped_rows: usize,
    /// Fields (header included) cut to `max_field_len`.
    pub truncated_fields: usize,
    /// Input remained after the table filled up.
    pub capacity_reached: bool,
}

impl ReadStats {
    pub fn is_lossless(&self) -> bool {
        self.dropped_rows == 0 && self.truncated_fields == 0 && !self.capacity_reached
    }
}

/// Header plus data rows, in input order until sorted.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub header: Record,
    pub rows: Vec<Record>,
    pub columns: usize,
    pub stats: ReadStats,
}

impl Table {
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The most recently read row (before sorting, the last input row).
    pub fn last_row(&self) -> Option<&Record> {
        self.rows.last()
    }
}

/// Read a header record and up to `limits.max_rows` data records.
///
/// The header is always the first `columns` fields, whatever their
/// terminators. Each data row reads fields until `columns` are read or a
/// newline/end of input ends the row; only complete rows are stored.
pub fn read_table(input: &[u8], limits: &TableLimits) -> Table {
    let columns = limits.columns.max(1);
    let mut reader = FieldReader::new(input, limits.max_field_len);
    let mut stats = ReadStats::default();

    let mut header = Vec::with_capacity(columns);
    for _ in 0..columns {
        let f = reader.next_field();
        stats.truncated_fields += f.truncated as usize;
        header.push(f.value);
    }

    let mut rows = Vec::new();
    while rows.len() < limits.max_rows {
        let mut fields = Vec::with_capacity(columns);
        let mut truncated = 0;
        let mut terminator = Terminator::FieldEnd;
        while fields.len() < columns {
            let f = reader.next_field();
            truncated += f.truncated as usize;
            terminator = f.terminator;
            fields.push(f.value);
            if terminator.ends_record() {
                break;
            }
        }

        if fields.len() == columns {
            stats.truncated_fields += truncated;
            rows.push(Record::new(fields));
        } else if !is_stream_tail(&fields, terminator) {
            stats.dropped_rows += 1;
        }

        if terminator == Terminator::StreamEnd {
            break;
        }
    }
    stats.capacity_reached = rows.len() == limits.max_rows && !reader.is_at_end();

    debug!(
        rows = rows.len(),
        columns,
        dropped = stats.dropped_rows,
        truncated = stats.truncated_fields,
        "table read"
    );

    Table {
        header: Record::new(header),
        rows,
        columns,
        stats,
    }
}

/// The empty "row" after a final newline is not a malformed row.
#[inline]
fn is_stream_tail(fields: &[Vec<u8>], terminator: Terminator) -> bool {
    terminator == Terminator::StreamEnd && fields.len() == 1 && fields[0].is_empty()
}
