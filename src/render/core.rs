/// Text rendering of the three report stages.
///
/// Padding is measured in bytes, matching how field lengths and the
/// tabulation width are measured.
use std::io::{self, Write};

use crate::sort::KeySpec;
use crate::table::{Record, Table};
use crate::tabulate::Report;

/// Width of the header label in row dumps.
const LABEL_WIDTH: usize = 10;
/// Width of the right-aligned count column.
const COUNT_WIDTH: usize = 5;
/// Extra padding after the primary key heading.
const INDENT: &[u8] = b"    ";
const DELIMITER: &[u8] = b"------------------\n";

pub const NO_KEYS_NOTICE: &str = "No column numbers provided. Exiting after Stage 1.";

/// Write `value` left-aligned in a field of `width` bytes.
#[inline]
fn write_padded(out: &mut impl Write, value: &[u8], width: usize) -> io::Result<()> {
    out.write_all(value)?;
    for _ in value.len()..width {
        out.write_all(b" ")?;
    }
    Ok(())
}

/// `row N is:` followed by one `   i: <header> <value>` line per column.
pub fn write_row(out: &mut impl Write, header: &Record, row: &Record, number: usize) -> io::Result<()> {
    writeln!(out, "row {} is:", number)?;
    for (i, value) in row.fields().iter().enumerate() {
        write!(out, "   {}: ", i + 1)?;
        write_padded(out, header.field(i), LABEL_WIDTH)?;
        out.write_all(b" ")?;
        out.write_all(value)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Stage 1: table dimensions and the last row read.
pub fn write_stage1(out: &mut impl Write, table: &Table) -> io::Result<()> {
    writeln!(out, "Stage 1")?;
    writeln!(
        out,
        "input tsv data has {} rows and {} columns",
        table.nrows(),
        table.columns
    )?;
    if let Some(last) = table.last_row() {
        write_row(out, &table.header, last, table.nrows())?;
    }
    Ok(())
}

pub fn write_no_keys_notice(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", NO_KEYS_NOTICE)
}

/// 1-based number of the middle row, ceil(n / 2).
#[inline]
pub fn middle_row(nrows: usize) -> usize {
    nrows.div_ceil(2)
}

/// Stage 2: the sort order, then the first, middle and last sorted rows.
pub fn write_stage2(out: &mut impl Write, table: &Table, keys: &KeySpec) -> io::Result<()> {
    writeln!(out, "\nStage 2")?;
    for (i, &col) in keys.columns().iter().enumerate() {
        if i == 0 {
            out.write_all(b"sorting by \"")?;
        } else {
            out.write_all(b",\n   then by \"")?;
        }
        out.write_all(table.header.field(col))?;
        out.write_all(b"\"")?;
    }
    out.write_all(b"\n")?;

    let n = table.nrows();
    if n == 0 {
        return Ok(());
    }
    for number in [1, middle_row(n), n] {
        write_row(out, &table.header, &table.rows[number - 1], number)?;
    }
    Ok(())
}

/// Stage 3: column headings, grouped counts and the closing lines.
pub fn write_stage3(out: &mut impl Write, header: &Record, keys: &KeySpec, report: &Report) -> io::Result<()> {
    writeln!(out, "\nStage 3")?;
    out.write_all(DELIMITER)?;
    if let (Some(pcol), Some(scol)) = (keys.primary(), keys.secondary()) {
        out.write_all(header.field(pcol))?;
        out.write_all(b"\n")?;
        out.write_all(INDENT)?;
        write_padded(out, header.field(scol), report.width)?;
        writeln!(out, " {:>w$}", "Count", w = COUNT_WIDTH)?;
    }
    out.write_all(DELIMITER)?;

    for (i, primary) in report.primaries.iter().enumerate() {
        if i > 0 {
            out.write_all(b"\n")?;
        }
        write_padded(out, &primary.key, report.width + INDENT.len())?;
        out.write_all(b"\n")?;
        for group in &primary.groups {
            out.write_all(INDENT)?;
            write_padded(out, &group.key, report.width)?;
            writeln!(out, " {:>w$}", group.count, w = COUNT_WIDTH)?;
        }
    }

    out.write_all(DELIMITER)?;
    writeln!(out, "ta daa!")
}
