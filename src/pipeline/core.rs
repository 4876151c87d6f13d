/// Stage orchestration: read, report Stage 1, then sort, report Stage 2,
/// tabulate and report Stage 3. Each stage finishes before the next starts.
use std::io::Write;

use tracing::{debug, warn};

use crate::error::Result;
use crate::render::{write_no_keys_notice, write_stage1, write_stage2, write_stage3};
use crate::sort::{KeySpec, sort_table};
use crate::table::{ReadStats, Table, TableLimits, read_table};
use crate::tabulate::{Report, tabulate};

/// Configuration for one run.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub limits: TableLimits,
    /// Sort keys; `None` stops after Stage 1.
    pub keys: Option<KeySpec>,
}

impl PipelineConfig {
    /// Validate raw 1-based column arguments against the default limits.
    /// No arguments means no sort keys.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let limits = TableLimits::default();
        let keys = if args.is_empty() {
            None
        } else {
            Some(KeySpec::parse(args, limits.columns)?)
        };
        Ok(PipelineConfig { limits, keys })
    }
}

/// Result of a run, for callers that need more than the rendered text.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub table: Table,
    /// `None` when the run stopped after Stage 1.
    pub report: Option<Report>,
}

impl PipelineOutcome {
    pub fn stats(&self) -> &ReadStats {
        &self.table.stats
    }
}

/// Run every stage over `input`, writing the report to `out`.
pub fn run_pipeline(
    input: &[u8],
    config: &PipelineConfig,
    out: &mut impl Write,
) -> Result<PipelineOutcome> {
    let mut table = read_table(input, &config.limits);
    log_read_losses(&table.stats, &config.limits);
    write_stage1(out, &table)?;

    let Some(keys) = &config.keys else {
        debug!("no sort keys; stopping after stage 1");
        write_no_keys_notice(out)?;
        return Ok(PipelineOutcome {
            table,
            report: None,
        });
    };

    sort_table(&mut table, keys);
    write_stage2(out, &table, keys)?;

    if keys.len() < 2 {
        warn!("only one sort column given; grouping on that column alone");
    }
    let report = tabulate(&table.rows, keys);
    debug!(
        primaries = report.primaries.len(),
        width = report.width,
        "tabulated"
    );
    write_stage3(out, &table.header, keys, &report)?;

    Ok(PipelineOutcome {
        table,
        report: Some(report),
    })
}

fn log_read_losses(stats: &ReadStats, limits: &TableLimits) {
    if stats.dropped_rows > 0 {
        warn!(
            rows = stats.dropped_rows,
            "dropped rows with fewer than {} fields", limits.columns
        );
    }
    if stats.truncated_fields > 0 {
        warn!(
            fields = stats.truncated_fields,
            "truncated fields longer than {} bytes", limits.max_field_len
        );
    }
    if stats.capacity_reached {
        warn!(
            "row limit of {} reached; remaining input ignored",
            limits.max_rows
        );
    }
}
