use std::io::{self, BufWriter, IsTerminal, Write};
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tsvtab::common::io::read_stdin;
use tsvtab::common::reset_sigpipe;
use tsvtab::error::Error;
use tsvtab::pipeline::{PipelineConfig, run_pipeline};

const TOOL_NAME: &str = "ftsvtab";

#[derive(Parser)]
#[command(
    name = "ftsvtab",
    version,
    about = "Sort tab-separated records by columns and count groups",
    after_help = "Reads a header line and data lines of five tab-separated fields \
                  from standard input. COLUMNs are 1-based, primary key first; \
                  the first two are grouped and counted.\n\n\
                  Set FTSVTAB_LOG (e.g. debug) to control diagnostics on stderr."
)]
struct Cli {
    /// Sort columns in priority order (1-based)
    #[arg(value_name = "COLUMN", allow_hyphen_values = true)]
    columns: Vec<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("FTSVTAB_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() {
    reset_sigpipe();
    init_logging();
    let cli = Cli::parse();

    // Column arguments are checked before any input is read.
    let config = match PipelineConfig::from_args(cli.columns.as_slice()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}: {}", TOOL_NAME, e);
            process::exit(e.exit_code());
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("{}: {:#}", TOOL_NAME, e);
        let code = e.downcast_ref::<Error>().map_or(2, Error::exit_code);
        process::exit(code);
    }
}

fn run(config: &PipelineConfig) -> anyhow::Result<()> {
    let input = read_stdin().context("standard input")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let outcome = run_pipeline(&input, config, &mut out)?;
    out.flush().context("write error")?;

    tracing::debug!(
        rows = outcome.table.nrows(),
        lossless = outcome.stats().is_lossless(),
        "done"
    );
    Ok(())
}
