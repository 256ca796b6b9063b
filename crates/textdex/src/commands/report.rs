use super::{separator, Session};
use crate::cli::Cli;
use std::fmt::Write;
use textdex_index::ReportRow;
use tracing::debug;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let session = Session::open(cli)?;
    let rows = session.engine().top_n_report(cli.top_n())?;
    debug!(requested = cli.top_n, rows = rows.len(), "built report");
    print!("{}", render(&rows, cli.json)?);
    Ok(())
}

/// One `WORD (COUNT) | files | sentences` block per row, each followed by a
/// separator line and a blank line
fn render(rows: &[ReportRow], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(rows)? + "\n");
    }

    let separator = separator();
    let mut out = String::new();
    for row in rows {
        writeln!(out, "{}", row)?;
        writeln!(out, "{}\n", separator)?;
    }
    Ok(out)
}
