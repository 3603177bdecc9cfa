//! The replay loop: read the log line by line, apply records, write query
//! output.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};
use waybill_core::{ParseError, ParsedLine, Simulator, parse_line};

use crate::output::{OutputMode, write_reply};

/// Replay `log` to stdout.
///
/// Error discipline: a malformed line is reported and skipped; an unknown
/// event-type token aborts the run; an unreadable file is fatal before any
/// processing.
pub fn run(log: &Path, mode: OutputMode) -> Result<()> {
    let file =
        File::open(log).with_context(|| format!("cannot open log file {}", log.display()))?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut sim = Simulator::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("read error at line {line_no}"))?;
        match parse_line(&line) {
            Ok(ParsedLine::Blank) => {}
            Ok(ParsedLine::Unsupported { verb }) => {
                debug!(line_no, verb = %verb, "skipping unsupported record verb");
            }
            Ok(ParsedLine::Record(record)) => {
                if let Some(reply) = sim.apply(record) {
                    write_reply(&mut out, &reply, mode)?;
                }
            }
            Err(ParseError::UnknownEventKind(err)) => {
                bail!("line {line_no}: {err}");
            }
            Err(err) => {
                warn!(line_no, error = %err, "skipping malformed line");
            }
        }
    }

    out.flush().context("flushing output")?;
    Ok(())
}
