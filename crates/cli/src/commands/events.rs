//! Browser event stream from stdin

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use kindavm_hid_common::ReportSink;
use kindavm_input::{EventHandler, InputError};
use tracing::{info, warn};

use crate::output;

/// Apply one JSON event per stdin line.
///
/// Malformed or invalid events are reported and skipped. A transport
/// failure ends the stream.
pub fn execute(sink: Box<dyn ReportSink>, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let (handled, rejected) = run(sink, stdin.lock())?;
    info!(handled, rejected, "event stream finished");
    if rejected > 0 {
        output::print_warning(&format!("{rejected} event(s) rejected"), json);
    }
    Ok(())
}

fn run<S: ReportSink, R: BufRead>(sink: S, input: R) -> Result<(usize, usize)> {
    let mut handler = EventHandler::new(sink);
    let (mut handled, mut rejected) = (0usize, 0usize);

    for (index, line) in input.lines().enumerate() {
        let line = line.context("Failed to read event stream")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match handler.handle_json(line) {
            Ok(()) => handled += 1,
            Err(InputError::Transport(err)) => {
                return Err(InputError::Transport(err))
                    .with_context(|| format!("Event on line {} not delivered", index + 1));
            }
            Err(err) => {
                warn!(line = index + 1, "Skipping event: {err}");
                rejected += 1;
            }
        }
    }
    Ok((handled, rejected))
}
