//! Flag dispatchers for the two programs.

mod number_verification;
mod roaming;

pub use number_verification::NumberVerificationCli;
pub use roaming::RoamingCli;

use crate::error::AppResult;
use serde_json::Value;
use std::io::Write;
use tracing::error;

/// Outcome of one dispatch: how many requested operations succeeded or failed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub succeeded: usize,
    pub failed: usize,
}

impl Summary {
    /// True when nothing failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Count an operation, logging it if it failed.
    fn record(&mut self, result: AppResult<()>) {
        match result {
            Ok(()) => self.succeeded += 1,
            Err(e) => {
                error!("An error occurred: {}", e);
                self.failed += 1;
            }
        }
    }
}

/// A flag value that should trigger its operation: given and not empty.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Write one JSON response per line, indented when `pretty` is set.
fn print_json<W: Write>(out: &mut W, value: &Value, pretty: bool) -> AppResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
