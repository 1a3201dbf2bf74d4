//! Plain text output: one symbol per line, the watchlist format itself.

use crate::domain::error::WatchlistError;
use crate::domain::watchlist::Watchlist;
use crate::ports::output_port::OutputPort;
use std::io::Write;

pub struct PlainOutputAdapter {
    /// When set, annotations are re-emitted as `SYM # note`.
    pub annotations: bool,
}

impl PlainOutputAdapter {
    pub fn new(annotations: bool) -> Self {
        Self { annotations }
    }
}

impl OutputPort for PlainOutputAdapter {
    fn write(&self, list: &Watchlist, out: &mut dyn Write) -> Result<(), WatchlistError> {
        for entry in &list.entries {
            match (&self.annotations, &entry.annotation) {
                (true, Some(note)) => writeln!(out, "{} # {}", entry.symbol, note),
                _ => writeln!(out, "{}", entry.symbol),
            }
            .map_err(|e| WatchlistError::OutputWrite {
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }
}
