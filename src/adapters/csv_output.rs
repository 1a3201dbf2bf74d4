//! CSV output: `symbol,annotation` rows with a header.

use crate::domain::error::WatchlistError;
use crate::domain::watchlist::Watchlist;
use crate::ports::output_port::OutputPort;
use std::io::Write;

pub struct CsvOutputAdapter;

impl OutputPort for CsvOutputAdapter {
    fn write(&self, list: &Watchlist, out: &mut dyn Write) -> Result<(), WatchlistError> {
        let mut wtr = csv::Writer::from_writer(out);
        wtr.write_record(["symbol", "annotation"])
            .map_err(|e| WatchlistError::OutputWrite {
                reason: e.to_string(),
            })?;
        for entry in &list.entries {
            wtr.write_record([
                entry.symbol.as_str(),
                entry.annotation.as_deref().unwrap_or(""),
            ])
            .map_err(|e| WatchlistError::OutputWrite {
                reason: e.to_string(),
            })?;
        }
        wtr.flush().map_err(|e| WatchlistError::OutputWrite {
            reason: e.to_string(),
        })
    }
}
