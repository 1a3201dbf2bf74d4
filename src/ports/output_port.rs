//! Watchlist output port trait.

use crate::domain::error::WatchlistError;
use crate::domain::watchlist::Watchlist;
use std::io::Write;

/// Port for rendering a watchlist to a byte sink (stdout, a file, a buffer).
pub trait OutputPort {
    fn write(&self, list: &Watchlist, out: &mut dyn Write) -> Result<(), WatchlistError>;
}
