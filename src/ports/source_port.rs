//! Watchlist source port trait.

use crate::domain::error::WatchlistError;

/// Port for reading raw watchlist text from wherever it lives.
pub trait SourcePort {
    fn read(&self) -> Result<String, WatchlistError>;

    /// Human-readable name of the source, for messages and errors.
    fn origin(&self) -> String;
}
