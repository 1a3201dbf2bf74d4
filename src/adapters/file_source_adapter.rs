//! Filesystem-backed watchlist source.

use crate::domain::error::WatchlistError;
use crate::ports::source_port::SourcePort;
use std::fs;
use std::path::PathBuf;

pub struct FileSourceAdapter {
    path: PathBuf,
}

impl FileSourceAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SourcePort for FileSourceAdapter {
    fn read(&self) -> Result<String, WatchlistError> {
        fs::read_to_string(&self.path).map_err(|e| WatchlistError::SourceRead {
            source_name: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_file_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "AAPL\nMSFT\n").unwrap();
        let adapter = FileSourceAdapter::new(file.path().to_path_buf());
        assert_eq!(adapter.read().unwrap(), "AAPL\nMSFT\n");
    }

    #[test]
    fn missing_file_is_a_source_read_error() {
        let adapter = FileSourceAdapter::new(PathBuf::from("/no/such/tickers.txt"));
        let err = adapter.read().unwrap_err();
        assert!(matches!(err, WatchlistError::SourceRead { .. }));
        assert!(err.to_string().contains("/no/such/tickers.txt"));
    }

    #[test]
    fn origin_is_the_path() {
        let adapter = FileSourceAdapter::new(PathBuf::from("lists/tickers.txt"));
        assert_eq!(adapter.origin(), "lists/tickers.txt");
    }
}
