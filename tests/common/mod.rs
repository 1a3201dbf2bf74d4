#![allow(dead_code)]

use watchlist::domain::error::WatchlistError;
use watchlist::ports::source_port::SourcePort;

/// In-memory source for exercising code paths without touching disk.
pub struct MockSource {
    pub text: Option<String>,
    pub error: Option<String>,
    pub name: String,
}

impl MockSource {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            error: None,
            name: "mock".to_string(),
        }
    }

    pub fn with_error(reason: &str) -> Self {
        Self {
            text: None,
            error: Some(reason.to_string()),
            name: "mock".to_string(),
        }
    }
}

impl SourcePort for MockSource {
    fn read(&self) -> Result<String, WatchlistError> {
        if let Some(reason) = &self.error {
            return Err(WatchlistError::SourceRead {
                source_name: self.name.clone(),
                reason: reason.clone(),
            });
        }
        Ok(self.text.clone().unwrap_or_default())
    }

    fn origin(&self) -> String {
        self.name.clone()
    }
}
