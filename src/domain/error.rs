//! Domain error types.

/// Top-level error type for watchlist.
///
/// Parsing itself is infallible; errors only arise around it, when reading
/// sources, resolving configuration, or writing output.
#[derive(Debug, thiserror::Error)]
pub enum WatchlistError {
    #[error("failed to read {source_name}: {reason}")]
    SourceRead { source_name: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("no ticker file given (pass FILE or set [watchlist] file in config)")]
    NoSource,

    #[error("no tickers found in {source_name}")]
    EmptyList { source_name: String },

    #[error("failed to write output: {reason}")]
    OutputWrite { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&WatchlistError> for std::process::ExitCode {
    fn from(err: &WatchlistError) -> Self {
        let code: u8 = match err {
            WatchlistError::Io(_)
            | WatchlistError::SourceRead { .. }
            | WatchlistError::OutputWrite { .. } => 1,
            WatchlistError::ConfigParse { .. }
            | WatchlistError::ConfigMissing { .. }
            | WatchlistError::NoSource => 2,
            WatchlistError::EmptyList { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
