//! A single watchlist entry: one ticker symbol plus its source context.

/// One data line of a watchlist, after comment stripping and normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Uppercased ticker symbol.
    pub symbol: String,
    /// Free-text annotation following `#` on the data line, if any.
    pub annotation: Option<String>,
    /// 1-based line number in the source text.
    pub line: usize,
}

impl Entry {
    pub fn new(symbol: impl Into<String>, line: usize) -> Self {
        Self {
            symbol: symbol.into(),
            annotation: None,
            line,
        }
    }

    /// Whether the symbol looks like an exchange ticker: non-empty ASCII
    /// uppercase letters and digits, with `.` and `-` allowed for class
    /// shares and exchange suffixes (`BRK.B`, `BHP.AX`).
    pub fn is_well_formed(&self) -> bool {
        !self.symbol.is_empty()
            && self
                .symbol
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '.' || c == '-')
    }
}
