//! Watchlist parsing: a single pass over newline-delimited text.
//!
//! Per line: blank lines and lines whose first non-whitespace character is
//! `#` are ignored; otherwise the token is the text before the first `#`,
//! trimmed and uppercased, with the remainder kept as an annotation.
//! Pipe-delimited screener exports (`AAPL|Apple Inc.|...`) yield the first
//! field, and a `Symbol|Security Name` header row is skipped once.
//!
//! Parsing is total: no input produces an error, and the same input always
//! produces the same list.

use crate::domain::entry::Entry;

/// Marker identifying the header row of pipe-delimited screener exports.
const SCREENER_HEADER: &str = "Symbol|Security Name";

/// An ordered list of ticker entries, in source-file order. The format
/// enforces no uniqueness; duplicates are preserved as authored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    pub entries: Vec<Entry>,
}

impl Watchlist {
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Symbols in file order, duplicates included.
    pub fn symbols(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.symbol.clone()).collect()
    }

    /// A copy with repeated symbols removed; the first occurrence wins.
    pub fn deduped(&self) -> Watchlist {
        let mut seen = std::collections::HashSet::new();
        Watchlist {
            entries: self
                .entries
                .iter()
                .filter(|e| seen.insert(e.symbol.clone()))
                .cloned()
                .collect(),
        }
    }

    /// Symbols that appear more than once, with the source lines of every
    /// occurrence. Reporting only; duplicates are legal in the format.
    pub fn duplicates(&self) -> Vec<(String, Vec<usize>)> {
        let mut lines_by_symbol: Vec<(String, Vec<usize>)> = Vec::new();
        for entry in &self.entries {
            match lines_by_symbol.iter_mut().find(|(s, _)| *s == entry.symbol) {
                Some((_, lines)) => lines.push(entry.line),
                None => lines_by_symbol.push((entry.symbol.clone(), vec![entry.line])),
            }
        }
        lines_by_symbol.retain(|(_, lines)| lines.len() > 1);
        lines_by_symbol
    }
}

/// Parse watchlist text into an ordered entry list.
pub fn parse(input: &str) -> Watchlist {
    let mut entries = Vec::new();
    let mut skipped_header = false;

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !skipped_header && line.contains(SCREENER_HEADER) {
            skipped_header = true;
            continue;
        }

        let (data, annotation) = match line.split_once('#') {
            Some((data, note)) => {
                let note = note.trim();
                (
                    data,
                    if note.is_empty() {
                        None
                    } else {
                        Some(note.to_string())
                    },
                )
            }
            None => (line, None),
        };

        // Screener exports put the symbol in the first pipe-separated field.
        let symbol = match data.split_once('|') {
            Some((first, _)) => first.trim(),
            None => data.trim(),
        };
        if symbol.is_empty() {
            continue;
        }

        entries.push(Entry {
            symbol: symbol.to_uppercase(),
            annotation,
            line: idx + 1,
        });
    }

    Watchlist { entries }
}
