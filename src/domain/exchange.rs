//! Exchange suffix handling for lists that need provider-qualified symbols
//! (ASX lists use `CBA.AX` rather than `CBA`).

use crate::domain::watchlist::Watchlist;
use std::path::Path;

/// Suffix appended to ASX symbols when a list is detected as an ASX list.
pub const ASX_SUFFIX: &str = ".AX";

/// Canonical form of a user-supplied suffix: uppercase, exactly one leading dot.
pub fn normalize_suffix(suffix: &str) -> String {
    let trimmed = suffix.trim().trim_start_matches('.');
    format!(".{}", trimmed.to_uppercase())
}

/// Infer a suffix from the list's filename. A name containing `asx`
/// (any case) implies an ASX list.
pub fn detect_suffix(path: &Path) -> Option<&'static str> {
    let name = path.file_name()?.to_string_lossy().to_lowercase();
    if name.contains("asx") {
        Some(ASX_SUFFIX)
    } else {
        None
    }
}

/// Append `suffix` to every symbol that does not already carry it.
/// Idempotent: applying the same suffix twice changes nothing.
pub fn apply_suffix(list: &mut Watchlist, suffix: &str) {
    for entry in &mut list.entries {
        if !entry.symbol.ends_with(suffix) {
            entry.symbol.push_str(suffix);
        }
    }
}
