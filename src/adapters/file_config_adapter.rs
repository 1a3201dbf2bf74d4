//! INI file configuration adapter.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(|e| std::io::Error::other(e))?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.config
            .get(section, key)
            .as_ref()
            .and_then(|v| Self::parse_bool(v))
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn from_string_parses_config() {
        let content = r#"
[watchlist]
file = lists/asx_200_tickers.txt
suffix = .AX
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(
            adapter.get_string("watchlist", "file"),
            Some("lists/asx_200_tickers.txt".to_string())
        );
        assert_eq!(
            adapter.get_string("watchlist", "suffix"),
            Some(".AX".to_string())
        );
    }

    #[test]
    fn from_file_parses_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[watchlist]\nfile = tickers.txt\n").unwrap();
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("watchlist", "file"),
            Some("tickers.txt".to_string())
        );
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[watchlist]\nfile = x\n").unwrap();
        assert_eq!(adapter.get_string("watchlist", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "key"), None);
    }

    #[test]
    fn get_int_returns_value_or_default() {
        let adapter = FileConfigAdapter::from_string("[watchlist]\nmax_symbols = 500\n").unwrap();
        assert_eq!(adapter.get_int("watchlist", "max_symbols", 0), 500);
        assert_eq!(adapter.get_int("watchlist", "missing", 42), 42);
    }

    #[test]
    fn get_bool_parses_truthy_and_falsy_spellings() {
        let adapter =
            FileConfigAdapter::from_string("[watchlist]\nunique = yes\nannotate = 0\n").unwrap();
        assert!(adapter.get_bool("watchlist", "unique", false));
        assert!(!adapter.get_bool("watchlist", "annotate", true));
        assert!(adapter.get_bool("watchlist", "missing", true));
    }

    #[test]
    fn from_file_missing_path_is_io_error() {
        assert!(FileConfigAdapter::from_file("/no/such/config.ini").is_err());
    }
}
