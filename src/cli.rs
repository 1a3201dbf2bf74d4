//! CLI definition and dispatch.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_output::CsvOutputAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::file_source_adapter::FileSourceAdapter;
use crate::adapters::plain_output::PlainOutputAdapter;
use crate::domain::error::WatchlistError;
use crate::domain::exchange::{apply_suffix, detect_suffix, normalize_suffix};
use crate::domain::watchlist::{self, Watchlist};
use crate::ports::config_port::ConfigPort;
use crate::ports::output_port::OutputPort;
use crate::ports::source_port::SourcePort;

#[derive(Parser, Debug)]
#[command(name = "watchlist", about = "Ticker watchlist tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the tickers in a watchlist
    List {
        /// Watchlist file; falls back to [watchlist] file in config
        file: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Exchange suffix to append (e.g. .AX); overrides config and
        /// filename detection
        #[arg(long)]
        suffix: Option<String>,
        /// Drop repeated symbols, keeping the first occurrence
        #[arg(long)]
        unique: bool,
        #[arg(long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },
    /// Inspect a watchlist and report duplicates and odd-looking symbols
    Check {
        file: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Rewrite a watchlist as normalized plain text or CSV
    Convert {
        file: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        suffix: Option<String>,
        #[arg(long, value_enum, default_value = "plain")]
        format: OutputFormat,
        /// Re-emit inline annotations (plain format only)
        #[arg(long)]
        keep_annotations: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Csv,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::List {
            file,
            config,
            suffix,
            unique,
            format,
        } => run_list(file, config.as_ref(), suffix.as_deref(), unique, format),
        Command::Check { file, config } => run_check(file, config.as_ref()),
        Command::Convert {
            file,
            config,
            output,
            suffix,
            format,
            keep_annotations,
        } => run_convert(
            file,
            config.as_ref(),
            output.as_ref(),
            suffix.as_deref(),
            format,
            keep_annotations,
        ),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = WatchlistError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Pick the watchlist path: explicit argument first, then `[watchlist] file`
/// from config.
pub fn resolve_file(
    file: Option<PathBuf>,
    config: Option<&dyn ConfigPort>,
) -> Result<PathBuf, WatchlistError> {
    if let Some(path) = file {
        return Ok(path);
    }
    if let Some(config) = config {
        if let Some(path) = config.get_string("watchlist", "file") {
            return Ok(PathBuf::from(path));
        }
    }
    Err(WatchlistError::NoSource)
}

/// Pick the exchange suffix: explicit flag, then `[watchlist] suffix` from
/// config, then filename detection (`asx` in the name implies `.AX`).
pub fn resolve_suffix(
    explicit: Option<&str>,
    config: Option<&dyn ConfigPort>,
    path: &Path,
) -> Option<String> {
    if let Some(suffix) = explicit {
        return Some(normalize_suffix(suffix));
    }
    if let Some(config) = config {
        if let Some(suffix) = config.get_string("watchlist", "suffix") {
            return Some(normalize_suffix(&suffix));
        }
    }
    detect_suffix(path).map(str::to_string)
}

fn read_list(source: &dyn SourcePort) -> Result<Watchlist, WatchlistError> {
    Ok(watchlist::parse(&source.read()?))
}

fn make_output(format: OutputFormat, annotations: bool) -> Box<dyn OutputPort> {
    match format {
        OutputFormat::Plain => Box::new(PlainOutputAdapter::new(annotations)),
        OutputFormat::Csv => Box::new(CsvOutputAdapter),
    }
}

fn run_list(
    file: Option<PathBuf>,
    config_path: Option<&PathBuf>,
    suffix: Option<&str>,
    unique: bool,
    format: OutputFormat,
) -> ExitCode {
    let config = match config_path {
        Some(path) => match load_config(path) {
            Ok(c) => Some(c),
            Err(code) => return code,
        },
        None => None,
    };
    let config_port = config.as_ref().map(|c| c as &dyn ConfigPort);

    let path = match resolve_file(file, config_port) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let source = FileSourceAdapter::new(path.clone());
    let mut list = match read_list(&source) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if let Some(suffix) = resolve_suffix(suffix, config_port, &path) {
        eprintln!("Applying exchange suffix {suffix}");
        apply_suffix(&mut list, &suffix);
    }

    if unique {
        let before = list.count();
        list = list.deduped();
        if list.count() < before {
            eprintln!("Dropped {} duplicate symbol(s)", before - list.count());
        }
    }

    if list.is_empty() {
        eprintln!("warning: no tickers found in {}", source.origin());
    } else {
        eprintln!("Loaded {} tickers from {}", list.count(), source.origin());
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = make_output(format, false).write(&list, &mut stdout) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    ExitCode::SUCCESS
}

fn run_check(file: Option<PathBuf>, config_path: Option<&PathBuf>) -> ExitCode {
    let config = match config_path {
        Some(path) => match load_config(path) {
            Ok(c) => Some(c),
            Err(code) => return code,
        },
        None => None,
    };
    let config_port = config.as_ref().map(|c| c as &dyn ConfigPort);

    let path = match resolve_file(file, config_port) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let source = FileSourceAdapter::new(path);
    eprintln!("Checking {}", source.origin());
    let list = match read_list(&source) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if list.is_empty() {
        let err = WatchlistError::EmptyList {
            source_name: source.origin(),
        };
        eprintln!("error: {err}");
        return (&err).into();
    }

    eprintln!("{} tickers", list.count());

    let mut findings = 0usize;
    for (symbol, lines) in list.duplicates() {
        findings += 1;
        let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        eprintln!("  duplicate: {} (lines {})", symbol, lines.join(", "));
    }
    for entry in list.entries.iter().filter(|e| !e.is_well_formed()) {
        findings += 1;
        eprintln!("  odd symbol: {} (line {})", entry.symbol, entry.line);
    }

    if findings == 0 {
        eprintln!("Watchlist is clean");
    } else {
        eprintln!("{findings} finding(s); the format allows these, downstream tools may not");
    }
    ExitCode::SUCCESS
}

fn run_convert(
    file: Option<PathBuf>,
    config_path: Option<&PathBuf>,
    output: Option<&PathBuf>,
    suffix: Option<&str>,
    format: OutputFormat,
    keep_annotations: bool,
) -> ExitCode {
    let config = match config_path {
        Some(path) => match load_config(path) {
            Ok(c) => Some(c),
            Err(code) => return code,
        },
        None => None,
    };
    let config_port = config.as_ref().map(|c| c as &dyn ConfigPort);

    let path = match resolve_file(file, config_port) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let source = FileSourceAdapter::new(path.clone());
    let mut list = match read_list(&source) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if let Some(suffix) = resolve_suffix(suffix, config_port, &path) {
        apply_suffix(&mut list, &suffix);
    }

    if list.is_empty() {
        eprintln!("warning: no tickers found in {}", source.origin());
    }

    let writer = make_output(format, keep_annotations);
    let result = match output {
        Some(out_path) => write_to_file(writer.as_ref(), &list, out_path),
        None => {
            let mut stdout = std::io::stdout().lock();
            writer.write(&list, &mut stdout)
        }
    };

    match result {
        Ok(()) => {
            match output {
                Some(out_path) => eprintln!(
                    "Wrote {} tickers to {}",
                    list.count(),
                    out_path.display()
                ),
                None => eprintln!("Wrote {} tickers", list.count()),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn write_to_file(
    writer: &dyn OutputPort,
    list: &Watchlist,
    path: &Path,
) -> Result<(), WatchlistError> {
    let mut buf = Vec::new();
    writer.write(list, &mut buf)?;
    fs::write(path, &buf)?;
    Ok(())
}
