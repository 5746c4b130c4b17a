//! High-level pipeline: load → clean → filter/sort → project → write.
//!
//! # Example
//!
//! ```rust,ignore
//! use ticker_lists::{run, PipelineOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = run(&PipelineOptions::default())?;
//!     println!("Wrote {} tickers", report.stats.entries_per_view);
//!     Ok(())
//! }
//! ```

use serde::Serialize;
use std::path::PathBuf;

use super::clean::{clean, clean_symbol, count_duplicates, filter_and_sort, NameRule};
use super::project::project;
use crate::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR};
use crate::error::PipelineResult;
use crate::logs::{log_info, log_info_indent, log_success, log_warning, log_warning_indent};
use crate::models::{RawRecord, StripMode, TickerRecord, View};
use crate::output::write_all;
use crate::parser::load;

/// Options for the pipeline
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Metadata CSV
    pub input: PathBuf,

    /// Directory receiving the three lists
    pub output_dir: PathBuf,

    /// Prefix removal rule
    pub strip_mode: StripMode,

    /// Pretty-print the JSON lists
    pub pretty: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            strip_mode: StripMode::default(),
            pretty: false,
        }
    }
}

/// Counters collected while cleaning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub rows_read: usize,
    /// Rows whose symbol was empty after prefix removal
    pub dropped_empty_symbol: usize,
    /// Kept names blanked by the `Untitled` rule
    pub names_blanked: usize,
    /// Kept names cut at `(`
    pub names_truncated: usize,
    /// Records sharing a symbol with the previous one
    pub duplicate_symbols: usize,
    /// Entries in each of the three lists
    pub entries_per_view: usize,
}

/// Outcome of a complete run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub stats: PipelineStats,
    /// Encoding the input was decoded with
    pub encoding: String,
    /// Lists written, in [`View::ALL`] order
    pub written: Vec<(View, PathBuf)>,
}

/// Clean, filter and sort raw rows, collecting statistics.
///
/// This is everything except I/O; `run` and the `inspect` command share it.
pub fn prepare(raw: &[RawRecord], mode: StripMode) -> (Vec<TickerRecord>, PipelineStats) {
    let mut stats = PipelineStats {
        rows_read: raw.len(),
        ..Default::default()
    };

    // Only rows that survive the empty-symbol filter are counted.
    let kept = raw
        .iter()
        .filter(|r| !clean_symbol(&r.symbol, mode).is_empty());
    for record in kept {
        match NameRule::classify(&record.name) {
            NameRule::Untitled => stats.names_blanked += 1,
            NameRule::Truncated(_) => stats.names_truncated += 1,
            NameRule::Kept => {}
        }
    }

    let cleaned = clean(raw, mode);
    let records = filter_and_sort(cleaned);

    stats.dropped_empty_symbol = raw.len() - records.len();
    stats.duplicate_symbols = count_duplicates(&records);
    stats.entries_per_view = records.len();

    (records, stats)
}

/// Run the whole pipeline.
///
/// Any failure aborts the run. A write failure may leave earlier lists
/// already written.
pub fn run(options: &PipelineOptions) -> PipelineResult<RunReport> {
    // Step 1: Load
    log_info(format!("📖 Reading {}...", options.input.display()));
    let parsed = load(&options.input)?;
    log_success(format!("Detected encoding: {}", parsed.encoding));
    log_success(format!("Read {} rows", parsed.records.len()));

    // Step 2: Clean, filter, sort
    log_info(format!("🧹 Cleaning records ({:?} prefix strip)...", options.strip_mode));
    let (records, stats) = prepare(&parsed.records, options.strip_mode);
    print_stats(&stats);

    // Step 3: Project
    let views = project(&records);

    // Step 4: Write
    log_info(format!("💾 Writing lists to {}...", options.output_dir.display()));
    let written = write_all(&views, &options.output_dir, options.pretty)?;
    for (view, path) in &written {
        log_info_indent(format!("{} → {}", view, path.display()), 1);
    }
    log_success(format!("{} lists written, {} entries each", written.len(), stats.entries_per_view));

    Ok(RunReport {
        stats,
        encoding: parsed.encoding,
        written,
    })
}

/// Log cleaning statistics
fn print_stats(stats: &PipelineStats) {
    log_success(format!("{} tickers kept", stats.entries_per_view));
    if stats.dropped_empty_symbol > 0 {
        log_warning(format!("{} rows dropped (empty symbol)", stats.dropped_empty_symbol));
    }
    if stats.names_blanked > 0 {
        log_info_indent(format!("{} untitled names blanked", stats.names_blanked), 1);
    }
    if stats.names_truncated > 0 {
        log_info_indent(format!("{} names cut at '('", stats.names_truncated), 1);
    }
    if stats.duplicate_symbols > 0 {
        log_warning_indent(format!("{} duplicate symbols kept", stats.duplicate_symbols), 1);
    }
}
