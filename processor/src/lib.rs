//! # Ticker Lists - autocomplete lookup lists from the WIKI metadata CSV
//!
//! Reads the WIKI dataset code list (`WIKI/<symbol>,<description>`), cleans
//! symbols and company names, and writes three label/value JSON lists.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│    Clean    │────▶│  3 × JSON   │
//! │ (no header) │     │  (auto-enc) │     │ filter/sort │     │   lists     │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ticker_lists::{run, PipelineOptions};
//!
//! let report = run(&PipelineOptions::default()).unwrap();
//! println!("{} tickers", report.stats.entries_per_view);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - Fixed paths and markers
//! - [`logs`] - Console logging
//! - [`models`] - Records, lookup entries, views
//! - [`parser`] - CSV loading with encoding detection
//! - [`transform`] - Cleaning, projection and the pipeline
//! - [`output`] - JSON list writer

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod output;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, OutputError, PipelineError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{LookupEntry, RawRecord, StripMode, TickerRecord, View};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{decode_content, detect_encoding, load, load_bytes, parse_records, ParseResult};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::{
    clean, clean_name, clean_symbol, filter_and_sort, prepare, project, project_view, run,
    PipelineOptions, PipelineStats, RunReport, Views,
};

// =============================================================================
// Re-exports - Output
// =============================================================================

pub use output::{to_json, write, write_all};
