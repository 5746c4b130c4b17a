//! Domain models for the ticker list pipeline.
//!
//! - [`RawRecord`] - One positional `(symbol, name)` row as read from the CSV
//! - [`TickerRecord`] - A cleaned record
//! - [`LookupEntry`] - One `{label, value}` pair of an output list
//! - [`View`] - Which of the three lookup lists
//! - [`StripMode`] - How the `WIKI/` provenance prefix is removed

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{ABBRVLONG_LONG_FILE, ABBRV_ABBRV_FILE, ABBRV_LONG_FILE};

// =============================================================================
// Records
// =============================================================================

/// A row exactly as it appears in the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// 1-based source line, for diagnostics.
    pub line: u64,
    /// Prefixed symbol, e.g. `WIKI/AAPL`.
    pub symbol: String,
    /// Free-text description.
    pub name: String,
}

impl RawRecord {
    pub fn new(line: u64, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            line,
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

/// A record after symbol and name cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerRecord {
    pub symbol: String,
    pub name: String,
}

impl TickerRecord {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

// =============================================================================
// Lookup lists
// =============================================================================

/// One entry of a lookup list.
///
/// Field order is the serialized key order: `label` then `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub label: String,
    pub value: String,
}

impl LookupEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The three projections of the cleaned record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// label = symbol, value = name
    AbbrvLong,
    /// label = symbol, value = symbol
    AbbrvAbbrv,
    /// label = "symbol - name", value = name
    AbbrvlongLong,
}

impl View {
    pub const ALL: [View; 3] = [View::AbbrvLong, View::AbbrvAbbrv, View::AbbrvlongLong];

    /// Output file name for this view.
    pub fn file_name(self) -> &'static str {
        match self {
            View::AbbrvLong => ABBRV_LONG_FILE,
            View::AbbrvAbbrv => ABBRV_ABBRV_FILE,
            View::AbbrvlongLong => ABBRVLONG_LONG_FILE,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::AbbrvLong => "abbrv→long",
            View::AbbrvAbbrv => "abbrv→abbrv",
            View::AbbrvlongLong => "abbrvlong→long",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Symbol cleaning mode
// =============================================================================

/// How the provenance prefix is removed from raw symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StripMode {
    /// Remove one literal `WIKI/` prefix.
    #[default]
    Exact,
    /// Remove every leading character found in `WIKI/`.
    ///
    /// Reproduces historical lists, where symbols such as `WIX` lost
    /// their leading letters.
    CharacterSet,
}
