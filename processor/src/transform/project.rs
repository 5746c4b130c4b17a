//! Project cleaned records into the three lookup lists.
//!
//! ```text
//! TickerRecord { AAPL, "Apple Inc. " }
//!   ├─ abbrv→long      { label: "AAPL",               value: "Apple Inc. " }
//!   ├─ abbrv→abbrv     { label: "AAPL",               value: "AAPL" }
//!   └─ abbrvlong→long  { label: "AAPL - Apple Inc. ", value: "Apple Inc. " }
//! ```
//!
//! Every list has one entry per record, in record order.

use crate::config::LABEL_SEPARATOR;
use crate::models::{LookupEntry, TickerRecord, View};

/// The three lookup lists built from one record set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Views {
    pub abbrv_long: Vec<LookupEntry>,
    pub abbrv_abbrv: Vec<LookupEntry>,
    pub abbrvlong_long: Vec<LookupEntry>,
}

impl Views {
    pub fn get(&self, view: View) -> &[LookupEntry] {
        match view {
            View::AbbrvLong => &self.abbrv_long,
            View::AbbrvAbbrv => &self.abbrv_abbrv,
            View::AbbrvlongLong => &self.abbrvlong_long,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (View, &[LookupEntry])> {
        View::ALL.into_iter().map(move |v| (v, self.get(v)))
    }
}

/// Build one entry for `view`.
pub fn entry_for(record: &TickerRecord, view: View) -> LookupEntry {
    match view {
        View::AbbrvLong => LookupEntry::new(&record.symbol, &record.name),
        View::AbbrvAbbrv => LookupEntry::new(&record.symbol, &record.symbol),
        View::AbbrvlongLong => LookupEntry::new(
            format!("{}{}{}", record.symbol, LABEL_SEPARATOR, record.name),
            &record.name,
        ),
    }
}

/// Build a single lookup list.
pub fn project_view(records: &[TickerRecord], view: View) -> Vec<LookupEntry> {
    records.iter().map(|r| entry_for(r, view)).collect()
}

/// Build all three lookup lists.
pub fn project(records: &[TickerRecord]) -> Views {
    Views {
        abbrv_long: project_view(records, View::AbbrvLong),
        abbrv_abbrv: project_view(records, View::AbbrvAbbrv),
        abbrvlong_long: project_view(records, View::AbbrvlongLong),
    }
}
