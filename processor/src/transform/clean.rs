//! Symbol and name normalization.
//!
//! ```text
//! WIKI/AAPL , Apple Inc. (NASDAQ)   →   AAPL , "Apple Inc. "
//! WIKI/ZZZ  , Untitled Company      →   ZZZ  , ""
//! WIKI/     , SomeName              →   (dropped by filter_and_sort)
//! ```

use crate::config::{NAME_CUT_CHAR, PREFIX_TOKEN, UNTITLED_MARKER};
use crate::models::{RawRecord, StripMode, TickerRecord};

/// Which rule applies to a raw name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// Contains the `Untitled` marker: blanked.
    Untitled,
    /// Cut at the byte offset of the first `(`.
    Truncated(usize),
    /// Left as is.
    Kept,
}

impl NameRule {
    pub fn classify(name: &str) -> Self {
        if name.contains(UNTITLED_MARKER) {
            NameRule::Untitled
        } else if let Some(idx) = name.find(NAME_CUT_CHAR) {
            NameRule::Truncated(idx)
        } else {
            NameRule::Kept
        }
    }
}

/// Remove the `WIKI/` provenance prefix from a raw symbol.
pub fn clean_symbol(symbol: &str, mode: StripMode) -> &str {
    match mode {
        StripMode::Exact => symbol.strip_prefix(PREFIX_TOKEN).unwrap_or(symbol),
        StripMode::CharacterSet => symbol.trim_start_matches(|c: char| PREFIX_TOKEN.contains(c)),
    }
}

/// Reduce a description to the company name.
///
/// Whitespace before the cut is preserved.
pub fn clean_name(name: &str) -> &str {
    match NameRule::classify(name) {
        NameRule::Untitled => "",
        NameRule::Truncated(idx) => &name[..idx],
        NameRule::Kept => name,
    }
}

/// Clean every record. Output has the same length and order as the input.
pub fn clean(records: &[RawRecord], mode: StripMode) -> Vec<TickerRecord> {
    records
        .iter()
        .map(|r| TickerRecord::new(clean_symbol(&r.symbol, mode), clean_name(&r.name)))
        .collect()
}

/// Drop empty symbols, then sort by symbol.
///
/// The sort is stable: records sharing a symbol keep their input order.
pub fn filter_and_sort(mut records: Vec<TickerRecord>) -> Vec<TickerRecord> {
    records.retain(|r| !r.symbol.is_empty());
    records.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    records
}

/// Number of records repeating the symbol of their predecessor.
///
/// Expects sorted input.
pub fn count_duplicates(records: &[TickerRecord]) -> usize {
    records
        .windows(2)
        .filter(|pair| pair[0].symbol == pair[1].symbol)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(symbol: &str, name: &str) -> RawRecord {
        RawRecord::new(1, symbol, name)
    }

    #[test]
    fn test_scenario_parenthesis_cut() {
        let cleaned = clean(&[raw("WIKI/AAPL", "Apple Inc. (NASDAQ)")], StripMode::Exact);
        assert_eq!(cleaned[0], TickerRecord::new("AAPL", "Apple Inc. "));
    }

    #[test]
    fn test_scenario_untitled() {
        let cleaned = clean(&[raw("WIKI/ZZZ", "Untitled Company")], StripMode::Exact);
        assert_eq!(cleaned[0], TickerRecord::new("ZZZ", ""));
    }

    #[test]
    fn test_untitled_wins_over_parenthesis() {
        assert_eq!(clean_name("Foo (Untitled)"), "");
        assert_eq!(clean_name("Acme (Untitled) Corp"), "");
        assert_eq!(clean_name("Something Untitled"), "");
    }

    #[test]
    fn test_cut_at_first_parenthesis() {
        assert_eq!(clean_name("A (b) (c)"), "A ");
        assert_eq!(clean_name("(leading)"), "");
        assert_eq!(clean_name("No parens"), "No parens");
    }

    #[test]
    fn test_untitled_is_case_sensitive() {
        assert_eq!(clean_name("untitled works"), "untitled works");
    }

    #[test]
    fn test_exact_strip_only_removes_true_prefix() {
        assert_eq!(clean_symbol("WIKI/WIX", StripMode::Exact), "WIX");
        assert_eq!(clean_symbol("WIKI/KO", StripMode::Exact), "KO");
        assert_eq!(clean_symbol("IBM", StripMode::Exact), "IBM");
        assert_eq!(clean_symbol("WIKI/", StripMode::Exact), "");
        assert_eq!(clean_symbol("XWIKI/A", StripMode::Exact), "XWIKI/A");
    }

    #[test]
    fn test_character_set_strip_over_strips() {
        assert_eq!(clean_symbol("WIKI/WIX", StripMode::CharacterSet), "X");
        assert_eq!(clean_symbol("WIKI/KO", StripMode::CharacterSet), "O");
        assert_eq!(clean_symbol("WIKI/AAPL", StripMode::CharacterSet), "AAPL");
        assert_eq!(clean_symbol("WIKI/WIKI", StripMode::CharacterSet), "");
    }

    #[test]
    fn test_clean_keeps_cardinality() {
        let input = vec![raw("WIKI/", "SomeName"), raw("WIKI/A", "Alpha"), raw("", "")];
        assert_eq!(clean(&input, StripMode::Exact).len(), 3);
    }

    #[test]
    fn test_filter_drops_empty_symbols() {
        let records = vec![
            TickerRecord::new("", "SomeName"),
            TickerRecord::new("A", "Alpha"),
        ];
        let kept = filter_and_sort(records);
        assert_eq!(kept, vec![TickerRecord::new("A", "Alpha")]);
    }

    #[test]
    fn test_sort_ascending_ordinal() {
        let records = vec![
            TickerRecord::new("B", "Beta"),
            TickerRecord::new("A", "Alpha"),
            TickerRecord::new("a", "lower"),
            TickerRecord::new("AA", "Double"),
        ];
        let sorted: Vec<_> = filter_and_sort(records).into_iter().map(|r| r.symbol).collect();
        assert_eq!(sorted, vec!["A", "AA", "B", "a"]);
    }

    #[test]
    fn test_sort_is_stable_for_duplicates() {
        let records = vec![
            TickerRecord::new("X", "first"),
            TickerRecord::new("A", "Alpha"),
            TickerRecord::new("X", "second"),
        ];
        let sorted = filter_and_sort(records);
        assert_eq!(sorted[1].name, "first");
        assert_eq!(sorted[2].name, "second");
        assert_eq!(count_duplicates(&sorted), 1);
    }

    #[test]
    fn test_classify() {
        assert_eq!(NameRule::classify("Apple Inc. (NASDAQ)"), NameRule::Truncated(11));
        assert_eq!(NameRule::classify("Untitled"), NameRule::Untitled);
        assert_eq!(NameRule::classify("Beta"), NameRule::Kept);
    }
}
