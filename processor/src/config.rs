//! Fixed configuration.
//!
//! The pipeline has no configuration surface of its own: every path and
//! marker lives here. The CLI may override the paths, never the markers.

/// Metadata CSV, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "WIKI-datasets-codes.csv";

/// Directory the lookup lists are written to.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// `{label: symbol, value: name}` list.
pub const ABBRV_LONG_FILE: &str = "ticker_abbrv_long_list.json";

/// `{label: symbol, value: symbol}` list.
pub const ABBRV_ABBRV_FILE: &str = "ticker_abbrv_abbrv_list.json";

/// `{label: "symbol - name", value: name}` list.
pub const ABBRVLONG_LONG_FILE: &str = "ticker_abbrvlong_long_list.json";

/// Dataset provenance prefix on every raw symbol.
pub const PREFIX_TOKEN: &str = "WIKI/";

/// Names containing this marker are blanked.
pub const UNTITLED_MARKER: &str = "Untitled";

/// Names are cut at the first occurrence of this character.
pub const NAME_CUT_CHAR: char = '(';

/// Joins symbol and name in the combined label.
pub const LABEL_SEPARATOR: &str = " - ";

/// Columns per input row: (symbol, name).
pub const EXPECTED_COLUMNS: usize = 2;

/// Environment variable overriding the input path.
pub const INPUT_ENV: &str = "TICKER_LISTS_INPUT";

/// Environment variable overriding the output directory.
pub const OUTPUT_DIR_ENV: &str = "TICKER_LISTS_OUTPUT_DIR";
