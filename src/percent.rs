//! Lenient parsing for the free-text percentage fields of a trade.
//!
//! Values are read the way a browser's `parseFloat` reads them: leading
//! whitespace is skipped, the longest numeric prefix is taken and anything
//! after it is ignored, so `"2.5%"` reads as `2.5`. Input with no numeric
//! prefix is not an error; it simply has no value.

use std::sync::LazyLock;

use regex::Regex;

// Sign, digits with an optional fraction (or a bare fraction), optional exponent
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("valid numeric prefix pattern")
});

/// Parse the numeric prefix of `text`, or `None` if there is none.
///
/// Non-finite results (e.g. `"1e400"`) are treated as unparsable.
pub fn percent_value(text: &str) -> Option<f64> {
    let found = NUMERIC_PREFIX.find(text.trim_start())?;
    found
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse the numeric prefix of `text`, coercing anything unparsable to `0`.
pub fn parse_percent(text: &str) -> f64 {
    percent_value(text).unwrap_or(0.0)
}
