//! Total parsers for scraped statistic strings.
//!
//! Every function returns a number; malformed input becomes `0.0`.

use regex::Regex;
use std::sync::OnceLock;

/// Trailing integer of a rank string, e.g. "Predictive rank #3" -> 3.
fn trailing_int_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*$").ok()).as_ref()
}

/// Parse a rank string: "Predictive rank #3", "#12", "7".
pub fn parse_rank(raw: &str) -> f64 {
    trailing_int_re()
        .and_then(|re| re.captures(raw.trim()))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Parse a percentage string into a fraction: "42.5%" -> 0.425.
/// A bare "42.5" is read the same way.
pub fn parse_percent(raw: &str) -> f64 {
    let value = parse_number(raw.trim().trim_end_matches('%'));
    value / 100.0
}

/// Parse a plain decimal string: "0.512", " 6.1 ", "-3".
pub fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
