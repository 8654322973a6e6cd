//! Versioned-shape adapter for round numbers.
//!
//! Historical writes left three shapes in the store for the same logical
//! field: a bare scalar ("23"), a JSON array ("[23,45]") and a comma-joined
//! string ("23,45"). The normalizer picks one branch per known shape and
//! always returns a list. Unparseable elements are kept as `Invalid`
//! sentinels so callers can decide to filter or reject them.

use serde_json::Value;

/// One normalized element: either a valid integer or the original token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedNumber {
    Value(i64),
    Invalid(String),
}

impl ParsedNumber {
    pub fn is_valid(&self) -> bool {
        matches!(self, ParsedNumber::Value(_))
    }
}

fn parse_token(tok: &str) -> ParsedNumber {
    match tok.trim().parse::<i64>() {
        Ok(n) => ParsedNumber::Value(n),
        Err(_) => ParsedNumber::Invalid(tok.trim().to_string()),
    }
}

fn from_json_element(v: &Value) -> ParsedNumber {
    match v {
        Value::Number(n) => match n.as_i64() {
            Some(i) => ParsedNumber::Value(i),
            None => ParsedNumber::Invalid(n.to_string()),
        },
        Value::String(s) => parse_token(s),
        other => ParsedNumber::Invalid(other.to_string()),
    }
}

/// Convert a raw stored value into an ordered list of parsed numbers.
///
/// Shape selection, in order:
/// - missing / blank           → empty list
/// - JSON array text           → element-wise conversion
/// - comma-joined string       → split, trim, parse
/// - anything else             → single scalar wrapped in a list
pub fn normalize(raw: Option<&str>) -> Vec<ParsedNumber> {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => return Vec::new(),
    };

    if raw.starts_with('[') {
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) {
            return items.iter().map(from_json_element).collect();
        }
        // Not valid JSON after all: fall through and treat it as a scalar.
        return vec![parse_token(raw)];
    }

    if raw.contains(',') {
        return raw.split(',').map(parse_token).collect();
    }

    vec![parse_token(raw)]
}

/// Keep only the valid integers.
pub fn valid_numbers(parsed: &[ParsedNumber]) -> Vec<i64> {
    parsed
        .iter()
        .filter_map(|p| match p {
            ParsedNumber::Value(n) => Some(*n),
            ParsedNumber::Invalid(_) => None,
        })
        .collect()
}

/// Reject the whole list when any element failed to parse.
/// Returns the first offending token on failure.
pub fn require_valid(parsed: &[ParsedNumber]) -> Result<Vec<i64>, String> {
    for p in parsed {
        if let ParsedNumber::Invalid(tok) = p {
            return Err(tok.clone());
        }
    }
    Ok(valid_numbers(parsed))
}
