//! Spreadsheet cell coercion.
//!
//! Rules, in order:
//! 1. empty cell -> empty string
//! 2. preserved key -> trimmed text of the cell
//! 3. native boolean -> unchanged
//! 4. string -> trimmed; `true`/`false` (any case) become booleans, integer
//!    and decimal literals become numbers (integers of any length keep all
//!    their digits), anything else stays text
//! 5. anything else -> unchanged (numbers stay numbers, dates and error
//!    cells become their text form)

use calamine::{Data, DataType};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Number;

use crate::domain::ParamValue;

static NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("valid numeric regex"));

/// Largest magnitude below which an `f64` still holds every integer exactly.
const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Coerce a raw cell into a typed parameter value.
pub fn normalize_cell(key: &str, cell: &Data, preserved_keys: &[String]) -> ParamValue {
    if matches!(cell, Data::Empty) {
        return ParamValue::empty();
    }
    if preserved_keys.iter().any(|k| k == key) {
        return ParamValue::Text(cell_text(cell).trim().to_string());
    }

    match cell {
        Data::Bool(b) => ParamValue::Bool(*b),
        Data::String(s) => coerce_text(s),
        Data::Int(i) => ParamValue::Int(*i),
        Data::Float(f) => match whole_number(*f) {
            Some(i) => ParamValue::Int(i),
            None => ParamValue::Float(*f),
        },
        other => ParamValue::Text(cell_text(other)),
    }
}

/// Apply the string coercion rules to already-extracted text.
pub fn coerce_text(raw: &str) -> ParamValue {
    let s = raw.trim();
    if s.is_empty() {
        return ParamValue::empty();
    }
    if s.eq_ignore_ascii_case("true") {
        return ParamValue::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return ParamValue::Bool(false);
    }
    if NUMERIC_RE.is_match(s) {
        if s.contains('.') {
            if let Ok(f) = s.parse::<f64>() {
                return ParamValue::Float(f);
            }
        } else {
            return match s.parse::<i64>() {
                Ok(i) => ParamValue::Int(i),
                Err(_) => wide_integer(s),
            };
        }
    }
    ParamValue::Text(s.to_string())
}

/// Plain-text rendering of a cell, untrimmed.
///
/// Whole-number floats render without a fractional part and booleans as
/// `True`/`False`, matching how the values read in the workbook.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => match whole_number(*f) {
            Some(i) => i.to_string(),
            None => f.to_string(),
        },
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|dt| dt.to_string())
            .unwrap_or_else(|| cell.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// An integer literal beyond `i64`, kept digit for digit.
fn wide_integer(s: &str) -> ParamValue {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    // JSON rejects leading zeros.
    let canonical = format!("{sign}{}", digits.trim_start_matches('0'));
    serde_json::from_str::<Number>(&canonical)
        .map(ParamValue::BigInt)
        .unwrap_or_else(|_| ParamValue::Text(s.to_string()))
}

fn whole_number(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < EXACT_INT_LIMIT {
        Some(f as i64)
    } else {
        None
    }
}
