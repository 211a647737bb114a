//! Numeric coercion for the form-submissions count.

/// Parses a submission count, tolerating fractional source values.
///
/// The export sometimes writes counts as floats ("3.0", "2.7"), so the value
/// is parsed as f64 first and truncated toward zero. Returns `None` for
/// empty or non-numeric input; the caller decides how to degrade. Non-finite
/// values ("inf", "nan") are not counts and are treated as unparseable.
pub fn parse_submission_count(value: &str) -> Option<i64> {
    if value.is_empty() {
        return None;
    }
    let parsed: f64 = value.parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Some(parsed.trunc() as i64)
}
