//! Numeric conversion functions.
//!
//! `int(...)` and `double(...)` exist for test frameworks that insist on a
//! typed argument where the exchange only offers text. A failed parse never
//! aborts the test step: it logs the failure and yields the type's zero
//! value. The log line is the side channel by which a stricter caller can
//! detect the fallback.

/// Converts a string to an integer.
///
/// # Arguments
///
/// * `content` - The text to parse
///
/// # Returns
///
/// The parsed integer, or `0` if the text is not a valid integer (the
/// failure is logged, not propagated).
pub fn to_int(content: &str) -> i64 {
    match content.parse::<i64>() {
        Ok(n) => n,
        Err(e) => {
            log::error!("cannot convert '{}' to an integer: {}", content, e);
            0
        }
    }
}

/// Converts a string to a floating-point number.
///
/// # Arguments
///
/// * `content` - The text to parse
///
/// # Returns
///
/// The parsed number, or `0.0` if the text is not a valid number (the
/// failure is logged, not propagated).
pub fn to_double(content: &str) -> f64 {
    match content.parse::<f64>() {
        Ok(n) => n,
        Err(e) => {
            log::error!("cannot convert '{}' to a double: {}", content, e);
            0.0
        }
    }
}
