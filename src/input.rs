//! Parsing of free-text failure-time lists.

use crate::error::{ReliabilityError, Result};

/// Parses comma-separated failure times such as `"100, 200,300"`.
///
/// Whitespace around tokens is ignored and empty tokens (for example a
/// trailing comma) are skipped. Any other token that is not a number fails
/// the whole parse; values are not range-checked here.
///
/// # Errors
/// [`ReliabilityError::InvalidSample`] on an unparsable token or when no
/// values are present.
///
/// # Examples
///
/// ```
/// use u_reliability::input::parse_failure_times;
/// assert_eq!(parse_failure_times("100, 200,300,").unwrap(), vec![100.0, 200.0, 300.0]);
/// assert!(parse_failure_times("100, abc").is_err());
/// ```
pub fn parse_failure_times(text: &str) -> Result<Vec<f64>> {
    let values = text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                ReliabilityError::InvalidSample(format!("not a number: {token:?}"))
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    if values.is_empty() {
        return Err(ReliabilityError::InvalidSample(
            "no failure times given".into(),
        ));
    }
    Ok(values)
}
