//! The `min` and `max` rules
//!
//! Both bound integers by value and text by char count. Empty text always
//! fails, whatever the bound, with its own [`Violation::EmptyText`].

use super::{char_len, parse_i64};
use crate::error::{RuleError, Violation};
use crate::value::FieldValue;

/// `min:N`: integers must be `>= N`, text must be non-empty and at least `N`
/// chars long.
///
/// # Errors
///
/// A syntax error when `argument` is not an integer, otherwise the violation
/// of the first offending value.
///
/// # Example
///
/// ```
/// use fieldcheck::rule::check_min;
/// use fieldcheck::{FieldValue, RuleError, Violation};
///
/// assert!(check_min(&FieldValue::Int(5), "5").is_ok());
/// assert_eq!(
///     check_min(&FieldValue::Text(""), "0"),
///     Err(RuleError::Violation(Violation::EmptyText))
/// );
/// ```
pub fn check_min(value: &FieldValue<'_>, argument: &str) -> Result<(), RuleError> {
    let bound = parse_i64(argument)?;
    min_of(value, bound)
}

/// `max:N`: integers must be `<= N`, text must be non-empty and at most `N`
/// chars long.
///
/// # Errors
///
/// A syntax error when `argument` is not an integer, otherwise the violation
/// of the first offending value.
pub fn check_max(value: &FieldValue<'_>, argument: &str) -> Result<(), RuleError> {
    let bound = parse_i64(argument)?;
    max_of(value, bound)
}

fn min_of(value: &FieldValue<'_>, bound: i64) -> Result<(), RuleError> {
    match value {
        FieldValue::Seq(items) => items.iter().try_for_each(|item| min_of(item, bound)),
        FieldValue::Int(n) if *n < bound => Err(Violation::LessThanMin.into()),
        FieldValue::Wide(n) if *n < i128::from(bound) => Err(Violation::LessThanMin.into()),
        FieldValue::Text(text) if text.is_empty() => Err(Violation::EmptyText.into()),
        FieldValue::Text(text) if text_len(text) < bound => Err(Violation::LenLessThanMin.into()),
        FieldValue::Int(_) | FieldValue::Wide(_) | FieldValue::Text(_) | FieldValue::Opaque => {
            Ok(())
        }
    }
}

fn max_of(value: &FieldValue<'_>, bound: i64) -> Result<(), RuleError> {
    match value {
        FieldValue::Seq(items) => items.iter().try_for_each(|item| max_of(item, bound)),
        FieldValue::Int(n) if *n > bound => Err(Violation::GreaterThanMax.into()),
        FieldValue::Wide(n) if *n > i128::from(bound) => Err(Violation::GreaterThanMax.into()),
        FieldValue::Text(text) if text.is_empty() => Err(Violation::EmptyText.into()),
        FieldValue::Text(text) if text_len(text) > bound => {
            Err(Violation::LenGreaterThanMax.into())
        }
        FieldValue::Int(_) | FieldValue::Wide(_) | FieldValue::Text(_) | FieldValue::Opaque => {
            Ok(())
        }
    }
}

fn text_len(text: &str) -> i64 {
    i64::try_from(char_len(text)).unwrap_or(i64::MAX)
}
