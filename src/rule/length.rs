//! The `len` rule

use super::char_len;
use crate::error::{RuleError, SyntaxError, Violation};
use crate::value::FieldValue;

/// `len:N`: text must be exactly `N` chars long.
///
/// Integers and opaque values are not checked.
///
/// # Errors
///
/// A syntax error when `argument` is not a non-negative integer, otherwise
/// [`Violation::LenNotEqual`] for the first text whose length differs.
pub fn check_len(value: &FieldValue<'_>, argument: &str) -> Result<(), RuleError> {
    let expected: usize = argument
        .parse()
        .map_err(|_| SyntaxError::invalid_integer(argument))?;
    len_of(value, expected)
}

fn len_of(value: &FieldValue<'_>, expected: usize) -> Result<(), RuleError> {
    match value {
        FieldValue::Seq(items) => items.iter().try_for_each(|item| len_of(item, expected)),
        FieldValue::Text(text) if char_len(text) != expected => Err(Violation::LenNotEqual.into()),
        FieldValue::Text(_) | FieldValue::Int(_) | FieldValue::Wide(_) | FieldValue::Opaque => {
            Ok(())
        }
    }
}
