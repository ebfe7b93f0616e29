//! The `in` rule

use super::parse_i64;
use crate::annotation::split_candidates;
use crate::error::{RuleError, SyntaxError, Violation};
use crate::value::FieldValue;

/// `in:a,b,c`: the value must equal one of the comma-separated candidates.
///
/// Text compares by exact string equality. Integers compare numerically, so
/// every candidate must then be an integer. An empty sequence passes. Opaque
/// values can never match.
///
/// # Errors
///
/// A syntax error for an empty candidate list, or for a non-integer
/// candidate when checking an integer. Otherwise [`Violation::NotInSet`] for
/// the first value outside the set.
///
/// # Example
///
/// ```
/// use fieldcheck::rule::check_in;
/// use fieldcheck::{FieldValue, RuleError, Violation};
///
/// assert!(check_in(&FieldValue::Int(2), "1,2,3").is_ok());
/// assert_eq!(
///     check_in(&FieldValue::Text("guest"), "admin,staff"),
///     Err(RuleError::Violation(Violation::NotInSet))
/// );
/// assert!(matches!(check_in(&FieldValue::Int(2), ""), Err(RuleError::Syntax(_))));
/// ```
pub fn check_in(value: &FieldValue<'_>, argument: &str) -> Result<(), RuleError> {
    let candidates = split_candidates(argument)?;
    member_of(value, &candidates)
}

fn member_of(value: &FieldValue<'_>, candidates: &[&str]) -> Result<(), RuleError> {
    let found = match value {
        FieldValue::Seq(items) => {
            return items.iter().try_for_each(|item| member_of(item, candidates));
        }
        FieldValue::Int(n) => parse_all(candidates)?.contains(n),
        // no i64 candidate can equal a value outside the i64 range
        FieldValue::Wide(_) => {
            parse_all(candidates)?;
            false
        }
        FieldValue::Text(text) => candidates.iter().any(|candidate| candidate == text),
        FieldValue::Opaque => false,
    };

    if found {
        Ok(())
    } else {
        Err(Violation::NotInSet.into())
    }
}

fn parse_all(candidates: &[&str]) -> Result<Vec<i64>, SyntaxError> {
    candidates.iter().map(|literal| parse_i64(literal)).collect()
}
