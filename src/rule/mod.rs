//! Rule evaluators
//!
//! Each rule shares one contract: given a [`FieldValue`] and the raw rule
//! argument, return `Ok(())` when the value satisfies the rule, or a
//! [`RuleError`] that is either a syntax error (the argument is malformed) or
//! a [`Violation`](crate::Violation).
//!
//! Arguments are parsed before the value is looked at, so a malformed
//! argument is reported even for values the rule would ignore. Sequences are
//! checked element by element and the first failing element decides the
//! outcome.
//!
//! # Example
//!
//! ```
//! use fieldcheck::rule::{check_len, check_min};
//! use fieldcheck::{FieldValue, RuleError, Violation};
//!
//! assert!(check_len(&FieldValue::Text("abc"), "3").is_ok());
//! assert_eq!(
//!     check_min(&FieldValue::Int(4), "5"),
//!     Err(RuleError::Violation(Violation::LessThanMin))
//! );
//! ```

mod bounds;
mod length;
mod membership;

pub use bounds::{check_max, check_min};
pub use length::check_len;
pub use membership::check_in;

use crate::annotation::RuleKind;
use crate::error::{RuleError, SyntaxError};
use crate::value::FieldValue;

/// Apply the rule selected by `kind` to `value`.
pub fn evaluate(kind: RuleKind, value: &FieldValue<'_>, argument: &str) -> Result<(), RuleError> {
    match kind {
        RuleKind::Len => check_len(value, argument),
        RuleKind::Min => check_min(value, argument),
        RuleKind::Max => check_max(value, argument),
        RuleKind::In => check_in(value, argument),
    }
}

fn parse_i64(literal: &str) -> Result<i64, SyntaxError> {
    literal
        .parse()
        .map_err(|_| SyntaxError::invalid_integer(literal))
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
