//! Testing utilities for code that validates records
//!
//! This module provides assertion macros that run [`validate`](crate::validate)
//! and report the outcome in the panic message, plus property-based testing
//! strategies when the `proptest` feature is enabled.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::{assert_invalid, assert_valid, AsFieldValue, Field, Reflect, Shape};
//!
//! struct Pin {
//!     code: String,
//! }
//!
//! impl Reflect for Pin {
//!     fn shape(&self) -> Shape<'_> {
//!         Shape::Record(vec![Field::new("Code", self.code.as_field_value()).rule("len:4")])
//!     }
//! }
//!
//! assert_valid!(Pin { code: "1234".into() });
//! assert_invalid!(Pin { code: "12".into() });
//! ```

/// Assert that a record passes validation.
///
/// This macro will panic if [`validate`](crate::validate) returns an error.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{assert_valid, Field, FieldValue, Reflect, Shape};
///
/// struct Unchecked;
///
/// impl Reflect for Unchecked {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Record(vec![Field::new("x", FieldValue::Int(1))])
///     }
/// }
///
/// assert_valid!(Unchecked);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($record:expr) => {
        match $crate::validate(&$record) {
            Ok(()) => {}
            Err(e) => {
                panic!("Expected valid record, got errors: {}", e);
            }
        }
    };
}

/// Assert that a record fails validation.
///
/// This macro will panic if [`validate`](crate::validate) returns `Ok(())`.
/// It evaluates to the returned [`Error`](crate::Error).
///
/// # Example
///
/// ```rust
/// use fieldcheck::{assert_invalid, Error};
///
/// let err = assert_invalid!(7u8);
/// assert_eq!(err, Error::NotStruct);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($record:expr) => {
        match $crate::validate(&$record) {
            Err(e) => e,
            Ok(()) => {
                panic!("Expected invalid record, got Ok(())");
            }
        }
    };
}

/// Assert that a record fails validation with exactly the given messages,
/// in field order.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{assert_validation_errors, AsFieldValue, Field, Reflect, Shape};
///
/// struct Range {
///     lo: i64,
///     hi: i64,
/// }
///
/// impl Reflect for Range {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Record(vec![
///             Field::new("Lo", self.lo.as_field_value()).rule("min:0"),
///             Field::new("Hi", self.hi.as_field_value()).rule("max:10"),
///         ])
///     }
/// }
///
/// assert_validation_errors!(
///     Range { lo: -1, hi: 11 },
///     [
///         "validation error: field Lo: value is less than allowed",
///         "validation error: field Hi: value is bigger than allowed",
///     ]
/// );
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($record:expr, [$($expected:expr),* $(,)?]) => {
        match $crate::validate(&$record) {
            Err($crate::Error::Invalid(errors)) => {
                let expected: Vec<String> = vec![$(String::from($expected)),*];
                assert_eq!(errors.messages(), expected);
            }
            Err(e) => {
                panic!("Expected field errors, got: {}", e);
            }
            Ok(()) => {
                panic!("Expected field errors, got Ok(())");
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::annotation::RuleKind;

#[cfg(feature = "proptest")]
impl Arbitrary for RuleKind {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(RuleKind::Len),
            Just(RuleKind::Min),
            Just(RuleKind::Max),
            Just(RuleKind::In),
        ]
        .boxed()
    }
}

/// Strategy producing well-formed annotations for every rule kind.
///
/// `len` gets a non-negative bound, `min`/`max` any `i64`, and `in` a
/// non-empty list of integer literals.
#[cfg(feature = "proptest")]
pub fn well_formed_annotation() -> impl Strategy<Value = String> {
    any::<RuleKind>().prop_flat_map(|kind| {
        let argument = match kind {
            RuleKind::Len => (0usize..64).prop_map(|n| n.to_string()).boxed(),
            RuleKind::Min | RuleKind::Max => any::<i64>().prop_map(|n| n.to_string()).boxed(),
            RuleKind::In => prop::collection::vec(any::<i64>(), 1..8)
                .prop_map(|items| {
                    items
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(",")
                })
                .boxed(),
        };
        argument.prop_map(move |arg| format!("{}:{}", kind, arg))
    })
}
