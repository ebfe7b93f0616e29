//! # Fieldcheck
//!
//! Declarative, annotation-driven validation of struct fields.
//!
//! Attach a rule to a field, call [`validate`], and get back every field that
//! broke its rule in a single error, in declaration order.
//!
//! ## Rules
//!
//! | Annotation     | Integers          | Text                                 |
//! |----------------|-------------------|--------------------------------------|
//! | `len:N`        | not checked       | exactly `N` chars                    |
//! | `min:N`        | `>= N`            | non-empty and at least `N` chars     |
//! | `max:N`        | `<= N`            | non-empty and at most `N` chars      |
//! | `in:a,b,c`     | equals a candidate| equals a candidate                   |
//!
//! Sequences (`Vec<T>`, slices, arrays) apply the rule to every element and
//! report the first failing one. Lengths count chars, not bytes. Unknown rule
//! keywords are ignored.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldcheck::Reflect;
//!
//! #[derive(Reflect)]
//! pub struct User {
//!     #[validate("len:8")]
//!     pub id: String,
//!     #[validate("min:18")]
//!     pub age: i32,
//!     #[validate("in:admin,staff")]
//!     pub role: String,
//!     #[validate("max:10")]
//!     pub tags: Vec<String>,
//!     pub note: Option<String>,
//! }
//!
//! let user = User {
//!     id: "abcd1234".into(),
//!     age: 16,
//!     role: "guest".into(),
//!     tags: vec!["rust".into()],
//!     note: None,
//! };
//!
//! let err = fieldcheck::validate(&user).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "validation error: field age: value is less than allowed\n\
//!      validation error: field role: value not in a valid set\n"
//! );
//! ```
//!
//! ## Features
//!
//! - `derive` (default): `#[derive(Reflect)]`
//! - `tracing`: log validation through `tracing`
//! - `serde`: `Serialize` for errors and field values
//! - `proptest`: strategies in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod annotation;
pub mod error;
pub mod reflect;
pub mod rule;
pub mod testing;
pub mod validator;
pub mod value;

// Re-exports
pub use error::{
    Error, RuleError, SyntaxError, SyntaxErrorKind, ValidationError, ValidationErrors, Violation,
};
pub use reflect::{Field, Reflect, Shape};
pub use validator::{validate, ReflectExt};
pub use value::{AsFieldValue, FieldValue, ValueKind};

#[cfg(feature = "derive")]
pub use fieldcheck_derive::Reflect;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, ValidationError, ValidationErrors, Violation};
    pub use crate::reflect::{Field, Reflect, Shape};
    pub use crate::validator::{validate, ReflectExt};
    pub use crate::value::{AsFieldValue, FieldValue};

    #[cfg(feature = "derive")]
    pub use fieldcheck_derive::Reflect;
}
