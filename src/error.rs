//! Error types reported by validation
//!
//! Failures fall into three disjoint groups:
//!
//! - **Structural**: the value handed to [`validate`](crate::validate) is not
//!   a record ([`Error::NotStruct`]).
//! - **Syntax**: a rule annotation or its argument is malformed
//!   ([`ValidationError::InvalidSyntax`]). Reported as-is, never attributed to
//!   a field.
//! - **Violation**: a field's value breaks its rule ([`ValidationError::Field`]).
//!
//! A non-introspectable field carrying a rule produces
//! [`ValidationError::UnexportedField`] and stops validation on the spot.

use std::fmt;

/// Top-level error returned by [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Error {
    /// The value is not a record.
    #[error("wrong argument given, should be a struct")]
    NotStruct,
    /// One or more fields failed validation.
    #[error(transparent)]
    Invalid(ValidationErrors),
}

impl Error {
    /// The per-field errors, if this is not a structural error.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Error::Invalid(errors) => Some(errors),
            Error::NotStruct => None,
        }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::Invalid(errors)
    }
}

/// What was wrong with a malformed annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "reason", rename_all = "snake_case"))]
pub enum SyntaxErrorKind {
    /// The annotation has no `:` between kind and argument.
    MissingSeparator {
        /// The annotation as written.
        annotation: String,
    },
    /// An argument or `in` candidate is not a base-10 integer.
    InvalidInteger {
        /// The offending text.
        literal: String,
    },
    /// An `in` rule with nothing to match against.
    EmptySet,
}

/// A malformed rule annotation.
///
/// The message is always `invalid validator syntax`; the detail lives in
/// [`SyntaxError::kind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("invalid validator syntax")]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub(crate) fn missing_separator(annotation: &str) -> Self {
        Self {
            kind: SyntaxErrorKind::MissingSeparator {
                annotation: annotation.to_owned(),
            },
        }
    }

    pub(crate) fn invalid_integer(literal: &str) -> Self {
        Self {
            kind: SyntaxErrorKind::InvalidInteger {
                literal: literal.to_owned(),
            },
        }
    }

    pub(crate) fn empty_set() -> Self {
        Self {
            kind: SyntaxErrorKind::EmptySet,
        }
    }

    /// Why the annotation was rejected.
    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }
}

/// A value that broke its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Violation {
    /// `len`: text length differs from the argument.
    #[error("length of string is not equal")]
    LenNotEqual,
    /// `min`/`max`: text is empty.
    #[error("empty text")]
    EmptyText,
    /// `min`: integer below the bound.
    #[error("value is less than allowed")]
    LessThanMin,
    /// `min`: text shorter than the bound.
    #[error("len of string is less than allowed")]
    LenLessThanMin,
    /// `max`: integer above the bound.
    #[error("value is bigger than allowed")]
    GreaterThanMax,
    /// `max`: text longer than the bound.
    #[error("len of string is bigger than allowed")]
    LenGreaterThanMax,
    /// `in`: value matches none of the candidates.
    #[error("value not in a valid set")]
    NotInSet,
}

/// Outcome of evaluating one rule against one value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The rule itself is malformed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The value broke the rule.
    #[error(transparent)]
    Violation(#[from] Violation),
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum ValidationError {
    /// A rule annotation could not be parsed.
    #[error(transparent)]
    InvalidSyntax(SyntaxError),
    /// A non-introspectable field carries a rule.
    #[error("validation for unexported field is not allowed")]
    UnexportedField {
        /// The field that carried the rule.
        field: String,
    },
    /// A field's value broke its rule.
    #[error("validation error: field {field}: {violation}")]
    Field {
        /// Name of the offending field.
        field: String,
        /// What went wrong.
        #[source]
        violation: Violation,
    },
}

impl ValidationError {
    /// Name of the field this error concerns, if any.
    ///
    /// Syntax errors are never attributed to a field.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidSyntax(_) => None,
            ValidationError::UnexportedField { field } | ValidationError::Field { field, .. } => {
                Some(field.as_str())
            }
        }
    }

    /// The violation behind a field error.
    pub fn violation(&self) -> Option<Violation> {
        match self {
            ValidationError::Field { violation, .. } => Some(*violation),
            _ => None,
        }
    }

    /// Whether this error comes from a malformed annotation.
    pub fn is_syntax(&self) -> bool {
        matches!(self, ValidationError::InvalidSyntax(_))
    }

    pub(crate) fn from_rule(field: &str, err: RuleError) -> Self {
        match err {
            RuleError::Syntax(syntax) => ValidationError::InvalidSyntax(syntax),
            RuleError::Violation(violation) => ValidationError::Field {
                field: field.to_owned(),
                violation,
            },
        }
    }
}

/// Every failure found in one record, in field declaration order.
///
/// Never empty when returned from [`validate`](crate::validate): a clean
/// record yields `Ok(())` instead.
///
/// A single error displays as its own message. Several errors display as each
/// message followed by a newline.
///
/// # Example
///
/// ```
/// use fieldcheck::{ValidationError, ValidationErrors, Violation};
///
/// let errors = ValidationErrors::from(vec![
///     ValidationError::Field { field: "Name".into(), violation: Violation::EmptyText },
///     ValidationError::Field { field: "Age".into(), violation: Violation::LessThanMin },
/// ]);
///
/// assert_eq!(
///     errors.to_string(),
///     "validation error: field Name: empty text\n\
///      validation error: field Age: value is less than allowed\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an error.
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Number of errors collected.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no error has been collected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first error, in field order.
    pub fn first(&self) -> Option<&ValidationError> {
        self.0.first()
    }

    /// Iterate over the errors in field order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Each error's message, in field order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Consume into the underlying vector.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [only] = self.0.as_slice() {
            return write!(f, "{}", only);
        }

        for error in &self.0 {
            writeln!(f, "{}", error)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
