//! Field-by-field validation of records
//!
//! [`validate`] walks a record's fields in declaration order:
//!
//! 1. Fields without a rule annotation are skipped.
//! 2. A rule on a non-introspectable field stops validation immediately and
//!    reports only [`ValidationError::UnexportedField`], discarding anything
//!    found earlier.
//! 3. The annotation is parsed and the selected rule is applied. An unknown
//!    rule keyword does nothing.
//! 4. Violations are attributed to the field; syntax errors are reported
//!    as-is. Either way validation moves on to the next field.

use crate::annotation::Annotation;
use crate::error::{Error, ValidationError, ValidationErrors};
use crate::reflect::{Field, Reflect, Shape};
use crate::rule;

/// Validate every annotated field of `value`.
///
/// # Errors
///
/// - [`Error::NotStruct`] when `value` is not a record.
/// - [`Error::Invalid`] holding one [`ValidationError`] per failing field, in
///   declaration order.
///
/// # Example
///
/// ```
/// use fieldcheck::{validate, Field, Reflect, Shape, AsFieldValue, Error};
///
/// struct Item {
///     qty: i64,
/// }
///
/// impl Reflect for Item {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Record(vec![Field::new("Qty", self.qty.as_field_value()).rule("min:1")])
///     }
/// }
///
/// let err = validate(&Item { qty: 0 }).unwrap_err();
/// assert_eq!(err.to_string(), "validation error: field Qty: value is less than allowed");
///
/// assert_eq!(validate(&42), Err(Error::NotStruct));
/// ```
pub fn validate<T: Reflect + ?Sized>(value: &T) -> Result<(), Error> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("validate", record = std::any::type_name::<T>()).entered();

    let fields = match value.shape() {
        Shape::Record(fields) => fields,
        Shape::Value(_) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("value is not a record");
            return Err(Error::NotStruct);
        }
    };

    let mut errors = ValidationErrors::new();

    for field in &fields {
        let Some(annotation) = field.annotation() else {
            #[cfg(feature = "tracing")]
            tracing::trace!(field = field.name(), "no rule, skipping");
            continue;
        };

        if !field.is_exported() {
            #[cfg(feature = "tracing")]
            tracing::warn!(field = field.name(), "rule on unexported field, aborting");
            let error = ValidationError::UnexportedField {
                field: field.name().to_owned(),
            };
            return Err(Error::Invalid(error.into()));
        }

        if let Err(error) = check_field(field, annotation) {
            #[cfg(feature = "tracing")]
            tracing::debug!(field = field.name(), rule = annotation, %error, "field failed");
            errors.push(error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Invalid(errors))
    }
}

fn check_field(field: &Field<'_>, annotation: &str) -> Result<(), ValidationError> {
    let parsed = Annotation::parse(annotation).map_err(ValidationError::InvalidSyntax)?;

    let Some(kind) = parsed.kind() else {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            field = field.name(),
            kind = parsed.raw_kind(),
            "unknown rule kind, ignoring"
        );
        return Ok(());
    };

    rule::evaluate(kind, field.value(), parsed.argument())
        .map_err(|err| ValidationError::from_rule(field.name(), err))
}

/// Method-call sugar for [`validate`].
///
/// ```
/// use fieldcheck::{Field, Reflect, ReflectExt, Shape, FieldValue};
///
/// struct Empty;
///
/// impl Reflect for Empty {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Record(vec![Field::new("unused", FieldValue::Opaque)])
///     }
/// }
///
/// assert!(Empty.validate().is_ok());
/// ```
pub trait ReflectExt: Reflect {
    /// Validate every annotated field of `self`.
    fn validate(&self) -> Result<(), Error> {
        validate(self)
    }
}

impl<T: Reflect + ?Sized> ReflectExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SyntaxErrorKind, Violation};
    use crate::value::{AsFieldValue, FieldValue};

    struct Account {
        name: String,
        age: i64,
        role: String,
        tags: Vec<String>,
        secret: String,
    }

    impl Account {
        fn valid() -> Self {
            Self {
                name: "alice".to_string(),
                age: 30,
                role: "admin".to_string(),
                tags: vec!["ab".to_string(), "cd".to_string()],
                secret: String::new(),
            }
        }
    }

    impl Reflect for Account {
        fn shape(&self) -> Shape<'_> {
            Shape::Record(vec![
                Field::new("Name", self.name.as_field_value()).rule("max:10"),
                Field::new("Age", self.age.as_field_value()).rule("min:18"),
                Field::new("Role", self.role.as_field_value()).rule("in:admin,staff"),
                Field::new("Tags", self.tags.as_field_value()).rule("len:2"),
                Field::new("Secret", self.secret.as_field_value()),
            ])
        }
    }

    /// Fields built from a list of (name, exported, rule, value).
    struct Dynamic(Vec<(&'static str, bool, &'static str, FieldValue<'static>)>);

    impl Reflect for Dynamic {
        fn shape(&self) -> Shape<'_> {
            Shape::Record(
                self.0
                    .iter()
                    .map(|(name, exported, rule, value)| {
                        let field = if *exported {
                            Field::new(*name, value.clone())
                        } else {
                            Field::hidden(*name)
                        };
                        field.rule(*rule)
                    })
                    .collect(),
            )
        }
    }

    fn errors_of(result: Result<(), Error>) -> Vec<ValidationError> {
        match result {
            Err(Error::Invalid(errors)) => errors.into_vec(),
            other => panic!("expected field errors, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert_eq!(validate(&Account::valid()), Ok(()));
    }

    #[test]
    fn test_record_without_rules_passes() {
        let record = Dynamic(vec![("A", true, "", FieldValue::Int(-1))]);
        assert_eq!(validate(&record), Ok(()));
        assert_eq!(validate(&Dynamic(vec![])), Ok(()));
    }

    #[test]
    fn test_non_record_is_structural_error() {
        assert_eq!(validate(&5i64), Err(Error::NotStruct));
        assert_eq!(validate("text"), Err(Error::NotStruct));
        assert_eq!(validate(&vec![1u8, 2]), Err(Error::NotStruct));
    }

    #[test]
    fn test_errors_accumulate_in_field_order() {
        let account = Account {
            name: String::new(),
            age: 12,
            role: "guest".to_string(),
            tags: vec!["ab".to_string(), "toolong".to_string()],
            ..Account::valid()
        };

        let errors = errors_of(validate(&account));
        let fields: Vec<_> = errors.iter().filter_map(ValidationError::field).collect();
        assert_eq!(fields, vec!["Name", "Age", "Role", "Tags"]);
        assert_eq!(
            errors.iter().filter_map(ValidationError::violation).collect::<Vec<_>>(),
            vec![
                Violation::EmptyText,
                Violation::LessThanMin,
                Violation::NotInSet,
                Violation::LenNotEqual,
            ]
        );
    }

    #[test]
    fn test_single_error_message_is_verbatim() {
        let account = Account {
            age: 17,
            ..Account::valid()
        };
        let err = validate(&account).unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: field Age: value is less than allowed"
        );
    }

    #[test]
    fn test_multiple_error_messages_are_newline_terminated() {
        let account = Account {
            age: 17,
            role: "root".to_string(),
            ..Account::valid()
        };
        let err = validate(&account).unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: field Age: value is less than allowed\n\
             validation error: field Role: value not in a valid set\n"
        );
    }

    #[test]
    fn test_syntax_errors_are_not_field_wrapped() {
        let record = Dynamic(vec![
            ("A", true, "min:abc", FieldValue::Int(1)),
            ("B", true, "max:1", FieldValue::Int(2)),
            ("C", true, "in:", FieldValue::Text("x")),
        ]);

        let errors = errors_of(validate(&record));
        assert_eq!(errors.len(), 3);
        assert!(errors[0].is_syntax());
        assert_eq!(errors[0].to_string(), "invalid validator syntax");
        assert_eq!(errors[1].field(), Some("B"));
        assert!(errors[2].is_syntax());
    }

    #[test]
    fn test_missing_separator_is_syntax_error() {
        let record = Dynamic(vec![("A", true, "len5", FieldValue::Text("abcde"))]);
        match errors_of(validate(&record)).as_slice() {
            [ValidationError::InvalidSyntax(err)] => assert!(matches!(
                err.kind(),
                SyntaxErrorKind::MissingSeparator { .. }
            )),
            other => panic!("unexpected errors: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_rule_kind_is_ignored() {
        let record = Dynamic(vec![
            ("A", true, "regexp:^\\d+$", FieldValue::Text("abc")),
            ("B", true, "LEN:1", FieldValue::Text("abc")),
        ]);
        assert_eq!(validate(&record), Ok(()));
    }

    #[test]
    fn test_unexported_field_aborts_and_discards_prior_errors() {
        let record = Dynamic(vec![
            ("A", true, "min:10", FieldValue::Int(1)),
            ("hidden", false, "len:3", FieldValue::Text("abc")),
            ("C", true, "max:0", FieldValue::Int(5)),
        ]);

        let errors = errors_of(validate(&record));
        assert_eq!(
            errors,
            vec![ValidationError::UnexportedField {
                field: "hidden".to_string()
            }]
        );
        assert_eq!(
            validate(&record).unwrap_err().to_string(),
            "validation for unexported field is not allowed"
        );
    }

    #[test]
    fn test_unexported_field_without_rule_is_skipped() {
        let record = Dynamic(vec![
            ("hidden", false, "", FieldValue::Opaque),
            ("A", true, "min:1", FieldValue::Int(1)),
        ]);
        assert_eq!(validate(&record), Ok(()));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let account = Account {
            name: String::new(),
            age: 99,
            role: String::new(),
            ..Account::valid()
        };
        assert_eq!(validate(&account), validate(&account));
    }

    #[test]
    fn test_method_syntax() {
        let account = Account {
            age: 1,
            ..Account::valid()
        };
        assert!(account.validate().is_err());
        assert!(Account::valid().validate().is_ok());
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_logs_failures_and_unknown_rules() {
            let record = Dynamic(vec![
                ("A", true, "min:10", FieldValue::Int(1)),
                ("B", true, "email:strict", FieldValue::Text("x")),
            ]);
            let _ = validate(&record);

            assert!(logs_contain("field failed"));
            assert!(logs_contain("unknown rule kind, ignoring"));
        }

        #[traced_test]
        #[test]
        fn test_logs_unexported_abort() {
            let record = Dynamic(vec![("hidden", false, "len:1", FieldValue::Opaque)]);
            let _ = validate(&record);

            assert!(logs_contain("rule on unexported field, aborting"));
        }
    }
}
