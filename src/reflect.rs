//! Describing records to the validator
//!
//! [`validate`](crate::validate) never inspects a Rust type directly. It asks
//! the value for its [`Shape`]: either a record with a list of [`Field`]
//! descriptors, or a plain value. Records usually get their implementation
//! from `#[derive(Reflect)]`, but writing one by hand is straightforward:
//!
//! ```
//! use fieldcheck::{Field, Reflect, Shape, AsFieldValue};
//!
//! struct Login {
//!     user: String,
//!     attempts: i32,
//!     token: String,
//! }
//!
//! impl Reflect for Login {
//!     fn shape(&self) -> Shape<'_> {
//!         Shape::Record(vec![
//!             Field::new("user", self.user.as_field_value()).rule("min:3"),
//!             Field::new("attempts", self.attempts.as_field_value()).rule("max:5"),
//!             Field::hidden("token"),
//!         ])
//!     }
//! }
//!
//! let login = Login { user: "bob".into(), attempts: 2, token: String::new() };
//! assert!(fieldcheck::validate(&login).is_ok());
//! ```

use std::borrow::Cow;

use crate::value::{AsFieldValue, FieldValue};

/// Descriptor of one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    name: &'a str,
    exported: bool,
    rule: Option<&'a str>,
    value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// An introspectable field with no rule.
    pub fn new(name: &'a str, value: FieldValue<'a>) -> Self {
        Self {
            name,
            exported: true,
            rule: None,
            value,
        }
    }

    /// A field whose value cannot be read.
    ///
    /// Carrying a rule on such a field is an error.
    pub fn hidden(name: &'a str) -> Self {
        Self {
            name,
            exported: false,
            rule: None,
            value: FieldValue::Opaque,
        }
    }

    /// Attach a rule annotation such as `len:5`.
    ///
    /// The annotation only has to live as long as the field, so rules can
    /// come from configuration loaded at runtime.
    pub fn rule(mut self, annotation: &'a str) -> Self {
        self.rule = Some(annotation);
        self
    }

    /// Field name as declared.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Whether the field's value can be read.
    pub fn is_exported(&self) -> bool {
        self.exported
    }

    /// The rule annotation, if any. An empty annotation counts as none.
    pub fn annotation(&self) -> Option<&'a str> {
        self.rule.filter(|rule| !rule.is_empty())
    }

    /// The field's current value.
    pub fn value(&self) -> &FieldValue<'a> {
        &self.value
    }
}

/// What a value looks like to the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<'a> {
    /// A record with named fields, in declaration order.
    Record(Vec<Field<'a>>),
    /// Anything else.
    Value(FieldValue<'a>),
}

/// Types that can describe their shape at runtime.
///
/// Derive it for structs with `#[derive(Reflect)]` (feature `derive`).
/// Scalars, strings and collections implement it as [`Shape::Value`], which
/// [`validate`](crate::validate) rejects with
/// [`Error::NotStruct`](crate::Error::NotStruct).
pub trait Reflect {
    /// Describe this value.
    fn shape(&self) -> Shape<'_>;
}

macro_rules! impl_reflect_value {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Reflect for $t {
                fn shape(&self) -> Shape<'_> {
                    Shape::Value(self.as_field_value())
                }
            }
        )+
    };
}

impl_reflect_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, f32, f64, str,
    String,
);

impl Reflect for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(self.as_field_value())
    }
}

impl<T: AsFieldValue> Reflect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(self.as_field_value())
    }
}

impl<T: AsFieldValue> Reflect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(self.as_field_value())
    }
}

impl<T: AsFieldValue, const N: usize> Reflect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(self.as_field_value())
    }
}

// One level of indirection is transparent: a boxed or borrowed record is
// still a record.
impl<T: Reflect + ?Sized> Reflect for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T> Reflect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(FieldValue::Opaque)
    }
}

impl Reflect for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(FieldValue::Opaque)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder() {
        let field = Field::new("Name", FieldValue::Text("bob")).rule("len:3");
        assert_eq!(field.name(), "Name");
        assert!(field.is_exported());
        assert_eq!(field.annotation(), Some("len:3"));
        assert_eq!(field.value(), &FieldValue::Text("bob"));
    }

    #[test]
    fn test_hidden_field_has_no_value() {
        let field = Field::hidden("secret").rule("min:1");
        assert!(!field.is_exported());
        assert_eq!(field.annotation(), Some("min:1"));
        assert_eq!(field.value(), &FieldValue::Opaque);
    }

    #[test]
    fn test_empty_annotation_counts_as_none() {
        let field = Field::new("x", FieldValue::Int(1)).rule("");
        assert_eq!(field.annotation(), None);
    }

    #[test]
    fn test_rules_may_be_built_at_runtime() {
        let loaded = format!("{}:{}", "max", 3);
        let name = String::from("Retries");
        let field = Field::new(&name, FieldValue::Int(4)).rule(&loaded);
        assert_eq!(field.name(), "Retries");
        assert_eq!(field.annotation(), Some("max:3"));
    }

    struct Pair {
        left: i32,
    }

    impl Reflect for Pair {
        fn shape(&self) -> Shape<'_> {
            Shape::Record(vec![Field::new("left", self.left.as_field_value())])
        }
    }

    #[test]
    fn test_indirection_delegates_to_the_record() {
        let pair = Pair { left: 1 };
        let expected = pair.shape();

        assert_eq!(Reflect::shape(&&pair), expected);
        assert_eq!(Box::new(Pair { left: 1 }).shape(), expected);

        let boxed: Box<dyn Reflect> = Box::new(Pair { left: 1 });
        assert_eq!(boxed.shape(), expected);
    }

    #[test]
    fn test_scalars_are_values() {
        assert_eq!(5i32.shape(), Shape::Value(FieldValue::Int(5)));
        assert_eq!("s".shape(), Shape::Value(FieldValue::Text("s")));
        assert_eq!(true.shape(), Shape::Value(FieldValue::Opaque));
        assert_eq!(None::<u8>.shape(), Shape::Value(FieldValue::Opaque));
        assert_eq!(().shape(), Shape::Value(FieldValue::Opaque));
        assert!(matches!(vec![1u8].shape(), Shape::Value(FieldValue::Seq(_))));
        assert!(matches!([1u8, 2].shape(), Shape::Value(FieldValue::Seq(_))));
        assert_eq!(Box::new(7u64).shape(), Shape::Value(FieldValue::Int(7)));
    }
}
