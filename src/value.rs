//! Runtime views of field values
//!
//! Rules never see a field's concrete Rust type. Instead every annotated field
//! is lowered into a [`FieldValue`], a closed set of kinds the rule evaluators
//! know how to handle:
//!
//! - [`FieldValue::Int`] for integers that fit into an `i64`
//! - [`FieldValue::Wide`] for integers outside the `i64` range
//! - [`FieldValue::Text`] for string-like values
//! - [`FieldValue::Seq`] for sequences, whose elements are lowered recursively
//! - [`FieldValue::Opaque`] for everything else
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{AsFieldValue, FieldValue, ValueKind};
//!
//! assert_eq!(42i32.as_field_value(), FieldValue::Int(42));
//! assert_eq!("hi".as_field_value(), FieldValue::Text("hi"));
//!
//! let tags = vec!["a".to_string(), "b".to_string()];
//! assert_eq!(tags.as_field_value().kind(), ValueKind::Seq);
//! assert_eq!(true.as_field_value().kind(), ValueKind::Opaque);
//! ```

use std::borrow::Cow;
use std::fmt;

/// A borrowed, kind-tagged view of a field's current value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "snake_case"))]
pub enum FieldValue<'a> {
    /// A 64-bit signed integer
    Int(i64),
    /// An integer outside the `i64` range, such as a large `u64`.
    ///
    /// Rule arguments are always `i64`, so a wide value is above (or below)
    /// every bound and equal to no candidate. `u128` values past `i128::MAX`
    /// are clamped, which does not change any comparison.
    Wide(i128),
    /// Text, measured in chars by the length rules
    Text(&'a str),
    /// A sequence of values, each validated on its own
    Seq(Vec<FieldValue<'a>>),
    /// A value no rule inspects
    Opaque,
}

impl<'a> FieldValue<'a> {
    /// The kind of this value, without its payload.
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Int(_) | FieldValue::Wide(_) => ValueKind::Int,
            FieldValue::Text(_) => ValueKind::Text,
            FieldValue::Seq(_) => ValueKind::Seq,
            FieldValue::Opaque => ValueKind::Opaque,
        }
    }

    /// Lower any integer, picking [`FieldValue::Int`] when it fits.
    ///
    /// ```
    /// use fieldcheck::FieldValue;
    ///
    /// assert_eq!(FieldValue::integer(7), FieldValue::Int(7));
    /// assert_eq!(
    ///     FieldValue::integer(i128::from(u64::MAX)),
    ///     FieldValue::Wide(i128::from(u64::MAX))
    /// );
    /// ```
    pub fn integer(n: i128) -> Self {
        i64::try_from(n).map_or(FieldValue::Wide(n), FieldValue::Int)
    }

    /// Build a sequence value from anything that lowers to field values.
    ///
    /// ```
    /// use fieldcheck::FieldValue;
    ///
    /// let seq = FieldValue::seq(&[1i64, 2, 3]);
    /// assert_eq!(
    ///     seq,
    ///     FieldValue::Seq(vec![FieldValue::Int(1), FieldValue::Int(2), FieldValue::Int(3)])
    /// );
    /// ```
    pub fn seq<T, I>(items: I) -> Self
    where
        T: AsFieldValue + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        FieldValue::Seq(items.into_iter().map(AsFieldValue::as_field_value).collect())
    }
}

/// The kind of a [`FieldValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Integer
    Int,
    /// Text
    Text,
    /// Sequence
    Seq,
    /// Not inspected by any rule
    Opaque,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int => "int",
            ValueKind::Text => "text",
            ValueKind::Seq => "seq",
            ValueKind::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

/// Types that can present themselves to the rule evaluators.
///
/// Implemented for the common scalar, string and collection types. Records
/// whose fields hold other types can still be validated, as long as those
/// fields carry no rule annotation.
///
/// # Example
///
/// ```
/// use fieldcheck::{AsFieldValue, FieldValue};
///
/// struct Port(u16);
///
/// impl AsFieldValue for Port {
///     fn as_field_value(&self) -> FieldValue<'_> {
///         FieldValue::Int(i64::from(self.0))
///     }
/// }
///
/// assert_eq!(Port(8080).as_field_value(), FieldValue::Int(8080));
/// ```
pub trait AsFieldValue {
    /// Lower this value into a [`FieldValue`].
    fn as_field_value(&self) -> FieldValue<'_>;
}

macro_rules! impl_as_int {
    ($($t:ty),+) => {
        $(
            impl AsFieldValue for $t {
                #[inline]
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Int(i64::from(*self))
                }
            }
        )+
    };
}

macro_rules! impl_as_wide {
    ($($t:ty),+) => {
        $(
            impl AsFieldValue for $t {
                #[inline]
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::integer(i128::try_from(*self).unwrap_or(i128::MAX))
                }
            }
        )+
    };
}

macro_rules! impl_as_opaque {
    ($($t:ty),+) => {
        $(
            impl AsFieldValue for $t {
                #[inline]
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Opaque
                }
            }
        )+
    };
}

impl_as_int!(i8, i16, i32, i64, u8, u16, u32);
impl_as_wide!(u64, usize, u128);
impl_as_opaque!(bool, char, f32, f64);

impl AsFieldValue for i128 {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::integer(*self)
    }
}

impl AsFieldValue for isize {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        // isize is at most 64 bits on every supported target
        FieldValue::Int(*self as i64)
    }
}

impl AsFieldValue for str {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for String {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_str())
    }
}

impl AsFieldValue for Cow<'_, str> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_ref())
    }
}

impl<T: AsFieldValue> AsFieldValue for [T] {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::seq(self)
    }
}

impl<T: AsFieldValue> AsFieldValue for Vec<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::seq(self)
    }
}

impl<T: AsFieldValue, const N: usize> AsFieldValue for [T; N] {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::seq(self)
    }
}

// Optional values sit behind an indirection the rules do not follow.
impl<T> AsFieldValue for Option<T> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Opaque
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Box<T> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}
