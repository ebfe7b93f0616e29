//! Rule annotation parsing
//!
//! An annotation has the shape `kind:argument`, e.g. `len:36`, `min:18` or
//! `in:admin,staff`. Parsing splits on the first `:` only, so the argument
//! may itself contain colons.
//!
//! ```
//! use fieldcheck::annotation::{Annotation, RuleKind};
//!
//! let ann = Annotation::parse("in:admin,staff").unwrap();
//! assert_eq!(ann.kind(), Some(RuleKind::In));
//! assert_eq!(ann.argument(), "admin,staff");
//!
//! // Unknown kinds parse fine; they simply select no rule.
//! let ann = Annotation::parse("regexp:^a+$").unwrap();
//! assert_eq!(ann.kind(), None);
//! assert_eq!(ann.raw_kind(), "regexp");
//! ```

use std::fmt;

use crate::error::SyntaxError;

/// The closed vocabulary of rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Exact text length.
    Len,
    /// Lower bound on integers or text length.
    Min,
    /// Upper bound on integers or text length.
    Max,
    /// Membership in a literal set.
    In,
}

impl RuleKind {
    /// Look up a rule by its annotation keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "len" => Some(RuleKind::Len),
            "min" => Some(RuleKind::Min),
            "max" => Some(RuleKind::Max),
            "in" => Some(RuleKind::In),
            _ => None,
        }
    }

    /// The keyword used in annotations.
    pub fn keyword(self) -> &'static str {
        match self {
            RuleKind::Len => "len",
            RuleKind::Min => "min",
            RuleKind::Max => "max",
            RuleKind::In => "in",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A rule annotation split into kind and argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation<'a> {
    kind: &'a str,
    argument: &'a str,
}

impl<'a> Annotation<'a> {
    /// Split `raw` on its first `:`.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] when `raw` contains no `:`.
    pub fn parse(raw: &'a str) -> Result<Self, SyntaxError> {
        let (kind, argument) = raw
            .split_once(':')
            .ok_or_else(|| SyntaxError::missing_separator(raw))?;
        Ok(Self { kind, argument })
    }

    /// The rule this annotation selects, or `None` for an unknown keyword.
    pub fn kind(&self) -> Option<RuleKind> {
        RuleKind::from_keyword(self.kind)
    }

    /// The keyword exactly as written.
    pub fn raw_kind(&self) -> &'a str {
        self.kind
    }

    /// Everything after the first `:`.
    pub fn argument(&self) -> &'a str {
        self.argument
    }
}

/// Split an `in` argument into its candidate literals, in order.
///
/// # Errors
///
/// An empty argument is a [`SyntaxError`].
///
/// ```
/// use fieldcheck::annotation::split_candidates;
///
/// assert_eq!(split_candidates("1,2,3").unwrap(), vec!["1", "2", "3"]);
/// assert!(split_candidates("").is_err());
/// ```
pub fn split_candidates(argument: &str) -> Result<Vec<&str>, SyntaxError> {
    if argument.is_empty() {
        return Err(SyntaxError::empty_set());
    }
    Ok(argument.split(',').collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyntaxErrorKind;

    #[test]
    fn test_parse_known_kinds() {
        for (raw, kind, arg) in [
            ("len:5", RuleKind::Len, "5"),
            ("min:-3", RuleKind::Min, "-3"),
            ("max:10", RuleKind::Max, "10"),
            ("in:a,b", RuleKind::In, "a,b"),
        ] {
            let ann = Annotation::parse(raw).unwrap();
            assert_eq!(ann.kind(), Some(kind));
            assert_eq!(ann.argument(), arg);
            assert_eq!(ann.raw_kind(), kind.keyword());
        }
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        let ann = Annotation::parse("in:a:b,c").unwrap();
        assert_eq!(ann.kind(), Some(RuleKind::In));
        assert_eq!(ann.argument(), "a:b,c");
    }

    #[test]
    fn test_parse_empty_argument() {
        let ann = Annotation::parse("in:").unwrap();
        assert_eq!(ann.argument(), "");
    }

    #[test]
    fn test_parse_without_separator_is_syntax_error() {
        let err = Annotation::parse("len5").unwrap_err();
        assert_eq!(
            err.kind(),
            &SyntaxErrorKind::MissingSeparator {
                annotation: "len5".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_kind_is_not_an_error() {
        let ann = Annotation::parse("email:strict").unwrap();
        assert_eq!(ann.kind(), None);
        assert_eq!(ann.raw_kind(), "email");
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(RuleKind::from_keyword("LEN"), None);
        assert_eq!(RuleKind::from_keyword("len"), Some(RuleKind::Len));
    }

    #[test]
    fn test_split_candidates_preserves_order_and_blanks() {
        assert_eq!(split_candidates("b,a,b").unwrap(), vec!["b", "a", "b"]);
        assert_eq!(split_candidates("a,,b").unwrap(), vec!["a", "", "b"]);
        assert_eq!(split_candidates("single").unwrap(), vec!["single"]);
    }

    #[test]
    fn test_split_candidates_rejects_empty() {
        let err = split_candidates("").unwrap_err();
        assert_eq!(err.kind(), &SyntaxErrorKind::EmptySet);
    }

    #[test]
    fn test_rule_kind_display() {
        assert_eq!(RuleKind::Max.to_string(), "max");
    }
}
