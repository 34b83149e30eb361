//! RDF term types: IRI and literal
//!
//! A term can be:
//! - An IRI (always expanded, never prefixed). The empty IRI is the
//!   placeholder subject `<>`, which a repository resolves to the URI of the
//!   resource being created.
//! - A literal (value + explicit datatype)

use crate::Datatype;
use std::sync::Arc;

/// Literal value storage
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LiteralValue {
    /// String value (UTF-8), also used for lexical forms of dates
    String(Arc<str>),
    /// Integer value (i64 range)
    Integer(i64),
}

impl LiteralValue {
    /// Create a string literal value
    pub fn string(s: impl AsRef<str>) -> Self {
        LiteralValue::String(Arc::from(s.as_ref()))
    }

    /// Get the lexical representation of this value
    pub fn lexical(&self) -> String {
        match self {
            LiteralValue::String(s) => s.to_string(),
            LiteralValue::Integer(i) => i.to_string(),
        }
    }

    /// True when the lexical form is the empty string
    pub fn is_empty(&self) -> bool {
        matches!(self, LiteralValue::String(s) if s.is_empty())
    }
}

/// An RDF term (subject, predicate, or object position)
///
/// # Invariants
///
/// - `Term::Iri` always contains an **expanded** IRI, never a prefixed form.
/// - The predicate position of a triple can only be `Term::Iri`.
///
/// Ordering: IRIs sort before literals; literals compare by
/// (datatype, value).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// Full expanded IRI (e.g., "http://pcdm.org/models#Object")
    Iri(Arc<str>),

    /// Literal value with explicit datatype
    Literal {
        /// Datatype (always present, never None)
        datatype: Datatype,
        /// The actual value
        value: LiteralValue,
    },
}

impl Term {
    /// Create an IRI term from an expanded IRI string
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Arc::from(iri.as_ref()))
    }

    /// The placeholder subject `<>` used before the server assigns a URI
    pub fn placeholder() -> Self {
        Term::Iri(Arc::from(""))
    }

    /// Create a plain string literal (xsd:string)
    pub fn string(value: impl AsRef<str>) -> Self {
        Term::Literal {
            value: LiteralValue::string(value),
            datatype: Datatype::xsd_string(),
        }
    }

    /// Create an integer literal (xsd:integer)
    pub fn integer(value: i64) -> Self {
        Term::Literal {
            value: LiteralValue::Integer(value),
            datatype: Datatype::xsd_integer(),
        }
    }

    /// Create a typed literal with a custom datatype
    pub fn typed(value: impl AsRef<str>, datatype: Datatype) -> Self {
        Term::Literal {
            value: LiteralValue::string(value),
            datatype,
        }
    }

    /// Check if this is an IRI term
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Check if this is the placeholder subject `<>`
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Term::Iri(iri) if iri.is_empty())
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }

    /// True for literals whose lexical form is empty
    ///
    /// Formatters drop statements with empty objects instead of sending
    /// blank literals to the repository.
    pub fn is_empty_literal(&self) -> bool {
        matches!(self, Term::Literal { value, .. } if value.is_empty())
    }

    /// Try to get as IRI string
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Try to get literal components
    pub fn as_literal(&self) -> Option<(&LiteralValue, &Datatype)> {
        match self {
            Term::Literal { value, datatype } => Some((value, datatype)),
            _ => None,
        }
    }

    /// Lexical form of a literal, or the IRI string
    pub fn lexical(&self) -> String {
        match self {
            Term::Iri(iri) => iri.to_string(),
            Term::Literal { value, .. } => value.lexical(),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::Literal { value, datatype } => {
                write!(f, "\"{}\"", value.lexical())?;
                if !datatype.is_xsd_string() {
                    write!(f, "^^<{}>", datatype.as_iri())
                } else {
                    Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_constructors() {
        let iri = Term::iri("http://example.org/foo");
        assert!(iri.is_iri());
        assert_eq!(iri.as_iri(), Some("http://example.org/foo"));

        let string = Term::string("hello");
        assert!(string.is_literal());
        let (value, dt) = string.as_literal().unwrap();
        assert_eq!(value, &LiteralValue::string("hello"));
        assert!(dt.is_xsd_string());
        assert_eq!(iri.as_literal(), None);
    }

    #[test]
    fn test_placeholder() {
        let p = Term::placeholder();
        assert!(p.is_placeholder());
        assert_eq!(format!("{}", p), "<>");
        assert!(!Term::iri("http://example.org/").is_placeholder());
    }

    #[test]
    fn test_empty_literal_detection() {
        assert!(Term::string("").is_empty_literal());
        assert!(Term::typed("", Datatype::xsd_date()).is_empty_literal());
        assert!(!Term::string("x").is_empty_literal());
        assert!(!Term::integer(0).is_empty_literal());
        assert!(!Term::placeholder().is_empty_literal());
    }

    #[test]
    fn test_literal_values() {
        assert_eq!(LiteralValue::string("test").lexical(), "test");
        assert_eq!(LiteralValue::Integer(42).lexical(), "42");
        assert!(LiteralValue::string("").is_empty());
        assert!(!LiteralValue::Integer(0).is_empty());
    }

    #[test]
    fn test_term_ordering() {
        let iri = Term::iri("http://example.org");
        let lit = Term::string("hello");
        assert!(iri < lit);

        let iri_a = Term::iri("http://a.org");
        let iri_b = Term::iri("http://b.org");
        assert!(iri_a < iri_b);
    }

    #[test]
    fn test_term_display() {
        assert_eq!(
            format!("{}", Term::iri("http://example.org")),
            "<http://example.org>"
        );
        assert_eq!(format!("{}", Term::string("hello")), "\"hello\"");
        assert_eq!(
            format!("{}", Term::integer(42)),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }
}
