//! RDF datatype representation
//!
//! Datatypes are always explicit in this IR - there is no "untyped" literal.
//! Plain strings default to `xsd:string`.

use std::sync::Arc;

/// XSD datatype IRIs (re-exported from vocab crate)
pub mod iri {
    pub use patent_vocab::xsd::{
        DATE as XSD_DATE, DATE_TIME as XSD_DATE_TIME, G_YEAR as XSD_G_YEAR,
        INTEGER as XSD_INTEGER, STRING as XSD_STRING,
    };
}

/// RDF literal datatype, always an expanded IRI
///
/// Use `Datatype::xsd_string()` for plain strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:string - default for plain string literals
    pub fn xsd_string() -> Self {
        Self::from_iri(iri::XSD_STRING)
    }

    /// xsd:integer
    pub fn xsd_integer() -> Self {
        Self::from_iri(iri::XSD_INTEGER)
    }

    /// xsd:date
    pub fn xsd_date() -> Self {
        Self::from_iri(iri::XSD_DATE)
    }

    /// xsd:dateTime
    pub fn xsd_date_time() -> Self {
        Self::from_iri(iri::XSD_DATE_TIME)
    }

    /// xsd:gYear
    pub fn xsd_g_year() -> Self {
        Self::from_iri(iri::XSD_G_YEAR)
    }

    /// Get the IRI representation of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Check if this is the xsd:string datatype
    pub fn is_xsd_string(&self) -> bool {
        self.as_iri() == iri::XSD_STRING
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_iri())
    }
}
