//! RDF vocabulary constants for the plant-patent loader
//!
//! Centralizes every IRI the loader writes into the repository so that the
//! graph builder, the formatters and the tests agree on one schema.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `xsd` - XSD datatypes (http://www.w3.org/2001/XMLSchema#)
//! - `dc` - Dublin Core elements (http://purl.org/dc/elements/1.1/)
//! - `exterms` - local patent terms (http://www.example.org/terms/)
//! - `pcdm` - Portland Common Data Model (http://pcdm.org/models#)
//! - `bindings` - prefix bindings emitted in every payload

/// RDF vocabulary constants
pub mod rdf {
    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// XSD vocabulary constants
pub mod xsd {
    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// xsd:gYear IRI
    pub const G_YEAR: &str = "http://www.w3.org/2001/XMLSchema#gYear";
}

/// Dublin Core elements
pub mod dc {
    /// Namespace IRI
    pub const NS: &str = "http://purl.org/dc/elements/1.1/";

    /// dc:identifier IRI
    pub const IDENTIFIER: &str = "http://purl.org/dc/elements/1.1/identifier";

    /// dc:title IRI
    pub const TITLE: &str = "http://purl.org/dc/elements/1.1/title";

    /// dc:date IRI
    pub const DATE: &str = "http://purl.org/dc/elements/1.1/date";

    /// dc:creator IRI
    pub const CREATOR: &str = "http://purl.org/dc/elements/1.1/creator";
}

/// Local patent vocabulary
pub mod exterms {
    /// Namespace IRI
    pub const NS: &str = "http://www.example.org/terms/";

    /// Year the patent was granted
    pub const YEAR: &str = "http://www.example.org/terms/year";

    /// Broad plant category
    pub const CATEGORY: &str = "http://www.example.org/terms/category";

    /// US Patent Classification number
    pub const USPC_NUMBER: &str = "http://www.example.org/terms/uspcNumber";

    /// Link to the published patent
    pub const SOURCE_URL: &str = "http://www.example.org/terms/sourceUrl";

    pub const APPLICATION_NUMBER: &str = "http://www.example.org/terms/applicationNumber";

    pub const INVENTOR_CITY: &str = "http://www.example.org/terms/inventorCity";

    pub const INVENTOR_STATE: &str = "http://www.example.org/terms/inventorState";

    pub const INVENTOR_COUNTRY: &str = "http://www.example.org/terms/inventorCountry";

    /// Page count of a scan
    pub const EXTENT: &str = "http://www.example.org/terms/extent";

    pub const SCAN_DATE: &str = "http://www.example.org/terms/scanDate";

    pub const FILE_NAME: &str = "http://www.example.org/terms/fileName";
}

/// Portland Common Data Model
pub mod pcdm {
    /// Namespace IRI
    pub const NS: &str = "http://pcdm.org/models#";

    /// pcdm:Object class IRI
    pub const OBJECT: &str = "http://pcdm.org/models#Object";

    /// pcdm:File class IRI
    pub const FILE: &str = "http://pcdm.org/models#File";

    /// pcdm:fileOf IRI (file → owning object)
    pub const FILE_OF: &str = "http://pcdm.org/models#fileOf";
}

/// Prefix bindings written at the top of every create and patch payload
pub mod bindings {
    /// `(prefix, namespace)` pairs in emission order
    pub const NAMESPACE_BINDINGS: &[(&str, &str)] = &[
        ("dc", super::dc::NS),
        ("exterms", super::exterms::NS),
        ("pcdm", super::pcdm::NS),
        ("rdf", super::rdf::NS),
        ("xsd", super::xsd::NS),
    ];
}
