//! RDF graph intermediate representation for repository payloads
//!
//! This crate provides the small set of types the loader needs to describe a
//! patent and its scan as RDF, independent of the wire format used to send
//! them (Turtle for creation, SPARQL Update for patches).
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form. Compaction
//!    to `prefix:local` is handled by formatters at output time.
//!
//! 2. **Explicit datatypes** - Literals always have an explicit datatype. Plain
//!    strings use `xsd:string`.
//!
//! 3. **Placeholder subjects** - Statements about a resource that does not
//!    exist yet use the empty IRI `<>`. Once the repository assigns a URI,
//!    [`rebind`] produces a new graph bound to it.
//!
//! # Example
//!
//! ```
//! use patent_graph_ir::{Graph, Term};
//!
//! let mut graph = Graph::new();
//! graph.add_triple(
//!     Term::placeholder(),
//!     Term::iri("http://purl.org/dc/elements/1.1/identifier"),
//!     Term::string("PP12"),
//! );
//! assert_eq!(graph.len(), 1);
//! ```

pub mod datatype;
mod graph;
mod term;
mod triple;

pub use datatype::Datatype;
pub use graph::{rebind, Graph};
pub use term::{LiteralValue, Term};
pub use triple::Triple;
