//! RDF graph formatters for repository payloads
//!
//! This crate converts a `patent_graph_ir::Graph` to the two wire forms the
//! Fedora REST API accepts:
//!
//! - **Turtle**: self-contained document with `@prefix` declarations, used as
//!   the body of a create (`POST`) request
//! - **SPARQL Update**: `INSERT { ... } WHERE {}` delta, used as the body of a
//!   `PATCH` request
//!
//! Records implement [`GraphBuildable`] to get both payloads from one graph.
//!
//! Both formatters compact IRIs against the graph's prefix bindings and drop
//! statements whose object is an empty literal.
//!
//! # Example
//!
//! ```
//! use patent_graph_ir::{Graph, Term};
//! use patent_graph_format::format_turtle;
//!
//! let mut graph = Graph::with_prefixes(&[("dc", "http://purl.org/dc/elements/1.1/")]);
//! graph.add_triple(
//!     Term::placeholder(),
//!     Term::iri("http://purl.org/dc/elements/1.1/title"),
//!     Term::string("Rose plant"),
//! );
//!
//! let doc = format_turtle(&graph);
//! assert!(doc.contains("<> dc:title \"Rose plant\" ."));
//! ```

mod buildable;
pub mod compact;
mod error;
mod sparql;
mod turtle;

pub use buildable::GraphBuildable;
pub use error::{FormatError, Result};
pub use sparql::format_sparql_insert;
pub use turtle::format_turtle;
