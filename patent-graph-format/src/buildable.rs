//! Shared graph-building capability for repository resources

use crate::{format_sparql_insert, format_turtle, Result};
use patent_graph_ir::{rebind, Graph, Term};

/// A record that can describe itself as RDF
///
/// Implementors only provide [`graph`](GraphBuildable::graph), with every
/// statement on the `<>` placeholder subject; the payload forms are derived.
pub trait GraphBuildable {
    /// Statements describing this resource, bound to the placeholder subject
    fn graph(&self) -> Graph;

    /// Turtle document for a create request
    fn to_create_payload(&self) -> String {
        format_turtle(&self.graph())
    }

    /// SPARQL insert-only update addressed at `subject`
    fn to_patch_payload(&self, subject: &str) -> Result<String> {
        format_sparql_insert(&self.bound_graph(subject))
    }

    /// The graph with the placeholder replaced by `subject`
    fn bound_graph(&self, subject: &str) -> Graph {
        rebind(&self.graph(), &Term::placeholder(), &Term::iri(subject))
    }
}
