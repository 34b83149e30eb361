//! RDF graph - an ordered collection of triples
//!
//! The `Graph` type uses `Vec<Triple>` so statements keep the order in which
//! the builder added them; repeated values (e.g. several creators) are
//! preserved.

use crate::{Term, Triple};
use std::collections::BTreeMap;

/// A collection of RDF triples
///
/// # Example
///
/// ```
/// use patent_graph_ir::{rebind, Graph, Term};
///
/// let mut graph = Graph::new();
/// graph.add_triple(
///     Term::placeholder(),
///     Term::iri("http://purl.org/dc/elements/1.1/title"),
///     Term::string("Rose plant"),
/// );
///
/// let bound = rebind(&graph, &Term::placeholder(), &Term::iri("http://localhost/rest/a1"));
/// assert_eq!(bound.count_subject(&Term::placeholder()), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    /// The triples in this graph
    triples: Vec<Triple>,
    /// Prefix mappings used when formatting (deterministic order via BTreeMap)
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph carrying the given prefix bindings
    pub fn with_prefixes<'a>(bindings: impl IntoIterator<Item = &'a (&'a str, &'a str)>) -> Self {
        let mut graph = Self::new();
        for (prefix, ns) in bindings {
            graph.add_prefix(*prefix, *ns);
        }
        graph
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Add a triple to the graph
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    /// Get the number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over triples
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Get a reference to the triples
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Get all triples (consuming the graph)
    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }

    /// Objects of every statement with the given predicate, in graph order
    pub fn objects(&self, predicate: &str) -> Vec<&Term> {
        self.triples
            .iter()
            .filter(|t| t.predicate_iri() == Some(predicate))
            .map(|t| &t.o)
            .collect()
    }

    /// Number of statements whose subject is `subject`
    pub fn count_subject(&self, subject: &Term) -> usize {
        self.triples.iter().filter(|t| &t.s == subject).count()
    }

    /// Copy of this graph without statements whose object is an empty literal
    pub fn without_empty_objects(&self) -> Graph {
        Graph {
            triples: self
                .triples
                .iter()
                .filter(|t| !t.o.is_empty_literal())
                .cloned()
                .collect(),
            prefixes: self.prefixes.clone(),
        }
    }
}

/// Return a new graph with every occurrence of `old` replaced by `new`
///
/// Subjects are rewritten uniformly; an object equal to `old` (a
/// self-reference) is rewritten as well. The input graph is left untouched.
pub fn rebind(graph: &Graph, old: &Term, new: &Term) -> Graph {
    let swap = |t: &Term| if t == old { new.clone() } else { t.clone() };
    Graph {
        triples: graph
            .triples
            .iter()
            .map(|t| Triple::new(swap(&t.s), t.p.clone(), swap(&t.o)))
            .collect(),
        prefixes: graph.prefixes.clone(),
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
            prefixes: BTreeMap::new(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLE: &str = "http://purl.org/dc/elements/1.1/title";
    const CREATOR: &str = "http://purl.org/dc/elements/1.1/creator";
    const FILE_OF: &str = "http://pcdm.org/models#fileOf";

    fn make_test_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_triple(Term::placeholder(), Term::iri(TITLE), Term::string("Rose"));
        graph.add_triple(Term::placeholder(), Term::iri(CREATOR), Term::string("Jane Doe"));
        graph.add_triple(Term::placeholder(), Term::iri(CREATOR), Term::string("John Roe"));
        graph
    }

    #[test]
    fn test_graph_creation() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }

    #[test]
    fn test_graph_preserves_insertion_order() {
        let graph = make_test_graph();
        let creators: Vec<String> = graph.objects(CREATOR).iter().map(|t| t.lexical()).collect();
        assert_eq!(creators, vec!["Jane Doe", "John Roe"]);
    }

    #[test]
    fn test_rebind_is_total() {
        let graph = make_test_graph();
        let item = Term::iri("http://localhost:8080/rest/tx:1/ab/cd");

        let bound = rebind(&graph, &Term::placeholder(), &item);

        assert_eq!(bound.count_subject(&Term::placeholder()), 0);
        assert_eq!(bound.count_subject(&item), 3);
        assert_eq!(bound.len(), graph.len());
    }

    #[test]
    fn test_rebind_leaves_input_untouched() {
        let graph = make_test_graph();
        let before = graph.clone();
        let _ = rebind(&graph, &Term::placeholder(), &Term::iri("http://x/1"));
        assert_eq!(graph, before);
    }

    #[test]
    fn test_rebind_rewrites_self_references() {
        let mut graph = Graph::new();
        graph.add_triple(Term::placeholder(), Term::iri(FILE_OF), Term::placeholder());

        let new = Term::iri("http://x/1");
        let bound = rebind(&graph, &Term::placeholder(), &new);

        let t = &bound.triples()[0];
        assert_eq!(t.s, new);
        assert_eq!(t.o, new);
    }

    #[test]
    fn test_rebind_ignores_other_subjects() {
        let mut graph = make_test_graph();
        let other = Term::iri("http://x/other");
        graph.add_triple(other.clone(), Term::iri(TITLE), Term::string("Other"));

        let bound = rebind(&graph, &Term::placeholder(), &Term::iri("http://x/1"));
        assert_eq!(bound.count_subject(&other), 1);
    }

    #[test]
    fn test_without_empty_objects() {
        let mut graph = make_test_graph();
        graph.add_triple(Term::placeholder(), Term::iri(TITLE), Term::string(""));

        let cleaned = graph.without_empty_objects();
        assert_eq!(cleaned.len(), 3);
    }

    #[test]
    fn test_graph_prefixes() {
        let graph = Graph::with_prefixes(&[("dc", "http://purl.org/dc/elements/1.1/")]);
        assert_eq!(
            graph.prefixes.get("dc"),
            Some(&"http://purl.org/dc/elements/1.1/".to_string())
        );
    }

    #[test]
    fn test_from_iterator() {
        let triples = vec![Triple::new(
            Term::iri("http://example.org/s"),
            Term::iri("http://example.org/p"),
            Term::string("o"),
        )];

        let graph: Graph = triples.into_iter().collect();
        assert_eq!(graph.len(), 1);
    }
}
