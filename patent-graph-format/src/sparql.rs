//! SPARQL Update formatter
//!
//! Produces insert-only deltas for PATCH requests:
//!
//! ```text
//! PREFIX pcdm: <http://pcdm.org/models#>
//! INSERT {
//!   <http://localhost:8080/rest/f1> pcdm:fileOf <http://localhost:8080/rest/i1> .
//! } WHERE {}
//! ```

use crate::compact::{format_predicate, format_term};
use crate::error::{FormatError, Result};
use patent_graph_ir::Graph;

/// Format a graph as a SPARQL `INSERT { ... } WHERE {}` update
///
/// Every statement must already be bound to its final subject; a statement
/// still on the `<>` placeholder is rejected. Empty literals are omitted.
pub fn format_sparql_insert(graph: &Graph) -> Result<String> {
    let prefixes = &graph.prefixes;
    let mut out = String::new();

    for (prefix, ns) in prefixes {
        out.push_str(&format!("PREFIX {prefix}: <{ns}>\n"));
    }

    let mut body = String::new();
    for triple in graph.iter().filter(|t| !t.o.is_empty_literal()) {
        if triple.s.is_placeholder() {
            return Err(FormatError::UnboundSubject(triple.to_string()));
        }
        body.push_str(&format!(
            "  {} {} {} .\n",
            format_term(&triple.s, prefixes),
            format_predicate(&triple.p, prefixes),
            format_term(&triple.o, prefixes)
        ));
    }
    if body.is_empty() {
        return Err(FormatError::EmptyUpdate);
    }

    out.push_str("INSERT {\n");
    out.push_str(&body);
    out.push_str("} WHERE {}\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use patent_graph_ir::Term;

    const FILE_OF: &str = "http://pcdm.org/models#fileOf";

    #[test]
    fn test_insert_update() {
        let mut g = Graph::with_prefixes(&[("pcdm", "http://pcdm.org/models#")]);
        g.add_triple(
            Term::iri("http://localhost/rest/f1"),
            Term::iri(FILE_OF),
            Term::iri("http://localhost/rest/i1"),
        );

        let update = format_sparql_insert(&g).unwrap();
        assert_eq!(
            update,
            "PREFIX pcdm: <http://pcdm.org/models#>\n\
             INSERT {\n  \
             <http://localhost/rest/f1> pcdm:fileOf <http://localhost/rest/i1> .\n\
             } WHERE {}\n"
        );
    }

    #[test]
    fn test_insert_is_not_a_replace() {
        let mut g = Graph::new();
        g.add_triple(Term::iri("http://x/f"), Term::iri("http://x/p"), Term::string("v"));
        let update = format_sparql_insert(&g).unwrap();
        assert!(update.contains("INSERT {"));
        assert!(!update.contains("DELETE"));
    }

    #[test]
    fn test_placeholder_subject_rejected() {
        let mut g = Graph::new();
        g.add_triple(Term::placeholder(), Term::iri(FILE_OF), Term::iri("http://x/i"));
        assert!(matches!(
            format_sparql_insert(&g),
            Err(FormatError::UnboundSubject(_))
        ));
    }

    #[test]
    fn test_empty_literals_dropped() {
        let mut g = Graph::new();
        g.add_triple(Term::iri("http://x/f"), Term::iri("http://x/p"), Term::string(""));
        g.add_triple(Term::iri("http://x/f"), Term::iri("http://x/q"), Term::string("ok"));
        let update = format_sparql_insert(&g).unwrap();
        assert!(!update.contains("<http://x/p>"));
        assert!(update.contains("<http://x/q> \"ok\""));
    }

    #[test]
    fn test_all_empty_is_an_error() {
        let mut g = Graph::new();
        g.add_triple(Term::iri("http://x/f"), Term::iri("http://x/p"), Term::string(""));
        assert!(matches!(format_sparql_insert(&g), Err(FormatError::EmptyUpdate)));
    }
}
