//! Turtle document formatter
//!
//! Produces the self-contained document POSTed to create a container:
//!
//! ```text
//! @prefix dc: <http://purl.org/dc/elements/1.1/> .
//!
//! <> dc:title "Rose plant" ;
//!     dc:creator "Jane Doe" .
//! ```

use crate::compact::{format_predicate, format_term};
use patent_graph_ir::{Graph, Term, Triple};

/// Format a graph as a Turtle document with `@prefix` declarations
///
/// Consecutive statements about the same subject share one block. Statements
/// whose object is an empty literal are omitted.
pub fn format_turtle(graph: &Graph) -> String {
    let prefixes = &graph.prefixes;
    let mut out = String::new();

    for (prefix, ns) in prefixes {
        out.push_str(&format!("@prefix {prefix}: <{ns}> .\n"));
    }
    if !prefixes.is_empty() {
        out.push('\n');
    }

    let kept: Vec<&Triple> = graph.iter().filter(|t| !t.o.is_empty_literal()).collect();
    let mut current: Option<&Term> = None;

    for triple in kept {
        let po = format!(
            "{} {}",
            format_predicate(&triple.p, prefixes),
            format_term(&triple.o, prefixes)
        );
        match current {
            Some(s) if *s == triple.s => {
                out.push_str(" ;\n    ");
                out.push_str(&po);
            }
            Some(_) => {
                out.push_str(" .\n");
                out.push_str(&format!("{} {}", format_term(&triple.s, prefixes), po));
            }
            None => out.push_str(&format!("{} {}", format_term(&triple.s, prefixes), po)),
        }
        current = Some(&triple.s);
    }
    if current.is_some() {
        out.push_str(" .\n");
    }

    out
}
