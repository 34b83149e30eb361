//! Term rendering shared by the Turtle and SPARQL formatters
//!
//! Both syntaxes accept the same term forms: `<iri>`, `prefix:local`,
//! `"literal"` and `"literal"^^datatype`.

use patent_graph_ir::Term;
use std::collections::BTreeMap;

/// Compact an expanded IRI to `prefix:local` using the given bindings
///
/// Falls back to `<iri>` when no namespace matches or the local part contains
/// characters that are not safe in a prefixed name.
pub fn compact_iri(iri: &str, prefixes: &BTreeMap<String, String>) -> String {
    for (prefix, ns) in prefixes {
        if let Some(local) = iri.strip_prefix(ns.as_str()) {
            if is_safe_local_name(local) {
                return format!("{prefix}:{local}");
            }
        }
    }
    format!("<{}>", escape_iri(iri))
}

fn is_safe_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Escape characters that are not allowed inside `<...>`
fn escape_iri(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len());
    for c in iri.chars() {
        match c {
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | ' ' => {
                out.push_str(&format!("\\u{:04X}", c as u32))
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Escape a literal's lexical form for a double-quoted string
pub fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Render a term in subject/object position
pub fn format_term(term: &Term, prefixes: &BTreeMap<String, String>) -> String {
    match term {
        Term::Iri(iri) if iri.is_empty() => "<>".to_string(),
        Term::Iri(iri) => compact_iri(iri, prefixes),
        Term::Literal { value, datatype } => {
            let quoted = format!("\"{}\"", escape_literal(&value.lexical()));
            if datatype.is_xsd_string() {
                quoted
            } else {
                format!("{quoted}^^{}", compact_iri(datatype.as_iri(), prefixes))
            }
        }
    }
}

/// Render a term in predicate position; `rdf:type` becomes `a`
pub fn format_predicate(term: &Term, prefixes: &BTreeMap<String, String>) -> String {
    match term.as_iri() {
        Some(patent_vocab::rdf::TYPE) => "a".to_string(),
        _ => format_term(term, prefixes),
    }
}
