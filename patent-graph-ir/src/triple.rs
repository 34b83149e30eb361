//! RDF triple

use crate::Term;

/// A single subject-predicate-object statement
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    /// Subject (an IRI, possibly the `<>` placeholder)
    pub s: Term,
    /// Predicate (always an IRI)
    pub p: Term,
    /// Object (IRI or literal)
    pub o: Term,
}

impl Triple {
    /// Create a triple from its components
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Self { s, p, o }
    }

    /// Predicate IRI
    pub fn predicate_iri(&self) -> Option<&str> {
        self.p.as_iri()
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}
