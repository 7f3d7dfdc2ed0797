//! Data model shared by the normalizer, the graph builder and the validator.
//!
//! A [`Reading`] is one row of the canonical readings table. The [`vocab`] module holds the exact
//! class and property IRIs of the measurement pattern.

mod error;
mod reading;
pub mod vocab;
mod xsd;

pub use error::*;
pub use reading::*;
pub use xsd::*;

// Re-export some oxrdf types.
pub use oxrdf::{
    Graph, IriParseError, Literal, LiteralRef, NamedNode, NamedNodeRef, Subject, SubjectRef, Term,
    TermRef, Triple, TripleRef,
};
