//! Entity values produced by the load pipeline.
//!
//! Each entity maps to one or more tables in the output store. None of them
//! is mutated after construction.

mod edge;
mod synonym;
mod term;

pub use edge::{ClosurePair, Edge, IS_A};
pub use synonym::Synonym;
pub use term::Term;
