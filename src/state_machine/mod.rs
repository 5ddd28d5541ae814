mod table;
mod transducer;

pub use table::{Edge, RawTable, Rule, RuleSpec, TransitionTable};
pub use transducer::Transducer;
