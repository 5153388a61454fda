pub mod state;
pub mod tree;

pub use state::ExpansionState;
pub use tree::{NodeId, SectionTree};
