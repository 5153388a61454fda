use std::collections::HashSet;

use tracing::debug;

use super::tree::SectionTree;

/// Which sections are currently open.
///
/// The open set is always a single chain from a root down to the most
/// recently opened node, held root-first. Opening a node replaces the chain
/// with the node's path, so its ancestors open with it and every other
/// branch closes; closing truncates the chain just above the node, leaving
/// its ancestors open. This is the accordion policy: at most one branch of
/// the tree is open at a time.
#[derive(Debug, Default)]
pub struct ExpansionState {
    chain: Vec<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open or close the section `id`. Identifiers the tree does not know
    /// are ignored.
    pub fn toggle(&mut self, tree: &SectionTree, id: &str) {
        let Some(node) = tree.lookup(id) else {
            debug!(id, "toggle on unknown section identifier ignored");
            return;
        };

        match self.chain.iter().position(|open| open == id) {
            // Closing: keep exactly the open identifiers that are ancestors
            // of `id`, which on a chain is everything above it.
            Some(pos) => self.chain.truncate(pos),
            // Opening: the chain becomes root → … → id.
            None => self.chain = tree.path(node),
        }
    }

    /// Rendering contract: a section's content is visible iff its
    /// identifier is open.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.chain.iter().any(|open| open == id)
    }

    /// Read-only snapshot of the open identifiers for a render pass.
    pub fn expanded(&self) -> HashSet<&str> {
        self.chain.iter().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
