//! Node in the bipartite costar graph.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Opaque node identifier: an index into the graph's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Arena index of this node.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the bipartition a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Actor,
    Movie,
}

impl NodeKind {
    /// Marker that tags records of this kind in the credits format.
    /// The same marker wraps names of this kind when a chain is rendered.
    pub fn marker(self) -> &'static str {
        match self {
            NodeKind::Actor => "<a>",
            NodeKind::Movie => "<t>",
        }
    }

    /// The opposite side of the bipartition.
    pub fn other(self) -> NodeKind {
        match self {
            NodeKind::Actor => NodeKind::Movie,
            NodeKind::Movie => NodeKind::Actor,
        }
    }
}

/// A node in the costar graph.
///
/// Bipartite invariant: every id in `neighbors` refers to a node of the
/// opposite kind, and every edge appears in both endpoints' lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub name: String,
    pub neighbors: SmallVec<[NodeId; 8]>,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            neighbors: SmallVec::new(),
        }
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}
