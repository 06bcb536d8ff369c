//! Breadth-first shortest paths over the node arena.

use std::collections::VecDeque;

use crate::model::{Node, NodeId};

/// Distance sentinel for nodes the traversal never discovered.
pub(crate) const UNREACHED: u32 = u32::MAX;

/// Result of one breadth-first traversal, parallel to the node arena.
///
/// Nodes are never mutated by a traversal; distances and predecessors live
/// here, indexed by `NodeId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Traversal {
    /// Hop count from the start node, `UNREACHED` if never discovered.
    pub distances: Vec<u32>,
    /// Previous node on a shortest path. `None` for the start node and
    /// for unreached nodes.
    pub predecessors: Vec<Option<NodeId>>,
}

impl Traversal {
    pub fn distance(&self, id: NodeId) -> u32 {
        self.distances[id.index()]
    }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.predecessors[id.index()]
    }

    pub fn is_reached(&self, id: NodeId) -> bool {
        self.distance(id) != UNREACHED
    }

    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|&&d| d != UNREACHED).count()
    }
}

/// Single-source BFS from `start`. A pure function of the arena: the same
/// arena and start always produce the same `Traversal`.
///
/// FIFO frontier; the first discovery of a node finalizes its distance and
/// predecessor.
pub(crate) fn breadth_first(nodes: &[Node], start: NodeId) -> Traversal {
    let mut distances = vec![UNREACHED; nodes.len()];
    let mut predecessors = vec![None; nodes.len()];
    let mut frontier = VecDeque::new();

    distances[start.index()] = 0;
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        let next = distances[current.index()] + 1;
        for &neighbor in &nodes[current.index()].neighbors {
            if distances[neighbor.index()] == UNREACHED {
                distances[neighbor.index()] = next;
                predecessors[neighbor.index()] = Some(current);
                frontier.push_back(neighbor);
            }
        }
    }

    Traversal { distances, predecessors }
}
