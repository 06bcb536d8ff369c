//! Graph builder — applies credit records to the node arena.
//!
//! Build rules:
//!
//! - An actor record starts a new current-actor context. Redeclaring a name
//!   reopens the existing node (first creation wins as the identity); it
//!   never creates a second node for the same name.
//! - A title record credits the current actor. Titles are deduplicated
//!   across all actors. A title before any actor record is an orphan:
//!   skipped and counted, no node created.
//! - Credits have set semantics. A repeated (actor, movie) pair mutates
//!   nothing; a new pair mutates exactly the two endpoint lists.

use hashbrown::HashMap;
use tracing::debug;

use crate::credits::Record;
use crate::model::{Node, NodeId, NodeKind};

pub(crate) struct GraphBuilder {
    pub(crate) nodes: Vec<Node>,
    pub(crate) actors: HashMap<String, NodeId>,
    pub(crate) movies: HashMap<String, NodeId>,
    /// Actor context the next title record attaches to.
    current: Option<NodeId>,
    pub(crate) edges: usize,
    pub(crate) orphaned: usize,
}

impl GraphBuilder {
    pub fn with_capacity(expected_actors: usize, expected_movies: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(expected_actors + expected_movies),
            actors: HashMap::with_capacity(expected_actors),
            movies: HashMap::with_capacity(expected_movies),
            current: None,
            edges: 0,
            orphaned: 0,
        }
    }

    pub fn apply(&mut self, record: Record) {
        match record {
            Record::Actor(name) => {
                let id = self.intern(NodeKind::Actor, name);
                self.current = Some(id);
            }
            Record::Title(title) => {
                let Some(actor) = self.current else {
                    debug!(title = %title, "title record before any actor, skipped");
                    self.orphaned += 1;
                    return;
                };
                let movie = self.intern(NodeKind::Movie, title);
                self.connect(actor, movie);
            }
        }
    }

    /// Node for `name`, creating it on first sight. One node per unique
    /// name within each kind; the kinds' namespaces are independent.
    fn intern(&mut self, kind: NodeKind, name: String) -> NodeId {
        let existing = match kind {
            NodeKind::Actor => self.actors.get(&name).copied(),
            NodeKind::Movie => self.movies.get(&name).copied(),
        };
        if let Some(id) = existing {
            return id;
        }

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(id, kind, name.clone()));
        match kind {
            NodeKind::Actor => self.actors.insert(name, id),
            NodeKind::Movie => self.movies.insert(name, id),
        };
        id
    }

    /// Add the undirected (actor, movie) edge if it is not already present.
    /// Symmetry means checking the actor side suffices.
    fn connect(&mut self, actor: NodeId, movie: NodeId) {
        if self.nodes[actor.index()].neighbors.contains(&movie) {
            return;
        }
        self.nodes[actor.index()].neighbors.push(movie);
        self.nodes[movie.index()].neighbors.push(actor);
        self.edges += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(builder: &mut GraphBuilder, records: &[Record]) {
        for record in records {
            builder.apply(record.clone());
        }
    }

    #[test]
    fn test_duplicate_actor_reopens_existing_node() {
        let mut b = GraphBuilder::with_capacity(4, 4);
        apply_all(
            &mut b,
            &[
                Record::Actor("X".into()),
                Record::Title("M1".into()),
                Record::Actor("Y".into()),
                Record::Actor("X".into()),
                Record::Title("M2".into()),
            ],
        );

        assert_eq!(b.actors.len(), 2, "redeclaring X must not add a node");
        let x = b.actors["X"];
        assert_eq!(b.nodes[x.index()].degree(), 2, "credits accumulate on the one X node");
    }

    #[test]
    fn test_orphan_title_is_skipped_without_a_node() {
        let mut b = GraphBuilder::with_capacity(4, 4);
        apply_all(
            &mut b,
            &[Record::Title("Orphan (1999)".into()), Record::Actor("X".into())],
        );

        assert_eq!(b.orphaned, 1);
        assert_eq!(b.movies.len(), 0, "orphan titles create no movie node");
        assert_eq!(b.edges, 0);
    }

    #[test]
    fn test_repeated_credit_mutates_nothing() {
        let mut b = GraphBuilder::with_capacity(4, 4);
        apply_all(
            &mut b,
            &[
                Record::Actor("X".into()),
                Record::Title("M1".into()),
                Record::Title("M1".into()),
            ],
        );

        assert_eq!(b.edges, 1);
        let x = b.actors["X"];
        let m = b.movies["M1"];
        assert_eq!(b.nodes[x.index()].neighbors.as_slice(), &[m]);
        assert_eq!(b.nodes[m.index()].neighbors.as_slice(), &[x]);
    }

    #[test]
    fn test_shared_title_connects_both_actors() {
        let mut b = GraphBuilder::with_capacity(4, 4);
        apply_all(
            &mut b,
            &[
                Record::Actor("X".into()),
                Record::Title("M1".into()),
                Record::Actor("Y".into()),
                Record::Title("M1".into()),
            ],
        );

        assert_eq!(b.movies.len(), 1, "titles are deduplicated across actors");
        assert_eq!(b.edges, 2);
        let m = b.movies["M1"];
        assert_eq!(b.nodes[m.index()].degree(), 2);
    }
}
