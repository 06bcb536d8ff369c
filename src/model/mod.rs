//! # Costar Graph Model
//!
//! Clean DTOs that define the bipartite actor/movie graph.
//! These types cross every boundary: parsing, building, traversal, queries.
//!
//! This module is pure data. No I/O, no state.

pub mod node;
pub mod chain;
pub mod separation;

pub use node::{Node, NodeId, NodeKind};
pub use chain::{Chain, Step};
pub use separation::Separation;
