//! # sixdegrees — Six Degrees of Kevin Bacon
//!
//! Bipartite costar graph with breadth-first shortest paths from a
//! configurable reference actor.
//!
//! ## Design Principles
//!
//! 1. **Arena + indexes**: nodes live in one `Vec`, ids are indexes into it,
//!    name lookups go through per-kind maps
//! 2. **Traversal is data**: BFS writes distances and predecessors beside the
//!    arena, never into the nodes
//! 3. **Parser owns nothing**: credits line → `Record` is a pure function
//! 4. **Build once, query forever**: every mutation ends inside the
//!    constructors; a finished graph is immutable
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sixdegrees::{BuildOptions, CostarGraph, Separation};
//!
//! # fn example() -> sixdegrees::Result<()> {
//! // Load a credits file; the traversal runs during construction.
//! let options = BuildOptions::default().with_reference("Bacon, Kevin (I)");
//! let graph = CostarGraph::from_path("cast.list", &options)?;
//!
//! match graph.separation("Hanks, Tom")? {
//!     Separation::Degrees(n) => println!("Bacon number {n}"),
//!     Separation::Unreachable => println!("not connected"),
//!     Separation::NotFound => println!("no such actor"),
//! }
//!
//! if let Some(chain) = graph.chain_to("Hanks, Tom")? {
//!     println!("{chain}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Credits Format
//!
//! | Line | Record | Graph side |
//! |------|--------|------------|
//! | `<a>Name` | actor declaration | Actor node |
//! | `<t>Title` | credit of the current actor | Movie node |
//! | anything else | skipped | none |

// ============================================================================
// Modules
// ============================================================================

pub mod credits;
pub mod graph;
pub mod model;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Chain, Node, NodeId, NodeKind, Separation, Step};

// ============================================================================
// Re-exports: Credits parsing
// ============================================================================

pub use credits::{Record, parse_line};

// ============================================================================
// Re-exports: Graph
// ============================================================================

pub use graph::{BuildOptions, CostarGraph};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Reference actor not found: {0}")]
    ReferenceActorNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
