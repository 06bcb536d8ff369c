//! # Costar Graph
//!
//! Lifecycle: build the arena from credit records, resolve the reference
//! actor, run one breadth-first traversal, then serve read-only queries.
//! Construction owns every mutation; a finished [`CostarGraph`] is
//! immutable and all query methods take `&self`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use hashbrown::HashMap;
use tracing::{debug, info};

use crate::credits::{self, Record};
use crate::model::{Chain, Node, NodeId, Separation, Step};
use crate::{Error, Result};

mod bfs;
mod builder;

use bfs::{Traversal, breadth_first};
use builder::GraphBuilder;

// ============================================================================
// Build Options
// ============================================================================

/// Construction parameters for a [`CostarGraph`].
///
/// The capacity hints pre-size the node arena and name indexes; they change
/// throughput on large files, never observable behavior.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Actor every distance is measured from.
    pub reference_actor: String,
    pub expected_actors: usize,
    pub expected_movies: usize,
}

impl BuildOptions {
    pub const DEFAULT_REFERENCE_ACTOR: &'static str = "Bacon, Kevin (I)";
    pub const DEFAULT_EXPECTED_ACTORS: usize = 3_000;
    pub const DEFAULT_EXPECTED_MOVIES: usize = 1_000;

    pub fn with_reference(mut self, name: impl Into<String>) -> Self {
        self.reference_actor = name.into();
        self
    }

    pub fn with_expected_actors(mut self, count: usize) -> Self {
        self.expected_actors = count;
        self
    }

    pub fn with_expected_movies(mut self, count: usize) -> Self {
        self.expected_movies = count;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.reference_actor.trim().is_empty() {
            return Err(Error::InvalidArgument("reference actor name is blank".into()));
        }
        Ok(())
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            reference_actor: Self::DEFAULT_REFERENCE_ACTOR.to_owned(),
            expected_actors: Self::DEFAULT_EXPECTED_ACTORS,
            expected_movies: Self::DEFAULT_EXPECTED_MOVIES,
        }
    }
}

// ============================================================================
// CostarGraph
// ============================================================================

/// Bipartite actor/movie graph with shortest paths from a reference actor.
#[derive(Debug)]
pub struct CostarGraph {
    nodes: Vec<Node>,
    /// Actor name index. The movie index is dropped after construction;
    /// only actors are queryable.
    actors: HashMap<String, NodeId>,
    reference: NodeId,
    traversal: Traversal,
    movie_count: usize,
    edge_count: usize,
}

impl CostarGraph {
    /// Load a credits file and compute shortest paths.
    pub fn from_path(path: impl AsRef<Path>, options: &BuildOptions) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().to_str().is_some_and(|s| s.trim().is_empty()) {
            return Err(Error::InvalidArgument("credits path is blank".into()));
        }

        let started = Instant::now();
        let file = File::open(path)?;
        let graph = Self::from_reader(BufReader::new(file), options)?;
        info!(elapsed_ms = started.elapsed().as_millis() as u64, "graph ready");
        Ok(graph)
    }

    /// Build from any line source. Unrecognized lines are skipped and
    /// counted, never errors; only I/O failures abort the load.
    pub fn from_reader<R: BufRead>(reader: R, options: &BuildOptions) -> Result<Self> {
        options.validate()?;

        let started = Instant::now();
        let mut builder =
            GraphBuilder::with_capacity(options.expected_actors, options.expected_movies);
        let mut malformed: usize = 0;

        for line in reader.lines() {
            let line = line?;
            match credits::parse_line(&line) {
                Some(record) => builder.apply(record),
                None => {
                    debug!(line = %line, "unrecognized line, skipped");
                    malformed += 1;
                }
            }
        }

        info!(
            actors = builder.actors.len(),
            movies = builder.movies.len(),
            edges = builder.edges,
            orphaned = builder.orphaned,
            malformed,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "credits loaded",
        );

        Self::finish(builder, options)
    }

    /// Build from records already in memory, in file order: each actor
    /// record opens the context its following titles attach to.
    pub fn from_records<I>(records: I, options: &BuildOptions) -> Result<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        options.validate()?;

        let mut builder =
            GraphBuilder::with_capacity(options.expected_actors, options.expected_movies);
        for record in records {
            builder.apply(record);
        }
        Self::finish(builder, options)
    }

    /// Resolve the reference actor and run the one traversal.
    fn finish(builder: GraphBuilder, options: &BuildOptions) -> Result<Self> {
        let Some(&reference) = builder.actors.get(&options.reference_actor) else {
            return Err(Error::ReferenceActorNotFound(options.reference_actor.clone()));
        };

        let started = Instant::now();
        let traversal = breadth_first(&builder.nodes, reference);
        info!(
            reached = traversal.reached_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "shortest paths computed",
        );

        Ok(Self {
            movie_count: builder.movies.len(),
            edge_count: builder.edges,
            nodes: builder.nodes,
            actors: builder.actors,
            reference,
            traversal,
        })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// How far `name` is from the reference actor.
    ///
    /// Unknown and disconnected names are answers, not errors; only a blank
    /// name is rejected.
    pub fn separation(&self, name: &str) -> Result<Separation> {
        let Some(id) = self.lookup(name)? else {
            return Ok(Separation::NotFound);
        };

        if !self.traversal.is_reached(id) {
            return Ok(Separation::Unreachable);
        }
        // Levels alternate movie/actor, so actor distances are even.
        Ok(Separation::Degrees(self.traversal.distance(id) / 2))
    }

    /// Shortest chain from the reference actor to `name`, or `None` for an
    /// unknown name.
    ///
    /// An unreachable actor yields the one-step chain of itself; check
    /// [`Self::separation`] before reading a chain as a connection.
    pub fn chain_to(&self, name: &str) -> Result<Option<Chain>> {
        let Some(id) = self.lookup(name)? else {
            return Ok(None);
        };

        // Predecessors form a tree rooted at the reference actor, so the
        // walk is finite. Collect leaf-to-root, then flip.
        let mut ids = vec![id];
        let mut cursor = id;
        while let Some(previous) = self.traversal.predecessor(cursor) {
            ids.push(previous);
            cursor = previous;
        }
        ids.reverse();

        let steps = ids
            .into_iter()
            .map(|id| {
                let node = &self.nodes[id.index()];
                Step::new(node.kind, node.name.clone())
            })
            .collect();
        Ok(Some(Chain { steps }))
    }

    fn lookup(&self, name: &str) -> Result<Option<NodeId>> {
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument("actor name is blank".into()));
        }
        Ok(self.actors.get(name).copied())
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Name the distances are measured from.
    pub fn reference_actor(&self) -> &str {
        &self.nodes[self.reference.index()].name
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movie_count
    }

    /// Distinct (actor, movie) credits.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
