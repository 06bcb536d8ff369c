//! Chain — a reconstructed shortest path, reference actor first.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::NodeKind;

/// One step of a chain: an actor's name or a movie's title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub kind: NodeKind,
    pub name: String,
}

impl Step {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self { kind, name: name.into() }
    }
}

/// A shortest path through the costar graph, in root-to-leaf order:
/// reference actor, connecting movie, next actor, ..., queried actor.
///
/// Steps alternate Actor, Movie, Actor, ... and a chain reaching an actor
/// at Bacon number `n` has exactly `2 * n + 1` steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub steps: Vec<Step>,
}

impl Chain {
    pub fn single(step: Step) -> Self {
        Self { steps: vec![step] }
    }

    /// Number of steps (nodes), not hops.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn start(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn end(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Bacon number this chain realizes: movie steps on the chain.
    pub fn degrees(&self) -> u32 {
        (self.steps.len().saturating_sub(1) / 2) as u32
    }
}

/// Renders every step wrapped in its kind's marker, concatenated without
/// separators: `<a>Bacon, Kevin (I)<a><t>Apollo 13 (1995)<t><a>...`.
impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            let marker = step.kind.marker();
            write!(f, "{marker}{}{marker}", step.name)?;
        }
        Ok(())
    }
}
