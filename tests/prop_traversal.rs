//! Property tests for the traversal invariants.
//!
//! Random record streams over small name pools, with the reference actor
//! always declared first so construction never fails.

use std::collections::HashSet;

use proptest::prelude::*;
use sixdegrees::{BuildOptions, CostarGraph, NodeKind, Record, Separation};

const REFERENCE: &str = "a0";

fn arb_record(actors: usize, movies: usize) -> impl Strategy<Value = Record> {
    prop_oneof![
        (0..actors).prop_map(|i| Record::Actor(format!("a{i}"))),
        (0..movies).prop_map(|i| Record::Title(format!("m{i}"))),
    ]
}

fn arb_credits() -> impl Strategy<Value = Vec<Record>> {
    proptest::collection::vec(arb_record(8, 6), 0..60).prop_map(|mut records| {
        records.insert(0, Record::Actor(REFERENCE.into()));
        records
    })
}

fn build(records: &[Record]) -> CostarGraph {
    CostarGraph::from_records(
        records.iter().cloned(),
        &BuildOptions::default().with_reference(REFERENCE),
    )
    .expect("reference is always declared")
}

fn declared_actors(records: &[Record]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(|record| match record {
            Record::Actor(name) => seen.insert(name.clone()).then(|| name.clone()),
            Record::Title(_) => None,
        })
        .collect()
}

/// (actor, movie) pairs the stream actually declares, replaying the
/// current-actor rule: a title credits the most recently named actor.
fn credit_pairs(records: &[Record]) -> HashSet<(String, String)> {
    let mut pairs = HashSet::new();
    let mut current: Option<String> = None;
    for record in records {
        match record {
            Record::Actor(name) => current = Some(name.clone()),
            Record::Title(title) => {
                if let Some(actor) = &current {
                    pairs.insert((actor.clone(), title.clone()));
                }
            }
        }
    }
    pairs
}

proptest! {
    #[test]
    fn reference_actor_is_always_at_zero(records in arb_credits()) {
        let graph = build(&records);
        prop_assert_eq!(graph.separation(REFERENCE).unwrap(), Separation::Degrees(0));
    }

    #[test]
    fn chains_alternate_and_realize_their_degrees(records in arb_credits()) {
        let graph = build(&records);
        let credits = credit_pairs(&records);

        for name in declared_actors(&records) {
            match graph.separation(&name).unwrap() {
                Separation::Degrees(n) => {
                    let chain = graph.chain_to(&name).unwrap().unwrap();

                    prop_assert_eq!(chain.len(), (2 * n + 1) as usize);
                    prop_assert_eq!(chain.degrees(), n);
                    prop_assert_eq!(chain.start().unwrap().name.as_str(), REFERENCE);
                    prop_assert_eq!(chain.end().unwrap().name.as_str(), name.as_str());

                    prop_assert_eq!(chain.start().unwrap().kind, NodeKind::Actor);
                    for pair in chain.steps.windows(2) {
                        prop_assert_eq!(pair[1].kind, pair[0].kind.other());
                    }

                    // Every hop of the chain is a credit the stream declared.
                    for pair in chain.steps.windows(2) {
                        let (actor, movie) = match pair[0].kind {
                            NodeKind::Actor => (&pair[0].name, &pair[1].name),
                            NodeKind::Movie => (&pair[1].name, &pair[0].name),
                        };
                        prop_assert!(
                            credits.contains(&(actor.clone(), movie.clone())),
                            "chain hop ({}, {}) was never declared",
                            actor,
                            movie,
                        );
                    }
                }
                Separation::Unreachable => {
                    let chain = graph.chain_to(&name).unwrap().unwrap();
                    prop_assert_eq!(chain.len(), 1);
                    prop_assert_eq!(chain.end().unwrap().name.as_str(), name.as_str());
                }
                Separation::NotFound => {
                    prop_assert!(false, "declared actor {} must be found", name);
                }
            }
        }
    }

    #[test]
    fn rebuilding_the_same_stream_answers_identically(records in arb_credits()) {
        let first = build(&records);
        let second = build(&records);

        for name in declared_actors(&records) {
            prop_assert_eq!(
                first.separation(&name).unwrap(),
                second.separation(&name).unwrap(),
            );
            prop_assert_eq!(first.chain_to(&name).unwrap(), second.chain_to(&name).unwrap());
        }
    }
}
