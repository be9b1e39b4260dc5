//! Upward walk along the parent chain.
//!
//! Emits ancestors nearest-first (parent, grandparent, …) and ends with the
//! resolved root. Three guards keep the walk finite on data the validator
//! could not rule out (disconnected cycles are structurally valid):
//!
//! 1. the next candidate is not in the store — stop
//! 2. the candidate was already emitted this walk — stop (cycle)
//! 3. the candidate is the starting node itself — stop (wrapped around)
//!
//! The walk is bounded by the number of distinct records and never blocks.

use crate::model::{NodeId, Record};
use crate::store::FlatStore;
use std::collections::HashSet;

pub fn run(
    store: &FlatStore,
    root: &NodeId,
    start: &NodeId,
    include_current: bool,
) -> Vec<(NodeId, Record)> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();

    let Some(start_record) = store.get(start) else {
        return out;
    };
    if include_current {
        out.push((start.clone(), start_record.clone()));
        seen.insert(start.clone());
    }
    let Some(mut at) = start_record.parent_id() else {
        return out;
    };

    while at != *start && seen.insert(at.clone()) {
        let Some(record) = store.get(&at) else {
            break;
        };
        out.push((at.clone(), record.clone()));
        if at == *root {
            break;
        }
        match record.parent_id() {
            Some(next) if next != at => at = next,
            // A non-root self-reference still terminates the chain.
            _ => break,
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn chain() -> (FlatStore, NodeId) {
        // a (root) <- b <- c
        let a = NodeId::from("a");
        let store: FlatStore = [
            (a.clone(), Record::child_of(&a)),
            (NodeId::from("b"), Record::child_of(&a)),
            (NodeId::from("c"), Record::child_of(&NodeId::from("b"))),
        ]
        .into_iter()
        .collect();
        (store, a)
    }

    fn ids(walked: &[(NodeId, Record)]) -> Vec<&str> {
        walked.iter().map(|(id, _)| id.as_str()).collect()
    }

    #[test]
    fn test_nearest_first_ending_with_root() {
        let (store, root) = chain();
        let walked = run(&store, &root, &NodeId::from("c"), false);
        assert_eq!(ids(&walked), vec!["b", "a"]);
    }

    #[test]
    fn test_include_current_prefixes_start() {
        let (store, root) = chain();
        let walked = run(&store, &root, &NodeId::from("c"), true);
        assert_eq!(ids(&walked), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_root_has_no_ancestors() {
        let (store, root) = chain();
        assert!(run(&store, &root, &root, false).is_empty());

        let walked = run(&store, &root, &root, true);
        assert_eq!(ids(&walked), vec!["a"]);
    }

    #[test]
    fn test_unknown_start_is_empty() {
        let (store, root) = chain();
        assert!(run(&store, &root, &NodeId::from("ghost"), false).is_empty());
    }

    #[test]
    fn test_cycle_terminates() {
        // Proper root beside a two-cycle x <-> y.
        let a = NodeId::from("a");
        let store: FlatStore = [
            (a.clone(), Record::child_of(&a)),
            (NodeId::from("x"), Record::child_of(&NodeId::from("y"))),
            (NodeId::from("y"), Record::child_of(&NodeId::from("x"))),
        ]
        .into_iter()
        .collect();

        // The walk wraps back to the start and stops.
        let walked = run(&store, &a, &NodeId::from("x"), false);
        assert_eq!(ids(&walked), vec!["y"]);
    }

    #[test]
    fn test_three_cycle_terminates() {
        let a = NodeId::from("a");
        let store: FlatStore = [
            (a.clone(), Record::child_of(&a)),
            (NodeId::from("x"), Record::child_of(&NodeId::from("y"))),
            (NodeId::from("y"), Record::child_of(&NodeId::from("z"))),
            (NodeId::from("z"), Record::child_of(&NodeId::from("x"))),
        ]
        .into_iter()
        .collect();

        let walked = run(&store, &a, &NodeId::from("x"), false);
        assert_eq!(ids(&walked), vec!["y", "z"]);
    }
}
