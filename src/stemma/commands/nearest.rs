//! Nearest ancestor whose named attribute equals a given value.

use crate::commands::ancestors;
use crate::model::NodeId;
use crate::store::FlatStore;
use serde_json::Value;

/// Walk `id`'s ancestors nearest-first and return the first one whose
/// `attribute` equals `value`.
///
/// When nothing matches and `return_root_if_none` is set, the resolved root
/// id is returned explicitly — including when the node has no ancestors at
/// all. Otherwise the result is `None`.
pub fn run(
    store: &FlatStore,
    root: &NodeId,
    id: &NodeId,
    attribute: &str,
    value: &Value,
    return_root_if_none: bool,
    include_current: bool,
) -> Option<NodeId> {
    for (node, record) in ancestors::run(store, root, id, include_current) {
        if record.attr(attribute) == Some(value) {
            return Some(node);
        }
    }
    return_root_if_none.then(|| root.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use serde_json::json;

    fn fixture() -> (FlatStore, NodeId) {
        // a (root, container) <- b (container) <- c <- d
        let a = NodeId::from("a");
        let store: FlatStore = [
            (a.clone(), Record::child_of(&a).with_attr("container", true)),
            (
                NodeId::from("b"),
                Record::child_of(&a).with_attr("container", true),
            ),
            (NodeId::from("c"), Record::child_of(&NodeId::from("b"))),
            (NodeId::from("d"), Record::child_of(&NodeId::from("c"))),
        ]
        .into_iter()
        .collect();
        (store, a)
    }

    #[test]
    fn test_finds_nearest_match() {
        let (store, root) = fixture();
        let found = run(
            &store,
            &root,
            &NodeId::from("d"),
            "container",
            &json!(true),
            false,
            false,
        );
        assert_eq!(found, Some(NodeId::from("b")));
    }

    #[test]
    fn test_include_current_can_match_self() {
        let (store, root) = fixture();
        let found = run(
            &store,
            &root,
            &NodeId::from("b"),
            "container",
            &json!(true),
            false,
            true,
        );
        assert_eq!(found, Some(NodeId::from("b")));
    }

    #[test]
    fn test_no_match_returns_none() {
        let (store, root) = fixture();
        let found = run(
            &store,
            &root,
            &NodeId::from("d"),
            "container",
            &json!("never"),
            false,
            false,
        );
        assert_eq!(found, None);
    }

    #[test]
    fn test_root_fallback() {
        let (store, root) = fixture();
        let found = run(
            &store,
            &root,
            &NodeId::from("d"),
            "missing",
            &json!(1),
            true,
            false,
        );
        assert_eq!(found, Some(root.clone()));

        // Even the root itself, which has no ancestors, falls back cleanly.
        let found = run(&store, &root, &root, "missing", &json!(1), true, false);
        assert_eq!(found, Some(root));
    }
}
