//! Parent → ordered-children index.
//!
//! Built in one linear pass over the [`FlatStore`], before the tree itself.
//! Child order within a parent follows store order. Self-referencing records
//! (the root, by definition) appear in no child list: the root is nobody's
//! child.

use crate::model::NodeId;
use crate::store::FlatStore;
use std::collections::HashMap;

/// Read-only lookup from a parent id to its children, in store order.
#[derive(Debug, Clone)]
pub struct ChildrenIndex {
    children: HashMap<NodeId, Vec<NodeId>>,
}

impl ChildrenIndex {
    pub fn build(store: &FlatStore) -> Self {
        let mut children: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        for (id, record) in store.iter() {
            let Some(parent) = record.parent_id() else {
                continue;
            };
            if parent == *id {
                continue;
            }
            children.entry(parent).or_default().push(id.clone());
        }
        ChildrenIndex { children }
    }

    /// Children of `id`, empty for leaves and unknown ids.
    pub fn children_of(&self, id: &NodeId) -> &[NodeId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_children(&self, id: &NodeId) -> bool {
        !self.children_of(id).is_empty()
    }

    /// True when no record points at another: the degenerate case of a
    /// single-node dataset (or an empty one).
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn store() -> FlatStore {
        let root = NodeId::from("root");
        [
            (root.clone(), Record::child_of(&root)),
            (NodeId::from("b"), Record::child_of(&root)),
            (NodeId::from("c"), Record::child_of(&NodeId::from("b"))),
            (NodeId::from("d"), Record::child_of(&NodeId::from("b"))),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_children_in_store_order() {
        let index = ChildrenIndex::build(&store());
        let kids: Vec<&str> = index
            .children_of(&NodeId::from("b"))
            .iter()
            .map(NodeId::as_str)
            .collect();
        assert_eq!(kids, vec!["c", "d"]);
    }

    #[test]
    fn test_root_is_nobodys_child() {
        let index = ChildrenIndex::build(&store());
        for (_, kids) in &index.children {
            assert!(!kids.contains(&NodeId::from("root")));
        }
    }

    #[test]
    fn test_leaf_has_no_children() {
        let index = ChildrenIndex::build(&store());
        assert!(index.children_of(&NodeId::from("c")).is_empty());
        assert!(!index.has_children(&NodeId::from("c")));
        assert!(index.has_children(&NodeId::from("b")));
    }

    #[test]
    fn test_single_node_dataset_has_empty_index() {
        let root = NodeId::from("only");
        let store: FlatStore = [(root.clone(), Record::child_of(&root))].into_iter().collect();
        assert!(ChildrenIndex::build(&store).is_empty());
    }
}
