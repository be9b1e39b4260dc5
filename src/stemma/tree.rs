//! The materialized tree.
//!
//! Nodes live in an index-based arena: each [`TreeNode`] owns its record and
//! refers to its children by arena index. This keeps construction and
//! traversal iterative (no recursion-depth limit on deep hierarchies) and
//! avoids parent back-pointers entirely.
//!
//! Records with valid parent chains that never reach the root — a second,
//! disconnected component — are simply absent from the tree. They stay
//! visible through store lookups.

use crate::index::ChildrenIndex;
use crate::model::{NodeId, Record};
use crate::store::FlatStore;
use std::collections::HashMap;

/// One node of the built tree: id, record snapshot, ordered children.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: NodeId,
    pub record: Record,
    children: Vec<usize>,
}

/// Arena-backed rooted tree. Immutable once built.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    lookup: HashMap<NodeId, usize>,
    root: usize,
}

impl Tree {
    /// Materialize the tree reachable from `root`, following the children
    /// index in order. Returns `None` when the root id is not in the store.
    pub fn build(store: &FlatStore, index: &ChildrenIndex, root: &NodeId) -> Option<Tree> {
        let record = store.get(root)?;
        let mut nodes = vec![TreeNode {
            id: root.clone(),
            record: record.clone(),
            children: Vec::new(),
        }];
        let mut lookup = HashMap::from([(root.clone(), 0usize)]);
        let mut stack = vec![0usize];

        while let Some(at) = stack.pop() {
            let parent_id = nodes[at].id.clone();
            for child_id in index.children_of(&parent_id) {
                // Guard against corrupted links feeding a node in twice.
                if lookup.contains_key(child_id) {
                    continue;
                }
                let Some(record) = store.get(child_id) else {
                    continue;
                };
                let slot = nodes.len();
                nodes.push(TreeNode {
                    id: child_id.clone(),
                    record: record.clone(),
                    children: Vec::new(),
                });
                lookup.insert(child_id.clone(), slot);
                nodes[at].children.push(slot);
                stack.push(slot);
            }
        }

        Some(Tree {
            nodes,
            lookup,
            root: 0,
        })
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[self.root]
    }

    pub fn get(&self, id: &NodeId) -> Option<&TreeNode> {
        self.lookup.get(id).map(|&at| &self.nodes[at])
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.lookup.contains_key(id)
    }

    /// Number of nodes reachable from the root, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children<'a>(&'a self, node: &'a TreeNode) -> impl Iterator<Item = &'a TreeNode> + 'a {
        node.children.iter().map(move |&at| &self.nodes[at])
    }

    /// Pre-order traversal yielding `(depth, node)`, root first at depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: vec![(0, self.root)],
        }
    }
}

pub struct Walk<'a> {
    tree: &'a Tree,
    stack: Vec<(usize, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, at) = self.stack.pop()?;
        let node = &self.tree.nodes[at];
        for &child in node.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}
