//! Arena-backed cluster trees.
//!
//! Nodes live in a flat `Vec`; a [`NodeId`] is an index into it. Leaves
//! occupy the first `n` slots with height 0.0, internal nodes are appended
//! as merges happen, so a node's id doubles as its creation order.

use nerka_core::Summarizable;

/// Index of a node within its [`ClusterTree`] arena.
pub type NodeId = usize;

/// A single node: a named leaf or an internal merge point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterNode {
    pub name: String,
    /// Distance from this node down to any leaf beneath it.
    pub height: f64,
    /// `None` for leaves.
    pub children: Option<(NodeId, NodeId)>,
}

impl ClusterNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// A rooted binary tree produced by hierarchical clustering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterTree {
    pub(crate) nodes: Vec<ClusterNode>,
    pub(crate) root: NodeId,
}

impl ClusterTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// # Panics
    ///
    /// Panics if `id` is not a node of this tree.
    pub fn node(&self, id: NodeId) -> &ClusterNode {
        &self.nodes[id]
    }

    /// Total number of nodes, leaves and internal.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Leaf names in arena (input) order.
    pub fn leaf_names(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.is_leaf())
            .map(|n| n.name.as_str())
            .collect()
    }
}

impl Summarizable for ClusterTree {
    fn summary(&self) -> String {
        let leaves = self.nodes.iter().filter(|n| n.is_leaf()).count();
        format!(
            "cluster tree: {} leaves, root height {:.4}",
            leaves,
            self.nodes[self.root].height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_leaf_tree() -> ClusterTree {
        ClusterTree {
            nodes: vec![
                ClusterNode {
                    name: "a".into(),
                    height: 0.0,
                    children: None,
                },
                ClusterNode {
                    name: "b".into(),
                    height: 0.0,
                    children: None,
                },
                ClusterNode {
                    name: "C2".into(),
                    height: 0.5,
                    children: Some((0, 1)),
                },
            ],
            root: 2,
        }
    }

    #[test]
    fn leaf_names_in_order() {
        let t = two_leaf_tree();
        assert_eq!(t.leaf_names(), vec!["a", "b"]);
    }

    #[test]
    fn root_is_internal() {
        let t = two_leaf_tree();
        assert!(!t.node(t.root()).is_leaf());
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn summary_counts_leaves() {
        let t = two_leaf_tree();
        assert!(t.summary().contains("2 leaves"));
    }
}
