//! Newick serialization for cluster trees.

use crate::tree::{ClusterTree, NodeId};

/// Render a tree in Newick notation.
///
/// Leaves render as their name; internal nodes as
/// `(left:branch,right:branch)name` where each branch length is the height
/// difference between parent and child, formatted to four decimal places.
/// The terminating `;` is NOT appended; callers add it when writing files.
pub fn to_newick(tree: &ClusterTree) -> String {
    let mut out = String::new();
    write_node(tree, tree.root(), &mut out);
    out
}

fn write_node(tree: &ClusterTree, id: NodeId, out: &mut String) {
    let node = tree.node(id);
    match node.children {
        None => out.push_str(&node.name),
        Some((left, right)) => {
            out.push('(');
            write_node(tree, left, out);
            out.push_str(&format!(":{:.4}", node.height - tree.node(left).height));
            out.push(',');
            write_node(tree, right, out);
            out.push_str(&format!(":{:.4}", node.height - tree.node(right).height));
            out.push(')');
            out.push_str(&node.name);
        }
    }
}
