//! UPGMA hierarchical clustering.

use nerka_core::{NerkaError, Result};

use crate::matrix::DistanceMatrix;
use crate::tree::{ClusterNode, ClusterTree, NodeId};

/// Average-linkage agglomerative clustering over a distance matrix.
///
/// Leaves take ids `0..n` in input order; each merge appends an internal
/// node named `C{id}` whose height is half the merged distance. The working
/// set is kept sorted by creation id and the minimum scan uses strict
/// less-than, so equal distances always resolve to the pair of
/// earliest-created clusters. An all-infinite matrix therefore still
/// clusters, merging in creation order.
///
/// # Errors
///
/// Returns an error if `names` is empty or its length does not match the
/// matrix size.
pub fn upgma(names: &[&str], matrix: &DistanceMatrix) -> Result<ClusterTree> {
    let n = names.len();
    if n == 0 {
        return Err(NerkaError::InvalidInput(
            "clustering requires at least one sequence".into(),
        ));
    }
    if matrix.size() != n {
        return Err(NerkaError::InvalidInput(format!(
            "{} names but a {}x{} matrix",
            n,
            matrix.size(),
            matrix.size()
        )));
    }

    let mut nodes: Vec<ClusterNode> = names
        .iter()
        .map(|name| ClusterNode {
            name: (*name).to_string(),
            height: 0.0,
            children: None,
        })
        .collect();

    if n == 1 {
        return Ok(ClusterTree { nodes, root: 0 });
    }

    // Active clusters in creation-id order; new merges append at the end,
    // which keeps the order sorted without re-sorting.
    let mut ids: Vec<NodeId> = (0..n).collect();
    let mut sizes: Vec<usize> = vec![1; n];
    let mut dist: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| matrix.get(i, j)).collect())
        .collect();

    while ids.len() > 1 {
        let m = ids.len();
        let (mut bi, mut bj) = (0, 1);
        let mut best = dist[0][1];
        for i in 0..m {
            for j in (i + 1)..m {
                if dist[i][j] < best {
                    best = dist[i][j];
                    bi = i;
                    bj = j;
                }
            }
        }

        let new_id = nodes.len();
        nodes.push(ClusterNode {
            name: format!("C{new_id}"),
            height: best / 2.0,
            children: Some((ids[bi], ids[bj])),
        });

        let (si, sj) = (sizes[bi] as f64, sizes[bj] as f64);
        let merged: Vec<f64> = (0..m)
            .filter(|&k| k != bi && k != bj)
            .map(|k| (si * dist[bi][k] + sj * dist[bj][k]) / (si + sj))
            .collect();

        // Drop the higher index first so the lower stays valid.
        for row in dist.iter_mut() {
            row.remove(bj);
            row.remove(bi);
        }
        dist.remove(bj);
        dist.remove(bi);
        for (row, &d) in dist.iter_mut().zip(&merged) {
            row.push(d);
        }
        let mut new_row = merged;
        new_row.push(0.0);
        dist.push(new_row);

        let new_size = sizes[bi] + sizes[bj];
        ids.remove(bj);
        ids.remove(bi);
        sizes.remove(bj);
        sizes.remove(bi);
        ids.push(new_id);
        sizes.push(new_size);
    }

    let root = ids[0];
    Ok(ClusterTree { nodes, root })
}
