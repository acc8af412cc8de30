//! Evolutionary distances and distance-based phylogenetics.
//!
//! The pipeline this crate covers: raw sequences in, [`distance_matrix`]
//! over a chosen [`DistanceModel`], [`upgma`] clustering into a
//! [`ClusterTree`], and [`to_newick`] for serialization.
//!
//! ```
//! use nerka_phylo::{distance_matrix, to_newick, upgma, DistanceModel};
//!
//! let seqs: Vec<&[u8]> = vec![b"ACGTACGT", b"ACGTACGA", b"TTGTACGT"];
//! let m = distance_matrix(&seqs, DistanceModel::P);
//! let tree = upgma(&["s1", "s2", "s3"], &m).unwrap();
//! let newick = format!("{};", to_newick(&tree));
//! assert!(newick.ends_with(';'));
//! ```

mod distance;
mod matrix;
mod newick;
mod tree;
mod upgma;

pub use distance::{distance_matrix, jukes_cantor, p_distance, DistanceModel};
pub use matrix::DistanceMatrix;
pub use newick::to_newick;
pub use tree::{ClusterNode, ClusterTree, NodeId};
pub use upgma::upgma;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_end_to_end() {
        let seqs: Vec<&[u8]> = vec![b"ACGTACGT", b"ACGTACGA", b"TTGTACGT"];
        let names = ["s1", "s2", "s3"];
        let m = distance_matrix(&seqs, DistanceModel::JukesCantor);
        let tree = upgma(&names, &m).unwrap();

        assert_eq!(tree.leaf_names(), vec!["s1", "s2", "s3"]);
        let newick = to_newick(&tree);
        // s1 and s2 differ at one site, both are far from s3.
        assert!(newick.contains("(s1:"));
        assert!(newick.contains(",s2:"));
        assert!(!newick.ends_with(';'));
    }

    #[test]
    fn upgma_from_p_distances() {
        let seqs: Vec<&[u8]> = vec![b"AAAA", b"AAAT", b"AATT"];
        let names = ["s1", "s2", "s3"];
        let m = distance_matrix(&seqs, DistanceModel::P);
        assert!((m.get(0, 1) - 0.25).abs() < 1e-12);
        assert!((m.get(0, 2) - 0.5).abs() < 1e-12);

        let tree = upgma(&names, &m).unwrap();
        assert_eq!(tree.leaf_names(), vec!["s1", "s2", "s3"]);

        let newick = format!("{};", to_newick(&tree));
        assert!(newick.ends_with(';'));
        for name in names {
            assert!(newick.contains(name));
        }
        // d(s1,s2) and d(s2,s3) tie at 0.25; the earliest pair merges
        // first, and the surviving leaf s3 (id 2) precedes C3 at the root.
        assert!(newick.contains("(s1:0.1250,s2:0.1250)C3"));
        assert!(newick.starts_with("(s3:"));
    }
}
