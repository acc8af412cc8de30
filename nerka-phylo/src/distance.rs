//! Pairwise evolutionary distances.
//!
//! Distances are computed on the fly from unaligned sequences: each pair is
//! globally aligned under the default scoring scheme, then compared column
//! by column. The Jukes-Cantor model corrects the raw proportion for
//! unobserved multiple substitutions.

use std::str::FromStr;

use nerka_align::{align_global, ScoringScheme};
use nerka_core::NerkaError;

use crate::matrix::DistanceMatrix;

/// Which distance to put in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceModel {
    /// Raw proportion of differing sites.
    P,
    /// Jukes-Cantor 1969 correction of the p-distance.
    JukesCantor,
}

impl FromStr for DistanceModel {
    type Err = NerkaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" => Ok(Self::P),
            "jc" => Ok(Self::JukesCantor),
            other => Err(NerkaError::Config(format!(
                "unknown distance model '{other}' (expected 'p' or 'jc')"
            ))),
        }
    }
}

/// Proportion of differing sites between two sequences.
///
/// The sequences are globally aligned first; only columns where both rows
/// carry a residue (no gap on either side) are compared. With zero
/// comparable columns the sequences are treated as maximally distant and
/// the result is `1.0`.
pub fn p_distance(a: &[u8], b: &[u8]) -> f64 {
    // The DP tie-break is directional (gap-in-target beats gap-in-query),
    // so the two call orders could trace different paths. Canonicalize the
    // argument order to keep the distance symmetric.
    let (q, t) = if a <= b { (a, b) } else { (b, a) };
    let aln = align_global(q, t, &ScoringScheme::default());
    let mut comparisons = 0usize;
    let mut matches = 0usize;
    for (x, y) in aln.aligned_query.iter().zip(&aln.aligned_target) {
        if *x != b'-' && *y != b'-' {
            comparisons += 1;
            if x.eq_ignore_ascii_case(y) {
                matches += 1;
            }
        }
    }
    if comparisons == 0 {
        return 1.0;
    }
    1.0 - matches as f64 / comparisons as f64
}

/// Jukes-Cantor corrected distance for an observed p-distance.
///
/// Returns `f64::INFINITY` at saturation (`p >= 0.75`), where the model has
/// no finite estimate.
pub fn jukes_cantor(p: f64) -> f64 {
    if p >= 0.75 {
        return f64::INFINITY;
    }
    -0.75 * (1.0 - 4.0 * p / 3.0).ln()
}

fn pair_distance(a: &[u8], b: &[u8], model: DistanceModel) -> f64 {
    let p = p_distance(a, b);
    match model {
        DistanceModel::P => p,
        DistanceModel::JukesCantor => jukes_cantor(p),
    }
}

/// Distance matrix over every unordered pair of `seqs`.
pub fn distance_matrix(seqs: &[&[u8]], model: DistanceModel) -> DistanceMatrix {
    let n = seqs.len();
    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();

    #[cfg(feature = "parallel")]
    let data: Vec<f64> = {
        use rayon::prelude::*;
        pairs
            .par_iter()
            .map(|&(i, j)| pair_distance(seqs[i], seqs[j], model))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let data: Vec<f64> = pairs
        .iter()
        .map(|&(i, j)| pair_distance(seqs[i], seqs[j], model))
        .collect();

    DistanceMatrix::from_condensed(n, data)
}
