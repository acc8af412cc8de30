//! Result types shared by the pairwise aligners.

use nerka_core::Scored;

/// Which pairwise algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignmentMode {
    /// End-to-end alignment (Needleman-Wunsch).
    Global,
    /// Best-scoring substring alignment (Smith-Waterman).
    Local,
}

/// A finished pairwise alignment.
///
/// `aligned_query` and `aligned_target` always have equal length; gap
/// positions hold `b'-'`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentResult {
    pub score: i32,
    pub aligned_query: Vec<u8>,
    pub aligned_target: Vec<u8>,
}

impl AlignmentResult {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_query.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_query.is_empty()
    }

    /// Number of columns where both rows carry the same (case-insensitive)
    /// non-gap symbol.
    pub fn matches(&self) -> usize {
        self.aligned_query
            .iter()
            .zip(&self.aligned_target)
            .filter(|(a, b)| **a != b'-' && a.eq_ignore_ascii_case(b))
            .count()
    }

    /// Fraction of columns that are matches, or 0.0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.matches() as f64 / self.len() as f64
        }
    }
}

impl Scored for AlignmentResult {
    fn score(&self) -> f64 {
        self.score as f64
    }
}
