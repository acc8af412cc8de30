//! Scoring schemes for pairwise sequence alignment.
//!
//! A [`ScoringScheme`] holds the three integers the alignment recurrences
//! consume: match reward, mismatch penalty, and a linear (length-proportional)
//! gap penalty.

use nerka_core::{NerkaError, Result};

/// Match/mismatch/gap scoring with a linear gap cost.
///
/// The default scheme is `{+1, -1, -1}`. Schemes are immutable and shared by
/// reference across all alignment calls.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringScheme {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap: i32,
}

impl ScoringScheme {
    /// Create a new scoring scheme.
    ///
    /// # Errors
    ///
    /// Returns an error if `match_score` is not positive or if
    /// `mismatch_score` / `gap` are not negative.
    pub fn new(match_score: i32, mismatch_score: i32, gap: i32) -> Result<Self> {
        if match_score <= 0 {
            return Err(NerkaError::InvalidInput(
                "match_score must be positive".into(),
            ));
        }
        if mismatch_score >= 0 {
            return Err(NerkaError::InvalidInput(
                "mismatch_score must be negative".into(),
            ));
        }
        if gap >= 0 {
            return Err(NerkaError::InvalidInput("gap must be negative".into()));
        }
        Ok(Self {
            match_score,
            mismatch_score,
            gap,
        })
    }

    /// Score a pair of symbols. Case-insensitive.
    pub fn score_pair(&self, a: u8, b: u8) -> i32 {
        if a.eq_ignore_ascii_case(&b) {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

impl Default for ScoringScheme {
    /// The conventional `{+1, -1, -1}` scheme.
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch_score: -1,
            gap: -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let s = ScoringScheme::default();
        assert_eq!(s.match_score, 1);
        assert_eq!(s.mismatch_score, -1);
        assert_eq!(s.gap, -1);
    }

    #[test]
    fn score_pair_case_insensitive() {
        let s = ScoringScheme::default();
        assert_eq!(s.score_pair(b'A', b'A'), 1);
        assert_eq!(s.score_pair(b'a', b'A'), 1);
        assert_eq!(s.score_pair(b'A', b'T'), -1);
    }

    #[test]
    fn validation() {
        assert!(ScoringScheme::new(0, -1, -1).is_err());
        assert!(ScoringScheme::new(1, 0, -1).is_err());
        assert!(ScoringScheme::new(1, -1, 0).is_err());
        assert!(ScoringScheme::new(2, -3, -2).is_ok());
    }
}
