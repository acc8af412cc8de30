//! Sequence alignment algorithms.
//!
//! Pairwise global ([`align_global`], Needleman-Wunsch) and local
//! ([`align_local`], Smith-Waterman) alignment with configurable linear-gap
//! scoring, plus center-star multiple sequence alignment ([`build_msa`]).
//!
//! All aligners are deterministic: DP ties are broken diagonal over up over
//! left, and the local traceback starts from the first maximal cell in
//! row-major order.
//!
//! ```
//! use nerka_align::{align_global, ScoringScheme};
//!
//! let r = align_global(b"ACGT", b"AGT", &ScoringScheme::default());
//! assert_eq!(r.score, 2);
//! assert_eq!(r.aligned_target, b"A-GT");
//! ```

mod global;
mod local;
mod msa;
mod scoring;
mod types;

pub use global::align_global;
pub use local::align_local;
pub use msa::build_msa;
pub use scoring::ScoringScheme;
pub use types::{AlignmentMode, AlignmentResult};

/// Dispatch to [`align_global`] or [`align_local`] based on `mode`.
pub fn align(
    query: &[u8],
    target: &[u8],
    scoring: &ScoringScheme,
    mode: AlignmentMode,
) -> AlignmentResult {
    match mode {
        AlignmentMode::Global => align_global(query, target, scoring),
        AlignmentMode::Local => align_local(query, target, scoring),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_matches_direct_calls() {
        let s = ScoringScheme::default();
        let g = align(b"ACGT", b"AGT", &s, AlignmentMode::Global);
        assert_eq!(g, align_global(b"ACGT", b"AGT", &s));
        let l = align(b"ACGT", b"AGT", &s, AlignmentMode::Local);
        assert_eq!(l, align_local(b"ACGT", b"AGT", &s));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')], 0..40)
    }

    proptest! {
        #[test]
        fn global_rows_equal_length(q in dna(), t in dna()) {
            let r = align_global(&q, &t, &ScoringScheme::default());
            prop_assert_eq!(r.aligned_query.len(), r.aligned_target.len());
        }

        #[test]
        fn global_rows_recover_inputs(q in dna(), t in dna()) {
            let r = align_global(&q, &t, &ScoringScheme::default());
            let rq: Vec<u8> = r.aligned_query.iter().copied().filter(|&c| c != b'-').collect();
            let rt: Vec<u8> = r.aligned_target.iter().copied().filter(|&c| c != b'-').collect();
            prop_assert_eq!(rq, q);
            prop_assert_eq!(rt, t);
        }

        #[test]
        fn global_self_alignment_is_perfect(q in dna()) {
            let r = align_global(&q, &q, &ScoringScheme::default());
            prop_assert_eq!(r.score, q.len() as i32);
            prop_assert_eq!(r.matches(), q.len());
        }

        #[test]
        fn local_score_nonnegative(q in dna(), t in dna()) {
            let r = align_local(&q, &t, &ScoringScheme::default());
            prop_assert!(r.score >= 0);
        }

        #[test]
        fn local_rows_are_substrings(q in dna(), t in dna()) {
            let r = align_local(&q, &t, &ScoringScheme::default());
            let rq: Vec<u8> = r.aligned_query.iter().copied().filter(|&c| c != b'-').collect();
            let rt: Vec<u8> = r.aligned_target.iter().copied().filter(|&c| c != b'-').collect();
            prop_assert!(rq.is_empty() || q.windows(rq.len()).any(|w| w == rq.as_slice()));
            prop_assert!(rt.is_empty() || t.windows(rt.len()).any(|w| w == rt.as_slice()));
        }

        #[test]
        fn alignment_is_deterministic(q in dna(), t in dna()) {
            let s = ScoringScheme::default();
            prop_assert_eq!(align_global(&q, &t, &s), align_global(&q, &t, &s));
            prop_assert_eq!(align_local(&q, &t, &s), align_local(&q, &t, &s));
        }

        #[test]
        fn msa_rows_rectangular(seqs in proptest::collection::vec(dna(), 1..6)) {
            let refs: Vec<&[u8]> = seqs.iter().map(|s| s.as_slice()).collect();
            let rows = build_msa(&refs, &ScoringScheme::default()).unwrap();
            prop_assert_eq!(rows.len(), seqs.len());
            for w in rows.windows(2) {
                prop_assert_eq!(w[0].len(), w[1].len());
            }
        }
    }
}
