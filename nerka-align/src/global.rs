//! Needleman-Wunsch global alignment.
//!
//! Full dynamic-programming matrix with linear gap costs. Ties in the
//! recurrence are broken deterministically: diagonal beats up beats left,
//! so repeated runs on the same input always produce the same traceback.

use crate::scoring::ScoringScheme;
use crate::types::AlignmentResult;

/// One traceback move, in forward (left-to-right) order.
///
/// `Diag` consumes one symbol from each sequence, `Up` consumes from the
/// query only (gap in target), `Left` from the target only (gap in query).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Diag,
    Up,
    Left,
}

/// Run the global DP and return the traceback path plus the optimal score.
///
/// The path is what the multiple-alignment merge consumes; [`align_global`]
/// renders it into gapped strings.
pub(crate) fn global_steps(
    query: &[u8],
    target: &[u8],
    scoring: &ScoringScheme,
) -> (Vec<Step>, i32) {
    let m = query.len();
    let n = target.len();
    let cols = n + 1;
    let idx = |i: usize, j: usize| i * cols + j;

    let mut score = vec![0i32; (m + 1) * cols];
    // 0 = diag, 1 = up, 2 = left
    let mut ptr = vec![0u8; (m + 1) * cols];

    for i in 1..=m {
        score[idx(i, 0)] = i as i32 * scoring.gap;
        ptr[idx(i, 0)] = 1;
    }
    for j in 1..=n {
        score[idx(0, j)] = j as i32 * scoring.gap;
        ptr[idx(0, j)] = 2;
    }

    for i in 1..=m {
        for j in 1..=n {
            let diag = score[idx(i - 1, j - 1)] + scoring.score_pair(query[i - 1], target[j - 1]);
            let up = score[idx(i - 1, j)] + scoring.gap;
            let left = score[idx(i, j - 1)] + scoring.gap;
            let best = diag.max(up).max(left);
            score[idx(i, j)] = best;
            ptr[idx(i, j)] = if best == diag {
                0
            } else if best == up {
                1
            } else {
                2
            };
        }
    }

    let mut steps = Vec::with_capacity(m + n);
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        match ptr[idx(i, j)] {
            0 => {
                steps.push(Step::Diag);
                i -= 1;
                j -= 1;
            }
            1 => {
                steps.push(Step::Up);
                i -= 1;
            }
            _ => {
                steps.push(Step::Left);
                j -= 1;
            }
        }
    }
    steps.reverse();

    (steps, score[idx(m, n)])
}

/// Align two sequences end to end.
///
/// Both inputs may be empty; aligning against an empty sequence yields an
/// all-gap row and a score of `len * gap`.
pub fn align_global(query: &[u8], target: &[u8], scoring: &ScoringScheme) -> AlignmentResult {
    let (steps, score) = global_steps(query, target, scoring);

    let mut aligned_query = Vec::with_capacity(steps.len());
    let mut aligned_target = Vec::with_capacity(steps.len());
    let (mut qi, mut ti) = (0usize, 0usize);
    for step in steps {
        match step {
            Step::Diag => {
                aligned_query.push(query[qi]);
                aligned_target.push(target[ti]);
                qi += 1;
                ti += 1;
            }
            Step::Up => {
                aligned_query.push(query[qi]);
                aligned_target.push(b'-');
                qi += 1;
            }
            Step::Left => {
                aligned_query.push(b'-');
                aligned_target.push(target[ti]);
                ti += 1;
            }
        }
    }

    AlignmentResult {
        score,
        aligned_query,
        aligned_target,
    }
}
