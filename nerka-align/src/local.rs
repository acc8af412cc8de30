//! Smith-Waterman local alignment.

use crate::scoring::ScoringScheme;
use crate::types::AlignmentResult;

/// Align the best-scoring pair of substrings.
///
/// Cells are clamped at zero and the traceback starts from the highest cell,
/// stopping at the first zero. When several cells share the maximum the one
/// encountered first in row-major order wins, which keeps the output
/// deterministic. If nothing scores above zero (e.g. disjoint alphabets or
/// an empty input) the result is an empty alignment with score 0.
pub fn align_local(query: &[u8], target: &[u8], scoring: &ScoringScheme) -> AlignmentResult {
    let m = query.len();
    let n = target.len();
    let cols = n + 1;
    let idx = |i: usize, j: usize| i * cols + j;

    let mut score = vec![0i32; (m + 1) * cols];
    // 0 = stop, 1 = diag, 2 = up, 3 = left
    let mut ptr = vec![0u8; (m + 1) * cols];

    let mut best = 0i32;
    let mut best_pos = (0usize, 0usize);

    for i in 1..=m {
        for j in 1..=n {
            let diag = score[idx(i - 1, j - 1)] + scoring.score_pair(query[i - 1], target[j - 1]);
            let up = score[idx(i - 1, j)] + scoring.gap;
            let left = score[idx(i, j - 1)] + scoring.gap;
            let val = diag.max(up).max(left).max(0);
            score[idx(i, j)] = val;
            ptr[idx(i, j)] = if val == 0 {
                0
            } else if val == diag {
                1
            } else if val == up {
                2
            } else {
                3
            };
            if val > best {
                best = val;
                best_pos = (i, j);
            }
        }
    }

    let mut aligned_query = Vec::new();
    let mut aligned_target = Vec::new();
    let (mut i, mut j) = best_pos;
    while i > 0 && j > 0 && score[idx(i, j)] > 0 {
        match ptr[idx(i, j)] {
            1 => {
                aligned_query.push(query[i - 1]);
                aligned_target.push(target[j - 1]);
                i -= 1;
                j -= 1;
            }
            2 => {
                aligned_query.push(query[i - 1]);
                aligned_target.push(b'-');
                i -= 1;
            }
            3 => {
                aligned_query.push(b'-');
                aligned_target.push(target[j - 1]);
                j -= 1;
            }
            _ => break,
        }
    }
    aligned_query.reverse();
    aligned_target.reverse();

    AlignmentResult {
        score: best,
        aligned_query,
        aligned_target,
    }
}
