//! Center-star multiple sequence alignment.
//!
//! The center sequence is the one with the highest total pairwise global
//! alignment score against all others (lowest index on ties). Every other
//! sequence is then aligned against the growing center row; gap columns the
//! new alignment introduces are replayed into the rows already finalized,
//! so all rows keep equal length throughout.

use nerka_core::{NerkaError, Result};

use crate::global::{global_steps, Step};
use crate::scoring::ScoringScheme;

/// Align `seqs` into a rectangular block of gapped rows, one per input, in
/// input order.
///
/// A single sequence is returned unchanged. Where a column is covered by
/// several merges the most recently merged sequence decides its content.
///
/// # Errors
///
/// Returns an error if `seqs` is empty.
pub fn build_msa(seqs: &[&[u8]], scoring: &ScoringScheme) -> Result<Vec<Vec<u8>>> {
    if seqs.is_empty() {
        return Err(NerkaError::InvalidInput(
            "multiple alignment requires at least one sequence".into(),
        ));
    }
    let k = seqs.len();
    if k == 1 {
        return Ok(vec![seqs[0].to_vec()]);
    }

    let center = pick_center(seqs, scoring);

    // Rows indexed by input position, filled as each sequence is merged.
    let mut rows: Vec<Option<Vec<u8>>> = vec![None; k];
    let mut center_row: Vec<u8> = seqs[center].to_vec();

    for i in 0..k {
        if i == center {
            continue;
        }
        let (steps, _) = global_steps(&center_row, seqs[i], scoring);

        // For each output column, record which column of the previous center
        // row it consumes; `None` marks a freshly inserted gap column.
        let mut source: Vec<Option<usize>> = Vec::with_capacity(steps.len());
        let mut new_center = Vec::with_capacity(steps.len());
        let mut new_row = Vec::with_capacity(steps.len());
        let (mut ci, mut si) = (0usize, 0usize);
        for step in steps {
            match step {
                Step::Diag => {
                    new_center.push(center_row[ci]);
                    new_row.push(seqs[i][si]);
                    source.push(Some(ci));
                    ci += 1;
                    si += 1;
                }
                Step::Up => {
                    new_center.push(center_row[ci]);
                    new_row.push(b'-');
                    source.push(Some(ci));
                    ci += 1;
                }
                Step::Left => {
                    new_center.push(b'-');
                    new_row.push(seqs[i][si]);
                    source.push(None);
                    si += 1;
                }
            }
        }

        for row in rows.iter_mut().flatten() {
            let expanded: Vec<u8> = source
                .iter()
                .map(|col| match col {
                    Some(c) => row[*c],
                    None => b'-',
                })
                .collect();
            *row = expanded;
        }

        center_row = new_center;
        rows[i] = Some(new_row);
    }
    rows[center] = Some(center_row);

    Ok(rows.into_iter().flatten().collect())
}

/// Index of the sequence with the highest sum of pairwise global scores.
fn pick_center(seqs: &[&[u8]], scoring: &ScoringScheme) -> usize {
    let k = seqs.len();

    #[cfg(feature = "parallel")]
    let upper: Vec<Vec<i32>> = {
        use rayon::prelude::*;
        (0..k)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..k)
                    .map(|j| global_steps(seqs[i], seqs[j], scoring).1)
                    .collect()
            })
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let upper: Vec<Vec<i32>> = (0..k)
        .map(|i| {
            ((i + 1)..k)
                .map(|j| global_steps(seqs[i], seqs[j], scoring).1)
                .collect()
        })
        .collect();

    let mut sums = vec![0i64; k];
    for i in 0..k {
        for (off, &s) in upper[i].iter().enumerate() {
            let j = i + 1 + off;
            sums[i] += s as i64;
            sums[j] += s as i64;
        }
    }

    let mut best = 0;
    for i in 1..k {
        if sums[i] > sums[best] {
            best = i;
        }
    }
    best
}
