//! Nussinov maximum base-pairing for RNA secondary structure.
//!
//! `dp[i][j]` holds the maximum number of non-crossing pairs in the
//! subsequence `i..=j`. Each cell records the choice that produced it, and
//! an explicit work stack replays those choices into a [`PairTable`].
//!
//! Ties resolve in a fixed evaluation order (skip-i, skip-j, pair, then
//! bifurcation points left to right, each replacing only on a strictly
//! greater score), so the reconstructed structure is deterministic even
//! when several structures share the optimal pair count.

use nerka_core::{NerkaError, Result};

/// Pairing partner per position; the flat form of a secondary structure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairTable {
    pairs: Vec<Option<usize>>,
}

impl PairTable {
    /// An all-unpaired table over `n` positions.
    pub fn unpaired(n: usize) -> Self {
        Self {
            pairs: vec![None; n],
        }
    }

    /// Parse a dot-bracket string.
    ///
    /// # Errors
    ///
    /// Returns an error on unbalanced brackets or characters other than
    /// `(`, `)`, and `.`.
    pub fn from_dot_bracket(s: &str) -> Result<Self> {
        let mut pairs = vec![None; s.len()];
        let mut stack = Vec::new();
        for (i, c) in s.bytes().enumerate() {
            match c {
                b'(' => stack.push(i),
                b')' => {
                    let j = stack.pop().ok_or_else(|| {
                        NerkaError::Parse(format!("unmatched ')' at position {i}"))
                    })?;
                    pairs[i] = Some(j);
                    pairs[j] = Some(i);
                }
                b'.' => {}
                other => {
                    return Err(NerkaError::Parse(format!(
                        "unexpected character '{}' in dot-bracket string",
                        other as char
                    )))
                }
            }
        }
        if let Some(j) = stack.pop() {
            return Err(NerkaError::Parse(format!("unmatched '(' at position {j}")));
        }
        Ok(Self { pairs })
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Partner of position `i`, if paired.
    pub fn partner(&self, i: usize) -> Option<usize> {
        self.pairs[i]
    }

    /// Number of base pairs.
    pub fn pair_count(&self) -> usize {
        self.pairs.iter().flatten().count() / 2
    }

    fn set_pair(&mut self, i: usize, j: usize) {
        self.pairs[i] = Some(j);
        self.pairs[j] = Some(i);
    }

    pub fn to_dot_bracket(&self) -> String {
        self.pairs
            .iter()
            .enumerate()
            .map(|(i, p)| match p {
                Some(j) if *j > i => '(',
                Some(_) => ')',
                None => '.',
            })
            .collect()
    }
}

/// Whether two bases form a canonical or wobble pair.
///
/// The set is `{A-U, U-A, G-C, C-G, G-U, U-G}`; anything else, including
/// DNA `T` and lowercase symbols, never pairs.
fn can_pair(a: u8, b: u8) -> bool {
    matches!(
        (a, b),
        (b'A', b'U') | (b'U', b'A') | (b'G', b'C') | (b'C', b'G') | (b'G', b'U') | (b'U', b'G')
    )
}

#[derive(Debug, Clone, Copy)]
enum Choice {
    SkipI,
    SkipJ,
    Pair,
    Split(usize),
}

/// Predict a maximum-pairing secondary structure for `rna`.
///
/// `min_loop` is the minimum number of unpaired bases strictly between the
/// two ends of any pair; a value large enough to forbid all pairs yields an
/// all-dot string. Empty input yields an empty string.
pub fn nussinov(rna: &[u8], min_loop: usize) -> String {
    nussinov_pairs(rna, min_loop).to_dot_bracket()
}

/// Same as [`nussinov`] but returning the structure as a [`PairTable`].
pub fn nussinov_pairs(rna: &[u8], min_loop: usize) -> PairTable {
    let n = rna.len();
    let mut table = PairTable::unpaired(n);
    if n < 2 {
        return table;
    }

    let idx = |i: usize, j: usize| i * n + j;
    let mut dp = vec![0u32; n * n];
    let mut bt: Vec<Option<Choice>> = vec![None; n * n];

    for k in 1..n {
        for i in 0..n - k {
            let j = i + k;

            let mut best = dp[idx(i + 1, j)];
            let mut choice = Choice::SkipI;
            if dp[idx(i, j - 1)] > best {
                best = dp[idx(i, j - 1)];
                choice = Choice::SkipJ;
            }
            if can_pair(rna[i], rna[j]) && j - i - 1 >= min_loop {
                let inside = if i + 1 <= j - 1 { dp[idx(i + 1, j - 1)] } else { 0 };
                if inside + 1 > best {
                    best = inside + 1;
                    choice = Choice::Pair;
                }
            }
            for t in (i + 1)..j {
                let split = dp[idx(i, t)] + dp[idx(t + 1, j)];
                if split > best {
                    best = split;
                    choice = Choice::Split(t);
                }
            }

            dp[idx(i, j)] = best;
            bt[idx(i, j)] = Some(choice);
        }
    }

    let mut stack = vec![(0usize, n - 1)];
    while let Some((i, j)) = stack.pop() {
        if i >= j {
            continue;
        }
        match bt[idx(i, j)] {
            Some(Choice::SkipI) => stack.push((i + 1, j)),
            Some(Choice::SkipJ) => stack.push((i, j - 1)),
            Some(Choice::Pair) => {
                table.set_pair(i, j);
                stack.push((i + 1, j - 1));
            }
            Some(Choice::Split(t)) => {
                stack.push((i, t));
                stack.push((t + 1, j));
            }
            None => {}
        }
    }

    table
}
