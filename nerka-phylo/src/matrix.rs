//! Symmetric distance matrix with condensed upper-triangle storage.

use nerka_core::Summarizable;

/// An `n x n` symmetric matrix storing only the strict upper triangle,
/// `n * (n - 1) / 2` values. The diagonal is implicitly zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Build a matrix by evaluating `f(i, j)` for every pair `i < j`.
    pub fn from_fn<F: FnMut(usize, usize) -> f64>(n: usize, mut f: F) -> Self {
        let mut data = Vec::with_capacity(n * (n.saturating_sub(1)) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                data.push(f(i, j));
            }
        }
        Self { n, data }
    }

    /// Wrap an already-computed condensed triangle.
    pub(crate) fn from_condensed(n: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), n * n.saturating_sub(1) / 2);
        Self { n, data }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.n
    }

    /// Distance between `i` and `j`. Symmetric; zero on the diagonal.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index out of range");
        if i == j {
            return 0.0;
        }
        let (a, b) = if i < j { (i, j) } else { (j, i) };
        self.data[a * self.n - a * (a + 1) / 2 + (b - a - 1)]
    }
}

impl Summarizable for DistanceMatrix {
    fn summary(&self) -> String {
        let max = self.data.iter().copied().fold(0.0f64, f64::max);
        format!("{}x{} distance matrix, max {:.4}", self.n, self.n, max)
    }
}
