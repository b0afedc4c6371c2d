//! Epsilon-neighborhood queries over an observation matrix.
//!
//! Two strategies answer the same "neighbors of observation i within eps"
//! question: [`PrecomputedNeighborhood`] materializes the full adjacency once
//! (O(n^2) space, cheap repeated queries) and [`MemorySavingNeighborhood`]
//! rescans the matrix per query (no storage beyond the caller's buffer).
//! The strategies must return identical neighbor sets for identical inputs;
//! the choice is a memory/compute trade-off only.

use ndarray::{ArrayView1, ArrayView2};
use num_traits::Float;
use rayon::prelude::*;

/// Squared Euclidean distance between two observation rows, in f64.
pub(crate) fn sq_dist<A>(a: ArrayView1<'_, A>, b: ArrayView1<'_, A>) -> f64
where
    A: Float + Into<f64>,
{
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x.into() - y.into();
            d * d
        })
        .sum()
}

/// Uniform "neighbors of observation i within eps" query.
///
/// Neighbor lists always include `i` itself (distance 0 qualifies, the
/// threshold is inclusive) and come back in ascending index order. `out` is
/// a caller-owned buffer so on-demand strategies allocate nothing per query.
pub trait NeighborhoodQuery: Sync {
    /// Number of observations covered by the query.
    fn len(&self) -> usize;

    /// Whether the query covers no observations.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collect the indices within eps of observation `i` into `out`.
    fn neighbors_of(&self, i: usize, out: &mut Vec<usize>);
}

/// Adjacency materialized once in CSR form.
pub struct PrecomputedNeighborhood {
    offsets: Vec<usize>,
    indices: Vec<usize>,
}

impl PrecomputedNeighborhood {
    /// Build the adjacency for all observations, one row per rayon task.
    pub fn build<A>(data: ArrayView2<'_, A>, eps: f64) -> Self
    where
        A: Float + Into<f64> + Send + Sync,
    {
        let n = data.nrows();
        let eps_sq = eps * eps;
        let rows: Vec<Vec<usize>> = (0..n)
            .into_par_iter()
            .map(|i| {
                (0..n)
                    .filter(|&j| sq_dist(data.row(i), data.row(j)) <= eps_sq)
                    .collect()
            })
            .collect();

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        let mut indices = Vec::new();
        for row in &rows {
            indices.extend_from_slice(row);
            offsets.push(indices.len());
        }
        Self { offsets, indices }
    }
}

impl NeighborhoodQuery for PrecomputedNeighborhood {
    fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    fn neighbors_of(&self, i: usize, out: &mut Vec<usize>) {
        out.clear();
        out.extend_from_slice(&self.indices[self.offsets[i]..self.offsets[i + 1]]);
    }
}

/// Distances recomputed on every query.
pub struct MemorySavingNeighborhood<'a, A> {
    data: ArrayView2<'a, A>,
    eps_sq: f64,
}

impl<'a, A> MemorySavingNeighborhood<'a, A>
where
    A: Float + Into<f64>,
{
    /// Wrap `data` for on-demand neighborhood scans at radius `eps`.
    pub fn new(data: ArrayView2<'a, A>, eps: f64) -> Self {
        Self {
            data,
            eps_sq: eps * eps,
        }
    }
}

impl<A> NeighborhoodQuery for MemorySavingNeighborhood<'_, A>
where
    A: Float + Into<f64> + Sync,
{
    fn len(&self) -> usize {
        self.data.nrows()
    }

    fn neighbors_of(&self, i: usize, out: &mut Vec<usize>) {
        out.clear();
        let query = self.data.row(i);
        for j in 0..self.data.nrows() {
            if sq_dist(query, self.data.row(j)) <= self.eps_sq {
                out.push(j);
            }
        }
    }
}
