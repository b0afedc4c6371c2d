//! DBSCAN clustering trait, options, and gated result contract.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use num_traits::Float;

use crate::error::{Error, Result};

/// Selects which artifacts a DBSCAN call materializes.
///
/// Options combine with `|`. Accessors on [`DbscanResult`] for artifacts
/// whose bit was not set fail with [`Error::ResultNotRequested`], so callers
/// that skip an artifact never pay for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultOptions(u8);

impl ResultOptions {
    /// No artifacts.
    pub const NONE: Self = Self(0);
    /// Per-observation cluster labels (-1 for noise).
    pub const LABELS: Self = Self(1);
    /// Per-observation core flags.
    pub const CORE_FLAGS: Self = Self(1 << 1);
    /// Rows of the core observations, in ascending index order.
    pub const CORE_OBSERVATIONS: Self = Self(1 << 2);
    /// Indices of the core observations, ascending.
    pub const CORE_SAMPLE_INDICES: Self = Self(1 << 3);
    /// All four artifacts.
    pub const ALL: Self = Self(0b1111);

    /// Whether every bit of `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for ResultOptions {
    fn default() -> Self {
        Self::LABELS
    }
}

impl std::ops::BitOr for ResultOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for ResultOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Options for DBSCAN.
#[derive(Debug, Clone)]
pub struct DbscanOptions {
    /// Neighborhood radius (inclusive; 0 keeps only coincident observations).
    pub eps: f64,
    /// Minimum weighted neighborhood density, self included, for a core
    /// observation. With unit weights this is the classic min_samples count.
    pub min_samples: f64,
    /// Recompute distances per query instead of materializing the adjacency.
    pub mem_save_mode: bool,
    /// Artifacts to materialize.
    pub result_options: ResultOptions,
}

impl Default for DbscanOptions {
    fn default() -> Self {
        Self {
            eps: 0.5,
            min_samples: 5.0,
            mem_save_mode: false,
            result_options: ResultOptions::LABELS,
        }
    }
}

/// Result of DBSCAN clustering.
///
/// Each artifact accessor succeeds only if its bit was set in
/// [`DbscanOptions::result_options`] when the result was computed; otherwise
/// it returns [`Error::ResultNotRequested`] naming the artifact.
#[derive(Debug, Clone)]
pub struct DbscanResult<A> {
    labels: Option<Array1<i64>>,
    core_flags: Option<Array1<bool>>,
    core_observations: Option<Array2<A>>,
    core_sample_indices: Option<Array1<i64>>,
    n_clusters: usize,
}

impl<A: Float> DbscanResult<A> {
    /// Materialize exactly the requested artifacts from the propagator's
    /// final state. Core rows are extracted only on request; that extraction
    /// is O(n_core * d).
    pub(crate) fn materialize(
        requested: ResultOptions,
        labels: Vec<i64>,
        core_flags: Vec<bool>,
        data: ArrayView2<'_, A>,
        n_clusters: usize,
    ) -> Self {
        let needs_indices = requested.contains(ResultOptions::CORE_OBSERVATIONS)
            || requested.contains(ResultOptions::CORE_SAMPLE_INDICES);
        let core_indices: Vec<usize> = if needs_indices {
            core_flags
                .iter()
                .enumerate()
                .filter_map(|(i, &core)| core.then_some(i))
                .collect()
        } else {
            Vec::new()
        };

        let core_observations = requested
            .contains(ResultOptions::CORE_OBSERVATIONS)
            .then(|| data.select(Axis(0), &core_indices));
        let core_sample_indices: Option<Array1<i64>> = requested
            .contains(ResultOptions::CORE_SAMPLE_INDICES)
            .then(|| core_indices.iter().map(|&i| i as i64).collect());

        Self {
            labels: requested
                .contains(ResultOptions::LABELS)
                .then(|| Array1::from_vec(labels)),
            core_flags: requested
                .contains(ResultOptions::CORE_FLAGS)
                .then(|| Array1::from_vec(core_flags)),
            core_observations,
            core_sample_indices,
            n_clusters,
        }
    }

    /// Cluster labels [n], -1 for noise.
    pub fn labels(&self) -> Result<&Array1<i64>> {
        self.labels
            .as_ref()
            .ok_or(Error::ResultNotRequested { artifact: "labels" })
    }

    /// Core flags [n].
    pub fn core_flags(&self) -> Result<&Array1<bool>> {
        self.core_flags.as_ref().ok_or(Error::ResultNotRequested {
            artifact: "core_flags",
        })
    }

    /// Core observation rows [n_core, d], in ascending index order.
    pub fn core_observations(&self) -> Result<&Array2<A>> {
        self.core_observations
            .as_ref()
            .ok_or(Error::ResultNotRequested {
                artifact: "core_observations",
            })
    }

    /// Core observation indices [n_core], ascending.
    pub fn core_sample_indices(&self) -> Result<&Array1<i64>> {
        self.core_sample_indices
            .as_ref()
            .ok_or(Error::ResultNotRequested {
                artifact: "core_sample_indices",
            })
    }

    /// Number of clusters found.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }
}

/// DBSCAN clustering algorithms.
pub trait DbscanAlgorithms<A> {
    /// Run DBSCAN on data [n, d] with optional per-observation weights [n].
    fn dbscan(
        &self,
        data: ArrayView2<'_, A>,
        weights: Option<ArrayView1<'_, A>>,
        options: &DbscanOptions,
    ) -> Result<DbscanResult<A>>;
}
