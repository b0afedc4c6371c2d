//! Generic DBSCAN clustering implementation.
//!
//! Weighted density classification over a neighborhood query strategy,
//! followed by worklist-based connectivity expansion. The expansion scans
//! observations in ascending index order and finalizes each observation on
//! first contact, so cluster ids and border ownership are deterministic for
//! a given observation order.

use std::collections::VecDeque;

use log::debug;
use ndarray::{ArrayView1, ArrayView2};
use num_traits::Float;
use rayon::prelude::*;

use crate::cluster::impl_generic::neighborhood::{
    MemorySavingNeighborhood, NeighborhoodQuery, PrecomputedNeighborhood,
};
use crate::cluster::traits::dbscan::{DbscanOptions, DbscanResult};
use crate::cluster::validation::{
    validate_data_2d, validate_eps, validate_min_samples, validate_weights,
};
use crate::error::Result;

/// Label value for observations not reachable from any core observation.
pub const NOISE: i64 = -1;

/// Generic DBSCAN clustering implementation.
pub fn dbscan_impl<A>(
    data: ArrayView2<'_, A>,
    weights: Option<ArrayView1<'_, A>>,
    options: &DbscanOptions,
) -> Result<DbscanResult<A>>
where
    A: Float + Into<f64> + Send + Sync,
{
    validate_data_2d(data.shape(), "dbscan")?;
    validate_eps(options.eps, "dbscan")?;
    validate_min_samples(options.min_samples, "dbscan")?;
    validate_weights(weights.as_ref(), data.nrows(), "dbscan")?;

    debug!(
        "dbscan: n={}, d={}, eps={}, min_samples={}, mem_save_mode={}",
        data.nrows(),
        data.ncols(),
        options.eps,
        options.min_samples,
        options.mem_save_mode
    );

    // Weights participate in density sums only; convert once.
    let weights: Option<Vec<f64>> = weights.map(|w| w.iter().map(|&x| x.into()).collect());

    if options.mem_save_mode {
        let query = MemorySavingNeighborhood::new(data, options.eps);
        cluster(data, weights.as_deref(), options, &query)
    } else {
        let query = PrecomputedNeighborhood::build(data, options.eps);
        cluster(data, weights.as_deref(), options, &query)
    }
}

/// Classify densities and propagate cluster labels over `query`.
fn cluster<A, Q>(
    data: ArrayView2<'_, A>,
    weights: Option<&[f64]>,
    options: &DbscanOptions,
    query: &Q,
) -> Result<DbscanResult<A>>
where
    A: Float + Into<f64> + Send + Sync,
    Q: NeighborhoodQuery,
{
    let n = data.nrows();

    // 1. Weighted neighborhood densities, one rayon task per observation.
    //    Every neighborhood includes the observation itself.
    let densities: Vec<f64> = (0..n)
        .into_par_iter()
        .map_init(Vec::new, |buf, i| {
            query.neighbors_of(i, buf);
            match weights {
                Some(w) => buf.iter().map(|&j| w[j]).sum(),
                None => buf.len() as f64,
            }
        })
        .collect();

    // 2. Core classification: weighted density >= min_samples.
    let is_core: Vec<bool> = densities
        .iter()
        .map(|&density| density >= options.min_samples)
        .collect();

    // 3. Connectivity expansion. Only core observations enter the worklist;
    //    non-core observations touched by an expansion are finalized as
    //    border members of that cluster and never expand further. First
    //    assignment wins: a finalized observation is never relabeled.
    let mut labels = vec![NOISE; n];
    let mut assigned = vec![false; n];
    let mut worklist = VecDeque::new();
    let mut neighbors = Vec::new();
    let mut n_clusters = 0usize;

    for seed in 0..n {
        if assigned[seed] || !is_core[seed] {
            continue;
        }
        let cluster_id = n_clusters as i64;
        n_clusters += 1;

        assigned[seed] = true;
        labels[seed] = cluster_id;
        worklist.push_back(seed);

        while let Some(point) = worklist.pop_front() {
            query.neighbors_of(point, &mut neighbors);
            for &next in &neighbors {
                if assigned[next] {
                    continue;
                }
                assigned[next] = true;
                labels[next] = cluster_id;
                if is_core[next] {
                    worklist.push_back(next);
                }
            }
        }
    }

    let n_core = is_core.iter().filter(|&&core| core).count();
    let n_noise = labels.iter().filter(|&&label| label == NOISE).count();
    debug!("dbscan: {n_clusters} clusters, {n_core} core observations, {n_noise} noise");

    Ok(DbscanResult::materialize(
        options.result_options,
        labels,
        is_core,
        data,
        n_clusters,
    ))
}
