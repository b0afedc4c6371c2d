//! clustr - Density-Based Clustering
//!
//! clustr provides weighted DBSCAN clustering over in-memory observation
//! matrices, with a selectable-output result contract so large-scale callers
//! materialize only the artifacts they need.
//!
//! # Architecture
//!
//! - [`cluster::traits`] - algorithm traits plus option and result types
//! - [`cluster::impl_generic`] - implementations, generic over the
//!   epsilon-neighborhood query strategy (precomputed adjacency or
//!   on-demand rescan)
//! - [`cluster::CpuEngine`] - the CPU entry point implementing the traits
//!
//! Adjacency construction and per-observation density evaluation are
//! parallelized with rayon. Label propagation is sequential: observations
//! are scanned in ascending index order, so cluster ids and border-point
//! ownership are deterministic for a given observation order.
//!
//! # Example
//!
//! ```
//! use clustr::cluster::{CpuEngine, DbscanAlgorithms, DbscanOptions};
//! use ndarray::array;
//!
//! let data = array![[0.0], [2.0], [3.0], [4.0], [6.0], [8.0], [10.0]];
//! let options = DbscanOptions {
//!     eps: 1.0,
//!     min_samples: 1.0,
//!     ..Default::default()
//! };
//!
//! let engine = CpuEngine::new();
//! let result = engine.dbscan(data.view(), None, &options).unwrap();
//!
//! // Adjacent observations merge; isolated ones form singleton clusters.
//! assert_eq!(result.labels().unwrap().to_vec(), vec![0, 1, 1, 1, 2, 3, 4]);
//! assert_eq!(result.n_clusters(), 5);
//! ```

pub mod cluster;
pub mod error;
