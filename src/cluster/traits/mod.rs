//! Clustering algorithm traits.

pub mod dbscan;
