//! Generic clustering algorithm implementations.

pub mod dbscan;
pub mod neighborhood;

pub use dbscan::dbscan_impl;
