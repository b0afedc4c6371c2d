//! CPU implementation of DBSCAN clustering.

use ndarray::{ArrayView1, ArrayView2};
use num_traits::Float;

use crate::cluster::impl_generic::dbscan_impl;
use crate::cluster::traits::dbscan::{DbscanAlgorithms, DbscanOptions, DbscanResult};
use crate::cluster::CpuEngine;
use crate::error::Result;

impl<A> DbscanAlgorithms<A> for CpuEngine
where
    A: Float + Into<f64> + Send + Sync,
{
    fn dbscan(
        &self,
        data: ArrayView2<'_, A>,
        weights: Option<ArrayView1<'_, A>>,
        options: &DbscanOptions,
    ) -> Result<DbscanResult<A>> {
        dbscan_impl(data, weights, options)
    }
}
