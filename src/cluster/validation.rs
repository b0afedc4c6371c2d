//! Validation helpers for clustering algorithms.

use ndarray::ArrayView1;

use crate::error::{Error, Result};

/// Validate that data [n, d] contains at least one observation.
pub fn validate_data_2d(shape: &[usize], op: &'static str) -> Result<()> {
    if shape[0] == 0 {
        return Err(Error::InvalidArgument {
            arg: "data",
            reason: format!("{op} requires at least 1 observation"),
        });
    }
    Ok(())
}

/// Validate eps (finite, non-negative; 0 keeps only coincident observations).
pub fn validate_eps(eps: f64, op: &'static str) -> Result<()> {
    if eps < 0.0 || !eps.is_finite() {
        return Err(Error::InvalidArgument {
            arg: "eps",
            reason: format!("{op} requires finite eps >= 0, got {eps}"),
        });
    }
    Ok(())
}

/// Validate the density threshold (any finite value; <= 0 makes every
/// observation core).
pub fn validate_min_samples(min_samples: f64, op: &'static str) -> Result<()> {
    if !min_samples.is_finite() {
        return Err(Error::InvalidArgument {
            arg: "min_samples",
            reason: format!("{op} requires finite min_samples, got {min_samples}"),
        });
    }
    Ok(())
}

/// Validate an optional weight vector against the observation count.
pub fn validate_weights<A>(
    weights: Option<&ArrayView1<'_, A>>,
    n: usize,
    op: &'static str,
) -> Result<()>
where
    A: Into<f64> + Copy,
{
    let Some(w) = weights else {
        return Ok(());
    };
    if w.len() != n {
        return Err(Error::InvalidArgument {
            arg: "weights",
            reason: format!(
                "{op} requires one weight per observation: got {} weights for {n} observations",
                w.len()
            ),
        });
    }
    for &wi in w.iter() {
        let wi: f64 = wi.into();
        if wi < 0.0 || !wi.is_finite() {
            return Err(Error::InvalidArgument {
                arg: "weights",
                reason: format!("{op} requires finite non-negative weights, got {wi}"),
            });
        }
    }
    Ok(())
}
