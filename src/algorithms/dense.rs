use nalgebra::DMatrix;
use tracing::{debug, trace};

use crate::error::{DescriptorError, Result};

/// Euclidean (L2) distance between two float descriptors.
///
/// Components are widened to `f64` before subtracting, so the result is zero
/// only when every pair of components is equal.
pub fn l2_distance(a: &[f32], b: &[f32]) -> Result<f64> {
    if a.len() != b.len() {
        debug!(
            expected = a.len(),
            found = b.len(),
            "rejecting distance between descriptors of different length"
        );
        return Err(DescriptorError::LengthMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }

    Ok(l2_distance_unchecked(a, b))
}

pub(crate) fn l2_distance_unchecked(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    a.iter()
        .zip(b)
        .map(|(&x, &y)| {
            let d = x as f64 - y as f64;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Component-wise arithmetic mean (centroid) of a set of descriptors.
///
/// The first row fixes the expected length. An empty set is an error rather
/// than a zero vector, which would be indistinguishable from a real descriptor.
pub fn mean<'a, I>(rows: I) -> Result<Vec<f32>>
where
    I: IntoIterator<Item = &'a [f32]>,
{
    let mut rows = rows.into_iter();
    let first = rows.next().ok_or_else(|| {
        debug!("rejecting mean of an empty descriptor set");
        DescriptorError::EmptyInput
    })?;

    // accumulate in f64 so large sets of f32 components don't drift
    let mut sums: Vec<f64> = first.iter().map(|&v| v as f64).collect();
    let mut count = 1usize;

    for (index, row) in rows.enumerate() {
        if row.len() != sums.len() {
            debug!(
                index = index + 1,
                expected = sums.len(),
                found = row.len(),
                "rejecting mean over descriptors of different length"
            );
            return Err(DescriptorError::InconsistentSet {
                index: index + 1,
                expected: sums.len(),
                found: row.len(),
            });
        }

        for (sum, &v) in sums.iter_mut().zip(row) {
            *sum += v as f64;
        }
        count += 1;
    }

    let n = count as f64;
    Ok(sums.into_iter().map(|sum| (sum / n) as f32).collect())
}

/// Copy a batch of descriptors into a dense `N x dimension` matrix, one row per
/// descriptor in input order. An empty batch gives a matrix with zero rows.
pub fn stack_rows<'a, I>(rows: I, dimension: usize) -> Result<DMatrix<f32>>
where
    I: IntoIterator<Item = &'a [f32]>,
{
    let mut data = Vec::new();
    let mut nrows = 0;

    for (index, row) in rows.into_iter().enumerate() {
        if row.len() != dimension {
            debug!(
                index,
                expected = dimension,
                found = row.len(),
                "rejecting matrix row of wrong length"
            );
            return Err(DescriptorError::InconsistentSet {
                index,
                expected: dimension,
                found: row.len(),
            });
        }
        data.extend_from_slice(row);
        nrows += 1;
    }

    trace!(nrows, ncols = dimension, "stacked float descriptors");
    Ok(DMatrix::from_row_slice(nrows, dimension, &data))
}
