use nalgebra::DMatrix;
use tracing::{debug, trace};

use crate::error::{DescriptorError, Result};

const BITS: usize = u8::BITS as usize;

/// Number of differing bits between two binary descriptors.
pub fn distance(a: &[u8], b: &[u8]) -> Result<u32> {
    if a.len() != b.len() {
        debug!(
            expected = a.len(),
            found = b.len(),
            "rejecting hamming distance between descriptors of different length"
        );
        return Err(DescriptorError::LengthMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }

    Ok(a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum())
}

/// Bitwise majority vote over a set of binary descriptors.
///
/// A bit is set in the result when at least half (rounded up) of the inputs
/// have it set, so ties on an even sized set resolve to `1`.
pub fn majority<'a, I>(rows: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut rows = rows.into_iter();
    let first = rows.next().ok_or_else(|| {
        debug!("rejecting majority vote over an empty descriptor set");
        DescriptorError::EmptyInput
    })?;

    let bytes = first.len();
    let mut counters = vec![0usize; bytes * BITS];
    let mut count = 0usize;

    for (index, row) in std::iter::once(first).chain(rows).enumerate() {
        if row.len() != bytes {
            debug!(
                index,
                expected = bytes,
                found = row.len(),
                "rejecting majority vote over descriptors of different length"
            );
            return Err(DescriptorError::InconsistentSet {
                index,
                expected: bytes,
                found: row.len(),
            });
        }

        for (i, &byte) in row.iter().enumerate() {
            for j in 0..BITS {
                if byte & (0x80u8 >> j) != 0 {
                    counters[i * BITS + j] += 1;
                }
            }
        }
        count += 1;
    }

    let threshold = count / 2 + count % 2;

    let mut result = vec![0u8; bytes];
    for (i, counter) in counters.iter().enumerate() {
        if *counter >= threshold {
            result[i / BITS] |= 0x80u8 >> (i % BITS);
        }
    }

    Ok(result)
}

/// Unpack a batch of binary descriptors into a `N x (8 * bytes)` matrix of
/// `0.0`/`1.0` values, most significant bit of each byte first.
pub fn unpack_rows<'a, I>(rows: I, bytes: usize) -> Result<DMatrix<f32>>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let ncols = bytes * BITS;
    let mut data = Vec::new();
    let mut nrows = 0;

    for (index, row) in rows.into_iter().enumerate() {
        if row.len() != bytes {
            debug!(
                index,
                expected = bytes,
                found = row.len(),
                "rejecting matrix row of wrong length"
            );
            return Err(DescriptorError::InconsistentSet {
                index,
                expected: bytes,
                found: row.len(),
            });
        }

        data.extend(
            row.iter()
                .flat_map(|&byte| (0..BITS).map(move |j| ((byte >> (BITS - 1 - j)) & 1) as f32)),
        );
        nrows += 1;
    }

    trace!(nrows, ncols, "unpacked binary descriptors");
    Ok(DMatrix::from_row_slice(nrows, ncols, &data))
}
