//! Implementations for `space`, so descriptors can be searched with
//! [`space::LinearKnn`] or any other `space` based index.

use bitarray::BitArray;
use space::Metric;

use crate::descriptors::{BinaryDescriptor, FloatDescriptor, MetricDescriptor};

/// Euclidean distance between float descriptors.
///
/// `space` wants an unsigned, totally ordered unit, so the distance is
/// reported as the bit pattern of a non-negative `f32`, which sorts the
/// same way as the float itself for finite descriptors.
///
/// The `f64` distance is narrowed to `f32` first. Candidates whose distances
/// differ by less than one `f32` ulp get the same unit and tie in a kNN
/// search; use [`MetricDescriptor::distance`] when full precision matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Euclidean;

impl<const L: usize> Metric<FloatDescriptor<L>> for Euclidean {
    type Unit = u32;

    fn distance(&self, a: &FloatDescriptor<L>, b: &FloatDescriptor<L>) -> Self::Unit {
        (a.distance(b) as f32).to_bits()
    }
}

/// Hamming distance between binary descriptors.
#[derive(Debug, Default, Clone, Copy)]
pub struct Hamming;

impl<const N: usize> Metric<BinaryDescriptor<N>> for Hamming {
    type Unit = u32;

    fn distance(&self, a: &BinaryDescriptor<N>, b: &BinaryDescriptor<N>) -> Self::Unit {
        BitArray::new(a.0).distance(&BitArray::new(b.0))
    }
}
