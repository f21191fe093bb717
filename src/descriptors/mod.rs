//! Descriptor value types and the capability they share with whatever
//! clusters or matches them.

mod binary;
mod float;
pub mod text;

pub use binary::BinaryDescriptor;
pub use float::FloatDescriptor;

use nalgebra::DMatrix;

use crate::error::Result;

/// A fixed-length feature descriptor that can be compared, averaged,
/// persisted as a line of text and handed to matrix based matchers.
///
/// Vocabulary builders and matchers should be generic over this trait
/// so that float and binary descriptors are interchangeable.
pub trait MetricDescriptor: Sized + Clone {
    /// Number of columns a descriptor occupies in [`MetricDescriptor::to_matrix`].
    const DIMENSION: usize;

    /// Distance between two descriptors. Symmetric, and zero only for equal descriptors.
    fn distance(&self, other: &Self) -> f64;

    /// Centroid of a non-empty set of descriptors.
    fn mean<'a, I>(descriptors: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a;

    /// One line of space separated tokens, one per component.
    fn serialize(&self) -> String;

    /// Inverse of [`MetricDescriptor::serialize`].
    fn deserialize(text: &str) -> Result<Self>;

    /// Dense `N x DIMENSION` matrix with row `i` holding descriptor `i`.
    fn to_matrix(descriptors: &[Self]) -> Result<DMatrix<f32>>;
}
