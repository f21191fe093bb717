//! Feature descriptors as pluggable metrics for bag-of-words vocabularies
//! and descriptor matching.
//!
//! Every descriptor type implements [`MetricDescriptor`], which provides the four
//! things a vocabulary builder or matcher needs from it:
//!
//! - a distance between two descriptors,
//! - the centroid of a set of descriptors,
//! - a one line text encoding for persisting vocabularies,
//! - conversion of a batch into a dense `nalgebra` matrix.
//!
//! ```
//! use slamr_descriptors::{FloatDescriptor, MetricDescriptor};
//!
//! let a = FloatDescriptor([0.0, 0.0, 0.0, 0.0]);
//! let b = FloatDescriptor([2.0, 0.0, 0.0, 0.0]);
//!
//! assert_eq!(a.distance(&b), 2.0);
//! assert_eq!(FloatDescriptor::mean([&a, &b]).unwrap(), FloatDescriptor([1.0, 0.0, 0.0, 0.0]));
//! ```

pub mod algorithms;
pub mod descriptors;
pub mod error;
pub mod metric;

pub use descriptors::{BinaryDescriptor, FloatDescriptor, MetricDescriptor};
pub use error::{DescriptorError, Result};

/// 64 dimensional SURF descriptor
pub type Surf64 = FloatDescriptor<64>;

/// 256 bit ORB descriptor
pub type Orb256 = BinaryDescriptor<{ 256 / u8::BITS as usize }>;
