//! Length-checked kernels over raw descriptor components.
//!
//! The typed descriptors in [`crate::descriptors`] fix their length at compile time,
//! these functions are for callers that only know the length at run time.

pub mod dense;
pub mod hamming;
