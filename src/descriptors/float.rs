use std::{fmt, str::FromStr};

use nalgebra::DMatrix;

use crate::{
    algorithms::dense,
    descriptors::{text, MetricDescriptor},
    error::{DescriptorError, Result},
};

/// Real valued descriptor of `L` single precision components (SURF, SIFT and friends),
/// compared with the Euclidean distance.
///
/// Components are expected to be finite. Parsing and `TryFrom<&[f32]>` refuse
/// `NaN` and infinities, since they make the distance meaningless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatDescriptor<const L: usize>(pub [f32; L]);

impl<const L: usize> FloatDescriptor<L> {
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.0.iter()
    }
}

impl<const L: usize> Default for FloatDescriptor<L> {
    fn default() -> Self {
        Self([0.0; L])
    }
}

impl<const L: usize> From<[f32; L]> for FloatDescriptor<L> {
    fn from(components: [f32; L]) -> Self {
        Self(components)
    }
}

impl<const L: usize> TryFrom<&[f32]> for FloatDescriptor<L> {
    type Error = DescriptorError;

    fn try_from(components: &[f32]) -> Result<Self> {
        let components = <[f32; L]>::try_from(components).map_err(|_| {
            DescriptorError::LengthMismatch {
                expected: L,
                found: components.len(),
            }
        })?;

        match components.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(DescriptorError::NonFinite { index }),
            None => Ok(Self(components)),
        }
    }
}

fn finite(value: &f32) -> std::result::Result<(), &'static str> {
    if value.is_finite() {
        Ok(())
    } else {
        Err("component is not finite")
    }
}

impl<const L: usize> AsRef<[f32]> for FloatDescriptor<L> {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

impl<const L: usize> MetricDescriptor for FloatDescriptor<L> {
    const DIMENSION: usize = L;

    fn distance(&self, other: &Self) -> f64 {
        dense::l2_distance_unchecked(&self.0, &other.0)
    }

    fn mean<'a, I>(descriptors: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        let components = dense::mean(descriptors.into_iter().map(Self::as_slice))?;
        Self::try_from(components.as_slice())
    }

    fn serialize(&self) -> String {
        text::write_tokens(&self.0)
    }

    fn deserialize(line: &str) -> Result<Self> {
        text::read_tokens_checked(line, finite).map(Self)
    }

    fn to_matrix(descriptors: &[Self]) -> Result<DMatrix<f32>> {
        dense::stack_rows(descriptors.iter().map(Self::as_slice), L)
    }
}

impl<const L: usize> fmt::Display for FloatDescriptor<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl<const L: usize> FromStr for FloatDescriptor<L> {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::deserialize(s)
    }
}
