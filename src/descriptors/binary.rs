use std::{fmt, str::FromStr};

use bitarray::BitArray;
use nalgebra::DMatrix;

use crate::{
    algorithms::hamming,
    descriptors::{text, MetricDescriptor},
    error::{DescriptorError, Result},
};

/// Binary descriptor of `N` bytes (`8 * N` bit tests), as produced by BRIEF and ORB,
/// compared with the Hamming distance.
///
/// ### CAUTION
/// Bits are read most significant first within each byte, which is the order
/// used when the descriptor is unpacked into a matrix row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryDescriptor<const N: usize>(pub [u8; N]);

impl<const N: usize> BinaryDescriptor<N> {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bits set in the descriptor.
    pub fn count_ones(&self) -> u32 {
        self.0.iter().map(|b| b.count_ones()).sum()
    }
}

impl<const N: usize> Default for BinaryDescriptor<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> From<[u8; N]> for BinaryDescriptor<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> TryFrom<&[u8]> for BinaryDescriptor<N> {
    type Error = DescriptorError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        <[u8; N]>::try_from(bytes)
            .map(Self)
            .map_err(|_| DescriptorError::LengthMismatch {
                expected: N,
                found: bytes.len(),
            })
    }
}

impl<const N: usize> MetricDescriptor for BinaryDescriptor<N> {
    const DIMENSION: usize = N * u8::BITS as usize;

    fn distance(&self, other: &Self) -> f64 {
        BitArray::new(self.0).distance(&BitArray::new(other.0)) as f64
    }

    fn mean<'a, I>(descriptors: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        let bytes = hamming::majority(descriptors.into_iter().map(Self::as_bytes))?;
        Self::try_from(bytes.as_slice())
    }

    fn serialize(&self) -> String {
        text::write_tokens(&self.0)
    }

    fn deserialize(line: &str) -> Result<Self> {
        text::read_tokens(line).map(Self)
    }

    fn to_matrix(descriptors: &[Self]) -> Result<DMatrix<f32>> {
        hamming::unpack_rows(descriptors.iter().map(Self::as_bytes), N)
    }
}

impl<const N: usize> fmt::Display for BinaryDescriptor<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl<const N: usize> FromStr for BinaryDescriptor<N> {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::deserialize(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_hamming() {
        let a = BinaryDescriptor([0xff, 0x00, 0x0f]);
        let b = BinaryDescriptor([0x00, 0x00, 0xff]);
        assert_eq!(a.distance(&b), 12.0);
        assert_eq!(b.distance(&a), 12.0);
        assert_eq!(a.distance(&a), 0.0);
        assert_eq!(
            a.distance(&b) as u32,
            hamming::distance(a.as_bytes(), b.as_bytes()).unwrap()
        );
    }

    #[test]
    fn mean_is_majority_vote() {
        let set = [
            BinaryDescriptor([0b1110_0000u8]),
            BinaryDescriptor([0b1100_0001]),
            BinaryDescriptor([0b1000_0011]),
        ];
        assert_eq!(
            BinaryDescriptor::mean(&set),
            Ok(BinaryDescriptor([0b1100_0001]))
        );
        assert_eq!(
            BinaryDescriptor::<4>::mean(&[]),
            Err(DescriptorError::EmptyInput)
        );
    }

    #[test]
    fn text_uses_decimal_bytes() {
        let d = BinaryDescriptor([0, 17, 255]);
        assert_eq!(d.serialize(), "0 17 255");
        assert_eq!("0 17 255".parse::<BinaryDescriptor<3>>(), Ok(d));
        assert!(matches!(
            BinaryDescriptor::<3>::deserialize("0 17 256"),
            Err(DescriptorError::InvalidToken { position: 2, .. })
        ));
    }

    #[test]
    fn matrix_unpacks_bits() {
        let set = [BinaryDescriptor([0x80u8, 0x01]), BinaryDescriptor([0xff, 0x00])];
        let matrix = BinaryDescriptor::<2>::to_matrix(&set).unwrap();
        assert_eq!(matrix.shape(), (2, BinaryDescriptor::<2>::DIMENSION));
        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(0, 15)], 1.0);
        assert_eq!(matrix.row(0).sum(), 2.0);
        assert_eq!(matrix.row(1).sum(), 8.0);

        for (d, row) in set.iter().zip(matrix.row_iter()) {
            assert_eq!(row.sum() as u32, d.count_ones());
        }
    }
}
