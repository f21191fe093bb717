//! Exercises the descriptors the way a vocabulary builder would:
//! generic code that only knows about `MetricDescriptor`.

use rand::{rngs::StdRng, Rng, SeedableRng};
use slamr_descriptors::{
    descriptors::text, BinaryDescriptor, DescriptorError, FloatDescriptor, MetricDescriptor,
};

/// Index of the closest centre for every descriptor.
fn assign<D: MetricDescriptor>(descriptors: &[D], centres: &[D]) -> Vec<usize> {
    descriptors
        .iter()
        .map(|d| {
            centres
                .iter()
                .enumerate()
                .map(|(i, c)| (i, d.distance(c)))
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(i, _)| i)
                .unwrap()
        })
        .collect()
}

/// A few rounds of k-means seeded with the given centres.
fn kmeans<D: MetricDescriptor>(descriptors: &[D], mut centres: Vec<D>) -> (Vec<D>, Vec<usize>) {
    let mut labels = assign(descriptors, &centres);
    for _ in 0..10 {
        for (k, centre) in centres.iter_mut().enumerate() {
            let members = descriptors
                .iter()
                .zip(&labels)
                .filter(|(_, l)| **l == k)
                .map(|(d, _)| d);
            match D::mean(members) {
                Ok(mean) => *centre = mean,
                // an empty cluster keeps its previous centre
                Err(DescriptorError::EmptyInput) => {}
                Err(e) => panic!("unexpected error {e}"),
            }
        }
        labels = assign(descriptors, &centres);
    }
    (centres, labels)
}

fn blob(rng: &mut StdRng, centre: [f32; 4], n: usize) -> Vec<FloatDescriptor<4>> {
    (0..n)
        .map(|_| FloatDescriptor(centre.map(|c| c + rng.gen_range(-0.5..0.5))))
        .collect()
}

#[test]
fn float_descriptors_cluster_into_blobs() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut descriptors = blob(&mut rng, [0.0, 0.0, 0.0, 0.0], 20);
    descriptors.extend(blob(&mut rng, [10.0, 10.0, 0.0, 0.0], 20));

    let seeds = vec![descriptors[0], descriptors[39]];
    let (centres, labels) = kmeans(&descriptors, seeds);

    assert!(labels[..20].iter().all(|&l| l == 0));
    assert!(labels[20..].iter().all(|&l| l == 1));
    assert!(centres[0].distance(&FloatDescriptor([0.0; 4])) < 0.5);
    assert!(centres[1].distance(&FloatDescriptor([10.0, 10.0, 0.0, 0.0])) < 0.5);

    let matrix = FloatDescriptor::<4>::to_matrix(&centres).unwrap();
    assert_eq!(matrix.shape(), (2, 4));
}

#[test]
fn binary_descriptors_cluster_by_hamming() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut noisy = |base: [u8; 8]| {
        let mut bytes = base;
        // flip a single random bit
        let bit: usize = rng.gen_range(0..64);
        bytes[bit / 8] ^= 0x80u8 >> (bit % 8);
        BinaryDescriptor(bytes)
    };

    let mut descriptors: Vec<_> = (0..15).map(|_| noisy([0x00; 8])).collect();
    descriptors.extend((0..15).map(|_| noisy([0xff; 8])));

    let seeds = vec![descriptors[0], descriptors[29]];
    let (centres, labels) = kmeans(&descriptors, seeds);

    assert!(labels[..15].iter().all(|&l| l == 0));
    assert!(labels[15..].iter().all(|&l| l == 1));
    assert_eq!(centres[0], BinaryDescriptor([0x00; 8]));
    assert_eq!(centres[1], BinaryDescriptor([0xff; 8]));
}

#[test]
fn vocabulary_text_survives_a_round_trip() {
    let mut rng = StdRng::seed_from_u64(1);
    let words: Vec<FloatDescriptor<16>> = (0..32)
        .map(|_| FloatDescriptor(std::array::from_fn(|_| rng.gen_range(-1.0f32..1.0))))
        .collect();

    let stored = text::write_lines(&words);
    let loaded: Vec<FloatDescriptor<16>> = text::parse_lines(&stored).unwrap();
    assert_eq!(loaded, words);

    let truncated = format!("{stored}0.5 0.25\n");
    match text::parse_lines::<FloatDescriptor<16>>(&truncated) {
        Err(DescriptorError::Line { line, source }) => {
            assert_eq!(line, 33);
            assert_eq!(
                *source,
                DescriptorError::InsufficientTokens {
                    expected: 16,
                    found: 2
                }
            );
        }
        other => panic!("unexpected result {other:?}"),
    }
}
