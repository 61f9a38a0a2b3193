use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::travel_matrices::TravelMatrices;

pub const DEFAULT_SYNTHETIC_MIN_SECS: i64 = 5 * 60;
pub const DEFAULT_SYNTHETIC_MAX_SECS: i64 = 45 * 60;

/// Generates travel times uniformly in `[min_secs, max_secs]`, zero on the diagonal.
/// Used to develop and test without paying for a mapping service.
pub fn synthetic_matrices(
    num_locations: usize,
    min_secs: i64,
    max_secs: i64,
    seed: u64,
) -> TravelMatrices {
    let mut rng = SmallRng::seed_from_u64(seed);
    let (low, high) = (min_secs.min(max_secs), min_secs.max(max_secs));

    let times = (0..num_locations)
        .map(|from| {
            (0..num_locations)
                .map(|to| {
                    if from == to {
                        0
                    } else {
                        rng.random_range(low..=high)
                    }
                })
                .collect()
        })
        .collect();

    TravelMatrices::new(times)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_matrices_shape_and_range() {
        let matrices = synthetic_matrices(6, 300, 2700, 7);

        assert!(matrices.is_square());
        assert_eq!(matrices.num_locations(), 6);

        for (from, row) in matrices.times.iter().enumerate() {
            for (to, &time) in row.iter().enumerate() {
                if from == to {
                    assert_eq!(time, 0);
                } else {
                    assert!((300..=2700).contains(&time));
                }
            }
        }
    }

    #[test]
    fn test_synthetic_matrices_same_seed() {
        assert_eq!(
            synthetic_matrices(5, 300, 2700, 42),
            synthetic_matrices(5, 300, 2700, 42)
        );
    }

    #[test]
    fn test_synthetic_matrices_swapped_bounds() {
        let matrices = synthetic_matrices(3, 100, 50, 1);
        assert!(
            matrices
                .times
                .iter()
                .flatten()
                .all(|&time| time == 0 || (50..=100).contains(&time))
        );
    }
}
