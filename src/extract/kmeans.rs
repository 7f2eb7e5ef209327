//! Fixed-iteration Lloyd's k-means over RGB samples
//!
//! The clustering always runs the configured iteration count with no
//! convergence early-exit, so per-call latency is deterministic and
//! proportional to `k * samples * iterations`. Distances are squared
//! Euclidean in RGB space; centroids are integer-rounded channel means.

use crate::color::codec::Rgb;
use crate::constants::extraction::NEUTRAL_GRAY;
use rand::Rng;
use tracing::trace;

/// Squared Euclidean distance between two colors in RGB space
fn distance_squared(a: Rgb, b: Rgb) -> u32 {
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);
    (dr * dr + dg * dg + db * db) as u32
}

/// Index of the centroid nearest to `pixel`
///
/// Ties resolve to the lowest index.
fn nearest_centroid(pixel: Rgb, centroids: &[Rgb]) -> usize {
    let mut best = 0;
    let mut best_distance = u32::MAX;
    for (index, &centroid) in centroids.iter().enumerate() {
        let distance = distance_squared(pixel, centroid);
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }
    best
}

/// Cluster samples into `k` representative colors
///
/// Initial centroids are drawn uniformly at random from the samples, with
/// replacement; an empty sample set falls back to neutral gray centroids.
/// Each round reassigns every sample to its nearest centroid and replaces
/// each centroid with the rounded mean of its cluster. A cluster that
/// receives no samples keeps its previous centroid, so the result may
/// contain duplicates — an accepted degenerate case, not an error.
///
/// Centroids are returned in their array order; no sorting by frequency,
/// luminance, or hue is applied.
pub fn cluster(samples: &[Rgb], k: usize, iterations: usize, rng: &mut impl Rng) -> Vec<Rgb> {
    if k == 0 {
        return Vec::new();
    }

    let gray = Rgb::new(NEUTRAL_GRAY[0], NEUTRAL_GRAY[1], NEUTRAL_GRAY[2]);
    let mut centroids: Vec<Rgb> = (0..k)
        .map(|_| {
            if samples.is_empty() {
                gray
            } else {
                samples[rng.gen_range(0..samples.len())]
            }
        })
        .collect();

    for round in 0..iterations {
        let mut sums = vec![[0u64; 3]; k];
        let mut counts = vec![0u64; k];

        for &pixel in samples {
            let nearest = nearest_centroid(pixel, &centroids);
            sums[nearest][0] += u64::from(pixel.r);
            sums[nearest][1] += u64::from(pixel.g);
            sums[nearest][2] += u64::from(pixel.b);
            counts[nearest] += 1;
        }

        for (index, centroid) in centroids.iter_mut().enumerate() {
            if counts[index] == 0 {
                continue;
            }
            let n = counts[index] as f64;
            *centroid = Rgb::from_float(
                sums[index][0] as f64 / n,
                sums[index][1] as f64 / n,
                sums[index][2] as f64 / n,
            );
        }

        trace!(round, "k-means round complete");
    }

    centroids
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_cluster_returns_k_centroids() {
        let samples: Vec<Rgb> = (0..200u32)
            .map(|i| Rgb::new((i % 256) as u8, (i * 7 % 256) as u8, (i * 13 % 256) as u8))
            .collect();
        let centroids = cluster(&samples, 8, 20, &mut rng());
        assert_eq!(centroids.len(), 8);
    }

    #[test]
    fn test_cluster_k_zero_is_empty() {
        let samples = vec![Rgb::new(1, 2, 3)];
        assert!(cluster(&samples, 0, 20, &mut rng()).is_empty());
    }

    #[test]
    fn test_cluster_empty_samples_yields_gray() {
        let centroids = cluster(&[], 3, 20, &mut rng());
        assert_eq!(centroids, vec![Rgb::new(128, 128, 128); 3]);
    }

    #[test]
    fn test_cluster_separates_black_and_white() {
        // Regardless of which pixels seed the centroids, two well-separated
        // clusters converge within the fixed iteration count.
        let samples = vec![
            Rgb::new(0, 0, 0),
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(255, 255, 255),
        ];
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut centroids = cluster(&samples, 2, 20, &mut rng);
            centroids.sort_by_key(|c| c.r);
            assert_eq!(
                centroids,
                vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)],
                "seed {}",
                seed
            );
        }
    }

    #[test]
    fn test_cluster_uniform_samples_all_converge() {
        let samples = vec![Rgb::new(40, 80, 120); 50];
        let centroids = cluster(&samples, 4, 20, &mut rng());
        // Every centroid either started on the single color or was pulled
        // to it; empty clusters keep that same value.
        assert_eq!(centroids, vec![Rgb::new(40, 80, 120); 4]);
    }

    #[test]
    fn test_cluster_is_deterministic_for_a_seed() {
        let samples: Vec<Rgb> = (0..500u32)
            .map(|i| Rgb::new((i % 250) as u8, (i * 3 % 250) as u8, (i * 11 % 250) as u8))
            .collect();

        let a = cluster(&samples, 6, 20, &mut StdRng::seed_from_u64(42));
        let b = cluster(&samples, 6, 20, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_stale_centroid_survives_when_cluster_is_empty() {
        // One far-away sample: after the first assignment round, exactly
        // one centroid owns it and the rest never receive samples again.
        let samples = vec![Rgb::new(10, 10, 10)];
        let centroids = cluster(&samples, 3, 20, &mut rng());
        assert_eq!(centroids.len(), 3);
        assert!(centroids.contains(&Rgb::new(10, 10, 10)));
    }

    #[test]
    fn test_nearest_centroid_tie_breaks_low_index() {
        let centroids = [Rgb::new(100, 0, 0), Rgb::new(100, 0, 0)];
        assert_eq!(nearest_centroid(Rgb::new(0, 0, 0), &centroids), 0);
    }
}
