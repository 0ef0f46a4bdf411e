use std::collections::HashSet;

use rand::seq::index;
use rand::Rng;
use tracing::debug;

use crate::color::{color_distance, Rgb};

/// Maximum number of assign/update rounds
pub const MAX_ITERATIONS: usize = 10;

/// Centroids moving no further than this are considered settled
pub const CONVERGENCE_DISTANCE: f64 = 1.0;

/// A k-means centroid and the number of samples assigned to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCluster {
    pub centroid: Rgb,
    pub pixel_count: usize,
}

impl ColorCluster {
    /// Share of `total` samples that landed in this cluster, as a percentage
    pub fn percentage(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.pixel_count as f64 / total as f64 * 100.0
    }
}

/// Unique colors in first-seen order
pub fn distinct_colors(pixels: &[Rgb]) -> Vec<Rgb> {
    let mut seen = HashSet::new();
    pixels
        .iter()
        .copied()
        .filter(|rgb| seen.insert(*rgb))
        .collect()
}

/// Pick up to `k` starting centroids among the distinct sample colors, without
/// replacement.
pub fn seed_centroids<R: Rng + ?Sized>(pixels: &[Rgb], k: usize, rng: &mut R) -> Vec<Rgb> {
    let candidates = distinct_colors(pixels);
    let k = k.min(candidates.len());

    index::sample(rng, candidates.len(), k)
        .into_iter()
        .map(|i| candidates[i])
        .collect()
}

/// Index of the centroid closest to `pixel`; the first one wins on ties
pub fn nearest_centroid(pixel: Rgb, centroids: &[Rgb]) -> usize {
    let mut nearest = 0;
    let mut min_distance = f64::INFINITY;

    for (i, centroid) in centroids.iter().enumerate() {
        let distance = color_distance(pixel, *centroid);
        if distance < min_distance {
            min_distance = distance;
            nearest = i;
        }
    }

    nearest
}

/// Number of samples nearest to each centroid
pub fn count_members(pixels: &[Rgb], centroids: &[Rgb]) -> Vec<usize> {
    let mut counts = vec![0usize; centroids.len()];
    for pixel in pixels {
        counts[nearest_centroid(*pixel, centroids)] += 1;
    }
    counts
}

/// One assign + update round. A centroid nobody was assigned to stays put.
pub fn update_centroids(pixels: &[Rgb], centroids: &[Rgb]) -> Vec<Rgb> {
    let mut sums = vec![[0u64; 3]; centroids.len()];
    let mut counts = vec![0u64; centroids.len()];

    for pixel in pixels {
        let i = nearest_centroid(*pixel, centroids);
        for channel in 0..3 {
            sums[i][channel] += pixel[channel] as u64;
        }
        counts[i] += 1;
    }

    centroids
        .iter()
        .zip(sums.iter().zip(&counts))
        .map(|(previous, (sum, &count))| {
            if count == 0 {
                return *previous;
            }
            let mean = |channel: usize| (sum[channel] as f64 / count as f64).round() as u8;
            [mean(0), mean(1), mean(2)]
        })
        .collect()
}

/// Cluster `pixels` into at most `k` groups.
///
/// Clusters come back in seeding order with their final member counts; a
/// cluster may end up empty.
pub fn kmeans<R: Rng + ?Sized>(pixels: &[Rgb], k: usize, rng: &mut R) -> Vec<ColorCluster> {
    let mut centroids = seed_centroids(pixels, k, rng);
    if centroids.is_empty() {
        return Vec::new();
    }

    for iteration in 0..MAX_ITERATIONS {
        let next = update_centroids(pixels, &centroids);
        let converged = centroids
            .iter()
            .zip(&next)
            .all(|(old, new)| color_distance(*old, *new) <= CONVERGENCE_DISTANCE);

        centroids = next;
        if converged {
            debug!("k-means converged after {} iterations", iteration + 1);
            break;
        }
    }

    let counts = count_members(pixels, &centroids);
    centroids
        .into_iter()
        .zip(counts)
        .map(|(centroid, pixel_count)| ColorCluster {
            centroid,
            pixel_count,
        })
        .collect()
}
