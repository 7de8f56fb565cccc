//! Radial distribution function estimates
//!
//! The sampled estimate comes from a pair-distance histogram normalized by the
//! pair count an ideal gas at the same density would place in each annulus.
//! The dilute-limit curve exp(−βU(r)) is an independent closed-form reference.

use crate::error::Result;
use crate::lj_pot::PairPotential;
use std::f64::consts::PI;

/// g(r) sampled at bin centres, ordered by increasing r
#[derive(Debug, Clone, PartialEq)]
pub struct RadialDistribution {
    pub r: Vec<f64>,
    pub g: Vec<f64>,
}

impl RadialDistribution {
    pub fn len(&self) -> usize {
        self.g.len()
    }

    pub fn is_empty(&self) -> bool {
        self.g.is_empty()
    }

    /// (r_center, g(r)) pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.r.iter().copied().zip(self.g.iter().copied())
    }

    /// Bin with the largest g(r)
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.points()
            .filter(|(_, g)| g.is_finite())
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Mean of g over bins whose centre lies in [r_min, r_max)
    pub fn mean_over(&self, r_min: f64, r_max: f64) -> Option<f64> {
        let selected: Vec<f64> = self
            .points()
            .filter(|&(r, _)| r >= r_min && r < r_max)
            .map(|(_, g)| g)
            .collect();
        if selected.is_empty() {
            None
        } else {
            Some(selected.iter().sum::<f64>() / selected.len() as f64)
        }
    }
}

/// Convert histogram counts into g(r)
///
/// For bin i spanning [i·dr, (i+1)·dr) the ideal pair count is
/// π(r_upper² − r_lower²)·ρ and g_i = counts_i / (n_configs · N · ideal).
/// Bins with a vanishing denominator report g = 0.
pub fn normalize(
    counts: &[u64],
    bin_width: f64,
    density: f64,
    n_configs: u64,
    n_particles: usize,
) -> RadialDistribution {
    let mut r = Vec::with_capacity(counts.len());
    let mut g = Vec::with_capacity(counts.len());

    for (i, &count) in counts.iter().enumerate() {
        let r_lower = i as f64 * bin_width;
        let r_upper = (i + 1) as f64 * bin_width;
        let shell_area = PI * (r_upper * r_upper - r_lower * r_lower);
        let ideal_pairs = shell_area * density;
        let denominator = n_configs as f64 * n_particles as f64 * ideal_pairs;

        r.push(0.5 * (r_lower + r_upper));
        g.push(if denominator > 0.0 {
            count as f64 / denominator
        } else {
            0.0
        });
    }

    RadialDistribution { r, g }
}

/// Low-density approximation g(r) ≈ exp(−βU(r)) on an inclusive linear grid
///
/// Every grid point must be a positive separation; a grid touching r = 0
/// fails with `ZeroSeparation`.
pub fn dilute_limit<P: PairPotential + ?Sized>(
    potential: &P,
    beta: f64,
    r_min: f64,
    r_max: f64,
    n_points: usize,
) -> Result<Vec<(f64, f64)>> {
    linspace(r_min, r_max, n_points)
        .map(|r| Ok((r, (-beta * potential.try_energy(r)?).exp())))
        .collect()
}

fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |k| start + step * k as f64)
}
