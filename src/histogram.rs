// file: `src/histogram.rs`
use crate::error::{Result, SimulationError};
use crate::pbc::SimulationBox;
use crate::rdf::{self, RadialDistribution};
use itertools::Itertools;
use nalgebra::Vector2;

/// Pair-distance histogram over [0, r_max) accumulated across sampled configurations
#[derive(Debug, Clone, PartialEq)]
pub struct PairHistogram {
    /// Bin width dr
    pub bin_width: f64,
    /// Upper edge of the binned range (L/2 for the Monte Carlo run)
    pub r_max: f64,
    /// Bin counts, additive only until `reset`
    pub counts: Vec<u64>,
    /// Number of configurations (or references) accumulated
    pub n_configs: u64,
}

impl PairHistogram {
    /// floor(r_max / dr) bins of width dr
    pub fn new(r_max: f64, bin_width: f64) -> Result<Self> {
        if !bin_width.is_finite() || bin_width <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "bin width must be positive and finite, got {bin_width}"
            )));
        }
        if !r_max.is_finite() || r_max <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "histogram range must be positive and finite, got {r_max}"
            )));
        }
        let n_bins = (r_max / bin_width).floor() as usize;
        if n_bins == 0 {
            return Err(SimulationError::InvalidParameter(format!(
                "bin width {bin_width} leaves no bins below {r_max}"
            )));
        }
        Ok(Self {
            bin_width,
            r_max,
            counts: vec![0; n_bins],
            n_configs: 0,
        })
    }

    /// `n_bins` equal bins spanning [0, r_max)
    pub fn with_bins(r_max: f64, n_bins: usize) -> Result<Self> {
        if n_bins == 0 {
            return Err(SimulationError::InvalidParameter(
                "histogram needs at least one bin".to_string(),
            ));
        }
        if !r_max.is_finite() || r_max <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "histogram range must be positive and finite, got {r_max}"
            )));
        }
        Ok(Self {
            bin_width: r_max / n_bins as f64,
            r_max,
            counts: vec![0; n_bins],
            n_configs: 0,
        })
    }

    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    /// Lower and upper edge of bin `i`
    pub fn bin_edges(&self, i: usize) -> (f64, f64) {
        (i as f64 * self.bin_width, (i + 1) as f64 * self.bin_width)
    }

    pub fn bin_center(&self, i: usize) -> f64 {
        (i as f64 + 0.5) * self.bin_width
    }

    pub fn total_counts(&self) -> u64 {
        self.counts.iter().sum()
    }

    fn bin_index(&self, r: f64) -> Option<usize> {
        if r >= self.r_max {
            return None;
        }
        let idx = (r / self.bin_width) as usize;
        (idx < self.counts.len()).then_some(idx)
    }

    /// Bin every unordered pair of the configuration, counting it once for each partner
    pub fn accumulate_pairs(&mut self, positions: &[Vector2<f64>], sim_box: &SimulationBox) {
        for (a, b) in positions.iter().tuple_combinations() {
            if let Some(idx) = self.bin_index(sim_box.distance(a, b)) {
                self.counts[idx] += 2;
            }
        }
        self.n_configs += 1;
    }

    /// Bin the distances from one reference particle to all the others
    pub fn accumulate_reference(
        &mut self,
        positions: &[Vector2<f64>],
        reference: usize,
        sim_box: &SimulationBox,
    ) {
        let origin = positions[reference];
        for (j, p) in positions.iter().enumerate() {
            if j == reference {
                continue;
            }
            if let Some(idx) = self.bin_index(sim_box.distance(&origin, p)) {
                self.counts[idx] += 1;
            }
        }
        self.n_configs += 1;
    }

    /// Add another histogram with identical binning into this one
    pub fn merge(&mut self, other: &PairHistogram) -> Result<()> {
        if self.counts.len() != other.counts.len()
            || self.bin_width != other.bin_width
            || self.r_max != other.r_max
        {
            return Err(SimulationError::BinningMismatch(format!(
                "{} bins of width {} vs {} bins of width {}",
                self.counts.len(),
                self.bin_width,
                other.counts.len(),
                other.bin_width
            )));
        }
        for (c, o) in self.counts.iter_mut().zip(&other.counts) {
            *c += o;
        }
        self.n_configs += other.n_configs;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
        self.n_configs = 0;
    }

    /// Normalize against the ideal-gas pair count of each annulus
    pub fn normalize(&self, n_particles: usize, density: f64) -> RadialDistribution {
        rdf::normalize(
            &self.counts,
            self.bin_width,
            density,
            self.n_configs,
            n_particles,
        )
    }
}
