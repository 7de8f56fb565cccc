//! Ideal-gas reference for g(r)
//!
//! Uncorrelated uniform configurations have g(r) = 1 at every separation, so
//! this sampler calibrates the binning and normalization used for the
//! interacting fluid and shows how the estimate converges with sample count.

use crate::error::{Result, SimulationError};
use crate::histogram::PairHistogram;
use crate::pbc::SimulationBox;
use crate::rdf::RadialDistribution;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// How each sample picks its reference particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceMode {
    /// Draw a new configuration per sample and measure from particle 0
    FreshConfiguration,
    /// Keep one configuration and use particle k mod N for sample k
    CycleReferences,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdealGasSettings {
    pub n_particles: usize,
    pub box_length: f64,
    /// Bins spanning [0, L/2)
    pub n_bins: usize,
    pub mode: ReferenceMode,
    pub seed: Option<u64>,
}

impl Default for IdealGasSettings {
    fn default() -> Self {
        Self {
            n_particles: 500,
            box_length: 1.0,
            n_bins: 50,
            mode: ReferenceMode::FreshConfiguration,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub struct IdealGasSampler {
    pub settings: IdealGasSettings,
    sim_box: SimulationBox,
    positions: Vec<Vector2<f64>>,
    histogram: PairHistogram,
    rng: StdRng,
    /// Number of samples taken
    pub n_samples: u64,
}

impl IdealGasSampler {
    pub fn new(settings: IdealGasSettings) -> Result<Self> {
        if settings.n_particles < 2 {
            return Err(SimulationError::InvalidParameter(format!(
                "need at least two particles, got {}",
                settings.n_particles
            )));
        }
        let sim_box = SimulationBox::new(settings.box_length)?;
        let histogram = PairHistogram::with_bins(sim_box.half_length(), settings.n_bins)?;
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let positions = (0..settings.n_particles)
            .map(|_| sim_box.random_position(&mut rng))
            .collect();

        Ok(Self {
            settings,
            sim_box,
            positions,
            histogram,
            rng,
            n_samples: 0,
        })
    }

    fn redraw(&mut self) {
        for p in self.positions.iter_mut() {
            *p = self.sim_box.random_position(&mut self.rng);
        }
    }

    /// Take one reference measurement
    pub fn sample(&mut self) {
        let reference = match self.settings.mode {
            ReferenceMode::FreshConfiguration => {
                // The first sample uses the configuration drawn at construction
                if self.n_samples > 0 {
                    self.redraw();
                }
                0
            }
            ReferenceMode::CycleReferences => {
                (self.n_samples % self.positions.len() as u64) as usize
            }
        };
        self.histogram
            .accumulate_reference(&self.positions, reference, &self.sim_box);
        self.n_samples += 1;
    }

    pub fn run(&mut self, n_samples: usize) {
        for _ in 0..n_samples {
            self.sample();
        }
    }

    /// Reference density (N − 1)/A: the reference particle is excluded
    pub fn reference_density(&self) -> f64 {
        (self.positions.len() - 1) as f64 / self.sim_box.area()
    }

    /// g(r) averaged over all references sampled so far
    pub fn radial_distribution(&self) -> RadialDistribution {
        // One reference per sample, so N enters as 1
        self.histogram.normalize(1, self.reference_density())
    }

    pub fn positions(&self) -> &[Vector2<f64>] {
        &self.positions
    }

    pub fn histogram(&self) -> &PairHistogram {
        &self.histogram
    }
}
