// file: `src/sampler.rs`
use crate::error::{Result, SimulationError};
use crate::histogram::PairHistogram;
use crate::lj_pot::PairPotential;
use crate::pbc::SimulationBox;
use crate::rdf::RadialDistribution;
use nalgebra::Vector2;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Uniform;
use tracing::{debug, info, warn, Level};

/// Canonical (NVT) Metropolis Monte Carlo sampler for a 2D fluid
///
/// The ensemble lives in a periodic square box of side L = sqrt(N/ρ).
/// Each trial move displaces one randomly chosen particle by a vector drawn
/// uniformly from [-δ, δ]² and is accepted with probability min(1, exp(−βΔE)),
/// where ΔE only involves the pairs containing the moved particle.
///
/// Pair distances are accumulated into a histogram after every decorrelation
/// sweep to estimate the radial distribution function g(r).
#[derive(Debug)]
pub struct MetropolisSampler<P: PairPotential> {
    /// Pair interaction shared by all particles
    pub potential: P,
    /// Particle positions, always inside [0, L)²
    positions: Vec<Vector2<f64>>,
    sim_box: SimulationBox,
    /// Inverse temperature β = 1/k_BT
    beta: f64,
    /// Maximum displacement δ per axis
    max_displacement: f64,
    displacement: Uniform<f64>,
    /// Random number generator
    rng: StdRng,
    histogram: PairHistogram,
    /// Move statistics
    pub stats: MoveStatistics,
    /// Trial move counter
    pub step: u64,
    /// Emit a progress line every `log_interval` moves during equilibration
    pub log_interval: usize,
    phase: Phase,
}

/// Where the run is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fresh configuration, not yet relaxed
    Uninitialized,
    /// Relaxed; ready for measurement
    Equilibrated,
    /// At least one configuration has been histogrammed
    Sampled,
}

/// Acceptance bookkeeping for trial moves
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveStatistics {
    /// Number of trial moves attempted
    pub attempts: u64,
    /// Number of trial moves accepted
    pub accepted: u64,
    /// Moves with ΔE > 0
    pub uphill_attempts: u64,
    /// Moves with ΔE > 0 that passed the Boltzmann test
    pub uphill_accepted: u64,
}

impl MoveStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.accepted as f64 / self.attempts as f64
        }
    }

    pub fn uphill_acceptance_rate(&self) -> f64 {
        if self.uphill_attempts == 0 {
            0.0
        } else {
            self.uphill_accepted as f64 / self.uphill_attempts as f64
        }
    }

    pub fn merge(&mut self, other: &MoveStatistics) {
        self.attempts += other.attempts;
        self.accepted += other.accepted;
        self.uphill_attempts += other.uphill_attempts;
        self.uphill_accepted += other.uphill_accepted;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Ensemble and move parameters for a sampler
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerSettings {
    /// Number of particles N (fixed for the run)
    pub n_particles: usize,
    /// Number density ρ = N / A
    pub density: f64,
    /// Inverse temperature β
    pub beta: f64,
    /// Maximum displacement δ per axis
    pub max_displacement: f64,
    /// Histogram bin width dr
    pub bin_width: f64,
    /// Seed for reproducible chains; entropy when absent
    pub seed: Option<u64>,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            n_particles: 100,
            density: 0.8,
            beta: 1.0,
            max_displacement: 0.1,
            bin_width: 0.05,
            seed: Some(42),
        }
    }
}

impl SamplerSettings {
    pub fn validate(&self) -> Result<()> {
        if self.n_particles < 2 {
            return Err(SimulationError::InvalidParameter(format!(
                "need at least two particles, got {}",
                self.n_particles
            )));
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "density must be positive, got {}",
                self.density
            )));
        }
        check_beta(self.beta)?;
        check_max_displacement(self.max_displacement, self.box_length())?;
        if !self.bin_width.is_finite() || self.bin_width <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "bin width must be positive, got {}",
                self.bin_width
            )));
        }
        Ok(())
    }

    /// Box side L = sqrt(N / ρ)
    pub fn box_length(&self) -> f64 {
        (self.n_particles as f64 / self.density).sqrt()
    }
}

fn check_beta(beta: f64) -> Result<()> {
    if !beta.is_finite() || beta <= 0.0 {
        return Err(SimulationError::InvalidParameter(format!(
            "beta must be positive, got {beta}"
        )));
    }
    Ok(())
}

/// δ must be non-negative and no larger than the box side
fn check_max_displacement(delta: f64, box_length: f64) -> Result<()> {
    if !delta.is_finite() || delta < 0.0 {
        return Err(SimulationError::InvalidParameter(format!(
            "maximum displacement must be non-negative and finite, got {delta}"
        )));
    }
    if delta > box_length {
        return Err(SimulationError::InvalidParameter(format!(
            "maximum displacement {delta} exceeds the box length {box_length:.4}"
        )));
    }
    Ok(())
}

impl<P: PairPotential> MetropolisSampler<P> {
    /// Create a sampler with particles placed uniformly at random in the box
    pub fn new(potential: P, settings: &SamplerSettings) -> Result<Self> {
        settings.validate()?;
        let sim_box = SimulationBox::from_density(settings.n_particles, settings.density)?;
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let positions = (0..settings.n_particles)
            .map(|_| sim_box.random_position(&mut rng))
            .collect();
        Self::assemble(potential, settings, sim_box, positions, rng)
    }

    /// Create a sampler from an explicit configuration (wrapped into the box)
    pub fn with_positions(
        potential: P,
        settings: &SamplerSettings,
        positions: Vec<Vector2<f64>>,
    ) -> Result<Self> {
        settings.validate()?;
        if positions.len() != settings.n_particles {
            return Err(SimulationError::InvalidParameter(format!(
                "expected {} positions, got {}",
                settings.n_particles,
                positions.len()
            )));
        }
        if positions.iter().any(|p| !p.iter().all(|x| x.is_finite())) {
            return Err(SimulationError::InvalidParameter(
                "positions must be finite".to_string(),
            ));
        }
        let sim_box = SimulationBox::from_density(settings.n_particles, settings.density)?;
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let positions = positions.into_iter().map(|p| sim_box.wrap(p)).collect();
        Self::assemble(potential, settings, sim_box, positions, rng)
    }

    fn assemble(
        potential: P,
        settings: &SamplerSettings,
        sim_box: SimulationBox,
        positions: Vec<Vector2<f64>>,
        rng: StdRng,
    ) -> Result<Self> {
        let histogram = PairHistogram::new(sim_box.half_length(), settings.bin_width)?;
        if potential.cutoff() > sim_box.half_length() {
            warn!(
                "Cutoff {:.4} exceeds half the box length {:.4}; minimum image truncates interactions",
                potential.cutoff(),
                sim_box.half_length()
            );
        }

        Ok(Self {
            potential,
            positions,
            sim_box,
            beta: settings.beta,
            max_displacement: settings.max_displacement,
            displacement: Uniform::new_inclusive(
                -settings.max_displacement,
                settings.max_displacement,
            ),
            rng,
            histogram,
            stats: MoveStatistics::new(),
            step: 0,
            log_interval: 1000,
            phase: Phase::Uninitialized,
        })
    }

    /// Energy change of moving particle `index` to `new_pos`
    ///
    /// Only the pairs involving `index` contribute.
    pub fn energy_change(&self, index: usize, new_pos: Vector2<f64>) -> Result<f64> {
        let old_pos = self.positions[index];
        let mut delta_e = 0.0;
        for (j, other) in self.positions.iter().enumerate() {
            if j == index {
                continue;
            }
            let r_old = self.sim_box.distance(&old_pos, other);
            let r_new = self.sim_box.distance(&new_pos, other);
            let coincident = |_| SimulationError::CoincidentParticles { i: index, j };
            delta_e += self.potential.try_energy(r_new).map_err(coincident)?
                - self.potential.try_energy(r_old).map_err(coincident)?;
        }
        Ok(delta_e)
    }

    /// Metropolis criterion: downhill moves never consume a random number
    pub fn metropolis_accept(&mut self, delta_e: f64) -> bool {
        if delta_e <= 0.0 {
            return true;
        }
        self.stats.uphill_attempts += 1;
        let accept = self.rng.gen::<f64>() < (-self.beta * delta_e).exp();
        if accept {
            self.stats.uphill_accepted += 1;
        }
        accept
    }

    /// Attempt to displace particle `index` by `displacement`
    ///
    /// Returns whether the move was accepted; a rejected move leaves the
    /// particle at its old position.
    pub fn trial_move(&mut self, index: usize, displacement: Vector2<f64>) -> Result<bool> {
        if index >= self.positions.len() {
            return Err(SimulationError::InvalidParameter(format!(
                "particle index {index} out of range for {} particles",
                self.positions.len()
            )));
        }
        let new_pos = self.sim_box.wrap(self.positions[index] + displacement);
        let delta_e = self.energy_change(index, new_pos)?;
        self.stats.attempts += 1;
        self.step += 1;

        let accept = self.metropolis_accept(delta_e);
        if accept {
            self.positions[index] = new_pos;
            self.stats.accepted += 1;
        }
        Ok(accept)
    }

    /// Propose and resolve one random single-particle move
    pub fn propose_move(&mut self) -> Result<bool> {
        let index = self.rng.gen_range(0..self.positions.len());
        let displacement = Vector2::new(
            self.displacement.sample(&mut self.rng),
            self.displacement.sample(&mut self.rng),
        );
        self.trial_move(index, displacement)
    }

    /// Relax the ensemble for a fixed number of trial moves without measuring
    ///
    /// No convergence diagnostic is applied; the phase ends after `n_steps`.
    pub fn equilibrate(&mut self, n_steps: usize) -> Result<()> {
        info!("Equilibrating for {} trial moves", n_steps);
        for step in 0..n_steps {
            self.propose_move()?;

            if self.log_interval > 0 && (step + 1) % self.log_interval == 0 {
                info!(
                    "Equilibration step {}/{}: acceptance {:.2}%",
                    step + 1,
                    n_steps,
                    100.0 * self.stats.acceptance_rate()
                );
                if tracing::enabled!(Level::DEBUG) {
                    let energy = self.energy_per_particle()?;
                    debug!("Energy per particle: {:.6}", energy);
                }
            }
        }
        self.phase = Phase::Equilibrated;
        Ok(())
    }

    /// Decorrelate with `decorrelation_steps` moves, then histogram the configuration
    pub fn sample(&mut self, decorrelation_steps: usize) -> Result<()> {
        if self.phase == Phase::Uninitialized {
            return Err(SimulationError::NotEquilibrated);
        }
        for _ in 0..decorrelation_steps {
            self.propose_move()?;
        }
        self.histogram.accumulate_pairs(&self.positions, &self.sim_box);
        self.phase = Phase::Sampled;
        Ok(())
    }

    /// Draw `n_samples` decorrelated configurations into the histogram
    pub fn run_sampling(&mut self, n_samples: usize, decorrelation_steps: usize) -> Result<()> {
        info!(
            "Sampling {} configurations ({} moves between samples)",
            n_samples, decorrelation_steps
        );
        let report_every = (n_samples / 10).max(1);
        for sample in 0..n_samples {
            self.sample(decorrelation_steps)?;
            if (sample + 1) % report_every == 0 {
                info!("Sampled {}/{} configurations", sample + 1, n_samples);
            }
        }
        Ok(())
    }

    /// g(r) from everything sampled so far
    pub fn radial_distribution(&self) -> RadialDistribution {
        self.histogram.normalize(self.positions.len(), self.density())
    }

    /// Full pairwise potential energy of the current configuration
    pub fn total_energy(&self) -> Result<f64> {
        let n = self.positions.len();
        let mut energy = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let r = self.sim_box.distance(&self.positions[i], &self.positions[j]);
                energy += self
                    .potential
                    .try_energy(r)
                    .map_err(|_| SimulationError::CoincidentParticles { i, j })?;
            }
        }
        Ok(energy)
    }

    pub fn energy_per_particle(&self) -> Result<f64> {
        Ok(self.total_energy()? / self.positions.len() as f64)
    }

    pub fn positions(&self) -> &[Vector2<f64>] {
        &self.positions
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn set_beta(&mut self, beta: f64) -> Result<()> {
        check_beta(beta)?;
        self.beta = beta;
        Ok(())
    }

    pub fn max_displacement(&self) -> f64 {
        self.max_displacement
    }

    /// Change δ for subsequent moves
    pub fn set_max_displacement(&mut self, delta: f64) -> Result<()> {
        check_max_displacement(delta, self.sim_box.length)?;
        self.max_displacement = delta;
        self.displacement = Uniform::new_inclusive(-delta, delta);
        Ok(())
    }

    pub fn sim_box(&self) -> &SimulationBox {
        &self.sim_box
    }

    pub fn histogram(&self) -> &PairHistogram {
        &self.histogram
    }

    pub fn into_histogram(self) -> PairHistogram {
        self.histogram
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn n_particles(&self) -> usize {
        self.positions.len()
    }

    pub fn density(&self) -> f64 {
        self.positions.len() as f64 / self.sim_box.area()
    }

    /// Clear the histogram and move statistics, keeping the configuration
    pub fn reset_measurements(&mut self) {
        self.histogram.reset();
        self.stats.reset();
        if self.phase == Phase::Sampled {
            self.phase = Phase::Equilibrated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lj_pot::{LennardJones, NoInteraction};
    use approx::assert_relative_eq;

    fn two_particle_settings() -> SamplerSettings {
        SamplerSettings {
            n_particles: 2,
            density: 2.0 / 100.0,
            ..SamplerSettings::default()
        }
    }

    #[test]
    fn test_sampler_creation() {
        let sampler = MetropolisSampler::new(LennardJones::reduced(), &SamplerSettings::default())
            .unwrap();
        assert_eq!(sampler.n_particles(), 100);
        assert_relative_eq!(sampler.sim_box().length, 125.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(sampler.density(), 0.8, epsilon = 1e-12);
        assert_eq!(sampler.histogram().n_bins(), 111);
        assert_eq!(sampler.phase(), Phase::Uninitialized);
        assert!(sampler.positions().iter().all(|p| sampler.sim_box().contains(p)));
    }

    #[test]
    fn test_invalid_settings() {
        let bad = [
            SamplerSettings { n_particles: 1, ..Default::default() },
            SamplerSettings { density: -0.1, ..Default::default() },
            SamplerSettings { beta: 0.0, ..Default::default() },
            SamplerSettings { max_displacement: -0.1, ..Default::default() },
            SamplerSettings { max_displacement: 1e308, ..Default::default() },
            SamplerSettings { max_displacement: 12.0, ..Default::default() },
            SamplerSettings { bin_width: 0.0, ..Default::default() },
            SamplerSettings { bin_width: 100.0, ..Default::default() },
        ];
        for settings in &bad {
            assert!(MetropolisSampler::new(NoInteraction, settings).is_err());
        }
    }

    #[test]
    fn test_downhill_move_always_accepted() {
        // Pair at 0.9σ is strongly repulsive; moving out to 2^(1/6)σ lowers the energy
        let settings = two_particle_settings();
        for seed in 0..50 {
            let settings = SamplerSettings { seed: Some(seed), ..settings.clone() };
            let positions = vec![Vector2::new(5.0, 5.0), Vector2::new(5.9, 5.0)];
            let mut sampler =
                MetropolisSampler::with_positions(LennardJones::reduced(), &settings, positions)
                    .unwrap();

            let step = 2.0_f64.powf(1.0 / 6.0) - 0.9;
            let delta_e = sampler
                .energy_change(1, Vector2::new(5.9 + step, 5.0))
                .unwrap();
            assert!(delta_e < 0.0);

            assert!(sampler.trial_move(1, Vector2::new(step, 0.0)).unwrap());
            assert_relative_eq!(sampler.positions()[1].x, 5.9 + step, epsilon = 1e-12);
            assert_eq!(sampler.stats.uphill_attempts, 0);
        }
    }

    #[test]
    fn test_large_uphill_move_rejected() {
        let settings = two_particle_settings();
        let positions = vec![Vector2::new(5.0, 5.0), Vector2::new(6.2, 5.0)];
        let mut sampler =
            MetropolisSampler::with_positions(LennardJones::reduced(), &settings, positions)
                .unwrap();

        // Pushing to 0.5σ costs ~16000ε; the Boltzmann factor underflows to zero
        assert!(!sampler.trial_move(1, Vector2::new(-0.7, 0.0)).unwrap());
        assert_relative_eq!(sampler.positions()[1].x, 6.2, epsilon = 1e-12);
        assert_eq!(sampler.stats.attempts, 1);
        assert_eq!(sampler.stats.accepted, 0);
        assert_eq!(sampler.stats.uphill_attempts, 1);
    }

    #[test]
    fn test_energy_change_matches_total_energy() {
        // 5x5 lattice with spacing 1.2 in a 6x6 box, slightly perturbed
        let settings = SamplerSettings {
            n_particles: 25,
            density: 25.0 / 36.0,
            seed: Some(3),
            ..Default::default()
        };
        let positions = (0..25)
            .map(|k| {
                let (i, j) = (k % 5, k / 5);
                Vector2::new(
                    (i as f64 + 0.5) * 1.2 + 0.01 * (k % 3) as f64,
                    (j as f64 + 0.5) * 1.2 - 0.02 * (k % 2) as f64,
                )
            })
            .collect();
        let mut sampler =
            MetropolisSampler::with_positions(LennardJones::reduced(), &settings, positions)
                .unwrap();
        sampler.equilibrate(500).unwrap();

        let before = sampler.total_energy().unwrap();
        let new_pos = sampler
            .sim_box()
            .wrap(sampler.positions()[4] + Vector2::new(0.05, -0.03));
        let delta_e = sampler.energy_change(4, new_pos).unwrap();
        sampler.positions[4] = new_pos;
        let after = sampler.total_energy().unwrap();

        assert_relative_eq!(after - before, delta_e, epsilon = 1e-9, max_relative = 1e-9);
    }

    #[test]
    fn test_coincident_particles_reported() {
        let settings = two_particle_settings();
        let positions = vec![Vector2::new(1.0, 1.0), Vector2::new(1.5, 1.0)];
        let mut sampler =
            MetropolisSampler::with_positions(LennardJones::reduced(), &settings, positions)
                .unwrap();
        let result = sampler.trial_move(1, Vector2::new(-0.5, 0.0));
        assert!(matches!(
            result,
            Err(SimulationError::CoincidentParticles { i: 1, j: 0 })
        ));
        // A failed trial is not counted as an attempt
        assert_eq!(sampler.stats.attempts, 0);
        assert_eq!(sampler.step, 0);
    }

    #[test]
    fn test_positions_stay_in_box() {
        let settings = SamplerSettings {
            n_particles: 20,
            density: 0.5,
            max_displacement: 3.0,
            seed: Some(11),
            ..Default::default()
        };
        let mut sampler = MetropolisSampler::new(NoInteraction, &settings).unwrap();
        for _ in 0..5000 {
            assert!(sampler.propose_move().unwrap());
            let sim_box = *sampler.sim_box();
            assert!(sampler.positions().iter().all(|p| sim_box.contains(p)));
        }
        assert_relative_eq!(sampler.stats.acceptance_rate(), 1.0);
    }

    #[test]
    fn test_sampling_requires_equilibration() {
        let mut sampler =
            MetropolisSampler::new(NoInteraction, &SamplerSettings::default()).unwrap();
        assert!(matches!(
            sampler.sample(10),
            Err(SimulationError::NotEquilibrated)
        ));

        sampler.equilibrate(0).unwrap();
        assert_eq!(sampler.phase(), Phase::Equilibrated);
        sampler.sample(10).unwrap();
        assert_eq!(sampler.phase(), Phase::Sampled);
        assert_eq!(sampler.histogram().n_configs, 1);
    }

    #[test]
    fn test_histogram_monotonic_accumulation() {
        let settings = SamplerSettings {
            n_particles: 40,
            density: 0.5,
            seed: Some(5),
            ..Default::default()
        };
        let mut sampler = MetropolisSampler::new(LennardJones::reduced(), &settings).unwrap();
        sampler.equilibrate(2000).unwrap();

        let mut previous = sampler.histogram().counts.clone();
        for _ in 0..50 {
            sampler.sample(10).unwrap();
            let current = &sampler.histogram().counts;
            assert!(current.iter().zip(&previous).all(|(c, p)| c >= p));
            previous = current.clone();
        }
        assert_eq!(sampler.histogram().n_configs, 50);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let settings = SamplerSettings {
            n_particles: 25,
            density: 0.6,
            seed: Some(2024),
            ..Default::default()
        };
        let run = || {
            let mut sampler =
                MetropolisSampler::new(LennardJones::reduced(), &settings).unwrap();
            sampler.equilibrate(1000).unwrap();
            sampler.run_sampling(20, 5).unwrap();
            sampler
        };
        let a = run();
        let b = run();
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.histogram(), b.histogram());
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn test_reset_measurements() {
        let mut sampler =
            MetropolisSampler::new(NoInteraction, &SamplerSettings::default()).unwrap();
        sampler.equilibrate(10).unwrap();
        sampler.run_sampling(3, 1).unwrap();
        sampler.reset_measurements();
        assert_eq!(sampler.histogram().total_counts(), 0);
        assert_eq!(sampler.stats.attempts, 0);
        assert_eq!(sampler.phase(), Phase::Equilibrated);
    }

    #[test]
    fn test_uphill_acceptance_matches_boltzmann_factor() {
        let settings = SamplerSettings {
            beta: 2.0,
            seed: Some(77),
            ..two_particle_settings()
        };
        let mut sampler = MetropolisSampler::new(NoInteraction, &settings).unwrap();

        // βΔE = ln 2 and ln 4: acceptance 1/2 and 1/4
        let n = 10_000;
        for (delta_e, expected) in [(0.5 * 2.0_f64.ln(), 0.5), (0.5 * 4.0_f64.ln(), 0.25)] {
            sampler.stats.reset();
            let accepted = (0..n).filter(|_| sampler.metropolis_accept(delta_e)).count();
            let fraction = accepted as f64 / n as f64;
            let std_err = (expected * (1.0 - expected) / n as f64).sqrt();
            assert!(
                (fraction - expected).abs() < 4.0 * std_err,
                "ΔE = {delta_e}: accepted {fraction}, expected {expected}"
            );
            assert_eq!(sampler.stats.uphill_attempts, n as u64);
            assert_eq!(sampler.stats.uphill_accepted, accepted as u64);
        }
    }

    #[test]
    fn test_move_parameter_setters() {
        let settings = SamplerSettings {
            n_particles: 10,
            density: 0.5,
            max_displacement: 0.0,
            seed: Some(8),
            ..Default::default()
        };
        let mut sampler = MetropolisSampler::new(NoInteraction, &settings).unwrap();
        let start = sampler.positions().to_vec();
        for _ in 0..20 {
            sampler.propose_move().unwrap();
        }
        assert_eq!(sampler.positions(), &start[..]);

        sampler.set_max_displacement(2.0).unwrap();
        assert_eq!(sampler.max_displacement(), 2.0);
        for _ in 0..100 {
            sampler.propose_move().unwrap();
        }
        assert_ne!(sampler.positions(), &start[..]);

        let l = sampler.sim_box().length;
        assert!(sampler.set_max_displacement(-1.0).is_err());
        assert!(sampler.set_max_displacement(2.0 * l).is_err());
        assert!(sampler.set_max_displacement(f64::INFINITY).is_err());
        assert_eq!(sampler.max_displacement(), 2.0);

        assert!(sampler.set_beta(-1.0).is_err());
        assert!(sampler.set_beta(f64::NAN).is_err());
        sampler.set_beta(0.5).unwrap();
        assert_eq!(sampler.beta(), 0.5);
    }

    #[test]
    fn test_equilibration_independent_of_log_level() {
        let settings = SamplerSettings {
            n_particles: 16,
            density: 0.5,
            seed: Some(31),
            ..Default::default()
        };
        let run = || {
            let mut sampler =
                MetropolisSampler::new(LennardJones::reduced(), &settings).unwrap();
            sampler.log_interval = 1;
            sampler.equilibrate(200).unwrap();
            sampler
        };

        let quiet = run();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .finish();
        let verbose = tracing::subscriber::with_default(subscriber, run);

        assert_eq!(quiet.positions(), verbose.positions());
        assert_eq!(quiet.stats, verbose.stats);
    }
}
