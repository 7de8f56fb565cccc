// file: `src/replica.rs`
use crate::error::{Result, SimulationError};
use crate::histogram::PairHistogram;
use crate::lj_pot::PairPotential;
use crate::rdf::RadialDistribution;
use crate::sampler::{MetropolisSampler, MoveStatistics, SamplerSettings};
use rayon::prelude::*;
use tracing::info;

/// Step counts for one equilibrate-then-sample run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPlan {
    /// Trial moves before any measurement
    pub equilibration_steps: usize,
    /// Number of histogrammed configurations
    pub n_samples: usize,
    /// Trial moves between consecutive samples
    pub decorrelation_steps: usize,
    /// Equilibration progress log interval (0 disables)
    pub log_interval: usize,
}

impl Default for RunPlan {
    fn default() -> Self {
        Self {
            equilibration_steps: 10_000,
            n_samples: 5_000,
            decorrelation_steps: 10,
            log_interval: 1000,
        }
    }
}

/// Pooled result of one or more independent chains
#[derive(Debug, Clone)]
pub struct ReplicaSummary {
    /// Sum of all replica histograms
    pub histogram: PairHistogram,
    /// Sum of all replica move statistics
    pub stats: MoveStatistics,
    /// Final potential energy per particle of each replica
    pub energies_per_particle: Vec<f64>,
    /// g(r) of the pooled histogram
    pub rdf: RadialDistribution,
}

impl ReplicaSummary {
    pub fn n_replicas(&self) -> usize {
        self.energies_per_particle.len()
    }

    pub fn mean_energy_per_particle(&self) -> f64 {
        if self.energies_per_particle.is_empty() {
            0.0
        } else {
            self.energies_per_particle.iter().sum::<f64>() / self.energies_per_particle.len() as f64
        }
    }
}

/// Run a single chain through equilibration and sampling
pub fn run_chain<P: PairPotential>(
    potential: P,
    settings: &SamplerSettings,
    plan: &RunPlan,
) -> Result<MetropolisSampler<P>> {
    let mut sampler = MetropolisSampler::new(potential, settings)?;
    sampler.log_interval = plan.log_interval;
    sampler.equilibrate(plan.equilibration_steps)?;
    sampler.run_sampling(plan.n_samples, plan.decorrelation_steps)?;
    Ok(sampler)
}

/// Run `n_replicas` independent chains in parallel and pool their histograms
///
/// Replica k is seeded with `seed + k`; every chain is an ordinary serial
/// Metropolis chain, so pooling only reduces variance.
pub fn run_replicas<P>(
    potential: &P,
    settings: &SamplerSettings,
    plan: &RunPlan,
    n_replicas: usize,
) -> Result<ReplicaSummary>
where
    P: PairPotential + Clone + Send + Sync,
{
    let n_replicas = n_replicas.max(1);
    info!("Running {} independent replica chain(s)", n_replicas);

    let results: Vec<(PairHistogram, MoveStatistics, f64)> = (0..n_replicas)
        .into_par_iter()
        .map(|k| {
            let replica_settings = SamplerSettings {
                seed: settings.seed.map(|s| s.wrapping_add(k as u64)),
                ..settings.clone()
            };
            let sampler = run_chain(potential.clone(), &replica_settings, plan)?;
            let energy = sampler.energy_per_particle()?;
            let stats = sampler.stats.clone();
            Ok((sampler.into_histogram(), stats, energy))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut parts = results.into_iter();
    let (mut histogram, mut stats, first_energy) = parts.next().ok_or_else(|| {
        SimulationError::InvalidParameter("no replica produced a result".to_string())
    })?;
    let mut energies_per_particle = vec![first_energy];
    for (h, s, e) in parts {
        histogram.merge(&h)?;
        stats.merge(&s);
        energies_per_particle.push(e);
    }

    let rdf = histogram.normalize(settings.n_particles, settings.density);
    Ok(ReplicaSummary {
        histogram,
        stats,
        energies_per_particle,
        rdf,
    })
}
