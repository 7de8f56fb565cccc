use color_eyre::eyre::Result;
use ljmc::config::Config;
use ljmc::{dilute_limit, run_replicas, IdealGasSampler, RadialDistribution, ReplicaSummary};
use tracing::info;

pub struct LjRunOutcome {
    pub summary: ReplicaSummary,
    /// exp(−βU(r)) on the configured grid
    pub dilute_limit: Vec<(f64, f64)>,
    pub box_length: f64,
}

pub fn run_lennard_jones(config: &Config) -> Result<LjRunOutcome> {
    let potential = config.potential()?;
    let settings = config.sampler_settings();
    let plan = config.run_plan();
    let box_length = settings.box_length();

    info!(
        "N = {}, rho = {:.4}, L = {:.4}, beta = {:.4}, delta = {:.4}",
        settings.n_particles, settings.density, box_length, settings.beta, settings.max_displacement
    );
    info!(
        "Equilibration: {} moves, sampling: {} configurations every {} moves",
        plan.equilibration_steps, plan.n_samples, plan.decorrelation_steps
    );

    let summary = run_replicas(&potential, &settings, &plan, config.monte_carlo.replicas)?;

    let r_min = config.analysis.theory_r_min * potential.sigma;
    let curve = dilute_limit(
        &potential,
        settings.beta,
        r_min,
        0.5 * box_length,
        config.analysis.theory_points,
    )?;

    Ok(LjRunOutcome {
        summary,
        dilute_limit: curve,
        box_length,
    })
}

pub fn run_ideal_gas(config: &Config) -> Result<RadialDistribution> {
    let settings = config.ideal_gas_settings();
    info!(
        "N = {}, L = {:.4}, {} bins, mode {:?}",
        settings.n_particles, settings.box_length, settings.n_bins, settings.mode
    );

    let mut sampler = IdealGasSampler::new(settings)?;
    sampler.run(config.ideal_gas.n_samples);
    Ok(sampler.radial_distribution())
}
