use super::runner::LjRunOutcome;
use ljmc::config::Config;
use ljmc::RadialDistribution;
use tracing::{info, warn};

pub fn report_lj_summary(outcome: &LjRunOutcome, config: &Config) {
    let summary = &outcome.summary;
    info!("\nMonte Carlo run finished ({} replica(s)).", summary.n_replicas());

    info!("\nMove statistics:");
    info!("  Trial moves:       {}", summary.stats.attempts);
    info!(
        "  Acceptance rate:   {:.2}%",
        100.0 * summary.stats.acceptance_rate()
    );
    info!(
        "  Uphill acceptance: {:.2}%",
        100.0 * summary.stats.uphill_acceptance_rate()
    );

    info!("\nPotential energy per particle:");
    for (k, e) in summary.energies_per_particle.iter().enumerate() {
        info!("  Replica {:>2}: {:+.6} ε", k, e);
    }
    info!("  Mean:       {:+.6} ε", summary.mean_energy_per_particle());

    info!(
        "\nSampled {} configurations into {} bins",
        summary.histogram.n_configs,
        summary.histogram.n_bins()
    );
    match summary.rdf.peak() {
        Some((r, g)) => info!("  First peak: g({:.3}) = {:.4}", r, g),
        None => warn!("  g(r) has no bins"),
    }

    let tail_start = 2.0 * config.potential.sigma;
    match summary.rdf.mean_over(tail_start, 0.5 * outcome.box_length) {
        Some(mean) => info!("  Mean g(r) for r >= {:.2}: {:.4}", tail_start, mean),
        None => info!("  Box too small to report the g(r) tail"),
    }
}

pub fn report_ideal_gas_summary(rdf: &RadialDistribution, config: &Config) {
    info!(
        "\nIdeal-gas reference finished ({} samples).",
        config.ideal_gas.n_samples
    );
    let mean = rdf.g.iter().sum::<f64>() / rdf.len().max(1) as f64;
    let worst = rdf
        .g
        .iter()
        .map(|g| (g - 1.0).abs())
        .fold(0.0_f64, f64::max);
    info!("  Mean g(r):            {:.4}", mean);
    info!("  Largest |g(r) - 1|:   {:.4}", worst);
}
