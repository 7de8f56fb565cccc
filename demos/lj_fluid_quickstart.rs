// Quick Start: g(r) of the 2D Lennard-Jones fluid
//
// Equilibrates 100 particles at ρ = 0.8, β = 1 and prints the sampled g(r)
// next to the dilute-limit curve exp(−βU).
// Run with: cargo run --release --example lj_fluid_quickstart

use ljmc::{dilute_limit, LennardJones, MetropolisSampler, SamplerSettings};

fn main() -> ljmc::Result<()> {
    println!("Lennard-Jones Monte Carlo Quick Start\n");

    let settings = SamplerSettings {
        n_particles: 100,
        density: 0.8,
        beta: 1.0,
        max_displacement: 0.1,
        bin_width: 0.05,
        seed: Some(42),
    };
    let lj = LennardJones::reduced();
    let mut sampler = MetropolisSampler::new(lj.clone(), &settings)?;

    println!("System setup:");
    println!("  N = {}", sampler.n_particles());
    println!("  ρ = {:.3} σ⁻²", sampler.density());
    println!("  L = {:.4} σ", sampler.sim_box().length);
    println!("  r_cut = {} σ\n", lj.r_cut);

    println!("Equilibration (10,000 moves)...");
    sampler.equilibrate(10_000)?;
    println!("  E/N = {:.4} ε", sampler.energy_per_particle()?);
    println!(
        "  acceptance = {:.1}%\n",
        100.0 * sampler.stats.acceptance_rate()
    );

    println!("Production (2,000 samples, 10 moves apart)...");
    sampler.run_sampling(2_000, 10)?;
    println!("  E/N = {:.4} ε\n", sampler.energy_per_particle()?);

    let rdf = sampler.radial_distribution();
    if let Some((r, g)) = rdf.peak() {
        println!("First peak: g({:.3}) = {:.3}\n", r, g);
    }

    println!("{:>8} {:>10}", "r", "g(r)");
    for (r, g) in rdf.points().step_by(4) {
        println!("{:>8.3} {:>10.4}", r, g);
    }

    let half = sampler.sim_box().half_length();
    println!("\n{:>8} {:>10}", "r", "exp(-βU)");
    for (r, g) in dilute_limit(&lj, settings.beta, 0.9, half, 200)?
        .into_iter()
        .step_by(20)
    {
        println!("{:>8.3} {:>10.4}", r, g);
    }

    println!("\nTry lowering the density to see g(r) approach exp(-βU):");
    println!("  ρ = 0.05 → dilute gas, single weak peak");
    println!("  ρ = 0.8  → dense liquid, shell structure");
    Ok(())
}
