// Ideal-gas reference for the g(r) estimator
//
// Uniform random configurations have g(r) = 1 everywhere. This example shows
// how the estimate tightens as more reference particles are averaged.
// Run with: cargo run --example ideal_gas_reference

use ljmc::{IdealGasSampler, IdealGasSettings, ReferenceMode};

fn worst_deviation(g: &[f64]) -> f64 {
    g.iter().map(|g| (g - 1.0).abs()).fold(0.0, f64::max)
}

fn main() -> ljmc::Result<()> {
    println!("Ideal-Gas g(r) Reference\n");

    for mode in [ReferenceMode::FreshConfiguration, ReferenceMode::CycleReferences] {
        println!("{:?}:", mode);
        let settings = IdealGasSettings {
            mode,
            seed: Some(7),
            ..Default::default()
        };
        let mut sampler = IdealGasSampler::new(settings)?;

        let mut done = 0;
        for target in [10, 100, 497] {
            sampler.run(target - done);
            done = target;
            let rdf = sampler.radial_distribution();
            println!(
                "  {:>4} samples: max |g - 1| = {:.4}",
                target,
                worst_deviation(&rdf.g)
            );
        }
        println!();
    }

    println!("The deviation shrinks roughly as 1/sqrt(samples).");
    Ok(())
}
