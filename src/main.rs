//! Lennard-Jones Monte Carlo command-line interface
//!
//! Runs the Metropolis sampler (or the ideal-gas reference) from a YAML
//! configuration and reports g(r).

use color_eyre::eyre::Result;

mod app;

use app::LjmcApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    LjmcApplication::from_cli()?.run()
}
