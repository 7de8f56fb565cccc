mod report;
mod runner;

use self::runner::{run_ideal_gas, run_lennard_jones};

use self::report::{report_ideal_gas_summary, report_lj_summary};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use ljmc::config::{Args, Config, Mode};
use ljmc::io::{setup_output, write_rdf_table_to_file};
use tracing::info;

pub struct LjmcApplication {
    args: Args,
    config: Config,
}

impl LjmcApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_ref());
        info!("Configuration loaded:\n{:?}", self.config);

        match self.config.mode {
            Mode::LennardJones => {
                info!("Sampling the 2D Lennard-Jones fluid");
                let outcome = run_lennard_jones(&self.config)?;
                report_lj_summary(&outcome, &self.config);
                if let Some(path) = self.args.table.as_ref() {
                    write_rdf_table_to_file(path, &outcome.summary.rdf, &outcome.dilute_limit)
                        .wrap_err_with(|| format!("Unable to write g(r) table: {}", path))?;
                }
            }
            Mode::IdealGas => {
                info!("Sampling the ideal-gas reference");
                let rdf = run_ideal_gas(&self.config)?;
                report_ideal_gas_summary(&rdf, &self.config);
                if let Some(path) = self.args.table.as_ref() {
                    write_rdf_table_to_file(path, &rdf, &[])
                        .wrap_err_with(|| format!("Unable to write g(r) table: {}", path))?;
                }
            }
        }

        Ok(())
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let config = match args.config_file.as_ref() {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("Unable to load configuration file: {}", path))?,
        None => Config::default(),
    };

    let config = config.apply_overrides(args);
    config
        .validate()
        .wrap_err("Invalid parameters after command-line overrides")?;
    Ok(config)
}
