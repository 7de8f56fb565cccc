//! Configuration management for Monte Carlo runs
//!
//! This module provides structures for parsing YAML configuration files
//! and command-line arguments. Every field has a default, so a run needs
//! neither a file nor any flag.

use crate::error::{Result, SimulationError};
use crate::ideal_gas::{IdealGasSettings, ReferenceMode};
use crate::lj_pot::LennardJones;
use crate::replica::RunPlan;
use crate::sampler::SamplerSettings;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command-line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "ljmc")]
#[command(about = "Metropolis Monte Carlo sampler for the 2D Lennard-Jones fluid", long_about = None)]
pub struct Args {
    /// Path to a YAML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Log file path (logs go to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the g(r) table to this file
    #[arg(short, long)]
    pub table: Option<String>,

    /// Which system to sample
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Number of particles (overrides config file)
    #[arg(long)]
    pub n_particles: Option<usize>,

    /// Number density (overrides config file)
    #[arg(long)]
    pub density: Option<f64>,

    /// Inverse temperature (overrides config file)
    #[arg(long)]
    pub beta: Option<f64>,

    /// Random seed (overrides config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Equilibration trial moves (overrides config file)
    #[arg(long)]
    pub equilibration_steps: Option<usize>,

    /// Number of sampled configurations (overrides config file)
    #[arg(long)]
    pub n_samples: Option<usize>,

    /// Independent replica chains run in parallel (overrides config file)
    #[arg(long)]
    pub replicas: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Interacting Lennard-Jones fluid
    LennardJones,
    /// Uncorrelated uniform configurations
    IdealGas,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_mode")]
    pub mode: Mode,
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub potential: PotentialConfig,
    #[serde(default)]
    pub monte_carlo: MonteCarloConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub ideal_gas: IdealGasConfig,
}

/// Ensemble size and density
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_n_particles")]
    pub n_particles: usize,
    #[serde(default = "default_density")]
    pub density: f64,
}

/// Lennard-Jones parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotentialConfig {
    /// Well depth ε
    #[serde(default = "default_unit")]
    pub epsilon: f64,
    /// Collision diameter σ
    #[serde(default = "default_unit")]
    pub sigma: f64,
    /// Cutoff distance (default: 2.5σ)
    #[serde(default = "default_lj_cutoff")]
    pub cutoff: f64,
}

/// Metropolis chain parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    /// Inverse temperature β
    #[serde(default = "default_unit")]
    pub beta: f64,
    /// Maximum displacement per axis
    #[serde(default = "default_max_displacement")]
    pub max_displacement: f64,
    #[serde(default = "default_equilibration_steps")]
    pub equilibration_steps: usize,
    #[serde(default = "default_n_samples")]
    pub n_samples: usize,
    /// Trial moves between consecutive samples
    #[serde(default = "default_decorrelation_steps")]
    pub decorrelation_steps: usize,
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,
    #[serde(default = "default_replicas")]
    pub replicas: usize,
    /// Progress log interval in trial moves (0 disables)
    #[serde(default = "default_log_interval")]
    pub log_interval: usize,
}

/// Histogram and reference-curve settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_bin_width")]
    pub bin_width: f64,
    /// Lower end of the exp(−βU) grid, in units of σ
    #[serde(default = "default_theory_r_min")]
    pub theory_r_min: f64,
    #[serde(default = "default_theory_points")]
    pub theory_points: usize,
}

/// Ideal-gas reference run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealGasConfig {
    #[serde(default = "default_ideal_n_particles")]
    pub n_particles: usize,
    #[serde(default = "default_unit")]
    pub box_length: f64,
    #[serde(default = "default_ideal_n_bins")]
    pub n_bins: usize,
    #[serde(default = "default_ideal_n_samples")]
    pub n_samples: usize,
    /// Reuse one configuration and cycle through reference particles
    #[serde(default)]
    pub cycle_references: bool,
}

// Default value functions
fn default_mode() -> Mode {
    Mode::LennardJones
}
fn default_n_particles() -> usize {
    100
}
fn default_density() -> f64 {
    0.8
}
fn default_unit() -> f64 {
    1.0
}
fn default_lj_cutoff() -> f64 {
    2.5
}
fn default_max_displacement() -> f64 {
    0.1
}
fn default_equilibration_steps() -> usize {
    10_000
}
fn default_n_samples() -> usize {
    5_000
}
fn default_decorrelation_steps() -> usize {
    10
}
fn default_seed() -> Option<u64> {
    Some(42)
}
fn default_replicas() -> usize {
    1
}
fn default_log_interval() -> usize {
    1000
}
fn default_bin_width() -> f64 {
    0.05
}
fn default_theory_r_min() -> f64 {
    0.9
}
fn default_theory_points() -> usize {
    200
}
fn default_ideal_n_particles() -> usize {
    500
}
fn default_ideal_n_bins() -> usize {
    50
}
fn default_ideal_n_samples() -> usize {
    497
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            system: SystemConfig::default(),
            potential: PotentialConfig::default(),
            monte_carlo: MonteCarloConfig::default(),
            analysis: AnalysisConfig::default(),
            ideal_gas: IdealGasConfig::default(),
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            n_particles: default_n_particles(),
            density: default_density(),
        }
    }
}

impl Default for PotentialConfig {
    fn default() -> Self {
        Self {
            epsilon: default_unit(),
            sigma: default_unit(),
            cutoff: default_lj_cutoff(),
        }
    }
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            beta: default_unit(),
            max_displacement: default_max_displacement(),
            equilibration_steps: default_equilibration_steps(),
            n_samples: default_n_samples(),
            decorrelation_steps: default_decorrelation_steps(),
            seed: default_seed(),
            replicas: default_replicas(),
            log_interval: default_log_interval(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bin_width: default_bin_width(),
            theory_r_min: default_theory_r_min(),
            theory_points: default_theory_points(),
        }
    }
}

impl Default for IdealGasConfig {
    fn default() -> Self {
        Self {
            n_particles: default_ideal_n_particles(),
            box_length: default_unit(),
            n_bins: default_ideal_n_bins(),
            n_samples: default_ideal_n_samples(),
            cycle_references: false,
        }
    }
}

impl Config {
    /// Load configuration from YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Command-line values take precedence over the file
    pub fn apply_overrides(mut self, args: &Args) -> Self {
        if let Some(mode) = args.mode {
            self.mode = mode;
        }
        if let Some(n) = args.n_particles {
            self.system.n_particles = n;
        }
        if let Some(density) = args.density {
            self.system.density = density;
        }
        if let Some(beta) = args.beta {
            self.monte_carlo.beta = beta;
        }
        if let Some(seed) = args.seed {
            self.monte_carlo.seed = Some(seed);
        }
        if let Some(steps) = args.equilibration_steps {
            self.monte_carlo.equilibration_steps = steps;
        }
        if let Some(samples) = args.n_samples {
            self.monte_carlo.n_samples = samples;
            self.ideal_gas.n_samples = samples;
        }
        if let Some(replicas) = args.replicas {
            self.monte_carlo.replicas = replicas;
        }
        self
    }

    /// Reject malformed parameters before any move is made
    pub fn validate(&self) -> Result<()> {
        self.potential()?;
        self.sampler_settings().validate()?;

        let l = self.sampler_settings().box_length();
        if self.analysis.bin_width >= 0.5 * l {
            return Err(invalid(format!(
                "bin width {} leaves no bins below half the box length {:.4}",
                self.analysis.bin_width,
                0.5 * l
            )));
        }
        if self.monte_carlo.replicas == 0 {
            return Err(invalid("replicas must be at least 1".to_string()));
        }
        if self.analysis.theory_points == 0 {
            return Err(invalid("theory_points must be positive".to_string()));
        }
        if !self.analysis.theory_r_min.is_finite() || self.analysis.theory_r_min <= 0.0 {
            return Err(invalid("theory_r_min must be positive".to_string()));
        }

        let ideal = &self.ideal_gas;
        if ideal.n_particles < 2 {
            return Err(invalid("ideal gas needs at least two particles".to_string()));
        }
        if !ideal.box_length.is_finite() || ideal.box_length <= 0.0 {
            return Err(invalid("ideal gas box length must be positive".to_string()));
        }
        if ideal.n_bins == 0 {
            return Err(invalid("ideal gas needs at least one bin".to_string()));
        }

        Ok(())
    }

    pub fn potential(&self) -> Result<LennardJones> {
        LennardJones::new(
            self.potential.epsilon,
            self.potential.sigma,
            self.potential.cutoff,
        )
    }

    pub fn sampler_settings(&self) -> SamplerSettings {
        SamplerSettings {
            n_particles: self.system.n_particles,
            density: self.system.density,
            beta: self.monte_carlo.beta,
            max_displacement: self.monte_carlo.max_displacement,
            bin_width: self.analysis.bin_width,
            seed: self.monte_carlo.seed,
        }
    }

    pub fn run_plan(&self) -> RunPlan {
        RunPlan {
            equilibration_steps: self.monte_carlo.equilibration_steps,
            n_samples: self.monte_carlo.n_samples,
            decorrelation_steps: self.monte_carlo.decorrelation_steps,
            log_interval: self.monte_carlo.log_interval,
        }
    }

    pub fn ideal_gas_settings(&self) -> IdealGasSettings {
        IdealGasSettings {
            n_particles: self.ideal_gas.n_particles,
            box_length: self.ideal_gas.box_length,
            n_bins: self.ideal_gas.n_bins,
            mode: if self.ideal_gas.cycle_references {
                ReferenceMode::CycleReferences
            } else {
                ReferenceMode::FreshConfiguration
            },
            seed: self.monte_carlo.seed,
        }
    }
}

fn invalid(message: String) -> SimulationError {
    SimulationError::InvalidParameter(message)
}
