pub mod config;
pub mod error;
pub mod histogram;
pub mod ideal_gas;
pub mod io;
pub mod lj_pot;
pub mod pbc;
pub mod rdf;
pub mod replica;
pub mod sampler;

pub use error::{Result, SimulationError};
pub use histogram::PairHistogram;
pub use ideal_gas::{IdealGasSampler, IdealGasSettings, ReferenceMode};
pub use lj_pot::{LennardJones, NoInteraction, PairPotential};
pub use pbc::SimulationBox;
pub use rdf::{dilute_limit, RadialDistribution};
pub use replica::{run_chain, run_replicas, ReplicaSummary, RunPlan};
pub use sampler::{MetropolisSampler, MoveStatistics, Phase, SamplerSettings};
