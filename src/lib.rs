pub mod chromosome;
pub mod config;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod gjo;
pub mod history;
pub mod individual;
pub mod operators;
pub mod population;
pub mod rng;

// Re-export commonly used types for convenience
pub use config::{
    CrossoverMethod, Encoding, MutationMethod, OptimizationType, SearchConfig, SelectionMethod,
};
pub use engine::{run_ga, run_gjo, RunOutcome};
pub use error::{Result, SearchError};
pub use fitness::{FitnessFunction, Objective};
pub use individual::Individual;
