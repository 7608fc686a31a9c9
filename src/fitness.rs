//! # Fitness Evaluation
//!
//! The [`FitnessFunction`] trait is the contract between the engines and the
//! objective: anything that can map an individual's decoded values to a
//! scalar cost can drive the search. [`Objective`] provides the built-in test
//! functions, keyed by the identifiers the configuration layer accepts.
//!
//! Degenerate inputs (missing or too-short decoded values) never panic: the
//! evaluator logs a warning and returns `f64::INFINITY`, so a minimizing
//! search naturally discards the individual.
//!
//! ## Example
//!
//! ```rust
//! use evopt::fitness::{FitnessFunction, Objective};
//! use evopt::individual::Individual;
//!
//! let individual = Individual::from_values(vec![5.0, 5.0]);
//! assert_eq!(Objective::MartinAndGaddy.evaluate(&individual), 0.0);
//! ```

use std::str::FromStr;

use tracing::warn;

use crate::error::{Result, SearchError};
use crate::individual::Individual;

/// Maps an individual's decoded value vector to a scalar cost.
///
/// Implementations must not panic on malformed individuals; the convention is
/// to return `f64::INFINITY` so the optimization direction disfavors them.
pub trait FitnessFunction: Send + Sync {
    /// Scores the individual from its decoded values.
    fn evaluate(&self, individual: &Individual) -> f64;
}

/// The built-in objective functions.
///
/// Degenerate individuals receive `f64::INFINITY` regardless of the
/// optimization direction; maximization callers are expected to supply
/// well-formed individuals.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// `f(x) = Σ xᵢ²`, global minimum 0 at the origin.
    Hypersphere,
    /// `f(x1, x2) = (x1 − x2)² + ((x1 + x2 − 10) / 3)²`, global minimum 0 at
    /// (5, 5).
    MartinAndGaddy,
}

impl FitnessFunction for Objective {
    fn evaluate(&self, individual: &Individual) -> f64 {
        match self {
            Objective::Hypersphere => hypersphere(individual),
            Objective::MartinAndGaddy => martin_and_gaddy(individual),
        }
    }
}

impl FromStr for Objective {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hypersphere" => Ok(Objective::Hypersphere),
            "martin_and_gaddy" => Ok(Objective::MartinAndGaddy),
            other => Err(SearchError::Configuration(format!(
                "Unknown objective function: {}",
                other
            ))),
        }
    }
}

fn hypersphere(individual: &Individual) -> f64 {
    let values = &individual.decoded_values;
    if values.is_empty() {
        warn!("hypersphere: individual has no decoded values");
        return f64::INFINITY;
    }
    values.iter().map(|x| x * x).sum()
}

fn martin_and_gaddy(individual: &Individual) -> f64 {
    let values = &individual.decoded_values;
    if values.len() < 2 {
        warn!(
            len = values.len(),
            "martin_and_gaddy: needs at least 2 decoded values"
        );
        return f64::INFINITY;
    }
    let (x1, x2) = (values[0], values[1]);
    (x1 - x2).powi(2) + ((x1 + x2 - 10.0) / 3.0).powi(2)
}
