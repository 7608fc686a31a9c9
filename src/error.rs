//! # Error Types
//!
//! This module defines the error types for the optimization engine. Fatal
//! conditions (invalid configuration, empty populations) surface as
//! [`SearchError`] values; recoverable data-level anomalies are handled by the
//! operators themselves, which log a warning and degrade to a safe default.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use evopt::error::{Result, SearchError};
//!
//! fn check_population(size: usize) -> Result<()> {
//!     if size == 0 {
//!         return Err(SearchError::EmptyPopulation);
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running an
/// optimization.
///
/// Only structural problems are reported through this enum. Malformed
/// chromosome operations (out-of-range positions, too-short chromosomes)
/// degrade locally with a logged warning and never escalate to an error.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population or swarm is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness calculation fails.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when random number generation fails.
    #[error("Random generation error: {0}")]
    RandomGeneration(String),

    /// Error that occurs when a value lies outside the configured search
    /// bounds.
    #[error("Bounds error: {0}")]
    OutOfBounds(String),

    /// Error that occurs when NaN or infinity values are encountered where a
    /// finite number is required.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),
}

/// A specialized Result type for optimization operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `SearchError`.
pub type Result<T> = std::result::Result<T, SearchError>;
