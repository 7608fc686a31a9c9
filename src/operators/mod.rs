//! # Operator Library
//!
//! Stateless genetic operators, grouped by family. Selection and crossover
//! return new values and never mutate their inputs; mutation and inversion
//! mutate in place by contract and must only be applied to offspring owned
//! exclusively by the new generation.

pub mod crossover;
pub mod inversion;
pub mod mutation;
pub mod selection;
