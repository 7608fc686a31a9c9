//! # FitnessHistory
//!
//! Append-only record of per-iteration telemetry: the best and average
//! fitness of every completed generation/iteration, index 0 being the
//! initial evaluation before any evolution step. Consumed by external
//! plotting and reporting through [`crate::engine::RunOutcome`].

/// Best and average fitness per iteration.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct FitnessHistory {
    best: Vec<f64>,
    avg: Vec<f64>,
}

impl FitnessHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one iteration's record.
    pub fn record(&mut self, best: f64, avg: f64) {
        self.best.push(best);
        self.avg.push(avg);
    }

    /// Best fitness per iteration, index 0 = initial evaluation.
    pub fn best(&self) -> &[f64] {
        &self.best
    }

    /// Average fitness per iteration, index 0 = initial evaluation.
    pub fn avg(&self) -> &[f64] {
        &self.avg
    }

    /// Number of recorded iterations.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
