//! Selection operators.
//!
//! All three methods take the evaluated population and return a mating pool
//! of cloned individuals. Roulette draws with replacement and a tournament is
//! run once per pool slot, so the same individual may appear several times in
//! the pool.

use crate::config::OptimizationType;
use crate::error::{Result, SearchError};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Selects the top `num_selected` individuals by fitness under the given
/// direction.
///
/// The sort is stable, so ties keep their original population order. Returns
/// `min(num_selected, population.len())` individuals.
pub fn best_selection(
    population: &[Individual],
    num_selected: usize,
    direction: OptimizationType,
) -> Vec<Individual> {
    let mut sorted: Vec<&Individual> = population.iter().collect();
    sorted.sort_by(|a, b| direction.compare(a.fitness, b.fitness));
    sorted
        .into_iter()
        .take(num_selected)
        .cloned()
        .collect()
}

/// Roulette-wheel selection with weights proportional to `1 / fitness`.
///
/// This weighting only makes sense for minimization with strictly positive
/// fitness values; any non-positive fitness in the pool is rejected as a
/// configuration error rather than silently misweighted.
pub fn roulette_selection(
    population: &[Individual],
    num_selected: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Individual>> {
    if population.is_empty() {
        return Err(SearchError::EmptyPopulation);
    }
    if population.iter().any(|ind| ind.fitness <= 0.0) {
        return Err(SearchError::Configuration(
            "Roulette selection requires strictly positive fitness values".to_string(),
        ));
    }

    let total: f64 = population.iter().map(|ind| 1.0 / ind.fitness).sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(SearchError::InvalidNumericValue(format!(
            "Roulette selection: degenerate total weight {}",
            total
        )));
    }

    let mut cumulative = Vec::with_capacity(population.len());
    let mut acc = 0.0;
    for individual in population {
        acc += (1.0 / individual.fitness) / total;
        cumulative.push(acc);
    }
    // Guard the last slot against floating-point shortfall.
    if let Some(last) = cumulative.last_mut() {
        *last = 1.0;
    }

    let mut selected = Vec::with_capacity(num_selected);
    for _ in 0..num_selected {
        let r = rng.uniform(0.0, 1.0);
        let idx = cumulative
            .iter()
            .position(|&p| r <= p)
            .unwrap_or(population.len() - 1);
        selected.push(population[idx].clone());
    }
    Ok(selected)
}

/// Tournament selection: `population.len()` independent tournaments of
/// `tournament_size` *distinct* participants; the winner of each tournament
/// joins the pool.
///
/// Participants are distinct within a tournament, so a tournament as large as
/// the population always contains (and is won by) the population best. The
/// same individual may still win several tournaments.
pub fn tournament_selection(
    population: &[Individual],
    tournament_size: usize,
    direction: OptimizationType,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Individual>> {
    if population.is_empty() {
        return Err(SearchError::EmptyPopulation);
    }
    if tournament_size == 0 {
        return Err(SearchError::Configuration(
            "Tournament size must be at least 1".to_string(),
        ));
    }
    if tournament_size > population.len() {
        return Err(SearchError::Configuration(format!(
            "Tournament size ({}) exceeds the population size ({})",
            tournament_size,
            population.len()
        )));
    }

    let mut indices: Vec<usize> = (0..population.len()).collect();
    let mut selected = Vec::with_capacity(population.len());
    for _ in 0..population.len() {
        // Partial Fisher-Yates: the first `tournament_size` slots become a
        // uniform sample without replacement.
        for k in 0..tournament_size {
            let j = k + rng.index(indices.len() - k);
            indices.swap(k, j);
        }
        let mut winner = &population[indices[0]];
        for &idx in &indices[1..tournament_size] {
            let challenger = &population[idx];
            if direction.is_improvement(challenger.fitness, winner.fitness) {
                winner = challenger;
            }
        }
        selected.push(winner.clone());
    }
    Ok(selected)
}
