//! Survivor and parent selection.
//!
//! Each generation keeps half of the population as survivors (truncation
//! selection) and draws parents uniformly, with replacement, from them.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::{Candidate, Fitness};
use rand::Rng;
use std::cmp::Ordering;

/// Which half of the sorted population survives a generation.
///
/// # Examples
///
/// ```
/// use u_timetable::ga::SurvivorSelection;
///
/// assert_eq!(SurvivorSelection::default(), SurvivorSelection::Fittest);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurvivorSelection {
    /// Keep the highest-scoring half.
    #[default]
    Fittest,

    /// Keep the lowest-scoring half.
    ///
    /// Reproduces an ascending sort followed by taking the head of the list,
    /// which discards the best candidates. Useful only for comparing against
    /// runs made with that behavior.
    Weakest,
}

impl SurvivorSelection {
    /// Returns the `count` survivors of `population`.
    ///
    /// The population is consumed and sorted; ties keep their relative order.
    pub fn survivors<G, F: Fitness>(
        &self,
        mut population: Vec<Candidate<G, F>>,
        count: usize,
    ) -> Vec<Candidate<G, F>> {
        match self {
            SurvivorSelection::Fittest => sort_descending(&mut population),
            SurvivorSelection::Weakest => population.sort_by(|a, b| compare(a, b)),
        }
        population.truncate(count);
        population
    }
}

/// Picks a uniformly random parent.
///
/// # Panics
/// Panics if `pool` is empty.
pub fn uniform_parent<'a, G, F, R: Rng>(
    pool: &'a [Candidate<G, F>],
    rng: &mut R,
) -> &'a Candidate<G, F> {
    assert!(!pool.is_empty(), "cannot select from empty pool");
    &pool[rng.random_range(0..pool.len())]
}

/// Sorts best-first (highest fitness first). Stable.
pub(crate) fn sort_descending<G, F: Fitness>(population: &mut [Candidate<G, F>]) {
    population.sort_by(|a, b| compare(b, a));
}

fn compare<G, F: Fitness>(a: &Candidate<G, F>, b: &Candidate<G, F>) -> Ordering {
    a.fitness()
        .partial_cmp(&b.fitness())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::GaProblem;
    use crate::random::create_rng;

    struct Identity;

    impl GaProblem for Identity {
        type Genome = i64;
        type Fitness = i64;

        fn create_genome<R: Rng>(&self, rng: &mut R) -> i64 {
            rng.random_range(-10..10)
        }

        fn evaluate(&self, genome: &i64) -> i64 {
            *genome
        }
    }

    fn population(values: &[i64]) -> Vec<Candidate<i64, i64>> {
        values
            .iter()
            .map(|&v| Candidate::evaluate(&Identity, v))
            .collect()
    }

    fn fitnesses(pop: &[Candidate<i64, i64>]) -> Vec<i64> {
        pop.iter().map(|c| c.fitness()).collect()
    }

    #[test]
    fn test_fittest_keeps_top_half() {
        let pop = population(&[-5, 0, -2, -9, -1, -3]);
        let kept = SurvivorSelection::Fittest.survivors(pop, 3);
        assert_eq!(fitnesses(&kept), vec![0, -1, -2]);
    }

    #[test]
    fn test_weakest_keeps_bottom_half() {
        let pop = population(&[-5, 0, -2, -9, -1, -3]);
        let kept = SurvivorSelection::Weakest.survivors(pop, 3);
        assert_eq!(fitnesses(&kept), vec![-9, -5, -3]);
    }

    #[test]
    fn test_survivors_count_larger_than_population() {
        let pop = population(&[1, 2]);
        let kept = SurvivorSelection::Fittest.survivors(pop, 10);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_uniform_parent_covers_pool() {
        let pool = population(&[1, 2, 3]);
        let mut rng = create_rng(42);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let p = uniform_parent(&pool, &mut rng);
            seen[(p.fitness() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every parent should be drawn");
    }

    #[test]
    #[should_panic(expected = "empty pool")]
    fn test_uniform_parent_empty_panics() {
        let pool: Vec<Candidate<i64, i64>> = Vec::new();
        let mut rng = create_rng(42);
        uniform_parent(&pool, &mut rng);
    }
}
