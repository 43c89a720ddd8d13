//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! seeding → survivor selection → crossover → mutation → merge → repeat,
//! then returns the best candidate of the final population.

use super::config::GaConfig;
use super::selection::{sort_descending, uniform_parent};
use super::types::{Candidate, Fitness, GaProblem};
use crate::error::{Error, Result};
use crate::random::create_rng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

/// Fitness summary of one population snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index. `0` is the seeded population.
    pub generation: usize,
    /// Highest fitness in the population.
    pub best: f64,
    /// Lowest fitness in the population.
    pub worst: f64,
    /// Mean fitness.
    pub mean: f64,
    /// Number of candidates in the population.
    pub population_size: usize,
}

impl GenerationStats {
    fn from_population<G, F: Fitness>(generation: usize, population: &[Candidate<G, F>]) -> Self {
        let mut best = f64::NEG_INFINITY;
        let mut worst = f64::INFINITY;
        let mut sum = 0.0;
        for c in population {
            let f = c.fitness().to_f64();
            best = best.max(f);
            worst = worst.min(f);
            sum += f;
        }
        let mean = if population.is_empty() {
            0.0
        } else {
            sum / population.len() as f64
        };
        Self {
            generation,
            best,
            worst,
            mean,
            population_size: population.len(),
        }
    }
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<G, F> {
    /// The best candidate of the final population.
    pub best: Candidate<G, F>,

    /// Number of generations executed. Runs always complete, so this equals
    /// `max_generations` and `history.len() - 1`.
    pub generations: usize,

    /// Final population, best-first.
    pub population: Vec<Candidate<G, F>>,

    /// Seeded population stats followed by one entry per generation.
    pub history: Vec<GenerationStats>,
}

impl<G, F: Fitness> GaResult<G, F> {
    /// Fitness of the best candidate.
    pub fn best_fitness(&self) -> F {
        self.best.fitness()
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if `config` fails validation and
    /// [`Error::EmptyPopulation`] if no candidate is left at convergence.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Genome, P::Fitness>> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);

        // Seed
        let genomes: Vec<P::Genome> = (0..config.population_size)
            .map(|_| problem.create_genome(&mut rng))
            .collect();
        let mut population = score_all(problem, genomes, config.parallel);

        let mut history = Vec::with_capacity(config.max_generations + 1);
        let seeded = GenerationStats::from_population(0, &population);
        info!(
            seed,
            population = population.len(),
            best = seeded.best,
            "seeded population"
        );
        history.push(seeded);

        // Evolve
        for gen in 1..=config.max_generations {
            population = next_generation(problem, config, population, &mut rng);

            let stats = GenerationStats::from_population(gen, &population);
            debug!(
                generation = gen,
                best = stats.best,
                worst = stats.worst,
                mean = stats.mean,
                population = stats.population_size,
                "generation complete"
            );
            history.push(stats);
        }

        // Converge
        sort_descending(&mut population);
        let best = population.first().cloned().ok_or(Error::EmptyPopulation)?;
        info!(
            generations = config.max_generations,
            best = best.fitness().to_f64(),
            "search converged"
        );

        Ok(GaResult {
            best,
            generations: config.max_generations,
            population,
            history,
        })
    }
}

/// Runs one generational step.
fn next_generation<P: GaProblem, R: Rng>(
    problem: &P,
    config: &GaConfig,
    population: Vec<Candidate<P::Genome, P::Fitness>>,
    rng: &mut R,
) -> Vec<Candidate<P::Genome, P::Fitness>> {
    let survivors = config
        .survivor_selection
        .survivors(population, config.survivor_count());

    let mut offspring = Vec::with_capacity(config.population_size);
    while offspring.len() < config.population_size {
        let p1 = uniform_parent(&survivors, rng);
        let p2 = uniform_parent(&survivors, rng);
        let mut child = problem.crossover(p1.genome(), p2.genome(), rng);

        if rng.random_range(0.0..1.0) < config.mutation_rate {
            let mutated = problem.mutate(&child, rng);
            if config.keep_mutated_child {
                child = mutated;
            }
        }

        offspring.push(child);
    }

    let mut next = survivors;
    next.extend(score_all(problem, offspring, config.parallel));

    if config.truncate_population {
        sort_descending(&mut next);
        next.truncate(config.population_size);
    }
    next
}

/// Scores genomes into candidates, preserving order.
#[cfg(feature = "parallel")]
fn score_all<P: GaProblem>(
    problem: &P,
    genomes: Vec<P::Genome>,
    parallel: bool,
) -> Vec<Candidate<P::Genome, P::Fitness>> {
    if parallel {
        genomes
            .into_par_iter()
            .map(|g| Candidate::evaluate(problem, g))
            .collect()
    } else {
        genomes
            .into_iter()
            .map(|g| Candidate::evaluate(problem, g))
            .collect()
    }
}

/// Scores genomes into candidates, preserving order.
#[cfg(not(feature = "parallel"))]
fn score_all<P: GaProblem>(
    problem: &P,
    genomes: Vec<P::Genome>,
    _parallel: bool,
) -> Vec<Candidate<P::Genome, P::Fitness>> {
    genomes
        .into_iter()
        .map(|g| Candidate::evaluate(problem, g))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
