//! Core trait and type definitions for the GA engine.
//!
//! [`GaProblem`] defines the contract between the generic evolutionary loop
//! and a domain-specific problem. [`Candidate`] pairs a genome with its
//! cached fitness.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// **Higher fitness is considered better** (maximization). Penalty-based
/// problems return the negated penalty.
///
/// Built-in implementations exist for `i64` and `f64`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for i64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// Defines a GA optimization problem.
///
/// Users plug their domain into the generic loop by implementing:
///
/// 1. **Initialization**: how to create a random genome
/// 2. **Evaluation**: how to score a genome
/// 3. **Crossover**: how to recombine two parents into one child
/// 4. **Mutation**: how to derive a perturbed copy of a genome
///
/// Operators never modify their inputs; they return new genomes. Scoring is
/// done by the runner through [`Candidate::evaluate`], so a fitness value
/// always belongs to exactly the genome it was computed from.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may score genomes in
/// parallel when the `parallel` feature is enabled.
pub trait GaProblem: Send + Sync {
    /// The genome (solution representation) for this problem.
    type Genome: Clone + Send + Sync;

    /// The fitness type. Higher is better.
    type Fitness: Fitness;

    /// Creates a random genome for the initial population.
    fn create_genome<R: Rng>(&self, rng: &mut R) -> Self::Genome;

    /// Scores a genome.
    ///
    /// Must be pure: the same genome always yields the same fitness.
    fn evaluate(&self, genome: &Self::Genome) -> Self::Fitness;

    /// Produces one child from two parents without modifying them.
    ///
    /// The default implementation clones `parent1` (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Genome,
        _parent2: &Self::Genome,
        _rng: &mut R,
    ) -> Self::Genome {
        parent1.clone()
    }

    /// Returns a perturbed copy of `genome`.
    ///
    /// The default implementation returns an unchanged clone.
    fn mutate<R: Rng>(&self, genome: &Self::Genome, _rng: &mut R) -> Self::Genome {
        genome.clone()
    }
}

/// A genome together with its fitness, computed once at construction.
///
/// Fields are private: a candidate's fitness can never drift from its
/// genome. Changing a genome means building a new candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate<G, F> {
    genome: G,
    fitness: F,
}

impl<G, F: Fitness> Candidate<G, F> {
    /// Scores `genome` with `problem` and wraps both.
    pub fn evaluate<P>(problem: &P, genome: G) -> Self
    where
        P: GaProblem<Genome = G, Fitness = F>,
    {
        let fitness = problem.evaluate(&genome);
        Self { genome, fitness }
    }

    /// The candidate's genome.
    pub fn genome(&self) -> &G {
        &self.genome
    }

    /// The cached fitness.
    pub fn fitness(&self) -> F {
        self.fitness
    }

    /// Consumes the candidate and returns its genome.
    pub fn into_genome(self) -> G {
        self.genome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    struct CountOnes;

    impl GaProblem for CountOnes {
        type Genome = Vec<bool>;
        type Fitness = i64;

        fn create_genome<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
            (0..8).map(|_| rng.random_bool(0.5)).collect()
        }

        fn evaluate(&self, genome: &Vec<bool>) -> i64 {
            genome.iter().filter(|&&b| b).count() as i64
        }
    }

    #[test]
    fn test_candidate_caches_fitness() {
        let c = Candidate::evaluate(&CountOnes, vec![true, false, true]);
        assert_eq!(c.fitness(), 2);
        assert_eq!(c.genome(), &vec![true, false, true]);
        assert_eq!(c.into_genome(), vec![true, false, true]);
    }

    #[test]
    fn test_default_operators_clone() {
        let mut rng = create_rng(42);
        let p1 = CountOnes.create_genome(&mut rng);
        let p2 = vec![false; 8];

        assert_eq!(CountOnes.crossover(&p1, &p2, &mut rng), p1);
        assert_eq!(CountOnes.mutate(&p1, &mut rng), p1);
    }

    #[test]
    fn test_fitness_to_f64() {
        assert_eq!((-3i64).to_f64(), -3.0);
        assert_eq!(1.5f64.to_f64(), 1.5);
    }
}
