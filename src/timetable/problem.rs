//! Timetable GA problem definition.
//!
//! Implements [`GaProblem`] for weekly course timetabling, bridging the grid
//! model and operators to the generic evolutionary loop.

use rand::Rng;

use super::config::TimetableConfig;
use super::fitness::evaluate;
use super::operators::{insertion_mutation, random_grid, uniform_crossover};
use super::types::ScheduleGrid;
use crate::error::Result;
use crate::ga::{Candidate, GaProblem};

/// A scored timetable.
pub type TimetableCandidate = Candidate<ScheduleGrid, i64>;

/// GA problem definition for timetabling.
///
/// # Example
/// ```
/// use u_timetable::ga::{GaConfig, GaRunner};
/// use u_timetable::timetable::{TimetableConfig, TimetableProblem};
///
/// let problem = TimetableProblem::new(TimetableConfig::default()).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_max_generations(3)
///     .with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert!(result.best_fitness() <= 0);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableProblem {
    config: TimetableConfig,
}

impl TimetableProblem {
    /// Creates a problem after validating `config`.
    pub fn new(config: TimetableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The problem configuration.
    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    /// Builds and scores a random starting timetable.
    pub fn initialize<R: Rng>(&self, rng: &mut R) -> TimetableCandidate {
        Candidate::evaluate(self, self.create_genome(rng))
    }

    /// Crosses two scored timetables into a scored child.
    pub fn cross<R: Rng>(
        &self,
        parent1: &TimetableCandidate,
        parent2: &TimetableCandidate,
        rng: &mut R,
    ) -> TimetableCandidate {
        Candidate::evaluate(self, self.crossover(parent1.genome(), parent2.genome(), rng))
    }

    /// Returns a freshly scored, possibly perturbed copy of `candidate`.
    pub fn perturb<R: Rng>(
        &self,
        candidate: &TimetableCandidate,
        rng: &mut R,
    ) -> TimetableCandidate {
        Candidate::evaluate(self, self.mutate(candidate.genome(), rng))
    }
}

impl GaProblem for TimetableProblem {
    type Genome = ScheduleGrid;
    type Fitness = i64;

    fn create_genome<R: Rng>(&self, rng: &mut R) -> ScheduleGrid {
        random_grid(&self.config, rng)
    }

    fn evaluate(&self, grid: &ScheduleGrid) -> i64 {
        evaluate(grid, self.config.num_instructors)
    }

    fn crossover<R: Rng>(&self, p1: &ScheduleGrid, p2: &ScheduleGrid, rng: &mut R) -> ScheduleGrid {
        uniform_crossover(p1, p2, self.config.crossover_rate, rng)
    }

    fn mutate<R: Rng>(&self, grid: &ScheduleGrid, rng: &mut R) -> ScheduleGrid {
        insertion_mutation(grid, &self.config, rng)
    }
}
