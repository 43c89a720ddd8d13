//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! Problem-specific rates (such as the per-cell crossover bias of a
//! timetable) live with the problem, not here.

use super::selection::SurvivorSelection;
use crate::error::{Error, Result};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::{GaConfig, SurvivorSelection};
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_max_generations(25)
///     .with_survivor_selection(SurvivorSelection::Fittest)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Target number of candidates per generation. Half of it survives
    /// each generation, so it must be at least 2.
    pub population_size: usize,

    /// Number of generations to run. The loop always runs exactly this many.
    pub max_generations: usize,

    /// Probability that a freshly crossed child is passed to mutation.
    pub mutation_rate: f64,

    /// Which half of the sorted population survives.
    pub survivor_selection: SurvivorSelection,

    /// Whether a mutated child replaces the original child in the pool.
    ///
    /// When `false`, mutation is still computed (consuming random draws) but
    /// the unmutated child joins the pool.
    pub keep_mutated_child: bool,

    /// Whether the merged population is cut back to `population_size`,
    /// keeping the fittest.
    ///
    /// When `false`, each generation holds `population_size / 2 +
    /// population_size` candidates.
    pub truncate_population: bool,

    /// Whether to score genomes in parallel using rayon.
    ///
    /// Ignored unless the crate is built with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            mutation_rate: 0.1,
            survivor_selection: SurvivorSelection::default(),
            keep_mutated_child: true,
            truncate_population: true,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the survivor selection policy.
    pub fn with_survivor_selection(mut self, selection: SurvivorSelection) -> Self {
        self.survivor_selection = selection;
        self
    }

    /// Sets whether mutated children replace their originals.
    pub fn with_keep_mutated_child(mut self, keep: bool) -> Self {
        self.keep_mutated_child = keep;
        self
    }

    /// Sets whether the merged population is truncated.
    pub fn with_truncate_population(mut self, truncate: bool) -> Self {
        self.truncate_population = truncate;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reference-behavior preset.
    ///
    /// Keeps the weakest half, discards mutation results and lets the
    /// population grow to `population_size / 2 + population_size`.
    pub fn reference() -> Self {
        Self {
            survivor_selection: SurvivorSelection::Weakest,
            keep_mutated_child: false,
            truncate_population: false,
            ..Self::default()
        }
    }

    /// Number of survivors kept each generation.
    pub fn survivor_count(&self) -> usize {
        self.population_size / 2
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::invalid("population_size", "must be at least 2"));
        }
        if self.max_generations == 0 {
            return Err(Error::invalid("max_generations", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::invalid("mutation_rate", "must be within [0, 1]"));
        }
        Ok(())
    }
}
