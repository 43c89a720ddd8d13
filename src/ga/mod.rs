//! Genetic Algorithm engine.
//!
//! A generic, domain-agnostic GA built on a trait-based abstraction.
//! Users define their problem by implementing [`GaProblem`], which specifies
//! how to create, evaluate, crossover, and mutate genomes.
//!
//! # Key Types
//!
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//! - [`Candidate`]: Genome with fitness computed once at construction
//! - [`GaConfig`]: Loop parameters (population size, generations, policies)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best candidate, final population and per-generation stats
//!
//! # Loop
//!
//! Each generation keeps half of the population (see [`SurvivorSelection`]),
//! refills a pool of `population_size` children by uniform parent choice,
//! crossover and optional mutation, then merges survivors with the pool.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::{uniform_parent, SurvivorSelection};
pub use types::{Candidate, Fitness, GaProblem};
