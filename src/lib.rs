//! Weekly course timetabling with a genetic algorithm.
//!
//! Provides:
//!
//! - **GA engine** ([`ga`]): a generic, trait-based evolutionary loop with
//!   truncation survivor selection, uniform parent choice, crossover and
//!   mutation, and per-generation statistics.
//! - **Timetabling** ([`timetable`]): the day × slot grid model, the
//!   conflict and load-balance fitness, the timetable operators, and a
//!   console report.
//!
//! # Architecture
//!
//! The [`ga`] module knows nothing about timetables. [`timetable`] plugs into
//! it by implementing [`ga::GaProblem`]. All randomness flows through an
//! explicit RNG built by [`random::create_rng`], so seeded runs are
//! reproducible.
//!
//! # Features
//!
//! - `parallel`: score each generation's new genomes on rayon.
//! - `serde`: `Serialize`/`Deserialize` for grids, configs and statistics.

pub mod error;
pub mod ga;
pub mod random;
pub mod timetable;

pub use error::{Error, Result};
