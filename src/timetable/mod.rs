//! Weekly course timetabling.
//!
//! Assigns courses from a fixed catalog to a `days × slots` grid, each with
//! an instructor, and scores grids by two soft constraints:
//!
//! - no course appears twice in the week
//! - instructor load stays close to `cells / num_instructors`
//!
//! # Key Types
//!
//! - [`ScheduleGrid`]: fixed grid of optional [`Assignment`]s
//! - [`TimetableConfig`]: catalog sizes, grid shape, operator rates
//! - [`TimetableProblem`]: [`GaProblem`](crate::ga::GaProblem) implementation
//! - [`TimetableReport`]: console rendering of the best grid
//!
//! # Example
//!
//! ```
//! use u_timetable::ga::GaConfig;
//! use u_timetable::timetable::{solve, TimetableConfig};
//!
//! let ga = GaConfig::default()
//!     .with_population_size(20)
//!     .with_max_generations(5)
//!     .with_seed(1);
//! let result = solve(&TimetableConfig::default(), &ga).unwrap();
//! assert_eq!(result.generations, 5);
//! ```

mod config;
mod fitness;
mod operators;
mod problem;
mod report;
mod types;

pub use config::TimetableConfig;
pub use fitness::{evaluate, FitnessBreakdown};
pub use operators::{insertion_mutation, random_grid, uniform_crossover};
pub use problem::{TimetableCandidate, TimetableProblem};
pub use report::{day_name, TimetableReport};
pub use types::{Assignment, CourseId, InstructorId, ScheduleGrid};

use crate::error::Result;
use crate::ga::{GaConfig, GaResult, GaRunner};

/// Runs a complete timetable search.
///
/// Validates both configurations, evolves for `ga.max_generations`
/// generations and returns the best grid with run statistics.
pub fn solve(config: &TimetableConfig, ga: &GaConfig) -> Result<GaResult<ScheduleGrid, i64>> {
    let problem = TimetableProblem::new(config.clone())?;
    GaRunner::run(&problem, ga)
}
