//! Timetable genetic operators.
//!
//! All operators are pure with respect to their inputs: they read parent
//! grids and return a new grid. Random draws happen in a fixed order so a
//! seeded run is reproducible.
//!
//! - [`random_grid`]: scatter a shuffled catalog, dropping collisions
//! - [`uniform_crossover`]: per-cell parent choice with a used-course filter
//! - [`insertion_mutation`]: place one unused course in one empty cell

use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use super::config::TimetableConfig;
use super::types::{Assignment, CourseId, InstructorId, ScheduleGrid};

/// Builds a random starting grid.
///
/// The course catalog is shuffled and each course is dropped on a uniformly
/// random cell. If that cell is already taken the course is left out of this
/// grid (no retry), so starting grids are usually partially filled.
///
/// A configuration with no cells or no instructors yields an empty grid.
pub fn random_grid<R: Rng>(config: &TimetableConfig, rng: &mut R) -> ScheduleGrid {
    let mut grid = ScheduleGrid::new(config.num_days, config.slots_per_day);
    if grid.cell_count() == 0 || config.num_instructors == 0 {
        return grid;
    }
    let mut courses: Vec<CourseId> = (0..config.num_courses).map(CourseId).collect();
    courses.shuffle(rng);

    for course in courses {
        let day = rng.random_range(0..config.num_days);
        let slot = rng.random_range(0..config.slots_per_day);
        if grid.is_empty_at(day, slot) {
            let instructor = random_instructor(config, rng);
            grid.set(day, slot, Some(Assignment::new(course, instructor)));
        }
    }
    grid
}

/// Uniform crossover of two equally sized grids.
///
/// Cells are visited day-major. For each cell the first parent's content is
/// taken with probability `crossover_rate`, otherwise the second parent's.
/// The pick is accepted only if it is occupied and its course is not already
/// in the child, so the child never holds a course twice.
///
/// # Panics
/// Panics if the parents have different dimensions.
pub fn uniform_crossover<R: Rng>(
    parent1: &ScheduleGrid,
    parent2: &ScheduleGrid,
    crossover_rate: f64,
    rng: &mut R,
) -> ScheduleGrid {
    assert!(
        parent1.days() == parent2.days() && parent1.slots_per_day() == parent2.slots_per_day(),
        "parents must have equal dimensions"
    );

    let mut child = ScheduleGrid::new(parent1.days(), parent1.slots_per_day());
    let mut used = HashSet::new();

    for (day, slot, first) in parent1.cells() {
        let pick = if rng.random_range(0.0..1.0) < crossover_rate {
            first
        } else {
            parent2.get(day, slot)
        };
        if let Some(cell) = pick {
            if used.insert(cell.course) {
                child.set(day, slot, Some(cell));
            }
        }
    }
    child
}

/// Returns a copy of `grid` with at most one course added.
///
/// With probability `mutation_rate` a random cell and a random unplaced
/// course are drawn; the course is placed (with a random instructor) only if
/// the cell is empty. Otherwise the copy is returned unchanged, as it is for
/// a grid without cells or a catalog without instructors.
pub fn insertion_mutation<R: Rng>(
    grid: &ScheduleGrid,
    config: &TimetableConfig,
    rng: &mut R,
) -> ScheduleGrid {
    let mut out = grid.clone();
    let placed = grid.placed_courses();

    if rng.random_range(0.0..1.0) < config.mutation_rate
        && grid.cell_count() > 0
        && config.num_instructors > 0
    {
        let day = rng.random_range(0..grid.days());
        let slot = rng.random_range(0..grid.slots_per_day());
        let unused: Vec<CourseId> = (0..config.num_courses)
            .map(CourseId)
            .filter(|c| !placed.contains(c))
            .collect();

        if let Some(&course) = unused.choose(rng) {
            if out.is_empty_at(day, slot) {
                let instructor = random_instructor(config, rng);
                out.set(day, slot, Some(Assignment::new(course, instructor)));
            }
        }
    }
    out
}

fn random_instructor<R: Rng>(config: &TimetableConfig, rng: &mut R) -> InstructorId {
    InstructorId(rng.random_range(0..config.num_instructors))
}
