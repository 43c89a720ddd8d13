//! Timetable fitness evaluation.
//!
//! The score is a negated penalty (higher is better, `0` is the ceiling):
//!
//! - **Conflicts**: every occurrence of a course after its first one in
//!   day-major traversal order.
//! - **Load penalty**: `Σ |load(i) − ideal|` over instructors with at least
//!   one assignment, where `ideal = cells / num_instructors`. The sum is
//!   truncated toward zero. Idle instructors are not penalized.
//!
//! The load term is computed exactly in integers as
//! `Σ |load(i) · n − cells| / n`, so the score of a grid never depends on
//! the order instructors are visited in.

use std::collections::{HashMap, HashSet};

use super::types::ScheduleGrid;

/// Components of a timetable penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FitnessBreakdown {
    /// Repeated course placements.
    pub conflicts: i64,
    /// Truncated instructor load imbalance.
    pub load_penalty: i64,
}

impl FitnessBreakdown {
    /// Scores `grid` against a catalog of `num_instructors` instructors.
    ///
    /// With `num_instructors == 0` there is no ideal load and the load term
    /// is zero. Validated configurations never reach that case.
    pub fn of(grid: &ScheduleGrid, num_instructors: usize) -> Self {
        let mut seen = HashSet::new();
        let mut loads: HashMap<_, u64> = HashMap::new();
        let mut conflicts = 0i64;

        for cell in grid.assignments() {
            if !seen.insert(cell.course) {
                conflicts += 1;
            }
            *loads.entry(cell.instructor).or_insert(0) += 1;
        }

        let load_penalty =
            load_penalty(loads.values().copied(), grid.cell_count(), num_instructors);
        Self {
            conflicts,
            load_penalty,
        }
    }

    /// Total penalty.
    pub fn penalty(&self) -> i64 {
        self.conflicts.saturating_add(self.load_penalty)
    }

    /// Fitness score, `-penalty`.
    pub fn score(&self) -> i64 {
        -self.penalty()
    }
}

/// Truncated load imbalance, `⌊Σ |load · n − cells| / n⌋`.
fn load_penalty(loads: impl Iterator<Item = u64>, cells: usize, num_instructors: usize) -> i64 {
    let n = num_instructors as u64;
    if n == 0 {
        return 0;
    }
    let cells = cells as u64;
    let scaled: u64 = loads
        .map(|load| load.saturating_mul(n).abs_diff(cells))
        .fold(0, u64::saturating_add);
    i64::try_from(scaled / n).unwrap_or(i64::MAX)
}

/// Scores a grid. Higher is better; never positive.
pub fn evaluate(grid: &ScheduleGrid, num_instructors: usize) -> i64 {
    FitnessBreakdown::of(grid, num_instructors).score()
}
