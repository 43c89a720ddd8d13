//! Timetable data model.
//!
//! A [`ScheduleGrid`] is a fixed `days × slots` grid; each cell is either
//! empty or holds one [`Assignment`] of a course to an instructor.

use std::collections::HashSet;
use std::fmt;

/// Course identifier, `0..num_courses`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseId(pub usize);

/// Instructor identifier, `0..num_instructors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstructorId(pub usize);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Course_{}", self.0 + 1)
    }
}

impl fmt::Display for InstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prof_{}", self.0 + 1)
    }
}

/// A course taught by an instructor in one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// The scheduled course.
    pub course: CourseId,
    /// The instructor teaching it.
    pub instructor: InstructorId,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(course: CourseId, instructor: InstructorId) -> Self {
        Self { course, instructor }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.course, self.instructor)
    }
}

/// Fixed-size weekly grid of optional assignments.
///
/// Cells are stored day-major: index `day * slots_per_day + slot`.
/// Dimensions are fixed at construction. Duplicate courses and load balance
/// are not enforced here; they are scored by the fitness evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleGrid {
    days: usize,
    slots_per_day: usize,
    cells: Vec<Option<Assignment>>,
}

impl ScheduleGrid {
    /// Creates an empty grid.
    pub fn new(days: usize, slots_per_day: usize) -> Self {
        Self {
            days,
            slots_per_day,
            cells: vec![None; days * slots_per_day],
        }
    }

    /// Number of days.
    pub fn days(&self) -> usize {
        self.days
    }

    /// Number of slots per day.
    pub fn slots_per_day(&self) -> usize {
        self.slots_per_day
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the assignment at `(day, slot)`, if any.
    ///
    /// # Panics
    /// Panics if the position is outside the grid.
    pub fn get(&self, day: usize, slot: usize) -> Option<Assignment> {
        self.cells[self.index(day, slot)]
    }

    /// Sets or clears the cell at `(day, slot)`.
    ///
    /// # Panics
    /// Panics if the position is outside the grid.
    pub fn set(&mut self, day: usize, slot: usize, cell: Option<Assignment>) {
        let idx = self.index(day, slot);
        self.cells[idx] = cell;
    }

    /// Whether the cell at `(day, slot)` is empty.
    pub fn is_empty_at(&self, day: usize, slot: usize) -> bool {
        self.get(day, slot).is_none()
    }

    /// Iterates `(day, slot, cell)` in day-major, slot-minor order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Option<Assignment>)> + '_ {
        let slots = self.slots_per_day;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / slots, i % slots, *cell))
    }

    /// Iterates the occupied cells' assignments in traversal order.
    pub fn assignments(&self) -> impl Iterator<Item = Assignment> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.assignments().count()
    }

    /// Set of courses placed anywhere in the grid.
    pub fn placed_courses(&self) -> HashSet<CourseId> {
        self.assignments().map(|a| a.course).collect()
    }

    /// Whether some course occupies more than one cell.
    pub fn has_duplicate_course(&self) -> bool {
        let mut seen = HashSet::new();
        self.assignments().any(|a| !seen.insert(a.course))
    }

    fn index(&self, day: usize, slot: usize) -> usize {
        assert!(
            day < self.days && slot < self.slots_per_day,
            "cell ({day}, {slot}) outside {}x{} grid",
            self.days,
            self.slots_per_day
        );
        day * self.slots_per_day + slot
    }
}


#[cfg(test)]
pub(crate) mod strategies {
    //! Proptest strategies for grids.

    use super::*;
    use proptest::prelude::*;

    /// Arbitrary grid of up to 4x4 cells over small catalogs, duplicates allowed.
    ///
    /// Yields `(grid, num_courses, num_instructors)`.
    pub(crate) fn arb_grid() -> impl Strategy<Value = (ScheduleGrid, usize, usize)> {
        (1usize..=4, 1usize..=4, 1usize..=8, 1usize..=5).prop_flat_map(
            |(days, slots, courses, instructors)| {
                proptest::collection::vec(
                    proptest::option::of((0..courses, 0..instructors)),
                    days * slots,
                )
                .prop_map(move |cells| {
                    let mut grid = ScheduleGrid::new(days, slots);
                    for (i, cell) in cells.into_iter().enumerate() {
                        let cell = cell.map(|(c, p)| Assignment::new(CourseId(c), InstructorId(p)));
                        grid.set(i / slots, i % slots, cell);
                    }
                    (grid, courses, instructors)
                })
            },
        )
    }
}
