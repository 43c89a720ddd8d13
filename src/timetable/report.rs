//! Console rendering of a timetable.

use std::fmt;

use super::problem::TimetableCandidate;

const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Name of a 0-based day index.
pub fn day_name(day: usize) -> String {
    match WEEKDAYS.get(day) {
        Some(name) => (*name).to_string(),
        None => format!("Day {}", day + 1),
    }
}

/// Plain-text report of the best timetable.
///
/// One line with the fitness, then one line per cell in day-major order:
///
/// ```text
/// Best fitness: -3
/// Day: Monday, Slot: 1, Assignment: Course_7 / Prof_2
/// Day: Monday, Slot: 2, Assignment: empty
/// ```
pub struct TimetableReport<'a> {
    best: &'a TimetableCandidate,
}

impl<'a> TimetableReport<'a> {
    /// Wraps a candidate for display.
    pub fn new(best: &'a TimetableCandidate) -> Self {
        Self { best }
    }
}

impl fmt::Display for TimetableReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Best fitness: {}", self.best.fitness())?;
        for (day, slot, cell) in self.best.genome().cells() {
            write!(f, "Day: {}, Slot: {}, Assignment: ", day_name(day), slot + 1)?;
            match cell {
                Some(assignment) => writeln!(f, "{assignment}")?,
                None => writeln!(f, "empty")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Candidate;
    use crate::timetable::{
        Assignment, CourseId, InstructorId, ScheduleGrid, TimetableConfig, TimetableProblem,
    };

    #[test]
    fn test_day_names() {
        assert_eq!(day_name(0), "Monday");
        assert_eq!(day_name(4), "Friday");
        assert_eq!(day_name(5), "Day 6");
    }

    #[test]
    fn test_report_lines() {
        let problem = TimetableProblem::new(
            TimetableConfig::default()
                .with_grid(1, 2)
                .with_courses(2)
                .with_instructors(2),
        )
        .unwrap();
        let mut grid = ScheduleGrid::new(1, 2);
        grid.set(0, 0, Some(Assignment::new(CourseId(1), InstructorId(0))));
        let best = Candidate::evaluate(&problem, grid);

        let text = TimetableReport::new(&best).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("Best fitness: {}", best.fitness()));
        assert_eq!(lines[1], "Day: Monday, Slot: 1, Assignment: Course_2 / Prof_1");
        assert_eq!(lines[2], "Day: Monday, Slot: 2, Assignment: empty");
    }
}
