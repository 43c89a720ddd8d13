//! Timetable problem configuration.

use crate::error::{Error, Result};

/// Problem constants for a timetable search.
///
/// Loop parameters (population size, generation count) live in
/// [`GaConfig`](crate::ga::GaConfig).
///
/// # Defaults
///
/// ```
/// use u_timetable::timetable::TimetableConfig;
///
/// let config = TimetableConfig::default();
/// assert_eq!(config.num_days, 5);
/// assert_eq!(config.slots_per_day, 4);
/// assert_eq!(config.num_courses, 25);
/// assert_eq!(config.num_instructors, 12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimetableConfig {
    /// Teaching days per week.
    pub num_days: usize,

    /// Time slots per day.
    pub slots_per_day: usize,

    /// Size of the course catalog.
    pub num_courses: usize,

    /// Size of the instructor catalog.
    pub num_instructors: usize,

    /// Probability that crossover takes a cell from the first parent.
    pub crossover_rate: f64,

    /// Probability that the mutation operator attempts an insertion.
    pub mutation_rate: f64,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            num_days: 5,
            slots_per_day: 4,
            num_courses: 25,
            num_instructors: 12,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
        }
    }
}

impl TimetableConfig {
    /// Sets the grid dimensions.
    pub fn with_grid(mut self, days: usize, slots_per_day: usize) -> Self {
        self.num_days = days;
        self.slots_per_day = slots_per_day;
        self
    }

    /// Sets the course catalog size.
    pub fn with_courses(mut self, n: usize) -> Self {
        self.num_courses = n;
        self
    }

    /// Sets the instructor catalog size.
    pub fn with_instructors(mut self, n: usize) -> Self {
        self.num_instructors = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.num_days * self.slots_per_day
    }

    /// Evenly balanced number of cells per instructor.
    pub fn ideal_load(&self) -> f64 {
        self.cell_count() as f64 / self.num_instructors as f64
    }

    /// Validates the configuration.
    ///
    /// Zero instructors is rejected here so the ideal-load division can
    /// never see a zero divisor.
    pub fn validate(&self) -> Result<()> {
        if self.num_days == 0 {
            return Err(Error::invalid("num_days", "must be at least 1"));
        }
        if self.slots_per_day == 0 {
            return Err(Error::invalid("slots_per_day", "must be at least 1"));
        }
        if self.num_courses == 0 {
            return Err(Error::invalid("num_courses", "must be at least 1"));
        }
        if self.num_instructors == 0 {
            return Err(Error::invalid("num_instructors", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(Error::invalid("crossover_rate", "must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::invalid("mutation_rate", "must be within [0, 1]"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TimetableConfig::default();
        assert_eq!(config.num_days, 5);
        assert_eq!(config.slots_per_day, 4);
        assert_eq!(config.num_courses, 25);
        assert_eq!(config.num_instructors, 12);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = TimetableConfig::default()
            .with_grid(1, 2)
            .with_courses(2)
            .with_instructors(2)
            .with_crossover_rate(1.5)
            .with_mutation_rate(-0.5);

        assert_eq!(config.cell_count(), 2);
        assert_eq!(config.num_courses, 2);
        assert_eq!(config.num_instructors, 2);
        assert!((config.crossover_rate - 1.0).abs() < 1e-10);
        assert!(config.mutation_rate.abs() < 1e-10);
    }

    #[test]
    fn test_ideal_load() {
        let config = TimetableConfig::default();
        assert!((config.ideal_load() - 20.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_zero_instructors() {
        let err = TimetableConfig::default()
            .with_instructors(0)
            .validate()
            .unwrap_err();
        assert_eq!(err, Error::invalid("num_instructors", "must be at least 1"));
    }

    #[test]
    fn test_validate_zero_dimensions() {
        assert!(TimetableConfig::default().with_grid(0, 4).validate().is_err());
        assert!(TimetableConfig::default().with_grid(5, 0).validate().is_err());
        assert!(TimetableConfig::default().with_courses(0).validate().is_err());
    }

    #[test]
    fn test_validate_rate_set_directly() {
        let config = TimetableConfig {
            crossover_rate: f64::NAN,
            ..TimetableConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
