//! Randomized outcome simulation
//!
//! Models unpredictable downstream behavior for integration-test harnesses:
//! one draw decides whether the whole registration blows up, a second draw
//! decides the attendance status. Neither draw depends on the input.

use crate::error::{Error, Result, SIMULATED_FAILURE_DIAGNOSTIC};
use crate::models::AttendanceStatus;
use crate::random::RandomSource;

/// Minimum accepted confidence score.
pub const CONFIDENCE_THRESHOLD: f64 = 0.95;

/// Draws above this value trigger the simulated critical failure (20%).
pub const CRITICAL_FAILURE_THRESHOLD: f64 = 0.8;

/// Draws above this value assign a non-present status (~34%).
pub const NON_PRESENT_THRESHOLD: f64 = 0.66;

const NON_PRESENT_STATUSES: [AttendanceStatus; 3] = [
    AttendanceStatus::Absent,
    AttendanceStatus::DisciplineNotFound,
    AttendanceStatus::AlreadyPresent,
];

/// Run the two independent random gates and produce a status.
///
/// First gate: a draw above `CRITICAL_FAILURE_THRESHOLD` aborts with the
/// simulated critical failure. Second gate: a draw above
/// `NON_PRESENT_THRESHOLD` picks uniformly among the three non-present
/// statuses; anything else is `Present`.
pub fn simulate_outcome(random: &dyn RandomSource) -> Result<AttendanceStatus> {
    if random.draw() > CRITICAL_FAILURE_THRESHOLD {
        return Err(Error::SimulatedFailure(
            SIMULATED_FAILURE_DIAGNOSTIC.to_string(),
        ));
    }

    if random.draw() > NON_PRESENT_THRESHOLD {
        Ok(NON_PRESENT_STATUSES[random.pick(NON_PRESENT_STATUSES.len())])
    } else {
        Ok(AttendanceStatus::Present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedSource, SeededSource};

    #[test]
    fn draw_above_failure_threshold_aborts() {
        let random = ScriptedSource::new([0.81]);
        let result = simulate_outcome(&random);
        assert!(matches!(result, Err(Error::SimulatedFailure(_))));
        // The status draw never happens on the failure path.
        assert_eq!(random.remaining(), 0);
    }

    #[test]
    fn draw_at_failure_threshold_does_not_abort() {
        let random = ScriptedSource::new([0.8, 0.1]);
        assert_eq!(
            simulate_outcome(&random).unwrap(),
            AttendanceStatus::Present
        );
    }

    #[test]
    fn draw_at_status_threshold_yields_present() {
        let random = ScriptedSource::new([0.5, 0.66]);
        assert_eq!(
            simulate_outcome(&random).unwrap(),
            AttendanceStatus::Present
        );
    }

    #[test]
    fn draw_above_status_threshold_picks_non_present() {
        let random = ScriptedSource::new([0.5, 0.67, 0.0]);
        assert_eq!(simulate_outcome(&random).unwrap(), AttendanceStatus::Absent);

        let random = ScriptedSource::new([0.5, 0.67, 0.4]);
        assert_eq!(
            simulate_outcome(&random).unwrap(),
            AttendanceStatus::DisciplineNotFound
        );

        let random = ScriptedSource::new([0.5, 0.67, 0.99]);
        assert_eq!(
            simulate_outcome(&random).unwrap(),
            AttendanceStatus::AlreadyPresent
        );
    }

    #[test]
    fn seeded_distribution_matches_configured_rates() {
        let random = SeededSource::from_seed(7);
        let total = 20_000;
        let mut failures = 0usize;
        let mut present = 0usize;
        let mut non_present = [0usize; 3];

        for _ in 0..total {
            match simulate_outcome(&random) {
                Err(_) => failures += 1,
                Ok(AttendanceStatus::Present) => present += 1,
                Ok(AttendanceStatus::Absent) => non_present[0] += 1,
                Ok(AttendanceStatus::DisciplineNotFound) => non_present[1] += 1,
                Ok(AttendanceStatus::AlreadyPresent) => non_present[2] += 1,
            }
        }

        let failure_rate = failures as f64 / total as f64;
        assert!(
            (failure_rate - 0.2).abs() < 0.02,
            "failure rate {failure_rate} outside tolerance"
        );

        let successes = total - failures;
        let present_rate = present as f64 / successes as f64;
        assert!(
            (present_rate - 0.66).abs() < 0.02,
            "present rate {present_rate} outside tolerance"
        );

        // The three non-present statuses split the remainder evenly.
        let non_present_total: usize = non_present.iter().sum();
        for count in non_present {
            let share = count as f64 / non_present_total as f64;
            assert!(
                (share - 1.0 / 3.0).abs() < 0.03,
                "status share {share} outside tolerance"
            );
        }
    }
}
