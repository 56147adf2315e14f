//! Shooting efficiency and pace-normalised rates.

/// Possessions every per-75 rate is normalised to.
pub const PER75_BASE: f64 = 75.0;

/// Free-throw attempts counted per true-shooting attempt.
pub const FREE_THROW_WEIGHT: f64 = 0.44;

/// `points / (2 * (fga + 0.44 * fta))`; `None` when no shots were attempted.
pub fn true_shooting(
    points: f64,
    field_goals_attempted: f64,
    free_throws_attempted: f64,
) -> Option<f64> {
    let attempts = field_goals_attempted + FREE_THROW_WEIGHT * free_throws_attempted;
    (attempts > 0.0).then(|| points / (2.0 * attempts))
}

/// `(fgm + 0.5 * 3pm) / fga`; `None` when no field goals were attempted.
pub fn effective_field_goal(
    field_goals_made: f64,
    three_pointers_made: f64,
    field_goals_attempted: f64,
) -> Option<f64> {
    (field_goals_attempted > 0.0)
        .then(|| (field_goals_made + 0.5 * three_pointers_made) / field_goals_attempted)
}

/// `value / minutes * 75`; `None` without playing time.
pub fn per75(value: f64, minutes: f64) -> Option<f64> {
    (minutes > 0.0).then(|| value / minutes * PER75_BASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_shooting_matches_reference_value() {
        let ts = true_shooting(25.0, 10.0, 5.0).unwrap();
        assert!((ts - 25.0 / 24.4).abs() < 1e-12);
        assert!((ts - 1.0246).abs() < 1e-4);
    }

    #[test]
    fn true_shooting_absent_without_attempts() {
        assert_eq!(true_shooting(12.0, 0.0, 0.0), None);
    }

    #[test]
    fn true_shooting_counts_free_throws_only() {
        let ts = true_shooting(4.4, 0.0, 5.0).unwrap();
        assert!((ts - 1.0).abs() < 1e-12);
    }

    #[test]
    fn effective_field_goal_weights_threes() {
        assert_eq!(effective_field_goal(8.0, 2.0, 18.0), Some(0.5));
        assert_eq!(effective_field_goal(3.0, 1.0, 0.0), None);
    }

    #[test]
    fn per75_is_exact_for_whole_numbers() {
        assert_eq!(per75(20.0, 30.0), Some(50.0));
        assert_eq!(per75(20.0, 0.0), None);
    }
}
