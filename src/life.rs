//! Life accounting and the colour band shown for it.

/// Below this fraction life is critical.
pub const CRITICAL_BELOW: f64 = 0.3;
/// Below this fraction (and at or above [`CRITICAL_BELOW`]) life is a warning.
pub const WARNING_BELOW: f64 = 0.6;

/// Coarse urgency classification of remaining life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeBand {
    Critical,
    Warning,
    Healthy,
}

impl LifeBand {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Healthy => "healthy",
        }
    }
}

/// Classifies a life fraction. Boundaries belong to the higher band.
#[must_use]
pub fn life_band(fraction: f64) -> LifeBand {
    if fraction < CRITICAL_BELOW {
        LifeBand::Critical
    } else if fraction < WARNING_BELOW {
        LifeBand::Warning
    } else {
        LifeBand::Healthy
    }
}

/// Remaining life after `wrong_guesses` misses out of `max_wrong_guesses`.
///
/// Equivalent to subtracting `1 / max_wrong_guesses` per miss and flooring at
/// zero, but computed from the miss count so the result is exactly `0.0` on
/// the last allowed miss.
#[must_use]
pub fn life_fraction(wrong_guesses: u32, max_wrong_guesses: u32) -> f64 {
    if max_wrong_guesses == 0 {
        return 0.0;
    }
    let remaining = max_wrong_guesses.saturating_sub(wrong_guesses);
    f64::from(remaining) / f64::from(max_wrong_guesses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(life_band(0.0), LifeBand::Critical);
        assert_eq!(life_band(0.29), LifeBand::Critical);
        assert_eq!(life_band(0.3), LifeBand::Warning);
        assert_eq!(life_band(0.59), LifeBand::Warning);
        assert_eq!(life_band(0.6), LifeBand::Healthy);
        assert_eq!(life_band(1.0), LifeBand::Healthy);
    }

    #[test]
    fn test_fraction_steps_are_exact() {
        assert_eq!(life_fraction(0, 5), 1.0);
        assert_eq!(life_fraction(1, 5), 0.8);
        assert_eq!(life_fraction(5, 5), 0.0);
        assert_eq!(life_fraction(9, 5), 0.0);
        assert_eq!(life_fraction(7, 10), 0.3);
        assert_eq!(life_band(life_fraction(7, 10)), LifeBand::Warning);
    }

    #[test]
    fn test_zero_max_has_no_life() {
        assert_eq!(life_fraction(0, 0), 0.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(LifeBand::Critical.label(), "critical");
        assert_eq!(LifeBand::Warning.label(), "warning");
        assert_eq!(LifeBand::Healthy.label(), "healthy");
    }
}
