/// Tunables of the training-load analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Number of days of workout history taken into account.
    pub analysis_window_days: u32,
    /// Push volume above this multiple of pull volume is an imbalance.
    pub push_pull_ratio: f64,
    /// Upper body volume above this multiple of lower body volume is an imbalance.
    pub upper_lower_ratio: f64,
    /// Share of the total volume above which a single muscle may be overtrained.
    pub dominant_muscle_percentage: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            analysis_window_days: 30,
            push_pull_ratio: 1.5,
            upper_lower_ratio: 2.0,
            dominant_muscle_percentage: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();

        assert_eq!(settings.analysis_window_days, 30);
        assert_approx_eq!(settings.push_pull_ratio, 1.5);
        assert_approx_eq!(settings.upper_lower_ratio, 2.0);
        assert_eq!(settings.dominant_muscle_percentage, 30);
    }
}
