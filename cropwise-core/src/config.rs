//! Compile-time configuration shared by the web app and the CLI.

use std::time::Duration;

/// sessionStorage key holding the JSON-encoded [`crate::input::SoilClimateInput`].
pub const STORAGE_KEY: &str = "cropInputData";

/// Simulated round trip for the sign-in form.
pub const LOGIN_LATENCY: Duration = Duration::from_millis(1000);

/// Simulated round trip for the registration form.
pub const REGISTER_LATENCY: Duration = Duration::from_millis(1500);

/// Refresh period of the dashboard clock.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(60);

/// Number of crops shown on the recommendations view.
pub const DEFAULT_TOP_N: usize = 3;

/// Minimum password strength accepted at registration.
pub const MIN_PASSWORD_STRENGTH: u8 = 3;

/// Soil compatibility multiplier for a soil type the crop does not prefer.
pub const NON_PREFERRED_SOIL_FACTOR: f64 = 0.75;

/// Relative weight of each compatibility factor in the suitability score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub soil: f64,
    pub climate: f64,
    pub water: f64,
    pub market: f64,
}

pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    soil: 0.40,
    climate: 0.30,
    water: 0.20,
    market: 0.10,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_weights_sum_to_one() {
        let w = SCORE_WEIGHTS;
        assert!((w.soil + w.climate + w.water + w.market - 1.0).abs() < 1e-9);
    }
}
