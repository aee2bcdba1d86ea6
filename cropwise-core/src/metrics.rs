//! Derived display metrics: suitability bands, password strength, number
//! formatting, gauge geometry and nutrient shares.
//!
//! Everything here is a pure function of its arguments.

use crate::field::FieldId;
use serde::Serialize;
use std::fmt;

/// Circumference of the r=45 circle used by the dashboard gauges.
pub const GAUGE_CIRCUMFERENCE: f64 = 282.7;

/// Qualitative bucket of a 0-100 suitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SuitabilityBand {
    Poor,
    Fair,
    Good,
    Best,
}

impl SuitabilityBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => SuitabilityBand::Best,
            60..=79 => SuitabilityBand::Good,
            40..=59 => SuitabilityBand::Fair,
            _ => SuitabilityBand::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SuitabilityBand::Best => "Best match",
            SuitabilityBand::Good => "Good match",
            SuitabilityBand::Fair => "Fair match",
            SuitabilityBand::Poor => "Poor match",
        }
    }

    /// Badge colour as a CSS hex string.
    pub fn colour(&self) -> &'static str {
        match self {
            SuitabilityBand::Best => "#22C55E",
            SuitabilityBand::Good => "#84CC16",
            SuitabilityBand::Fair => "#F59E0B",
            SuitabilityBand::Poor => "#EF4444",
        }
    }
}

impl fmt::Display for SuitabilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    fn from_strength(strength: u8) -> Self {
        match strength {
            0 | 1 => StrengthLabel::VeryWeak,
            2 => StrengthLabel::Weak,
            3 => StrengthLabel::Medium,
            4 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Number of password checks passed (0-5) and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub strength: u8,
    pub label: StrengthLabel,
}

impl PasswordStrength {
    /// Count the five checks: length ≥ 8, an uppercase letter, a lowercase
    /// letter, a digit and a character outside `[A-Za-z0-9]`.
    pub fn of(password: &str) -> Self {
        let checks = [
            password.chars().count() >= 8,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];
        let strength = checks.iter().filter(|passed| **passed).count() as u8;
        Self {
            strength,
            label: StrengthLabel::from_strength(strength),
        }
    }

    /// Meter fill, `strength / 5` as a percentage.
    pub fn meter_width(&self) -> f64 {
        f64::from(self.strength) / 5.0 * 100.0
    }

    /// Meter colour as a CSS hex string.
    pub fn colour(&self) -> &'static str {
        match self.strength {
            0 | 1 => "#EF4444",
            2 => "#F97316",
            3 => "#EAB308",
            4 => "#22C55E",
            _ => "#16A34A",
        }
    }
}

/// Round half away from zero to `decimals` places, never yielding `-0`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale + 0.0
}

/// Format with a fixed number of decimals using [`round_to`].
pub fn format_number(value: f64, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, round_to(value, decimals))
}

/// `"85%"`
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value, 0))
}

/// `"6.5"`
pub fn format_ph(value: f64) -> String {
    format_number(value, 1)
}

/// `"25°C"`; one decimal is kept only when the value has one.
pub fn format_degrees(value: f64) -> String {
    let rounded = round_to(value, 1);
    if rounded.fract() == 0.0 {
        format!("{}°C", format_number(rounded, 0))
    } else {
        format!("{}°C", format_number(rounded, 1))
    }
}

/// A reading with its unit, e.g. `"40 mg/kg"`, `"100 mm"`, `"6.5"`.
pub fn format_reading(field: FieldId, value: f64) -> String {
    match field {
        FieldId::Ph => format_ph(value),
        FieldId::Temperature => format_degrees(value),
        _ => format!("{}{}", format_number(value, 0), field.unit()),
    }
}

/// `stroke-dashoffset` that fills `percent` of a gauge arc.
pub fn gauge_dash_offset(percent: f64) -> f64 {
    let percent = percent.clamp(0.0, 100.0);
    GAUGE_CIRCUMFERENCE - GAUGE_CIRCUMFERENCE * percent / 100.0
}

/// One slice of the N/P/K composition chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientShare {
    pub field: FieldId,
    pub value: f64,
    /// Integer share of the N+P+K total.
    pub percent: u8,
}

/// N, P and K as integer percentages of their sum. All zero when the sum is.
pub fn nutrient_composition(nitrogen: f64, phosphorus: f64, potassium: f64) -> [NutrientShare; 3] {
    let total = nitrogen + phosphorus + potassium;
    let share = |field, value: f64| NutrientShare {
        field,
        value,
        percent: if total > 0.0 {
            round_to(value / total * 100.0, 0) as u8
        } else {
            0
        },
    };
    [
        share(FieldId::Nitrogen, nitrogen),
        share(FieldId::Phosphorus, phosphorus),
        share(FieldId::Potassium, potassium),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_exact_at_thresholds() {
        assert_eq!(SuitabilityBand::from_score(100), SuitabilityBand::Best);
        assert_eq!(SuitabilityBand::from_score(80), SuitabilityBand::Best);
        assert_eq!(SuitabilityBand::from_score(79), SuitabilityBand::Good);
        assert_eq!(SuitabilityBand::from_score(60), SuitabilityBand::Good);
        assert_eq!(SuitabilityBand::from_score(59), SuitabilityBand::Fair);
        assert_eq!(SuitabilityBand::from_score(40), SuitabilityBand::Fair);
        assert_eq!(SuitabilityBand::from_score(39), SuitabilityBand::Poor);
        assert_eq!(SuitabilityBand::from_score(0), SuitabilityBand::Poor);
        assert_eq!(SuitabilityBand::Best.colour(), "#22C55E");
    }

    #[test]
    fn password_strength_counts_checks() {
        assert_eq!(PasswordStrength::of("").strength, 0);
        assert_eq!(PasswordStrength::of("abc").strength, 1);
        assert_eq!(PasswordStrength::of("abc").label, StrengthLabel::VeryWeak);
        assert_eq!(PasswordStrength::of("Abc").label, StrengthLabel::Weak);
        assert_eq!(PasswordStrength::of("Abc1").label, StrengthLabel::Medium);
        assert_eq!(PasswordStrength::of("Abcd1234").label, StrengthLabel::Strong);
        let best = PasswordStrength::of("Abc12345!");
        assert_eq!(best.strength, 5);
        assert_eq!(best.label, StrengthLabel::VeryStrong);
        assert_eq!(best.meter_width(), 100.0);
        assert!(PasswordStrength::of("abc").strength < best.strength);
    }

    #[test]
    fn password_strength_is_non_decreasing_as_checks_pass() {
        let steps = ["a", "aB", "aB3", "aB3$", "aB3$efgh"];
        let strengths: Vec<u8> = steps.iter().map(|p| PasswordStrength::of(p).strength).collect();
        assert!(strengths.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(strengths, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn formatting_rounds_half_away_from_zero() {
        assert_eq!(format_percent(84.5), "85%");
        assert_eq!(format_percent(-0.4), "0%");
        assert_eq!(format_ph(2.25), "2.3");
        assert_eq!(format_ph(7.0), "7.0");
        assert_eq!(format_degrees(25.0), "25°C");
        assert_eq!(format_degrees(22.5), "22.5°C");
        assert_eq!(format_reading(FieldId::Nitrogen, 40.0), "40 mg/kg");
        assert_eq!(format_reading(FieldId::Rainfall, 100.0), "100 mm");
        assert_eq!(format_reading(FieldId::Humidity, 60.0), "60%");
    }

    #[test]
    fn gauge_offset_matches_dashboard_arcs() {
        assert!((gauge_dash_offset(68.0) - (282.7 - 282.7 * 68.0 / 100.0)).abs() < 1e-9);
        assert_eq!(gauge_dash_offset(0.0), GAUGE_CIRCUMFERENCE);
        assert_eq!(gauge_dash_offset(100.0), 0.0);
        assert_eq!(gauge_dash_offset(150.0), 0.0);
    }

    #[test]
    fn nutrient_shares_sum_to_the_input() {
        let shares = nutrient_composition(40.0, 30.0, 35.0);
        assert_eq!(shares[0].percent, 38);
        assert_eq!(shares[1].percent, 29);
        assert_eq!(shares[2].percent, 33);
        assert!(nutrient_composition(0.0, 0.0, 0.0).iter().all(|s| s.percent == 0));
    }
}
