//! Typed soil and climate fields.
//!
//! Every numeric input carries its closed interval in its type: a
//! [`Nitrogen`] can only ever hold a value in `[0, 140]`, so an out-of-range
//! [`crate::input::SoilClimateInput`] cannot be constructed, deserialized or
//! loaded back from session storage.

use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Upper bound for N, P and K in mg/kg.
pub const NUTRIENT_MAX: f64 = 140.0;
/// Temperature bounds in °C.
pub const TEMPERATURE_MIN: f64 = -10.0;
pub const TEMPERATURE_MAX: f64 = 60.0;
/// Relative humidity upper bound in percent.
pub const HUMIDITY_MAX: f64 = 100.0;
/// pH upper bound.
pub const PH_MAX: f64 = 14.0;
/// Rainfall upper bound in mm.
pub const RAINFALL_MAX: f64 = 300.0;

/// Identifies one input of the soil/climate form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Nitrogen,
    Phosphorus,
    Potassium,
    Temperature,
    Humidity,
    Ph,
    Rainfall,
    Location,
    SoilType,
}

impl FieldId {
    /// Every field, in form order.
    pub const ALL: [FieldId; 9] = [
        FieldId::Nitrogen,
        FieldId::Phosphorus,
        FieldId::Potassium,
        FieldId::Temperature,
        FieldId::Humidity,
        FieldId::Ph,
        FieldId::Rainfall,
        FieldId::Location,
        FieldId::SoilType,
    ];

    /// The seven numeric (slider) fields.
    pub const NUMERIC: [FieldId; 7] = [
        FieldId::Nitrogen,
        FieldId::Phosphorus,
        FieldId::Potassium,
        FieldId::Temperature,
        FieldId::Humidity,
        FieldId::Ph,
        FieldId::Rainfall,
    ];

    /// Human-readable label used in messages and form labels.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Nitrogen => "Nitrogen",
            FieldId::Phosphorus => "Phosphorus",
            FieldId::Potassium => "Potassium",
            FieldId::Temperature => "Temperature",
            FieldId::Humidity => "Humidity",
            FieldId::Ph => "pH",
            FieldId::Rainfall => "Rainfall",
            FieldId::Location => "Location",
            FieldId::SoilType => "Soil type",
        }
    }

    /// camelCase key, matching the JSON layout and DOM ids.
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::Nitrogen => "nitrogen",
            FieldId::Phosphorus => "phosphorus",
            FieldId::Potassium => "potassium",
            FieldId::Temperature => "temperature",
            FieldId::Humidity => "humidity",
            FieldId::Ph => "ph",
            FieldId::Rainfall => "rainfall",
            FieldId::Location => "location",
            FieldId::SoilType => "soilType",
        }
    }

    /// Closed interval for numeric fields, `None` for text fields.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            FieldId::Nitrogen | FieldId::Phosphorus | FieldId::Potassium => Some((0.0, NUTRIENT_MAX)),
            FieldId::Temperature => Some((TEMPERATURE_MIN, TEMPERATURE_MAX)),
            FieldId::Humidity => Some((0.0, HUMIDITY_MAX)),
            FieldId::Ph => Some((0.0, PH_MAX)),
            FieldId::Rainfall => Some((0.0, RAINFALL_MAX)),
            FieldId::Location | FieldId::SoilType => None,
        }
    }

    /// Unit suffix appended to values (includes a leading space where needed).
    pub fn unit(&self) -> &'static str {
        match self {
            FieldId::Nitrogen | FieldId::Phosphorus | FieldId::Potassium => " mg/kg",
            FieldId::Temperature => "°C",
            FieldId::Humidity => "%",
            FieldId::Rainfall => " mm",
            FieldId::Ph | FieldId::Location | FieldId::SoilType => "",
        }
    }

    /// Slider step size.
    pub fn step(&self) -> f64 {
        match self {
            FieldId::Temperature => 0.5,
            FieldId::Ph => 0.1,
            _ => 1.0,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.bounds().is_some()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compile-time description of a numeric field's closed interval.
pub trait FieldRange {
    const FIELD: FieldId;
    const MIN: f64;
    const MAX: f64;
}

macro_rules! field_range {
    ($(#[$doc:meta])* $name:ident, $field:expr, $min:expr, $max:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name;

        impl FieldRange for $name {
            const FIELD: FieldId = $field;
            const MIN: f64 = $min;
            const MAX: f64 = $max;
        }
    };
}

field_range!(
    /// `[0, 140]` mg/kg
    NitrogenRange, FieldId::Nitrogen, 0.0, NUTRIENT_MAX
);
field_range!(
    /// `[0, 140]` mg/kg
    PhosphorusRange, FieldId::Phosphorus, 0.0, NUTRIENT_MAX
);
field_range!(
    /// `[0, 140]` mg/kg
    PotassiumRange, FieldId::Potassium, 0.0, NUTRIENT_MAX
);
field_range!(
    /// `[-10, 60]` °C
    TemperatureRange, FieldId::Temperature, TEMPERATURE_MIN, TEMPERATURE_MAX
);
field_range!(
    /// `[0, 100]` %
    HumidityRange, FieldId::Humidity, 0.0, HUMIDITY_MAX
);
field_range!(
    /// `[0, 14]`
    PhRange, FieldId::Ph, 0.0, PH_MAX
);
field_range!(
    /// `[0, 300]` mm
    RainfallRange, FieldId::Rainfall, 0.0, RAINFALL_MAX
);

/// A finite `f64` guaranteed to lie within `R`'s closed interval.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Bounded<R: FieldRange> {
    value: f64,
    _range: PhantomData<R>,
}

impl<R: FieldRange> Bounded<R> {
    /// Range-check `value` for field `R::FIELD`.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotANumber { field: R::FIELD });
        }
        if value < R::MIN || value > R::MAX {
            return Err(ValidationError::OutOfRange {
                field: R::FIELD,
                min: R::MIN,
                max: R::MAX,
                unit: R::FIELD.unit(),
            });
        }
        Ok(Self {
            value,
            _range: PhantomData,
        })
    }

    pub fn get(self) -> f64 {
        self.value
    }

    pub fn field() -> FieldId {
        R::FIELD
    }
}

impl<R: FieldRange> fmt::Display for Bounded<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<R: FieldRange> Serialize for Bounded<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

impl<'de, R: FieldRange> Deserialize<'de> for Bounded<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Bounded::new(value).map_err(serde::de::Error::custom)
    }
}

pub type Nitrogen = Bounded<NitrogenRange>;
pub type Phosphorus = Bounded<PhosphorusRange>;
pub type Potassium = Bounded<PotassiumRange>;
pub type Temperature = Bounded<TemperatureRange>;
pub type Humidity = Bounded<HumidityRange>;
pub type Ph = Bounded<PhRange>;
pub type Rainfall = Bounded<RainfallRange>;

/// Non-empty, trimmed farm location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location(String);

impl Location {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required {
                field: FieldId::Location,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Location {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Location::new(&value)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_accepts_closed_interval_endpoints() {
        assert_eq!(Nitrogen::new(0.0).unwrap().get(), 0.0);
        assert_eq!(Nitrogen::new(140.0).unwrap().get(), 140.0);
        assert_eq!(Temperature::new(-10.0).unwrap().get(), -10.0);
        assert_eq!(Ph::new(14.0).unwrap().get(), 14.0);
    }

    #[test]
    fn bounded_rejects_out_of_range_with_field_scope() {
        let err = Rainfall::new(300.5).unwrap_err();
        assert_eq!(err.field(), FieldId::Rainfall);
        assert_eq!(err.to_string(), "Rainfall must be between 0 and 300 mm");

        let err = Temperature::new(-10.1).unwrap_err();
        assert_eq!(err.to_string(), "Temperature must be between -10 and 60°C");

        let err = Ph::new(-0.1).unwrap_err();
        assert_eq!(err.to_string(), "pH must be between 0 and 14");
    }

    #[test]
    fn bounded_rejects_non_finite() {
        assert_eq!(
            Humidity::new(f64::NAN).unwrap_err(),
            ValidationError::NotANumber {
                field: FieldId::Humidity
            }
        );
        assert!(Potassium::new(f64::INFINITY).is_err());
    }

    #[test]
    fn bounded_deserialize_enforces_range() {
        let ok: Phosphorus = serde_json::from_str("30").unwrap();
        assert_eq!(ok.get(), 30.0);
        assert!(serde_json::from_str::<Phosphorus>("141").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "30.0");
    }

    #[test]
    fn field_bounds_match_range_markers() {
        assert_eq!(FieldId::Nitrogen.bounds(), Some((NitrogenRange::MIN, NitrogenRange::MAX)));
        assert_eq!(FieldId::Temperature.bounds(), Some((TemperatureRange::MIN, TemperatureRange::MAX)));
        assert_eq!(FieldId::Rainfall.bounds(), Some((RainfallRange::MIN, RainfallRange::MAX)));
        assert_eq!(FieldId::Location.bounds(), None);
        assert_eq!(FieldId::NUMERIC.len(), 7);
        assert!(FieldId::NUMERIC.iter().all(|f| f.is_numeric()));
    }

    #[test]
    fn location_is_trimmed_and_required() {
        assert_eq!(Location::new("  Fresno, CA ").unwrap().as_str(), "Fresno, CA");
        assert_eq!(
            Location::new("   ").unwrap_err(),
            ValidationError::Required {
                field: FieldId::Location
            }
        );
        assert!(serde_json::from_str::<Location>("\"\"").is_err());
    }
}
