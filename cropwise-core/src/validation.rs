//! Declarative validation schema for the soil/climate form.
//!
//! Numeric inputs arrive as strings (slider labels, text boxes, CLI flags) and
//! are coerced to `f64` before the range check; text inputs fail when blank.
//! There is no cross-field validation.

use crate::error::ValidationError;
use crate::field::{
    Bounded, FieldId, FieldRange, HumidityRange, Location, NitrogenRange, PhRange,
    PhosphorusRange, PotassiumRange, RainfallRange, TemperatureRange,
};
use crate::input::SoilClimateInput;
use crate::soil::SoilType;
use std::collections::BTreeMap;

/// Per-field errors, ordered by form position.
pub type FieldErrors = BTreeMap<FieldId, ValidationError>;

/// Raw string value for every field of the form.
pub type RawRecord = BTreeMap<FieldId, String>;

/// A single field value that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Soil(SoilType),
}

/// Coerce a raw input string to a finite number.
pub fn coerce_number(field: FieldId, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NotANumber { field });
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotANumber { field }),
    }
}

/// Coerce and range-check a raw string into the bounded type for `R`.
pub fn parse_bounded<R: FieldRange>(raw: &str) -> Result<Bounded<R>, ValidationError> {
    coerce_number(R::FIELD, raw).and_then(Bounded::new)
}

fn parse_soil_type(raw: &str) -> Result<SoilType, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Required {
            field: FieldId::SoilType,
        });
    }
    raw.parse()
}

/// Validate one field's raw value.
pub fn validate_field(field: FieldId, raw: &str) -> Result<FieldValue, ValidationError> {
    let number = |value: f64| FieldValue::Number(value);
    match field {
        FieldId::Nitrogen => parse_bounded::<NitrogenRange>(raw).map(|v| number(v.get())),
        FieldId::Phosphorus => parse_bounded::<PhosphorusRange>(raw).map(|v| number(v.get())),
        FieldId::Potassium => parse_bounded::<PotassiumRange>(raw).map(|v| number(v.get())),
        FieldId::Temperature => parse_bounded::<TemperatureRange>(raw).map(|v| number(v.get())),
        FieldId::Humidity => parse_bounded::<HumidityRange>(raw).map(|v| number(v.get())),
        FieldId::Ph => parse_bounded::<PhRange>(raw).map(|v| number(v.get())),
        FieldId::Rainfall => parse_bounded::<RainfallRange>(raw).map(|v| number(v.get())),
        FieldId::Location => Location::new(raw).map(|l| FieldValue::Text(l.as_str().to_string())),
        FieldId::SoilType => parse_soil_type(raw).map(FieldValue::Soil),
    }
}

/// Validate a full raw record, collecting every failing field.
///
/// Missing entries are validated as empty strings.
pub fn validate_record(raw: &RawRecord) -> Result<SoilClimateInput, FieldErrors> {
    let mut errors = FieldErrors::new();
    let get = |field: FieldId| raw.get(&field).map(String::as_str).unwrap_or("");

    macro_rules! check {
        ($expr:expr) => {
            match $expr {
                Ok(value) => Some(value),
                Err(err) => {
                    errors.insert(err.field(), err);
                    None
                }
            }
        };
    }

    let nitrogen = check!(parse_bounded::<NitrogenRange>(get(FieldId::Nitrogen)));
    let phosphorus = check!(parse_bounded::<PhosphorusRange>(get(FieldId::Phosphorus)));
    let potassium = check!(parse_bounded::<PotassiumRange>(get(FieldId::Potassium)));
    let temperature = check!(parse_bounded::<TemperatureRange>(get(FieldId::Temperature)));
    let humidity = check!(parse_bounded::<HumidityRange>(get(FieldId::Humidity)));
    let ph = check!(parse_bounded::<PhRange>(get(FieldId::Ph)));
    let rainfall = check!(parse_bounded::<RainfallRange>(get(FieldId::Rainfall)));
    let location = check!(Location::new(get(FieldId::Location)));
    let soil_type = check!(parse_soil_type(get(FieldId::SoilType)));

    match (
        nitrogen,
        phosphorus,
        potassium,
        temperature,
        humidity,
        ph,
        rainfall,
        location,
        soil_type,
    ) {
        (
            Some(nitrogen),
            Some(phosphorus),
            Some(potassium),
            Some(temperature),
            Some(humidity),
            Some(ph),
            Some(rainfall),
            Some(location),
            Some(soil_type),
        ) => Ok(SoilClimateInput {
            nitrogen,
            phosphorus,
            potassium,
            temperature,
            humidity,
            ph,
            rainfall,
            location,
            soil_type,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::fixtures::sample_input;

    fn raw_from(input: &SoilClimateInput) -> RawRecord {
        FieldId::ALL.iter().map(|f| (*f, input.raw(*f))).collect()
    }

    #[test]
    fn coerce_number_rejects_blank_and_garbage() {
        assert_eq!(coerce_number(FieldId::Ph, " 6.5 ").unwrap(), 6.5);
        assert!(coerce_number(FieldId::Ph, "").is_err());
        assert!(coerce_number(FieldId::Ph, "six").is_err());
        assert!(coerce_number(FieldId::Ph, "NaN").is_err());
        assert!(coerce_number(FieldId::Ph, "inf").is_err());
    }

    #[test]
    fn every_numeric_field_rejects_values_past_either_bound() {
        for field in FieldId::NUMERIC {
            let (min, max) = field.bounds().unwrap();
            for bad in [min - 1.0, max + 0.5] {
                let err = validate_field(field, &bad.to_string()).unwrap_err();
                assert_eq!(err.field(), field, "{field} accepted {bad}");
                assert!(matches!(err, ValidationError::OutOfRange { .. }));
            }
            assert!(validate_field(field, &min.to_string()).is_ok());
            assert!(validate_field(field, &max.to_string()).is_ok());
        }
    }

    #[test]
    fn text_fields_are_required() {
        assert_eq!(
            validate_field(FieldId::Location, "").unwrap_err().to_string(),
            "Location is required"
        );
        assert_eq!(
            validate_field(FieldId::SoilType, " ").unwrap_err().to_string(),
            "Soil type is required"
        );
        assert_eq!(
            validate_field(FieldId::SoilType, "Loamy").unwrap(),
            FieldValue::Soil(SoilType::Loamy)
        );
    }

    #[test]
    fn validate_record_round_trips_a_valid_record() {
        let input = sample_input();
        assert_eq!(validate_record(&raw_from(&input)).unwrap(), input);
    }

    #[test]
    fn validate_record_collects_all_failures() {
        let mut raw = raw_from(&sample_input());
        raw.insert(FieldId::Nitrogen, "150".into());
        raw.insert(FieldId::Humidity, "wet".into());
        raw.remove(&FieldId::Location);

        let errors = validate_record(&raw).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key(&FieldId::Nitrogen));
        assert!(errors.contains_key(&FieldId::Humidity));
        assert!(errors.contains_key(&FieldId::Location));
        assert_eq!(errors[&FieldId::Humidity].to_string(), "Humidity must be a number");
    }
}
