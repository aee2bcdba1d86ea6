//! The validated soil/climate record handed from the input view to the
//! recommendations view.

use crate::field::{
    FieldId, Humidity, Location, Nitrogen, Ph, Phosphorus, Potassium, Rainfall, Temperature,
};
use crate::soil::SoilType;
use serde::{Deserialize, Serialize};

/// A complete, in-range set of soil and climate readings.
///
/// All numeric members are [`crate::field::Bounded`] wrappers, so holding a
/// value of this type is proof that every reading lies within its declared
/// interval. The JSON layout is the session-storage format:
///
/// ```json
/// {"nitrogen":40.0,"phosphorus":30.0,"potassium":35.0,"temperature":25.0,
///  "humidity":60.0,"ph":6.5,"rainfall":100.0,"location":"Fresno, CA",
///  "soilType":"loamy"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilClimateInput {
    pub nitrogen: Nitrogen,
    pub phosphorus: Phosphorus,
    pub potassium: Potassium,
    pub temperature: Temperature,
    pub humidity: Humidity,
    pub ph: Ph,
    pub rainfall: Rainfall,
    pub location: Location,
    pub soil_type: SoilType,
}

impl SoilClimateInput {
    /// Reading for a numeric field; `None` for location and soil type.
    pub fn numeric(&self, field: FieldId) -> Option<f64> {
        match field {
            FieldId::Nitrogen => Some(self.nitrogen.get()),
            FieldId::Phosphorus => Some(self.phosphorus.get()),
            FieldId::Potassium => Some(self.potassium.get()),
            FieldId::Temperature => Some(self.temperature.get()),
            FieldId::Humidity => Some(self.humidity.get()),
            FieldId::Ph => Some(self.ph.get()),
            FieldId::Rainfall => Some(self.rainfall.get()),
            FieldId::Location | FieldId::SoilType => None,
        }
    }

    /// Raw string form of a field, as a form input would show it.
    pub fn raw(&self, field: FieldId) -> String {
        match field {
            FieldId::Location => self.location.as_str().to_string(),
            FieldId::SoilType => self.soil_type.as_str().to_string(),
            numeric => self
                .numeric(numeric)
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// The reference record used throughout the tests.
    pub fn sample_input() -> SoilClimateInput {
        SoilClimateInput {
            nitrogen: Nitrogen::new(40.0).unwrap(),
            phosphorus: Phosphorus::new(30.0).unwrap(),
            potassium: Potassium::new(35.0).unwrap(),
            temperature: Temperature::new(25.0).unwrap(),
            humidity: Humidity::new(60.0).unwrap(),
            ph: Ph::new(6.5).unwrap(),
            rainfall: Rainfall::new(100.0).unwrap(),
            location: Location::new("Fresno, CA").unwrap(),
            soil_type: SoilType::Loamy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_input;
    use super::*;

    #[test]
    fn json_layout_is_camel_case() {
        let json = serde_json::to_value(sample_input()).unwrap();
        assert_eq!(json["soilType"], "loamy");
        assert_eq!(json["ph"], 6.5);
        assert_eq!(json["location"], "Fresno, CA");
        assert!(json.get("soil_type").is_none());
    }

    #[test]
    fn deserialize_rejects_out_of_range_members() {
        let mut json = serde_json::to_value(sample_input()).unwrap();
        json["humidity"] = serde_json::json!(101.0);
        assert!(serde_json::from_value::<SoilClimateInput>(json).is_err());
    }

    #[test]
    fn numeric_and_raw_accessors() {
        let input = sample_input();
        assert_eq!(input.numeric(FieldId::Ph), Some(6.5));
        assert_eq!(input.numeric(FieldId::Location), None);
        assert_eq!(input.raw(FieldId::Nitrogen), "40");
        assert_eq!(input.raw(FieldId::SoilType), "loamy");
    }
}
