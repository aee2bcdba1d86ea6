//! JSON payloads for the D3.js chart functions.
//!
//! Each builder returns `(data_json, config_json)` ready for the matching
//! [`crate::js_bridge`] call. They are plain functions of the recommendation
//! and metrics types so they can be tested natively.

use cropwise_core::metrics::NutrientShare;
use cropwise_core::recommend::CropRecommendation;
use serde_json::json;

/// Series colours of the compatibility chart.
const SOIL_COLOUR: &str = "#8884d8";
const CLIMATE_COLOUR: &str = "#82ca9d";
const WATER_COLOUR: &str = "#ffc658";
const MARKET_COLOUR: &str = "#ff8042";

const NUTRIENT_COLOURS: [&str; 3] = ["#4CAF50", "#2196F3", "#FF9800"];

/// Horizontal bars of each crop's suitability, coloured by band.
pub fn suitability_bars(crops: &[CropRecommendation]) -> (String, String) {
    let data: Vec<_> = crops
        .iter()
        .map(|c| {
            json!({
                "label": c.name,
                "value": c.suitability_score,
                "color": c.band().colour(),
            })
        })
        .collect();
    let config = json!({
        "xMax": 100,
        "unit": "%",
        "horizontal": true,
    });
    (json!(data).to_string(), config.to_string())
}

/// One group per crop with soil, climate, water and market bars.
pub fn compatibility_groups(crops: &[CropRecommendation]) -> (String, String) {
    let data: Vec<_> = crops
        .iter()
        .map(|c| {
            json!({
                "group": c.name,
                "values": [
                    { "key": "Soil Compatibility", "value": c.soil_compatibility },
                    { "key": "Climate Compatibility", "value": c.climate_compatibility },
                    { "key": "Water Compatibility", "value": c.water_compatibility },
                    { "key": "Market Potential", "value": c.market_potential },
                ],
            })
        })
        .collect();
    let config = json!({
        "max": 100,
        "keys": ["Soil Compatibility", "Climate Compatibility", "Water Compatibility", "Market Potential"],
        "colors": [SOIL_COLOUR, CLIMATE_COLOUR, WATER_COLOUR, MARKET_COLOUR],
    });
    (json!(data).to_string(), config.to_string())
}

/// Radar of overall suitability, one axis per crop.
pub fn suitability_radar(crops: &[CropRecommendation]) -> (String, String) {
    let data: Vec<_> = crops
        .iter()
        .map(|c| json!({ "axis": c.name, "value": c.suitability_score }))
        .collect();
    let config = json!({
        "max": 100,
        "levels": 5,
        "color": "#16a34a",
    });
    (json!(data).to_string(), config.to_string())
}

/// N/P/K composition donut.
pub fn nutrient_pie(shares: &[NutrientShare]) -> (String, String) {
    let data: Vec<_> = shares
        .iter()
        .zip(NUTRIENT_COLOURS.iter().cycle())
        .map(|(share, colour)| {
            json!({
                "label": share.field.label(),
                "value": share.value,
                "percent": share.percent,
                "color": colour,
            })
        })
        .collect();
    let config = json!({ "innerRadius": 0.55, "unit": " mg/kg" });
    (json!(data).to_string(), config.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropwise_core::metrics::nutrient_composition;
    use serde_json::Value;

    fn crop(name: &str, score: u8) -> CropRecommendation {
        CropRecommendation {
            name: name.to_string(),
            suitability_score: score,
            expected_yield: String::new(),
            water_requirement: String::new(),
            growth_duration: String::new(),
            profit_potential: String::new(),
            description: String::new(),
            soil_compatibility: 90,
            climate_compatibility: 80,
            water_compatibility: 70,
            market_potential: 60,
            image: String::new(),
            limiting_factor: None,
        }
    }

    #[test]
    fn suitability_bars_colour_by_band() {
        let (data, _) = suitability_bars(&[crop("Rice", 85), crop("Wheat", 45)]);
        let data: Value = serde_json::from_str(&data).unwrap();
        assert_eq!(data[0]["label"], "Rice");
        assert_eq!(data[0]["color"], "#22C55E");
        assert_eq!(data[1]["color"], "#F59E0B");
    }

    #[test]
    fn compatibility_groups_have_four_series() {
        let (data, config) = compatibility_groups(&[crop("Maize", 70)]);
        let data: Value = serde_json::from_str(&data).unwrap();
        let config: Value = serde_json::from_str(&config).unwrap();
        assert_eq!(data[0]["values"].as_array().unwrap().len(), 4);
        assert_eq!(data[0]["values"][3]["value"], 60);
        assert_eq!(config["keys"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn radar_has_an_axis_per_crop() {
        let (data, _) = suitability_radar(&[crop("A", 1), crop("B", 2), crop("C", 3)]);
        let data: Value = serde_json::from_str(&data).unwrap();
        assert_eq!(data.as_array().unwrap().len(), 3);
        assert_eq!(data[2]["axis"], "C");
    }

    #[test]
    fn nutrient_pie_labels_fields() {
        let (data, _) = nutrient_pie(&nutrient_composition(40.0, 30.0, 35.0));
        let data: Value = serde_json::from_str(&data).unwrap();
        assert_eq!(data[0]["label"], "Nitrogen");
        assert_eq!(data[1]["percent"], 29);
        assert_eq!(data[2]["color"], "#FF9800");
    }

    #[test]
    fn payloads_survive_quotes_in_names() {
        let (data, _) = suitability_bars(&[crop("Farmer's Pick", 50)]);
        let data: Value = serde_json::from_str(&data).unwrap();
        assert_eq!(data[0]["label"], "Farmer's Pick");
    }
}
