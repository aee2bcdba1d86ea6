//! Crop suitability scoring and ranking.
//!
//! Each crop in the catalog is scored against a [`SoilClimateInput`] by
//! comparing every reading with the crop's optimal [`Envelope`]. The fits are
//! combined into soil, climate and water sub-scores, blended with the crop's
//! static market rating and rounded to a 0-100 suitability score.

use crate::catalog::{CropProfile, Envelope};
use crate::config::{NON_PREFERRED_SOIL_FACTOR, SCORE_WEIGHTS};
use crate::field::FieldId;
use crate::input::SoilClimateInput;
use crate::metrics::{format_number, format_ph, SuitabilityBand};
use serde::Serialize;
use std::cmp::Ordering;

/// A scored crop, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    pub name: String,
    pub suitability_score: u8,
    pub expected_yield: String,
    pub water_requirement: String,
    pub growth_duration: String,
    pub profit_potential: String,
    pub description: String,
    pub soil_compatibility: u8,
    pub climate_compatibility: u8,
    pub water_compatibility: u8,
    pub market_potential: u8,
    pub image: String,
    /// Reading furthest outside its optimal band, if any is outside.
    pub limiting_factor: Option<FieldId>,
}

impl CropRecommendation {
    pub fn band(&self) -> SuitabilityBand {
        SuitabilityBand::from_score(self.suitability_score)
    }

    /// Picture URL, `None` when the catalog has none.
    pub fn image_url(&self) -> Option<&str> {
        let url = self.image.trim();
        (!url.is_empty()).then_some(url)
    }
}

fn to_score(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

fn fit(profile: &CropProfile, input: &SoilClimateInput, field: FieldId) -> f64 {
    match (profile.envelope(field), input.numeric(field)) {
        (Some(envelope), Some(value)) => envelope.fit(value),
        _ => 0.0,
    }
}

/// Field whose reading is relatively furthest outside its envelope.
fn limiting_factor(profile: &CropProfile, input: &SoilClimateInput) -> Option<FieldId> {
    FieldId::NUMERIC
        .iter()
        .filter_map(|field| {
            let envelope: &Envelope = profile.envelope(*field)?;
            let value = input.numeric(*field)?;
            let shortfall = 1.0 - envelope.fit(value);
            (!envelope.contains(value)).then_some((*field, shortfall, envelope.distance(value)))
        })
        .max_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then(a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal))
        })
        .map(|(field, _, _)| field)
}

/// Score one crop against the input.
pub fn score_crop(profile: &CropProfile, input: &SoilClimateInput) -> CropRecommendation {
    let fit = |field| fit(profile, input, field);

    let soil_factor = if profile.prefers(input.soil_type) {
        1.0
    } else {
        NON_PREFERRED_SOIL_FACTOR
    };
    let nutrients = (fit(FieldId::Nitrogen)
        + fit(FieldId::Phosphorus)
        + fit(FieldId::Potassium)
        + fit(FieldId::Ph))
        / 4.0;
    let soil = nutrients * soil_factor;
    let climate = (fit(FieldId::Temperature) + fit(FieldId::Humidity)) / 2.0;
    let water = 0.7 * fit(FieldId::Rainfall) + 0.3 * fit(FieldId::Humidity);
    let market = f64::from(profile.market_potential.min(100)) / 100.0;

    let w = SCORE_WEIGHTS;
    let total = w.soil * soil + w.climate * climate + w.water * water + w.market * market;

    CropRecommendation {
        name: profile.name.clone(),
        suitability_score: to_score(total),
        expected_yield: profile.expected_yield.clone(),
        water_requirement: profile.water_requirement.clone(),
        growth_duration: profile.growth_duration.clone(),
        profit_potential: profile.profit_potential.clone(),
        description: profile.description.clone(),
        soil_compatibility: to_score(soil),
        climate_compatibility: to_score(climate),
        water_compatibility: to_score(water),
        market_potential: profile.market_potential.min(100),
        image: profile.image.clone(),
        limiting_factor: limiting_factor(profile, input),
    }
}

/// Score and rank the whole catalog: best first, ties by name.
pub fn recommend(catalog: &[CropProfile], input: &SoilClimateInput) -> Vec<CropRecommendation> {
    let mut ranked: Vec<CropRecommendation> =
        catalog.iter().map(|profile| score_crop(profile, input)).collect();
    ranked.sort_by(|a, b| {
        b.suitability_score
            .cmp(&a.suitability_score)
            .then_with(|| a.name.cmp(&b.name))
    });
    log::debug!(
        "ranked {} crops for {}; top: {:?}",
        ranked.len(),
        input.location,
        ranked.first().map(|r| (&r.name, r.suitability_score))
    );
    ranked
}

/// The `n` best crops.
pub fn recommend_top(
    catalog: &[CropProfile],
    input: &SoilClimateInput,
    n: usize,
) -> Vec<CropRecommendation> {
    let mut ranked = recommend(catalog, input);
    ranked.truncate(n);
    ranked
}

/// Names of crops that prefer the user's soil but are not among `shown`,
/// in the order given.
pub fn other_soil_matches(for_soil: &[CropProfile], shown: &[CropRecommendation]) -> Vec<String> {
    for_soil
        .iter()
        .filter(|profile| !shown.iter().any(|rec| rec.name == profile.name))
        .map(|profile| profile.name.clone())
        .collect()
}

/// Narrative sentence describing the readings behind a recommendation.
pub fn summary(input: &SoilClimateInput) -> String {
    format!(
        "Based on your soil analysis with nitrogen level of {}mg/kg, phosphorus level of {}mg/kg, \
         and potassium level of {}mg/kg, combined with a pH value of {} and {}mm rainfall on {} soil \
         in {}, the following crops are the best match for your land.",
        format_number(input.nitrogen.get(), 0),
        format_number(input.phosphorus.get(), 0),
        format_number(input.potassium.get(), 0),
        format_ph(input.ph.get()),
        format_number(input.rainfall.get(), 0),
        input.soil_type.as_str(),
        input.location,
    )
}
