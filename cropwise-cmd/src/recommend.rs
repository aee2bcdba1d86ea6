//! `recommend` and `check`: validate readings, then rank the catalog.

use crate::catalog::open_catalog;
use anyhow::{bail, Context};
use cropwise_core::config::{DEFAULT_TOP_N, STORAGE_KEY};
use cropwise_core::field::FieldId;
use cropwise_core::input::SoilClimateInput;
use cropwise_core::metrics::format_percent;
use cropwise_core::recommend::{recommend_top, summary, CropRecommendation};
use cropwise_core::session::{MemoryStore, SessionStore, SessionTransfer};
use cropwise_core::validation::{validate_record, FieldErrors, RawRecord};
use log::info;

/// Raw flag values, validated with the same schema as the input form.
#[derive(Debug, Clone, Default)]
pub struct Readings {
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub temperature: String,
    pub humidity: String,
    pub ph: String,
    pub rainfall: String,
    pub location: String,
    pub soil_type: String,
}

impl Readings {
    fn to_raw_record(&self) -> RawRecord {
        [
            (FieldId::Nitrogen, &self.nitrogen),
            (FieldId::Phosphorus, &self.phosphorus),
            (FieldId::Potassium, &self.potassium),
            (FieldId::Temperature, &self.temperature),
            (FieldId::Humidity, &self.humidity),
            (FieldId::Ph, &self.ph),
            (FieldId::Rainfall, &self.rainfall),
            (FieldId::Location, &self.location),
            (FieldId::SoilType, &self.soil_type),
        ]
        .into_iter()
        .map(|(field, raw)| (field, raw.clone()))
        .collect()
    }

    pub fn validate(&self) -> Result<SoilClimateInput, FieldErrors> {
        validate_record(&self.to_raw_record())
    }
}

/// One `--flag: message` line per failing field.
pub fn format_field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, err)| format!("  --{}: {err}", flag_name(*field)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn flag_name(field: FieldId) -> &'static str {
    match field {
        FieldId::SoilType => "soil-type",
        other => other.key(),
    }
}

/// Ranked table with one row per crop.
pub fn format_table(crops: &[CropRecommendation]) -> String {
    let mut out = format!(
        "{:<4} {:<12} {:>6}  {:<11} {:>5} {:>8} {:>6} {:>7}  {}\n",
        "#", "Crop", "Score", "Band", "Soil", "Climate", "Water", "Market", "Limiting"
    );
    for (rank, crop) in crops.iter().enumerate() {
        let limiting = crop.limiting_factor.map(|f| f.label()).unwrap_or("-");
        out.push_str(&format!(
            "{:<4} {:<12} {:>6}  {:<11} {:>5} {:>8} {:>6} {:>7}  {}\n",
            rank + 1,
            crop.name,
            format_percent(f64::from(crop.suitability_score)),
            crop.band().label(),
            crop.soil_compatibility,
            crop.climate_compatibility,
            crop.water_compatibility,
            crop.market_potential,
            limiting
        ));
    }
    out
}

async fn rank(
    record: &SoilClimateInput,
    top: usize,
    catalog: Option<&str>,
) -> anyhow::Result<Vec<CropRecommendation>> {
    let db = open_catalog(catalog).await?;
    let crops = db.query_crops()?;
    info!("Scoring {} crops for {}", crops.len(), record.location);
    Ok(recommend_top(&crops, record, top))
}

fn print_ranking(record: &SoilClimateInput, ranked: &[CropRecommendation], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(ranked)?);
    } else {
        println!("{}\n", summary(record));
        print!("{}", format_table(ranked));
    }
    Ok(())
}

pub async fn run_recommend(
    readings: Readings,
    top: usize,
    json: bool,
    catalog: Option<&str>,
) -> anyhow::Result<()> {
    let record = match readings.validate() {
        Ok(record) => record,
        Err(errors) => bail!("invalid readings:\n{}", format_field_errors(&errors)),
    };
    let ranked = rank(&record, top, catalog).await?;
    print_ranking(&record, &ranked, json)
}

/// Decode a saved record through the same slot the web app reads.
pub fn decode_record(json: &str) -> anyhow::Result<SoilClimateInput> {
    let transfer = SessionTransfer::new(MemoryStore::default());
    transfer.store().set_item(STORAGE_KEY, json)?;
    match transfer.load()? {
        Some(record) => Ok(record),
        None => bail!("no record stored"),
    }
}

pub async fn run_check(path: &str, recommend: bool, catalog: Option<&str>) -> anyhow::Result<()> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {path}"))?;
    let record = decode_record(&json).with_context(|| format!("checking {path}"))?;
    println!("{path}: valid record for {} ({} soil)", record.location, record.soil_type.as_str());

    if recommend {
        let ranked = rank(&record, DEFAULT_TOP_N, catalog).await?;
        print_ranking(&record, &ranked, false)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings() -> Readings {
        Readings {
            nitrogen: "40".into(),
            phosphorus: "30".into(),
            potassium: "35".into(),
            temperature: "25".into(),
            humidity: "60".into(),
            ph: "6.5".into(),
            rainfall: "100".into(),
            location: "Fresno, CA".into(),
            soil_type: "Loamy".into(),
        }
    }

    #[test]
    fn valid_readings_pass_the_form_schema() {
        let record = readings().validate().unwrap();
        assert_eq!(record.location.as_str(), "Fresno, CA");
        assert_eq!(record.ph.get(), 6.5);
    }

    #[test]
    fn out_of_range_flags_are_reported_by_flag_name() {
        let mut bad = readings();
        bad.ph = "15".into();
        bad.soil_type = "gravel".into();
        let errors = bad.validate().unwrap_err();
        let text = format_field_errors(&errors);
        assert!(text.contains("--ph: pH must be between 0 and 14"));
        assert!(text.contains("--soil-type:"));
        assert_eq!(text.lines().count(), 2);
    }

    #[tokio::test]
    async fn ranking_respects_top() {
        let record = readings().validate().unwrap();
        let ranked = rank(&record, 4, None).await.unwrap();
        assert_eq!(ranked.len(), 4);
        assert!(ranked.windows(2).all(|w| w[0].suitability_score >= w[1].suitability_score));
        let table = format_table(&ranked);
        assert_eq!(table.lines().count(), 5);
    }

    #[test]
    fn saved_records_decode() {
        let record = readings().validate().unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(decode_record(&json).unwrap(), record);
    }

    #[test]
    fn out_of_range_saved_records_are_rejected() {
        let json = r#"{"nitrogen":400.0,"phosphorus":30.0,"potassium":35.0,"temperature":25.0,
            "humidity":60.0,"ph":6.5,"rainfall":100.0,"location":"Fresno, CA","soilType":"loamy"}"#;
        let err = decode_record(json).unwrap_err();
        assert!(err.to_string().contains("corrupt"));
    }
}
