//! Catalog loading and listing.

use anyhow::Context;
use cropwise_core::soil::SoilType;
use cropwise_db::models::CropSummary;
use cropwise_db::Database;
use log::info;

/// Open the catalog database, from `path` when given, else the embedded CSV.
pub async fn open_catalog(path: Option<&str>) -> anyhow::Result<Database> {
    match path {
        Some(path) => {
            let csv = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("reading crop catalog {path}"))?;
            let db = Database::new()?;
            let count = db
                .load_crops(&csv)
                .with_context(|| format!("loading crop catalog {path}"))?;
            info!("Loaded {count} crops from {path}");
            Ok(db)
        }
        None => Database::with_builtin_catalog(),
    }
}

/// One line per crop: name, market rating, water need, duration and soils.
pub fn format_summaries(crops: &[CropSummary]) -> String {
    let mut out = format!(
        "{:<12} {:>6}  {:<10} {:<14} {}\n",
        "Crop", "Market", "Water", "Duration", "Soils"
    );
    for crop in crops {
        out.push_str(&format!(
            "{:<12} {:>6}  {:<10} {:<14} {}\n",
            crop.name,
            crop.market_potential,
            crop.water_requirement,
            crop.growth_duration,
            crop.soils.join(", ")
        ));
    }
    out
}

/// Print the catalog, optionally restricted to crops preferring `soil_type`.
pub async fn run_catalog(soil_type: Option<&str>, catalog: Option<&str>) -> anyhow::Result<()> {
    let db = open_catalog(catalog).await?;
    let mut summaries = db.query_crop_summaries()?;

    if let Some(raw) = soil_type {
        let soil: SoilType = raw.parse()?;
        let names: Vec<String> = db
            .query_crops_for_soil(soil)?
            .into_iter()
            .map(|crop| crop.name)
            .collect();
        summaries.retain(|s| names.contains(&s.name));
        info!("{} crops prefer {} soil", summaries.len(), soil.as_str());
    }

    print!("{}", format_summaries(&summaries));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builtin_catalog_opens() {
        let db = open_catalog(None).await.unwrap();
        assert_eq!(db.query_crops().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn missing_catalog_file_is_an_error() {
        let err = open_catalog(Some("/nonexistent/crops.csv")).await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/crops.csv"));
    }

    #[test]
    fn summaries_table_has_header_and_rows() {
        let db = Database::with_builtin_catalog().unwrap();
        let text = format_summaries(&db.query_crop_summaries().unwrap());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("Crop"));
        assert!(text.contains("Potato"));
    }
}
