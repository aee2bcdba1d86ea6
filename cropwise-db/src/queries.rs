//! Typed catalog queries.
//!
//! Profiles come back ordered by crop name so every caller sees the same
//! order regardless of load order.

use crate::models::CropSummary;
use crate::Database;
use cropwise_core::catalog::{CropProfile, Envelope};
use cropwise_core::field::FieldId;
use cropwise_core::soil::SoilType;
use rusqlite::{params, Connection, OptionalExtension};

fn field_from_key(key: &str) -> Option<FieldId> {
    FieldId::NUMERIC.into_iter().find(|f| f.key() == key)
}

fn soils(conn: &Connection, crop: &str) -> anyhow::Result<Vec<SoilType>> {
    let mut stmt = conn.prepare("SELECT soil FROM crop_soils WHERE crop = ?1 ORDER BY position")?;
    let raw = stmt
        .query_map(params![crop], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    raw.iter()
        .map(|s| s.parse::<SoilType>().map_err(anyhow::Error::from))
        .collect()
}

fn fetch_profile(conn: &Connection, name: &str) -> anyhow::Result<Option<CropProfile>> {
    let row = conn
        .query_row(
            "SELECT name, market_potential, expected_yield, water_requirement, growth_duration,
                    profit_potential, image, description
             FROM crops WHERE name = ?1",
            params![name],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, u8>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, String>(6)?,
                    row.get::<_, String>(7)?,
                ))
            },
        )
        .optional()?;
    let Some((
        name,
        market_potential,
        expected_yield,
        water_requirement,
        growth_duration,
        profit_potential,
        image,
        description,
    )) = row
    else {
        return Ok(None);
    };

    let mut stmt = conn.prepare(
        "SELECT field, low, high, tolerance FROM crop_envelopes WHERE crop = ?1",
    )?;
    let envelopes = stmt
        .query_map(params![name], |row| {
            Ok((
                row.get::<_, String>(0)?,
                Envelope::new(row.get(1)?, row.get(2)?, row.get(3)?),
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    let envelope = |field: FieldId| -> anyhow::Result<Envelope> {
        envelopes
            .iter()
            .find(|(key, _)| field_from_key(key) == Some(field))
            .map(|(_, e)| *e)
            .ok_or_else(|| anyhow::anyhow!("crop '{name}' has no {} envelope", field.key()))
    };

    Ok(Some(CropProfile {
        preferred_soils: soils(conn, &name)?,
        nitrogen: envelope(FieldId::Nitrogen)?,
        phosphorus: envelope(FieldId::Phosphorus)?,
        potassium: envelope(FieldId::Potassium)?,
        temperature: envelope(FieldId::Temperature)?,
        humidity: envelope(FieldId::Humidity)?,
        ph: envelope(FieldId::Ph)?,
        rainfall: envelope(FieldId::Rainfall)?,
        market_potential,
        expected_yield,
        water_requirement,
        growth_duration,
        profit_potential,
        image,
        description,
        name,
    }))
}

fn fetch_profiles(conn: &Connection, names: &[String]) -> anyhow::Result<Vec<CropProfile>> {
    let mut profiles = Vec::with_capacity(names.len());
    for name in names {
        if let Some(profile) = fetch_profile(conn, name)? {
            profiles.push(profile);
        }
    }
    Ok(profiles)
}

impl Database {
    /// Every crop profile, ordered by name.
    pub fn query_crops(&self) -> anyhow::Result<Vec<CropProfile>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT name FROM crops ORDER BY name")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        let profiles = fetch_profiles(&conn, &names)?;
        log::info!("[CropWise] query: query_crops returned {} records", profiles.len());
        Ok(profiles)
    }

    /// A single crop by exact name.
    pub fn query_crop(&self, name: &str) -> anyhow::Result<Option<CropProfile>> {
        let conn = self.conn.borrow();
        fetch_profile(&conn, name)
    }

    /// Crops that list `soil` among their preferred soils, ordered by name.
    pub fn query_crops_for_soil(&self, soil: SoilType) -> anyhow::Result<Vec<CropProfile>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT c.name FROM crops c
             INNER JOIN crop_soils s ON s.crop = c.name
             WHERE s.soil = ?1
             ORDER BY c.name",
        )?;
        let names = stmt
            .query_map(params![soil.as_str()], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        let profiles = fetch_profiles(&conn, &names)?;
        log::info!(
            "[CropWise] query: query_crops_for_soil({}) returned {} records",
            soil.as_str(),
            profiles.len()
        );
        Ok(profiles)
    }

    /// Name, rating and soils of every crop, for listings.
    pub fn query_crop_summaries(&self) -> anyhow::Result<Vec<CropSummary>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT c.name, c.market_potential, c.water_requirement, c.growth_duration,
                    COALESCE((SELECT GROUP_CONCAT(soil, ';' ORDER BY position)
                              FROM crop_soils WHERE crop = c.name), '')
             FROM crops c
             ORDER BY c.name",
        )?;
        let rows = stmt
            .query_map([], |row| {
                let soils: String = row.get(4)?;
                Ok(CropSummary {
                    name: row.get(0)?,
                    market_potential: row.get(1)?,
                    water_requirement: row.get(2)?,
                    growth_duration: row.get(3)?,
                    soils: soils
                        .split(';')
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use cropwise_core::catalog::CropProfile;
    use cropwise_core::soil::SoilType;

    fn db() -> Database {
        Database::with_builtin_catalog().unwrap()
    }

    #[test]
    fn query_crops_round_trips_the_catalog() {
        let mut expected = CropProfile::builtin_catalog().unwrap();
        expected.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(db().query_crops().unwrap(), expected);
    }

    #[test]
    fn query_crop_by_name() {
        let db = db();
        let wheat = db.query_crop("Wheat").unwrap().unwrap();
        assert_eq!(wheat.market_potential, 85);
        assert_eq!(
            wheat.preferred_soils,
            vec![SoilType::Loamy, SoilType::Clay, SoilType::Silty]
        );
        assert!(db.query_crop("Quinoa").unwrap().is_none());
    }

    #[test]
    fn query_crops_for_soil_filters() {
        let db = db();
        let peaty = db.query_crops_for_soil(SoilType::Peaty).unwrap();
        assert_eq!(peaty.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), vec!["Potato"]);
        let chalky: Vec<_> = db
            .query_crops_for_soil(SoilType::Chalky)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(chalky, vec!["Barley", "Chickpea"]);
    }

    #[test]
    fn summaries_list_soils_in_catalog_order() {
        let summaries = db().query_crop_summaries().unwrap();
        assert_eq!(summaries.len(), 10);
        let rice = summaries.iter().find(|s| s.name == "Rice").unwrap();
        assert_eq!(rice.soils, vec!["clay", "loamy", "silty"]);
        assert_eq!(rice.water_requirement, "High");
    }
}
