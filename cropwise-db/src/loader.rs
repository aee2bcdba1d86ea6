//! Populating the catalog tables.
//!
//! The CSV format is the one parsed by
//! [`CropProfile::parse_catalog_csv`]: one row per crop, a `;`-separated
//! `soils` column and a `low/high/tol` column triple per parameter.

use crate::Database;
use cropwise_core::catalog::CropProfile;
use cropwise_core::field::FieldId;
use rusqlite::{params, Transaction};

fn insert(tx: &Transaction<'_>, crop: &CropProfile) -> rusqlite::Result<()> {
    // Replacing a crop must not leave stale envelope or soil rows behind.
    tx.execute("DELETE FROM crop_envelopes WHERE crop = ?1", params![crop.name])?;
    tx.execute("DELETE FROM crop_soils WHERE crop = ?1", params![crop.name])?;
    tx.execute(
        "INSERT OR REPLACE INTO crops (name, market_potential, expected_yield, water_requirement,
                                       growth_duration, profit_potential, image, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            crop.name,
            crop.market_potential,
            crop.expected_yield,
            crop.water_requirement,
            crop.growth_duration,
            crop.profit_potential,
            crop.image,
            crop.description
        ],
    )?;
    for field in FieldId::NUMERIC {
        if let Some(envelope) = crop.envelope(field) {
            tx.execute(
                "INSERT INTO crop_envelopes (crop, field, low, high, tolerance)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![crop.name, field.key(), envelope.low, envelope.high, envelope.tolerance],
            )?;
        }
    }
    for (position, soil) in crop.preferred_soils.iter().enumerate() {
        tx.execute(
            "INSERT OR IGNORE INTO crop_soils (crop, soil, position) VALUES (?1, ?2, ?3)",
            params![crop.name, soil.as_str(), position as i64],
        )?;
    }
    Ok(())
}

impl Database {
    /// Parse a catalog CSV and load every crop. Returns the number loaded.
    ///
    /// Either the whole file loads or nothing does.
    pub fn load_crops(&self, csv_data: &str) -> anyhow::Result<usize> {
        let crops = CropProfile::parse_catalog_csv(csv_data)?;
        self.insert_crops(&crops)?;
        log::info!("[CropWise] loader: Loaded {} crops", crops.len());
        Ok(crops.len())
    }

    /// Insert (or replace, by name) already-parsed profiles.
    pub fn insert_crops(&self, crops: &[CropProfile]) -> anyhow::Result<()> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        for crop in crops {
            insert(&tx, crop)?;
        }
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use cropwise_core::catalog::CROPS_CSV;

    #[test]
    fn load_builtin_catalog() {
        let db = Database::new().unwrap();
        assert_eq!(db.load_crops(CROPS_CSV).unwrap(), 10);
    }

    #[test]
    fn reloading_replaces_rows() {
        let db = Database::new().unwrap();
        db.load_crops(CROPS_CSV).unwrap();
        db.load_crops(CROPS_CSV).unwrap();
        assert_eq!(db.query_crops().unwrap().len(), 10);
        let rice = db.query_crop("Rice").unwrap().unwrap();
        assert_eq!(rice.preferred_soils.len(), 3);
    }

    #[test]
    fn invalid_csv_loads_nothing() {
        let db = Database::new().unwrap();
        let bad = CROPS_CSV.replacen("Rice,clay;loamy;silty", "Rice,gravel", 1);
        assert!(db.load_crops(&bad).is_err());
        assert!(db.query_crops().unwrap().is_empty());
    }
}
