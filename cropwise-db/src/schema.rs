//! SQL schema for the crop catalog.

/// Returns the full SQL schema as a single batch string.
///
/// - `crops` - one row per crop with its display metadata and market rating
/// - `crop_envelopes` - optimal band and tolerance per crop and parameter
/// - `crop_soils` - preferred soil types per crop
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS crops (
        name TEXT PRIMARY KEY,
        market_potential INTEGER NOT NULL,
        expected_yield TEXT NOT NULL,
        water_requirement TEXT NOT NULL,
        growth_duration TEXT NOT NULL,
        profit_potential TEXT NOT NULL,
        image TEXT NOT NULL,
        description TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS crop_envelopes (
        crop TEXT NOT NULL REFERENCES crops(name) ON DELETE CASCADE,
        field TEXT NOT NULL,
        low REAL NOT NULL,
        high REAL NOT NULL,
        tolerance REAL NOT NULL,
        PRIMARY KEY (crop, field)
    );

    CREATE TABLE IF NOT EXISTS crop_soils (
        crop TEXT NOT NULL REFERENCES crops(name) ON DELETE CASCADE,
        soil TEXT NOT NULL,
        position INTEGER NOT NULL,
        PRIMARY KEY (crop, soil)
    );
    CREATE INDEX IF NOT EXISTS idx_crop_soils_soil ON crop_soils(soil);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for table in ["crops", "crop_envelopes", "crop_soils"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "table {table} should exist");
        }
    }
}
