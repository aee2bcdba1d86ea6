use crate::error::CatalogError;
use crate::field::FieldId;
use crate::soil::SoilType;
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

/// Embedded crop catalog compiled into every binary.
pub static CROPS_CSV: &str = include_str!("../../fixtures/crops.csv");

/// Optimal band for one growing parameter.
///
/// A reading inside `[low, high]` fits perfectly; outside it the fit falls
/// linearly and reaches zero `tolerance` units past the nearest boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub low: f64,
    pub high: f64,
    pub tolerance: f64,
}

impl Envelope {
    pub fn new(low: f64, high: f64, tolerance: f64) -> Self {
        Self {
            low,
            high,
            tolerance,
        }
    }

    /// Distance from the band, 0 when inside it.
    pub fn distance(&self, value: f64) -> f64 {
        if value < self.low {
            self.low - value
        } else if value > self.high {
            value - self.high
        } else {
            0.0
        }
    }

    /// Fit in `[0, 1]`.
    pub fn fit(&self, value: f64) -> f64 {
        let distance = self.distance(value);
        if distance == 0.0 {
            1.0
        } else if self.tolerance <= 0.0 {
            0.0
        } else {
            (1.0 - distance / self.tolerance).max(0.0)
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.distance(value) == 0.0
    }
}

/// Growing requirements and display metadata for one crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    pub name: String,
    pub preferred_soils: Vec<SoilType>,
    pub nitrogen: Envelope,
    pub phosphorus: Envelope,
    pub potassium: Envelope,
    pub temperature: Envelope,
    pub humidity: Envelope,
    pub ph: Envelope,
    pub rainfall: Envelope,
    /// Static market rating, 0-100.
    pub market_potential: u8,
    pub expected_yield: String,
    pub water_requirement: String,
    pub growth_duration: String,
    pub profit_potential: String,
    pub image: String,
    pub description: String,
}

/// Column triples (low, high, tolerance) in catalog order.
const ENVELOPE_COLUMNS: [(FieldId, &str, &str, &str); 7] = [
    (FieldId::Nitrogen, "n_low", "n_high", "n_tol"),
    (FieldId::Phosphorus, "p_low", "p_high", "p_tol"),
    (FieldId::Potassium, "k_low", "k_high", "k_tol"),
    (FieldId::Temperature, "temp_low", "temp_high", "temp_tol"),
    (FieldId::Humidity, "humidity_low", "humidity_high", "humidity_tol"),
    (FieldId::Ph, "ph_low", "ph_high", "ph_tol"),
    (FieldId::Rainfall, "rain_low", "rain_high", "rain_tol"),
];

struct Row<'a> {
    headers: &'a StringRecord,
    record: &'a StringRecord,
    line: u64,
}

impl Row<'_> {
    fn text(&self, column: &'static str) -> Result<&str, CatalogError> {
        self.headers
            .iter()
            .position(|h| h.trim() == column)
            .and_then(|idx| self.record.get(idx))
            .map(str::trim)
            .ok_or(CatalogError::MissingColumn {
                line: self.line,
                column,
            })
    }

    fn number(&self, column: &'static str) -> Result<f64, CatalogError> {
        let raw = self.text(column)?;
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CatalogError::InvalidValue {
                line: self.line,
                column,
                value: raw.to_string(),
            })
    }

    fn envelope(&self, low: &'static str, high: &'static str, tol: &'static str) -> Result<Envelope, CatalogError> {
        let envelope = Envelope::new(self.number(low)?, self.number(high)?, self.number(tol)?);
        if envelope.low > envelope.high {
            return Err(CatalogError::InvertedEnvelope {
                line: self.line,
                column: low,
            });
        }
        if envelope.tolerance < 0.0 {
            return Err(CatalogError::InvalidValue {
                line: self.line,
                column: tol,
                value: envelope.tolerance.to_string(),
            });
        }
        Ok(envelope)
    }
}

impl CropProfile {
    /// Parse a crop catalog CSV (with headers) into profiles.
    ///
    /// Columns are looked up by header name, so their order is free.
    /// `soils` is a `;`-separated list of soil types.
    pub fn parse_catalog_csv(csv_object: &str) -> Result<Vec<CropProfile>, CatalogError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        let headers = rdr.headers()?.clone();

        let mut profiles = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(idx as u64 + 2);
            let row = Row {
                headers: &headers,
                record: &record,
                line,
            };

            let soils_raw = row.text("soils")?;
            let preferred_soils = soils_raw
                .split(';')
                .filter(|s| !s.trim().is_empty())
                .map(|s| {
                    s.parse::<SoilType>().map_err(|_| CatalogError::InvalidValue {
                        line,
                        column: "soils",
                        value: s.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            let mut envelopes = Vec::with_capacity(ENVELOPE_COLUMNS.len());
            for (_, low, high, tol) in ENVELOPE_COLUMNS {
                envelopes.push(row.envelope(low, high, tol)?);
            }

            let market = row.number("market")?;
            if !(0.0..=100.0).contains(&market) {
                return Err(CatalogError::InvalidValue {
                    line,
                    column: "market",
                    value: market.to_string(),
                });
            }

            let name = row.text("name")?;
            if name.is_empty() {
                return Err(CatalogError::InvalidValue {
                    line,
                    column: "name",
                    value: String::new(),
                });
            }

            profiles.push(CropProfile {
                name: name.to_string(),
                preferred_soils,
                nitrogen: envelopes[0],
                phosphorus: envelopes[1],
                potassium: envelopes[2],
                temperature: envelopes[3],
                humidity: envelopes[4],
                ph: envelopes[5],
                rainfall: envelopes[6],
                market_potential: market.round() as u8,
                expected_yield: row.text("expected_yield")?.to_string(),
                water_requirement: row.text("water_requirement")?.to_string(),
                growth_duration: row.text("growth_duration")?.to_string(),
                profit_potential: row.text("profit_potential")?.to_string(),
                image: row.text("image")?.to_string(),
                description: row.text("description")?.to_string(),
            });
        }
        log::debug!("parsed {} crop profiles", profiles.len());
        Ok(profiles)
    }

    /// The catalog embedded in [`CROPS_CSV`].
    pub fn builtin_catalog() -> Result<Vec<CropProfile>, CatalogError> {
        Self::parse_catalog_csv(CROPS_CSV)
    }

    /// Envelope for a numeric field.
    pub fn envelope(&self, field: FieldId) -> Option<&Envelope> {
        match field {
            FieldId::Nitrogen => Some(&self.nitrogen),
            FieldId::Phosphorus => Some(&self.phosphorus),
            FieldId::Potassium => Some(&self.potassium),
            FieldId::Temperature => Some(&self.temperature),
            FieldId::Humidity => Some(&self.humidity),
            FieldId::Ph => Some(&self.ph),
            FieldId::Rainfall => Some(&self.rainfall),
            FieldId::Location | FieldId::SoilType => None,
        }
    }

    pub fn prefers(&self, soil: SoilType) -> bool {
        self.preferred_soils.contains(&soil)
    }

    /// `;`-joined soil list, the catalog CSV encoding.
    pub fn soils_csv(&self) -> String {
        self.preferred_soils
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "name,soils,n_low,n_high,n_tol,p_low,p_high,p_tol,k_low,k_high,k_tol,temp_low,temp_high,temp_tol,humidity_low,humidity_high,humidity_tol,ph_low,ph_high,ph_tol,rain_low,rain_high,rain_tol,market,expected_yield,water_requirement,growth_duration,profit_potential,image,description";

    #[test]
    fn envelope_fit_is_flat_inside_and_linear_outside() {
        let env = Envelope::new(20.0, 30.0, 10.0);
        assert_eq!(env.fit(20.0), 1.0);
        assert_eq!(env.fit(30.0), 1.0);
        assert!((env.fit(35.0) - 0.5).abs() < 1e-9);
        assert!((env.fit(15.0) - 0.5).abs() < 1e-9);
        assert_eq!(env.fit(40.0), 0.0);
        assert_eq!(env.fit(100.0), 0.0);
        assert_eq!(Envelope::new(5.0, 5.0, 0.0).fit(5.1), 0.0);
    }

    #[test]
    fn builtin_catalog_parses() {
        let catalog = CropProfile::builtin_catalog().unwrap();
        assert_eq!(catalog.len(), 10);
        let rice = catalog.iter().find(|c| c.name == "Rice").unwrap();
        assert!(rice.prefers(SoilType::Clay));
        assert!(!rice.prefers(SoilType::Chalky));
        assert_eq!(rice.rainfall, Envelope::new(180.0, 300.0, 100.0));
        assert_eq!(rice.market_potential, 80);
        assert!(rice.description.contains("abundant rainfall"));
    }

    #[test]
    fn rejects_inverted_envelope() {
        let csv = format!(
            "{HEADER}\nBad,loamy,90,10,40,1,2,3,1,2,3,1,2,3,1,2,3,1,2,3,1,2,3,50,y,w,g,p,,d\n"
        );
        let err = CropProfile::parse_catalog_csv(&csv).unwrap_err();
        assert!(matches!(err, CatalogError::InvertedEnvelope { column: "n_low", .. }));
    }

    #[test]
    fn rejects_unknown_soil_and_bad_numbers() {
        let csv = format!(
            "{HEADER}\nBad,gravel,1,2,3,1,2,3,1,2,3,1,2,3,1,2,3,1,2,3,1,2,3,50,y,w,g,p,,d\n"
        );
        assert!(matches!(
            CropProfile::parse_catalog_csv(&csv).unwrap_err(),
            CatalogError::InvalidValue { column: "soils", .. }
        ));

        let csv = format!(
            "{HEADER}\nBad,loamy,1,x,3,1,2,3,1,2,3,1,2,3,1,2,3,1,2,3,1,2,3,50,y,w,g,p,,d\n"
        );
        assert!(matches!(
            CropProfile::parse_catalog_csv(&csv).unwrap_err(),
            CatalogError::InvalidValue { column: "n_high", .. }
        ));
    }

    #[test]
    fn empty_catalog_is_ok() {
        let catalog = CropProfile::parse_catalog_csv(&format!("{HEADER}\n")).unwrap();
        assert!(catalog.is_empty());
    }
}
