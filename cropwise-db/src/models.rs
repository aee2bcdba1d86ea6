//! Lightweight query result structs.

use serde::Serialize;

/// One line of the catalog listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CropSummary {
    pub name: String,
    pub market_potential: u8,
    pub water_requirement: String,
    pub growth_duration: String,
    /// Preferred soils in catalog order, lowercase.
    pub soils: Vec<String>,
}
