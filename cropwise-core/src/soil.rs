use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primary soil texture of a field.
///
/// Serialized in lowercase (`"loamy"`); parsing is case-insensitive so both
/// `"Loamy"` and `"loamy"` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SoilType {
    Clay,
    Sandy,
    Loamy,
    Chalky,
    Peaty,
    Silty,
}

impl SoilType {
    pub const ALL: [SoilType; 6] = [
        SoilType::Clay,
        SoilType::Sandy,
        SoilType::Loamy,
        SoilType::Chalky,
        SoilType::Peaty,
        SoilType::Silty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Sandy => "sandy",
            SoilType::Loamy => "loamy",
            SoilType::Chalky => "chalky",
            SoilType::Peaty => "peaty",
            SoilType::Silty => "silty",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Sandy => "Sandy",
            SoilType::Loamy => "Loamy",
            SoilType::Chalky => "Chalky",
            SoilType::Peaty => "Peaty",
            SoilType::Silty => "Silty",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SoilType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SoilType::ALL
            .iter()
            .copied()
            .find(|soil| soil.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::UnknownSoilType(needle.to_string()))
    }
}

impl TryFrom<String> for SoilType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SoilType> for String {
    fn from(soil: SoilType) -> Self {
        soil.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::SoilType;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("loamy".parse::<SoilType>().unwrap(), SoilType::Loamy);
        assert_eq!("Loamy".parse::<SoilType>().unwrap(), SoilType::Loamy);
        assert_eq!(" PEATY ".parse::<SoilType>().unwrap(), SoilType::Peaty);
        assert!("gravel".parse::<SoilType>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SoilType::Silty).unwrap(), "\"silty\"");
        let soil: SoilType = serde_json::from_str("\"Chalky\"").unwrap();
        assert_eq!(soil, SoilType::Chalky);
    }
}
