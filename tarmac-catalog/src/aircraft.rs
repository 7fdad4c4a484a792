use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Static descriptor for a named aircraft variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
    pub model_name: String,
    pub passenger_capacity: u32,
    pub crew_capacity: u32,
}

impl Aircraft {
    pub fn new(model_name: impl Into<String>, passenger_capacity: u32, crew_capacity: u32) -> Self {
        Self {
            model_name: model_name.into(),
            passenger_capacity,
            crew_capacity,
        }
    }
}

/// Category tag used to key catalog lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AircraftCategory {
    Plane,
    Helicopter,
    Drone,
}

impl fmt::Display for AircraftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AircraftCategory::Plane => write!(f, "plane"),
            AircraftCategory::Helicopter => write!(f, "helicopter"),
            AircraftCategory::Drone => write!(f, "drone"),
        }
    }
}

impl FromStr for AircraftCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plane" => Ok(AircraftCategory::Plane),
            "helicopter" => Ok(AircraftCategory::Helicopter),
            "drone" => Ok(AircraftCategory::Drone),
            _ => Err(CatalogError::UnknownCategory(s.to_string())),
        }
    }
}

/// Fixed lookup table of the aircraft variants the operator flies,
/// keyed by category and model name.
pub struct AircraftCatalog;

impl AircraftCatalog {
    pub fn resolve(category: AircraftCategory, model: &str) -> Result<Aircraft, CatalogError> {
        let aircraft = match (category, model) {
            (AircraftCategory::Plane, "A380") => Aircraft::new("A380", 500, 42),
            (AircraftCategory::Plane, "A350") => Aircraft::new("A350", 320, 40),
            (AircraftCategory::Plane, "Embraer 190") => Aircraft::new("Embraer 190", 25, 5),
            (AircraftCategory::Plane, "Antonov AN2") => Aircraft::new("Antonov AN2", 15, 3),
            (AircraftCategory::Helicopter, "H1") => Aircraft::new("H1", 4, 0),
            (AircraftCategory::Helicopter, "H2") => Aircraft::new("H2", 6, 0),
            (AircraftCategory::Drone, "HypaHype") => Aircraft::new("HypaHype", 0, 0),
            _ => {
                return Err(CatalogError::UnknownModel {
                    category,
                    model: model.to_string(),
                })
            }
        };
        Ok(aircraft)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Aircraft category '{0}' is not recognized")]
    UnknownCategory(String),

    #[error("{category} model '{model}' is not recognized")]
    UnknownModel {
        category: AircraftCategory,
        model: String,
    },
}
