use crate::aircraft::Aircraft;
use serde::{Deserialize, Serialize};

/// Registry record for an airport. An empty allow-list places no
/// restriction on which aircraft may use the airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub name: String,
    pub code: String,
    pub location: String,
    #[serde(default)]
    pub allowed_aircraft_models: Vec<String>,
}

impl Airport {
    /// An airport without aircraft restrictions.
    pub fn new(name: impl Into<String>, code: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            location: location.into(),
            allowed_aircraft_models: Vec::new(),
        }
    }

    /// An airport restricted to the given aircraft models.
    pub fn with_allowed_models(
        name: impl Into<String>,
        code: impl Into<String>,
        location: impl Into<String>,
        models: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            location: location.into(),
            allowed_aircraft_models: models.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allows(&self, aircraft: &Aircraft) -> bool {
        self.allowed_aircraft_models.is_empty()
            || self
                .allowed_aircraft_models
                .iter()
                .any(|model| *model == aircraft.model_name)
    }
}
