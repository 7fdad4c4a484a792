use serde::{Deserialize, Serialize};
use std::fmt;
use tarmac_catalog::{Aircraft, Airport};

/// Immutable route definition: a flight number, its two airports and the
/// aircraft assigned to fly it. Equality is structural over all four
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteLeg {
    number: u32,
    departure: Airport,
    arrival: Airport,
    aircraft: Aircraft,
}

impl RouteLeg {
    /// Validates the configuration and constructs the leg. The flight
    /// number must be positive, the airports must differ, and both
    /// airports must admit the assigned aircraft.
    pub fn new(
        number: u32,
        departure: Airport,
        arrival: Airport,
        aircraft: Aircraft,
    ) -> Result<Self, FlightError> {
        if number == 0 {
            return Err(FlightError::InvalidNumber);
        }
        if departure == arrival {
            return Err(FlightError::SameAirport {
                code: departure.code.clone(),
            });
        }
        for airport in [&departure, &arrival] {
            if !airport.allows(&aircraft) {
                return Err(FlightError::AircraftNotPermitted {
                    model: aircraft.model_name.clone(),
                    airport: airport.code.clone(),
                });
            }
        }
        Ok(Self {
            number,
            departure,
            arrival,
            aircraft,
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn departure(&self) -> &Airport {
        &self.departure
    }

    pub fn arrival(&self) -> &Airport {
        &self.arrival
    }

    pub fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }
}

impl fmt::Display for RouteLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}/{}",
            self.aircraft.model_name, self.number, self.departure.code, self.arrival.code
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FlightError {
    #[error("Flight number must be positive")]
    InvalidNumber,

    #[error("Departure and arrival airports cannot be the same: {code}")]
    SameAirport { code: String },

    #[error("Aircraft {model} is not permitted at airport {airport}")]
    AircraftNotPermitted { model: String, airport: String },
}
