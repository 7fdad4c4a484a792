use crate::flight::RouteLeg;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tarmac_catalog::{Aircraft, Airport};
use tarmac_core::Passenger;
use uuid::Uuid;

/// Price a freshly scheduled flight carries until repriced.
pub const DEFAULT_PRICE: f64 = 100.0;

/// A route leg bound to a concrete departure time, carrying the live,
/// capacity-bounded passenger roster for that departure. Instances are
/// created and owned by a [`crate::Schedule`] only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledFlight {
    id: Uuid,
    leg: RouteLeg,
    departure_time: DateTime<Utc>,
    passengers: Vec<Passenger>,
    current_price: f64,
}

impl ScheduledFlight {
    pub(crate) fn new(leg: RouteLeg, departure_time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            leg,
            departure_time,
            passengers: Vec::new(),
            current_price: DEFAULT_PRICE,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn leg(&self) -> &RouteLeg {
        &self.leg
    }

    pub fn number(&self) -> u32 {
        self.leg.number()
    }

    pub fn departure(&self) -> &Airport {
        self.leg.departure()
    }

    pub fn arrival(&self) -> &Airport {
        self.leg.arrival()
    }

    pub fn aircraft(&self) -> &Aircraft {
        self.leg.aircraft()
    }

    /// Returned by value; the stored timestamp cannot be reached through
    /// the returned copy.
    pub fn departure_time(&self) -> DateTime<Utc> {
        self.departure_time
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn passenger_capacity(&self) -> u32 {
        self.leg.aircraft().passenger_capacity
    }

    pub fn crew_capacity(&self) -> u32 {
        self.leg.aircraft().crew_capacity
    }

    pub fn available_capacity(&self) -> u32 {
        self.passenger_capacity()
            .saturating_sub(self.passengers.len() as u32)
    }

    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    pub fn set_current_price(&mut self, price: f64) -> Result<(), ScheduledFlightError> {
        if price < 0.0 {
            return Err(ScheduledFlightError::NegativePrice(price));
        }
        self.current_price = price;
        Ok(())
    }

    /// Admits the whole batch or nothing: the capacity check runs before
    /// any passenger is appended.
    pub fn add_passengers(&mut self, passengers: &[Passenger]) -> Result<(), ScheduledFlightError> {
        let available = self.available_capacity() as usize;
        if passengers.len() > available {
            return Err(ScheduledFlightError::CapacityExceeded {
                requested: passengers.len(),
                available,
            });
        }
        self.passengers.extend_from_slice(passengers);
        Ok(())
    }

    /// Removes the first matching occurrence of each given passenger;
    /// passengers not on the roster are ignored.
    pub fn remove_passengers(&mut self, passengers: &[Passenger]) {
        for passenger in passengers {
            if let Some(position) = self.passengers.iter().position(|p| p == passenger) {
                self.passengers.remove(position);
            }
        }
    }

    pub(crate) fn matches_leg(&self, leg: &RouteLeg) -> bool {
        self.leg == *leg
    }
}

impl fmt::Display for ScheduledFlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [Time: {}, Price: ${:.2}, Passengers: {}/{}]",
            self.leg,
            self.departure_time.to_rfc3339(),
            self.current_price,
            self.passengers.len(),
            self.passenger_capacity()
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScheduledFlightError {
    #[error("Cannot add {requested} passengers, only {available} seats available")]
    CapacityExceeded { requested: usize, available: usize },

    #[error("Price cannot be negative: {0}")]
    NegativePrice(f64),
}
