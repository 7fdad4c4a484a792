use crate::no_fly::NoFlyList;
use crate::order::FlightOrder;
use std::collections::HashMap;
use tarmac_core::Passenger;
use tarmac_schedule::{Schedule, ScheduledFlightError};
use uuid::Uuid;

/// A booking party. Owns every order it creates; orders are appended and
/// never removed.
#[derive(Debug)]
pub struct Customer {
    id: Uuid,
    name: String,
    email: String,
    orders: Vec<FlightOrder>,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            orders: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn orders(&self) -> &[FlightOrder] {
        &self.orders
    }

    pub fn order(&self, id: Uuid) -> Option<&FlightOrder> {
        self.orders.iter().find(|order| order.id() == id)
    }

    pub fn order_mut(&mut self, id: Uuid) -> Option<&mut FlightOrder> {
        self.orders.iter_mut().find(|order| order.id() == id)
    }

    /// Books `passenger_names` onto every flight in `flight_ids`, all or
    /// nothing. Validation runs fully before the first roster write, so a
    /// rejected booking leaves every flight's roster unchanged. Returns
    /// the id of the created order.
    pub fn create_order(
        &mut self,
        passenger_names: &[&str],
        flight_ids: &[Uuid],
        price: f64,
        schedule: &mut Schedule,
        no_fly: &NoFlyList,
    ) -> Result<Uuid, BookingError> {
        if no_fly.contains(&self.name) {
            return Err(BookingError::NoFlyListed {
                name: self.name.clone(),
            });
        }
        if let Some(name) = passenger_names.iter().find(|name| no_fly.contains(name)) {
            return Err(BookingError::NoFlyListed {
                name: (*name).to_string(),
            });
        }

        // Demand per distinct flight: listing the same flight twice in one
        // request claims the group's seats twice on it.
        let mut demand: HashMap<Uuid, usize> = HashMap::new();
        for flight_id in flight_ids {
            *demand.entry(*flight_id).or_insert(0) += passenger_names.len();
        }
        for (flight_id, requested) in &demand {
            let flight = schedule
                .flight(*flight_id)
                .ok_or(BookingError::UnknownFlight(*flight_id))?;
            let available = flight.available_capacity() as usize;
            if available < *requested {
                return Err(BookingError::InsufficientCapacity {
                    flight_number: flight.number(),
                    requested: *requested,
                    available,
                });
            }
        }

        let passengers: Vec<Passenger> = passenger_names
            .iter()
            .map(|name| Passenger::new(*name))
            .collect();
        for flight_id in flight_ids {
            let flight = schedule
                .flight_mut(*flight_id)
                .ok_or(BookingError::UnknownFlight(*flight_id))?;
            // Capacity was verified above, including repeated flights.
            flight.add_passengers(&passengers)?;
        }

        let order = FlightOrder::new(self.id, flight_ids.to_vec(), passengers, price);
        let order_id = order.id();
        tracing::info!(
            customer = %self.name,
            order = %order_id,
            flights = flight_ids.len(),
            passengers = passenger_names.len(),
            "order created"
        );
        self.orders.push(order);
        Ok(order_id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("'{name}' is on the no-fly list")]
    NoFlyListed { name: String },

    #[error("Flight {flight_number} has {available} seats available, {requested} requested")]
    InsufficientCapacity {
        flight_number: u32,
        requested: usize,
        available: usize,
    },

    #[error("Scheduled flight {0} is not in the schedule")]
    UnknownFlight(Uuid),

    #[error(transparent)]
    Seating(#[from] ScheduledFlightError),
}
