use crate::flight::RouteLeg;
use crate::scheduled::ScheduledFlight;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered collection of scheduled flights. The schedule exclusively owns
/// every instance it creates; callers address single entries by id and
/// only ever see read-only views of the sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    flights: Vec<ScheduledFlight>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the route leg to a departure time and appends the resulting
    /// flight, returning a view of the created instance.
    pub fn schedule_flight(
        &mut self,
        leg: &RouteLeg,
        departure_time: DateTime<Utc>,
    ) -> &ScheduledFlight {
        let flight = ScheduledFlight::new(leg.clone(), departure_time);
        tracing::debug!(number = flight.number(), %departure_time, "flight scheduled");
        self.flights.push(flight);
        &self.flights[self.flights.len() - 1]
    }

    /// Removes every entry structurally matching the leg, across all its
    /// scheduled departures. Returns whether anything was removed.
    pub fn remove_flight(&mut self, leg: &RouteLeg) -> bool {
        let before = self.flights.len();
        self.flights.retain(|flight| !flight.matches_leg(leg));
        let removed = before - self.flights.len();
        if removed > 0 {
            tracing::debug!(number = leg.number(), removed, "flights removed from schedule");
        }
        removed > 0
    }

    /// Removes the one instance with the given id. Returns false if the
    /// schedule does not hold it.
    pub fn remove_scheduled_flight(&mut self, id: Uuid) -> bool {
        let before = self.flights.len();
        self.flights.retain(|flight| flight.id() != id);
        before != self.flights.len()
    }

    /// First entry with the given flight number, in insertion order.
    pub fn search_scheduled_flight(&self, number: u32) -> Option<&ScheduledFlight> {
        self.flights.iter().find(|flight| flight.number() == number)
    }

    pub fn flight(&self, id: Uuid) -> Option<&ScheduledFlight> {
        self.flights.iter().find(|flight| flight.id() == id)
    }

    pub fn flight_mut(&mut self, id: Uuid) -> Option<&mut ScheduledFlight> {
        self.flights.iter_mut().find(|flight| flight.id() == id)
    }

    pub fn scheduled_flights(&self) -> &[ScheduledFlight] {
        &self.flights
    }

    pub fn clear(&mut self) {
        self.flights.clear();
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}
