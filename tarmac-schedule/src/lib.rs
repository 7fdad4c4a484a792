pub mod flight;
pub mod schedule;
pub mod scheduled;

pub use flight::{FlightError, RouteLeg};
pub use schedule::Schedule;
pub use scheduled::{ScheduledFlight, ScheduledFlightError, DEFAULT_PRICE};
