pub mod aircraft;
pub mod airport;

pub use aircraft::{Aircraft, AircraftCatalog, AircraftCategory, CatalogError};
pub use airport::Airport;
