pub mod customer;
pub mod no_fly;
pub mod order;

pub use customer::{BookingError, Customer};
pub use no_fly::NoFlyList;
pub use order::{FlightOrder, OrderError, OrderStatus};
