pub mod identity;
pub mod payment;

pub use identity::Passenger;
pub use payment::{AccountDirectory, CreditCardPayment, ExternalAccountPayment, PaymentStrategy};
