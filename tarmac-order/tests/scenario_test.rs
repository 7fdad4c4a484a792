use chrono::{Duration, Utc};
use std::sync::{Arc, Mutex};
use tarmac_catalog::{Airport, AircraftCatalog, AircraftCategory};
use tarmac_core::{
    AccountDirectory, CreditCardPayment, ExternalAccountPayment, PaymentStrategy,
};
use tarmac_order::{BookingError, Customer, NoFlyList};
use tarmac_schedule::{FlightError, RouteLeg, Schedule};
use uuid::Uuid;

/// Test double keeping the card reachable after it is boxed into an
/// order, so balances can be asserted post-settlement.
#[derive(Debug, Clone)]
struct SharedCard(Arc<Mutex<CreditCardPayment>>);

impl SharedCard {
    fn new(card: CreditCardPayment) -> Self {
        Self(Arc::new(Mutex::new(card)))
    }

    fn balance(&self) -> f64 {
        self.0.lock().unwrap().balance()
    }
}

impl PaymentStrategy for SharedCard {
    fn pay(&mut self, amount: f64) -> bool {
        self.0.lock().unwrap().pay(amount)
    }
}

fn jfk() -> Airport {
    Airport::new(
        "John F. Kennedy International Airport",
        "JFK",
        "Queens, New York, New York",
    )
}

fn berlin() -> Airport {
    Airport::new("Berlin Airport", "BER", "Berlin, Berlin")
}

fn frankfurt() -> Airport {
    Airport::new("Frankfurt Airport", "FRA", "Frankfurt, Hesse")
}

fn schedule_h1_leg() -> (Schedule, Uuid) {
    let h1 = AircraftCatalog::resolve(AircraftCategory::Helicopter, "H1").unwrap();
    let leg = RouteLeg::new(5, jfk(), berlin(), h1).unwrap();
    let mut schedule = Schedule::new();
    schedule.schedule_flight(&leg, Utc::now() + Duration::days(3));
    let id = schedule.search_scheduled_flight(5).unwrap().id();
    (schedule, id)
}

fn schedule_a380_leg() -> (Schedule, Uuid) {
    let a380 = AircraftCatalog::resolve(AircraftCategory::Plane, "A380").unwrap();
    let leg = RouteLeg::new(1, berlin(), frankfurt(), a380).unwrap();
    let mut schedule = Schedule::new();
    schedule.schedule_flight(&leg, Utc::now() + Duration::days(3));
    let id = schedule.search_scheduled_flight(1).unwrap().id();
    (schedule, id)
}

#[test]
fn helicopter_cannot_serve_a_restricted_airport() {
    let restricted_frankfurt = Airport::with_allowed_models(
        "Frankfurt Airport",
        "FRA",
        "Frankfurt, Hesse",
        ["A380", "A350"],
    );
    let h1 = AircraftCatalog::resolve(AircraftCategory::Helicopter, "H1").unwrap();

    let err = RouteLeg::new(1, jfk(), restricted_frankfurt, h1).unwrap_err();
    assert!(matches!(
        err,
        FlightError::AircraftNotPermitted { ref model, ref airport }
            if model == "H1" && airport == "FRA"
    ));
}

#[test]
fn booking_on_a_nearly_full_helicopter_is_rejected_atomically() {
    let (mut schedule, flight_id) = schedule_h1_leg();
    let seated: Vec<_> = (0..3)
        .map(|i| tarmac_core::Passenger::new(format!("P{i}")))
        .collect();
    schedule
        .flight_mut(flight_id)
        .unwrap()
        .add_passengers(&seated)
        .unwrap();

    let mut customer = Customer::new("Max Mustermann", "amanda@ya.com");
    let err = customer
        .create_order(
            &["Amanda", "Max"],
            &[flight_id],
            180.0,
            &mut schedule,
            &NoFlyList::new(),
        )
        .unwrap_err();
    assert!(matches!(err, BookingError::InsufficientCapacity { .. }));

    let flight = schedule.flight(flight_id).unwrap();
    assert_eq!(flight.passengers().len(), 3);
    assert_eq!(flight.passenger_capacity(), 4);
    assert_eq!(flight.available_capacity(), 1);
    assert!(flight.passengers().iter().all(|p| p.name != "Amanda"));
    assert!(flight.passengers().iter().all(|p| p.name != "Max"));
    assert!(customer.orders().is_empty());
}

#[test]
fn booking_two_passengers_and_settling_via_external_account() {
    let (mut schedule, flight_id) = schedule_h1_leg();
    let mut customer = Customer::new("Max Mustermann", "amanda@ya.com");

    let order_id = customer
        .create_order(
            &["Amanda", "Max"],
            &[flight_id],
            180.0,
            &mut schedule,
            &NoFlyList::new(),
        )
        .unwrap();

    let flight = schedule.flight(flight_id).unwrap();
    assert_eq!(flight.passengers().len(), 2);
    assert_eq!(flight.passenger_capacity(), 4);
    assert_eq!(flight.available_capacity(), 2);
    assert!(flight.passengers().iter().any(|p| p.name == "Amanda"));
    assert!(flight.passengers().iter().any(|p| p.name == "Max"));

    assert_eq!(customer.orders().len(), 1);
    assert_eq!(customer.orders()[0].id(), order_id);
    assert!(!customer.orders()[0].is_closed());

    let mut directory = AccountDirectory::new();
    directory.register("password123", "user@example.com");

    let order = customer.order_mut(order_id).unwrap();
    order.set_payment_strategy(Box::new(ExternalAccountPayment::new(
        "user@example.com",
        "password123",
        directory,
    )));
    assert!(order.process_order().unwrap());
    assert!(order.is_closed());
}

#[test]
fn bad_external_credentials_leave_the_order_open() {
    let (mut schedule, flight_id) = schedule_h1_leg();
    let mut customer = Customer::new("Max Mustermann", "amanda@ya.com");
    let order_id = customer
        .create_order(&["Amanda"], &[flight_id], 90.0, &mut schedule, &NoFlyList::new())
        .unwrap();

    let mut directory = AccountDirectory::new();
    directory.register("password123", "user@example.com");

    let order = customer.order_mut(order_id).unwrap();
    order.set_payment_strategy(Box::new(ExternalAccountPayment::new(
        "user@example.com",
        "wrong-password",
        directory,
    )));
    assert!(!order.process_order().unwrap());
    assert!(!order.is_closed());
}

#[test]
fn credit_card_settlement_debits_the_card() {
    let (mut schedule, flight_id) = schedule_a380_leg();
    let mut customer = Customer::new("Max Mustermann", "amanda@ya.com");
    let order_id = customer
        .create_order(&["Max"], &[flight_id], 100.0, &mut schedule, &NoFlyList::new())
        .unwrap();

    let card = SharedCard::new(CreditCardPayment::new(
        "4242424242424242",
        Utc::now() + Duration::days(365),
        "123",
        1000.0,
    ));
    let order = customer.order_mut(order_id).unwrap();
    order.set_payment_strategy(Box::new(card.clone()));

    assert!(order.process_order().unwrap());
    assert!(order.is_closed());
    assert_eq!(card.balance(), 900.0);

    let flight = schedule.flight(flight_id).unwrap();
    assert_eq!(flight.passengers().len(), 1);
    assert_eq!(flight.passengers()[0].name, "Max");
    assert_eq!(flight.passenger_capacity(), 500);
    assert_eq!(flight.available_capacity(), 499);
}

#[test]
fn payment_failure_keeps_seats_held() {
    let (mut schedule, flight_id) = schedule_a380_leg();
    let mut customer = Customer::new("Max Mustermann", "amanda@ya.com");
    let order_id = customer
        .create_order(&["Max"], &[flight_id], 100.0, &mut schedule, &NoFlyList::new())
        .unwrap();

    let card = SharedCard::new(CreditCardPayment::new(
        "4242424242424242",
        Utc::now() + Duration::days(365),
        "123",
        50.0,
    ));
    let order = customer.order_mut(order_id).unwrap();
    order.set_payment_strategy(Box::new(card.clone()));

    assert!(!order.process_order().unwrap());
    assert!(!order.is_closed());
    assert_eq!(card.balance(), 50.0);

    // The reservation is not released on a declined payment.
    let flight = schedule.flight(flight_id).unwrap();
    assert_eq!(flight.passengers().len(), 1);
    assert_eq!(flight.available_capacity(), 499);
}

#[test]
fn no_fly_listed_customer_cannot_order() {
    let (mut schedule, flight_id) = schedule_a380_leg();
    let no_fly = NoFlyList::from_names(["Peter", "Johannes"]);
    let mut customer = Customer::new("Peter", "peter@example.com");

    let err = customer
        .create_order(&["Max"], &[flight_id], 100.0, &mut schedule, &no_fly)
        .unwrap_err();
    assert!(matches!(err, BookingError::NoFlyListed { name } if name == "Peter"));
    assert!(schedule.flight(flight_id).unwrap().passengers().is_empty());
}
