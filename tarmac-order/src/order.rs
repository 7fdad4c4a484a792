use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tarmac_core::{Passenger, PaymentStrategy};
use uuid::Uuid;

/// Order status in the settlement lifecycle. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Open,
    Closed,
}

/// The booking record: the flights it reserves seats on, the passengers
/// it seats, the agreed price and the settlement mechanism. Stays `Open`
/// until a payment succeeds, then flips to `Closed` for good.
#[derive(Debug)]
pub struct FlightOrder {
    id: Uuid,
    customer_id: Uuid,
    flight_ids: Vec<Uuid>,
    passengers: Vec<Passenger>,
    price: f64,
    payment: Option<Box<dyn PaymentStrategy>>,
    status: OrderStatus,
    created_at: DateTime<Utc>,
}

impl FlightOrder {
    pub(crate) fn new(
        customer_id: Uuid,
        flight_ids: Vec<Uuid>,
        passengers: Vec<Passenger>,
        price: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            flight_ids,
            passengers,
            price,
            payment: None,
            status: OrderStatus::Open,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer_id(&self) -> Uuid {
        self.customer_id
    }

    pub fn flight_ids(&self) -> &[Uuid] {
        &self.flight_ids
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_closed(&self) -> bool {
        self.status == OrderStatus::Closed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces any previously attached strategy. Has no effect on a
    /// closed order beyond being ignored by [`Self::process_order`].
    pub fn set_payment_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.payment = Some(strategy);
    }

    /// Drives settlement. A closed order returns true without invoking
    /// the payment mechanism again; an open order without a strategy is
    /// an error. On a declined payment the order stays open and the
    /// seats already committed to it stay held.
    pub fn process_order(&mut self) -> Result<bool, OrderError> {
        if self.is_closed() {
            return Ok(true);
        }
        let payment = self.payment.as_mut().ok_or(OrderError::PaymentNotConfigured)?;
        if payment.pay(self.price) {
            self.status = OrderStatus::Closed;
            tracing::info!(order = %self.id, price = self.price, "order settled");
            Ok(true)
        } else {
            tracing::warn!(order = %self.id, price = self.price, "payment declined, order stays open");
            Ok(false)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("No payment strategy attached to the order")]
    PaymentNotConfigured,
}
