use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Pluggable settlement mechanism. `pay` is a decision plus at most one
/// mutation of the strategy's own state; it never touches the order or
/// the seat inventory, and the outcome is deterministic given the
/// strategy's state and the amount.
pub trait PaymentStrategy: fmt::Debug + Send {
    /// Attempt to settle `amount`. Returns whether the payment went through.
    fn pay(&mut self, amount: f64) -> bool;
}

/// Card-backed settlement with a local balance standing in for the
/// issuer's credit line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCardPayment {
    number: String,
    expiration: DateTime<Utc>,
    cvv: String,
    balance: f64,
}

impl CreditCardPayment {
    pub fn new(
        number: impl Into<String>,
        expiration: DateTime<Utc>,
        cvv: impl Into<String>,
        balance: f64,
    ) -> Self {
        Self {
            number: number.into(),
            expiration,
            cvv: cvv.into(),
            balance,
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn set_balance(&mut self, balance: f64) {
        self.balance = balance;
    }

    /// The card is usable while the number is present, the expiration is
    /// strictly in the future and the CVV is not the "000" sentinel.
    pub fn is_valid(&self) -> bool {
        !self.number.is_empty() && self.expiration > Utc::now() && self.cvv != "000"
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn pay(&mut self, amount: f64) -> bool {
        if !self.is_valid() {
            tracing::warn!(amount, "credit card failed validation");
            return false;
        }
        if self.balance < amount {
            tracing::warn!(amount, balance = self.balance, "insufficient credit card balance");
            return false;
        }
        self.balance -= amount;
        tracing::info!(amount, "paid with credit card");
        true
    }
}

/// Shared-secret to account-identifier mapping standing in for a third
/// party's account database. Passed explicitly to the strategies that
/// consult it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountDirectory {
    accounts: HashMap<String, String>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, secret: impl Into<String>, account: impl Into<String>) {
        self.accounts.insert(secret.into(), account.into());
    }

    pub fn verify(&self, secret: &str, account: &str) -> bool {
        self.accounts.get(secret).is_some_and(|known| known == account)
    }
}

/// Settlement against an externally held account, authorized by a
/// credential pair checked against the directory.
#[derive(Debug, Clone)]
pub struct ExternalAccountPayment {
    account: String,
    secret: String,
    directory: AccountDirectory,
}

impl ExternalAccountPayment {
    pub fn new(
        account: impl Into<String>,
        secret: impl Into<String>,
        directory: AccountDirectory,
    ) -> Self {
        Self {
            account: account.into(),
            secret: secret.into(),
            directory,
        }
    }
}

impl PaymentStrategy for ExternalAccountPayment {
    fn pay(&mut self, amount: f64) -> bool {
        if self.directory.verify(&self.secret, &self.account) {
            tracing::info!(amount, account = %self.account, "paid via external account");
            true
        } else {
            tracing::warn!(account = %self.account, "external account credentials rejected");
            false
        }
    }
}
