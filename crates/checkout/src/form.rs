//! Checkout form data and validation.

use serde::{Deserialize, Serialize};

use crate::error::CheckoutError;

/// Payment method selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Credit or debit card (the pre-selected option).
    #[default]
    CreditCard,

    /// Manual bank transfer.
    BankTransfer,

    /// E-wallet payment.
    EWallet,
}

impl PaymentMethod {
    /// Returns the wire identifier for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit-card",
            PaymentMethod::BankTransfer => "bank-transfer",
            PaymentMethod::EWallet => "e-wallet",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The shopper's checkout form. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    /// Validates the form: every field must be non-blank and the email
    /// must have a local part and a domain.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let required: [(&'static str, &str); 7] = [
            ("email", &self.email),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
            ("postal_code", &self.postal_code),
            ("phone", &self.phone),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingField { field });
            }
        }

        if !plausible_email(&self.email) {
            return Err(CheckoutError::InvalidEmail {
                email: self.email.clone(),
            });
        }

        Ok(())
    }

    /// Returns the shopper's full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

fn plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
