use thiserror::Error;

/// Errors that can occur when placing an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// A required form field was left blank.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// The email address is not plausible.
    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },

    /// The cart has nothing to check out.
    #[error("Cart is empty")]
    EmptyCart,
}
