//! Order totals: subtotal, service fee, and tax.

use cart::Cart;
use common::Money;
use serde::{Deserialize, Serialize};

/// Flat service fee charged on every order (Rp5.000).
pub const SERVICE_FEE_MAJOR: i64 = 5_000;

/// Tax rate applied to the cart subtotal, in percent.
pub const TAX_RATE_PERCENT: u32 = 10;

/// The amounts shown in the checkout order summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Sum of `unit_price * quantity` across the cart.
    pub subtotal: Money,

    /// Flat service fee.
    pub service_fee: Money,

    /// Tax on the subtotal.
    pub tax: Money,

    /// Amount due: subtotal + service fee + tax.
    pub total: Money,
}

impl OrderTotals {
    /// Computes totals for a cart's contents.
    pub fn from_cart(cart: &Cart) -> Self {
        Self::from_subtotal(cart.total_price())
    }

    /// Computes totals from a known subtotal.
    pub fn from_subtotal(subtotal: Money) -> Self {
        let service_fee = Money::from_major(SERVICE_FEE_MAJOR);
        let tax = subtotal.percent(TAX_RATE_PERCENT);
        Self {
            subtotal,
            service_fee,
            tax,
            total: subtotal + service_fee + tax,
        }
    }
}
