//! Order placement.

use cart::{CartLine, CartStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snapshot_store::SnapshotStore;
use uuid::Uuid;

use crate::error::CheckoutError;
use crate::form::CheckoutForm;
use crate::totals::OrderTotals;

/// Unique identifier for a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Creates a new random order ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A successfully placed order: the cart contents and totals captured
/// at the moment of checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrder {
    /// Order identifier.
    pub id: OrderId,

    /// When the order was placed.
    pub placed_at: DateTime<Utc>,

    /// The shopper's checkout details.
    pub customer: CheckoutForm,

    /// The ordered lines, in cart order.
    pub lines: Vec<CartLine>,

    /// The charged amounts.
    pub totals: OrderTotals,
}

/// Places an order from the current cart contents.
///
/// Validates the form, captures the cart lines and totals, and clears
/// the cart. The cart is left untouched when validation fails or the
/// cart is empty.
#[tracing::instrument(skip(store, form), fields(payment_method = %form.payment_method))]
pub fn place_order<S: SnapshotStore>(
    store: &CartStore<S>,
    form: CheckoutForm,
) -> Result<PlacedOrder, CheckoutError> {
    form.validate()?;

    let lines = store.lines();
    if lines.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let totals = OrderTotals::from_subtotal(store.total_price());
    let order = PlacedOrder {
        id: OrderId::new(),
        placed_at: Utc::now(),
        customer: form,
        lines,
        totals,
    };

    store.clear();

    metrics::counter!("orders_placed_total").increment(1);
    tracing::info!(order_id = %order.id, total = %order.totals.total, "order placed");

    Ok(order)
}
