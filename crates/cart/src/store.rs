//! Shared cart store with persistence and change notification.

use catalog::Product;
use common::{Money, ProductId};
use parking_lot::RwLock;
use snapshot_store::SnapshotStore;
use tokio::sync::watch;

use crate::cart::Cart;
use crate::line::CartLine;

/// Snapshot key the storefront persists the cart under.
pub const DEFAULT_CART_KEY: &str = "astrea.cart";

/// Single source of truth for the cart, shared by every view that
/// renders cart-dependent UI (navigation badge, cart page, checkout
/// summary, product cards).
///
/// Every mutation runs synchronously to completion: the in-memory state
/// is updated, the snapshot is re-persisted, and the new cart is
/// published to all subscribers in the same call. None of the
/// operations return errors; persistence failures are logged and
/// absorbed so a broken backend degrades to a session-only cart.
///
/// Two stores opened on the same backend key do not observe each
/// other's writes; the snapshot is last-write-wins.
pub struct CartStore<S: SnapshotStore> {
    storage: S,
    key: String,
    state: RwLock<Cart>,
    changes: watch::Sender<Cart>,
}

impl<S: SnapshotStore> CartStore<S> {
    /// Opens the store, restoring the persisted snapshot under `key`.
    ///
    /// An absent snapshot starts an empty cart. A snapshot that cannot
    /// be read or parsed also starts an empty cart; the failure is
    /// logged, never surfaced.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = match storage.get(&key) {
            Ok(Some(snapshot)) => match serde_json::from_str::<Cart>(&snapshot) {
                Ok(cart) => cart,
                Err(error) => {
                    tracing::warn!(%key, %error, "discarding corrupt cart snapshot");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(error) => {
                tracing::warn!(%key, %error, "failed to read cart snapshot");
                Cart::new()
            }
        };

        let (changes, _) = watch::channel(cart.clone());
        Self {
            storage,
            key,
            state: RwLock::new(cart),
            changes,
        }
    }

    /// Opens the store under the storefront's default cart key.
    pub fn open_default(storage: S) -> Self {
        Self::open(storage, DEFAULT_CART_KEY)
    }

    /// Subscribes to cart changes. The receiver always holds the latest
    /// cart; every mutation publishes a new value before returning.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.changes.subscribe()
    }

    /// Adds one unit of a product to the cart.
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add(&self, product: &Product) {
        self.mutate(|cart| cart.add(product));
    }

    /// Sets a line's quantity; ≤ 0 removes the line, unknown ids no-op.
    #[tracing::instrument(skip(self))]
    pub fn set_quantity(&self, product_id: ProductId, quantity: i64) {
        self.mutate(|cart| cart.set_quantity(product_id, quantity));
    }

    /// Removes a product's line if present.
    #[tracing::instrument(skip(self))]
    pub fn remove(&self, product_id: ProductId) {
        self.mutate(|cart| cart.remove(product_id));
    }

    /// Empties the cart.
    #[tracing::instrument(skip(self))]
    pub fn clear(&self) {
        self.mutate(Cart::clear);
    }

    /// Returns the sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.state.read().total_items()
    }

    /// Returns the sum of `unit_price * quantity` across all lines.
    pub fn total_price(&self) -> Money {
        self.state.read().total_price()
    }

    /// Returns true if a line for the product exists.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.state.read().contains(product_id)
    }

    /// Returns the line's quantity, or 0 if absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.state.read().quantity_of(product_id)
    }

    /// Returns a copy of all lines in insertion order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.state.read().lines().to_vec()
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.state.read().is_empty()
    }

    /// Returns a copy of the current cart state.
    pub fn cart(&self) -> Cart {
        self.state.read().clone()
    }

    /// Applies a mutation, persists the new snapshot, and notifies
    /// subscribers, all before returning.
    fn mutate(&self, op: impl FnOnce(&mut Cart)) {
        let mut cart = self.state.write();
        op(&mut cart);
        self.persist(&cart);
        metrics::counter!("cart_mutations_total").increment(1);
        self.changes.send_replace(cart.clone());
    }

    fn persist(&self, cart: &Cart) {
        let snapshot = match serde_json::to_string(cart) {
            Ok(snapshot) => snapshot,
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "failed to serialize cart snapshot");
                return;
            }
        };
        if let Err(error) = self.storage.set(&self.key, &snapshot) {
            tracing::warn!(key = %self.key, %error, "failed to persist cart snapshot");
        }
    }
}
