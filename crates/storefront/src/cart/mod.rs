//! Cart state with durable persistence.
//!
//! One [`CartStore`] lives for the life of the process. It rehydrates from
//! storage at construction, persists the full line-item list after every
//! mutation, and merges same-id adds by incrementing quantity. A payload
//! that fails to deserialize is logged and treated as an empty cart.

mod item;
mod storage;

pub use item::{CartLineItem, LinePrice};
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, StorageError};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;
use tracing::{error, warn};

/// Process-wide cart, synchronized with durable storage.
///
/// Cheap to clone; all clones share the same line items. Mutations hold the
/// internal lock only for the duration of the in-memory edit and the
/// storage write, so there is a single logical writer at a time.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    items: Mutex<Vec<CartLineItem>>,
    storage: Arc<dyn CartStorage>,
}

impl CartStore {
    /// Build a store rehydrated from `storage`.
    ///
    /// Unreadable or corrupt payloads are logged and replaced by an empty
    /// cart; construction itself never fails.
    #[must_use]
    pub fn new(storage: Arc<dyn CartStorage>) -> Self {
        let items = match storage.load() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<CartLineItem>>(&payload) {
                Ok(items) => sanitize(items),
                Err(e) => {
                    warn!(error = %e, "Stored cart is not valid JSON, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read stored cart, starting empty");
                Vec::new()
            }
        };

        Self {
            inner: Arc::new(CartStoreInner {
                items: Mutex::new(items),
                storage,
            }),
        }
    }

    /// Add an item. An existing item with the same id gains one to its
    /// quantity; a new item always enters with quantity one, whatever its
    /// incoming quantity field says.
    pub fn add(&self, item: CartLineItem) {
        let mut items = self.guard();

        if let Some(existing) = items.iter_mut().find(|existing| existing.id == item.id) {
            existing.quantity += 1;
        } else {
            let mut item = item;
            item.quantity = 1;
            items.push(item);
        }

        self.persist(&items);
    }

    /// Remove the item with this id. No-op if absent.
    pub fn remove(&self, id: &str) {
        let mut items = self.guard();
        items.retain(|item| item.id != id);
        self.persist(&items);
    }

    /// Set an item's quantity. A quantity of zero or less removes the item;
    /// an unknown id is a no-op.
    pub fn set_quantity(&self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }

        let mut items = self.guard();
        if let Some(item) = items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
        }
        self.persist(&items);
    }

    /// Empty the cart.
    pub fn clear(&self) {
        let mut items = self.guard();
        items.clear();
        self.persist(&items);
    }

    /// Sum of unit price times quantity over all items, in whichever price
    /// shape each item carries.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.guard()
            .iter()
            .map(|item| item.price.amount() * Decimal::from(item.quantity))
            .sum()
    }

    /// Sum of quantities over all items.
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.guard().iter().map(|item| item.quantity).sum()
    }

    /// Snapshot of the current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<CartLineItem> {
        self.guard().clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<CartLineItem>> {
        // A poisoned lock still holds a structurally valid cart
        self.inner
            .items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, items: &[CartLineItem]) {
        match serde_json::to_string(items) {
            Ok(payload) => {
                if let Err(e) = self.inner.storage.save(&payload) {
                    error!(error = %e, "Failed to persist cart");
                }
            }
            Err(e) => {
                error!(error = %e, "Failed to serialize cart");
            }
        }
    }
}

/// A stored quantity below one is read back as one.
fn sanitize(mut items: Vec<CartLineItem>) -> Vec<CartLineItem> {
    for item in &mut items {
        if item.quantity < 1 {
            item.quantity = 1;
        }
    }
    items
}
