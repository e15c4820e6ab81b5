//! Order ledger
//!
//! Orders are written whole: `replace` overwrites every field, including the
//! full `plates` array. Each line embeds a copy of the plate, so catalog
//! edits never reach existing orders.

use shared::ObjectId;
use shared::models::{Order, OrderBody};
use tracing::{debug, info};

use crate::db::repository::OrderRepository;
use crate::db::{Filter, RepoResult, SharedStore};

const FIELD_USER_ID: &str = "userId";
const FIELD_TABLE_ID: &str = "tableId";
const FIELD_ORDER_CLOSED: &str = "orderClosed";

#[derive(Debug, Clone)]
pub struct OrderLedger {
    orders: OrderRepository,
}

impl OrderLedger {
    pub fn new(store: SharedStore) -> Self {
        Self {
            orders: OrderRepository::new(store),
        }
    }

    /// All orders, in the store's natural order
    pub async fn list_all(&self) -> RepoResult<Vec<Order>> {
        self.orders.find_all().await
    }

    /// First order placed by `user_id`
    ///
    /// A user usually has many orders; which one comes first is up to the
    /// store.
    pub async fn find_by_user(&self, user_id: &ObjectId) -> RepoResult<Option<Order>> {
        let filter = Filter::new().eq(FIELD_USER_ID, user_id.to_hex());
        self.orders.find_one(&filter).await
    }

    /// The open order on `table_id`, if any
    pub async fn find_active_by_table(&self, table_id: &ObjectId) -> RepoResult<Option<Order>> {
        let filter = Filter::new()
            .eq(FIELD_TABLE_ID, table_id.to_hex())
            .eq(FIELD_ORDER_CLOSED, false);
        self.orders.find_one(&filter).await
    }

    /// Insert an order and return its id
    ///
    /// No check for another open order on the same table, and no check that
    /// `userId` / `tableId` exist.
    pub async fn create(&self, order: &OrderBody) -> RepoResult<ObjectId> {
        let id = self.orders.create(order).await?;
        info!(
            order_id = %id,
            table_id = %order.table_id,
            user_id = %order.user_id,
            lines = order.plates.len(),
            subtotal = order.subtotal(),
            closed = order.order_closed,
            "Order created"
        );
        Ok(id)
    }

    /// Overwrite an order. Returns the modified count: 0 means not found or
    /// identical content.
    pub async fn replace(&self, id: &ObjectId, order: &OrderBody) -> RepoResult<u64> {
        let modified = self.orders.update(id, order).await?;
        debug!(order_id = %id, modified, closed = order.order_closed, "Order replaced");
        Ok(modified)
    }

    /// Delete an order. Returns the deleted count (0 or 1).
    pub async fn delete(&self, id: &ObjectId) -> RepoResult<u64> {
        let deleted = self.orders.delete(id).await?;
        debug!(order_id = %id, deleted, "Order deleted");
        Ok(deleted)
    }
}
