use crate::models::Order;
use crate::storage::{SheetStore, ORDER_SHEET};
use crate::utils::errors::AppResult;

pub struct OrderRepository {
    store: SheetStore,
}

impl OrderRepository {
    pub fn new(store: SheetStore) -> Self {
        Self { store }
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Order>> {
        let orders: Vec<Order> = self.store.read_all(ORDER_SHEET).await?;
        Ok(orders.into_iter().find(|o| o.id == id))
    }

    pub async fn append(&self, order: &Order) -> AppResult<()> {
        self.store
            .append(ORDER_SHEET, std::slice::from_ref(order))
            .await
    }
}
