use crate::data::models::cart::Cart;
use crate::data::repos::traits::cart_store::{CartEdit, CartStore};
use crate::services::errors::CartStoreError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process cart store. Carts live as long as the server process.
#[derive(Default)]
pub struct MemoryCartStore {
    carts: RwLock<HashMap<String, Cart>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        MemoryCartStore::default()
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn load(&self, user_id: &str) -> Result<Cart, CartStoreError> {
        let carts = self.carts.read().await;
        Ok(carts
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| Cart::new(user_id)))
    }

    async fn save(&self, cart: &Cart) -> Result<(), CartStoreError> {
        let mut carts = self.carts.write().await;
        store(&mut carts, cart);
        Ok(())
    }

    async fn clear(&self, user_id: &str) -> Result<(), CartStoreError> {
        self.carts.write().await.remove(user_id);
        Ok(())
    }

    async fn update<'a>(
        &self,
        user_id: &str,
        edit: CartEdit<'a>,
    ) -> Result<(Cart, bool), CartStoreError> {
        // write lock held across load, edit and store
        let mut carts = self.carts.write().await;
        let mut cart = carts
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| Cart::new(user_id));

        let changed = edit(&mut cart);
        if changed {
            store(&mut carts, &cart);
        }
        Ok((cart, changed))
    }
}

fn store(carts: &mut HashMap<String, Cart>, cart: &Cart) {
    if cart.is_empty() {
        carts.remove(&cart.user_id);
    } else {
        carts.insert(cart.user_id.clone(), cart.clone());
    }
}
