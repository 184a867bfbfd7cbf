use crate::data::models::cart::Cart;
use crate::data::models::product::Product;
use crate::data::repos::traits::cart_store::CartStore;
use crate::services::catalog_client::CatalogClient;
use crate::services::errors::CartServiceError;
use bigdecimal::BigDecimal;
use std::collections::HashMap;

/// Flat shipping charge; this storefront ships for free.
pub fn shipping_cost() -> BigDecimal {
    BigDecimal::from(0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub product: Product,
    pub quantity: i32,
    pub line_total: BigDecimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub rows: Vec<CartRow>,
    pub subtotal: BigDecimal,
    pub shipping: BigDecimal,
    pub total: BigDecimal,
}

/// Joins cart lines with product records. Lines whose product was not
/// returned are left out of both the rows and the totals.
pub fn summarize(cart: &Cart, products: &[Product]) -> CartSummary {
    let by_id: HashMap<&str, &Product> = products.iter().map(|p| (p.id.as_str(), p)).collect();

    let mut rows = Vec::with_capacity(cart.items.len());
    let mut subtotal = BigDecimal::from(0);

    for line in &cart.items {
        let Some(product) = by_id.get(line.product_id.as_str()) else {
            tracing::debug!("Dropping cart line for unknown product {}", line.product_id);
            continue;
        };

        let line_total = &product.price * BigDecimal::from(line.quantity);
        subtotal += &line_total;
        rows.push(CartRow {
            product: (*product).clone(),
            quantity: line.quantity,
            line_total,
        });
    }

    let shipping = shipping_cost();
    let total = &subtotal + &shipping;

    CartSummary {
        rows,
        subtotal,
        shipping,
        total,
    }
}

/// Cart operations for one user against a store and the catalog.
pub struct CartService<'a> {
    store: &'a dyn CartStore,
    catalog: &'a dyn CatalogClient,
}

impl<'a> CartService<'a> {
    pub fn new(store: &'a dyn CartStore, catalog: &'a dyn CatalogClient) -> Self {
        CartService { store, catalog }
    }

    /// Loads the cart and prices it with fresh product data.
    pub async fn get_summary(&self, user_id: &str) -> Result<CartSummary, CartServiceError> {
        let cart = self.store.load(user_id).await?;
        self.summarize_cart(&cart).await
    }

    pub async fn summarize_cart(&self, cart: &Cart) -> Result<CartSummary, CartServiceError> {
        if cart.is_empty() {
            return Ok(summarize(cart, &[]));
        }

        let products = self.catalog.get_products_by_ids(&cart.product_ids()).await?;
        Ok(summarize(cart, &products))
    }

    pub async fn add_item(
        &self,
        user_id: &str,
        product_id: &str,
        quantity: i32,
    ) -> Result<Cart, CartServiceError> {
        if quantity < 1 {
            return Err(CartServiceError::InvalidQuantity);
        }

        let (cart, _) = self
            .store
            .update(user_id, Box::new(|cart: &mut Cart| cart.add(product_id, quantity)))
            .await?;
        tracing::info!("Added {} x {} to cart of user {}", quantity, product_id, user_id);
        Ok(cart)
    }

    pub async fn set_quantity(
        &self,
        user_id: &str,
        product_id: &str,
        quantity: i32,
    ) -> Result<Cart, CartServiceError> {
        if quantity < 1 {
            return Err(CartServiceError::InvalidQuantity);
        }

        let (cart, _) = self
            .store
            .update(user_id, Box::new(|cart: &mut Cart| cart.set_quantity(product_id, quantity)))
            .await?;
        found(cart, product_id)
    }

    pub async fn increment(&self, user_id: &str, product_id: &str) -> Result<Cart, CartServiceError> {
        let (cart, _) = self
            .store
            .update(user_id, Box::new(|cart: &mut Cart| cart.increment(product_id)))
            .await?;
        found(cart, product_id)
    }

    /// Decrementing at quantity 1 succeeds without changing anything.
    pub async fn decrement(&self, user_id: &str, product_id: &str) -> Result<Cart, CartServiceError> {
        let (cart, _) = self
            .store
            .update(user_id, Box::new(|cart: &mut Cart| cart.decrement(product_id)))
            .await?;
        found(cart, product_id)
    }

    pub async fn remove_item(&self, user_id: &str, product_id: &str) -> Result<Cart, CartServiceError> {
        let (cart, removed) = self
            .store
            .update(user_id, Box::new(|cart: &mut Cart| cart.remove(product_id)))
            .await?;

        if !removed {
            return Err(CartServiceError::LineNotFound);
        }
        Ok(cart)
    }

    pub async fn clear(&self, user_id: &str) -> Result<(), CartServiceError> {
        self.store.clear(user_id).await?;
        tracing::info!("Cleared cart of user {}", user_id);
        Ok(())
    }
}

/// Errors with `LineNotFound` unless `cart` still holds a line for `product_id`.
fn found(cart: Cart, product_id: &str) -> Result<Cart, CartServiceError> {
    match cart.line(product_id) {
        Some(_) => Ok(cart),
        None => Err(CartServiceError::LineNotFound),
    }
}
