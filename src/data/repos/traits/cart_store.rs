use crate::data::models::cart::Cart;
use crate::services::errors::CartStoreError;
use async_trait::async_trait;

/// Edit applied to a cart under the store's lock. Returns whether the cart changed.
pub type CartEdit<'a> = Box<dyn FnOnce(&mut Cart) -> bool + Send + 'a>;

/// Persistence seam for shopping carts, keyed by the owning user.
///
/// `load` hydrates a cart (an unknown user yields an empty cart), `save`
/// replaces the stored lines wholesale and `clear` drops everything held
/// for the user, as on logout. `update` runs load, edit and save as one
/// step so concurrent edits of the same cart cannot overwrite each other.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn load(&self, user_id: &str) -> Result<Cart, CartStoreError>;

    async fn save(&self, cart: &Cart) -> Result<(), CartStoreError>;

    async fn clear(&self, user_id: &str) -> Result<(), CartStoreError>;

    /// Applies `edit` to the user's cart and persists it when the edit reports a change.
    /// Returns the resulting cart and whether it changed.
    async fn update<'a>(
        &self,
        user_id: &str,
        edit: CartEdit<'a>,
    ) -> Result<(Cart, bool), CartStoreError>;
}
