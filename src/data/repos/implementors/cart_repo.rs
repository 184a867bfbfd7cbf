use crate::data::database::Database;
use crate::data::models::cart::{Cart, CartLine, CartLineRow, NewCartLine};
use crate::data::repos::traits::cart_store::{CartEdit, CartStore};
use crate::services::errors::CartStoreError;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::pooled_connection::deadpool::Object;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection, RunQueryDsl};

/// MySQL-backed cart store. Each cart line is one row; `position` keeps
/// lines in the order they were added.
pub struct CartRepo {
    db: Database,
}

impl CartRepo {
    pub fn new(db: Database) -> Self {
        CartRepo { db }
    }

    async fn connection(&self) -> Result<Object<AsyncMysqlConnection>, CartStoreError> {
        self.db.get_connection().await.map_err(|e| {
            tracing::error!("Failed to get a database connection: {}", e);
            CartStoreError::ConnectionFailed
        })
    }
}

fn cart_from_rows(owner: &str, rows: Vec<CartLineRow>) -> Cart {
    Cart {
        user_id: owner.to_string(),
        items: rows
            .into_iter()
            .map(|row| CartLine {
                product_id: row.product_id,
                quantity: row.quantity,
            })
            .collect(),
    }
}

/// Replaces every stored line of `cart.user_id`. Callers run this inside a transaction.
async fn replace_lines(conn: &mut AsyncMysqlConnection, cart: &Cart) -> QueryResult<()> {
    use crate::data::models::schema::cart_lines::dsl::{cart_lines, user_id};

    let new_lines: Vec<NewCartLine> = cart
        .items
        .iter()
        .enumerate()
        .map(|(idx, line)| NewCartLine {
            user_id: &cart.user_id,
            product_id: &line.product_id,
            quantity: line.quantity,
            position: idx as i32,
        })
        .collect();

    diesel::delete(cart_lines.filter(user_id.eq(&cart.user_id)))
        .execute(conn)
        .await?;

    if !new_lines.is_empty() {
        diesel::insert_into(cart_lines)
            .values(&new_lines)
            .execute(conn)
            .await?;
    }

    Ok(())
}

#[async_trait]
impl CartStore for CartRepo {
    async fn load(&self, user_id_query: &str) -> Result<Cart, CartStoreError> {
        use crate::data::models::schema::cart_lines::dsl::{cart_lines, position, user_id};

        let mut conn = self.connection().await?;

        let rows = match cart_lines
            .filter(user_id.eq(user_id_query))
            .order(position.asc())
            .select(CartLineRow::as_select())
            .load::<CartLineRow>(&mut conn)
            .await
        {
            Ok(rows) => rows,
            Err(result::Error::NotFound) => Vec::new(),
            Err(e) => {
                tracing::error!("Failed to load cart: {:?}", e);
                return Err(CartStoreError::QueryFailed);
            }
        };

        Ok(cart_from_rows(user_id_query, rows))
    }

    async fn save(&self, cart: &Cart) -> Result<(), CartStoreError> {
        let mut conn = self.connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move { replace_lines(connection, cart).await }.scope_boxed()
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to save cart: {:?}", e);
            CartStoreError::QueryFailed
        })
    }

    async fn clear(&self, user_id_query: &str) -> Result<(), CartStoreError> {
        use crate::data::models::schema::cart_lines::dsl::{cart_lines, user_id};

        let mut conn = self.connection().await?;

        diesel::delete(cart_lines.filter(user_id.eq(user_id_query)))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!("Failed to clear cart: {:?}", e);
                CartStoreError::QueryFailed
            })
    }

    async fn update<'a>(
        &self,
        user_id_query: &str,
        edit: CartEdit<'a>,
    ) -> Result<(Cart, bool), CartStoreError> {
        use crate::data::models::schema::cart_lines::dsl::{cart_lines, position, user_id};

        let mut conn = self.connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                // row locks keep a concurrent update waiting until this one commits
                let rows = cart_lines
                    .filter(user_id.eq(user_id_query))
                    .order(position.asc())
                    .select(CartLineRow::as_select())
                    .for_update()
                    .load::<CartLineRow>(connection)
                    .await?;

                let mut cart = cart_from_rows(user_id_query, rows);
                let changed = edit(&mut cart);
                if changed {
                    replace_lines(connection, &cart).await?;
                }

                Ok((cart, changed))
            }
            .scope_boxed()
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to update cart: {:?}", e);
            CartStoreError::QueryFailed
        })
    }
}
