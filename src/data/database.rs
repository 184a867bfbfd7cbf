use diesel_async::AsyncMysqlConnection;
use diesel_async::pooled_connection::deadpool::{BuildError, Object, Pool};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, deadpool};

/// Pooled MySQL access backing the persisted cart store.
#[derive(Clone)]
pub struct Database {
    pool: Pool<AsyncMysqlConnection>,
}

impl Database {
    pub fn connect(database_url: &str) -> Result<Self, BuildError> {
        let config = AsyncDieselConnectionManager::<AsyncMysqlConnection>::new(database_url);
        let pool = Pool::builder(config).build()?;

        tracing::info!("DB connection pool created");

        Ok(Database { pool })
    }

    pub async fn get_connection(
        &self,
    ) -> Result<Object<AsyncMysqlConnection>, deadpool::PoolError> {
        self.pool.get().await
    }
}
