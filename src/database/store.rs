use actix_web::web;
use diesel::{
    dsl::sql,
    expression::SqlLiteral,
    sql_types::BigInt,
    QueryResult, SqliteConnection,
};
use uuid::Uuid;

use super::db_utils::{connect_to_db, DbPool};
use crate::app::AppError;

/// Handle to the entity store, cheap to clone.
///
/// Constructed once at startup and handed to the schema as context data,
/// resolvers get it back with `ctx.data::<Store>()`.
#[derive(Clone)]
pub struct Store {
    pool: DbPool,
}

impl Store {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn connect(database_url: &str) -> Result<Store, AppError> {
        Ok(Store::new(connect_to_db(database_url)?))
    }

    /// Runs `query` with a pooled connection on the blocking thread pool,
    /// so only the calling task waits on the database.
    pub async fn run<F, T>(&self, query: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();

        web::block(move || -> Result<T, AppError> {
            let mut conn = pool.get()?;
            Ok(query(&mut *conn)?)
        })
        .await?
    }
}

/// Generated identifier for a new record
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// SQLite `rowid`, grows with every insert
pub fn insertion_order() -> SqlLiteral<BigInt> {
    sql::<BigInt>("rowid")
}

#[cfg(test)]
impl Store {
    pub fn in_memory() -> Store {
        Store::connect(super::db_utils::IN_MEMORY).unwrap()
    }
}
