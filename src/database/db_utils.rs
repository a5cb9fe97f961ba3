use diesel::{
    connection::SimpleConnection,
    r2d2::{ConnectionManager, CustomizeConnection, Pool},
    SqliteConnection,
};
use log::info;

use crate::{app::AppError, schema::SETUP_SQL};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Database url that keeps everything in memory, mostly used by tests
pub const IN_MEMORY: &str = ":memory:";

/// Creates the tables on every connection the pool opens
#[derive(Debug)]
struct ConnectionSetup;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionSetup {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(SETUP_SQL)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Return a pool of connections to the database at `database_url`.
///
/// Every in-memory connection is its own database, so for [IN_MEMORY]
/// the pool is pinned to a single connection that is never recycled.
///
/// # Example
/// ```
/// let pool = connect_to_db("blog.db")?;
/// ```
pub fn connect_to_db(database_url: &str) -> Result<DbPool, AppError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let mut builder = DbPool::builder().connection_customizer(Box::new(ConnectionSetup));

    if database_url == IN_MEMORY {
        builder = builder.max_size(1).idle_timeout(None).max_lifetime(None);
    }

    let pool = builder.build(manager)?;
    info!("Connected to database at {}", database_url);

    Ok(pool)
}
