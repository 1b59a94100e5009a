use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// Build an r2d2 connection pool for the given Postgres URL.
///
/// Panics if the initial connections cannot be established; callers invoke
/// this once at startup (or test setup) where failing fast is the right
/// behavior.
pub fn create_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .build(manager)
        .expect("Failed to create database connection pool")
}
