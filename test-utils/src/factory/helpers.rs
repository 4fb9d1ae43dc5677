//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter used to give factory-created rows distinct default names.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh primary key in the same format the application uses.
pub fn new_key() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates an author and one book written by that author.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((author, book))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_book_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::author::Model, entity::book::Model), DbErr> {
    let author = crate::factory::author::create_author(db).await?;
    let book = crate::factory::book::create_book(db, &author.id).await?;

    Ok((author, book))
}
