//! Book factory for creating test book entities.

use crate::factory::helpers::{new_key, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// The referenced author must already exist.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::book::BookFactory;
///
/// let book = BookFactory::new(&db, &author.id)
///     .title("Book1")
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    title: String,
    author_id: String,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID
    /// - title: `"Book {n}"` where n is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - ID of the author this book references
    pub fn new(db: &'a DatabaseConnection, author_id: impl Into<String>) -> Self {
        Self {
            db,
            id: new_key(),
            title: format!("Book {}", next_id()),
            author_id: author_id.into(),
        }
    }

    /// Sets the id for the book.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the title for the book.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the book entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::book::Model)` - Created book entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            id: ActiveValue::Set(self.id),
            title: ActiveValue::Set(self.title),
            author_id: ActiveValue::Set(self.author_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values for the specified author.
///
/// Shorthand for `BookFactory::new(db, author_id).build().await`.
pub async fn create_book(
    db: &DatabaseConnection,
    author_id: impl Into<String>,
) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db, author_id).build().await
}
