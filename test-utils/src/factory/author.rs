//! Author factory for creating test author entities.

use crate::factory::helpers::{new_key, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test authors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::author::AuthorFactory;
///
/// let author = AuthorFactory::new(&db)
///     .name("Axell")
///     .build()
///     .await?;
/// ```
pub struct AuthorFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
}

impl<'a> AuthorFactory<'a> {
    /// Creates a new AuthorFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID
    /// - name: `"Author {n}"` where n is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: new_key(),
            name: format!("Author {}", next_id()),
        }
    }

    /// Sets the id for the author.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the display name for the author.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the author entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::author::Model)` - Created author entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::author::Model, DbErr> {
        entity::author::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an author with default values.
///
/// Shorthand for `AuthorFactory::new(db).build().await`.
pub async fn create_author(db: &DatabaseConnection) -> Result<entity::author::Model, DbErr> {
    AuthorFactory::new(db).build().await
}
