use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::author::Author;

pub struct AuthorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new author with a caller-supplied id
    pub async fn create(&self, id: String, name: String) -> Result<Author, DbErr> {
        let author = entity::author::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name),
        }
        .insert(self.db)
        .await?;

        Ok(Author::from_entity(author))
    }

    /// Gets an author by primary key
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Author>, DbErr> {
        let author = entity::prelude::Author::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(author.map(Author::from_entity))
    }
}
