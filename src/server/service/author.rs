use sea_orm::DatabaseConnection;

use crate::server::{
    data::author::AuthorRepository, error::AppError, model::author::AddAuthorParam,
};

pub struct AuthorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a new author under a freshly generated id and returns that id
    pub async fn add_author(&self, params: AddAuthorParam) -> Result<String, AppError> {
        let repo = AuthorRepository::new(self.db);

        let author = repo
            .create(uuid::Uuid::new_v4().to_string(), params.name)
            .await?;

        tracing::info!("Added author {}", author.id);

        Ok(author.id)
    }
}
