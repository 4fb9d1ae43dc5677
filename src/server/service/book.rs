use sea_orm::DatabaseConnection;

use crate::server::{
    data::{author::AuthorRepository, book::BookRepository},
    error::AppError,
    model::book::{AddBookParam, BookView, UpdateBookParam},
};

/// Largest LIMIT or OFFSET the store accepts; SQLite binds both as signed 64-bit integers.
const MAX_SQL_INTEGER: u64 = i64::MAX as u64;

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a new book for an existing author and returns the new book's id.
    ///
    /// The author lookup completes before anything is written; when the author is missing
    /// no insert is attempted.
    ///
    /// # Returns
    /// - `Ok(String)` - ID of the created book
    /// - `Err(AppError::EntityNotFound)` - No author with `params.author_id` exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_book(&self, params: AddBookParam) -> Result<String, AppError> {
        let author = AuthorRepository::new(self.db)
            .get_by_id(&params.author_id)
            .await?;

        if author.is_none() {
            return Err(AppError::author_not_found(params.author_id));
        }

        let book = BookRepository::new(self.db)
            .create(uuid::Uuid::new_v4().to_string(), params)
            .await?;

        tracing::info!("Added book {} by author {}", book.id, book.author_id);

        Ok(book.id)
    }

    /// Changes a book's title. The author reference is never modified.
    ///
    /// # Returns
    /// - `Ok(())` - Title updated
    /// - `Err(AppError::EntityNotFound)` - No book with `params.id` exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_book(&self, params: UpdateBookParam) -> Result<(), AppError> {
        let repo = BookRepository::new(self.db);

        let book = repo
            .get_by_id(&params.id)
            .await?
            .ok_or_else(|| AppError::book_not_found(&params.id))?;

        repo.update_title(book.id, params.title)
            .await?
            .ok_or_else(|| AppError::book_not_found(&params.id))?;

        Ok(())
    }

    /// Gets one page of books with their authors' names.
    ///
    /// `page` is 0-based. Pages past the end, and a `limit` of zero, yield an empty list.
    /// `limit` is capped at `i64::MAX`, and a page whose row offset doesn't fit in an `i64` is
    /// past the end.
    pub async fn get_all_books(&self, limit: u64, page: u64) -> Result<Vec<BookView>, AppError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let limit = limit.min(MAX_SQL_INTEGER);
        match page.checked_mul(limit) {
            Some(offset) if offset <= MAX_SQL_INTEGER => {}
            _ => return Ok(Vec::new()),
        }

        let books = BookRepository::new(self.db)
            .get_paginated(page, limit)
            .await?;

        Ok(books)
    }

    /// Gets a single book with its author's name
    pub async fn get_book_detail(&self, id: &str) -> Result<BookView, AppError> {
        BookRepository::new(self.db)
            .get_view_by_id(id)
            .await?
            .ok_or_else(|| AppError::book_not_found(id))
    }

    /// Deletes a book after confirming it exists
    pub async fn delete_book(&self, id: &str) -> Result<(), AppError> {
        let repo = BookRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::book_not_found(id));
        }

        repo.delete(id).await?;

        tracing::info!("Deleted book {}", id);

        Ok(())
    }
}
