use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
};

use crate::server::model::book::{AddBookParam, Book, BookView};

pub struct BookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new book with a caller-supplied id
    pub async fn create(&self, id: String, params: AddBookParam) -> Result<Book, DbErr> {
        let book = entity::book::ActiveModel {
            id: ActiveValue::Set(id),
            title: ActiveValue::Set(params.title),
            author_id: ActiveValue::Set(params.author_id),
        }
        .insert(self.db)
        .await?;

        Ok(Book::from_entity(book))
    }

    /// Gets a book by primary key
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Book>, DbErr> {
        let book = entity::prelude::Book::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(book.map(Book::from_entity))
    }

    /// Gets a book by primary key joined with its author's name
    pub async fn get_view_by_id(&self, id: &str) -> Result<Option<BookView>, DbErr> {
        let result = entity::prelude::Book::find_by_id(id.to_string())
            .find_also_related(entity::prelude::Author)
            .one(self.db)
            .await?;

        result
            .map(|(book, author)| BookView::from_entity(book, author))
            .transpose()
    }

    /// Gets one page of books joined with their authors' names.
    ///
    /// No ordering is applied, so rows come back in the store's scan order. Pages past the
    /// end are empty.
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Vec<BookView>, DbErr> {
        let paginator = entity::prelude::Book::find()
            .find_also_related(entity::prelude::Author)
            .paginate(self.db, per_page);

        paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(|(book, author)| BookView::from_entity(book, author))
            .collect()
    }

    /// Updates a book's title, leaving its author untouched.
    ///
    /// Returns `Ok(None)` when no row with `id` exists.
    pub async fn update_title(&self, id: String, title: String) -> Result<Option<Book>, DbErr> {
        let result = entity::book::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(title),
            author_id: ActiveValue::NotSet,
        }
        .update(self.db)
        .await;

        match result {
            Ok(book) => Ok(Some(Book::from_entity(book))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Deletes a book
    pub async fn delete(&self, id: &str) -> Result<(), DbErr> {
        entity::prelude::Book::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
