//! Book domain models and parameters.
//!
//! `Book` mirrors the stored row, while `BookView` is the read-only projection returned by
//! the API with the author's name resolved in place of the author id.

use sea_orm::DbErr;

use crate::model::book::{AddBookDto, BookDto, UpdateBookDto};

/// A book as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    /// Server-generated unique identifier.
    pub id: String,
    /// Title of the book.
    pub title: String,
    /// ID of the author who wrote the book. Never changes after creation.
    pub author_id: String,
}

impl Book {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            author_id: entity.author_id,
        }
    }
}

/// A book joined with its author's name.
#[derive(Debug, Clone, PartialEq)]
pub struct BookView {
    pub id: String,
    pub title: String,
    pub author_name: String,
}

impl BookView {
    /// Converts a book entity and its related author into the view model.
    ///
    /// The author is required by the foreign key; a missing author indicates a corrupt row.
    ///
    /// # Arguments
    /// - `book` - The book entity from the database
    /// - `author` - The author entity loaded alongside the book
    ///
    /// # Returns
    /// - `Ok(BookView)` - The joined view
    /// - `Err(DbErr::RecordNotFound)` - The book references an author that doesn't exist
    pub fn from_entity(
        book: entity::book::Model,
        author: Option<entity::author::Model>,
    ) -> Result<Self, DbErr> {
        let author = author.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Author {} referenced by book {} not found",
                book.author_id, book.id
            ))
        })?;

        Ok(Self {
            id: book.id,
            title: book.title,
            author_name: author.name,
        })
    }

    /// Converts the view model to a DTO for API responses.
    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id,
            title: self.title,
            author_name: self.author_name,
        }
    }
}

/// Parameters for adding a new book.
#[derive(Debug, Clone)]
pub struct AddBookParam {
    /// Title of the book.
    pub title: String,
    /// ID of the author, which must already exist.
    pub author_id: String,
}

impl AddBookParam {
    /// Converts the request DTO into service parameters.
    pub fn from_dto(dto: AddBookDto) -> Self {
        Self {
            title: dto.title,
            author_id: dto.author_id,
        }
    }
}

/// Parameters for updating a book's title.
#[derive(Debug, Clone)]
pub struct UpdateBookParam {
    /// ID of the book to update, taken from the request path.
    pub id: String,
    /// New title.
    pub title: String,
}

impl UpdateBookParam {
    /// Combines the path id with the request DTO into service parameters.
    pub fn from_dto(id: String, dto: UpdateBookDto) -> Self {
        Self {
            id,
            title: dto.title,
        }
    }
}
