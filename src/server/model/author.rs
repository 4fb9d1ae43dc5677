//! Author domain model and parameters.

use crate::model::author::AddAuthorDto;

/// An author as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    /// Server-generated unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Author {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::author::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

/// Parameters for adding a new author.
#[derive(Debug, Clone)]
pub struct AddAuthorParam {
    /// Display name of the author.
    pub name: String,
}

impl AddAuthorParam {
    /// Converts the request DTO into service parameters.
    pub fn from_dto(dto: AddAuthorDto) -> Self {
        Self { name: dto.name }
    }
}
