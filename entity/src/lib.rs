//! SeaORM entity definitions for the bookshelf database.

pub mod prelude;

pub mod author;
pub mod book;
