//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so entity types
//! never leak into the service or controller layers. Each public method issues a single store
//! call: primary-key lookup, insert, update, delete or a page scan.

pub mod author;
pub mod book;

#[cfg(test)]
mod test;
