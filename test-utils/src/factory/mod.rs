//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories generate the same
//! UUID-style ids the application does.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::create_author(&db).await?;
//! let book = factory::create_book(&db, &author.id).await?;
//!
//! // Or both at once
//! let (author, book) = factory::create_book_with_author(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let author = factory::author::AuthorFactory::new(&db)
//!     .name("Axell")
//!     .build()
//!     .await?;
//! ```

pub mod author;
pub mod book;
pub mod helpers;

pub use author::create_author;
pub use book::create_book;
pub use helpers::create_book_with_author;
