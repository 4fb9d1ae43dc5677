//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They hold
//! no state beyond a borrowed connection pool, generate ids for new rows, and turn primary-key
//! misses into `AppError::EntityNotFound`. Each operation is an `async fn` resolving to exactly
//! one success value or one error.

pub mod author;
pub mod book;
