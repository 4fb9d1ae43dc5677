//! HTTP request handlers.
//!
//! Controllers parse the request, convert wire DTOs into service parameters, call the
//! matching service operation and wrap the result in the response envelope. Translating
//! errors into status codes is left to `AppError`'s `IntoResponse` implementation.

pub mod author;
pub mod book;
pub mod param;
