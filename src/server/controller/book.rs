use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{BaseResponseDto, NoDataDto},
        book::{AddBookDto, BookDto, UpdateBookDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        model::book::{AddBookParam, BookView, UpdateBookParam},
        service::book::BookService,
        state::AppState,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "book";

/// Routes served by this controller, with their OpenAPI descriptions.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(add_book, get_all_books))
        .routes(routes!(get_book_detail, update_book, delete_book))
}

/// Add a new book.
///
/// The referenced author must already exist. The new resource's path is returned in the
/// `Location` header; the envelope carries no data.
///
/// # Returns
/// - `201 Created` - Book stored
/// - `404 Not Found` - Author doesn't exist (`ENTITY_NOT_FOUND`)
/// - `4xx` - Request body is not a valid book
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/books",
    tag = BOOK_TAG,
    request_body = AddBookDto,
    responses(
        (status = 201, description = "Successfully added book", body = BaseResponseDto<NoDataDto>,
            headers(("Location" = String, description = "Path of the new book"))),
        (status = 400, description = "Invalid request body", body = BaseResponseDto<NoDataDto>),
        (status = 404, description = "Author not found", body = BaseResponseDto<NoDataDto>),
        (status = 500, description = "Internal server error", body = BaseResponseDto<NoDataDto>)
    ),
)]
pub async fn add_book(
    State(state): State<AppState>,
    payload: Result<Json<AddBookDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = AddBookParam::from_dto(payload);
    let id = BookService::new(&state.db).add_book(params).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/books/{}", id))],
        Json(BaseResponseDto::success_no_data()),
    ))
}

/// Update a book's title.
///
/// # Returns
/// - `200 OK` - Title updated
/// - `404 Not Found` - Book doesn't exist (`ENTITY_NOT_FOUND`)
/// - `4xx` - Request body is not a valid update
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/books/{book_id}",
    tag = BOOK_TAG,
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    request_body = UpdateBookDto,
    responses(
        (status = 200, description = "Successfully updated book", body = BaseResponseDto<NoDataDto>),
        (status = 400, description = "Invalid request body", body = BaseResponseDto<NoDataDto>),
        (status = 404, description = "Book not found", body = BaseResponseDto<NoDataDto>),
        (status = 500, description = "Internal server error", body = BaseResponseDto<NoDataDto>)
    ),
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    payload: Result<Json<UpdateBookDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = UpdateBookParam::from_dto(book_id, payload);
    BookService::new(&state.db).update_book(params).await?;

    Ok((StatusCode::OK, Json(BaseResponseDto::success_no_data())))
}

/// Get a page of books.
///
/// Each entry carries the author's name rather than the author id. Entries come back in
/// the store's scan order.
///
/// # Returns
/// - `200 OK` - Page of books, empty past the last page
/// - `4xx` - Query parameters are not non-negative integers
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/books",
    tag = BOOK_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Books per page (default: 5)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved books", body = BaseResponseDto<Vec<BookDto>>),
        (status = 400, description = "Invalid query parameters", body = BaseResponseDto<NoDataDto>),
        (status = 500, description = "Internal server error", body = BaseResponseDto<NoDataDto>)
    ),
)]
pub async fn get_all_books(
    State(state): State<AppState>,
    params: Result<Query<PaginationParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    let books = BookService::new(&state.db)
        .get_all_books(params.limit, params.page)
        .await?;

    let books: Vec<BookDto> = books.into_iter().map(BookView::into_dto).collect();

    Ok((StatusCode::OK, Json(BaseResponseDto::success_with_data(books))))
}

/// Get a single book.
///
/// # Returns
/// - `200 OK` - The book with its author's name
/// - `404 Not Found` - Book doesn't exist (`ENTITY_NOT_FOUND`)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/books/{book_id}",
    tag = BOOK_TAG,
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved book", body = BaseResponseDto<BookDto>),
        (status = 404, description = "Book not found", body = BaseResponseDto<NoDataDto>),
        (status = 500, description = "Internal server error", body = BaseResponseDto<NoDataDto>)
    ),
)]
pub async fn get_book_detail(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let book = BookService::new(&state.db).get_book_detail(&book_id).await?;

    Ok((
        StatusCode::OK,
        Json(BaseResponseDto::success_with_data(book.into_dto())),
    ))
}

/// Delete a book.
///
/// # Returns
/// - `200 OK` - Book deleted
/// - `404 Not Found` - Book doesn't exist (`ENTITY_NOT_FOUND`)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/books/{book_id}",
    tag = BOOK_TAG,
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted book", body = BaseResponseDto<NoDataDto>),
        (status = 404, description = "Book not found", body = BaseResponseDto<NoDataDto>),
        (status = 500, description = "Internal server error", body = BaseResponseDto<NoDataDto>)
    ),
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    BookService::new(&state.db).delete_book(&book_id).await?;

    Ok((StatusCode::OK, Json(BaseResponseDto::success_no_data())))
}
