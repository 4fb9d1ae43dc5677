use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{BaseResponseDto, NoDataDto},
        author::AddAuthorDto,
    },
    server::{
        error::AppError, model::author::AddAuthorParam, service::author::AuthorService,
        state::AppState,
    },
};

/// Tag for grouping author endpoints in OpenAPI documentation
pub static AUTHOR_TAG: &str = "author";

/// Routes served by this controller, with their OpenAPI descriptions.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(add_author))
}

/// Add a new author.
///
/// Generates an id for the author and stores it. The new resource's path is returned in the
/// `Location` header; the envelope carries no data.
///
/// # Returns
/// - `201 Created` - Author stored
/// - `4xx` - Request body is not a valid author
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/authors",
    tag = AUTHOR_TAG,
    request_body = AddAuthorDto,
    responses(
        (status = 201, description = "Successfully added author", body = BaseResponseDto<NoDataDto>,
            headers(("Location" = String, description = "Path of the new author"))),
        (status = 400, description = "Invalid request body", body = BaseResponseDto<NoDataDto>),
        (status = 500, description = "Internal server error", body = BaseResponseDto<NoDataDto>)
    ),
)]
pub async fn add_author(
    State(state): State<AppState>,
    payload: Result<Json<AddAuthorDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = AddAuthorParam::from_dto(payload);
    let id = AuthorService::new(&state.db).add_author(params).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/authors/{}", id))],
        Json(BaseResponseDto::success_no_data()),
    ))
}
