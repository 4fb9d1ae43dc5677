use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error codes carried in the `errorCode` field of the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A primary-key lookup missed.
    EntityNotFound,
    /// The request body, path or query could not be parsed.
    BadRequest,
    /// The request didn't complete within the server's time limit.
    RequestTimeout,
    /// Any fault the client can't act on.
    InternalServerError,
}

/// Placeholder payload type for envelopes that never carry data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NoDataDto {}

/// Uniform response envelope wrapping every API response.
///
/// Exactly one of the two fields is meaningful: `data` on success, `error_code` on failure.
/// Both keys are always serialized, with `null` standing in for the absent one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponseDto<T> {
    pub error_code: Option<ErrorCode>,
    pub data: Option<T>,
}

impl<T> BaseResponseDto<T> {
    pub fn success_with_data(data: T) -> Self {
        Self {
            error_code: None,
            data: Some(data),
        }
    }

    pub fn error(error_code: ErrorCode) -> Self {
        Self {
            error_code: Some(error_code),
            data: None,
        }
    }
}

impl BaseResponseDto<NoDataDto> {
    pub fn success_no_data() -> Self {
        Self {
            error_code: None,
            data: None,
        }
    }
}
