//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use super::error::ApiError;
use crate::models::ValidationError;
use crate::views::Notice;

/// Parse a raw `user_id` value.
///
/// Absent, blank and zero all count as missing.
pub fn parse_user_id(raw: Option<&str>) -> Result<i64, ApiError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ApiError::MissingParameter);
    }

    match raw.parse::<i64>() {
        Ok(0) => Err(ApiError::MissingParameter),
        Ok(id) => Ok(id),
        Err(_) => Err(ApiError::Validation(ValidationError::InvalidFormat {
            field: "user_id",
            reason: "must be a number",
        })),
    }
}

#[derive(Debug, Default, Deserialize)]
struct UserIdParams {
    user_id: Option<String>,
}

/// Caller id taken from the `user_id` query parameter.
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<UserIdParams>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| params)
            .unwrap_or_default();

        Ok(Self(parse_user_id(params.user_id.as_deref())?))
    }
}

/// `?message=` / `?error=` banner text carried through redirects.
#[derive(Debug, Default, Deserialize)]
pub struct FlashParams {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl FlashParams {
    pub fn notice(&self) -> Notice<'_> {
        Notice {
            message: self.message.as_deref(),
            error: self.error.as_deref(),
        }
    }
}

/// Extract a numeric record id from path
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        let id = id.parse::<i64>().map_err(|_| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be a number",
            })
        })?;

        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_parsing() {
        assert_eq!(parse_user_id(Some("12")).unwrap(), 12);
        assert_eq!(parse_user_id(Some(" 3 ")).unwrap(), 3);
        assert!(matches!(parse_user_id(None), Err(ApiError::MissingParameter)));
        assert!(matches!(parse_user_id(Some("")), Err(ApiError::MissingParameter)));
        assert!(matches!(parse_user_id(Some("0")), Err(ApiError::MissingParameter)));
        assert!(matches!(parse_user_id(Some("abc")), Err(ApiError::Validation(_))));
    }
}
