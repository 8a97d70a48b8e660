use axum::response::{IntoResponse, Response};
use thiserror::Error;
use uuid::Uuid;

use shared_models::AppError;

use crate::models::ProfileId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LandingError {
    #[error("Profile {0} not found")]
    ProfileNotFound(ProfileId),

    #[error("Landing session {0} not found")]
    SessionNotFound(Uuid),

    #[error("Landing session {0} is no longer mounted")]
    SessionUnmounted(Uuid),

    #[error("Session capacity of {0} reached")]
    CapacityExceeded(usize),

    #[error("Unknown navigation target: {0}")]
    UnknownNavigationTarget(String),
}

impl From<LandingError> for AppError {
    fn from(err: LandingError) -> Self {
        let message = err.to_string();
        match err {
            LandingError::ProfileNotFound(_) | LandingError::SessionNotFound(_) => {
                AppError::NotFound(message)
            }
            LandingError::SessionUnmounted(_) => AppError::Conflict(message),
            LandingError::CapacityExceeded(_) => AppError::Unavailable(message),
            LandingError::UnknownNavigationTarget(_) => AppError::BadRequest(message),
        }
    }
}

impl IntoResponse for LandingError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn maps_to_expected_status() {
        let cases = [
            (LandingError::ProfileNotFound(ProfileId(9)), StatusCode::NOT_FOUND),
            (LandingError::SessionNotFound(Uuid::nil()), StatusCode::NOT_FOUND),
            (LandingError::SessionUnmounted(Uuid::nil()), StatusCode::CONFLICT),
            (LandingError::CapacityExceeded(2), StatusCode::SERVICE_UNAVAILABLE),
            (
                LandingError::UnknownNavigationTarget("checkout".into()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }
}
