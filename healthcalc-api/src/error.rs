use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use healthcalc_engine::InputError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] InputError);

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
