//! # Response Envelope
//!
//! Every coupon endpoint answers with the same wrapper:
//! `{ isSuccess, statusCode, result, errorMessages }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::coupon::CouponError;

/// Uniform response wrapper
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub is_success: bool,
    pub status_code: u16,
    pub result: Option<T>,
    pub error_messages: Vec<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 with a payload (which may be absent)
    pub fn ok(result: Option<T>) -> Self {
        Self::success(StatusCode::OK, result)
    }

    /// 201 with the created payload
    pub fn created(result: T) -> Self {
        Self::success(StatusCode::CREATED, Some(result))
    }

    /// 204 recorded in the envelope; no payload
    pub fn no_content() -> Self {
        Self::success(StatusCode::NO_CONTENT, None)
    }

    fn success(status: StatusCode, result: Option<T>) -> Self {
        Self {
            is_success: true,
            status_code: status.as_u16(),
            result,
            error_messages: Vec::new(),
        }
    }

    /// Failed request carrying a single message
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            status_code: status.as_u16(),
            result: None,
            error_messages: vec![message.into()],
        }
    }

    /// HTTP status the envelope is delivered with.
    ///
    /// A 204 cannot carry a body, so it goes out as 200 with the 204 kept
    /// in `statusCode`.
    pub fn http_status(&self) -> StatusCode {
        match StatusCode::from_u16(self.status_code) {
            Ok(status) if status == StatusCode::NO_CONTENT => StatusCode::OK,
            Ok(status) => status,
            Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T: Serialize> From<CouponError> for ApiResponse<T> {
    fn from(err: CouponError) -> Self {
        Self::error(err.status_code(), err.to_string())
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.http_status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_field_names() {
        let response = ApiResponse::ok(Some(json!({"id": 1})));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["isSuccess"], true);
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["result"]["id"], 1);
        assert_eq!(value["errorMessages"], json!([]));
    }

    #[test]
    fn test_absent_result_is_null() {
        let response: ApiResponse<serde_json::Value> = ApiResponse::ok(None);
        let value = serde_json::to_value(&response).unwrap();
        assert!(value["result"].is_null());
    }

    #[test]
    fn test_no_content_delivered_as_ok() {
        let response: ApiResponse<()> = ApiResponse::no_content();
        assert_eq!(response.status_code, 204);
        assert_eq!(response.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_from_coupon_error() {
        let response: ApiResponse<()> = CouponError::NotFound.into();
        assert!(!response.is_success);
        assert_eq!(response.status_code, 400);
        assert_eq!(response.error_messages, vec!["Coupon does not exist!".to_string()]);
        assert_eq!(response.http_status(), StatusCode::BAD_REQUEST);
    }
}
