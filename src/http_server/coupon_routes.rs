//! Coupon HTTP Routes
//!
//! CRUD endpoints over the in-memory coupon store. Every handler answers
//! with an [`ApiResponse`] envelope, including rejected bodies and paths.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::response::ApiResponse;
use crate::coupon::{CouponCreateDto, CouponDto, CouponError, CouponService, CouponUpdateDto};
use crate::observability::{log_event_with_fields, Event};

// ==================
// Shared State
// ==================

/// Coupon state shared across handlers
pub struct CouponState {
    pub service: CouponService,
}

impl CouponState {
    pub fn new(service: CouponService) -> Self {
        Self { service }
    }

    /// State over the seeded startup store
    pub fn seeded() -> Self {
        Self::new(CouponService::seeded())
    }
}

impl Default for CouponState {
    fn default() -> Self {
        Self::seeded()
    }
}

// ==================
// Coupon Routes
// ==================

/// Create coupon routes (nested under `/api`)
pub fn coupon_routes(state: Arc<CouponState>) -> Router {
    Router::new()
        .route(
            "/coupon",
            get(list_coupons_handler)
                .post(create_coupon_handler)
                .put(update_coupon_handler),
        )
        .route(
            "/coupon/:id",
            get(get_coupon_handler).delete(delete_coupon_handler),
        )
        .with_state(state)
}

/// Log and wrap a failed operation
fn reject<T: Serialize>(operation: &str, err: CouponError) -> ApiResponse<T> {
    let message = err.to_string();
    log_event_with_fields(
        Event::RequestRejected,
        &[("operation", operation), ("reason", message.as_str())],
    );
    ApiResponse::from(err)
}

fn reject_path<T: Serialize>(operation: &str, rejection: PathRejection) -> ApiResponse<T> {
    let message = rejection.body_text();
    log_event_with_fields(
        Event::RequestRejected,
        &[("operation", operation), ("reason", message.as_str())],
    );
    ApiResponse::error(StatusCode::NOT_FOUND, message)
}

fn body_error(rejection: JsonRejection) -> CouponError {
    CouponError::InvalidBody(rejection.body_text())
}

// ==================
// Handlers
// ==================

/// GET /api/coupon
async fn list_coupons_handler(
    State(state): State<Arc<CouponState>>,
) -> ApiResponse<Vec<CouponDto>> {
    match state.service.list() {
        Ok(coupons) => {
            let count = coupons.len().to_string();
            log_event_with_fields(Event::CouponsListed, &[("count", count.as_str())]);
            ApiResponse::ok(Some(coupons))
        }
        Err(e) => reject("list", e),
    }
}

/// GET /api/coupon/:id
///
/// An unknown id is still a success, with a null result.
async fn get_coupon_handler(
    State(state): State<Arc<CouponState>>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResponse<CouponDto> {
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return reject_path("get", rejection),
    };

    match state.service.get(id) {
        Ok(coupon) => {
            let id = id.to_string();
            let found = coupon.is_some().to_string();
            log_event_with_fields(
                Event::CouponFetched,
                &[("found", found.as_str()), ("id", id.as_str())],
            );
            ApiResponse::ok(coupon)
        }
        Err(e) => reject("get", e),
    }
}

/// POST /api/coupon
async fn create_coupon_handler(
    State(state): State<Arc<CouponState>>,
    payload: Result<Json<CouponCreateDto>, JsonRejection>,
) -> ApiResponse<CouponDto> {
    let result = payload
        .map_err(body_error)
        .and_then(|Json(dto)| state.service.create(dto));

    match result {
        Ok(coupon) => {
            let id = coupon.id.to_string();
            log_event_with_fields(
                Event::CouponCreated,
                &[("id", id.as_str()), ("name", coupon.name.as_str())],
            );
            ApiResponse::created(coupon)
        }
        Err(e) => reject("create", e),
    }
}

/// PUT /api/coupon
async fn update_coupon_handler(
    State(state): State<Arc<CouponState>>,
    payload: Result<Json<CouponUpdateDto>, JsonRejection>,
) -> ApiResponse<CouponDto> {
    let result = payload
        .map_err(body_error)
        .and_then(|Json(dto)| state.service.update(dto));

    match result {
        Ok(coupon) => {
            let id = coupon.id.to_string();
            log_event_with_fields(Event::CouponUpdated, &[("id", id.as_str())]);
            ApiResponse::ok(Some(coupon))
        }
        Err(e) => reject("update", e),
    }
}

/// DELETE /api/coupon/:id
async fn delete_coupon_handler(
    State(state): State<Arc<CouponState>>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResponse<CouponDto> {
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return reject_path("delete", rejection),
    };

    match state.service.delete(id) {
        Ok(_) => {
            let id = id.to_string();
            log_event_with_fields(Event::CouponDeleted, &[("id", id.as_str())]);
            ApiResponse::no_content()
        }
        Err(e) => reject("delete", e),
    }
}
