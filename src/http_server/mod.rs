//! # HTTP Server Module
//!
//! Axum server exposing the coupon API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `GET /api/coupon` - List coupons
//! - `GET /api/coupon/:id` - Fetch one coupon
//! - `POST /api/coupon` - Create
//! - `PUT /api/coupon` - Update
//! - `DELETE /api/coupon/:id` - Delete

pub mod config;
pub mod coupon_routes;
pub mod observability_routes;
pub mod response;
pub mod server;

pub use config::HttpServerConfig;
pub use coupon_routes::CouponState;
pub use response::ApiResponse;
pub use server::HttpServer;
