//! # Coupon Module
//!
//! Domain layer for the coupon service:
//!
//! - `model` - record and payload shapes
//! - `validation` - ordered field rules
//! - `mapper` - shape conversions
//! - `store` - lock-guarded in-memory collection
//! - `service` - list/get/create/update/delete

pub mod errors;
pub mod mapper;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use errors::{CouponError, CouponResult, DUPLICATE_NAME_MESSAGE, NOT_FOUND_MESSAGE};
pub use model::{Coupon, CouponChanges, CouponCreateDto, CouponDto, CouponUpdateDto};
pub use service::CouponService;
pub use store::CouponStore;
