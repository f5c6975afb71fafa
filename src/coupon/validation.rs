//! Payload validation
//!
//! Rules run in a fixed order (name, then percent) and the first failure
//! is the one reported.

use super::errors::{CouponError, CouponResult};
use super::model::{CouponCreateDto, CouponUpdateDto};

/// Lowest accepted discount
pub const MIN_PERCENT: i32 = 1;
/// Highest accepted discount
pub const MAX_PERCENT: i32 = 100;

/// Name must contain something other than whitespace
pub fn validate_name(name: &str) -> CouponResult<()> {
    if name.trim().is_empty() {
        return Err(CouponError::Validation(
            "'Name' must not be empty.".to_string(),
        ));
    }
    Ok(())
}

/// Percent must lie in [MIN_PERCENT, MAX_PERCENT]
pub fn validate_percent(percent: i32) -> CouponResult<()> {
    if !(MIN_PERCENT..=MAX_PERCENT).contains(&percent) {
        return Err(CouponError::Validation(format!(
            "'Percent' must be between {} and {}. You entered {}.",
            MIN_PERCENT, MAX_PERCENT, percent
        )));
    }
    Ok(())
}

pub fn validate_create(dto: &CouponCreateDto) -> CouponResult<()> {
    validate_name(&dto.name)?;
    validate_percent(dto.percent)
}

pub fn validate_update(dto: &CouponUpdateDto) -> CouponResult<()> {
    validate_name(&dto.name)?;
    validate_percent(dto.percent)
}
