//! Conversions between the wire shapes and the stored record.
//!
//! Fields a shape does not carry are left unset here; the store assigns
//! ids and timestamps.

use super::model::{Coupon, CouponChanges, CouponCreateDto, CouponDto, CouponUpdateDto};

impl From<CouponCreateDto> for Coupon {
    fn from(dto: CouponCreateDto) -> Self {
        Coupon::new(0, dto.name, dto.percent, dto.is_active)
    }
}

impl From<CouponUpdateDto> for CouponChanges {
    fn from(dto: CouponUpdateDto) -> Self {
        Self {
            name: dto.name,
            percent: dto.percent,
            is_active: dto.is_active,
        }
    }
}

impl From<&Coupon> for CouponDto {
    fn from(coupon: &Coupon) -> Self {
        Self {
            id: coupon.id,
            name: coupon.name.clone(),
            percent: coupon.percent,
            is_active: coupon.is_active,
            created: coupon.created,
            last_updated: coupon.last_updated,
        }
    }
}

impl From<Coupon> for CouponDto {
    fn from(coupon: Coupon) -> Self {
        Self {
            id: coupon.id,
            name: coupon.name,
            percent: coupon.percent,
            is_active: coupon.is_active,
            created: coupon.created,
            last_updated: coupon.last_updated,
        }
    }
}
