//! Coupon operations composed from validation, mapping and the store.

use super::errors::{CouponError, CouponResult};
use super::model::{Coupon, CouponChanges, CouponCreateDto, CouponDto, CouponUpdateDto};
use super::store::CouponStore;
use super::validation::{validate_create, validate_update};

/// Entry point for the five coupon operations
#[derive(Debug)]
pub struct CouponService {
    store: CouponStore,
}

impl CouponService {
    pub fn new(store: CouponStore) -> Self {
        Self { store }
    }

    /// Service over the seeded startup store
    pub fn seeded() -> Self {
        Self::new(CouponStore::seeded())
    }

    /// Underlying store
    pub fn store(&self) -> &CouponStore {
        &self.store
    }

    pub fn list(&self) -> CouponResult<Vec<CouponDto>> {
        Ok(self.store.list()?.into_iter().map(CouponDto::from).collect())
    }

    /// A missing id is not an error; callers get `None`.
    pub fn get(&self, id: i32) -> CouponResult<Option<CouponDto>> {
        Ok(self.store.get_by_id(id)?.map(CouponDto::from))
    }

    pub fn create(&self, dto: CouponCreateDto) -> CouponResult<CouponDto> {
        validate_create(&dto)?;
        let created = self.store.insert_new(Coupon::from(dto))?;
        Ok(CouponDto::from(created))
    }

    pub fn update(&self, dto: CouponUpdateDto) -> CouponResult<CouponDto> {
        validate_update(&dto)?;
        let id = dto.id;
        let updated = self.store.apply_update(id, CouponChanges::from(dto))?;
        Ok(CouponDto::from(updated))
    }

    pub fn delete(&self, id: i32) -> CouponResult<CouponDto> {
        self.store
            .remove(id)?
            .map(CouponDto::from)
            .ok_or(CouponError::NotFound)
    }
}

impl Default for CouponService {
    fn default() -> Self {
        Self::seeded()
    }
}
