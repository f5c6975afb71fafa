//! In-memory coupon store
//!
//! A single `RwLock` guards the whole collection. Compound operations
//! (`insert_new`, `apply_update`, `remove`) hold the write lock for their
//! entire check-then-act sequence.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, Utc};

use super::errors::{CouponError, CouponResult};
use super::model::{Coupon, CouponChanges};

/// Process-lifetime collection of coupons
#[derive(Debug, Default)]
pub struct CouponStore {
    coupons: RwLock<Vec<Coupon>>,
}

impl CouponStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the startup coupon set
    pub fn seeded() -> Self {
        let now = Utc::now();
        let mut coupon = Coupon::new(1, "10OFF", 10, true);
        coupon.created = Some(now);
        coupon.last_updated = Some(now);

        Self {
            coupons: RwLock::new(vec![coupon]),
        }
    }

    fn read(&self) -> CouponResult<RwLockReadGuard<'_, Vec<Coupon>>> {
        self.coupons.read().map_err(|_| CouponError::poisoned())
    }

    fn write(&self) -> CouponResult<RwLockWriteGuard<'_, Vec<Coupon>>> {
        self.coupons.write().map_err(|_| CouponError::poisoned())
    }

    /// All coupons in insertion order
    pub fn list(&self) -> CouponResult<Vec<Coupon>> {
        Ok(self.read()?.clone())
    }

    pub fn get_by_id(&self, id: i32) -> CouponResult<Option<Coupon>> {
        Ok(self.read()?.iter().find(|c| c.id == id).cloned())
    }

    /// Case-insensitive lookup
    pub fn get_by_name(&self, name: &str) -> CouponResult<Option<Coupon>> {
        Ok(self.read()?.iter().find(|c| c.name_matches(name)).cloned())
    }

    /// Append a coupon whose id the caller has already assigned
    pub fn add(&self, coupon: Coupon) -> CouponResult<()> {
        let mut coupons = self.write()?;
        if coupons.iter().any(|c| c.id == coupon.id) {
            return Err(CouponError::DuplicateId(coupon.id));
        }
        coupons.push(coupon);
        Ok(())
    }

    /// Remove the coupon with `id`, returning it if it was present
    pub fn remove(&self, id: i32) -> CouponResult<Option<Coupon>> {
        let mut coupons = self.write()?;
        match coupons.iter().position(|c| c.id == id) {
            Some(pos) => Ok(Some(coupons.remove(pos))),
            None => Ok(None),
        }
    }

    /// Id the next created coupon will receive
    pub fn next_id(&self) -> CouponResult<i32> {
        next_id_in(&self.read()?)
    }

    pub fn len(&self) -> CouponResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> CouponResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Assign an id and timestamps to `coupon` and append it.
    ///
    /// Fails with `DuplicateName` if any stored coupon shares its name
    /// case-insensitively.
    pub fn insert_new(&self, mut coupon: Coupon) -> CouponResult<Coupon> {
        let mut coupons = self.write()?;

        if coupons.iter().any(|c| c.name_matches(&coupon.name)) {
            return Err(CouponError::DuplicateName);
        }

        let now = Utc::now();
        coupon.id = next_id_in(&coupons)?;
        coupon.created = Some(now);
        coupon.last_updated = Some(now);

        coupons.push(coupon.clone());
        Ok(coupon)
    }

    /// Overwrite the mutable fields of coupon `id` in place.
    ///
    /// `id` and `created` are untouched; `last_updated` always advances.
    pub fn apply_update(&self, id: i32, changes: CouponChanges) -> CouponResult<Coupon> {
        let mut coupons = self.write()?;

        let coupon = coupons
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CouponError::NotFound)?;

        coupon.name = changes.name;
        coupon.percent = changes.percent;
        coupon.is_active = changes.is_active;
        coupon.last_updated = Some(advance(coupon.last_updated));

        Ok(coupon.clone())
    }
}

/// `max(id) + 1`, or 1 for an empty collection.
///
/// Deleting the current max lets its id be handed out again.
fn next_id_in(coupons: &[Coupon]) -> CouponResult<i32> {
    match coupons.iter().map(|c| c.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(CouponError::IdExhausted),
    }
}

/// Current time, nudged past `previous` if the clock has not moved
fn advance(previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now();
    match previous {
        Some(prev) if now <= prev => prev + Duration::microseconds(1),
        _ => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes(name: &str, percent: i32, is_active: bool) -> CouponChanges {
        CouponChanges {
            name: name.to_string(),
            percent,
            is_active,
        }
    }

    #[test]
    fn test_seeded_store() {
        let store = CouponStore::seeded();
        let coupons = store.list().unwrap();
        assert_eq!(coupons.len(), 1);
        assert_eq!(coupons[0].id, 1);
        assert_eq!(coupons[0].name, "10OFF");
        assert!(coupons[0].created.is_some());
    }

    #[test]
    fn test_next_id_on_empty_store() {
        let store = CouponStore::new();
        assert_eq!(store.next_id().unwrap(), 1);

        let created = store.insert_new(Coupon::new(0, "first", 5, true)).unwrap();
        assert_eq!(created.id, 1);
    }

    #[test]
    fn test_next_id_uses_max_not_len() {
        let store = CouponStore::new();
        store.add(Coupon::new(7, "a", 5, true)).unwrap();
        store.add(Coupon::new(3, "b", 5, true)).unwrap();
        assert_eq!(store.next_id().unwrap(), 8);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let store = CouponStore::seeded();
        let err = store.add(Coupon::new(1, "other", 5, true)).unwrap_err();
        assert_eq!(err, CouponError::DuplicateId(1));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_get_by_name_case_insensitive() {
        let store = CouponStore::seeded();
        assert!(store.get_by_name("10off").unwrap().is_some());
        assert!(store.get_by_name("20OFF").unwrap().is_none());
    }

    #[test]
    fn test_insert_new_rejects_duplicate_name() {
        let store = CouponStore::seeded();
        let err = store.insert_new(Coupon::new(0, "10off", 50, false)).unwrap_err();
        assert_eq!(err, CouponError::DuplicateName);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_remove() {
        let store = CouponStore::seeded();
        store.insert_new(Coupon::new(0, "20OFF", 20, true)).unwrap();

        let removed = store.remove(1).unwrap().unwrap();
        assert_eq!(removed.name, "10OFF");
        assert!(store.remove(1).unwrap().is_none());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_next_id_exhausted_at_max() {
        let store = CouponStore::new();
        store.add(Coupon::new(i32::MAX, "last", 5, true)).unwrap();

        assert_eq!(store.next_id().unwrap_err(), CouponError::IdExhausted);
        let err = store.insert_new(Coupon::new(0, "overflow", 5, true)).unwrap_err();
        assert_eq!(err, CouponError::IdExhausted);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_deleting_max_id_frees_it() {
        let store = CouponStore::seeded();
        let second = store.insert_new(Coupon::new(0, "a", 5, true)).unwrap();
        assert_eq!(second.id, 2);

        store.remove(2).unwrap();
        let again = store.insert_new(Coupon::new(0, "b", 5, true)).unwrap();
        assert_eq!(again.id, 2);
    }

    #[test]
    fn test_deleting_lower_id_keeps_next_id() {
        let store = CouponStore::seeded();
        let second = store.insert_new(Coupon::new(0, "a", 5, true)).unwrap();
        assert_eq!(second.id, 2);

        store.remove(1).unwrap();
        let third = store.insert_new(Coupon::new(0, "b", 5, true)).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_apply_update_preserves_identity() {
        let store = CouponStore::seeded();
        let before = store.get_by_id(1).unwrap().unwrap();

        let after = store.apply_update(1, changes("renamed", 55, false)).unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.created, before.created);
        assert_eq!(after.name, "renamed");
        assert_eq!(after.percent, 55);
        assert!(!after.is_active);
        assert!(after.last_updated > before.last_updated);
    }

    #[test]
    fn test_apply_update_missing_id() {
        let store = CouponStore::seeded();
        let err = store.apply_update(42, changes("x", 5, true)).unwrap_err();
        assert_eq!(err, CouponError::NotFound);
    }

    #[test]
    fn test_advance_is_strictly_increasing() {
        let future = Utc::now() + Duration::seconds(60);
        assert!(advance(Some(future)) > future);
        assert!(advance(None) <= Utc::now());
    }
}
