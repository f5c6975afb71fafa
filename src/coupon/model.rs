//! Coupon record and its wire shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named discount held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: i32,
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
    /// Set once when the store accepts the record
    pub created: Option<DateTime<Utc>>,
    /// Set on insertion and on every update
    pub last_updated: Option<DateTime<Utc>>,
}

impl Coupon {
    /// Create an unstamped coupon with the given id
    pub fn new(id: i32, name: impl Into<String>, percent: i32, is_active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            percent,
            is_active,
            created: None,
            last_updated: None,
        }
    }

    /// Case-insensitive name comparison used for uniqueness checks
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// POST payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponCreateDto {
    pub name: String,
    pub percent: i32,
    #[serde(default)]
    pub is_active: bool,
}

/// PUT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponUpdateDto {
    pub id: i32,
    pub name: String,
    pub percent: i32,
    #[serde(default)]
    pub is_active: bool,
}

/// The mutable subset of a coupon, applied in place by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponChanges {
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
}

/// Read shape returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponDto {
    pub id: i32,
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
    pub created: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coupon_serializes_camel_case() {
        let coupon = Coupon::new(1, "10OFF", 10, true);
        let json = serde_json::to_value(&coupon).unwrap();
        assert_eq!(json["isActive"], true);
        assert!(json["lastUpdated"].is_null());
        assert!(json.get("is_active").is_none());
    }

    #[test]
    fn test_create_dto_defaults_is_active() {
        let dto: CouponCreateDto =
            serde_json::from_str(r#"{"name":"5OFF","percent":5}"#).unwrap();
        assert!(!dto.is_active);
    }

    #[test]
    fn test_name_matches_ignores_case() {
        let coupon = Coupon::new(1, "Summer", 10, true);
        assert!(coupon.name_matches("SUMMER"));
        assert!(coupon.name_matches("summer"));
        assert!(!coupon.name_matches("winter"));
    }
}
