//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in the coupon service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Startup coupons placed in the store
    StoreSeeded,
    /// Listener bound, ready to serve
    ServerListening,
    /// Startup failed (FATAL)
    BootFailed,
    /// Unparsable CORS origin left out of the allow-list
    CorsOriginIgnored,

    // Requests
    /// All coupons returned
    CouponsListed,
    /// Single coupon lookup
    CouponFetched,
    /// Coupon accepted by the store
    CouponCreated,
    /// Coupon overwritten in place
    CouponUpdated,
    /// Coupon removed
    CouponDeleted,
    /// Request answered with an error envelope
    RequestRejected,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::BootFailed => "BOOT_FAILED",
            Event::CorsOriginIgnored => "CORS_ORIGIN_IGNORED",
            Event::CouponsListed => "COUPONS_LISTED",
            Event::CouponFetched => "COUPON_FETCHED",
            Event::CouponCreated => "COUPON_CREATED",
            Event::CouponUpdated => "COUPON_UPDATED",
            Event::CouponDeleted => "COUPON_DELETED",
            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::CouponCreated.as_str(), "COUPON_CREATED");
        assert_eq!(Event::RequestRejected.to_string(), "REQUEST_REJECTED");
    }

    #[test]
    fn test_only_boot_failure_is_fatal() {
        assert!(Event::BootFailed.is_fatal());
        assert!(!Event::CouponDeleted.is_fatal());
        assert!(!Event::RequestRejected.is_fatal());
    }
}
