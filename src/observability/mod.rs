//! Observability for the coupon service
//!
//! Structured JSON logging of typed lifecycle and request events.
//!
//! # Usage
//!
//! ```ignore
//! use couponapi::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::CouponCreated, &[("id", "2")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Severity an event is logged at
pub fn event_severity(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if matches!(event, Event::RequestRejected | Event::CorsOriginIgnored) {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event_severity(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event_severity(event), event.as_str(), fields);
}
