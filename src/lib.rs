//! couponapi - in-memory coupon CRUD service over HTTP

pub mod cli;
pub mod coupon;
pub mod http_server;
pub mod observability;
