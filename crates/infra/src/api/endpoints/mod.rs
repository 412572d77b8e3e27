//! Typed endpoint modules, one per backend resource
//!
//! Each function maps to exactly one backend operation and performs
//! response envelope unwrapping only: the named field is extracted from
//! its `{ <resource>: ... }` wrapper and returned. A missing or
//! mistyped field is a [`awsomeshop_domain::ShopError::Shape`] error at
//! the client layer, never a silent default. No business logic, no
//! retries, no caching.

pub mod admin;
pub mod auth;
pub mod points;
pub mod products;
pub mod redemptions;
pub mod users;
