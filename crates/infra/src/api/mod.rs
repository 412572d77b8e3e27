//! Authenticated backend API access
//!
//! [`client::ApiClient`] is the single point of egress for every backend
//! call; the [`endpoints`] modules put typed faces on each resource.

pub mod client;
pub mod endpoints;

pub use client::ApiClient;
pub use endpoints::admin::AdminApi;
pub use endpoints::auth::AuthApi;
pub use endpoints::points::PointsApi;
pub use endpoints::products::ProductsApi;
pub use endpoints::redemptions::RedemptionsApi;
pub use endpoints::users::UsersApi;
