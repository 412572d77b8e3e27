//! Route table

use awsomeshop_domain::Role;

/// Every addressable page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Products,
    Redemptions,
    Points,
    Profile,
    AdminDashboard,
    AdminUsers,
    AdminProducts,
    AdminPoints,
    AdminOrders,
    AdminReports,
}

impl Route {
    /// Parse a URL path into a route. `None` for unknown paths.
    pub fn parse(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "/login" => Some(Self::Login),
            "/products" => Some(Self::Products),
            "/redemptions" => Some(Self::Redemptions),
            "/points" => Some(Self::Points),
            "/profile" => Some(Self::Profile),
            "/admin" | "/admin/dashboard" => Some(Self::AdminDashboard),
            "/admin/users" => Some(Self::AdminUsers),
            "/admin/products" => Some(Self::AdminProducts),
            "/admin/points" => Some(Self::AdminPoints),
            "/admin/orders" => Some(Self::AdminOrders),
            "/admin/reports" => Some(Self::AdminReports),
            _ => None,
        }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Products => "/products",
            Self::Redemptions => "/redemptions",
            Self::Points => "/points",
            Self::Profile => "/profile",
            Self::AdminDashboard => "/admin/dashboard",
            Self::AdminUsers => "/admin/users",
            Self::AdminProducts => "/admin/products",
            Self::AdminPoints => "/admin/points",
            Self::AdminOrders => "/admin/orders",
            Self::AdminReports => "/admin/reports",
        }
    }

    /// Whether this route sits under the admin layout.
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Self::AdminDashboard
                | Self::AdminUsers
                | Self::AdminProducts
                | Self::AdminPoints
                | Self::AdminOrders
                | Self::AdminReports
        )
    }

    /// Landing page for a role.
    pub fn home(role: Role) -> Self {
        match role {
            Role::Admin => Self::AdminDashboard,
            Role::Employee => Self::Products,
        }
    }
}
