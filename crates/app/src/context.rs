//! Application context - dependency injection container
//!
//! Constructed once at process start, torn down with the process. Pages
//! (commands) receive `&AppContext` and never reach for globals.

use std::sync::Arc;

use awsomeshop_core::{SessionManager, SessionStore};
use awsomeshop_domain::{Config, Result};
use awsomeshop_infra::{
    AdminApi, ApiClient, AuthApi, FileSessionStore, PointsApi, ProductsApi, RedemptionsApi,
    UsersApi,
};

use crate::navigation::NavigationState;
use crate::notifications::{NotificationCenter, NotificationConfig};

/// Application context - holds all services and dependencies.
pub struct AppContext {
    pub config: Config,
    pub store: Arc<dyn SessionStore>,
    pub session: Arc<SessionManager>,
    pub navigation: Arc<NavigationState>,
    pub notifications: NotificationCenter,

    // Endpoint modules
    pub auth: AuthApi,
    pub products: ProductsApi,
    pub redemptions: RedemptionsApi,
    pub points: PointsApi,
    pub users: UsersApi,
    pub admin: AdminApi,
}

impl AppContext {
    /// Build the context with the file-backed session store from the
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be constructed.
    pub fn new(config: Config) -> Result<Arc<Self>> {
        let store: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::open(config.session.path.clone()));
        Self::with_store(config, store)
    }

    /// Build the context over an externally supplied store. Tests and
    /// embedders without a disk inject a memory store here.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be constructed.
    pub fn with_store(config: Config, store: Arc<dyn SessionStore>) -> Result<Arc<Self>> {
        let session = Arc::new(SessionManager::new(store.clone()));
        let navigation = Arc::new(NavigationState::new(session.clone()));

        let api =
            Arc::new(ApiClient::new(&config.api, store.clone(), navigation.clone())?);

        Ok(Arc::new(Self {
            auth: AuthApi::new(api.clone(), store.clone()),
            products: ProductsApi::new(api.clone()),
            redemptions: RedemptionsApi::new(api.clone()),
            points: PointsApi::new(api.clone()),
            users: UsersApi::new(api.clone()),
            admin: AdminApi::new(api),
            notifications: NotificationCenter::new(NotificationConfig::default()),
            config,
            store,
            session,
            navigation,
        }))
    }
}
