//! Explicit state container wiring every slice to one store and transport.

use std::sync::Arc;

use mockable::Clock;

use super::applications_slice::ApplicationsSlice;
use super::auth_session::AuthSessionManager;
use super::ports::{MarketplaceTransport, SessionStore};
use super::projects_slice::ProjectsSlice;
use super::state::AppState;
use super::store::Store;
use super::user_slice::UserSlice;

/// The application's state core.
///
/// Constructed once at start-up and passed to whatever needs it; there is
/// no global instance.
pub struct Marketplace<T, S> {
    store: Arc<Store>,
    projects: ProjectsSlice<T>,
    applications: ApplicationsSlice<T>,
    user: UserSlice<T>,
    auth: AuthSessionManager<T, S>,
}

impl<T, S> Marketplace<T, S>
where
    T: MarketplaceTransport,
    S: SessionStore,
{
    /// Wire the slices and restore any stored session.
    pub fn new(transport: Arc<T>, sessions: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(Store::new());
        Self {
            projects: ProjectsSlice::new(Arc::clone(&store), Arc::clone(&transport), clock),
            applications: ApplicationsSlice::new(Arc::clone(&store), Arc::clone(&transport)),
            user: UserSlice::new(Arc::clone(&store), Arc::clone(&transport)),
            auth: AuthSessionManager::restore(transport, sessions),
            store,
        }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn projects(&self) -> &ProjectsSlice<T> {
        &self.projects
    }

    pub fn applications(&self) -> &ApplicationsSlice<T> {
        &self.applications
    }

    pub fn user(&self) -> &UserSlice<T> {
        &self.user
    }

    pub fn auth(&self) -> &AuthSessionManager<T, S> {
        &self.auth
    }

    /// Latest settled state of every slice.
    pub fn snapshot(&self) -> AppState {
        self.store.snapshot()
    }
}
