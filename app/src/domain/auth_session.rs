//! Auth session manager.
//!
//! Owns the single active [`Session`], mirrors it into the durable session
//! record and publishes every [`AuthState`] change on a watch channel.

use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::auth::{
    AuthProvider, AuthState, LoginCredentials, Registration, RegistrationProfile, Role, Session,
};
use super::error::{Error, StoreError};
use super::ports::{
    ApiRequest, ApiResponse, MarketplaceTransport, SessionStore, SessionStoreError, TransportError,
};
use super::slice::RequestStatus;
use super::slice_driver::map_transport_error;

/// Authenticates users and keeps the durable session record in step.
pub struct AuthSessionManager<T, S> {
    transport: Arc<T>,
    sessions: Arc<S>,
    state: watch::Sender<AuthState>,
}

impl<T, S> AuthSessionManager<T, S>
where
    T: MarketplaceTransport,
    S: SessionStore,
{
    /// Start from whatever the durable record holds.
    ///
    /// A missing, unreadable or malformed record starts unauthenticated.
    pub fn restore(transport: Arc<T>, sessions: Arc<S>) -> Self {
        let initial = match sessions.load() {
            Ok(Some(session)) => {
                info!(user_id = %session.id, role = %session.role, "session restored");
                AuthState {
                    session: Some(session),
                    status: RequestStatus::Fulfilled,
                    error: None,
                }
            }
            Ok(None) => AuthState::default(),
            Err(error @ SessionStoreError::Malformed { .. }) => {
                warn!(error = %error, "ignoring malformed session record");
                AuthState::default()
            }
            Err(error) => {
                warn!(error = %error, "session record unreadable");
                AuthState::default()
            }
        };
        let (state, _) = watch::channel(initial);
        Self {
            transport,
            sessions,
            state,
        }
    }

    /// Current auth state.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receive every subsequent auth state change.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn session(&self) -> Option<Session> {
        self.state.borrow().session.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.state.borrow().has_role(role)
    }

    /// Sign in with email and password, replacing any active session.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        cancel: CancellationToken,
    ) -> Result<Session, StoreError> {
        let credentials =
            LoginCredentials::try_from_parts(email, password).map_err(reject_input)?;
        self.authenticate(ApiRequest::Login { credentials }, cancel)
            .await
    }

    /// Create an account and sign in as it.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        profile: RegistrationProfile,
        cancel: CancellationToken,
    ) -> Result<Session, StoreError> {
        let registration = Registration::try_new(email, password, profile).map_err(reject_input)?;
        self.authenticate(ApiRequest::Register { registration }, cancel)
            .await
    }

    /// Sign in through a third-party identity provider.
    pub async fn login_with_provider(
        &self,
        provider: AuthProvider,
        cancel: CancellationToken,
    ) -> Result<Session, StoreError> {
        self.authenticate(ApiRequest::ProviderLogin { provider }, cancel)
            .await
    }

    /// End the session and delete the durable record.
    pub fn logout(&self) {
        if let Err(error) = self.sessions.clear() {
            warn!(error = %error, "failed to clear session record");
        }
        let previous = self.state.send_replace(AuthState::default());
        if let Some(session) = previous.session {
            info!(user_id = %session.id, "session ended");
        }
    }

    async fn authenticate(
        &self,
        request: ApiRequest,
        cancel: CancellationToken,
    ) -> Result<Session, StoreError> {
        let request_name = request.name();
        self.state.send_modify(|state| {
            state.status = RequestStatus::Pending;
            state.error = None;
        });
        debug!(request = request_name, "auth request dispatched");

        let result = self
            .transport
            .perform(request, cancel)
            .await
            .and_then(ApiResponse::into_session);

        match result {
            Ok(session) => {
                if let Err(error) = self.sessions.save(&session) {
                    warn!(error = %error, "failed to persist session record");
                }
                info!(
                    request = request_name,
                    user_id = %session.id,
                    role = %session.role,
                    "session established"
                );
                self.state.send_modify(|state| {
                    state.session = Some(session.clone());
                    state.status = RequestStatus::Fulfilled;
                    state.error = None;
                });
                Ok(session)
            }
            Err(TransportError::Cancelled) => {
                self.state.send_modify(|state| {
                    if state.status == RequestStatus::Pending {
                        state.status = if state.session.is_some() {
                            RequestStatus::Fulfilled
                        } else {
                            RequestStatus::Idle
                        };
                    }
                });
                warn!(request = request_name, "auth request cancelled");
                Err(StoreError::Cancelled)
            }
            Err(error) => {
                let error = match error {
                    TransportError::Rejected { .. } => Error::unauthorized(error.to_string()),
                    other => map_transport_error(&other),
                };
                self.state.send_modify(|state| {
                    state.status = RequestStatus::Rejected;
                    state.error = Some(error.message().to_owned());
                });
                warn!(
                    request = request_name,
                    code = ?error.code(),
                    error = %error,
                    "auth request rejected"
                );
                Err(StoreError::Auth(error))
            }
        }
    }
}

fn reject_input(err: impl std::fmt::Display) -> StoreError {
    let error = Error::invalid_request(err.to_string());
    warn!(error = %error, "auth input rejected");
    StoreError::Validation(error)
}

#[cfg(test)]
#[path = "auth_session_tests.rs"]
mod tests;
