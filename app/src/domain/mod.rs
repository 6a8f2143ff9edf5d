//! Domain primitives, slices and services.
//!
//! Purpose: model the marketplace's client-side state as explicit values.
//! Every mutation flows through [`Store::dispatch`] as a [`StoreEvent`];
//! services wrap the request lifecycle around a [`ports::MarketplaceTransport`].
//!
//! Public surface:
//! - Entities: [`Project`], [`Application`], [`UserProfile`], [`Session`].
//! - State: [`SliceState`], [`ProfileState`], [`AuthState`], [`AppState`].
//! - Services: [`ProjectsSlice`], [`ApplicationsSlice`], [`UserSlice`],
//!   [`AuthSessionManager`], wired together by [`Marketplace`].

pub mod application;
pub mod applications_slice;
pub mod auth;
pub mod auth_session;
pub mod error;
pub mod marketplace;
pub mod ports;
pub mod project;
pub mod project_query;
pub mod projects_slice;
pub mod slice;
mod slice_driver;
pub mod state;
pub mod store;
pub mod user;
pub mod user_slice;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use self::application::{
    Application, ApplicationDraft, ApplicationId, ApplicationInput, ApplicationStatus,
    ApplicationValidationError,
};
pub use self::applications_slice::ApplicationsSlice;
pub use self::auth::{
    AuthProvider, AuthState, AuthValidationError, LoginCredentials, PASSWORD_MIN,
    ParseNameError, Registration, RegistrationProfile, Role, Session,
};
pub use self::auth_session::AuthSessionManager;
pub use self::error::{Error, ErrorCode, ErrorValidationError, StoreError};
pub use self::marketplace::Marketplace;
pub use self::project::{Creator, Project, ProjectDraft, ProjectId, ProjectValidationError};
pub use self::project_query::ProjectQuery;
pub use self::projects_slice::ProjectsSlice;
pub use self::slice::{
    Identified, ProfileEvent, ProfileState, RequestStatus, SliceEvent, SliceOperation, SliceState,
};
pub use self::state::{AppState, StoreEvent};
pub use self::store::{Store, StoreNotification};
pub use self::user::{UserId, UserProfile, UserValidationError};
pub use self::user_slice::UserSlice;
