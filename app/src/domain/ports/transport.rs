//! Driven port for the marketplace backend.
//!
//! Slices and the auth session manager only ever talk to the backend through
//! [`MarketplaceTransport`]. The default adapter is the simulated backend in
//! `outbound::simulated_api`; tests substitute mocks or scripted fakes.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::{
    Application, ApplicationDraft, AuthProvider, Creator, LoginCredentials, Project,
    ProjectDraft, Registration, Session, UserId, UserProfile,
};

use super::define_port_error;

define_port_error! {
    /// Errors raised by marketplace transport adapters.
    pub enum TransportError {
        /// The backend could not be reached.
        Unavailable { message: String } =>
            "marketplace backend unavailable: {message}",
        /// The backend refused the request.
        Rejected { message: String } =>
            "marketplace backend rejected the request: {message}",
        /// The caller cancelled the request before it settled.
        Cancelled => "request cancelled before settlement",
        /// The backend answered with a payload for a different request.
        UnexpectedResponse { expected: String } =>
            "unexpected response from marketplace backend, expected {expected}",
    }
}

/// A logical request to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    ListProjects,
    CreateProject {
        draft: ProjectDraft,
        creator: Creator,
    },
    UpdateProject {
        project: Box<Project>,
        draft: ProjectDraft,
    },
    ListApplications,
    CreateApplication {
        draft: ApplicationDraft,
    },
    GetProfile {
        user_id: UserId,
    },
    UpdateProfile {
        profile: UserProfile,
    },
    Login {
        credentials: LoginCredentials,
    },
    Register {
        registration: Registration,
    },
    ProviderLogin {
        provider: AuthProvider,
    },
}

impl ApiRequest {
    /// Short request name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListProjects => "list_projects",
            Self::CreateProject { .. } => "create_project",
            Self::UpdateProject { .. } => "update_project",
            Self::ListApplications => "list_applications",
            Self::CreateApplication { .. } => "create_application",
            Self::GetProfile { .. } => "get_profile",
            Self::UpdateProfile { .. } => "update_profile",
            Self::Login { .. } => "login",
            Self::Register { .. } => "register",
            Self::ProviderLogin { .. } => "provider_login",
        }
    }
}

/// Payload returned for an [`ApiRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Projects(Vec<Project>),
    Project(Box<Project>),
    Applications(Vec<Application>),
    Application(Application),
    Profile(UserProfile),
    Session(Session),
}

impl ApiResponse {
    fn kind(&self) -> &'static str {
        match self {
            Self::Projects(_) => "projects",
            Self::Project(_) => "project",
            Self::Applications(_) => "applications",
            Self::Application(_) => "application",
            Self::Profile(_) => "profile",
            Self::Session(_) => "session",
        }
    }

    fn unexpected(self, expected: &str) -> TransportError {
        TransportError::unexpected_response(format!("{expected}, got {}", self.kind()))
    }

    pub fn into_projects(self) -> Result<Vec<Project>, TransportError> {
        match self {
            Self::Projects(projects) => Ok(projects),
            other => Err(other.unexpected("projects")),
        }
    }

    pub fn into_project(self) -> Result<Project, TransportError> {
        match self {
            Self::Project(project) => Ok(*project),
            other => Err(other.unexpected("project")),
        }
    }

    pub fn into_applications(self) -> Result<Vec<Application>, TransportError> {
        match self {
            Self::Applications(applications) => Ok(applications),
            other => Err(other.unexpected("applications")),
        }
    }

    pub fn into_application(self) -> Result<Application, TransportError> {
        match self {
            Self::Application(application) => Ok(application),
            other => Err(other.unexpected("application")),
        }
    }

    pub fn into_profile(self) -> Result<UserProfile, TransportError> {
        match self {
            Self::Profile(profile) => Ok(profile),
            other => Err(other.unexpected("profile")),
        }
    }

    pub fn into_session(self) -> Result<Session, TransportError> {
        match self {
            Self::Session(session) => Ok(session),
            other => Err(other.unexpected("session")),
        }
    }
}

/// Port for performing backend requests.
///
/// Implementations settle each request exactly once. A cancelled `cancel`
/// token must resolve the request with [`TransportError::Cancelled`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketplaceTransport: Send + Sync {
    /// Perform `request`, resolving after the backend settles it.
    async fn perform(
        &self,
        request: ApiRequest,
        cancel: CancellationToken,
    ) -> Result<ApiResponse, TransportError>;
}
