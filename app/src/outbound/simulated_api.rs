//! Simulated marketplace backend.
//!
//! Resolves every request after an artificial delay using the project
//! catalogue and fixed demo identities. The delay races the caller's
//! cancellation token; a cancelled request yields no payload.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockable::Clock;
use rand::Rng;
use tokio_util::sync::CancellationToken;
use tracing::trace;
use uuid::Uuid;

use super::catalogue::CatalogueSource;
use crate::domain::ports::{ApiRequest, ApiResponse, MarketplaceTransport, TransportError};
use crate::domain::{
    Application, ApplicationId, AuthProvider, Project, ProjectId, Role, Session, UserId,
    UserProfile,
};

/// Avatar used by every demo identity.
pub const DEMO_AVATAR: &str = "/placeholder-avatar.png";

const DEMO_USER_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0001);
const GOOGLE_USER_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0002);
const GITHUB_USER_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0003);

/// How long the simulated backend takes to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    Fixed(Duration),
    /// `base` plus a uniform extra delay in `0..=jitter`.
    Jittered { base: Duration, jitter: Duration },
}

impl Latency {
    /// One second, the demo backend's usual delay.
    pub const DEFAULT: Self = Self::Fixed(Duration::from_millis(1_000));

    /// Build from millisecond settings; zero jitter is a fixed delay.
    pub fn from_millis(base: u64, jitter: u64) -> Self {
        let base = Duration::from_millis(base);
        if jitter == 0 {
            Self::Fixed(base)
        } else {
            Self::Jittered {
                base,
                jitter: Duration::from_millis(jitter),
            }
        }
    }

    /// Draw the delay for one request.
    pub fn sample(&self) -> Duration {
        match *self {
            Self::Fixed(delay) => delay,
            Self::Jittered { base, jitter } => {
                let extra = rand::rng().random_range(0..=jitter.as_millis());
                base + Duration::from_millis(u64::try_from(extra).unwrap_or(u64::MAX))
            }
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The demo user every password login resolves to.
pub fn demo_user_id() -> UserId {
    UserId::from_uuid(DEMO_USER_ID)
}

/// In-process stand-in for the marketplace backend.
pub struct SimulatedApi {
    catalogue: CatalogueSource,
    latency: Latency,
    clock: Arc<dyn Clock>,
}

impl SimulatedApi {
    pub fn new(catalogue: CatalogueSource, latency: Latency, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalogue,
            latency,
            clock,
        }
    }

    pub fn catalogue(&self) -> &CatalogueSource {
        &self.catalogue
    }

    fn resolve(&self, request: ApiRequest) -> ApiResponse {
        let now = self.clock.utc();
        match request {
            ApiRequest::ListProjects => ApiResponse::Projects(self.catalogue.projects_at(now)),
            ApiRequest::CreateProject { draft, creator } => ApiResponse::Project(Box::new(
                Project::from_draft(ProjectId::random(), draft, creator, now),
            )),
            ApiRequest::UpdateProject { project, draft } => {
                ApiResponse::Project(Box::new(project.with_update(draft, now)))
            }
            ApiRequest::ListApplications => ApiResponse::Applications(Vec::new()),
            ApiRequest::CreateApplication { draft } => ApiResponse::Application(
                Application::from_draft(ApplicationId::random(), draft, now),
            ),
            ApiRequest::GetProfile { user_id } => ApiResponse::Profile(demo_profile(user_id)),
            ApiRequest::UpdateProfile { profile } => ApiResponse::Profile(profile),
            ApiRequest::Login { credentials } => ApiResponse::Session(Session {
                id: demo_user_id(),
                name: "John Doe".to_owned(),
                email: credentials.email().to_owned(),
                role: Role::Creator,
                avatar: DEMO_AVATAR.to_owned(),
            }),
            ApiRequest::Register { registration } => ApiResponse::Session(Session {
                id: demo_user_id(),
                name: registration.name().to_owned(),
                email: registration.email().to_owned(),
                role: registration.role(),
                avatar: DEMO_AVATAR.to_owned(),
            }),
            ApiRequest::ProviderLogin { provider } => {
                ApiResponse::Session(provider_session(provider))
            }
        }
    }
}

#[async_trait]
impl MarketplaceTransport for SimulatedApi {
    async fn perform(
        &self,
        request: ApiRequest,
        cancel: CancellationToken,
    ) -> Result<ApiResponse, TransportError> {
        let delay = self.latency.sample();
        trace!(request = request.name(), delay_ms = delay.as_millis(), "simulating backend");
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(TransportError::cancelled()),
            () = tokio::time::sleep(delay) => Ok(self.resolve(request)),
        }
    }
}

fn demo_profile(id: UserId) -> UserProfile {
    UserProfile {
        id,
        name: "John Doe".to_owned(),
        email: "john@example.com".to_owned(),
        avatar: DEMO_AVATAR.to_owned(),
        bio: "Full-stack developer with 5 years of experience".to_owned(),
        skills: vec!["React".to_owned(), "Node.js".to_owned(), "MongoDB".to_owned()],
        location: "New York, USA".to_owned(),
        website: "https://example.com".to_owned(),
        github: "johndoe".to_owned(),
        linkedin: "johndoe".to_owned(),
    }
}

fn provider_session(provider: AuthProvider) -> Session {
    let (id, name, email) = match provider {
        AuthProvider::Google => (GOOGLE_USER_ID, "Google User", "google@example.com"),
        AuthProvider::Github => (GITHUB_USER_ID, "GitHub User", "github@example.com"),
    };
    Session {
        id: UserId::from_uuid(id),
        name: name.to_owned(),
        email: email.to_owned(),
        role: Role::Contributor,
        avatar: DEMO_AVATAR.to_owned(),
    }
}

#[cfg(test)]
#[path = "simulated_api_tests.rs"]
mod tests;
