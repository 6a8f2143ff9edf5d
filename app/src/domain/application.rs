//! Applications submitted by contributors to a project.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::project::{Project, ProjectId};

/// Stable application identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(Uuid);

impl ApplicationId {
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Review status of an application.
///
/// Applications are created `Pending`. No operation moves them to
/// `Accepted` or `Rejected` yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// A submitted application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub project_id: ProjectId,
    pub cover_letter: String,
    pub expected_compensation: Option<String>,
    pub availability: String,
    pub portfolio_url: Option<Url>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

impl Application {
    /// Materialise a pending application from a validated draft.
    pub fn from_draft(id: ApplicationId, draft: ApplicationDraft, applied_at: DateTime<Utc>) -> Self {
        Self {
            id,
            project_id: draft.project_id,
            cover_letter: draft.cover_letter,
            expected_compensation: draft.expected_compensation,
            availability: draft.availability,
            portfolio_url: draft.portfolio_url,
            status: ApplicationStatus::Pending,
            applied_at,
        }
    }
}

/// Raw application form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationInput {
    pub cover_letter: String,
    pub expected_compensation: Option<String>,
    pub availability: String,
    pub portfolio_url: Option<String>,
}

/// Reasons an application form is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplicationValidationError {
    #[error("cover letter must not be blank")]
    EmptyCoverLetter,
    #[error("availability must not be blank")]
    EmptyAvailability,
    #[error("expected compensation is required for paid projects")]
    MissingCompensation,
    #[error("portfolio URL is invalid: {reason}")]
    InvalidPortfolioUrl { reason: String },
}

/// Application input validated against its target project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDraft {
    project_id: ProjectId,
    cover_letter: String,
    expected_compensation: Option<String>,
    availability: String,
    portfolio_url: Option<Url>,
}

impl ApplicationDraft {
    /// Validate form input for `project`.
    ///
    /// Blank optional fields are treated as absent; compensation becomes
    /// mandatory when the project is paid.
    pub fn try_new(
        project: &Project,
        input: ApplicationInput,
    ) -> Result<Self, ApplicationValidationError> {
        let cover_letter = input.cover_letter.trim();
        if cover_letter.is_empty() {
            return Err(ApplicationValidationError::EmptyCoverLetter);
        }
        let availability = input.availability.trim();
        if availability.is_empty() {
            return Err(ApplicationValidationError::EmptyAvailability);
        }

        let expected_compensation = non_blank(input.expected_compensation);
        if project.is_paid && expected_compensation.is_none() {
            return Err(ApplicationValidationError::MissingCompensation);
        }

        let portfolio_url = non_blank(input.portfolio_url)
            .map(|raw| Url::parse(&raw))
            .transpose()
            .map_err(|err| ApplicationValidationError::InvalidPortfolioUrl {
                reason: err.to_string(),
            })?;

        Ok(Self {
            project_id: project.id,
            cover_letter: cover_letter.to_owned(),
            expected_compensation,
            availability: availability.to_owned(),
            portfolio_url,
        })
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn cover_letter(&self) -> &str {
        &self.cover_letter
    }

    pub fn expected_compensation(&self) -> Option<&str> {
        self.expected_compensation.as_deref()
    }

    pub fn availability(&self) -> &str {
        &self.availability
    }

    pub fn portfolio_url(&self) -> Option<&Url> {
        self.portfolio_url.as_ref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}
