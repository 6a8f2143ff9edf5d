//! Project listings and the validated draft used to create or edit them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserId;

/// Stable project identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Wrap an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Reference to the member who posted a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub id: UserId,
    pub name: String,
    pub avatar: String,
    pub title: String,
}

/// A project listing.
///
/// Listings are immutable once fetched; the only way to change one is the
/// projects slice's update operation, which replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub category: String,
    pub is_paid: bool,
    /// Whole currency units. Always zero for unpaid projects.
    pub budget: u64,
    pub deadline: DateTime<Utc>,
    pub required_skills: Vec<String>,
    pub created_by: Creator,
    pub team_size: u32,
    pub location: String,
    pub duration: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
}

impl Project {
    /// Build a new listing from a validated draft.
    pub fn from_draft(
        id: ProjectId,
        draft: ProjectDraft,
        created_by: Creator,
        created_at: DateTime<Utc>,
    ) -> Self {
        let ProjectDraft {
            title,
            description,
            detailed_description,
            category,
            is_paid,
            budget,
            deadline,
            required_skills,
            team_size,
            location,
            duration,
            responsibilities,
            requirements,
        } = draft;

        Self {
            id,
            title,
            description,
            detailed_description,
            category,
            is_paid,
            budget,
            deadline,
            required_skills,
            created_by,
            team_size,
            location,
            duration,
            created_at,
            updated_at: None,
            responsibilities,
            requirements,
        }
    }

    /// Return the listing with every editable field replaced by `draft`.
    ///
    /// Identity, creator and creation time are kept.
    pub fn with_update(&self, draft: ProjectDraft, updated_at: DateTime<Utc>) -> Self {
        let mut updated = Self::from_draft(self.id, draft, self.created_by.clone(), self.created_at);
        updated.updated_at = Some(updated_at);
        updated
    }
}

/// Reasons a project draft is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectValidationError {
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },
    #[error("paid projects need a positive budget")]
    MissingBudget,
    #[error("deadline must be in the future")]
    DeadlineNotInFuture,
    #[error("team size must be at least one")]
    EmptyTeam,
    #[error("at least one required skill is needed")]
    NoSkills,
    #[error("{field} must not contain blank entries")]
    BlankEntry { field: &'static str },
}

/// Creation and edit input for a project.
///
/// Call [`ProjectDraft::validate`] before handing a draft to a transport;
/// the projects slice does this for you.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub category: String,
    pub is_paid: bool,
    pub budget: u64,
    pub deadline: DateTime<Utc>,
    pub required_skills: Vec<String>,
    pub team_size: u32,
    pub location: String,
    pub duration: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
}

impl ProjectDraft {
    /// Validate the draft against the form rules and normalise it.
    ///
    /// Text fields and list entries are trimmed and the budget of an unpaid
    /// project is forced to zero.
    ///
    /// # Examples
    /// ```
    /// use chrono::{Duration, Utc};
    /// use projectmate::domain::{ProjectDraft, ProjectValidationError};
    ///
    /// let now = Utc::now();
    /// let draft = ProjectDraft {
    ///     title: "X".to_owned(),
    ///     description: "Short".to_owned(),
    ///     detailed_description: "Long".to_owned(),
    ///     category: "Web Development".to_owned(),
    ///     is_paid: false,
    ///     budget: 300,
    ///     deadline: now + Duration::days(3),
    ///     required_skills: vec!["React".to_owned()],
    ///     team_size: 1,
    ///     location: "Remote".to_owned(),
    ///     duration: "1 week".to_owned(),
    ///     responsibilities: vec![],
    ///     requirements: vec![],
    /// };
    ///
    /// let valid = draft.clone().validate(now).expect("valid");
    /// assert_eq!(valid.budget, 0);
    ///
    /// let late = ProjectDraft { deadline: now, ..draft };
    /// assert_eq!(late.validate(now), Err(ProjectValidationError::DeadlineNotInFuture));
    /// ```
    pub fn validate(self, now: DateTime<Utc>) -> Result<Self, ProjectValidationError> {
        let text_fields = [
            ("title", &self.title),
            ("description", &self.description),
            ("detailedDescription", &self.detailed_description),
            ("category", &self.category),
            ("location", &self.location),
            ("duration", &self.duration),
        ];
        if let Some((field, _)) = text_fields
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(ProjectValidationError::BlankField { field });
        }

        if self.is_paid && self.budget == 0 {
            return Err(ProjectValidationError::MissingBudget);
        }
        if self.deadline <= now {
            return Err(ProjectValidationError::DeadlineNotInFuture);
        }
        if self.team_size == 0 {
            return Err(ProjectValidationError::EmptyTeam);
        }
        if self.required_skills.is_empty() {
            return Err(ProjectValidationError::NoSkills);
        }

        let lists = [
            ("requiredSkills", &self.required_skills),
            ("responsibilities", &self.responsibilities),
            ("requirements", &self.requirements),
        ];
        if let Some((field, _)) = lists
            .into_iter()
            .find(|(_, entries)| entries.iter().any(|entry| entry.trim().is_empty()))
        {
            return Err(ProjectValidationError::BlankEntry { field });
        }

        Ok(Self {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            detailed_description: self.detailed_description.trim().to_owned(),
            category: self.category.trim().to_owned(),
            budget: if self.is_paid { self.budget } else { 0 },
            required_skills: trim_entries(self.required_skills),
            location: self.location.trim().to_owned(),
            duration: self.duration.trim().to_owned(),
            responsibilities: trim_entries(self.responsibilities),
            requirements: trim_entries(self.requirements),
            ..self
        })
    }
}

fn trim_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use chrono::{Duration, TimeZone};
    use rstest::{fixture, rstest};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[fixture]
    fn draft() -> ProjectDraft {
        ProjectDraft {
            title: "  Landing page ".to_owned(),
            description: "Build a landing page".to_owned(),
            detailed_description: "Build a responsive landing page".to_owned(),
            category: "Web Development".to_owned(),
            is_paid: true,
            budget: 500,
            deadline: now() + Duration::days(14),
            required_skills: vec![" React ".to_owned()],
            team_size: 2,
            location: "Remote".to_owned(),
            duration: "2 weeks".to_owned(),
            responsibilities: vec!["Ship it".to_owned()],
            requirements: vec![],
        }
    }

    #[rstest]
    fn validation_trims_text(draft: ProjectDraft) {
        let valid = draft.validate(now()).expect("valid draft");
        assert_eq!(valid.title, "Landing page");
        assert_eq!(valid.required_skills, vec!["React".to_owned()]);
        assert_eq!(valid.budget, 500);
    }

    #[rstest]
    #[case::blank_title(
        |d: &mut ProjectDraft| d.title = " ".to_owned(),
        ProjectValidationError::BlankField { field: "title" }
    )]
    #[case::blank_duration(
        |d: &mut ProjectDraft| d.duration = String::new(),
        ProjectValidationError::BlankField { field: "duration" }
    )]
    #[case::paid_without_budget(
        |d: &mut ProjectDraft| d.budget = 0,
        ProjectValidationError::MissingBudget
    )]
    #[case::deadline_now(
        |d: &mut ProjectDraft| d.deadline = now(),
        ProjectValidationError::DeadlineNotInFuture
    )]
    #[case::empty_team(|d: &mut ProjectDraft| d.team_size = 0, ProjectValidationError::EmptyTeam)]
    #[case::no_skills(|d: &mut ProjectDraft| d.required_skills.clear(), ProjectValidationError::NoSkills)]
    #[case::blank_requirement(
        |d: &mut ProjectDraft| d.requirements.push("\t".to_owned()),
        ProjectValidationError::BlankEntry { field: "requirements" }
    )]
    fn rejects_invalid_drafts(
        mut draft: ProjectDraft,
        #[case] mutate: fn(&mut ProjectDraft),
        #[case] expected: ProjectValidationError,
    ) {
        mutate(&mut draft);
        assert_eq!(draft.validate(now()), Err(expected));
    }

    #[rstest]
    fn update_keeps_identity_and_creation(draft: ProjectDraft) {
        let creator = Creator {
            id: UserId::random(),
            name: "Ada".to_owned(),
            avatar: "/placeholder-avatar.png".to_owned(),
            title: "Founder".to_owned(),
        };
        let created_at = now() - Duration::days(2);
        let original = Project::from_draft(
            ProjectId::random(),
            draft.clone().validate(now()).expect("valid"),
            creator.clone(),
            created_at,
        );

        let edited = ProjectDraft {
            title: "Landing page v2".to_owned(),
            ..draft
        };
        let updated = original.with_update(edited.validate(now()).expect("valid"), now());

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_by, creator);
        assert_eq!(updated.created_at, created_at);
        assert_eq!(updated.updated_at, Some(now()));
        assert_eq!(updated.title, "Landing page v2");
    }
}
