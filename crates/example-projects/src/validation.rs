//! Project record validation mirroring the marketplace's form rules.
//!
//! # Validation Rules
//!
//! - Title, description, detailed description, category, location and
//!   duration must not be blank
//! - Paid projects need a positive budget; unpaid projects carry no budget
//! - Team size must be at least one
//! - At least one required skill, and no blank list entries
//! - The creation offset must not lie in the future
//! - Deadline and creation offsets stay within [`MAX_DAY_OFFSET`] days

use thiserror::Error;

use crate::seed::ExampleProjectSeed;

/// Largest accepted deadline or creation offset, in days.
pub const MAX_DAY_OFFSET: i64 = 3_650;

/// Reasons an example project record is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedValidationError {
    /// A required text field is blank.
    #[error("{field} must not be blank")]
    BlankField {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A paid project has no budget.
    #[error("paid projects need a positive budget")]
    MissingBudget,
    /// An unpaid project carries a budget.
    #[error("unpaid projects must not carry a budget")]
    UnexpectedBudget,
    /// Team size is zero.
    #[error("team size must be at least one")]
    EmptyTeam,
    /// No required skills are listed.
    #[error("at least one required skill is needed")]
    NoSkills,
    /// A list contains a blank entry.
    #[error("{field} must not contain blank entries")]
    BlankEntry {
        /// Name of the offending list.
        field: &'static str,
    },
    /// The project claims to be created in the future.
    #[error("created offset must not be negative")]
    CreatedInFuture,
    /// A day offset lies outside `-MAX_DAY_OFFSET..=MAX_DAY_OFFSET`.
    #[error("{field} must be within {MAX_DAY_OFFSET} days, got {days}")]
    OffsetOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected offset.
        days: i64,
    },
}

/// Validates a single example project.
///
/// # Errors
///
/// Returns the first [`SeedValidationError`] encountered.
///
/// # Examples
///
/// ```
/// use example_projects::{ProjectCatalogue, validate_project_seed};
///
/// let catalogue = ProjectCatalogue::bundled().expect("valid");
/// for project in catalogue.projects() {
///     assert!(validate_project_seed(project).is_ok());
/// }
/// ```
pub fn validate_project_seed(seed: &ExampleProjectSeed) -> Result<(), SeedValidationError> {
    let text_fields = [
        ("title", seed.title.as_str()),
        ("description", seed.description.as_str()),
        ("detailedDescription", seed.detailed_description.as_str()),
        ("category", seed.category.as_str()),
        ("location", seed.location.as_str()),
        ("duration", seed.duration.as_str()),
    ];
    if let Some((field, _)) = text_fields
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
    {
        return Err(SeedValidationError::BlankField { field });
    }

    match (seed.is_paid, seed.budget) {
        (true, 0) => return Err(SeedValidationError::MissingBudget),
        (false, budget) if budget > 0 => return Err(SeedValidationError::UnexpectedBudget),
        _ => {}
    }

    if seed.team_size == 0 {
        return Err(SeedValidationError::EmptyTeam);
    }
    if seed.required_skills.is_empty() {
        return Err(SeedValidationError::NoSkills);
    }

    let lists = [
        ("requiredSkills", &seed.required_skills),
        ("responsibilities", &seed.responsibilities),
        ("requirements", &seed.requirements),
    ];
    if let Some((field, _)) = lists
        .into_iter()
        .find(|(_, entries)| entries.iter().any(|entry| entry.trim().is_empty()))
    {
        return Err(SeedValidationError::BlankEntry { field });
    }

    if seed.created_days_ago < 0 {
        return Err(SeedValidationError::CreatedInFuture);
    }
    let offsets = [
        ("deadlineInDays", seed.deadline_in_days),
        ("createdDaysAgo", seed.created_days_ago),
    ];
    if let Some((field, days)) = offsets
        .into_iter()
        .find(|(_, days)| days.unsigned_abs() > MAX_DAY_OFFSET.unsigned_abs())
    {
        return Err(SeedValidationError::OffsetOutOfRange { field, days });
    }

    Ok(())
}
