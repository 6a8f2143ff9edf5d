//! Example project record types.
//!
//! These records mirror the marketplace's project shape without depending on
//! the application crate. Timestamps are stored as day offsets so the
//! catalogue never goes stale; consumers resolve them against their clock.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Creator reference attached to an example project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorSeed {
    /// Creator identifier.
    pub id: Uuid,
    /// Creator display name.
    pub name: String,
    /// Avatar image path.
    pub avatar: String,
    /// Job title shown next to the name.
    pub title: String,
}

/// A catalogue or generated example project.
///
/// # Example
///
/// ```
/// use example_projects::ProjectCatalogue;
///
/// let catalogue = ProjectCatalogue::bundled().expect("valid");
/// let first = catalogue.projects().first().expect("non-empty");
/// assert_eq!(first.title, "E-commerce Website Development");
/// assert!(first.is_paid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleProjectSeed {
    /// Unique project identifier.
    pub id: Uuid,
    /// Project title.
    pub title: String,
    /// One-line summary.
    pub description: String,
    /// Long-form description.
    pub detailed_description: String,
    /// Category label.
    pub category: String,
    /// Whether contributors are paid.
    pub is_paid: bool,
    /// Budget in whole currency units; zero for unpaid projects.
    pub budget: u64,
    /// Days from "now" until the deadline.
    pub deadline_in_days: i64,
    /// Days before "now" the project was created.
    pub created_days_ago: i64,
    /// Ordered list of required skills.
    pub required_skills: Vec<String>,
    /// Creator reference.
    pub created_by: CreatorSeed,
    /// Number of contributors wanted.
    pub team_size: u32,
    /// Location label.
    pub location: String,
    /// Expected duration label.
    pub duration: String,
    /// Contributor responsibilities.
    pub responsibilities: Vec<String>,
    /// Contributor requirements.
    pub requirements: Vec<String>,
}
