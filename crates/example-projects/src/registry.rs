//! Project catalogue types and JSON parsing.
//!
//! The catalogue holds the example projects served by the simulated
//! marketplace backend, plus the category and skill pools used by the
//! generator and by browsing filters.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use uuid::Uuid;

use crate::error::RegistryError;
use crate::seed::{CreatorSeed, ExampleProjectSeed};
use crate::validation::validate_project_seed;

/// Current supported catalogue version.
const SUPPORTED_VERSION: u32 = 1;

/// Catalogue shipped with the crate.
const BUNDLED_CATALOGUE: &str = include_str!("../fixtures/projects.json");

/// A validated catalogue of example projects.
///
/// # Example
///
/// ```
/// use example_projects::ProjectCatalogue;
///
/// let json = r#"{
///     "version": 1,
///     "categories": ["Database"],
///     "skills": ["SQL"],
///     "projects": [{
///         "id": "b8a1c7e2-5d3f-4a6b-9c01-000000000009",
///         "title": "Schema review",
///         "description": "Review our schema",
///         "detailedDescription": "Review our relational schema",
///         "category": "Database",
///         "isPaid": false,
///         "budget": 0,
///         "deadlineInDays": 7,
///         "createdDaysAgo": 0,
///         "requiredSkills": ["SQL"],
///         "createdBy": {
///             "id": "c4f2d9a0-7e1b-4c3d-8f20-000000000009",
///             "name": "Grace Hopper",
///             "avatar": "/placeholder-avatar.png",
///             "title": "Admiral"
///         },
///         "teamSize": 1,
///         "location": "Remote",
///         "duration": "1 week",
///         "responsibilities": [],
///         "requirements": []
///     }]
/// }"#;
///
/// let catalogue = ProjectCatalogue::from_json(json).expect("valid catalogue");
/// assert_eq!(catalogue.projects().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCatalogue {
    version: u32,
    categories: Vec<String>,
    skills: Vec<String>,
    projects: Vec<ExampleProjectSeed>,
}

impl ProjectCatalogue {
    /// Parses the catalogue bundled with this crate.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the bundled fixture fails validation,
    /// which indicates a packaging defect.
    pub fn bundled() -> Result<Self, RegistryError> {
        Self::from_json(BUNDLED_CATALOGUE)
    }

    /// Parses a catalogue from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed or misses required fields
    /// - The version is unsupported
    /// - Any project or creator UUID is invalid
    /// - Project identifiers repeat
    /// - A project fails validation
    /// - The projects array is empty
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawProjectCatalogue =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a catalogue from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawProjectCatalogue) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.projects.is_empty() {
            return Err(RegistryError::EmptyProjects);
        }

        let projects = raw
            .projects
            .into_iter()
            .enumerate()
            .map(|(index, project)| project.into_seed(index))
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::with_capacity(projects.len());
        for (index, project) in projects.iter().enumerate() {
            if !seen.insert(project.id) {
                return Err(RegistryError::DuplicateProjectId { id: project.id });
            }
            validate_project_seed(project)
                .map_err(|reason| RegistryError::InvalidProject { index, reason })?;
        }

        Ok(Self {
            version: raw.version,
            categories: raw.categories,
            skills: raw.skills,
            projects,
        })
    }

    /// Returns the catalogue version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the category pool offered for browsing and generation.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns the skill pool offered for browsing and generation.
    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Returns every project in catalogue order.
    #[must_use]
    pub fn projects(&self) -> &[ExampleProjectSeed] {
        &self.projects
    }

    /// Finds a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ProjectNotFound`] if no project matches.
    pub fn find_project(&self, id: Uuid) -> Result<&ExampleProjectSeed, RegistryError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(RegistryError::ProjectNotFound { id })
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProjectCatalogue {
    version: u32,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    skills: Vec<String>,
    projects: Vec<RawProject>,
}

/// Raw JSON representation of a project with unchecked identifiers.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProject {
    id: String,
    title: String,
    description: String,
    detailed_description: String,
    category: String,
    is_paid: bool,
    #[serde(default)]
    budget: u64,
    deadline_in_days: i64,
    created_days_ago: i64,
    required_skills: Vec<String>,
    created_by: RawCreator,
    team_size: u32,
    location: String,
    duration: String,
    #[serde(default)]
    responsibilities: Vec<String>,
    #[serde(default)]
    requirements: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawCreator {
    id: String,
    name: String,
    avatar: String,
    title: String,
}

impl RawProject {
    fn into_seed(self, index: usize) -> Result<ExampleProjectSeed, RegistryError> {
        let id = Uuid::parse_str(&self.id).map_err(|_| RegistryError::InvalidProjectId {
            index,
            value: self.id.clone(),
        })?;
        let creator_id = Uuid::parse_str(&self.created_by.id).map_err(|_| {
            RegistryError::InvalidCreatorId {
                index,
                value: self.created_by.id.clone(),
            }
        })?;

        Ok(ExampleProjectSeed {
            id,
            title: self.title,
            description: self.description,
            detailed_description: self.detailed_description,
            category: self.category,
            is_paid: self.is_paid,
            budget: self.budget,
            deadline_in_days: self.deadline_in_days,
            created_days_ago: self.created_days_ago,
            required_skills: self.required_skills,
            created_by: CreatorSeed {
                id: creator_id,
                name: self.created_by.name,
                avatar: self.created_by.avatar,
                title: self.created_by.title,
            },
            team_size: self.team_size,
            location: self.location,
            duration: self.duration,
            responsibilities: self.responsibilities,
            requirements: self.requirements,
        })
    }
}
