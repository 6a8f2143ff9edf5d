//! Project listings served by the simulated backend.
//!
//! Wraps an [`example_projects::ProjectCatalogue`] plus any generated extras
//! and resolves their relative day offsets against a clock.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use example_projects::{
    ExampleProjectSeed, GenerationError, ProjectCatalogue, RegistryError,
    generate_example_projects,
};
use tracing::info;

use crate::domain::{Creator, Project, ProjectId, UserId};

/// Errors raised while assembling the listing source.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Listing seeds plus the category and skill pools they draw from.
#[derive(Debug, Clone)]
pub struct CatalogueSource {
    categories: Vec<String>,
    skills: Vec<String>,
    seeds: Vec<ExampleProjectSeed>,
}

impl CatalogueSource {
    /// Serve exactly the catalogue's projects.
    pub fn new(catalogue: &ProjectCatalogue) -> Self {
        Self {
            categories: catalogue.categories().to_vec(),
            skills: catalogue.skills().to_vec(),
            seeds: catalogue.projects().to_vec(),
        }
    }

    /// Load the catalogue at `path` (or the bundled one) and append
    /// `generated` deterministic extras drawn with `seed`.
    pub fn load(path: Option<&Path>, generated: usize, seed: u64) -> Result<Self, CatalogueError> {
        let catalogue = match path {
            Some(path) => ProjectCatalogue::from_file(path)?,
            None => ProjectCatalogue::bundled()?,
        };
        let mut source = Self::new(&catalogue);
        if generated > 0 {
            source
                .seeds
                .extend(generate_example_projects(&catalogue, seed, generated)?);
        }
        info!(
            version = catalogue.version(),
            bundled = path.is_none(),
            projects = source.seeds.len(),
            generated,
            "project catalogue loaded"
        );
        Ok(source)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Every listing with timestamps resolved against `now`.
    pub fn projects_at(&self, now: DateTime<Utc>) -> Vec<Project> {
        self.seeds.iter().map(|seed| project_from_seed(seed, now)).collect()
    }
}

/// Materialise a validated seed as a domain listing relative to `now`.
fn project_from_seed(seed: &ExampleProjectSeed, now: DateTime<Utc>) -> Project {
    Project {
        id: ProjectId::from_uuid(seed.id),
        title: seed.title.clone(),
        description: seed.description.clone(),
        detailed_description: seed.detailed_description.clone(),
        category: seed.category.clone(),
        is_paid: seed.is_paid,
        budget: seed.budget,
        deadline: now + Duration::days(seed.deadline_in_days),
        required_skills: seed.required_skills.clone(),
        created_by: Creator {
            id: UserId::from_uuid(seed.created_by.id),
            name: seed.created_by.name.clone(),
            avatar: seed.created_by.avatar.clone(),
            title: seed.created_by.title.clone(),
        },
        team_size: seed.team_size,
        location: seed.location.clone(),
        duration: seed.duration.clone(),
        created_at: now - Duration::days(seed.created_days_ago),
        updated_at: None,
        responsibilities: seed.responsibilities.clone(),
        requirements: seed.requirements.clone(),
    }
}
