//! Example project catalogue for the Project Mate demo.
//!
//! This crate owns the mock data source that stands in for a marketplace
//! backend. It is deliberately independent of the application's domain
//! types so the catalogue can be validated and generated on its own.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading versioned project catalogues from JSON (bundled or on disk)
//! - Validating every project record before it reaches the application
//! - Deterministic generation of additional example projects from a seed
//!
//! # Example
//!
//! ```
//! use example_projects::{ProjectCatalogue, generate_example_projects};
//!
//! let catalogue = ProjectCatalogue::bundled().expect("bundled catalogue is valid");
//! assert_eq!(catalogue.projects().len(), 6);
//!
//! let extra = generate_example_projects(&catalogue, 2026, 3).expect("generation succeeds");
//! assert_eq!(extra.len(), 3);
//! ```

mod error;
mod generator;
mod registry;
mod seed;
mod validation;

pub use error::{GenerationError, RegistryError};
pub use generator::generate_example_projects;
pub use registry::ProjectCatalogue;
pub use seed::{CreatorSeed, ExampleProjectSeed};
pub use validation::{MAX_DAY_OFFSET, SeedValidationError, validate_project_seed};
