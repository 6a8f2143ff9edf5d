//! Error types for the example-projects crate.
//!
//! Catalogue parsing and project generation each get a semantic error enum
//! built with `thiserror`.

use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

use crate::validation::SeedValidationError;

/// Errors that can occur when parsing or querying a project catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The catalogue file could not be read.
    #[error("failed to read catalogue file at '{path}': {message}")]
    IoError {
        /// Path to the catalogue file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The catalogue JSON is malformed or missing required fields.
    #[error("invalid catalogue JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The catalogue version is not supported.
    #[error("unsupported catalogue version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the catalogue.
        actual: u32,
    },

    /// A project ID is not a valid UUID.
    #[error("invalid project UUID at index {index}: {value}")]
    InvalidProjectId {
        /// Index of the project in the array.
        index: usize,
        /// The invalid UUID string.
        value: String,
    },

    /// A creator ID is not a valid UUID.
    #[error("invalid creator UUID at index {index}: {value}")]
    InvalidCreatorId {
        /// Index of the project in the array.
        index: usize,
        /// The invalid UUID string.
        value: String,
    },

    /// Two projects share the same identifier.
    #[error("duplicate project id {id}")]
    DuplicateProjectId {
        /// The repeated identifier.
        id: Uuid,
    },

    /// A project record failed validation.
    #[error("invalid project at index {index}: {reason}")]
    InvalidProject {
        /// Index of the project in the array.
        index: usize,
        /// Validation failure.
        reason: SeedValidationError,
    },

    /// The catalogue contains no projects.
    #[error("catalogue contains no projects")]
    EmptyProjects,

    /// The requested project was not found in the catalogue.
    #[error("project '{id}' not found in catalogue")]
    ProjectNotFound {
        /// The identifier that was not found.
        id: Uuid,
    },
}

/// Errors that can occur during project generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The catalogue has no categories to draw from.
    #[error("catalogue contains no categories for selection")]
    NoCategories,

    /// The catalogue has no skills to draw from.
    #[error("catalogue contains no skills for selection")]
    NoSkills,
}
