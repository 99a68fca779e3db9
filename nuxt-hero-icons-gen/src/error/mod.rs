//! Error types and error handling
//!
//! Every failure is fatal for the run. Variants carry the path involved so the
//! CLI can report exactly which input or output broke the generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::icons::Category;

/// Result alias used throughout the generator
pub type Result<T, E = GenerateError> = std::result::Result<T, E>;

/// Generator error type
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Configuration could not be merged or extracted
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Built-in defaults could not be serialized for merging
    #[error("Failed to serialize default configuration: {0}")]
    ConfigDefaults(#[from] toml::ser::Error),

    /// An explicitly requested config file does not exist
    #[error("Config file not found: {}", path.display())]
    ConfigNotFound {
        /// Requested config file
        path: PathBuf,
    },

    /// Top-level project descriptor could not be read
    #[error("Failed to read project descriptor {}: {source}", path.display())]
    ReadDescriptor {
        /// Descriptor path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Top-level project descriptor is not valid JSON or lacks required fields
    #[error("Invalid project descriptor {}: {source}", path.display())]
    ParseDescriptor {
        /// Descriptor path
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// Descriptor does not pin the icon library
    #[error("Project descriptor has no `{library}` entry in `dependencies`")]
    MissingDependency {
        /// Icon library package name
        library: String,
    },

    /// A category subdirectory is absent from the icon root
    #[error("Icon category directory for `{category}` not found: {}", path.display())]
    MissingCategoryDir {
        /// Category whose directory is missing
        category: Category,
        /// Expected directory
        path: PathBuf,
    },

    /// Listing a directory failed
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        /// Directory being listed
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Icon file name cannot be turned into a component name
    #[error("Cannot derive a component name from {}", path.display())]
    InvalidIconName {
        /// Offending icon file
        path: PathBuf,
    },

    /// Two icons of one category map to the same component name
    #[error(
        "Icons {} and {} both map to component `{component}` in `{category}`",
        first.display(),
        second.display()
    )]
    DuplicateComponent {
        /// Category containing both icons
        category: Category,
        /// Colliding component name
        component: String,
        /// Icon that claimed the name first
        first: PathBuf,
        /// Icon that collided with it
        second: PathBuf,
    },

    /// Icon file could not be read as UTF-8 text
    #[error("Failed to read icon {}: {source}", path.display())]
    ReadIcon {
        /// Icon file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A built-in template failed to compile
    #[error("Failed to register template `{name}`: {source}")]
    Template {
        /// Template name
        name: &'static str,
        /// Underlying template error
        source: Box<handlebars::TemplateError>,
    },

    /// A template failed to render
    #[error("Failed to render template `{name}`: {source}")]
    Render {
        /// Template name
        name: &'static str,
        /// Underlying render error
        source: Box<handlebars::RenderError>,
    },

    /// Package manifest could not be serialized
    #[error("Failed to serialize package manifest for `{category}`: {source}")]
    Serialize {
        /// Category whose manifest failed
        category: Category,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// Output root would destroy the project or its inputs when reset
    #[error(
        "Refusing to reset output directory {}: it overlaps {}",
        path.display(),
        protected.display()
    )]
    UnsafeOutputDir {
        /// Rejected output root
        path: PathBuf,
        /// Protected path the output root would destroy
        protected: PathBuf,
    },

    /// A path could not be resolved to an absolute location
    #[error("Failed to resolve path {}: {source}", path.display())]
    ResolvePath {
        /// Path being resolved
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Removing the previous output tree failed
    #[error("Failed to remove output directory {}: {source}", path.display())]
    RemoveOutput {
        /// Output root
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Creating an output directory failed
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory being created
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Writing an output file failed
    #[error("Failed to write file {}: {source}", path.display())]
    Write {
        /// File being written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Copying the documentation file failed
    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    CopyReadme {
        /// Source README
        from: PathBuf,
        /// Destination inside the package
        to: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}
