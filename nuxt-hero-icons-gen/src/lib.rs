//! Nuxt component packages generated from the heroicons SVG set
//!
//! Reads `<icons_dir>/{outline,solid}/*.svg`, wraps every icon in a
//! single-file Vue component, and writes one npm package per category:
//!
//! ```text
//! packages/<category>/
//!   src/components/<ComponentName>.vue
//!   nuxt/index.js
//!   package.json
//!   README.md
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod generator;
pub mod icons;
pub mod observability;
pub mod output;
pub mod package;
pub mod templates;

pub use config::GeneratorConfig;
pub use error::{GenerateError, Result};
pub use generator::{GenerationReport, Generator, PackageSummary};
pub use icons::{Category, IconSource};
pub use package::ProjectDescriptor;
