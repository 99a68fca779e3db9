//! Generator configuration
//!
//! Every setting has a default matching the conventional project layout, so
//! the generator runs with no configuration at all. Sources are merged with
//! clear precedence:
//!
//! 1. Environment variables (highest priority, `NUXT_HERO_ICONS_` prefix)
//! 2. `<root>/nuxt-hero-icons.toml`, or the file given with `--config`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # nuxt-hero-icons.toml
//! icons_dir = "node_modules/heroicons/optimized"
//! output_dir = "packages"
//! package_scope = "nuxt-hero-icons"
//! barrel = true
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GenerateError, Result};

/// Config file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "nuxt-hero-icons.toml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "NUXT_HERO_ICONS_";

/// Generator settings
///
/// Relative paths are resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory holding one subdirectory per icon category
    pub icons_dir: PathBuf,

    /// Directory the packages are generated into; destroyed on every run
    pub output_dir: PathBuf,

    /// Top-level `package.json` the manifests are derived from
    pub descriptor: PathBuf,

    /// Documentation file copied into every package
    pub readme: PathBuf,

    /// npm scope of the generated packages
    pub package_scope: String,

    /// Icon library the packages depend on
    pub icon_library: String,

    /// Token appended to every component name
    pub component_suffix: String,

    /// File extension of generated components
    pub component_extension: String,

    /// Also write a `src/index.js` re-exporting every component
    pub barrel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            icons_dir: PathBuf::from("node_modules/heroicons/optimized"),
            output_dir: PathBuf::from("packages"),
            descriptor: PathBuf::from("package.json"),
            readme: PathBuf::from("README.md"),
            package_scope: "nuxt-hero-icons".to_string(),
            icon_library: "heroicons".to_string(),
            component_suffix: "Icon".to_string(),
            component_extension: "vue".to_string(),
            barrel: false,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration for the project at `root`
    ///
    /// Uses `config_file` when given, otherwise `<root>/nuxt-hero-icons.toml`
    /// if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - An explicit `config_file` does not exist
    /// - The config file contains invalid TOML or mistyped values
    pub fn load(root: &Path, config_file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        match config_file {
            Some(path) if !path.is_file() => {
                return Err(GenerateError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local_config = root.join(CONFIG_FILE_NAME);
                if local_config.is_file() {
                    figment = figment.merge(Toml::file(&local_config));
                }
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Self = figment.extract().map_err(Box::new)?;
        tracing::debug!(
            output_dir = %config.output_dir.display(),
            icons_dir = %config.icons_dir.display(),
            "resolved configuration"
        );
        Ok(config)
    }

    /// Icon source directory under `root`
    #[must_use]
    pub fn icons_root(&self, root: &Path) -> PathBuf {
        root.join(&self.icons_dir)
    }

    /// Output directory under `root`
    #[must_use]
    pub fn output_root(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }

    /// Descriptor path under `root`
    #[must_use]
    pub fn descriptor_path(&self, root: &Path) -> PathBuf {
        root.join(&self.descriptor)
    }

    /// README path under `root`
    #[must_use]
    pub fn readme_path(&self, root: &Path) -> PathBuf {
        root.join(&self.readme)
    }
}
