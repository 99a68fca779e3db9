//! Package assembly
//!
//! Every category becomes a publishable npm package. Its manifest is built
//! from the top-level project descriptor, so version, license and the pinned
//! icon library version always come from one place.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GenerateError, Result};
use crate::icons::Category;
use crate::output::OutputRoot;
use crate::templates::Templates;

/// Top-level `package.json` of the project
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectDescriptor {
    /// Project package name
    pub name: String,
    /// Version shared by every generated package
    pub version: String,
    /// License identifier
    pub license: String,
    /// Project homepage
    #[serde(default)]
    pub homepage: Option<String>,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// npm keywords
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Repository, either a URL string or an object
    #[serde(default)]
    pub repository: Option<Value>,
    /// Author, either a string or an object
    #[serde(default)]
    pub author: Option<Value>,
    /// Runtime dependencies
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

impl ProjectDescriptor {
    /// Read and parse the descriptor at `path`
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ReadDescriptor`] or
    /// [`GenerateError::ParseDescriptor`].
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| GenerateError::ReadDescriptor {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| GenerateError::ParseDescriptor {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Version range the project pins for `library`
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MissingDependency`] if `library` is not a
    /// dependency.
    pub fn dependency_version(&self, library: &str) -> Result<&str> {
        self.dependencies
            .get(library)
            .map(String::as_str)
            .ok_or_else(|| GenerateError::MissingDependency {
                library: library.to_string(),
            })
    }
}

/// `package.json` written into each category package
#[derive(Debug, Serialize)]
pub struct PackageManifest<'a> {
    name: String,
    version: &'a str,
    license: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    homepage: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    keywords: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    repository: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<&'a Value>,
    files: [&'static str; 2],
    dependencies: BTreeMap<&'a str, &'a str>,
}

impl<'a> PackageManifest<'a> {
    /// Build the manifest of `category`'s package
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MissingDependency`] if the descriptor does
    /// not pin `library`.
    pub fn new(
        descriptor: &'a ProjectDescriptor,
        scope: &str,
        library: &'a str,
        category: Category,
    ) -> Result<Self> {
        let library_version = descriptor.dependency_version(library)?;

        Ok(Self {
            name: format!("@{scope}/{category}"),
            version: &descriptor.version,
            license: &descriptor.license,
            homepage: descriptor.homepage.as_deref(),
            description: descriptor.description.as_deref(),
            keywords: &descriptor.keywords,
            repository: descriptor.repository.as_ref(),
            author: descriptor.author.as_ref(),
            files: ["src", "nuxt"],
            dependencies: BTreeMap::from([(library, library_version)]),
        })
    }

    /// Scoped package name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn to_json(&self, category: Category) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)
            .map_err(|source| GenerateError::Serialize { category, source })?;
        json.push('\n');
        Ok(json)
    }
}

/// Writes the manifest, Nuxt module and README of each package
pub struct PackageAssembler<'a> {
    descriptor: &'a ProjectDescriptor,
    templates: &'a Templates,
    scope: &'a str,
    library: &'a str,
    readme: &'a Path,
}

impl<'a> PackageAssembler<'a> {
    /// Create an assembler sharing one descriptor across all packages
    #[must_use]
    pub const fn new(
        descriptor: &'a ProjectDescriptor,
        templates: &'a Templates,
        scope: &'a str,
        library: &'a str,
        readme: &'a Path,
    ) -> Self {
        Self {
            descriptor,
            templates,
            scope,
            library,
            readme,
        }
    }

    /// Write `category`'s package files and return the package root
    ///
    /// # Errors
    ///
    /// Fails if the manifest cannot be built, a template fails to render, or
    /// any file cannot be written or copied.
    pub fn assemble(&self, output: &OutputRoot, category: Category) -> Result<PathBuf> {
        let package = Path::new(category.as_str());

        let module = self.templates.render_nuxt_module(category)?;
        output.write(package.join("nuxt").join("index.js"), &module)?;

        let manifest = PackageManifest::new(self.descriptor, self.scope, self.library, category)?;
        output.write(package.join("package.json"), &manifest.to_json(category)?)?;

        output.copy(self.readme, package.join("README.md"))?;

        tracing::debug!(package = manifest.name(), "assembled package");
        Ok(output.path().join(package))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn descriptor() -> ProjectDescriptor {
        serde_json::from_value(json!({
            "name": "nuxt-hero-icons",
            "version": "2.0.1",
            "license": "MIT",
            "homepage": "https://github.com/nuxt-hero-icons/nuxt-hero-icons",
            "description": "Heroicons as Nuxt components",
            "keywords": ["nuxt", "heroicons"],
            "repository": { "type": "git", "url": "https://github.com/nuxt-hero-icons/nuxt-hero-icons" },
            "author": "Hero Author",
            "dependencies": { "heroicons": "^1.0.6", "fs-extra": "^9.0.0" }
        }))
        .unwrap()
    }

    #[test]
    fn test_manifest_copies_descriptor_fields() {
        let descriptor = descriptor();
        let manifest =
            PackageManifest::new(&descriptor, "nuxt-hero-icons", "heroicons", Category::Outline)
                .unwrap();
        let value: Value =
            serde_json::from_str(&manifest.to_json(Category::Outline).unwrap()).unwrap();

        assert_eq!(value["name"], "@nuxt-hero-icons/outline");
        assert_eq!(value["version"], "2.0.1");
        assert_eq!(value["license"], "MIT");
        assert_eq!(value["keywords"], json!(["nuxt", "heroicons"]));
        assert_eq!(value["repository"]["type"], "git");
        assert_eq!(value["author"], "Hero Author");
        assert_eq!(value["files"], json!(["src", "nuxt"]));
        assert_eq!(value["dependencies"], json!({ "heroicons": "^1.0.6" }));
    }

    #[test]
    fn test_manifest_field_order() {
        let descriptor = descriptor();
        let manifest =
            PackageManifest::new(&descriptor, "nuxt-hero-icons", "heroicons", Category::Solid)
                .unwrap();
        let json = manifest.to_json(Category::Solid).unwrap();

        let name = json.find("\"name\"").unwrap();
        let version = json.find("\"version\"").unwrap();
        let dependencies = json.find("\"dependencies\"").unwrap();
        assert!(name < version && version < dependencies);
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_manifest_omits_absent_optional_fields() {
        let descriptor: ProjectDescriptor = serde_json::from_value(json!({
            "name": "icons",
            "version": "0.1.0",
            "license": "MIT",
            "dependencies": { "heroicons": "1.0.0" }
        }))
        .unwrap();
        let manifest = PackageManifest::new(&descriptor, "icons", "heroicons", Category::Solid)
            .unwrap();
        let value: Value =
            serde_json::from_str(&manifest.to_json(Category::Solid).unwrap()).unwrap();

        assert!(value.get("homepage").is_none());
        assert!(value.get("author").is_none());
        assert_eq!(value["keywords"], json!([]));
    }

    #[test]
    fn test_missing_library_dependency() {
        let mut descriptor = descriptor();
        descriptor.dependencies.clear();

        let err = PackageManifest::new(&descriptor, "nuxt-hero-icons", "heroicons", Category::Solid)
            .unwrap_err();
        assert!(matches!(err, GenerateError::MissingDependency { library } if library == "heroicons"));
    }

    #[test]
    fn test_load_rejects_invalid_descriptor() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        fs::write(&path, "{ \"name\": \"icons\" }").unwrap();

        let err = ProjectDescriptor::load(&path).unwrap_err();
        assert!(matches!(err, GenerateError::ParseDescriptor { .. }));
    }

    #[test]
    fn test_assemble_writes_package_files() {
        let temp = TempDir::new().unwrap();
        let readme = temp.path().join("README.md");
        fs::write(&readme, "# Nuxt Hero Icons\n").unwrap();

        let descriptor = descriptor();
        let templates = Templates::new().unwrap();
        let assembler =
            PackageAssembler::new(&descriptor, &templates, "nuxt-hero-icons", "heroicons", &readme);
        let output = OutputRoot::reset(&temp.path().join("packages"), &[temp.path()], &[]).unwrap();

        let package = assembler.assemble(&output, Category::Outline).unwrap();

        assert_eq!(package, temp.path().join("packages/outline"));
        assert!(package.join("package.json").is_file());
        assert!(fs::read_to_string(package.join("nuxt/index.js"))
            .unwrap()
            .contains("prefix: \"outline\""));
        assert_eq!(
            fs::read_to_string(package.join("README.md")).unwrap(),
            "# Nuxt Hero Icons\n"
        );
    }
}
