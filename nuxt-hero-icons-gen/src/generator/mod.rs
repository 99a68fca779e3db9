//! Generation pipeline
//!
//! A run has three stages: enumerate the icon sources, emit one component per
//! icon, and assemble one package per category. Inputs are validated before
//! the output tree is reset, so a bad icon set leaves the previous packages
//! untouched.
//!
//! # Example
//!
//! ```rust,no_run
//! use nuxt_hero_icons_gen::{Generator, GeneratorConfig};
//! use std::path::Path;
//!
//! # fn example() -> nuxt_hero_icons_gen::Result<()> {
//! let root = Path::new(".");
//! let generator = Generator::new(root, GeneratorConfig::load(root, None)?)?;
//! let report = generator.run()?;
//! println!("{} components", report.total_components());
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::icons::{self, Category, IconSource};
use crate::output::OutputRoot;
use crate::package::{PackageAssembler, ProjectDescriptor};
use crate::templates::{BarrelEntry, Templates};

/// Summary of one generated package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    /// Package category
    pub category: Category,
    /// Package root directory
    pub root: PathBuf,
    /// Number of component files written
    pub components: usize,
}

/// Outcome of a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// One entry per category, in generation order
    pub packages: Vec<PackageSummary>,
}

impl GenerationReport {
    /// Components written across all packages
    #[must_use]
    pub fn total_components(&self) -> usize {
        self.packages.iter().map(|package| package.components).sum()
    }
}

/// Icon package generator for one project root
pub struct Generator {
    root: PathBuf,
    config: GeneratorConfig,
    descriptor: ProjectDescriptor,
    templates: Templates,
}

impl Generator {
    /// Load the project descriptor and compile templates
    ///
    /// # Errors
    ///
    /// Fails if the descriptor cannot be read or parsed, does not pin the
    /// configured icon library, or a template fails to compile.
    pub fn new(root: &Path, config: GeneratorConfig) -> Result<Self> {
        let descriptor = ProjectDescriptor::load(&config.descriptor_path(root))?;
        descriptor.dependency_version(&config.icon_library)?;

        tracing::info!(
            project = %descriptor.name,
            version = %descriptor.version,
            "loaded project descriptor"
        );

        Ok(Self {
            root: root.to_path_buf(),
            config,
            descriptor,
            templates: Templates::new()?,
        })
    }

    /// Descriptor shared by every package manifest
    #[must_use]
    pub const fn descriptor(&self) -> &ProjectDescriptor {
        &self.descriptor
    }

    /// Enumerate and generate in one step
    ///
    /// # Errors
    ///
    /// See [`Generator::enumerate`] and [`Generator::generate`].
    pub fn run(&self) -> Result<GenerationReport> {
        let icons = self.enumerate()?;
        self.generate(&icons, |_| {})
    }

    /// List every icon source without touching the output tree
    ///
    /// # Errors
    ///
    /// See [`icons::enumerate`].
    pub fn enumerate(&self) -> Result<Vec<IconSource>> {
        icons::enumerate(
            &self.config.icons_root(&self.root),
            &Category::ALL,
            &self.config.component_suffix,
        )
    }

    /// Reset the output tree and write every package
    ///
    /// `on_component` is called after each component file is written.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable icon, render failure or filesystem
    /// error. The output tree is left partially written in that case.
    pub fn generate(
        &self,
        icons: &[IconSource],
        mut on_component: impl FnMut(&IconSource),
    ) -> Result<GenerationReport> {
        let output_root = self.config.output_root(&self.root);
        let icons_root = self.config.icons_root(&self.root);
        let descriptor = self.config.descriptor_path(&self.root);
        let readme = self.config.readme_path(&self.root);
        let output = OutputRoot::reset(
            &output_root,
            &[self.root.as_path()],
            &[icons_root.as_path(), descriptor.as_path(), readme.as_path()],
        )?;

        tracing::info!(output = %output.path().display(), "regenerating packages");

        for icon in icons {
            self.emit_component(&output, icon)?;
            on_component(icon);
        }

        let assembler = PackageAssembler::new(
            &self.descriptor,
            &self.templates,
            &self.config.package_scope,
            &self.config.icon_library,
            &readme,
        );

        let mut report = GenerationReport::default();
        for category in Category::ALL {
            let components: Vec<&IconSource> =
                icons.iter().filter(|icon| icon.category == category).collect();

            if self.config.barrel {
                self.emit_barrel(&output, category, &components)?;
            }

            let root = assembler.assemble(&output, category)?;
            report.packages.push(PackageSummary {
                category,
                root,
                components: components.len(),
            });
        }

        tracing::info!(
            components = report.total_components(),
            packages = report.packages.len(),
            "generation complete"
        );
        Ok(report)
    }

    fn component_file(&self, icon: &IconSource) -> String {
        format!("{}.{}", icon.component_name, self.config.component_extension)
    }

    fn emit_component(&self, output: &OutputRoot, icon: &IconSource) -> Result<PathBuf> {
        let svg = fs::read_to_string(&icon.path).map_err(|source| GenerateError::ReadIcon {
            path: icon.path.clone(),
            source,
        })?;
        let component = self.templates.render_component(&svg)?;

        let relative = Path::new(icon.category.as_str())
            .join("src")
            .join("components")
            .join(self.component_file(icon));
        let path = output.write(relative, &component)?;

        tracing::debug!(component = %icon.component_name, path = %path.display(), "wrote component");
        Ok(path)
    }

    fn emit_barrel(
        &self,
        output: &OutputRoot,
        category: Category,
        components: &[&IconSource],
    ) -> Result<PathBuf> {
        let mut entries: Vec<BarrelEntry> = components
            .iter()
            .map(|icon| BarrelEntry {
                name: icon.component_name.clone(),
                file: self.component_file(icon),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let barrel = self.templates.render_barrel(&entries)?;
        output.write(Path::new(category.as_str()).join("src").join("index.js"), &barrel)
    }
}
