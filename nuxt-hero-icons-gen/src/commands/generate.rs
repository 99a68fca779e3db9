//! Package generation command

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use nuxt_hero_icons_gen::{GenerationReport, Generator, GeneratorConfig};

/// Regenerate every icon package of a project
pub struct GenerateCommand {
    root: PathBuf,
    config_file: Option<PathBuf>,
    barrel: bool,
}

impl GenerateCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `root` - Project root holding `package.json` and the icon library
    /// * `config_file` - Config file overriding `<root>/nuxt-hero-icons.toml`
    /// * `barrel` - Force barrel `src/index.js` generation
    pub const fn new(root: PathBuf, config_file: Option<PathBuf>, barrel: bool) -> Self {
        Self {
            root,
            config_file,
            barrel,
        }
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        let mut config = GeneratorConfig::load(&self.root, self.config_file.as_deref())
            .context("Failed to load configuration")?;
        if self.barrel {
            config.barrel = true;
        }

        let generator =
            Generator::new(&self.root, config).context("Failed to prepare generator")?;
        let descriptor = generator.descriptor();

        println!(
            "{} {} {}",
            style("Generating").green().bold(),
            style("icon packages for").bold(),
            style(format!("{}@{}", descriptor.name, descriptor.version)).cyan().bold()
        );
        println!();

        let icons = generator
            .enumerate()
            .context("Failed to enumerate icon sources")?;

        let progress = ProgressBar::new(icons.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .context("Failed to set progress style")?
                .progress_chars("=> "),
        );

        let report = generator
            .generate(&icons, |icon| {
                progress.set_message(icon.component_name.clone());
                progress.inc(1);
            })
            .context("Failed to generate packages")?;

        progress.finish_and_clear();

        Self::print_success(&report);

        Ok(())
    }

    /// Print a per-package summary
    fn print_success(report: &GenerationReport) {
        for package in &report.packages {
            println!(
                "  {} {} ({} components)",
                style("✓").green(),
                style(package.root.display()).dim(),
                package.components
            );
        }
        println!();
        println!(
            "{}",
            style(format!(
                "✓ Generated {} components in {} packages",
                report.total_components(),
                report.packages.len()
            ))
            .green()
            .bold()
        );
    }
}
