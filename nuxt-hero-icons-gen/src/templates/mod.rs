//! Generated file templates

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use crate::error::{GenerateError, Result};
use crate::icons::Category;

pub mod files;
pub use files::*;

const COMPONENT: &str = "component";
const NUXT_MODULE: &str = "nuxt_module";
const BARREL: &str = "barrel";

/// One re-export line of a package's barrel module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarrelEntry {
    /// Exported component identifier
    pub name: String,
    /// Component file name relative to `src/components`
    pub file: String,
}

/// Compiled templates for every generated text file
pub struct Templates {
    handlebars: Handlebars<'static>,
}

impl Templates {
    /// Compile the built-in templates
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Template`] if a built-in template fails to
    /// parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        for (name, template) in [
            (COMPONENT, COMPONENT_VUE),
            (NUXT_MODULE, NUXT_MODULE_JS),
            (BARREL, BARREL_INDEX_JS),
        ] {
            handlebars
                .register_template_string(name, template)
                .map_err(|source| GenerateError::Template {
                    name,
                    source: Box::new(source),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Wrap raw icon markup in a component body
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Render`] if rendering fails.
    pub fn render_component(&self, svg: &str) -> Result<String> {
        self.render(COMPONENT, &json!({ "markup": indent_markup(svg) }))
    }

    /// Render the Nuxt module for `category`
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Render`] if rendering fails.
    pub fn render_nuxt_module(&self, category: Category) -> Result<String> {
        self.render(NUXT_MODULE, &json!({ "category": category.as_str() }))
    }

    /// Render a barrel module exporting `entries` in the given order
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Render`] if rendering fails.
    pub fn render_barrel(&self, entries: &[BarrelEntry]) -> Result<String> {
        self.render(BARREL, &json!({ "components": entries }))
    }

    fn render(&self, name: &'static str, context: &serde_json::Value) -> Result<String> {
        self.handlebars
            .render(name, context)
            .map_err(|source| GenerateError::Render {
                name,
                source: Box::new(source),
            })
    }
}

/// Trim `svg` and indent every line by two spaces
///
/// A byte order mark counts as whitespace when trimming. Lines are split on
/// `\n` only, so CRLF input keeps its `\r` at the end of each line.
#[must_use]
pub fn indent_markup(svg: &str) -> String {
    svg.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .split('\n')
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
