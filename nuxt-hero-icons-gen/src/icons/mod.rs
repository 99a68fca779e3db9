//! Icon source enumeration
//!
//! Lists the icon files of every category under the icon root and derives
//! a component name for each of them. Enumeration only reads directory
//! listings; nothing is written.
//!
//! Component names are the file stem plus a suffix token, converted to
//! `PascalCase`:
//!
//! | file               | component        |
//! |--------------------|------------------|
//! | `academic-cap.svg` | `AcademicCapIcon`|
//! | `x-circle.svg`     | `XCircleIcon`    |
//! | `arrow-left-1.svg` | `ArrowLeft1Icon` |

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use convert_case::{Boundary, Case, Casing};
use walkdir::WalkDir;

use crate::error::{GenerateError, Result};

/// Icon style shipped by the icon library
///
/// Each category is both an input subdirectory and an output package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// 24x24, 2px stroke icons
    Outline,
    /// 20x20 filled icons
    Solid,
}

impl Category {
    /// Every category, in generation order
    pub const ALL: [Self; 2] = [Self::Outline, Self::Solid];

    /// Directory name and component prefix for this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::Solid => "solid",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One icon file found during enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSource {
    /// Location of the SVG file
    pub path: PathBuf,
    /// File name up to the first `.`
    pub raw_name: String,
    /// Category the icon was found under
    pub category: Category,
    /// Derived component identifier, e.g. `AcademicCapIcon`
    pub component_name: String,
}

impl IconSource {
    /// Build a record for the icon at `path`
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidIconName`] if the file name is not
    /// UTF-8 or has nothing before its first `.`.
    pub fn from_path(path: &Path, category: Category, suffix: &str) -> Result<Self> {
        let raw_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.split('.').next())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| GenerateError::InvalidIconName {
                path: path.to_path_buf(),
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            raw_name: raw_name.to_string(),
            category,
            component_name: component_name(raw_name, suffix),
        })
    }
}

/// Word boundaries inside a delimited icon name
const WORD_BOUNDARIES: [Boundary; 4] = [
    Boundary::Hyphen,
    Boundary::LowerUpper,
    Boundary::DigitUpper,
    // "XMLFile" -> "XML" "File"
    Boundary::Acronym,
];

/// Derive a component identifier from an icon's base name
///
/// Words are split on non-alphanumeric characters and on lower-to-upper
/// transitions, capitalized, and joined. Leftover underscores are removed.
#[must_use]
pub fn component_name(raw_name: &str, suffix: &str) -> String {
    let delimited: String = format!("{raw_name}{suffix}")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    delimited
        .with_boundaries(&WORD_BOUNDARIES)
        .to_case(Case::Pascal)
        .replace('_', "")
}

/// List every icon of `categories` under `icons_root`
///
/// Entries are returned per category in file-name order. Subdirectories and
/// hidden files are skipped.
///
/// # Errors
///
/// - [`GenerateError::MissingCategoryDir`] if a category directory is absent
/// - [`GenerateError::ReadDir`] if a listing fails
/// - [`GenerateError::InvalidIconName`] for unusable file names
/// - [`GenerateError::DuplicateComponent`] if two icons in one category
///   derive the same component name
pub fn enumerate(
    icons_root: &Path,
    categories: &[Category],
    suffix: &str,
) -> Result<Vec<IconSource>> {
    let mut icons = Vec::new();

    for &category in categories {
        let dir = icons_root.join(category.as_str());
        if !dir.is_dir() {
            return Err(GenerateError::MissingCategoryDir {
                category,
                path: dir,
            });
        }

        let mut claimed: HashMap<String, PathBuf> = HashMap::new();
        let listing = WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in listing {
            let entry = entry.map_err(|source| GenerateError::ReadDir {
                path: dir.clone(),
                source: source.into(),
            })?;

            if !entry.file_type().is_file() || entry.file_name().to_string_lossy().starts_with('.')
            {
                tracing::debug!(path = %entry.path().display(), "skipping non-icon entry");
                continue;
            }

            let icon = IconSource::from_path(entry.path(), category, suffix)?;
            if let Some(first) = claimed.insert(icon.component_name.clone(), icon.path.clone()) {
                return Err(GenerateError::DuplicateComponent {
                    category,
                    component: icon.component_name,
                    first,
                    second: icon.path,
                });
            }

            tracing::debug!(
                category = %category,
                icon = %icon.raw_name,
                component = %icon.component_name,
                "found icon"
            );
            icons.push(icon);
        }
    }

    tracing::info!(count = icons.len(), "enumerated icon sources");
    Ok(icons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_component_names() {
        assert_eq!(component_name("academic-cap", "Icon"), "AcademicCapIcon");
        assert_eq!(component_name("x-circle", "Icon"), "XCircleIcon");
        assert_eq!(component_name("arrow-left-1", "Icon"), "ArrowLeft1Icon");
        assert_eq!(component_name("chevron-double-up", "Icon"), "ChevronDoubleUpIcon");
    }

    #[test]
    fn test_component_names_strip_underscores() {
        assert_eq!(component_name("status_online", "Icon"), "StatusOnlineIcon");
        assert_eq!(component_name("a__b", "Icon"), "ABIcon");
        assert!(!component_name("cube_3d", "Icon").contains('_'));
    }

    #[test]
    fn test_component_names_split_case_transitions() {
        assert_eq!(component_name("chatAlt", "Icon"), "ChatAltIcon");
        assert_eq!(component_name("XMLFile", "Icon"), "XmlFileIcon");
        assert_eq!(component_name("h1", "Icon"), "H1Icon");
        assert_eq!(component_name("cube_3d", "Icon"), "Cube3dIcon");
    }

    #[test]
    fn test_component_names_treat_symbols_as_delimiters() {
        assert_eq!(component_name("arrow.left", "Icon"), "ArrowLeftIcon");
        assert_eq!(component_name("-leading--dashes-", "Icon"), "LeadingDashesIcon");
        assert_eq!(component_name("caf\u{e9}-menu", "Icon"), "CafMenuIcon");
    }

    #[test]
    fn test_hyphen_only_names_keep_every_word() {
        let name = component_name("x-circle", "Icon");
        assert_eq!(name, "XCircleIcon");
        assert!(!name.contains('-'));
    }

    #[test]
    fn test_raw_name_stops_at_first_dot() {
        let icon =
            IconSource::from_path(Path::new("/icons/solid/x-circle.min.svg"), Category::Solid, "Icon")
                .unwrap();
        assert_eq!(icon.raw_name, "x-circle");
        assert_eq!(icon.component_name, "XCircleIcon");
        assert_eq!(icon.category, Category::Solid);
    }

    #[test]
    fn test_enumerate_sorted_and_skips_directories() {
        let temp = TempDir::new().unwrap();
        let outline = temp.path().join("outline");
        let solid = temp.path().join("solid");
        fs::create_dir_all(outline.join("nested")).unwrap();
        fs::create_dir_all(&solid).unwrap();
        fs::write(outline.join("x-circle.svg"), "<svg/>").unwrap();
        fs::write(outline.join("academic-cap.svg"), "<svg/>").unwrap();
        fs::write(outline.join(".DS_Store"), "").unwrap();
        fs::write(solid.join("bell.svg"), "<svg/>").unwrap();

        let icons = enumerate(temp.path(), &Category::ALL, "Icon").unwrap();
        let names: Vec<_> = icons
            .iter()
            .map(|icon| (icon.category, icon.component_name.as_str()))
            .collect();

        assert_eq!(
            names,
            vec![
                (Category::Outline, "AcademicCapIcon"),
                (Category::Outline, "XCircleIcon"),
                (Category::Solid, "BellIcon"),
            ]
        );
    }

    #[test]
    fn test_enumerate_missing_category() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("outline")).unwrap();

        let err = enumerate(temp.path(), &Category::ALL, "Icon").unwrap_err();
        assert!(matches!(
            err,
            GenerateError::MissingCategoryDir {
                category: Category::Solid,
                ..
            }
        ));
    }

    #[test]
    fn test_enumerate_rejects_duplicate_components() {
        let temp = TempDir::new().unwrap();
        let outline = temp.path().join("outline");
        fs::create_dir_all(&outline).unwrap();
        fs::write(outline.join("foo-bar.svg"), "<svg/>").unwrap();
        fs::write(outline.join("foo_bar.svg"), "<svg/>").unwrap();

        let err = enumerate(temp.path(), &[Category::Outline], "Icon").unwrap_err();
        match err {
            GenerateError::DuplicateComponent {
                category,
                component,
                ..
            } => {
                assert_eq!(category, Category::Outline);
                assert_eq!(component, "FooBarIcon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_same_name_allowed_across_categories() {
        let temp = TempDir::new().unwrap();
        for category in Category::ALL {
            let dir = temp.path().join(category.as_str());
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("bell.svg"), "<svg/>").unwrap();
        }

        let icons = enumerate(temp.path(), &Category::ALL, "Icon").unwrap();
        assert_eq!(icons.len(), 2);
    }
}
