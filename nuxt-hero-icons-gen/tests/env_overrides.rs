//! Environment overrides go through the same output guard as file config
//!
//! Kept in its own test binary so the process environment is not shared with
//! other tests.

use std::fs;

use nuxt_hero_icons_gen::{GenerateError, Generator, GeneratorConfig};
use tempfile::TempDir;

#[test]
fn test_env_output_dir_is_guarded() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(
        root.join("package.json"),
        r#"{"name":"nuxt-hero-icons","version":"1.0.0","license":"MIT","dependencies":{"heroicons":"^1.0.6"}}"#,
    )
    .unwrap();
    fs::write(root.join("README.md"), "# Icons\n").unwrap();
    for category in ["outline", "solid"] {
        let dir = root.join("node_modules/heroicons/optimized").join(category);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("bell.svg"), "<svg/>").unwrap();
    }
    fs::write(root.join("nuxt-hero-icons.toml"), "output_dir = \"dist\"\n").unwrap();

    std::env::set_var("NUXT_HERO_ICONS_OUTPUT_DIR", "..");
    let config = GeneratorConfig::load(root, None);
    std::env::remove_var("NUXT_HERO_ICONS_OUTPUT_DIR");

    let config = config.unwrap();
    assert_eq!(config.output_dir.to_str(), Some(".."));

    let err = Generator::new(root, config).unwrap().run().unwrap_err();
    assert!(matches!(err, GenerateError::UnsafeOutputDir { .. }));
    assert!(root.join("package.json").is_file());
    assert!(root.join("node_modules/heroicons/optimized/solid/bell.svg").is_file());
}
