//! Logging setup for the CLI
//!
//! Log lines go to stderr so they never mix with the generated file summary.
//! `RUST_LOG` takes precedence over the verbosity flag.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging
///
/// `verbosity` is the number of `-v` flags: 0 logs warnings, 1 adds the
/// per-stage summary, 2 or more logs every file.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use nuxt_hero_icons_gen::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init(1)?;
/// tracing::info!("generator started");
/// # Ok(())
/// # }
/// ```
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,nuxt_hero_icons_gen=info",
        _ => "info,nuxt_hero_icons_gen=debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_by_verbosity() {
        assert_eq!(default_directive(0), "warn");
        assert!(default_directive(1).contains("nuxt_hero_icons_gen=info"));
        assert!(default_directive(2).contains("nuxt_hero_icons_gen=debug"));
        assert_eq!(default_directive(7), default_directive(2));
    }
}
