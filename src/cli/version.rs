//! Version and help output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("study-monk {}", VERSION)
}

pub fn help_text() -> String {
    format!(
        "{}\n\
         Turn panic into deep focus.\n\n\
         USAGE:\n    \
         study-monk                 Open the landing page\n    \
         study-monk plan <query>    Print study plans for a query as JSON\n    \
         study-monk --version       Show version\n    \
         study-monk --help          Show this help\n\n\
         ENVIRONMENT:\n    \
         STUDY_MONK_SEARCH_DELAY_MS  Simulated search latency (default 2500)\n    \
         STUDY_MONK_LEAD_DELAY_MS    Simulated email send latency (default 800)\n    \
         STUDY_MONK_ASSETS           Directory containing public/logo.png and public/hero.png\n    \
         STUDY_MONK_LOG              Log filter, e.g. study_monk=debug",
        version_line()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_line().starts_with("study-monk "));
    }

    #[test]
    fn test_help_mentions_every_env_var() {
        let help = help_text();
        for var in [
            crate::config::ENV_SEARCH_DELAY_MS,
            crate::config::ENV_LEAD_DELAY_MS,
            crate::config::ENV_ASSETS,
            crate::config::ENV_LOG,
        ] {
            assert!(help.contains(var), "missing {}", var);
        }
    }
}
