use anyhow::{Context, Result};

/// Application configuration loaded from environment variables at startup.
///
/// The ATS secrets are deliberately not required here: a deployment missing
/// them still serves health checks, and the contact handler answers 500 for
/// the affected requests instead of the process refusing to boot.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub bindings: PlatformBindings,
}

/// Secrets injected by the hosting platform's runtime bindings, exposed to
/// the process as `PLATFORM_`-prefixed variables. Local development uses the
/// unprefixed variables from `.env` as fallback (see [`ContactSettings`]).
#[derive(Debug, Clone, Default)]
pub struct PlatformBindings {
    pub loxo_api_key: Option<String>,
    pub loxo_agency_slug: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            bindings: PlatformBindings {
                loxo_api_key: optional_env("PLATFORM_LOXO_API_KEY"),
                loxo_agency_slug: optional_env("PLATFORM_LOXO_AGENCY_SLUG"),
            },
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Returns the first source that is present and non-empty after trimming.
///
/// Configuration resolution is "ordered list of providers, first non-empty
/// wins": the platform binding outranks the local environment fallback, and
/// an empty string counts as unset rather than shadowing later sources.
pub fn first_non_empty<I>(sources: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    sources.into_iter().flatten().find(|v| !v.trim().is_empty())
}

/// The two secrets the contact relay needs, resolved fresh on every request.
#[derive(Debug, Clone)]
pub struct ContactSettings {
    pub api_key: Option<String>,
    pub agency_slug: Option<String>,
}

impl ContactSettings {
    pub fn resolve(bindings: &PlatformBindings) -> Self {
        Self {
            api_key: first_non_empty([
                bindings.loxo_api_key.clone(),
                optional_env("LOXO_API_KEY"),
            ]),
            agency_slug: first_non_empty([
                bindings.loxo_agency_slug.clone(),
                optional_env("LOXO_AGENCY_SLUG"),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_non_empty_takes_first_source() {
        let resolved = first_non_empty([Some("a".to_string()), Some("b".to_string())]);
        assert_eq!(resolved, Some("a".to_string()));
    }

    #[test]
    fn test_first_non_empty_skips_none_and_empty() {
        let resolved = first_non_empty([
            None,
            Some(String::new()),
            Some("   ".to_string()),
            Some("fallback".to_string()),
        ]);
        assert_eq!(resolved, Some("fallback".to_string()));
    }

    #[test]
    fn test_first_non_empty_all_empty_is_none() {
        let resolved = first_non_empty([None, Some(String::new()), Some("  ".to_string())]);
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_platform_binding_outranks_env_fallback() {
        let bindings = PlatformBindings {
            loxo_api_key: Some("bound-key".to_string()),
            loxo_agency_slug: Some("bound-agency".to_string()),
        };
        let settings = ContactSettings::resolve(&bindings);
        assert_eq!(settings.api_key, Some("bound-key".to_string()));
        assert_eq!(settings.agency_slug, Some("bound-agency".to_string()));
    }

    #[test]
    fn test_empty_binding_does_not_shadow() {
        // No fallback variables are set in the test environment, so an empty
        // binding must resolve to "missing", not to an empty string.
        std::env::remove_var("LOXO_API_KEY");
        std::env::remove_var("LOXO_AGENCY_SLUG");
        let bindings = PlatformBindings {
            loxo_api_key: Some(String::new()),
            loxo_agency_slug: None,
        };
        let settings = ContactSettings::resolve(&bindings);
        assert_eq!(settings.api_key, None);
        assert_eq!(settings.agency_slug, None);
    }
}
