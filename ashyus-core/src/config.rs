//! Site configuration.
//!
//! The wasm bundle has no filesystem or process environment, so values are
//! baked in at build time with `option_env!`. Native builds (tests, tools)
//! can read the same variables at runtime with [`SiteConfig::from_env`].

use thiserror::Error;
use tracing::warn;

pub const ENV_SUPABASE_URL: &str = "ASHYUS_SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "ASHYUS_SUPABASE_ANON_KEY";
pub const ENV_GEMINI_API_KEY: &str = "ASHYUS_GEMINI_API_KEY";
pub const ENV_WEB3FORMS_ACCESS_KEY: &str = "ASHYUS_WEB3FORMS_ACCESS_KEY";
pub const ENV_ADMIN_USERNAME: &str = "ASHYUS_ADMIN_USERNAME";
pub const ENV_ADMIN_PASSWORD: &str = "ASHYUS_ADMIN_PASSWORD";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Connection details for the remote content store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub web3forms_access_key: Option<String>,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

/// Treat empty and whitespace-only values as unset
fn present(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl SiteConfig {
    /// Values compiled into the binary
    pub fn from_build_env() -> Self {
        Self {
            supabase_url: present(option_env!("ASHYUS_SUPABASE_URL")),
            supabase_anon_key: present(option_env!("ASHYUS_SUPABASE_ANON_KEY")),
            gemini_api_key: present(option_env!("ASHYUS_GEMINI_API_KEY")),
            web3forms_access_key: present(option_env!("ASHYUS_WEB3FORMS_ACCESS_KEY")),
            admin_username: present(option_env!("ASHYUS_ADMIN_USERNAME")),
            admin_password: present(option_env!("ASHYUS_ADMIN_PASSWORD")),
        }
    }

    /// Values read from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| present(lookup(name).as_deref());
        Self {
            supabase_url: get(ENV_SUPABASE_URL),
            supabase_anon_key: get(ENV_SUPABASE_ANON_KEY),
            gemini_api_key: get(ENV_GEMINI_API_KEY),
            web3forms_access_key: get(ENV_WEB3FORMS_ACCESS_KEY),
            admin_username: get(ENV_ADMIN_USERNAME),
            admin_password: get(ENV_ADMIN_PASSWORD),
        }
    }

    /// Remote store settings, present only when both URL and key are set.
    pub fn remote(&self) -> Option<RemoteConfig> {
        match (&self.supabase_url, &self.supabase_anon_key) {
            (Some(url), Some(anon_key)) => Some(RemoteConfig {
                url: url.clone(),
                anon_key: anon_key.clone(),
            }),
            _ => {
                warn!("Remote store URL or key not set, content will not persist");
                None
            }
        }
    }

    /// Checks that a configured remote URL is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.supabase_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::Config(format!(
                    "{ENV_SUPABASE_URL} must be an http(s) URL, got {url:?}"
                )));
            }
        }
        if self.admin_username.is_some() != self.admin_password.is_some() {
            return Err(ConfigError::Config(format!(
                "{ENV_ADMIN_USERNAME} and {ENV_ADMIN_PASSWORD} must be set together"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> SiteConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn remote_requires_url_and_key() {
        assert_eq!(config(&[(ENV_SUPABASE_URL, "https://x.supabase.co")]).remote(), None);

        let cfg = config(&[
            (ENV_SUPABASE_URL, "https://x.supabase.co"),
            (ENV_SUPABASE_ANON_KEY, "anon"),
        ]);
        assert_eq!(
            cfg.remote(),
            Some(RemoteConfig {
                url: "https://x.supabase.co".into(),
                anon_key: "anon".into()
            })
        );
    }

    #[test]
    fn blank_values_count_as_unset() {
        let cfg = config(&[(ENV_GEMINI_API_KEY, "   "), (ENV_SUPABASE_ANON_KEY, "")]);
        assert_eq!(cfg.gemini_api_key, None);
        assert_eq!(cfg.supabase_anon_key, None);
    }

    #[test]
    fn validate_rejects_bad_url_and_half_credentials() {
        assert!(config(&[(ENV_SUPABASE_URL, "x.supabase.co")])
            .validate()
            .is_err());
        assert!(config(&[(ENV_ADMIN_USERNAME, "admin")]).validate().is_err());
        assert!(config(&[
            (ENV_ADMIN_USERNAME, "admin"),
            (ENV_ADMIN_PASSWORD, "secret")
        ])
        .validate()
        .is_ok());
    }
}
