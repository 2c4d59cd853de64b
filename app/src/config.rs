//! Deployment configuration of the site.
//!
//! Values are taken from the build environment so that the server-rendered
//! shell, the hydrated client and the server's own headers agree on them.
//! Tests build a [`SiteConfig`] from any key lookup with
//! [`SiteConfig::from_lookup`].

use serde::{Deserialize, Serialize};

pub const API_URL_VAR: &str = "PORTFOLIO_API_URL";
pub const ADMIN_PASSWORD_VAR: &str = "PORTFOLIO_ADMIN_PASSWORD";
pub const ADMIN_MODE_VAR: &str = "PORTFOLIO_ADMIN";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Value of a site variable as it was when the crate was compiled.
pub fn build_var(key: &str) -> Option<String> {
    let value = match key {
        API_URL_VAR => option_env!("PORTFOLIO_API_URL"),
        ADMIN_PASSWORD_VAR => option_env!("PORTFOLIO_ADMIN_PASSWORD"),
        ADMIN_MODE_VAR => option_env!("PORTFOLIO_ADMIN"),
        _ => None,
    };
    value.map(str::to_owned)
}

/// Whether `key` is one of the variables compiled into the site.
pub fn is_site_var(key: &str) -> bool {
    matches!(key, API_URL_VAR | ADMIN_PASSWORD_VAR | ADMIN_MODE_VAR)
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_base_url: String,
    /// Admin password. When absent every login attempt fails.
    pub admin_secret: Option<String>,
    /// Display toggle: start in admin mode without a login.
    pub admin_mode: bool,
}

impl core::fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SiteConfig")
            .field("api_base_url", &self.api_base_url)
            .field("admin_secret", &self.admin_secret.as_ref().map(|_| "<redacted>"))
            .field("admin_mode", &self.admin_mode)
            .finish()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            admin_secret: None,
            admin_mode: false,
        }
    }
}

impl SiteConfig {
    /// Configuration baked in at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_var)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup(API_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        let admin_secret = lookup(ADMIN_PASSWORD_VAR).filter(|secret| !secret.is_empty());
        let admin_mode = lookup(ADMIN_MODE_VAR).is_some_and(|flag| parse_flag(&flag));

        Self {
            api_base_url,
            admin_secret,
            admin_mode,
        }
    }

    /// `scheme://host[:port]` of the API, used for the CSP `connect-src`.
    pub fn api_origin(&self) -> Option<&str> {
        let (_, rest) = self.api_base_url.split_once("://")?;
        let scheme_len = self.api_base_url.len() - rest.len();
        let host_len = rest.find('/').unwrap_or(rest.len());
        if host_len == 0 {
            return None;
        }
        Some(&self.api_base_url[..scheme_len + host_len])
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.admin_secret, None);
        assert!(!config.admin_mode);
    }

    #[test]
    fn test_reads_all_values() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            (API_URL_VAR, "https://api.example.com/"),
            (ADMIN_PASSWORD_VAR, "s3cret-pass"),
            (ADMIN_MODE_VAR, "true"),
        ]));

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.admin_secret.as_deref(), Some("s3cret-pass"));
        assert!(config.admin_mode);
    }

    #[test]
    fn test_empty_secret_disables_login() {
        let config = SiteConfig::from_lookup(lookup_from(&[(ADMIN_PASSWORD_VAR, "")]));
        assert_eq!(config.admin_secret, None);
    }

    #[test]
    fn test_admin_mode_flag_values() {
        for (raw, expected) in [("TRUE", true), ("1", true), ("on", true), ("false", false), ("", false), ("nope", false)] {
            let config = SiteConfig::from_lookup(lookup_from(&[(ADMIN_MODE_VAR, raw)]));
            assert_eq!(config.admin_mode, expected, "flag value {raw:?}");
        }
    }

    #[test]
    fn test_api_origin() {
        let mut config = SiteConfig::default();
        assert_eq!(config.api_origin(), Some("http://localhost:8000"));

        config.api_base_url = "https://example.com/api/v1".to_owned();
        assert_eq!(config.api_origin(), Some("https://example.com"));

        config.api_base_url = "not a url".to_owned();
        assert_eq!(config.api_origin(), None);
    }

    #[test]
    fn test_build_env_matches_build_vars() {
        assert_eq!(SiteConfig::from_build_env(), SiteConfig::from_lookup(build_var));
        assert!(is_site_var(API_URL_VAR));
        assert!(!is_site_var("LEPTOS_SITE_ADDR"));
        assert_eq!(build_var("LEPTOS_SITE_ADDR"), None);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = SiteConfig {
            admin_secret: Some("hunter22".to_owned()),
            ..SiteConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter22"));
        assert!(rendered.contains("<redacted>"));
    }
}
