//! Site configuration module.
//!
//! Loads and validates `config.toml` from the content root. All fields have
//! stock defaults, so a config file is optional and may be sparse — override
//! just the values you want. Unknown keys are rejected to catch typos early.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_name = "My Tutorials"
//! tagline = "Short and friendly tutorials."
//!
//! # Canonical site URL. Required for sitemap.xml generation; when empty,
//! # no sitemap is written.
//! base_url = ""
//!
//! # Swetrix analytics project id. When unset, no analytics snippet is
//! # injected into generated pages.
//! #analytics_id = "XXXXXXXXXXXX"
//!
//! # Repository URL used for "last content update" links on article pages.
//! #source_repo = "https://github.com/you/your-content"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site name, used in `<title>` and the home page heading.
    pub site_name: String,
    /// One-line site description for meta tags and the home page.
    pub tagline: String,
    /// Canonical base URL (no trailing slash). Empty disables the sitemap.
    pub base_url: String,
    /// Swetrix analytics project id. `None` = no analytics snippet.
    pub analytics_id: Option<String>,
    /// Repository URL for "last content update" links on articles.
    pub source_repo: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "My Tutorials".to_string(),
            tagline: "Short and friendly tutorials.".to_string(),
            base_url: String::new(),
            analytics_id: None,
            source_repo: None,
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.is_empty()
            && !self.base_url.starts_with("http://")
            && !self.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(
                "base_url must start with http:// or https://".into(),
            ));
        }
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::Validation("site_name must not be empty".into()));
        }
        Ok(())
    }
}

/// Load `config.toml` from the content root, falling back to stock defaults.
///
/// A trailing slash on `base_url` is normalized away so URL joining stays
/// uniform (`{base_url}{page_url}`).
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    let mut config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str::<SiteConfig>(&content)?
    } else {
        SiteConfig::default()
    };
    while config.base_url.ends_with('/') {
        config.base_url.pop();
    }
    config.validate()?;
    Ok(config)
}

/// A stock `config.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = SiteConfig::default();
    format!(
        r#"# simple-course site configuration.
# All options are optional - defaults shown below.

# Site name, used in <title> and the home page heading.
site_name = "{site_name}"

# One-line site description for meta tags and the home page.
tagline = "{tagline}"

# Canonical site URL (e.g. "https://codecookies.xyz"). Required for
# sitemap.xml generation; when empty, no sitemap is written.
base_url = ""

# Swetrix analytics project id. When unset, no analytics snippet is
# injected into generated pages.
#analytics_id = "XXXXXXXXXXXX"

# Repository URL used for "last content update" links on article pages.
# Articles link to {{source_repo}}/commits/main/{{path_stem}}.md
#source_repo = "https://github.com/you/your-content"
"#,
        site_name = defaults.site_name,
        tagline = defaults.tagline,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site_name, "My Tutorials");
        assert!(config.base_url.is_empty());
        assert!(config.analytics_id.is_none());
    }

    #[test]
    fn sparse_config_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "site_name = \"Code Cookies\"\nbase_url = \"https://codecookies.xyz\"\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site_name, "Code Cookies");
        assert_eq!(config.base_url, "https://codecookies.xyz");
        // Untouched fields keep their defaults
        assert_eq!(config.tagline, "Short and friendly tutorials.");
    }

    #[test]
    fn trailing_slash_normalized() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "base_url = \"https://example.com/\"\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.base_url, "https://example.com");
    }

    #[test]
    fn unknown_keys_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "site_nam = \"typo\"\n").unwrap();

        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn relative_base_url_rejected() {
        let config = SiteConfig {
            base_url: "codecookies.xyz".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn stock_config_parses_back() {
        let stock = stock_config_toml();
        let parsed: SiteConfig = toml::from_str(&stock).unwrap();
        assert_eq!(parsed.site_name, SiteConfig::default().site_name);
    }
}
