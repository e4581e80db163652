//! Link styling and analytics settings.
//!
//! Defaults are built in; a TOML file (path in `LINK_CONFIG`) can override
//! any of them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_ENV: &str = "LINK_CONFIG";

/// Id of the `<script type="application/json">` carrying the server config to the browser.
pub const CONFIG_ELEMENT_ID: &str = "link-config";

// ── TOML shape ────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    link: LinkSection,
    #[serde(default)]
    analytics: AnalyticsSection,
}

#[derive(Debug, Default, Deserialize)]
struct LinkSection {
    hidden_class: Option<String>,
    external_class: Option<String>,
    new_window_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnalyticsSection {
    #[serde(default = "default_true")]
    enabled: bool,
}

impl Default for AnalyticsSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

// ── Public config ─────────────────────────────────────────────────────────────

/// Presentation rules applied by [`Link`](crate::components::Link).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStyle {
    /// Off-screen but readable by assistive technology.
    pub hidden_class: String,
    /// Positioning wrapper for external anchors hosting the hidden note.
    pub external_class: String,
    /// Announced after the content of external links.
    pub new_window_text: String,
}

impl Default for LinkStyle {
    fn default() -> Self {
        Self {
            hidden_class: "sr-only".to_string(),
            external_class: "relative".to_string(),
            new_window_text: ", Opens in a new window".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub style: LinkStyle,
    pub analytics_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            style: LinkStyle::default(),
            analytics_enabled: true,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(content)?;
        let defaults = LinkStyle::default();

        Ok(Self {
            style: LinkStyle {
                hidden_class: file.link.hidden_class.unwrap_or(defaults.hidden_class),
                external_class: file.link.external_class.unwrap_or(defaults.external_class),
                new_window_text: file.link.new_window_text.unwrap_or(defaults.new_window_text),
            },
            analytics_enabled: file.analytics.enabled,
        })
    }

    /// Load from `$LINK_CONFIG` when set, otherwise use the defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// JSON safe to place inside a `<script>` element.
    pub fn to_embedded_json(&self) -> Result<String> {
        let json = serde_json::to_string(self).context("Failed to serialize link config")?;
        Ok(json.replace('<', "\\u003c"))
    }

    pub fn from_embedded_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse embedded link config")
    }

    /// Read the config the server embedded in the page.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Result<Self> {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .with_context(|| format!("Missing #{} element", CONFIG_ELEMENT_ID))?;
        Self::from_embedded_json(&json)
    }
}
