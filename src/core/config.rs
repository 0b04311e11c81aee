//! Site behavior configuration.
//!
//! Every field has a default matching the production site, so an empty JSON object
//! (or no configuration at all) yields the stock behavior. The page may override any
//! subset through a `<script type="application/json" id="site-config">` element.

use serde::Deserialize;

/// Id of the optional JSON configuration element.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Error returned when the embedded configuration can't be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Complete behavior configuration for the site.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub navbar: NavbarConfig,
    pub anchors: AnchorConfig,
    pub reveal: RevealConfig,
    pub counter: CounterConfig,
    pub contact: ContactConfig,
    pub notification: NotificationConfig,
}

impl SiteConfig {
    /// Parse configuration from JSON. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Vertical offset (px) above which the navbar counts as scrolled
    pub scroll_threshold_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    /// Extra space (px) kept between the fixed navbar and the scroll target
    pub margin_px: f64,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self { margin_px: 20.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub threshold: f64,
    pub duration_ms: u32,
    pub frames_per_second: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            duration_ms: 2000,
            frames_per_second: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Submit button label while a submission is in flight
    pub busy_label: String,
    pub success_message: String,
    pub error_message: String,
    /// Delay of the simulated submission
    pub simulated_delay_ms: u32,
    /// Make the simulated submission fail instead of succeed
    pub simulate_failure: bool,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            busy_label: "Verzenden...".to_string(),
            success_message: "Bedankt voor uw bericht! Wij nemen zo snel mogelijk contact met u op."
                .to_string(),
            error_message: "Er is een fout opgetreden. Probeer het later opnieuw.".to_string(),
            simulated_delay_ms: 1500,
            simulate_failure: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// How long a toast stays before it starts leaving on its own
    pub display_ms: u32,
    /// Length of the exit transition; the element is removed when it ends
    pub exit_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: 5000,
            exit_ms: 300,
        }
    }
}
