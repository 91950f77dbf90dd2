//! Page behavior configuration.
//!
//! DESIGN
//! ======
//! Every field has a default matching the stock page, so an absent or partial
//! JSON island still yields a complete configuration. The island lives in the
//! markup as `<script type="application/json" id="portfolio-config">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the optional JSON configuration island.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Error returned by [`Config::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The island is not valid JSON, has wrongly typed fields or names an
    /// unknown log level.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but is outside its accepted range.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Tunables for every page behavior.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Widest viewport (CSS px) still treated as narrow.
    pub narrow_max_width: f64,
    /// Delay between a nav click starting the scroll and the highlight update.
    pub activation_delay_ms: u32,
    /// Fraction of viewport height a section top must be at or above to qualify.
    pub activation_zone: f64,
    /// Hero translation per scrolled pixel.
    pub parallax_speed: f64,
    /// Delay before the page fade-in starts.
    pub fade_in_delay_ms: u32,
    /// Duration of the page fade-in transition.
    pub fade_in_duration_ms: u32,
    /// Section forced active at startup.
    pub home_section: String,
    /// Storage key holding the theme preference.
    pub theme_key: String,
    /// Cancel navigation on social links and log the click instead.
    pub intercept_social_links: bool,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`, any case).
    pub log_level: log::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            narrow_max_width: 768.0,
            activation_delay_ms: 100,
            activation_zone: 0.6,
            parallax_speed: 0.5,
            fade_in_delay_ms: 100,
            fade_in_duration_ms: 500,
            home_section: "home".to_owned(),
            theme_key: "theme".to_owned(),
            intercept_social_links: true,
            log_level: log::Level::Info,
        }
    }
}

impl Config {
    /// Parse and validate a JSON configuration island.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.narrow_max_width.is_finite() && self.narrow_max_width > 0.0) {
            return Err(ConfigError::Invalid { field: "narrowMaxWidth", reason: "must be a positive width" });
        }
        if !(self.activation_zone > 0.0 && self.activation_zone <= 1.0) {
            return Err(ConfigError::Invalid { field: "activationZone", reason: "must be within (0, 1]" });
        }
        if !(self.parallax_speed.is_finite() && self.parallax_speed >= 0.0) {
            return Err(ConfigError::Invalid { field: "parallaxSpeed", reason: "must be finite and non-negative" });
        }
        if self.home_section.is_empty() {
            return Err(ConfigError::Invalid { field: "homeSection", reason: "must not be empty" });
        }
        if self.theme_key.is_empty() {
            return Err(ConfigError::Invalid { field: "themeKey", reason: "must not be empty" });
        }
        Ok(())
    }

    /// Whether `width` falls at or under the narrow breakpoint.
    pub fn is_narrow(&self, width: f64) -> bool {
        width <= self.narrow_max_width
    }
}
