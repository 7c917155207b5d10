//! Application configuration module
//!
//! Type-safe configuration loaded with the `config` and `dotenvy` crates
//! from an optional `prompt-studio.{toml,yaml,json}` file in the working
//! directory and environment variables with the `PROMPT_STUDIO` prefix.
//! Nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use prompt_studio::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Text model: {}", config.ai.text_model);
//! ```

mod ai;
mod catalog;
mod error;
mod logging;
mod wizard;

pub use ai::AiConfig;
pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use wizard::WizardConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads successfully.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Generative model access
    #[serde(default)]
    pub ai: AiConfig,

    /// Wizard variant flags
    #[serde(default)]
    pub wizard: WizardConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Content library source
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from the optional file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `prompt-studio.*` from the working directory if present
    /// 3. Reads environment variables with `PROMPT_STUDIO` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PROMPT_STUDIO__AI__API_KEY=...` -> `ai.api_key = ...`
    /// - `PROMPT_STUDIO__WIZARD__ALLOW_STEP_BACK=true` -> `wizard.allow_step_back = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("prompt-studio").required(false))
            .add_source(
                config::Environment::default()
                    .prefix("PROMPT_STUDIO")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.logging.validate()?;
        self.catalog.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::AugmentationProfile;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "PROMPT_STUDIO__AI__API_KEY",
        "PROMPT_STUDIO__AI__TIMEOUT_SECS",
        "PROMPT_STUDIO__AI__TEXT_MODEL",
        "PROMPT_STUDIO__WIZARD__INCLUDE_IMAGE_TYPE_STEP",
        "PROMPT_STUDIO__WIZARD__ALLOW_STEP_BACK",
        "PROMPT_STUDIO__WIZARD__AUGMENTATION",
        "PROMPT_STUDIO__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.ai.timeout_secs, 60);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PROMPT_STUDIO__AI__API_KEY", "test-key");
        env::set_var("PROMPT_STUDIO__AI__TIMEOUT_SECS", "15");
        env::set_var("PROMPT_STUDIO__AI__TEXT_MODEL", "gemini-pro");
        env::set_var("PROMPT_STUDIO__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.ai.has_api_key());
        assert_eq!(config.ai.api_key().as_deref(), Some("test-key"));
        assert_eq!(config.ai.timeout_secs, 15);
        assert_eq!(config.ai.text_model, "gemini-pro");
        assert!(config.logging.json);
    }

    #[test]
    fn test_wizard_flags_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PROMPT_STUDIO__WIZARD__INCLUDE_IMAGE_TYPE_STEP", "true");
        env::set_var("PROMPT_STUDIO__WIZARD__ALLOW_STEP_BACK", "true");
        env::set_var("PROMPT_STUDIO__WIZARD__AUGMENTATION", "email_only");
        let result = AppConfig::load();
        clear_env();

        let options = result.unwrap().wizard.options();
        assert!(options.include_image_type_step);
        assert!(options.allow_step_back);
        assert!(!options.include_other_target);
        assert_eq!(options.augmentation, AugmentationProfile::EmailOnly);
    }

    #[test]
    fn test_invalid_timeout_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PROMPT_STUDIO__AI__TIMEOUT_SECS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout(0)));
    }
}
