//! Wizard variant flags

use serde::Deserialize;

use crate::domain::prompt::AugmentationProfile;
use crate::domain::wizard::WizardOptions;

/// Switches selecting the wizard variant
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct WizardConfig {
    /// Ask for an image type before the subject
    #[serde(default)]
    pub include_image_type_step: bool,

    /// Offer "Outra" on the target selection screen
    #[serde(default)]
    pub include_other_target: bool,

    /// Allow stepping back inside the wizard
    #[serde(default)]
    pub allow_step_back: bool,

    /// Augmentation table profile (`full` or `email_only`)
    #[serde(default)]
    pub augmentation: AugmentationProfile,
}

impl WizardConfig {
    pub fn options(&self) -> WizardOptions {
        WizardOptions::default()
            .with_image_type_step(self.include_image_type_step)
            .with_other_target(self.include_other_target)
            .with_step_back(self.allow_step_back)
            .with_augmentation(self.augmentation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_config_defaults() {
        let options = WizardConfig::default().options();
        assert!(!options.include_image_type_step);
        assert!(!options.include_other_target);
        assert!(!options.allow_step_back);
        assert_eq!(options.augmentation, AugmentationProfile::Full);
    }

    #[test]
    fn test_wizard_config_deserialization() {
        let json = r#"{
            "include_image_type_step": true,
            "allow_step_back": true,
            "augmentation": "email_only"
        }"#;

        let config: WizardConfig = serde_json::from_str(json).unwrap();
        let options = config.options();
        assert!(options.include_image_type_step);
        assert!(!options.include_other_target);
        assert!(options.allow_step_back);
        assert_eq!(options.augmentation, AugmentationProfile::EmailOnly);
    }
}
