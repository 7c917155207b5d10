//! WizardOptions - the switches that distinguish product variants.

use serde::{Deserialize, Serialize};

use crate::domain::prompt::AugmentationProfile;

/// Variant configuration for one wizard deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardOptions {
    /// Ask for an image type before the subject.
    #[serde(default)]
    pub include_image_type_step: bool,

    /// Offer the "Outra" target on the selection screen.
    #[serde(default)]
    pub include_other_target: bool,

    /// Allow stepping back one question inside the wizard.
    #[serde(default)]
    pub allow_step_back: bool,

    /// Which augmentation table the compiler uses.
    #[serde(default)]
    pub augmentation: AugmentationProfile,
}

impl WizardOptions {
    pub fn with_image_type_step(mut self, enabled: bool) -> Self {
        self.include_image_type_step = enabled;
        self
    }

    pub fn with_other_target(mut self, enabled: bool) -> Self {
        self.include_other_target = enabled;
        self
    }

    pub fn with_step_back(mut self, enabled: bool) -> Self {
        self.allow_step_back = enabled;
        self
    }

    pub fn with_augmentation(mut self, profile: AugmentationProfile) -> Self {
        self.augmentation = profile;
        self
    }
}
