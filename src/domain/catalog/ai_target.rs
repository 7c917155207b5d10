//! AI targets a prompt can be optimised for.

use super::macros::catalog_enum;

catalog_enum! {
    /// The external generative-AI product the compiled prompt is optimised for.
    ///
    /// Chosen exactly once per wizard run, before any content step.
    AiTarget, "AI target" {
        ChatGpt => ("chatgpt", "ChatGPT"),
        Gemini => ("gemini", "Gemini"),
        Claude => ("claude", "Claude"),
        Midjourney => ("midjourney", "Midjourney"),
        DallE => ("dall-e", "DALL-E"),
        StableDiffusion => ("stable-diffusion", "Stable Diffusion"),
        /// Catch-all target, only offered when enabled in the wizard options.
        Other => ("outra", "Outra"),
    }
}

impl AiTarget {
    /// Returns the targets offered on the selection screen.
    pub fn available(include_other: bool) -> Vec<AiTarget> {
        AiTarget::all()
            .iter()
            .copied()
            .filter(|t| include_other || *t != AiTarget::Other)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_product_names() {
        assert_eq!(AiTarget::ChatGpt.label(), "ChatGPT");
        assert_eq!(AiTarget::DallE.label(), "DALL-E");
        assert_eq!(AiTarget::StableDiffusion.to_string(), "Stable Diffusion");
    }

    #[test]
    fn parses_by_id_or_label() {
        assert_eq!("midjourney".parse::<AiTarget>().unwrap(), AiTarget::Midjourney);
        assert_eq!("DALL-E".parse::<AiTarget>().unwrap(), AiTarget::DallE);
        assert_eq!("stable diffusion".parse::<AiTarget>().unwrap(), AiTarget::StableDiffusion);
        assert!("Copilot".parse::<AiTarget>().is_err());
    }

    #[test]
    fn other_is_only_available_when_enabled() {
        assert_eq!(AiTarget::available(false).len(), 6);
        assert!(!AiTarget::available(false).contains(&AiTarget::Other));
        assert_eq!(AiTarget::available(true).last(), Some(&AiTarget::Other));
    }

    #[test]
    fn serializes_by_id() {
        assert_eq!(serde_json::to_string(&AiTarget::DallE).unwrap(), "\"dall-e\"");
        let parsed: AiTarget = serde_json::from_str("\"stable-diffusion\"").unwrap();
        assert_eq!(parsed, AiTarget::StableDiffusion);
    }
}
