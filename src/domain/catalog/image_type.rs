//! Image types for the optional image-type pre-step.

use super::macros::catalog_enum;

catalog_enum! {
    /// Broad subject class of an image prompt.
    ImageType, "image type" {
        Pessoa => ("pessoa", "Pessoa"),
        Produto => ("produto", "Produto"),
        Paisagem => ("paisagem", "Paisagens"),
        Arquitetura => ("arquitetura", "Arquitetura"),
        Arte => ("arte", "Arte conceitual"),
        Outro => ("outro", "Outro"),
    }
}

impl ImageType {
    /// English noun the image rule places between style and subject.
    pub fn subject_noun(&self) -> &'static str {
        match self {
            ImageType::Pessoa => "portrait",
            ImageType::Produto => "product shot",
            ImageType::Paisagem => "landscape",
            ImageType::Arquitetura => "architectural shot",
            ImageType::Arte => "concept art",
            ImageType::Outro => "image",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_subject_noun() {
        for image_type in ImageType::all() {
            assert!(!image_type.subject_noun().is_empty());
        }
    }

    #[test]
    fn other_falls_back_to_plain_image() {
        assert_eq!(ImageType::Outro.subject_noun(), "image");
    }
}
