//! Single-tap choice lists: tone, length/format and image style.

use super::macros::catalog_enum;

catalog_enum! {
    /// Tone of voice for text prompts.
    Tone, "tone" {
        Serio => ("serio", "Sério"),
        Divertido => ("divertido", "Divertido"),
        Persuasivo => ("persuasivo", "Persuasivo"),
        Tecnico => ("tecnico", "Técnico"),
    }
}

catalog_enum! {
    /// Desired length or format of the generated text.
    LengthFormat, "length" {
        Curto => ("curto", "Curto"),
        Equilibrado => ("equilibrado", "Equilibrado"),
        Detalhado => ("detalhado", "Detalhado"),
    }
}

catalog_enum! {
    /// Visual style for image prompts.
    ImageStyle, "image style" {
        Fotorealista => ("fotorealista", "Fotorealista"),
        Cinematografico => ("cinematografico", "Cinematográfico"),
        Cyberpunk => ("cyberpunk", "Cyberpunk"),
        ArteDigital => ("arte-digital", "Arte Digital"),
        Vaporwave => ("vaporwave", "Vaporwave"),
        Pintura => ("pintura", "Pintura"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_parse_with_or_without_accents() {
        assert_eq!("Técnico".parse::<Tone>().unwrap(), Tone::Tecnico);
        assert_eq!("tecnico".parse::<Tone>().unwrap(), Tone::Tecnico);
        assert_eq!("SÉRIO".parse::<Tone>().unwrap(), Tone::Serio);
    }

    #[test]
    fn unknown_choice_names_its_catalog() {
        let err = "Gigante".parse::<LengthFormat>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown length entry: 'Gigante'");
    }

    #[test]
    fn style_catalog_order_is_stable() {
        let labels: Vec<&str> = ImageStyle::all().iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["Fotorealista", "Cinematográfico", "Cyberpunk", "Arte Digital", "Vaporwave", "Pintura"]
        );
    }
}
