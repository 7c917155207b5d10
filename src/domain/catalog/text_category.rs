//! Text categories offered by the first step of the text wizard.

use super::macros::catalog_enum;

catalog_enum! {
    /// What the text prompt is for.
    TextCategory, "text category" {
        Emails => ("emails", "E-mails e mensagens"),
        Estudos => ("estudos", "Estudos e aprendizado"),
        Trabalho => ("trabalho", "Trabalho e produtividade"),
        Marketing => ("marketing", "Marketing e conteúdo"),
        Vendas => ("vendas", "Vendas e atendimento"),
        Social => ("social", "Redes sociais"),
        Outro => ("outro", "Outro"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_seven_categories_in_menu_order() {
        let all = TextCategory::all();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], TextCategory::Emails);
        assert_eq!(all[6], TextCategory::Outro);
    }

    #[test]
    fn parses_non_ascii_labels_case_insensitively() {
        assert_eq!(
            "MARKETING E CONTEÚDO".parse::<TextCategory>().unwrap(),
            TextCategory::Marketing
        );
        assert_eq!("e-mails e mensagens".parse::<TextCategory>().unwrap(), TextCategory::Emails);
    }
}
