//! Content library: ready-made templates, before/after examples and the
//! short prompt-writing course.
//!
//! The library is read-only reference data. A built-in copy ships with the
//! crate; deployments can replace it with an external YAML document:
//!
//! ```yaml
//! templates:
//!   - id: t1
//!     title: Vendedor Implacável
//!     kind: text
//!     preview: Copy de Vendas
//!     prompt: "Atue como um Copywriter sênior..."
//! examples: []
//! course_modules: []
//! ```
//!
//! Templates never pass through the prompt compiler; their `prompt` is handed
//! to the output sink verbatim.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::domain::foundation::ContentKind;

/// A pre-written prompt the user can copy and adapt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub title: String,
    pub kind: ContentKind,
    pub preview: String,
    pub prompt: String,
}

/// A vague prompt next to its improved version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub id: String,
    pub title: String,
    pub before: String,
    pub after: String,
    pub improvement: String,
}

/// One lesson of the prompt-writing course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub content: Vec<String>,
}

/// Criteria for browsing templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    /// Restrict to one content kind; `None` shows everything.
    pub kind: Option<ContentKind>,
    /// Case-insensitive match against title or preview.
    pub query: String,
}

impl TemplateFilter {
    /// Filter that matches every template.
    pub fn all() -> Self {
        Self::default()
    }

    /// Sets the kind restriction.
    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the search query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Returns true if the template passes this filter.
    pub fn matches(&self, template: &Template) -> bool {
        let kind_ok = self.kind.map_or(true, |k| template.kind == k);
        let query = self.query.trim().to_lowercase();
        let query_ok = query.is_empty()
            || template.title.to_lowercase().contains(&query)
            || template.preview.to_lowercase().contains(&query);
        kind_ok && query_ok
    }
}

/// Errors loading an external library.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read content library: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse content library: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate template id: {0}")]
    DuplicateTemplateId(String),
}

/// Read-only collection of templates, examples and course modules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLibrary {
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default)]
    pub course_modules: Vec<CourseModule>,
}

impl ContentLibrary {
    /// Returns the library that ships with the crate.
    pub fn builtin() -> &'static ContentLibrary {
        &BUILTIN
    }

    /// Parses a library from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LibraryError> {
        let library: ContentLibrary = serde_yaml::from_str(yaml)?;
        library.ensure_unique_template_ids()?;
        Ok(library)
    }

    /// Reads and parses a YAML library file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&raw)
    }

    /// Finds a template by id.
    pub fn find_template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Returns templates passing the filter, in library order.
    pub fn filter_templates(&self, filter: &TemplateFilter) -> Vec<&Template> {
        self.templates.iter().filter(|t| filter.matches(t)).collect()
    }

    fn ensure_unique_template_ids(&self) -> Result<(), LibraryError> {
        let mut seen = HashSet::new();
        for template in &self.templates {
            if !seen.insert(template.id.as_str()) {
                return Err(LibraryError::DuplicateTemplateId(template.id.clone()));
            }
        }
        Ok(())
    }
}

fn template(id: &str, title: &str, kind: ContentKind, preview: &str, prompt: &str) -> Template {
    Template {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        preview: preview.to_string(),
        prompt: prompt.to_string(),
    }
}

fn example(id: &str, title: &str, before: &str, after: &str, improvement: &str) -> Example {
    Example {
        id: id.to_string(),
        title: title.to_string(),
        before: before.to_string(),
        after: after.to_string(),
        improvement: improvement.to_string(),
    }
}

fn lesson(id: u32, title: &str, description: &str, content: [&str; 3]) -> CourseModule {
    CourseModule {
        id,
        title: title.to_string(),
        description: description.to_string(),
        content: content.iter().map(|line| line.to_string()).collect(),
    }
}

static BUILTIN: Lazy<ContentLibrary> = Lazy::new(|| {
    use ContentKind::{Image, Text};

    ContentLibrary {
        templates: vec![
            template("t1", "Vendedor Implacável", Text, "Copy de Vendas",
                "Atue como um Copywriter sênior. Crie uma oferta irresistível para [PRODUTO] focada em gatilhos de urgência e prova social."),
            template("t2", "Tutor Amigável", Text, "Educação",
                "Explique [TEMA COMPLEXO] como se eu tivesse 10 anos. Use metáforas do dia a dia e evite termos técnicos chatos."),
            template("t3", "Maestro Social", Text, "Redes Sociais",
                "Gere 7 ideias de legendas criativas para Instagram sobre [ASSUNTO]. Inclua ganchos iniciais e chamadas para ação (CTAs)."),
            template("t4", "Resumo Executivo", Text, "Produtividade",
                "Resuma o texto abaixo em 5 pontos principais e uma conclusão acionável. Mantenha o tom profissional e direto."),
            template("t5", "Ghostwriter Vip", Text, "E-mail Formal",
                "Escreva um e-mail diplomático para [PESSOA] solicitando uma reunião estratégica. Use um tom de autoridade respeitosa."),
            template("t6", "Criador de Roteiros", Text, "YouTube/TikTok",
                "Crie um roteiro de vídeo de 60 segundos sobre [TEMA]. Divida em: Gancho, Problema, Solução e Fechamento."),
            template("t7", "Analista de Dados", Text, "Business",
                "Analise o seguinte cenário: [DADOS]. Identifique 3 tendências de mercado e sugira 2 ações imediatas."),
            template("t8", "Mentor de Carreira", Text, "LinkedIn",
                "Reescreva meu resumo do LinkedIn focando em resultados de [MINHA ÁREA]. Torne-o atraente para headhunters."),
            template("t9", "Expert em Dieta", Text, "Saúde",
                "Crie um plano alimentar básico para quem quer [OBJETIVO]. Foque em alimentos simples e baratos."),
            template("t10", "Tradução Contextual", Text, "Idiomas",
                "Traduza o texto abaixo para [IDIOMA]. Não faça literal, mantenha as gírias e o sentido cultural original."),
            template("i1", "Rosto Realista", Image, "Portrait 8K",
                "Hyper-realistic portrait of a [SUBJECT], skin pores visible, studio lighting, 85mm lens, f/1.8, bokeh background, cinematic color."),
            template("i2", "Quarto Gamer/Future", Image, "Interiores",
                "Cyberpunk bedroom interior, neon lights, rainy window view, futuristic tech, V-Ray render, highly detailed, photorealistic 4k."),
            template("i3", "Logo Minimalista", Image, "Branding",
                "Flat vector logo design for [BRAND], geometric shapes, modern typography, white background, high contrast, professional logo."),
            template("i4", "Mundo de Fantasia", Image, "Concept Art",
                "Epic landscape of a floating castle in the clouds, dragons flying, digital painting style, ArtStation, vibrant colors, ethereal light."),
            template("i5", "Macro de Natureza", Image, "Close-up",
                "Extreme macro shot of a [FLOWER/INSECT], morning dew drops, sunrise lighting, shallow depth of field, National Geographic style."),
            template("i6", "Foto de Rua (P&B)", Image, "Street Style",
                "Black and white street photography in New York, rain reflections, dramatic shadows, grain texture, shot on Leica M11."),
            template("i7", "Anúncio de Produto", Image, "E-commerce",
                "Professional product shot of a [PRODUCT] on a glass table, soft studio lighting, reflection, luxury aesthetic, ultra-clean background."),
            template("i8", "Personagem RPG", Image, "Gaming",
                "Full body character design of a fantasy [CLASS], ornate armor, magical aura, detailed textures, Unreal Engine 5 render style."),
            template("i9", "Ilustração 3D Cute", Image, "Isometric",
                "Isometric 3D room, pastel colors, cute minimalist furniture, soft clay render style, Octane render, high quality 4k."),
            template("i10", "Editorial de Moda", Image, "Vogue Style",
                "Fashion editorial in a desert, model wearing avant-garde clothing, high contrast sunlight, Vogue magazine aesthetic, dramatic pose."),
        ],
        examples: vec![
            example("e1", "E-mail de Vendas", "Faça um e-mail vendendo curso.",
                "Atue como Copywriter. Escreva um e-mail focado na frustração de não ter resultados em [ÁREA], apresentando o curso [NOME] como a solução definitiva. Use o tom de \"amigo especialista\". Termine com um CTA de bônus por 24h.",
                "Conversão 10x maior"),
            example("e2", "Imagem Futurista", "Cidade no futuro.",
                "Futuristic city street at night, neon signs in Japanese, heavy rain, reflections on asphalt, volumetric lighting, cinematic teal and orange color grade, 8k, photorealistic.",
                "Nível Cinematográfico"),
            example("e3", "Post de Instagram", "Post sobre viagem.",
                "Escreva 3 ganchos magnéticos para um post sobre [LUGAR]. O objetivo é fazer a pessoa salvar o post para as próximas férias. Use emojis e um tom inspirador e leve.",
                "Mais Salvamentos"),
        ],
        course_modules: vec![
            lesson(1, "O que é IA?", "Entendendo o assistente.", [
                "Pense na IA como um amigo que leu a internet inteira.",
                "Ela não é mágica, ela apenas tenta adivinhar o que você quer.",
                "Se você pedir direito, ela faz quase tudo por você.",
            ]),
            lesson(2, "O Erro do \"Genérico\"", "Por que o resultado é ruim.", [
                "Pedir \"faça um texto\" é como pedir \"faça uma comida\" num restaurante.",
                "A IA precisa saber o \"sabor\" (o estilo) e os \"ingredientes\" (os detalhes).",
                "Quanto mais vago você for, mais robótica ela será.",
            ]),
            lesson(3, "O Papel Mágico", "Dando uma profissão.", [
                "Sempre diga quem a IA é: \"Seja um Professor\", \"Seja um Nutricionista\".",
                "Isso muda a forma como ela escreve e os exemplos que ela usa.",
                "É o passo mais importante para um prompt de elite.",
            ]),
            lesson(4, "O Alvo: Objetivo", "O que você quer ganhar?", [
                "Diga o que você quer no final: um e-mail? Uma lista? Uma tabela?",
                "Diga para quem é o texto: para seu chefe? Para seu filho?",
                "Um alvo claro evita que a IA enrole no texto.",
            ]),
            lesson(5, "A Moldura: Formato", "Como a resposta chega.", [
                "Você pode pedir em tópicos, em negrito ou até em código.",
                "Diga se quer o texto curto (para WhatsApp) ou longo (para um Blog).",
                "O formato ajuda você a só copiar e colar.",
            ]),
            lesson(6, "Luz, Câmera e IA!", "Gerando imagens.", [
                "Para fotos, você é o fotógrafo. Fale da luz (sol, neon).",
                "Fale do estilo (foto real, desenho, pintura).",
                "Diga se quer ver de perto (macro) ou de longe (grande angular).",
            ]),
            lesson(7, "A Segunda Chance", "Ajustando o resultado.", [
                "Quase nunca o primeiro resultado é perfeito.",
                "Diga: \"Gostei, mas mude o tom\" ou \"Adicione mais 2 exemplos\".",
                "É conversando que você chega na perfeição.",
            ]),
            lesson(8, "Segurança Primeiro", "O que não postar.", [
                "Nunca coloque sua senha ou endereço real nos prompts.",
                "A IA pode errar fatos. Sempre dê uma olhada antes de postar algo importante.",
                "Use para ter ideias, não para substituir seu cérebro.",
            ]),
            lesson(9, "Hora de Praticar!", "Seu próximo passo.", [
                "Use as ferramentas aqui do Studio para criar seus primeiros prompts.",
                "Copie nossos templates e mude as partes entre colchetes.",
                "Você já está à frente de 90% das pessoas!",
            ]),
        ],
    }
});
