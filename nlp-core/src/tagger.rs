//! # Esquema de Tags BIO e Categorias de Entidade
//!
//! O motor de regras rotula cada token com uma tag **BIO** (Beginning-Inside-Outside);
//! [`tokens_to_spans`] reconstrói as entidades completas a partir dessas tags.
//!
//! ## Categorias e rótulos
//!
//! O rótulo gravado no documento depende do idioma, seguindo o vocabulário
//! de cada modelo:
//!
//! | Categoria | `en`     | `ru`   | Exemplos                        |
//! |-----------|----------|--------|---------------------------------|
//! | Per       | PERSON   | PER    | Barack Obama, Пушкин            |
//! | Org       | ORG      | ORG    | Google, Газпром                 |
//! | Loc       | GPE      | LOC    | London, Москва                  |
//! | Misc      | NORP     | MISC   | Russian, Americans              |
//!
//! ## Esquema BIO
//!
//! - `B-TAG`: primeiro token de uma entidade
//! - `I-TAG`: tokens subsequentes da mesma entidade
//! - `O`: não é parte de nenhuma entidade

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::tokenizer::Token;

/// Categorias de entidade reconhecidas pelos modelos embutidos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityCategory {
    /// **Pessoa**: nomes de pessoas reais ou fictícias.
    Per,
    /// **Organização**: empresas, instituições, órgãos públicos.
    Org,
    /// **Localização**: países, cidades, regiões.
    Loc,
    /// **Miscelânea**: nacionalidades e grupos (NORP no modelo inglês).
    Misc,
}

impl EntityCategory {
    /// Nome curto da categoria, usado nas tags BIO.
    pub fn name(&self) -> &'static str {
        match self {
            EntityCategory::Per => "PER",
            EntityCategory::Org => "ORG",
            EntityCategory::Loc => "LOC",
            EntityCategory::Misc => "MISC",
        }
    }

    /// Rótulo no vocabulário do modelo do idioma.
    pub fn label(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, EntityCategory::Per) => "PERSON",
            (Language::En, EntityCategory::Loc) => "GPE",
            (Language::En, EntityCategory::Misc) => "NORP",
            (_, category) => category.name(),
        }
    }
}

/// Tag BIO aplicada a um token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    Begin(EntityCategory),
    Inside(EntityCategory),
    Outside,
}

impl Tag {
    pub fn category(&self) -> Option<EntityCategory> {
        match self {
            Tag::Begin(c) | Tag::Inside(c) => Some(*c),
            Tag::Outside => None,
        }
    }
}

/// Um token com sua tag BIO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: Token,
    pub tag: Tag,
}

/// Uma entidade identificada no texto (span de um ou mais tokens).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Texto da entidade, recortado do original (ex: "Владимир Путин")
    pub text: String,
    pub category: EntityCategory,
    /// Rótulo no vocabulário do idioma (ex: "PERSON", "PER")
    pub label: String,
    /// Índice do primeiro token
    pub start_token: usize,
    /// Índice do último token (inclusivo)
    pub end_token: usize,
    /// Posição de byte inicial no texto original
    pub start: usize,
    /// Posição de byte final no texto original
    pub end: usize,
}

/// Converte uma sequência de tokens com tags BIO em spans de entidades.
///
/// - Inicia uma entidade em `B-X`.
/// - Continua enquanto houver `I-X` da **mesma** categoria.
/// - Um `I-X` órfão (sem `B-X` antes) é ignorado.
///
/// `[B-PER, I-PER, O, B-LOC]` → `[EntitySpan(PER), EntitySpan(LOC)]`
pub fn tokens_to_spans(
    tagged: &[TaggedToken],
    original_text: &str,
    language: Language,
) -> Vec<EntitySpan> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < tagged.len() {
        if let Tag::Begin(cat) = tagged[i].tag {
            let start_token = tagged[i].token.index;
            let start_byte = tagged[i].token.start;
            let mut end_token = start_token;
            let mut end_byte = tagged[i].token.end;

            let mut j = i + 1;
            while j < tagged.len() && tagged[j].tag == Tag::Inside(cat) {
                end_token = tagged[j].token.index;
                end_byte = tagged[j].token.end;
                j += 1;
            }

            spans.push(EntitySpan {
                text: original_text[start_byte..end_byte].trim().to_string(),
                category: cat,
                label: cat.label(language).to_string(),
                start_token,
                end_token,
                start: start_byte,
                end: end_byte,
            });

            i = j;
        } else {
            i += 1;
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(text: &str, tags: &[Tag]) -> Vec<TaggedToken> {
        let mut offset = 0;
        text.split(' ')
            .zip(tags)
            .enumerate()
            .map(|(index, (word, tag))| {
                let token = Token {
                    text: word.to_string(),
                    start: offset,
                    end: offset + word.len(),
                    index,
                };
                offset += word.len() + 1;
                TaggedToken { token, tag: *tag }
            })
            .collect()
    }

    #[test]
    fn test_tag_category() {
        assert_eq!(Tag::Begin(EntityCategory::Per).category(), Some(EntityCategory::Per));
        assert_eq!(Tag::Inside(EntityCategory::Loc).category(), Some(EntityCategory::Loc));
        assert_eq!(Tag::Outside.category(), None);
    }

    #[test]
    fn test_labels_follow_language_vocabulary() {
        assert_eq!(EntityCategory::Per.label(Language::En), "PERSON");
        assert_eq!(EntityCategory::Per.label(Language::Ru), "PER");
        assert_eq!(EntityCategory::Loc.label(Language::En), "GPE");
        assert_eq!(EntityCategory::Loc.label(Language::Ru), "LOC");
        assert_eq!(EntityCategory::Org.label(Language::En), "ORG");
    }

    #[test]
    fn test_tokens_to_spans() {
        use EntityCategory::*;
        let text = "Barack Obama visited New York";
        let tokens = tagged(
            text,
            &[
                Tag::Begin(Per),
                Tag::Inside(Per),
                Tag::Outside,
                Tag::Begin(Loc),
                Tag::Inside(Loc),
            ],
        );
        let spans = tokens_to_spans(&tokens, text, Language::En);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "Barack Obama");
        assert_eq!(spans[0].label, "PERSON");
        assert_eq!((spans[0].start_token, spans[0].end_token), (0, 1));
        assert_eq!(spans[1].text, "New York");
        assert_eq!(spans[1].label, "GPE");
    }

    #[test]
    fn test_orphan_inside_is_ignored() {
        let text = "a b c";
        let tokens = tagged(
            text,
            &[
                Tag::Inside(EntityCategory::Org),
                Tag::Begin(EntityCategory::Per),
                Tag::Inside(EntityCategory::Org),
            ],
        );
        let spans = tokens_to_spans(&tokens, text, Language::Ru);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "b");
        assert_eq!(spans[0].label, "PER");
    }
}
