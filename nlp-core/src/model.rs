//! # Modelos linguísticos
//!
//! Um [`LanguageModel`] recebe o texto bruto e devolve, em uma única passada,
//! tokens com lema e classe gramatical e as entidades nomeadas encontradas.
//! O anotador depende apenas do trait; os modelos embutidos são
//! [`RuleBasedModel`]s, um por idioma, construídos a partir do [`Lexicon`].
//!
//! ## Fluxo do modelo embutido
//!
//! ```text
//! texto → tokenizador → POS → lemas → regras (BIO) → spans de entidades
//! ```
//!
//! | Identificador      | Idioma | Rótulos de entidade        |
//! |--------------------|--------|----------------------------|
//! | `en_core_web_sm`   | `en`   | PERSON, ORG, GPE, NORP     |
//! | `ru_core_news_sm`  | `ru`   | PER, ORG, LOC, MISC        |

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::lemmatizer::Lemmatizer;
use crate::lexicon::Lexicon;
use crate::pos::PosTagger;
use crate::rule_based::RuleEngine;
use crate::tagger::{tokens_to_spans, EntitySpan, Tag, TaggedToken};
use crate::tokenizer::tokenize;

/// Token anotado pelo modelo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedToken {
    pub text: String,
    pub lemma: String,
    /// Etiqueta UPOS (ex: "NOUN", "PROPN").
    pub pos: String,
    pub start: usize,
    pub end: usize,
}

/// Saída completa de uma passada do modelo sobre o texto.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub tokens: Vec<AnalyzedToken>,
    /// Entidades na ordem em que aparecem no texto.
    pub entities: Vec<EntitySpan>,
}

/// Modelo capaz de analisar texto de um idioma.
///
/// Implementações devem ser seguras para uso concorrente: o registro compartilha
/// uma única instância por idioma entre todas as chamadas.
pub trait LanguageModel: Send + Sync {
    /// Identificador do modelo (ex: "ru_core_news_sm").
    fn name(&self) -> &str;

    fn language(&self) -> Language;

    fn analyze(&self, text: &str) -> Analysis;
}

/// Modelo embutido baseado em léxico e regras.
pub struct RuleBasedModel {
    name: String,
    lexicon: &'static Lexicon,
    tagger: PosTagger,
    lemmatizer: Lemmatizer,
    rules: RuleEngine,
}

impl RuleBasedModel {
    /// Compila as tabelas de consulta do léxico.
    pub fn new(name: impl Into<String>, lexicon: &'static Lexicon) -> Self {
        Self {
            name: name.into(),
            lexicon,
            tagger: PosTagger::new(lexicon),
            lemmatizer: Lemmatizer::new(lexicon),
            rules: RuleEngine::from_lexicon(lexicon),
        }
    }

    /// Modelo embutido para `model_id`, se ele existir e for do idioma pedido.
    pub fn builtin(language: Language, model_id: &str) -> Option<Self> {
        (model_id == language.default_model())
            .then(|| Self::new(model_id, Lexicon::for_language(language)))
    }
}

impl LanguageModel for RuleBasedModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn language(&self) -> Language {
        self.lexicon.language
    }

    fn analyze(&self, text: &str) -> Analysis {
        let tokens = tokenize(text, self.lexicon.abbreviations, self.lexicon.clitics);
        if tokens.is_empty() {
            return Analysis::default();
        }

        let pos = self.tagger.tag(&tokens);
        let lemmas = self
            .lemmatizer
            .lemmatize_all(tokens.iter().map(|t| t.text.as_str()).zip(pos.iter().copied()));
        let matches = self.rules.apply(&tokens, &lemmas, &pos);

        let tagged: Vec<TaggedToken> = tokens
            .iter()
            .zip(matches)
            .map(|(token, m)| TaggedToken {
                token: token.clone(),
                tag: m.map_or(Tag::Outside, |m| m.tag),
            })
            .collect();
        let entities = tokens_to_spans(&tagged, text, self.language());

        let tokens = tokens
            .into_iter()
            .zip(lemmas)
            .zip(pos)
            .map(|((token, lemma), pos)| AnalyzedToken {
                text: token.text,
                lemma,
                pos: pos.as_str().to_string(),
                start: token.start,
                end: token.end,
            })
            .collect();

        Analysis { tokens, entities }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(language: Language) -> RuleBasedModel {
        RuleBasedModel::builtin(language, language.default_model()).unwrap()
    }

    fn entities(analysis: &Analysis) -> Vec<(&str, &str)> {
        analysis
            .entities
            .iter()
            .map(|e| (e.text.as_str(), e.label.as_str()))
            .collect()
    }

    #[test]
    fn test_builtin_only_knows_default_ids() {
        assert!(RuleBasedModel::builtin(Language::Ru, "ru_core_news_sm").is_some());
        assert!(RuleBasedModel::builtin(Language::En, "en_core_web_sm").is_some());
        assert!(RuleBasedModel::builtin(Language::En, "ru_core_news_sm").is_none());
        assert!(RuleBasedModel::builtin(Language::Ru, "ru_core_news_lg").is_none());
    }

    #[test]
    fn test_russian_sentence() {
        let analysis = model(Language::Ru).analyze("Кошка сидит на окне.");
        let lemmas: Vec<&str> = analysis.tokens.iter().map(|t| t.lemma.as_str()).collect();
        let pos: Vec<&str> = analysis.tokens.iter().map(|t| t.pos.as_str()).collect();
        assert_eq!(lemmas, vec!["кошка", "сидеть", "на", "окно", "."]);
        assert_eq!(pos, vec!["NOUN", "VERB", "ADP", "NOUN", "PUNCT"]);
        assert!(analysis.entities.is_empty());
    }

    #[test]
    fn test_english_entities() {
        let analysis = model(Language::En).analyze("Barack Obama visited London.");
        assert_eq!(
            entities(&analysis),
            vec![("Barack Obama", "PERSON"), ("London", "GPE")]
        );
    }

    #[test]
    fn test_russian_entities_and_lemmas() {
        let analysis = model(Language::Ru).analyze("Владимир Путин посетил Москву.");
        assert_eq!(
            entities(&analysis),
            vec![("Владимир Путин", "PER"), ("Москву", "LOC")]
        );
        assert_eq!(analysis.tokens[2].lemma, "посетить");
        assert_eq!(analysis.tokens[3].lemma, "москва");
    }

    #[test]
    fn test_acronym_entity() {
        let analysis = model(Language::En).analyze("Hello, World!  NLP is fun.");
        assert_eq!(entities(&analysis), vec![("NLP", "ORG")]);
        assert_eq!(analysis.tokens.len(), 8);
    }

    #[test]
    fn test_offsets_slice_original_text() {
        let text = "Dr. Smith isn't in Paris.";
        let analysis = model(Language::En).analyze(text);
        for token in &analysis.tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_blank_text_yields_empty_analysis() {
        assert_eq!(model(Language::En).analyze("  \n"), Analysis::default());
    }

    #[test]
    fn test_model_metadata() {
        let m = model(Language::Ru);
        assert_eq!(m.name(), "ru_core_news_sm");
        assert_eq!(m.language(), Language::Ru);
    }
}
