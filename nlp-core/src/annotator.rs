//! # Anotador linguístico
//!
//! Extrai lemas, entidades nomeadas e classes gramaticais usando o modelo do
//! idioma obtido de um [`ModelProvider`]. O texto é passado ao modelo sem
//! nenhuma normalização prévia.
//!
//! Cada `extract_*` executa o modelo uma vez; [`Annotator::annotate`] executa
//! uma única vez e extrai as três visões da mesma análise, sendo o caminho
//! usado pelo pipeline.

use crate::error::Result;
use crate::language::Language;
use crate::model::Analysis;
use crate::registry::ModelProvider;
use crate::schema::{Entity, PosTag};

/// As três visões produzidas pelo modelo, na ordem dos tokens do modelo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotations {
    pub lemmas: Vec<String>,
    pub entities: Vec<Entity>,
    pub pos_tags: Vec<PosTag>,
}

impl From<Analysis> for Annotations {
    fn from(analysis: Analysis) -> Self {
        let entities = analysis
            .entities
            .into_iter()
            .map(|span| Entity { text: span.text, label: span.label })
            .collect();
        let (lemmas, pos_tags) = analysis
            .tokens
            .into_iter()
            .map(|t| (t.lemma, PosTag { text: t.text, pos: t.pos }))
            .unzip();
        Self { lemmas, entities, pos_tags }
    }
}

pub struct Annotator<'a> {
    provider: &'a dyn ModelProvider,
}

impl<'a> Annotator<'a> {
    pub fn new(provider: &'a dyn ModelProvider) -> Self {
        Self { provider }
    }

    /// Um lema por token do modelo, pontuação incluída.
    pub fn extract_lemmas(&self, text: &str, language: Language) -> Result<Vec<String>> {
        Ok(self.annotate(text, language)?.lemmas)
    }

    /// Entidades na ordem em que aparecem; vazio se não houver nenhuma.
    pub fn extract_entities(&self, text: &str, language: Language) -> Result<Vec<Entity>> {
        Ok(self.annotate(text, language)?.entities)
    }

    /// Uma classe gramatical por token do modelo.
    pub fn extract_pos_tags(&self, text: &str, language: Language) -> Result<Vec<PosTag>> {
        Ok(self.annotate(text, language)?.pos_tags)
    }

    /// Executa o modelo uma vez e devolve lemas, entidades e classes juntos.
    ///
    /// Falha com [`crate::NlpError::ModelUnavailable`] se o provedor não tiver
    /// modelo para o idioma.
    pub fn annotate(&self, text: &str, language: Language) -> Result<Annotations> {
        let model = self.provider.get(language)?;
        Ok(model.analyze(text).into())
    }
}
