//! # Pipeline de análise: orquestrador com eventos observáveis
//!
//! Recebe o texto e o idioma, produz o registro completo e o entrega ao
//! armazenamento:
//!
//! ```text
//!            ┌─► pré-processamento ─┐
//! texto ─────┤                      ├─► AnalysisResult ─► RecordStore
//!            └─► anotador (modelo) ─┘
//! ```
//!
//! O pré-processamento e o anotador leem apenas o texto original e rodam em
//! paralelo (`rayon::join`). A montagem espera os dois.
//!
//! ## Eventos
//!
//! [`AnalysisPipeline::analyze_streaming`] emite um [`PipelineEvent`] por
//! estágio via `mpsc`, para que a interface mostre o progresso:
//!
//! 1. `PreprocessingDone`
//! 2. `AnnotationDone`
//! 3. `Saving`
//! 4. `Saved` (ou `Failed`, em qualquer ponto)
//!
//! Texto vazio e idioma inválido são rejeitados antes de qualquer chamada ao
//! modelo ou ao armazenamento.

use std::sync::mpsc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::annotator::{Annotations, Annotator};
use crate::error::Result;
use crate::language::Language;
use crate::preprocess::preprocess;
use crate::registry::ModelProvider;
use crate::schema::{ensure_text, AnalysisResult, Entity, PosTag, Preprocessing, RecordId, StoredAnalysis};
use crate::store::RecordStore;

/// Eventos emitidos pelo pipeline durante o processamento.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PipelineEvent {
    /// As cinco visões normalizadas foram calculadas.
    PreprocessingDone {
        tokens_by_word: Vec<String>,
        tokens_by_symbol: Vec<String>,
    },
    /// O modelo do idioma anotou o texto.
    AnnotationDone {
        lemmas: Vec<String>,
        entities: Vec<Entity>,
        pos_tags: Vec<PosTag>,
    },
    /// O registro foi montado e está sendo gravado.
    Saving,
    /// Registro persistido com o identificador atribuído.
    Saved { id: RecordId },
    /// A execução foi interrompida; nada foi persistido.
    Failed { message: String },
}

pub struct AnalysisPipeline<'a> {
    annotator: Annotator<'a>,
}

impl<'a> AnalysisPipeline<'a> {
    pub fn new(provider: &'a dyn ModelProvider) -> Self {
        Self {
            annotator: Annotator::new(provider),
        }
    }

    /// Pré-processa e anota o texto, montando o registro sem persistir.
    pub fn analyze(&self, text: &str, language: Language) -> Result<AnalysisResult> {
        let (preprocessing, annotations) = self.run_stages(text, language)?;
        AnalysisResult::assemble(text, language, preprocessing, annotations, Utc::now())
    }

    /// Executa a análise completa e grava o registro uma única vez.
    pub fn analyze_and_store(
        &self,
        text: &str,
        language: Language,
        store: &dyn RecordStore,
    ) -> Result<StoredAnalysis> {
        let record = self.analyze(text, language)?;
        let id = store.insert(&record)?;
        Ok(StoredAnalysis { id, record })
    }

    /// Como [`Self::analyze_and_store`], emitindo eventos de progresso em `tx`.
    ///
    /// O resultado também é devolvido; um receptor desconectado não
    /// interrompe a execução.
    pub fn analyze_streaming(
        &self,
        text: &str,
        language: Language,
        store: &dyn RecordStore,
        tx: mpsc::Sender<PipelineEvent>,
    ) -> Result<StoredAnalysis> {
        let outcome = self.streaming_stages(text, language, store, &tx);
        if let Err(err) = &outcome {
            let _ = tx.send(PipelineEvent::Failed {
                message: err.to_string(),
            });
        }
        outcome
    }

    fn streaming_stages(
        &self,
        text: &str,
        language: Language,
        store: &dyn RecordStore,
        tx: &mpsc::Sender<PipelineEvent>,
    ) -> Result<StoredAnalysis> {
        let (preprocessing, annotations) = self.run_stages(text, language)?;

        let _ = tx.send(PipelineEvent::PreprocessingDone {
            tokens_by_word: preprocessing.tokens_by_word.clone(),
            tokens_by_symbol: preprocessing.tokens_by_symbol.clone(),
        });
        let _ = tx.send(PipelineEvent::AnnotationDone {
            lemmas: annotations.lemmas.clone(),
            entities: annotations.entities.clone(),
            pos_tags: annotations.pos_tags.clone(),
        });

        let record =
            AnalysisResult::assemble(text, language, preprocessing, annotations, Utc::now())?;

        let _ = tx.send(PipelineEvent::Saving);
        let id = store.insert(&record)?;
        let _ = tx.send(PipelineEvent::Saved { id: id.clone() });

        Ok(StoredAnalysis { id, record })
    }

    fn run_stages(&self, text: &str, language: Language) -> Result<(Preprocessing, Annotations)> {
        ensure_text(text)?;
        let (preprocessing, annotations) = rayon::join(
            || preprocess(text),
            || self.annotator.annotate(text, language),
        );
        Ok((preprocessing, annotations?))
    }
}
