//! # nlp-core: Pré-processamento e Anotação Linguística de Frases
//!
//! Este crate recebe uma frase em inglês ou russo e produz um registro de
//! análise completo: cinco visões normalizadas do texto, lemas, entidades
//! nomeadas e classes gramaticais. O registro é gravado uma única vez em um
//! [`RecordStore`].
//!
//! ## Arquitetura
//!
//! 1.  **Entrada**: texto bruto e idioma ([`Language`]).
//! 2.  **Pré-processamento** ([`preprocess`]): divisão por espaço, por caractere,
//!     minúsculas e duas limpezas de pontuação. Funções puras.
//! 3.  **Anotação** ([`annotator`]): o modelo do idioma, obtido do
//!     [`ModelRegistry`], tokeniza ([`tokenizer`]), etiqueta ([`pos`]),
//!     lematiza ([`lemmatizer`]) e reconhece entidades ([`rule_based`], [`tagger`]).
//! 4.  **Montagem** ([`schema`]): [`AnalysisResult`] com data de criação em UTC.
//! 5.  **Persistência** ([`store`]): SQLite ou memória.
//!
//! Os passos 2 e 3 rodam em paralelo; o [`pipeline`] coordena tudo e emite
//! eventos de progresso.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use nlp_core::{AnalysisPipeline, Language, MemoryStore, ModelRegistry, RecordStore};
//!
//! let registry = ModelRegistry::new();
//! let store = MemoryStore::new();
//! let pipeline = AnalysisPipeline::new(&registry);
//!
//! let stored = pipeline
//!     .analyze_and_store("Кошка сидит на окне.", Language::Ru, &store)
//!     .unwrap();
//!
//! assert_eq!(stored.record.lemmas, vec!["кошка", "сидеть", "на", "окно", "."]);
//! assert_eq!(store.count().unwrap(), 1);
//! ```

pub mod annotator;
pub mod error;
pub mod language;
pub mod lemmatizer;
pub mod lexicon;
pub mod model;
pub mod pipeline;
pub mod pos;
pub mod preprocess;
pub mod registry;
pub mod rule_based;
pub mod schema;
pub mod store;
pub mod tagger;
pub mod tokenizer;

pub use annotator::{Annotations, Annotator};
pub use error::{NlpError, Result};
pub use language::Language;
pub use model::{Analysis, LanguageModel, RuleBasedModel};
pub use pipeline::{AnalysisPipeline, PipelineEvent};
pub use preprocess::{CleanMode, TokenizeMode};
pub use registry::{ModelProvider, ModelRegistry};
pub use schema::{AnalysisResult, Entity, PosTag, Preprocessing, RecordId, StoredAnalysis};
pub use store::{MemoryStore, RecordStore, SqliteStore};
