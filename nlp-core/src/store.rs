//! # Armazenamento de registros
//!
//! Cada análise concluída é gravada como um documento na coleção
//! `nlp_results`. A identidade (`_id`) é atribuída pelo armazenamento no
//! momento da inserção e devolvida ao chamador.
//!
//! | Implementação   | Uso                                                   |
//! |-----------------|-------------------------------------------------------|
//! | [`SqliteStore`] | arquivo local; o documento é guardado como JSON       |
//! | [`MemoryStore`] | testes e execuções sem persistência                   |

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::{NlpError, Result};
use crate::schema::{AnalysisResult, RecordId, StoredAnalysis};

/// Nome da coleção de documentos.
pub const COLLECTION: &str = "nlp_results";

/// Destino dos registros de análise.
pub trait RecordStore: Send + Sync {
    /// Grava o registro e devolve o identificador atribuído.
    fn insert(&self, record: &AnalysisResult) -> Result<RecordId>;

    fn get(&self, id: &RecordId) -> Result<Option<StoredAnalysis>>;

    fn count(&self) -> Result<usize>;
}

/// Armazenamento em SQLite.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Abre (ou cria) o banco em `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Abrindo banco de resultados: {}", path.as_ref().display());
        Self::init(Connection::open(path.as_ref())?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {COLLECTION} (
                id TEXT PRIMARY KEY,
                language TEXT NOT NULL,
                created_at TEXT NOT NULL,
                document TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_{COLLECTION}_created ON {COLLECTION}(created_at);
            "#
        ))?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| NlpError::Storage("conexão com o banco envenenada".to_string()))
    }
}

impl RecordStore for SqliteStore {
    fn insert(&self, record: &AnalysisResult) -> Result<RecordId> {
        let id = RecordId::generate();
        let document = serde_json::to_string(record)?;

        let conn = self.lock()?;
        conn.execute(
            &format!(
                "INSERT INTO {COLLECTION} (id, language, created_at, document) VALUES (?1, ?2, ?3, ?4)"
            ),
            params![
                id.as_str(),
                record.language.code(),
                record.created_at.to_rfc3339(),
                document,
            ],
        )?;

        debug!("Registro gravado: {}", id);
        Ok(id)
    }

    fn get(&self, id: &RecordId) -> Result<Option<StoredAnalysis>> {
        let conn = self.lock()?;
        let document: Option<String> = conn
            .query_row(
                &format!("SELECT document FROM {COLLECTION} WHERE id = ?1"),
                params![id.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        document
            .map(|doc| -> Result<StoredAnalysis> {
                let record: AnalysisResult = serde_json::from_str(&doc)?;
                Ok(StoredAnalysis { id: id.clone(), record })
            })
            .transpose()
    }

    fn count(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {COLLECTION}"),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}

/// Armazenamento em memória, na ordem de inserção.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<StoredAnalysis>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cópia de todos os registros gravados.
    pub fn records(&self) -> Vec<StoredAnalysis> {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl RecordStore for MemoryStore {
    fn insert(&self, record: &AnalysisResult) -> Result<RecordId> {
        let id = RecordId::generate();
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(StoredAnalysis { id: id.clone(), record: record.clone() });
        Ok(id)
    }

    fn get(&self, id: &RecordId) -> Result<Option<StoredAnalysis>> {
        let records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        Ok(records.iter().find(|r| &r.id == id).cloned())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.records.lock().unwrap_or_else(|e| e.into_inner()).len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::schema::{Entity, PosTag, Preprocessing};
    use chrono::{TimeZone, Utc};

    fn sample(text: &str) -> AnalysisResult {
        AnalysisResult {
            raw_text: text.to_string(),
            language: Language::Ru,
            preprocessing: Preprocessing {
                tokens_by_word: text.split(' ').map(String::from).collect(),
                tokens_by_symbol: text.chars().map(String::from).collect(),
                lowercased: text.to_lowercase(),
                no_punct: text.to_string(),
                alnum_keep: text.to_string(),
            },
            lemmas: vec!["москва".into()],
            entities: vec![Entity { text: "Москва".into(), label: "LOC".into() }],
            pos_tags: vec![PosTag { text: "Москва".into(), pos: "PROPN".into() }],
            created_at: Utc.with_ymd_and_hms(2024, 3, 8, 9, 15, 0).unwrap(),
        }
    }

    #[test]
    fn test_sqlite_insert_and_get() {
        let store = SqliteStore::open_in_memory().unwrap();
        let record = sample("Москва");

        let id = store.insert(&record).unwrap();
        let stored = store.get(&id).unwrap().expect("registro gravado");

        assert_eq!(stored.id, id);
        assert_eq!(stored.record, record);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_sqlite_ids_are_distinct() {
        let store = SqliteStore::open_in_memory().unwrap();
        let a = store.insert(&sample("a")).unwrap();
        let b = store.insert(&sample("a")).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_sqlite_missing_id() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.get(&RecordId::from("nope")).unwrap().is_none());
    }

    #[test]
    fn test_sqlite_persists_across_connections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.db");

        let id = {
            let store = SqliteStore::open(&path).unwrap();
            store.insert(&sample("Кошка сидит")).unwrap()
        };

        let reopened = SqliteStore::open(&path).unwrap();
        let stored = reopened.get(&id).unwrap().unwrap();
        assert_eq!(stored.record.raw_text, "Кошка сидит");
        assert_eq!(reopened.count().unwrap(), 1);
    }

    #[test]
    fn test_sqlite_unwritable_path_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("results.db");
        let err = SqliteStore::open(&path).err().expect("diretório inexistente");
        assert!(matches!(err, NlpError::Storage(_)));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        let id = store.insert(&sample("x")).unwrap();
        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.get(&id).unwrap().unwrap().record.raw_text, "x");
        assert_eq!(store.records().len(), 1);
        assert!(store.get(&RecordId::generate()).unwrap().is_none());
    }
}
