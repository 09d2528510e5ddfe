//! Comandos da linha de comando.

use std::io;
use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use nlp_core::{
    AnalysisPipeline, Language, PipelineEvent, RecordId, RecordStore, SqliteStore, StoredAnalysis,
};
use tracing::{debug, info, warn};

use crate::config::{Settings, DEFAULT_DATABASE};
use crate::prompt::{normalize_sentence, read_language, read_sentence};

#[derive(Parser)]
#[command(name = "nlp-cli")]
#[command(about = "Pré-processamento e análise linguística de frases em inglês e russo")]
#[command(version)]
pub struct Cli {
    /// Banco SQLite onde os resultados são gravados
    #[arg(long, global = true, env = "NLP_DATABASE_PATH", default_value = DEFAULT_DATABASE)]
    database: PathBuf,

    /// Modelo usado para textos em inglês
    #[arg(long, global = true, env = "NLP_MODEL_EN", default_value = "en_core_web_sm")]
    model_en: String,

    /// Modelo usado para textos em russo
    #[arg(long, global = true, env = "NLP_MODEL_RU", default_value = "ru_core_news_sm")]
    model_ru: String,

    /// Habilita logs detalhados
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Verifica o modo verboso antes do parse completo (para configurar os logs cedo).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Analisa uma frase e grava o resultado (padrão quando nenhum comando é dado)
    Analyze {
        /// Frase a analisar; perguntada interativamente se omitida
        #[arg(short, long)]
        text: Option<String>,

        /// Idioma da frase (en ou ru); perguntado interativamente se omitido
        #[arg(short, long)]
        language: Option<String>,

        /// Imprime o documento gravado em JSON
        #[arg(long)]
        json: bool,
    },

    /// Mostra um resultado gravado
    Show {
        /// Identificador devolvido pelo comando analyze
        id: String,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings {
        database_path: cli.database,
        model_en: cli.model_en,
        model_ru: cli.model_ru,
    };
    debug!("Configuração: {:?}", settings);

    match cli.command {
        Some(Commands::Analyze { text, language, json }) => {
            cmd_analyze(settings, text, language, json).await
        }
        Some(Commands::Show { id }) => cmd_show(&settings, &id),
        None => cmd_analyze(settings, None, None, false).await,
    }
}

async fn cmd_analyze(
    settings: Settings,
    text: Option<String>,
    language: Option<String>,
    json: bool,
) -> Result<()> {
    let language = language
        .map(|tag| tag.trim().to_lowercase().parse::<Language>())
        .transpose()?;

    // Leitura do terminal e pipeline são síncronos
    let stored = tokio::task::spawn_blocking(move || -> Result<StoredAnalysis> {
        let (text, language) = resolve_input(text, language)?;

        eprintln!("{} Iniciando análise ({})", style("→").cyan(), language);
        let store = SqliteStore::open(&settings.database_path).with_context(|| {
            format!("falha ao abrir o banco {}", settings.database_path.display())
        })?;
        let registry = settings.model_registry();
        let pipeline = AnalysisPipeline::new(&registry);

        let (tx, rx) = mpsc::channel();
        let printer = std::thread::spawn(move || {
            for event in rx {
                print_event(&event);
            }
        });
        let outcome = pipeline.analyze_streaming(&text, language, &store, tx);
        finish_printer(printer);

        outcome.context("falha na análise")
    })
    .await
    .context("tarefa de análise interrompida")??;

    info!("Análise {} concluída", stored.id);

    if json {
        println!("{}", serde_json::to_string_pretty(&stored)?);
    } else {
        print_summary(&stored);
    }
    Ok(())
}

fn cmd_show(settings: &Settings, id: &str) -> Result<()> {
    let store = SqliteStore::open(&settings.database_path).with_context(|| {
        format!("falha ao abrir o banco {}", settings.database_path.display())
    })?;

    match store.get(&RecordId::from(id))? {
        Some(stored) => {
            println!("{}", serde_json::to_string_pretty(&stored)?);
            Ok(())
        }
        None => bail!("nenhum resultado com id '{id}' em {}", settings.database_path.display()),
    }
}

/// Completa frase e idioma ausentes perguntando no terminal.
///
/// A frase passada em `--text` segue a mesma regra da digitada: `trim` e
/// rejeição quando vazia.
fn resolve_input(text: Option<String>, language: Option<Language>) -> Result<(String, Language)> {
    let stdin = io::stdin();
    let mut output = io::stderr();

    let text = match text {
        Some(text) => normalize_sentence(&text)?,
        None => read_sentence(&mut stdin.lock(), &mut output)?,
    };
    let language = match language {
        Some(language) => language,
        None => read_language(&mut stdin.lock(), &mut output)?,
    };
    Ok((text, language))
}

/// Aguarda a thread de impressão; um pânico nela não derruba a análise.
fn finish_printer(printer: std::thread::JoinHandle<()>) -> bool {
    let clean = printer.join().is_ok();
    if !clean {
        warn!("thread de impressão de eventos terminou com pânico");
    }
    clean
}

fn print_event(event: &PipelineEvent) {
    match event {
        PipelineEvent::PreprocessingDone { tokens_by_word, tokens_by_symbol } => eprintln!(
            "  {} Pré-processamento: {} tokens por palavra, {} símbolos",
            style("✓").green(),
            tokens_by_word.len(),
            tokens_by_symbol.len()
        ),
        PipelineEvent::AnnotationDone { lemmas, entities, .. } => eprintln!(
            "  {} Análise NLP: {} lemas, {} entidades",
            style("✓").green(),
            lemmas.len(),
            entities.len()
        ),
        PipelineEvent::Saving => eprintln!("  {} Salvando no banco...", style("→").cyan()),
        PipelineEvent::Saved { id } => {
            eprintln!("  {} Salvo com id: {}", style("✓").green(), style(id).bold())
        }
        PipelineEvent::Failed { message } => eprintln!("  {} {}", style("✗").red(), message),
    }
}

fn print_summary(stored: &StoredAnalysis) {
    let record = &stored.record;

    println!("\n{}", style(format!("Resultado {}", stored.id)).bold());
    println!("  Texto:        {}", record.raw_text);
    println!("  Idioma:       {}", record.language);
    println!("  Minúsculas:   {}", record.preprocessing.lowercased);
    println!("  Sem pontuação: {}", record.preprocessing.no_punct);
    println!("  Lemas:        {}", record.lemmas.join(" "));

    println!("\n{}", style("Classes gramaticais").bold());
    for tag in &record.pos_tags {
        println!("  {:<20} {}", tag.text, style(&tag.pos).dim());
    }

    println!("\n{}", style("Entidades").bold());
    if record.entities.is_empty() {
        println!("  {} Nenhuma entidade encontrada", style("!").yellow());
    }
    for entity in &record.entities {
        println!("  {:<20} {}", entity.text, style(&entity.label).cyan());
    }
}
