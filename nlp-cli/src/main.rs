//! nlp-cli: analisa uma frase em inglês ou russo e grava o resultado.

mod cli;
mod config;
mod prompt;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env antes de tudo: o parse dos argumentos lê NLP_* do ambiente
    let _ = dotenvy::dotenv();

    let default_filter = if cli::is_verbose() {
        "nlp_cli=info,nlp_core=info"
    } else {
        "nlp_cli=warn,nlp_core=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli::run().await
}
