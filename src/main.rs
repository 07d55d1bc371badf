use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use contract_analyzer::application::ports::ContractRepository;
use contract_analyzer::application::services::{AnalysisPipeline, ContractAnalyzer};
use contract_analyzer::infrastructure::llm::{LlmClientFactory, retry_policy};
use contract_analyzer::infrastructure::observability::{TracingConfig, init_tracing};
use contract_analyzer::infrastructure::persistence::{
    PgContractRepository, create_pool, run_migrations,
};
use contract_analyzer::infrastructure::text_processing::ExtractorFactory;
use contract_analyzer::presentation::config::Settings;
use contract_analyzer::presentation::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;

    init_tracing(&TracingConfig {
        environment: settings.environment.to_string(),
        default_level: settings.logging.level.clone(),
        json_format: settings.logging.json,
    });

    let extractor = Arc::new(ExtractorFactory::create(&settings.extraction));
    let llm_client =
        LlmClientFactory::create(&settings.llm).context("failed to build model client")?;
    let analyzer = Arc::new(ContractAnalyzer::new(
        llm_client,
        settings.analysis.max_contract_chars,
    ));

    let repository: Option<Arc<dyn ContractRepository>> = match &settings.database.url {
        Some(url) => {
            let pool = create_pool(url, settings.database.max_connections)
                .await
                .context("failed to connect to database")?;
            if settings.database.run_migrations {
                run_migrations(&pool).await?;
            }
            Some(Arc::new(PgContractRepository::new(
                pool,
                retry_policy(&settings.llm),
            )))
        }
        None => {
            tracing::info!("No database configured, analyses will not be persisted");
            None
        }
    };

    let pipeline = Arc::new(AnalysisPipeline::new(
        extractor,
        analyzer,
        repository,
        settings.max_upload_bytes(),
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let router = create_router(AppState::new(pipeline, settings));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(address = %addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
