//! PersonaRelay HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use application::{TurnService, ports::{GenerationPort, RetrievalPort, SpeechPort}};
use axum::http::HeaderValue;
use infrastructure::{
    AppConfig, DoubaoGenerationAdapter, RetrievalAdapter, ServiceVariant, SpeechSynthesisAdapter,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "persona_relay_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("PersonaRelay v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        variant = %config.pipeline.variant,
        model = %config.generation.default_model,
        "Configuration loaded"
    );

    // Initialize backend adapters once; request handlers share these handles.
    let generation: Arc<dyn GenerationPort> = Arc::new(
        DoubaoGenerationAdapter::new(config.generation.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize generation: {e}"))?,
    );

    let (retrieval, speech): (
        Option<Arc<dyn RetrievalPort>>,
        Option<Arc<dyn SpeechPort>>,
    ) = match config.pipeline.variant {
        ServiceVariant::Voice => {
            let speech = SpeechSynthesisAdapter::new(config.speech.clone())
                .map_err(|e| anyhow::anyhow!("Failed to initialize speech: {e}"))?;
            (None, Some(Arc::new(speech) as Arc<dyn SpeechPort>))
        },
        ServiceVariant::Augmented => {
            let retrieval = RetrievalAdapter::new(config.retrieval.clone())
                .map_err(|e| anyhow::anyhow!("Failed to initialize retrieval: {e}"))?;
            (Some(Arc::new(retrieval) as Arc<dyn RetrievalPort>), None)
        },
    };

    let turn_service =
        TurnService::with_ports(generation, retrieval, speech, config.pipeline.to_pipeline())
            .map_err(|e| anyhow::anyhow!("Failed to assemble pipeline: {e}"))?;

    let state = AppState {
        turn_service: Arc::new(turn_service),
    };

    // Build router for the configured variant
    let app = routes::create_router(state, config.pipeline.variant);

    // Configure CORS: fixed origin list with credentials. Wildcard methods
    // and headers are rejected alongside credentials, so mirror the request
    // instead.
    let origins: Vec<HeaderValue> = config
        .server
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    let cors_layer = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    // Add middleware (order matters: first added = outermost)
    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    // Start server
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
