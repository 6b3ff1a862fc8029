//! Loan Plan API Server
//!
//! Calculates fixed-payment amortization schedules for course loans and
//! stores named loan scenarios. Uses hexagonal (ports & adapters)
//! architecture: the calculation engine is pure, persistence sits behind
//! the `PlanRepository` port.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod report;

#[cfg(test)]
mod test_utils;


use adapters::{OfflinePlanRepository, PostgresPlanRepository};
use app::PlanService;
use config::Config;
use domain::ports::PlanRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub plan_service: Arc<PlanService<dyn PlanRepository>>,
    pub config: Config,
}

impl AppState {
    pub fn new(plans: Arc<dyn PlanRepository>, config: Config) -> Self {
        Self {
            plan_service: Arc::new(PlanService::new(plans)),
            config,
        }
    }
}

/// Build the HTTP router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/calculate", post(handlers::calculate))
        .route(
            "/plans",
            get(handlers::list_plans).post(handlers::create_plan),
        )
        .route(
            "/plans/:id",
            get(handlers::get_plan)
                .put(handlers::update_plan)
                .delete(handlers::delete_plan),
        )
        .route("/plans/:id/quote", get(handlers::quote_plan))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Pick the plan store from configuration
async fn plan_store(
    config: &Config,
) -> anyhow::Result<(Arc<dyn PlanRepository>, Option<DatabaseConnection>)> {
    let Some(url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, plan storage disabled");
        return Ok((Arc::new(OfflinePlanRepository), None));
    };

    tracing::info!("Connecting to database...");
    let db = adapters::postgres::connect(url, config.database_max_connections).await?;
    adapters::postgres::ensure_schema(&db).await?;
    tracing::info!("Database connected");

    Ok((Arc::new(PostgresPlanRepository::new(db.clone())), Some(db)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,loanplan_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Loan Plan API...");

    let config = Config::from_env();
    tracing::info!(
        persistence = config.persistence_enabled(),
        default_locale = %config.default_locale,
        "Configuration loaded"
    );
    let (plans, db) = plan_store(&config).await?;
    let app = router(AppState::new(plans, config.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = db {
        db.close().await?;
        tracing::info!("Database connection closed");
    }

    Ok(())
}
