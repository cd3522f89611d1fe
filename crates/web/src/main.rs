use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::{ApiKeys, AuthState};
use middleware::rate_limit::RateLimiter;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::movements::handlers::list_movements,
        features::movements::handlers::get_movement,
        features::movements::handlers::create_movement,
        features::movements::handlers::update_movement,
        features::movements::handlers::delete_movement,
        features::sessions::handlers::list_sessions,
        features::sessions::handlers::start_session,
        features::sessions::handlers::get_session,
        features::sessions::handlers::finish_session,
        features::sessions::handlers::delete_session,
        features::sessions::handlers::log_set,
        features::sessions::handlers::delete_set,
        features::records::handlers::list_records,
        features::weight::handlers::list_entries,
        features::weight::handlers::log_entry,
        features::weight::handlers::delete_entry,
        features::nutrition::handlers::list_entries,
        features::nutrition::handlers::create_entry,
        features::nutrition::handlers::delete_entry,
        features::nutrition::handlers::daily_summary,
        features::nutrition::handlers::get_goal,
        features::nutrition::handlers::set_goal,
    ),
    components(
        schemas(
            storage::dto::movement::CreateMovementRequest,
            storage::dto::movement::UpdateMovementRequest,
            storage::dto::movement::MovementResponse,
            storage::dto::session::StartSessionRequest,
            storage::dto::session::SessionResponse,
            storage::dto::session::SessionDetailResponse,
            storage::dto::session::LogSetRequest,
            storage::dto::session::SetResponse,
            storage::dto::session::SetLoggedResponse,
            storage::dto::records::PersonalRecordResponse,
            storage::dto::weight::LogWeightRequest,
            storage::dto::weight::WeightEntryResponse,
            storage::dto::nutrition::CreateNutritionEntryRequest,
            storage::dto::nutrition::NutritionEntryResponse,
            storage::dto::nutrition::NutritionGoalRequest,
            storage::dto::nutrition::NutritionGoalResponse,
            storage::dto::nutrition::DailyTotals,
            storage::dto::nutrition::DailySummaryResponse,
            storage::dto::common::PaginationMeta,
            storage::dto::common::PaginatedResponse<storage::dto::session::SessionResponse>,
            storage::models::Movement,
            storage::models::WorkoutSession,
            storage::models::SetEntry,
            storage::models::WeightEntry,
            storage::models::NutritionEntry,
            storage::models::NutritionGoal,
        )
    ),
    tags(
        (name = "movements", description = "Movement catalogue endpoints"),
        (name = "sessions", description = "Workout session and set endpoints"),
        (name = "records", description = "Personal record endpoints"),
        (name = "weight", description = "Body-weight tracking endpoints"),
        (name = "nutrition", description = "Nutrition log and goal endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting LiftLog API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let auth = AuthState {
        api_keys: ApiKeys::from_comma_separated(&config.api_keys),
        limiter: RateLimiter::new(config.rate_limit),
    };

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);

    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api/movements",
            features::movements::routes::routes(auth.clone()),
        )
        .nest(
            "/api/sessions",
            features::sessions::routes::routes(auth.clone()),
        )
        .nest("/api/records", features::records::routes::routes())
        .nest("/api/weight", features::weight::routes::routes(auth.clone()))
        .nest("/api/nutrition", features::nutrition::routes::routes(auth))
        .layer(cors)
        .with_state(db);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
