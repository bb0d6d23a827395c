use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use mates_match::config::Settings;
use mates_match::core::Recommender;
use mates_match::models::RecommendationWeights;
use mates_match::routes::{self, recommendations::AppState};
use mates_match::services::{CacheManager, ProfileDirectory};
use std::sync::Arc;
use tracing::{info, warn, error};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Configuration comes first so the log level can be read from it
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_tracing(&settings);

    info!("Starting Mates Match recommendation service...");

    let directory = match &settings.directory {
        Some(directory_settings) => {
            let directory = ProfileDirectory::new(
                directory_settings.endpoint.clone(),
                directory_settings.api_key.clone(),
                directory_settings.collections(),
                directory_settings.timeout(),
            )
            .map_err(|e| {
                error!("Failed to create profile directory client: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
            })?;
            info!("Profile directory initialized ({})", directory_settings.endpoint);
            Some(Arc::new(directory))
        }
        None => {
            warn!("No profile directory configured; requests must supply candidates");
            None
        }
    };

    let cache = CacheManager::new(settings.cache.capacity, settings.cache.ttl_secs);

    info!(
        "Pool cache initialized (capacity: {}, TTL: {}s)",
        settings.cache.capacity, settings.cache.ttl_secs
    );

    let weights = RecommendationWeights::from(&settings.recommendation.weights);
    let recommender = Recommender::new(weights);

    info!("Recommender initialized with weights: {:?}", weights);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    let app_state = AppState {
        recommender,
        directory,
        cache,
        settings: Arc::new(settings),
    };

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
