use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use uni_recommender::config::{LoggingSettings, Settings};
use uni_recommender::core::Recommender;
use uni_recommender::models::ScoringWeights;
use uni_recommender::routes::{self, AppState};
use uni_recommender::services::load_store;

/// Initialize tracing; RUST_LOG takes precedence over the configured level
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_tracing(&settings.logging);

    info!("Starting university recommendation service...");

    // Dataset is loaded once; a missing or invalid file aborts startup
    let store = load_store(&settings.data.path).map_err(|e| {
        error!("Failed to load university dataset: {}", e);
        io::Error::new(io::ErrorKind::InvalidData, e.to_string())
    })?;

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let recommender = Recommender::new(store, weights, settings.recommendation.test_tolerance);

    info!(
        "Recommender initialized with weights: {:?}, test tolerance: {}",
        weights, settings.recommendation.test_tolerance
    );

    let app_state = AppState {
        recommender,
        max_results: settings.recommendation.max_results,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
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
