use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use heartmatch::config::{LoggingSettings, Settings};
use heartmatch::routes::{self, AppState};
use heartmatch::services::{ProfileCatalog, SessionStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Configuration comes first so logging can honor it
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting HeartMatch discovery service...");

    let catalog = match ProfileCatalog::from_settings(&settings.data) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            error!("Failed to load profile dataset: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e));
        }
    };

    info!(
        "Profile catalog loaded ({} profiles, {} interests, {} messages)",
        catalog.len(),
        catalog.interests().len(),
        catalog.messages().len()
    );

    let sessions = Arc::new(SessionStore::new(
        settings.session.max_sessions,
        settings.session.ttl_secs,
    ));

    info!(
        "Session store initialized (capacity: {}, TTL: {}s)",
        settings.session.max_sessions, settings.session.ttl_secs
    );

    if let Some(seed) = settings.suggestions.seed {
        info!("Suggestion sampling seeded with {}", seed);
    }

    // Build application state
    let app_state = AppState::new(catalog, sessions, &settings);

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
