use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marketing_service::db::{DocumentStore, MongoStore};
use marketing_service::{handlers, AppError, AppState, Config};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    tracing::info!("Starting marketing-service v{}", env!("CARGO_PKG_VERSION"));

    // A missing or unreachable store is never fatal: the public endpoints
    // degrade to their per-route fallbacks instead.
    let store: Option<Arc<dyn DocumentStore>> = match MongoStore::connect(&config.database).await {
        Ok(Some(store)) => {
            tracing::info!("Document store handle initialized");
            Some(Arc::new(store))
        }
        Ok(None) => {
            tracing::warn!(
                "DATABASE_URL/DATABASE_NAME not set; endpoints will serve fallback responses"
            );
            None
        }
        Err(e) => {
            tracing::warn!(
                "Document store initialization failed ({e}); endpoints will serve fallback responses"
            );
            None
        }
    };

    let state = AppState { store };

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        // The marketing form is embedded on arbitrary customer pages.
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::Validation(err.to_string()).into()
            }))
            .route("/", web::get().to(handlers::read_root))
            .route("/test", web::get().to(handlers::test_database))
            .route("/schema", web::get().to(handlers::list_schemas))
            .service(
                web::scope("/api")
                    .route("/channels", web::get().to(handlers::list_channels))
                    .route("/request-demo", web::post().to(handlers::request_demo)),
            )
    })
    .bind(bind_address)?
    .run()
    .await
}
