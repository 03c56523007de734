pub mod utils;
pub mod model;
pub mod store;
mod routes;
mod middleware;

use tracing::info;
use dotenv::dotenv;
use std::{sync::Arc, time::Duration};
use middleware::{request_body_log, request_id, response_log};
use tracing_subscriber::{prelude::*, EnvFilter};
use store::{CustomerStore, InMemoryCustomerStore, MongoCustomerStore, StoreKind};
use actix_web::{App, HttpServer, body::MessageBody, dev::{ServiceFactory, ServiceRequest, ServiceResponse}, http::KeepAlive, web};
use utils::{config::{Configuration, default_env}, context::InitialisationContext, errors::{configure_json_extractor, InternalError}};
use routes::{admin::{health, settings, tracer}, create_customer, delete_customer, get_customer, get_customers, index, update_customer};

pub const APP_NAME: &str = "Customers"; // Keep in sync with cargo.toml

///
/// The HTTP endpoints are wired-in here.
///
fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Admin/internal
        .route("/health", web::get().to(health::handle))
        .route("/settings", web::get().to(settings::handle))
        .route("/tracer/on", web::post().to(tracer::handle_on))
        .route("/tracer/off", web::post().to(tracer::handle_off))

        // Greeting
        .route("/", web::get().to(index::handle))

        // Customers
        .route("/customers", web::post().to(create_customer::handle))
        .route("/customers", web::get().to(get_customers::handle))
        .route("/customers/{id}", web::get().to(get_customer::handle))
        .route("/customers/{id}", web::put().to(update_customer::handle))
        .route("/customers/{id}", web::delete().to(delete_customer::handle));
}

///
/// Initialise config, tracing and the customer store, then start the HTTP server.
///
/// Called from main.rs. The split from binary to library means we can write integration tests
/// in the /tests folder which can call various public methods in this file to create the service
/// with near-identical set-up as the runtime instance.
///
pub async fn lib_main() -> Result<(), std::io::Error> {
    let init_ctx = Arc::new(init_everything().await?);
    let server_cfg = init_ctx.config().clone();
    let server_ctx = init_ctx.clone();

    // Start the HTTP server now, spawning an App for each worker thread.
    HttpServer::new(move || app(server_ctx.clone()))
        .bind(("0.0.0.0", server_cfg.port))?
        .keep_alive(keep_alive(&server_cfg))
        .client_request_timeout(Duration::from_secs(server_cfg.client_timeout))
        .run()
        .await?;

    // The server has stopped - let the store release its connections.
    init_ctx.store().shutdown().await;
    Ok(())
}

///
/// Initialise configuration and tracing, then connect to the customer store.
///
/// Return a context object which can be passed into HTTP request handlers to access config and
/// the store.
///
pub async fn init_everything() -> Result<InitialisationContext, InternalError> {
    // Load any local dev settings as environment variables from a .env file.
    dotenv().ok();

    // Default log level to INFO if it's not specified.
    default_env("RUST_LOG", "INFO");

    // Load the service configuration into struct and initialise any lazy statics.
    let config = Configuration::from_env()?;

    init_tracing();

    info!("{}\n{}", BANNER, config.fmt_console()?);

    init_context(config).await
}

///
/// Create the configured customer store and wrap it, and the config, in a context.
///
/// For MongoDB this connects and pings the deployment before returning.
///
pub async fn init_context(config: Configuration) -> Result<InitialisationContext, InternalError> {
    let store: Arc<dyn CustomerStore> = match config.store {
        StoreKind::Mongo => Arc::new(MongoCustomerStore::connect(APP_NAME, &config).await?),
        StoreKind::Memory => {
            info!("Customers are held in memory and will be lost when the service stops");
            Arc::new(InMemoryCustomerStore::new())
        },
    };

    Ok(InitialisationContext::new(store, config))
}

///
/// Initialise tracing with the level taken from the RUST_LOG env variable.
///
fn init_tracing() {
    if let Err(err) = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init() {
            info!("Tracing already initialised: {}", err); // Allowed error here - tests call this fn repeatedly.
    }
}

fn keep_alive(config: &Configuration) -> KeepAlive {
    match config.keep_alive {
        Some(seconds) if seconds > 0 => KeepAlive::Timeout(Duration::from_secs(seconds)),
        _ => KeepAlive::Disabled,
    }
}

///
/// Create a configured actix_web App with configured middleware, data and routes.
///
pub fn app(ctx: Arc<InitialisationContext>) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = ()>> {

    App::new()
        .wrap(request_body_log::Logging)
        .wrap(response_log::Logging)
        .wrap(request_id::Middleware::new(ctx.clone()))

        // Ensure all endpoints return detailed Json request parse errors.
        .app_data(configure_json_extractor())

        // Add the routes to this root url path.
        .service(web::scope(&ctx.config().base_url).configure(configure_routes))
}

const BANNER: &str = r#"
   ______           __
  / ____/_  _______/ /_____  ____ ___  ___  __________   Rust
 / /   / / / / ___/ __/ __ \/ __ `__ \/ _ \/ ___/ ___/   MongoDB
/ /___/ /_/ (__  ) /_/ /_/ / / / / / /  __/ /  (__  )    Actix Web
\____/\__,_/____/\__/\____/_/ /_/ /_/\___/_/  /____/
"#;
