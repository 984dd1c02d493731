use actix_web::{middleware, App, HttpServer};
use tracing::info;
use tracing_subscriber::util::SubscriberInitExt; // <- needed for .try_init()
use tracing_subscriber::{fmt, EnvFilter};

use seo_worker::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Logging
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .finish()
        .try_init();

    // Config
    let addr = std::env::var("SEO_WORKER_BIND").unwrap_or_else(|_| "0.0.0.0:3000".into());

    info!("🌐 seo worker listening on {}", addr);
    HttpServer::new(|| {
        App::new()
            .app_data(routes::json_config())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
    })
    .bind(addr)?
    .run()
    .await
}
