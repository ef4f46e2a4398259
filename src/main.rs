// src/main.rs
mod config;
mod models;
mod handlers;
mod storage;
mod utils;

use actix_web::{ web, App, HttpServer };
use env_logger::Env;
use log::{ error, info };
use storage::memory::ServerStorage;
use storage::reviews::ReviewStore;
use crate::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    // Initialize logger only once at the start
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();

    let reviews = match ReviewStore::connect(&config.database_url).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open review database {}: {}", config.database_url, e);
            return Err(
                std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to open review database: {}", e)
                )
            );
        }
    };

    let bind = config.bind();
    let public_dir = config.public_dir.clone();
    let storage = web::Data::new(ServerStorage::new());
    let reviews = web::Data::new(reviews);
    let config = web::Data::new(config);

    info!("Starting server on {}", bind);
    HttpServer::new(move || {
        App::new()
            .wrap(handlers::cors_headers())
            .app_data(storage.clone())
            .app_data(reviews.clone())
            .app_data(config.clone())
            .configure(handlers::configure_routes)
            .service(handlers::pages::static_files(&public_dir))
    })
        .bind(&bind)?
        .run().await
}
