// src/handlers/mod.rs
pub mod pages;
pub mod reviews;
pub mod servers;

use actix_web::{ middleware::DefaultHeaders, web };
use crate::utils::RequestError;

/// Registers every route of the service.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig
            ::default()
            .error_handler(|err, _req| RequestError::InvalidBody(err.to_string()).into())
    )
        .app_data(
            web::QueryConfig
                ::default()
                .error_handler(|err, _req| RequestError::InvalidBody(err.to_string()).into())
        )
        .route("/servers", web::get().to(servers::get_servers))
        .route("/server", web::get().to(servers::get_server))
        .route("/server", web::post().to(servers::upsert_server))
        .route("/server", web::delete().to(servers::delete_server))
        .route("/reviews/list", web::get().to(reviews::list_reviews))
        .route(
            "/reviews/author={author}/content={content}/rating={rating}",
            web::post().to(reviews::save_review)
        );

    for (path, _) in pages::PAGES {
        cfg.route(path, web::get().to(pages::serve_page));
    }
}

/// Allow any origin to call the API.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}
