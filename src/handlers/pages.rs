// src/handlers/pages.rs
use actix_files::{ Files, NamedFile };
use actix_web::{ web, HttpRequest };
use log::warn;
use std::path::Path;
use crate::config::Config;

/// Route path and the file under the public directory it serves.
pub const PAGES: [(&str, &str); 6] = [
    ("/", "index.html"),
    ("/about", "about.html"),
    ("/howtoinstall", "howtoinstall.html"),
    ("/reviews", "reviews.html"),
    ("/review_sent", "review_sent.html"),
    ("/serverbrowser", "serverbrowser.html"),
];

pub fn page_file(path: &str) -> Option<&'static str> {
    PAGES.iter()
        .find(|(route, _)| *route == path)
        .map(|(_, file)| *file)
}

pub async fn serve_page(
    req: HttpRequest,
    config: web::Data<Config>
) -> actix_web::Result<NamedFile> {
    let file = page_file(req.path()).ok_or_else(|| {
        actix_web::error::ErrorNotFound("Page not found")
    })?;

    let full_path = config.public_dir.join(file);
    NamedFile::open_async(&full_path).await.map_err(|e| {
        warn!("Could not read page {}: {}", full_path.display(), e);
        e.into()
    })
}

/// Everything else under the public directory, by file path. Must be
/// registered after the API and page routes since it claims `/`.
pub fn static_files(public_dir: &Path) -> Files {
    Files::new("/", public_dir)
}
