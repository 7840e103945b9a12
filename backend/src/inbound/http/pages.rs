//! Landing page and its stylesheet, compiled into the binary.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get};

const INDEX_HTML: &str = include_str!("../../../static/index.html");
const STYLE_CSS: &str = include_str!("../../../static/style.css");

/// Landing page with forms for creating users and logging exercises.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

/// Stylesheet referenced by the landing page.
#[get("/public/style.css")]
pub async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/css; charset=utf-8"))
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(STYLE_CSS)
}
