//! HTTP inbound adapter exposing the REST endpoints and landing page.

pub mod error;
pub mod exercises;
pub mod health;
pub mod pages;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Register the `/api` scope.
///
/// Handlers expect `web::Data<HttpState>` to be registered on the app.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(users::create_user)
            .service(users::list_users)
            .service(exercises::add_exercise)
            .service(exercises::exercise_log),
    );
}

/// Register the landing page and its stylesheet.
pub fn configure_pages(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::index).service(pages::stylesheet);
}
