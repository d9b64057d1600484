//! HTTP handlers and route configuration.

mod blog;
mod config_check;
mod health;
mod home;
mod pages;
mod search;


use actix_web::web;

use crate::middleware::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed query strings get the same problem body as handler errors.
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );

    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/config", web::get().to(config_check::config_check))
            .route("/home", web::get().to(home::home))
            .service(
                web::scope("/blog")
                    .route("", web::get().to(blog::list))
                    .route("/{slug}", web::get().to(blog::detail)),
            )
            .route("/pages/{slug}", web::get().to(pages::detail))
            .route("/search", web::get().to(search::search)),
    );
}
