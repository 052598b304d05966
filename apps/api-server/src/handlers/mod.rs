//! HTTP handlers and route configuration.

mod blog;
mod user;

use actix_web::{error::ErrorBadRequest, web};

/// Configure all application routes.
///
/// `/blog/bulk` must be registered before `/blog/{id}` so "bulk" is matched
/// as the literal segment, not captured as an id.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .route("/", web::get().to(user::hello))
            .route("/signup", web::post().to(user::signup))
            .route("/signin", web::post().to(user::signin)),
    )
    .service(
        web::scope("/blog")
            // A non-UUID id is the client's mistake, not a missing route.
            .app_data(web::PathConfig::default().error_handler(|err, _| ErrorBadRequest(err)))
            .route("/", web::post().to(blog::create))
            .route("/bulk", web::get().to(blog::list))
            .route("/{id}", web::put().to(blog::update))
            .route("/{id}", web::get().to(blog::get)),
    );
}
