//! HTTP handlers and route configuration.

mod auth;
mod blogs;
mod health;

use actix_web::{Responder, web};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root)).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/auth")
                    .route("/signup", web::post().to(auth::signup))
                    .route("/login", web::post().to(auth::login)),
            )
            .service(
                web::scope("/blogs")
                    .route("", web::post().to(blogs::create_blog))
                    .route("", web::get().to(blogs::list_blogs))
                    .route("/user/blogs", web::get().to(blogs::user_blogs))
                    .route("/{id}", web::get().to(blogs::get_blog))
                    .route("/{id}", web::put().to(blogs::update_blog))
                    .route("/{id}", web::delete().to(blogs::delete_blog))
                    .route("/{id}/publish", web::patch().to(blogs::publish_blog)),
            ),
    );
}

/// Default route.
async fn root() -> impl Responder {
    "Blog API is up and running."
}
