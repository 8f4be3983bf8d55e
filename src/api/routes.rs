use actix_web::web;

use super::handlers::{appointments, health, invoices, medications, patients, treatments, users, visitors};
use super::middleware;

/// Register every endpoint and the extractor configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(middleware::json_config())
        .app_data(middleware::query_config())
        .route("/health", web::get().to(health::health))
        .route("/users", web::get().to(users::list))
        .service(
            web::resource("/patients")
                .route(web::get().to(patients::list))
                .route(web::post().to(patients::create)),
        )
        .service(
            web::resource("/patients/{id}")
                .route(web::get().to(patients::get))
                .route(web::put().to(patients::update))
                .route(web::delete().to(patients::delete)),
        )
        .service(
            web::resource("/appointments")
                .route(web::get().to(appointments::list))
                .route(web::post().to(appointments::create)),
        )
        .service(
            web::resource("/appointments/{id}")
                .route(web::get().to(appointments::get))
                .route(web::put().to(appointments::update))
                .route(web::delete().to(appointments::delete)),
        )
        .service(
            web::resource("/treatments")
                .route(web::get().to(treatments::list))
                .route(web::post().to(treatments::create)),
        )
        .service(
            web::resource("/treatments/{id}")
                .route(web::get().to(treatments::get))
                .route(web::put().to(treatments::update))
                .route(web::delete().to(treatments::delete)),
        )
        .service(
            web::resource("/treatments/{id}/medications")
                .route(web::get().to(treatments::list_medications))
                .route(web::post().to(treatments::prescribe)),
        )
        .service(
            web::resource("/invoices")
                .route(web::get().to(invoices::list))
                .route(web::post().to(invoices::create)),
        )
        .service(
            web::resource("/invoices/{id}")
                .route(web::get().to(invoices::get))
                .route(web::put().to(invoices::update))
                .route(web::delete().to(invoices::delete)),
        )
        .service(
            web::resource("/medications")
                .route(web::get().to(medications::list))
                .route(web::post().to(medications::create)),
        )
        .service(
            web::resource("/medications/{id}")
                .route(web::get().to(medications::get))
                .route(web::put().to(medications::update))
                .route(web::delete().to(medications::delete)),
        )
        .service(
            web::resource("/visitors")
                .route(web::get().to(visitors::list))
                .route(web::post().to(visitors::create)),
        )
        .service(
            web::resource("/visitors/{id}")
                .route(web::get().to(visitors::get))
                .route(web::put().to(visitors::update))
                .route(web::delete().to(visitors::delete)),
        );
}
