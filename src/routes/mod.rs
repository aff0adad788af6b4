// Route exports
pub mod error;
pub mod universities;

use actix_web::web;

pub use error::ApiError;
pub use universities::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(error::handle_query_payload_error))
        .route("/", web::get().to(universities::home))
        .route("/health", web::get().to(universities::health_check))
        .service(web::scope("/api").configure(universities::configure))
        .default_service(web::route().to(universities::not_found));
}
