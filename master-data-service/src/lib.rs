//! Master Data Service - read-only access to the `master` collection.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod startup;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::master_data::fetch_master_data,
        handlers::health::health_check,
    ),
    components(schemas(dtos::MessageResponse, dtos::ErrorResponse)),
    tags(
        (name = "Master Data", description = "Documents of the master collection"),
        (name = "Observability", description = "Service health"),
    )
)]
pub struct ApiDoc;
