//! HCP Service - read-only access to the `hcp` and `referal` collections.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod startup;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::collections::fetch_hcp_data,
        handlers::collections::fetch_referal_data,
        handlers::collections::api_test,
        handlers::health::health_check,
    ),
    components(schemas(dtos::MessageResponse, dtos::ErrorResponse)),
    tags(
        (name = "HCP Data", description = "Documents of the hcp and referal collections"),
        (name = "Observability", description = "Service health and liveness"),
    )
)]
pub struct ApiDoc;
