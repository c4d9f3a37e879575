//! OpenAPI document generated from the handler annotations.
//!
//! The served document is normally the static `swagger.json`; this one is the
//! fallback when that file is missing or unparsable, and the reference the
//! static file is checked against in tests.

use utoipa::OpenApi;

use crate::model::{
    api::{ErrorDto, LogTestDto, ResponseStatus},
    bird::{BirdDto, BirdInputDto},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Birds World API",
        version = "1.0.0",
        description = "CRUD interface for the bird registry."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::server::controller::bird::get_all_birds,
        crate::server::controller::bird::create_bird,
        crate::server::controller::bird::get_bird_by_id,
        crate::server::controller::bird::update_bird,
        crate::server::controller::bird::delete_bird,
        crate::server::controller::diagnostics::test_logging,
    ),
    components(schemas(BirdDto, BirdInputDto, ErrorDto, LogTestDto, ResponseStatus)),
    tags(
        (name = "birds", description = "Bird registry operations"),
        (name = "diagnostics", description = "Logging pipeline checks")
    )
)]
pub struct ApiDoc;
