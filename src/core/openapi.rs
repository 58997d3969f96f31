use utoipa::{Modify, OpenApi};

use crate::features::images::{dtos as images_dtos, handlers as images_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Images
        images_handlers::submit_image,
        images_handlers::get_image,
        images_handlers::list_images,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Images
            images_dtos::SubmitImageDto,
            images_dtos::ImageResponseDto,
            ApiResponse<images_dtos::ImageResponseDto>,
            ApiResponse<Vec<images_dtos::ImageResponseDto>>,
        )
    ),
    tags(
        (name = "images", description = "Image submission by URL"),
    ),
    info(
        title = "Imagemark API",
        version = "0.1.0",
        description = "API documentation for Imagemark",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
