//! Image submission handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::images::dtos::{ImageResponseDto, SubmitImageDto};
use crate::features::images::services::ImageService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Submit an image by URL
///
/// Validates the submitted metadata, downloads the image from the given
/// URL and stores it together with a database record.
#[utoipa::path(
    post,
    path = "/api/images",
    request_body = SubmitImageDto,
    responses(
        (status = 201, description = "Image submitted successfully", body = ApiResponse<ImageResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 502, description = "Image could not be downloaded")
    ),
    tag = "images"
)]
pub async fn submit_image(
    State(service): State<Arc<ImageService>>,
    AppJson(dto): AppJson<SubmitImageDto>,
) -> Result<(StatusCode, Json<ApiResponse<ImageResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let result = service.create(dto, true).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(result),
            Some("Image submitted successfully".to_string()),
            None,
        )),
    ))
}

/// Get image by ID
#[utoipa::path(
    get,
    path = "/api/images/{id}",
    params(
        ("id" = Uuid, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Image found", body = ApiResponse<ImageResponseDto>),
        (status = 404, description = "Image not found")
    ),
    tag = "images"
)]
pub async fn get_image(
    State(service): State<Arc<ImageService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ImageResponseDto>>> {
    let image = service.get(id).await?;

    Ok(Json(ApiResponse::success(Some(image), None, None)))
}

/// List submitted images
///
/// Returns images newest-first with a total count in the meta envelope.
#[utoipa::path(
    get,
    path = "/api/images",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of images", body = ApiResponse<Vec<ImageResponseDto>>),
    ),
    tag = "images"
)]
pub async fn list_images(
    State(service): State<Arc<ImageService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ImageResponseDto>>>> {
    let (images, total) = service.list(&pagination).await?;

    Ok(Json(ApiResponse::success(
        Some(images),
        None,
        Some(Meta { total }),
    )))
}
