mod image_dto;

pub use image_dto::{
    validate_image_url_extension, ImageResponseDto, SubmitImageDto, ALLOWED_IMAGE_EXTENSIONS,
};
