use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::shared::validation::extension_from_url;

/// URL extensions accepted for submitted images
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Request DTO for submitting an image by URL
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SubmitImageDto {
    /// Title for the image
    #[validate(length(
        min = 1,
        max = 200,
        message = "title must be between 1 and 200 characters"
    ))]
    #[schema(example = "Sunset over the harbour")]
    pub title: String,

    /// HTTP(S) URL of the image to download
    #[validate(url(message = "Invalid URL format"))]
    #[validate(custom(function = validate_image_url_extension))]
    #[schema(example = "https://example.com/photos/sunset.jpg")]
    pub url: String,

    /// Optional description
    pub description: Option<String>,
}

/// Response DTO for image operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImageResponseDto {
    /// Unique identifier for the image
    pub id: Uuid,
    /// Title as submitted
    pub title: String,
    /// Slug derived from the title
    pub slug: String,
    /// Source URL the image was downloaded from
    pub url: String,
    /// Description as submitted
    pub description: Option<String>,
    /// Derived file name ({slug}.{extension})
    pub file_name: String,
    /// URL the stored image is served from
    pub file_url: String,
    /// Size of the downloaded image in bytes
    pub file_size: i64,
    /// Timestamp when the image was submitted
    pub created_at: DateTime<Utc>,
}

/// Check that the URL's post-dot suffix is an accepted image extension.
/// A URL with no dot at all fails the same way.
pub fn validate_image_url_extension(url: &str) -> Result<(), ValidationError> {
    match extension_from_url(url) {
        Some(extension) if ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) => Ok(()),
        _ => Err(ValidationError::new("image_extension").with_message(Cow::Borrowed(
            "The given url does not match valid image extensions.",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(title: &str, url: &str) -> SubmitImageDto {
        SubmitImageDto {
            title: title.to_string(),
            url: url.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_accepts_allowed_extensions() {
        for url in [
            "http://host/pic.jpg",
            "http://host/pic.jpeg",
            "http://host/pic.png",
            "http://host/pic.JPG",
            "http://host/pic.PNG",
        ] {
            let dto = dto("A title", url);
            assert!(dto.validate().is_ok(), "expected {} to validate", url);
            // The url field is carried through unchanged.
            assert_eq!(dto.url, url);
        }
    }

    #[test]
    fn test_rejects_other_extensions() {
        for url in ["http://host/pic.gif", "http://host/notes.txt"] {
            let result = dto("A title", url).validate();
            let errors = result.unwrap_err();
            assert!(
                errors.field_errors().contains_key("url"),
                "expected a url-keyed error for {}",
                url
            );
        }
    }

    #[test]
    fn test_rejects_dotless_url() {
        // A URL without any dot is a validation failure, not a fault.
        let result = dto("A title", "http://imagehost/photo").validate();
        let errors = result.unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_rejects_empty_title() {
        let result = dto("", "http://host/pic.jpg").validate();
        let errors = result.unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_rejects_non_url_input() {
        let result = dto("A title", "not a url.jpg").validate();
        let errors = result.unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }
}
