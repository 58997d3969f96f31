use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Runs of characters that are not allowed in a slug.
    /// Each run collapses to a single hyphen.
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Normalize a human-readable title into a filesystem- and URL-safe slug.
/// - "My Photo!!" -> "my-photo"
/// - "  Sunset,  2026  " -> "sunset-2026"
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Extract the lowercased substring after the last literal dot of a URL.
/// Returns None when the URL contains no dot.
pub fn extension_from_url(url: &str) -> Option<String> {
    url.rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("My Photo!!"), "my-photo");
        assert_eq!(slugify("Sunset over the harbour"), "sunset-over-the-harbour");
        assert_eq!(slugify("  Sunset,  2026  "), "sunset-2026");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn test_slugify_degenerate_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_extension_from_url_lowercases() {
        assert_eq!(
            extension_from_url("http://host/pic.JPG"),
            Some("jpg".to_string())
        );
        assert_eq!(
            extension_from_url("http://host/photo.jpeg"),
            Some("jpeg".to_string())
        );
    }

    #[test]
    fn test_extension_from_url_takes_last_dot() {
        assert_eq!(
            extension_from_url("http://host/archive.tar.png"),
            Some("png".to_string())
        );
        // A dot in the host still counts as a dot.
        assert_eq!(
            extension_from_url("http://example.com/img"),
            Some("com/img".to_string())
        );
    }

    #[test]
    fn test_extension_from_url_no_dot() {
        assert_eq!(extension_from_url("http://imagehost/photo"), None);
        assert_eq!(extension_from_url(""), None);
    }

    #[test]
    fn test_extension_from_url_trailing_dot() {
        assert_eq!(extension_from_url("http://host/pic."), Some(String::new()));
    }
}
