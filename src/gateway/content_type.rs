/// MIME type for anything the table does not know.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

const CONTENT_TYPES: &[(&str, &str)] = &[
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("txt", "text/plain"),
];

/// Resolve a download content type from the extension of `key`.
///
/// Only the last extension counts and matching is case-insensitive, so
/// `NOTES.TXT` is `text/plain` while `archive.tar.gz` falls back to
/// [`FALLBACK_CONTENT_TYPE`].
pub fn resolve(key: &str) -> &'static str {
    let Some((_, extension)) = key.rsplit_once('.') else {
        return FALLBACK_CONTENT_TYPE;
    };
    let extension = extension.to_ascii_lowercase();

    CONTENT_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(resolve("a.png"), "image/png");
        assert_eq!(resolve("a.jpg"), "image/jpeg");
        assert_eq!(resolve("a.jpeg"), "image/jpeg");
        assert_eq!(resolve("a.pdf"), "application/pdf");
        assert_eq!(resolve("a.txt"), "text/plain");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(resolve("NOTES.TXT"), "text/plain");
        assert_eq!(resolve("Photo.JpEg"), "image/jpeg");
    }

    #[test]
    fn fallback_for_unknown_or_missing() {
        assert_eq!(resolve("archive.tar.gz"), FALLBACK_CONTENT_TYPE);
        assert_eq!(resolve("README"), FALLBACK_CONTENT_TYPE);
        assert_eq!(resolve(""), FALLBACK_CONTENT_TYPE);
        assert_eq!(resolve("trailing."), FALLBACK_CONTENT_TYPE);
    }

    #[test]
    fn uses_generated_key_extension() {
        let key = "0b4d5d0e-8f0e-4b8a-9a59-2f0a6f3f8f11_report.pdf";
        assert_eq!(resolve(key), "application/pdf");
    }
}
