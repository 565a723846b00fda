use crate::services::errors::AppError;
use base64::Engine;
use std::path::Path;

/// Reads an attached photo and embeds it as a base64 data URI, the
/// representation the report slot stores. Content is not inspected;
/// only presence and readability matter here.
pub fn to_data_uri(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path).map_err(AppError::ImageRead)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:{};base64,{}", mime_for_extension(path), encoded))
}

fn mime_for_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_data_uri_with_mime_from_extension() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("evidence.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();
        let uri = to_data_uri(&path).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn jpeg_extensions_normalize_to_one_mime() {
        let tmp = tempfile::TempDir::new().unwrap();
        for name in ["a.jpg", "b.JPEG"] {
            let path = tmp.path().join(name);
            std::fs::write(&path, b"jpegdata").unwrap();
            let uri = to_data_uri(&path).unwrap();
            assert!(uri.starts_with("data:image/jpeg;base64,"), "{name}");
        }
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("evidence.bin");
        std::fs::write(&path, b"blob").unwrap();
        let uri = to_data_uri(&path).unwrap();
        assert!(uri.starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn unreadable_photo_is_an_image_read_error() {
        let err = to_data_uri(Path::new("/nonexistent/evidence.png")).unwrap_err();
        assert_eq!(err.code(), "IMAGE_READ");
    }
}
