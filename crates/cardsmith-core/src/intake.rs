//! Image intake: turn a picked local file into an embeddable [`ImageRef`].

use std::path::Path;

use base64::Engine;

use crate::error::{CardError, CardResult};
use crate::state::ImageRef;

/// Result of one intake request. Exactly one is produced per call.
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeOutcome {
    /// The file was read and encoded
    Loaded(ImageRef),
    /// The caller asked to clear the slot
    Cleared,
    /// The file could not be read; the slot should stay as it was
    Failed(String),
}

/// Encode raw file bytes as a `data:` URI.
///
/// The MIME type is sniffed from the bytes, then guessed from the file
/// extension. Unknown content is still accepted.
pub fn image_ref_from_bytes(bytes: &[u8], hint: Option<&Path>) -> ImageRef {
    let mime = sniff_mime(bytes, hint);
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    ImageRef::from_data_uri(format!("data:{};base64,{}", mime, payload))
}

fn sniff_mime(bytes: &[u8], hint: Option<&Path>) -> &'static str {
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type();
    }
    hint.and_then(|path| image::ImageFormat::from_path(path).ok())
        .map(|format| format.to_mime_type())
        .or_else(|| {
            let ext = hint?.extension()?.to_str()?.to_ascii_lowercase();
            (ext == "svg").then_some("image/svg+xml")
        })
        .unwrap_or("application/octet-stream")
}

/// Read an image file and encode it.
pub async fn load_image(path: &Path) -> CardResult<ImageRef> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CardError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Loaded image");
    Ok(image_ref_from_bytes(&bytes, Some(path)))
}

/// Run one intake request. `None` means the user cleared the slot.
pub async fn intake(path: Option<&Path>) -> IntakeOutcome {
    let Some(path) = path else {
        return IntakeOutcome::Cleared;
    };
    match load_image(path).await {
        Ok(image) => IntakeOutcome::Loaded(image),
        Err(e) => {
            tracing::warn!("Image intake failed: {}", e);
            IntakeOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // 8-byte PNG signature is enough for format sniffing.
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn sniffs_png_from_bytes() {
        let image = image_ref_from_bytes(PNG_MAGIC, None);
        assert!(image.as_str().starts_with("data:image/png;base64,"));
        assert_eq!(image.mime(), Some("image/png"));
    }

    #[test]
    fn falls_back_to_extension_then_octet_stream() {
        let jpeg = image_ref_from_bytes(b"garbage", Some(Path::new("photo.JPG")));
        assert_eq!(jpeg.mime(), Some("image/jpeg"));

        let svg = image_ref_from_bytes(b"<svg/>", Some(Path::new("logo.svg")));
        assert_eq!(svg.mime(), Some("image/svg+xml"));

        let unknown = image_ref_from_bytes(b"garbage", Some(Path::new("notes.txt")));
        assert_eq!(unknown.mime(), Some("application/octet-stream"));
    }

    #[test]
    fn payload_is_base64_of_bytes() {
        let image = image_ref_from_bytes(b"hello", Some(Path::new("x.bin")));
        assert!(image.as_str().ends_with(";base64,aGVsbG8="));
    }

    #[tokio::test]
    async fn intake_reads_file() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(PNG_MAGIC).unwrap();

        match intake(Some(file.path())).await {
            IntakeOutcome::Loaded(image) => assert_eq!(image.mime(), Some("image/png")),
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn intake_clear_and_failure() {
        assert_eq!(intake(None).await, IntakeOutcome::Cleared);

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        assert!(matches!(intake(Some(&missing)).await, IntakeOutcome::Failed(_)));
        assert!(matches!(
            load_image(&missing).await,
            Err(CardError::ImageRead { .. })
        ));
    }
}
