use crate::ServiceError;

/// Maximum image size (20MB)
pub const MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;

/// Every JPEG starts with an SOI marker followed by another marker.
const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Reject empty, oversized and non-JPEG payloads.
pub fn check_jpeg(data: &[u8]) -> Result<(), ServiceError> {
    if data.is_empty() {
        return Err(ServiceError::InvalidInput("empty image".into()));
    }
    if data.len() > MAX_IMAGE_BYTES {
        return Err(ServiceError::InvalidInput(format!(
            "image too large: {} bytes (max {MAX_IMAGE_BYTES})",
            data.len()
        )));
    }
    if !data.starts_with(&JPEG_MAGIC) {
        return Err(ServiceError::InvalidInput(
            "unsupported image format: only JPEG is accepted".into(),
        ));
    }
    Ok(())
}
