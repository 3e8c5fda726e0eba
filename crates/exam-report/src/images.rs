//! Picture preparation for embedding.

use std::io::Cursor;

use exam_docx::Picture;
use exam_model::ImageBlob;
use image::{GenericImageView, ImageFormat};
use tracing::debug;

use crate::error::ImageEmbedError;

/// Validates `blob` and sizes it to `width_cm`.
///
/// PNG bytes are embedded unchanged. Every other decodable format is
/// re-encoded as PNG.
pub fn prepare_picture(blob: &ImageBlob, width_cm: f64) -> Result<Picture, ImageEmbedError> {
    if blob.is_empty() {
        return Err(ImageEmbedError::Empty);
    }

    let format = image::guess_format(&blob.bytes)
        .map_err(|error| ImageEmbedError::Decode(error.to_string()))?;
    let decoded = image::load_from_memory_with_format(&blob.bytes, format).map_err(|error| {
        match error {
            image::ImageError::Unsupported(_) => {
                ImageEmbedError::UnsupportedFormat(format_name(format))
            }
            other => ImageEmbedError::Decode(other.to_string()),
        }
    })?;
    let (width, height) = decoded.dimensions();

    let png = if format == ImageFormat::Png {
        blob.bytes.clone()
    } else {
        let mut buffer = Cursor::new(Vec::new());
        decoded
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|error| ImageEmbedError::UnsupportedFormat(error.to_string()))?;
        debug!(
            from = %format_name(format),
            bytes = buffer.get_ref().len(),
            "re-encoded picture as PNG"
        );
        buffer.into_inner()
    };

    Ok(Picture::png(png, width, height).fit_width_cm(width_cm))
}

fn format_name(format: ImageFormat) -> String {
    format!("{format:?}").to_lowercase()
}
