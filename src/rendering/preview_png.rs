use mosaic_dither::PixelBuffer;
use std::io::Cursor;

use crate::error::MosaicError;

/// Encode a preview raster as an 8-bit RGB PNG.
///
/// The image is written with fast settings and then re-compressed with
/// oxipng. If optimization fails the unoptimized PNG is returned.
pub fn encode_preview(preview: &PixelBuffer) -> Result<Vec<u8>, MosaicError> {
    let png_bytes = encode_png(preview)?;

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    );
    match optimized {
        Ok(bytes) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = bytes.len(),
                "Optimized preview PNG"
            );
            Ok(bytes)
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
            Ok(png_bytes)
        }
    }
}

fn encode_png(preview: &PixelBuffer) -> Result<Vec<u8>, MosaicError> {
    let width = u32::try_from(preview.width())
        .map_err(|_| MosaicError::PngEncode(format!("width {} too large", preview.width())))?;
    let height = u32::try_from(preview.height())
        .map_err(|_| MosaicError::PngEncode(format!("height {} too large", preview.height())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| MosaicError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(preview.as_bytes())
            .map_err(|e| MosaicError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
