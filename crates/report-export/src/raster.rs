//! Page capture seam
//!
//! The layout engine produces markup; turning that markup into pixels is
//! the host's job (a browser canvas, a headless renderer, or pre-captured
//! files). This module defines the contract and decodes what comes back.

use std::io::Cursor;

use async_trait::async_trait;
use report_layout::{Page, PageSize};

use crate::error::{ExportError, RasterError};

/// Default device pixel ratio for captures
pub const DEFAULT_SCALE: f32 = 2.0;

/// One page handed to a rasterizer
#[derive(Debug, Clone, PartialEq)]
pub struct PageRegion {
    /// 0-based position in the export sequence
    pub index: usize,
    pub page_number: usize,
    pub markup: String,
    pub width_mm: f64,
    pub height_mm: f64,
    /// Device pixel ratio to capture at
    pub scale: f32,
}

impl PageRegion {
    pub fn from_page(index: usize, page: &Page, size: PageSize, scale: f32) -> Self {
        Self {
            index,
            page_number: page.number,
            markup: page.markup.clone(),
            width_mm: size.width_mm,
            height_mm: size.height_mm,
            scale,
        }
    }
}

/// PNG-encoded capture of one page, on a white background
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub png: Vec<u8>,
}

impl RasterImage {
    pub fn from_png(png: Vec<u8>) -> Self {
        Self { png }
    }
}

/// Captures a page region as an image
///
/// Captures may be slow and are awaited one at a time. Implementations
/// backed by browser APIs are not `Send`.
#[async_trait(?Send)]
pub trait Rasterizer {
    async fn capture(&self, region: &PageRegion) -> Result<RasterImage, RasterError>;
}

/// Decoded 8-bit RGB pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbPixels {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Decode a PNG into opaque RGB, compositing any alpha onto white
pub fn decode_png(bytes: &[u8]) -> Result<RgbPixels, ExportError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| ExportError::ImageDecode(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ExportError::ImageDecode(e.to_string()))?;
    buf.truncate(info.buffer_size());

    if info.width == 0 || info.height == 0 {
        return Err(ExportError::ImageDecode("image has no pixels".into()));
    }

    let pixel_count = info.width as usize * info.height as usize;
    let mut data = Vec::with_capacity(pixel_count * 3);
    match info.color_type {
        png::ColorType::Rgb => data = buf,
        png::ColorType::Rgba => {
            for px in buf.chunks_exact(4) {
                let alpha = px[3];
                data.extend_from_slice(&[
                    over_white(px[0], alpha),
                    over_white(px[1], alpha),
                    over_white(px[2], alpha),
                ]);
            }
        }
        png::ColorType::Grayscale => {
            for &g in &buf {
                data.extend_from_slice(&[g, g, g]);
            }
        }
        png::ColorType::GrayscaleAlpha => {
            for px in buf.chunks_exact(2) {
                let g = over_white(px[0], px[1]);
                data.extend_from_slice(&[g, g, g]);
            }
        }
        png::ColorType::Indexed => {
            return Err(ExportError::ImageDecode(
                "palette image was not expanded".into(),
            ))
        }
    }

    if data.len() != pixel_count * 3 {
        return Err(ExportError::ImageDecode(format!(
            "expected {} bytes of RGB, got {}",
            pixel_count * 3,
            data.len()
        )));
    }

    Ok(RgbPixels {
        width: info.width,
        height: info.height,
        data,
    })
}

fn over_white(channel: u8, alpha: u8) -> u8 {
    let c = channel as u16;
    let a = alpha as u16;
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

/// Encode RGB or RGBA pixels as PNG; used by capture backends and tests
pub fn encode_png(width: u32, height: u32, rgba: bool, data: &[u8]) -> Result<Vec<u8>, RasterError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(if rgba {
            png::ColorType::Rgba
        } else {
            png::ColorType::Rgb
        });
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RasterError::new(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| RasterError::new(e.to_string()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rgb() {
        let png = encode_png(2, 1, false, &[255, 0, 0, 0, 0, 255]).unwrap();
        let pixels = decode_png(&png).unwrap();
        assert_eq!((pixels.width, pixels.height), (2, 1));
        assert_eq!(pixels.data, vec![255, 0, 0, 0, 0, 255]);
    }

    #[test]
    fn test_transparent_pixels_become_white() {
        let png = encode_png(1, 1, true, &[0, 0, 0, 0]).unwrap();
        let pixels = decode_png(&png).unwrap();
        assert_eq!(pixels.data, vec![255, 255, 255]);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = decode_png(b"not a png").unwrap_err();
        assert!(matches!(err, ExportError::ImageDecode(_)));
    }
}
