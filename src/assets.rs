//! Image assets for the document header and signature block.
//!
//! Assets are resolved into an in-memory store before the layout pass
//! begins; the pass itself never performs I/O. Decode failures are
//! reported as errors for the call site to catch and substitute with a
//! placeholder.

use std::collections::HashMap;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::{Error, Result};

/// Raster formats accepted for logo and signature images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

/// Color representation of the pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Gray,
    Rgb,
    /// Palette, alpha, interlaced, 16-bit, or CMYK flavors that cannot
    /// be embedded without a full decoder; callers fall back to a
    /// placeholder.
    Unsupported,
}

/// A raster image: raw file bytes plus the header fields the PDF
/// writer needs.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    /// Container format
    pub format: ImageFormat,
    /// Raw file bytes
    pub data: Vec<u8>,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// Color representation
    pub color: ColorMode,
    /// Bits per component
    pub bit_depth: u8,
}

impl ImageAsset {
    /// Sniff and parse an image from raw file bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Self::parse_png(data)
        } else if data.starts_with(&[0xFF, 0xD8]) {
            Self::parse_jpeg(data)
        } else {
            Err(Error::ImageDecode("unrecognized image format".to_string()))
        }
    }

    /// Parse a `data:image/png;base64,...` or `data:image/jpeg;base64,...` URL.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let rest = url
            .strip_prefix("data:image/png;base64,")
            .or_else(|| url.strip_prefix("data:image/jpeg;base64,"))
            .or_else(|| url.strip_prefix("data:image/jpg;base64,"))
            .ok_or_else(|| {
                Error::ImageDecode("expected a PNG or JPEG data URL".to_string())
            })?;
        let data = BASE64
            .decode(rest.trim())
            .map_err(|e| Error::ImageDecode(format!("base64 payload: {}", e)))?;
        Self::from_bytes(data)
    }

    /// Load an image from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Load an image from a file path without blocking the runtime.
    #[cfg(feature = "async")]
    pub async fn from_file_async<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_bytes(tokio::fs::read(path).await?)
    }

    /// Whether the PDF writer can embed this image directly.
    pub fn embeddable(&self) -> bool {
        match self.format {
            ImageFormat::Jpeg => self.color != ColorMode::Unsupported,
            ImageFormat::Png => self.color != ColorMode::Unsupported && self.bit_depth == 8,
        }
    }

    /// Aspect ratio (width / height).
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Concatenated IDAT payload of a PNG, still zlib-compressed.
    ///
    /// PDF FlateDecode with PNG predictors consumes this directly, so
    /// supported PNGs embed without a decoder crate.
    pub fn png_idat(&self) -> Result<Vec<u8>> {
        if self.format != ImageFormat::Png {
            return Err(Error::ImageDecode("not a PNG".to_string()));
        }
        let mut out = Vec::new();
        let mut pos = 8;
        while pos + 8 <= self.data.len() {
            let len = u32::from_be_bytes([
                self.data[pos],
                self.data[pos + 1],
                self.data[pos + 2],
                self.data[pos + 3],
            ]) as usize;
            let kind = &self.data[pos + 4..pos + 8];
            let body_start = pos + 8;
            let body_end = body_start + len;
            if body_end > self.data.len() {
                break;
            }
            if kind == b"IDAT" {
                out.extend_from_slice(&self.data[body_start..body_end]);
            }
            if kind == b"IEND" {
                break;
            }
            pos = body_end + 4; // skip CRC
        }
        if out.is_empty() {
            return Err(Error::ImageDecode("PNG has no IDAT data".to_string()));
        }
        Ok(out)
    }

    fn parse_png(data: Vec<u8>) -> Result<Self> {
        // IHDR is the first chunk: 8-byte signature, 4-byte length,
        // 4-byte type, then 13 bytes of fields.
        if data.len() < 33 || &data[12..16] != b"IHDR" {
            return Err(Error::ImageDecode("PNG missing IHDR chunk".to_string()));
        }
        let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
        let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
        let bit_depth = data[24];
        let color_type = data[25];
        let interlace = data[28];

        let color = match (color_type, interlace) {
            (0, 0) => ColorMode::Gray,
            (2, 0) => ColorMode::Rgb,
            _ => ColorMode::Unsupported,
        };

        if width == 0 || height == 0 {
            return Err(Error::ImageDecode("PNG has zero dimension".to_string()));
        }

        Ok(Self {
            format: ImageFormat::Png,
            data,
            width,
            height,
            color,
            bit_depth,
        })
    }

    fn parse_jpeg(data: Vec<u8>) -> Result<Self> {
        // Walk the marker segments until a start-of-frame carrying the
        // pixel dimensions.
        let mut pos = 2;
        while pos + 10 < data.len() {
            if data[pos] != 0xFF {
                pos += 1;
                continue;
            }
            let marker = data[pos + 1];
            match marker {
                // SOF0..SOF15, excluding DHT/JPG/DAC
                0xC0..=0xCF if !matches!(marker, 0xC4 | 0xC8 | 0xCC) => {
                    let height = u16::from_be_bytes([data[pos + 5], data[pos + 6]]) as u32;
                    let width = u16::from_be_bytes([data[pos + 7], data[pos + 8]]) as u32;
                    let components = data[pos + 9];
                    if width == 0 || height == 0 {
                        return Err(Error::ImageDecode(
                            "JPEG has zero dimension".to_string(),
                        ));
                    }
                    let color = match components {
                        1 => ColorMode::Gray,
                        3 => ColorMode::Rgb,
                        _ => ColorMode::Unsupported,
                    };
                    return Ok(Self {
                        format: ImageFormat::Jpeg,
                        data,
                        width,
                        height,
                        color,
                        bit_depth: 8,
                    });
                }
                0xD8 | 0x01 | 0xD0..=0xD7 => pos += 2,
                _ => {
                    let len = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
                    pos += 2 + len;
                }
            }
        }
        Err(Error::ImageDecode("JPEG missing frame header".to_string()))
    }
}

/// Named assets resolved ahead of the layout pass.
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    assets: HashMap<String, ImageAsset>,
}

impl AssetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an asset under a name, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, asset: ImageAsset) {
        self.assets.insert(name.into(), asset);
    }

    /// Look up an asset by name.
    pub fn get(&self, name: &str) -> Option<&ImageAsset> {
        self.assets.get(name)
    }

    /// Check whether a name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::png_bytes;
    use super::*;

    #[test]
    fn test_png_dimensions() {
        let asset = ImageAsset::from_bytes(png_bytes(320, 200, 8, 2)).unwrap();
        assert_eq!(asset.format, ImageFormat::Png);
        assert_eq!((asset.width, asset.height), (320, 200));
        assert_eq!(asset.color, ColorMode::Rgb);
        assert!(asset.embeddable());
    }

    #[test]
    fn test_png_palette_not_embeddable() {
        let asset = ImageAsset::from_bytes(png_bytes(8, 8, 8, 3)).unwrap();
        assert_eq!(asset.color, ColorMode::Unsupported);
        assert!(!asset.embeddable());
    }

    #[test]
    fn test_png_idat_extraction() {
        let asset = ImageAsset::from_bytes(png_bytes(4, 4, 8, 0)).unwrap();
        let idat = asset.png_idat().unwrap();
        assert_eq!(idat.len(), 5);
        assert_eq!(idat[0], 0x78);
    }

    #[test]
    fn test_jpeg_dimensions() {
        let mut data = vec![0xFF, 0xD8];
        // APP0 segment
        data.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x10]);
        data.extend_from_slice(&[0u8; 14]);
        // SOF0: len 17, precision 8, height 480, width 640, 3 components
        data.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08, 0x01, 0xE0, 0x02, 0x80, 0x03]);
        data.extend_from_slice(&[0u8; 9]);
        let asset = ImageAsset::from_bytes(data).unwrap();
        assert_eq!(asset.format, ImageFormat::Jpeg);
        assert_eq!((asset.width, asset.height), (640, 480));
        assert_eq!(asset.color, ColorMode::Rgb);
        assert!(asset.embeddable());
    }

    #[test]
    fn test_data_url_roundtrip() {
        let png = png_bytes(10, 10, 8, 0);
        let url = format!("data:image/png;base64,{}", BASE64.encode(&png));
        let asset = ImageAsset::from_data_url(&url).unwrap();
        assert_eq!(asset.width, 10);
        assert_eq!(asset.color, ColorMode::Gray);
    }

    #[test]
    fn test_bad_data_url_prefix() {
        let err = ImageAsset::from_data_url("data:text/plain;base64,aGk=").unwrap_err();
        assert!(matches!(err, Error::ImageDecode(_)));
    }

    #[test]
    fn test_unrecognized_bytes() {
        assert!(ImageAsset::from_bytes(b"GIF89a".to_vec()).is_err());
    }

    #[test]
    fn test_store() {
        let mut store = AssetStore::new();
        assert!(!store.contains("logo"));
        store.insert("logo", ImageAsset::from_bytes(png_bytes(4, 4, 8, 2)).unwrap());
        assert!(store.get("logo").is_some());
    }
}
