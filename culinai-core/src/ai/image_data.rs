//! Image payloads exchanged with the collaborator.
//!
//! Recipe images are stored as text: either a remote URL or an inline
//! `data:<mime>;base64,<data>` URL. This module converts between that text form
//! and raw bytes, validating uploads the same way for every caller.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::ImageFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Allowed formats for uploaded photos.
pub const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// Maximum size for uploaded photos (10MB).
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("Image is empty")]
    Empty,

    #[error("Image too large: {0} bytes (max {max})", max = MAX_FILE_SIZE)]
    TooLarge(usize),

    #[error("Could not detect image format")]
    UnknownFormat,

    #[error("Unsupported image format: {0}. Allowed: JPEG, PNG, GIF, WebP")]
    UnsupportedFormat(String),

    #[error("Not an image URL: {0}")]
    NotAnImage(String),
}

/// An image the collaborator can read or has produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ImageData {
    /// Base64 payload carried inline.
    Inline { mime_type: String, data: String },
    /// An http(s) URL the model fetches itself.
    Remote(String),
}

impl ImageData {
    /// Validate raw bytes and wrap them as an inline image.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.is_empty() {
            return Err(ImageError::Empty);
        }
        if bytes.len() > MAX_FILE_SIZE {
            return Err(ImageError::TooLarge(bytes.len()));
        }

        let format = image::guess_format(bytes).map_err(|_| ImageError::UnknownFormat)?;
        if !ALLOWED_FORMATS.contains(&format) {
            return Err(ImageError::UnsupportedFormat(format!("{:?}", format)));
        }

        Ok(ImageData::Inline {
            mime_type: format.to_mime_type().to_string(),
            data: BASE64.encode(bytes),
        })
    }

    /// Parse a stored image reference.
    pub fn parse(text: &str) -> Result<Self, ImageError> {
        let text = text.trim();

        if let Some(rest) = text.strip_prefix("data:") {
            let (header, data) = rest
                .split_once(',')
                .ok_or_else(|| ImageError::NotAnImage(truncate(text)))?;
            let mime_type = header
                .strip_suffix(";base64")
                .filter(|m| m.starts_with("image/"))
                .ok_or_else(|| ImageError::NotAnImage(truncate(text)))?;
            if data.is_empty() {
                return Err(ImageError::Empty);
            }
            return Ok(ImageData::Inline {
                mime_type: mime_type.to_string(),
                data: data.to_string(),
            });
        }

        if text.starts_with("https://") || text.starts_with("http://") {
            return Ok(ImageData::Remote(text.to_string()));
        }

        Err(ImageError::NotAnImage(truncate(text)))
    }

    /// URL form: a data URL for inline images, the URL itself otherwise.
    pub fn to_url(&self) -> String {
        match self {
            ImageData::Inline { mime_type, data } => format!("data:{};base64,{}", mime_type, data),
            ImageData::Remote(url) => url.clone(),
        }
    }
}

impl fmt::Display for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageData::Inline { mime_type, data } => {
                write!(f, "<inline {} image, {} base64 chars>", mime_type, data.len())
            }
            ImageData::Remote(url) => f.write_str(url),
        }
    }
}

impl From<ImageData> for String {
    fn from(image: ImageData) -> Self {
        image.to_url()
    }
}

impl TryFrom<String> for ImageData {
    type Error = ImageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ImageData::parse(&value)
    }
}

fn truncate(text: &str) -> String {
    text.chars().take(40).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smallest valid PNG: signature plus IHDR chunk start is enough for sniffing.
    const PNG_HEADER: &[u8] = &[
        0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D',
        b'R',
    ];

    #[test]
    fn test_from_bytes_sniffs_png() {
        let image = ImageData::from_bytes(PNG_HEADER).unwrap();
        match &image {
            ImageData::Inline { mime_type, .. } => assert_eq!(mime_type, "image/png"),
            ImageData::Remote(_) => panic!("expected inline image"),
        }
        assert!(image.to_url().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_from_bytes_rejects_non_images() {
        assert_eq!(ImageData::from_bytes(b""), Err(ImageError::Empty));
        assert_eq!(
            ImageData::from_bytes(b"just some text"),
            Err(ImageError::UnknownFormat)
        );
    }

    #[test]
    fn test_from_bytes_rejects_oversized() {
        let mut big = PNG_HEADER.to_vec();
        big.resize(MAX_FILE_SIZE + 1, 0);
        assert_eq!(
            ImageData::from_bytes(&big),
            Err(ImageError::TooLarge(MAX_FILE_SIZE + 1))
        );
    }

    #[test]
    fn test_parse_data_url() {
        let image = ImageData::parse("data:image/jpeg;base64,QUJD").unwrap();
        assert_eq!(
            image,
            ImageData::Inline {
                mime_type: "image/jpeg".to_string(),
                data: "QUJD".to_string()
            }
        );
        assert_eq!(image.to_url(), "data:image/jpeg;base64,QUJD");
    }

    #[test]
    fn test_parse_remote_url() {
        let image = ImageData::parse("https://example.com/tart.jpg").unwrap();
        assert_eq!(
            image,
            ImageData::Remote("https://example.com/tart.jpg".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_other_text() {
        assert!(ImageData::parse("data:text/plain;base64,QUJD").is_err());
        assert!(ImageData::parse("data:image/png;base64,").is_err());
        assert!(ImageData::parse("ftp://example.com/a.png").is_err());
        assert!(ImageData::parse("").is_err());
    }

    #[test]
    fn test_display_does_not_dump_payload() {
        let image = ImageData::parse("data:image/png;base64,QUJDREVG").unwrap();
        assert_eq!(image.to_string(), "<inline image/png image, 8 base64 chars>");
    }
}
