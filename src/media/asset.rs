// SPDX-License-Identifier: MPL-2.0
//! Remote image assets: download, decode, hand to the renderer.

use crate::error::AssetError;
use iced::widget::image;
use std::time::Duration;

const USER_AGENT: &str = concat!("IcedChapel/", env!("CARGO_PKG_VERSION"));

/// Upper bound on a single asset body (32 MB).
pub const MAX_ASSET_BYTES: usize = 32 * 1024 * 1024;

/// A decoded image ready for display.
///
/// The pixels live only inside the handle, so cloning is cheap.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Takes ownership of `pixels`, which must be `width * height` RGBA
    /// samples.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Decoded size in memory, used for cache accounting.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Decodes an encoded image (JPEG, PNG, GIF, WebP, BMP) to RGBA.
pub fn decode(bytes: &[u8]) -> Result<ImageData, AssetError> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(AssetError::Decode("image has no pixels".to_string()));
    }
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

/// Shared HTTP client for asset downloads.
#[derive(Debug, Clone)]
pub struct AssetFetcher {
    http: reqwest::Client,
}

impl AssetFetcher {
    pub fn new(timeout: Duration) -> Result<Self, AssetError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Downloads and decodes one image.
    ///
    /// Decoding runs on the blocking pool so large JPEGs do not stall the
    /// async executor.
    pub async fn fetch(self, url: String) -> Result<ImageData, AssetError> {
        use futures_util::StreamExt;

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::Status(status.as_u16()));
        }

        if let Some(length) = response.content_length() {
            if length as usize > MAX_ASSET_BYTES {
                return Err(AssetError::Http(format!("asset too large ({length} bytes)")));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if body.len() + chunk.len() > MAX_ASSET_BYTES {
                return Err(AssetError::Http("asset too large".to_string()));
            }
            body.extend_from_slice(&chunk);
        }

        match tokio::task::spawn_blocking(move || decode(&body)).await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(AssetError::Aborted),
            Err(err) => Err(AssetError::Decode(format!("decode task failed: {err}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([10, 20, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image_rs::ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    #[test]
    fn decodes_png_to_rgba() {
        let data = decode(&png_bytes(4, 3)).expect("decode");
        assert_eq!((data.width, data.height), (4, 3));
        assert_eq!(data.size_bytes(), 4 * 3 * 4);
        assert!((data.aspect_ratio() - 4.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn clones_share_one_pixel_buffer() {
        let data = ImageData::from_rgba(2, 5, vec![0; 2 * 5 * 4]);
        let copy = data.clone();
        assert_eq!(copy.handle.id(), data.handle.id());
        assert_eq!(copy.size_bytes(), 40);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(decode(b"<html>404</html>"), Err(AssetError::Decode(_))));
    }

    #[tokio::test]
    async fn unreachable_host_is_http_error() {
        let fetcher = AssetFetcher::new(Duration::from_secs(1)).expect("client");
        let result = fetcher.fetch("http://127.0.0.1:9/a.jpg".to_string()).await;
        assert!(matches!(result, Err(AssetError::Http(_))));
    }
}
