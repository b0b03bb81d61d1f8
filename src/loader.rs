//! Image loading from local paths and http(s) URLs.
//!
//! Decoding is content-sniffed, so a PNG saved as `.jpg` still loads.
//! Supported formats: PNG, JPEG, GIF (first frame) and WebP.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use image::{DynamicImage, ImageFormat, ImageReader};

/// A decoded image and the format it was stored in.
#[derive(Debug)]
pub struct LoadedImage {
    pub image: DynamicImage,
    pub format: Option<ImageFormat>,
}

impl LoadedImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Lowercase format name, or "unknown".
    pub fn format_name(&self) -> String {
        self.format
            .map(|f| format!("{:?}", f).to_lowercase())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Errors that can occur while loading an image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("couldn't open image '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("couldn't download image: {0}")]
    Download(#[from] reqwest::Error),

    #[error("couldn't download image: received status code {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("couldn't decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

/// True if `source` should be fetched over HTTP.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load an image from a local path or an http(s) URL.
pub async fn load(source: &str) -> Result<LoadedImage, LoadError> {
    if is_remote(source) {
        log::debug!("Fetching {}", source);
        let bytes = fetch(source).await?;
        decode(&bytes)
    } else {
        log::debug!("Reading {}", source);
        load_path(Path::new(source)).await
    }
}

/// Read and decode an image file.
pub async fn load_path(path: &Path) -> Result<LoadedImage, LoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| LoadError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    decode(&bytes)
}

/// Download the body of `url`, streaming it into memory.
pub async fn fetch(url: &str) -> Result<Vec<u8>, LoadError> {
    let response = reqwest::Client::new().get(url).send().await?;

    if !response.status().is_success() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let total = response.content_length();
    let mut bytes = Vec::with_capacity(total.unwrap_or(0) as usize);
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        bytes.extend_from_slice(&chunk);
        match total {
            Some(total) => log::debug!("Downloaded {}/{} bytes", bytes.len(), total),
            None => log::debug!("Downloaded {} bytes", bytes.len()),
        }
    }

    Ok(bytes)
}

/// Decode an in-memory image, sniffing the format from its contents.
pub fn decode(bytes: &[u8]) -> Result<LoadedImage, LoadError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?;
    let format = reader.format();
    let image = reader.decode()?;

    if image.width() == 0 || image.height() == 0 {
        return Err(LoadError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }

    log::debug!(
        "Decoded {:?} image, {}x{}",
        format,
        image.width(),
        image.height()
    );
    Ok(LoadedImage { image, format })
}
