//! Background image loading.
//!
//! Decoding runs on a tokio blocking task and the result is handed back through
//! a one-shot channel, bridging the async loader with the synchronous drawing
//! code. Only plain pixel data crosses threads; Cairo surfaces are rebuilt on
//! the drawing side with [`RasterImage::to_surface`].

use crate::error::LoadError;
use crate::export::expand_tilde;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tokio::sync::oneshot::{self, error::TryRecvError};
use url::Url;

/// Decoded image pixels in Cairo's memory layout.
#[derive(Debug, Clone)]
pub struct RasterImage {
    width: i32,
    height: i32,
    stride: i32,
    format: cairo::Format,
    data: Vec<u8>,
}

impl RasterImage {
    /// Decodes a PNG stream.
    pub fn decode_png<R: Read>(reader: &mut R) -> Result<Self, LoadError> {
        let mut surface = cairo::ImageSurface::create_from_png(reader)?;
        let width = surface.width();
        let height = surface.height();
        let stride = surface.stride();
        let format = surface.format();
        let data = surface.data()?.to_vec();

        Ok(Self {
            width,
            height,
            stride,
            format,
            data,
        })
    }

    /// Opens and decodes a PNG file.
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode_png(&mut BufReader::new(file))
    }

    /// Natural pixel size of the image.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Builds a Cairo surface over a copy of the pixels.
    pub fn to_surface(&self) -> Result<cairo::ImageSurface, LoadError> {
        Ok(cairo::ImageSurface::create_for_data(
            self.data.clone(),
            self.format,
            self.width,
            self.height,
            self.stride,
        )?)
    }
}

/// Turns a background image location into a local path.
///
/// Accepts plain paths (with `~/` expansion) and `file://` URLs. Other URL
/// schemes are rejected.
pub fn resolve_location(location: &str) -> Result<PathBuf, LoadError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(LoadError::InvalidLocation(location.to_string()));
    }

    match Url::parse(location) {
        Ok(url) if url.scheme() == "file" => url
            .to_file_path()
            .map_err(|_| LoadError::InvalidLocation(location.to_string())),
        // single-letter schemes are Windows drive prefixes
        Ok(url) if url.scheme().len() == 1 => Ok(PathBuf::from(location)),
        Ok(url) => Err(LoadError::UnsupportedScheme(url.scheme().to_string())),
        Err(_) => Ok(expand_tilde(location)),
    }
}

fn load_image(location: &str) -> Result<RasterImage, LoadError> {
    let path = resolve_location(location)?;
    debug!("Decoding background image {}", path.display());
    let image = RasterImage::open(&path)?;
    info!(
        "Loaded background image {} ({}x{})",
        path.display(),
        image.width,
        image.height
    );
    Ok(image)
}

/// Starts background image loads.
#[derive(Debug, Clone, Default)]
pub struct ImageLoader {
    runtime: Option<tokio::runtime::Handle>,
}

impl ImageLoader {
    /// Loads images on the given runtime's blocking pool.
    pub fn new(runtime_handle: &tokio::runtime::Handle) -> Self {
        Self {
            runtime: Some(runtime_handle.clone()),
        }
    }

    /// Decodes images synchronously on the calling thread.
    ///
    /// The result is still delivered through a [`PendingImage`], so callers
    /// observe the same lifecycle either way.
    pub fn inline() -> Self {
        Self { runtime: None }
    }

    /// Begins loading `location` and returns the completion handle.
    pub fn load(&self, location: &str) -> PendingImage {
        let (tx, pending) = PendingImage::channel(location);
        let owned = location.to_string();

        match &self.runtime {
            Some(handle) => {
                handle.spawn_blocking(move || {
                    if tx.send(load_image(&owned)).is_err() {
                        debug!("Background image {owned} finished after its receiver was dropped");
                    }
                });
            }
            None => {
                let _ = tx.send(load_image(&owned));
            }
        }

        pending
    }
}

/// Sending half of a [`PendingImage`].
pub type ImageSender = oneshot::Sender<Result<RasterImage, LoadError>>;

/// One-shot completion handle for a background image load.
#[derive(Debug)]
pub struct PendingImage {
    location: String,
    rx: oneshot::Receiver<Result<RasterImage, LoadError>>,
}

impl PendingImage {
    /// Creates a handle completed by whoever holds the returned sender.
    pub fn channel(location: &str) -> (ImageSender, Self) {
        let (tx, rx) = oneshot::channel();
        let pending = Self {
            location: location.to_string(),
            rx,
        };
        (tx, pending)
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the result if the load has finished, without blocking.
    pub fn try_take(&mut self) -> Option<Result<RasterImage, LoadError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                warn!("Loader for {} went away without a result", self.location);
                Some(Err(LoadError::Abandoned))
            }
        }
    }

    /// Waits for the load to finish.
    pub async fn wait(&mut self) -> Result<RasterImage, LoadError> {
        (&mut self.rx).await.unwrap_or(Err(LoadError::Abandoned))
    }
}
