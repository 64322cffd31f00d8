//! Texture assets: an image-loading seam plus a content-addressed texture store.
//!
//! Textures are identified by a hash of their decoded pixels. The renderer
//! consumes textures by handle, never by file path. A texture that fails to
//! load is logged and reported as absent; callers draw untextured instead.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;

/// Content-addressed texture id computed from the decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextureHandle(pub u64);

/// Decoded RGB8 pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

/// Turns a file path into pixels. Implemented by the host's image decoder.
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<Image, AssetError>;
}

/// Loader backed by the `image` crate (JPEG and PNG), converting to RGB8.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileImageLoader;

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &Path) -> Result<Image, AssetError> {
        let decoded = image::open(path).map_err(|e| match e {
            image::ImageError::IoError(io) => AssetError::Io(io),
            other => AssetError::Decode(other.to_string()),
        })?;
        let rgb = decoded.to_rgb8();
        Ok(Image {
            width: rgb.width(),
            height: rgb.height(),
            pixels: rgb.into_raw(),
        })
    }
}

/// A stored texture and where it came from.
#[derive(Debug, Clone)]
pub struct Texture {
    pub name: String,
    pub image: Image,
}

/// Content-addressed texture registry.
#[derive(Debug, Clone, Default)]
pub struct TextureStore {
    textures: BTreeMap<TextureHandle, Texture>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a texture through `loader`.
    ///
    /// Failures are logged and yield `None` so the caller can fall back to
    /// untextured drawing.
    pub fn load(&mut self, path: impl AsRef<Path>, loader: &dyn ImageLoader) -> Option<TextureHandle> {
        let path = path.as_ref();
        match loader.load(path) {
            Ok(image) => {
                tracing::info!(
                    path = %path.display(),
                    width = image.width,
                    height = image.height,
                    "loaded texture"
                );
                Some(self.insert(path.display().to_string(), image))
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "texture not found: {e}");
                None
            }
        }
    }

    /// Register decoded pixels and return their handle. Identical images share a handle.
    pub fn insert(&mut self, name: impl Into<String>, image: Image) -> TextureHandle {
        let handle = content_hash(&image);
        self.textures.entry(handle).or_insert(Texture {
            name: name.into(),
            image,
        });
        handle
    }

    pub fn get(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(&handle)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

fn content_hash(image: &Image) -> TextureHandle {
    let mut hasher = Sha256::new();
    hasher.update(image.width.to_le_bytes());
    hasher.update(image.height.to_le_bytes());
    hasher.update(&image.pixels);
    let result = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&result[..8]);
    TextureHandle(u64::from_le_bytes(bytes))
}
