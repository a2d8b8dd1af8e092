//! Access to the app content folder (templates and icons)

use std::fmt;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read image '{path}': {reason}")]
    ImageError { path: String, reason: String },
}

/// Pixel size of an image asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Read-only view of the files an app ships
///
/// Paths are relative to the app content directory, exactly as they are
/// written in the manifest.
pub trait AssetStore {
    /// Whether the content directory itself exists
    fn root_exists(&self) -> bool;

    fn exists(&self, relative: &str) -> bool;

    /// Fails when the file is not a readable image
    fn image_dimensions(&self, relative: &str) -> Result<Dimensions, AssetError>;
}

/// Asset store backed by a directory on disk
#[derive(Debug, Clone)]
pub struct AppFolder {
    root: PathBuf,
}

impl AppFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Content folder of a project, e.g. `<project>/app`
    pub fn for_project(project: &Path, content_dir: &str) -> Self {
        Self::new(project.join(content_dir))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Only plain components are kept, so `/index.html` and `../x` stay
    /// inside the content folder
    fn resolve(&self, relative: &str) -> PathBuf {
        Path::new(relative)
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part),
                _ => None,
            })
            .fold(self.root.clone(), |path, part| path.join(part))
    }
}

impl AssetStore for AppFolder {
    fn root_exists(&self) -> bool {
        self.root.is_dir()
    }

    fn exists(&self, relative: &str) -> bool {
        self.resolve(relative).exists()
    }

    fn image_dimensions(&self, relative: &str) -> Result<Dimensions, AssetError> {
        let path = self.resolve(relative);
        let size = imagesize::size(&path).map_err(|e| match e {
            imagesize::ImageError::IoError(io) => AssetError::IoError(io),
            other => AssetError::ImageError {
                path: relative.to_string(),
                reason: other.to_string(),
            },
        })?;

        let width = u32::try_from(size.width).map_err(|_| AssetError::ImageError {
            path: relative.to_string(),
            reason: "width out of range".into(),
        })?;
        let height = u32::try_from(size.height).map_err(|_| AssetError::ImageError {
            path: relative.to_string(),
            reason: "height out of range".into(),
        })?;

        Ok(Dimensions::new(width, height))
    }
}
