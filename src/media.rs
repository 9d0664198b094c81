// src/media.rs
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("Unsupported video format: {0}. Upload mp4 / mov / webm.")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoFormat {
    Mp4,
    QuickTime,
    WebM,
}

impl VideoFormat {
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Mp4 => "video/mp4",
            Self::QuickTime => "video/quicktime",
            Self::WebM => "video/webm",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp4" => Some(Self::Mp4),
            "mov" => Some(Self::QuickTime),
            "webm" => Some(Self::WebM),
            _ => None,
        }
    }
}

/// A user-selected video file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    pub path: PathBuf,
    pub format: VideoFormat,
}

impl VideoFile {
    /// Accepts a path whose extension is one of the supported video formats.
    ///
    /// # Errors
    /// Returns [`MediaError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MediaError> {
        let path = path.as_ref();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(VideoFormat::from_extension)
            .ok_or_else(|| MediaError::UnsupportedFormat(path.display().to_string()))?;
        Ok(Self {
            path: path.to_path_buf(),
            format,
        })
    }
}

/// Opaque reference to a temporary local preview.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreviewUrl(String);

impl PreviewUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hands out and takes back preview references.
pub trait PreviewStore {
    fn create(&self, file: &VideoFile) -> PreviewUrl;
    fn revoke(&self, url: &PreviewUrl);
}

/// In-process preview store. Clones share the same set of live previews.
#[derive(Debug, Clone, Default)]
pub struct LocalPreviewStore {
    live: Rc<RefCell<BTreeSet<PreviewUrl>>>,
}

impl LocalPreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_live(&self, url: &PreviewUrl) -> bool {
        self.live.borrow().contains(url)
    }

    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }
}

impl PreviewStore for LocalPreviewStore {
    fn create(&self, file: &VideoFile) -> PreviewUrl {
        let url = PreviewUrl(format!("blob:pumppal/{}", Uuid::new_v4()));
        log::debug!("Created preview {url} for {}", file.path.display());
        self.live.borrow_mut().insert(url.clone());
        url
    }

    fn revoke(&self, url: &PreviewUrl) {
        if self.live.borrow_mut().remove(url) {
            log::debug!("Revoked preview {url}");
        }
    }
}

/// Holds at most one preview, revoking the old one whenever it changes.
#[derive(Debug)]
pub struct VideoSlot<P: PreviewStore> {
    store: P,
    current: Option<PreviewUrl>,
}

impl<P: PreviewStore> VideoSlot<P> {
    pub fn new(store: P) -> Self {
        Self {
            store,
            current: None,
        }
    }

    pub fn attach(&mut self, file: &VideoFile) -> &PreviewUrl {
        self.release();
        self.current.insert(self.store.create(file))
    }

    /// Revokes the held preview, if any.
    pub fn release(&mut self) {
        if let Some(url) = self.current.take() {
            self.store.revoke(&url);
        }
    }

    pub fn current(&self) -> Option<&PreviewUrl> {
        self.current.as_ref()
    }

    pub fn store(&self) -> &P {
        &self.store
    }
}

impl<P: PreviewStore> Drop for VideoSlot<P> {
    fn drop(&mut self) {
        self.release();
    }
}
