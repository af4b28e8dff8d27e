//! Persistence boundary for exported charts.

use crate::chart::ChartSurface;
use crate::error::{PlotError, SinkError};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Receives a serialized image and a name and stores it somewhere.
pub trait ImageSink {
    /// Persist `image` under `name`. No retries.
    fn persist(&mut self, name: &str, image: &str) -> Result<(), SinkError>;
}

/// Writes images as files below a root directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    /// Sink writing into `root`, created on first use.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Sink writing into the current directory.
    #[must_use]
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    /// Root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path an image name resolves to.
    ///
    /// Names must be relative and may not climb out of the root.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, SinkError> {
        let relative = Path::new(name);
        let plain = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if name.is_empty() || !plain {
            return Err(SinkError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl ImageSink for FileSink {
    fn persist(&mut self, name: &str, image: &str) -> Result<(), SinkError> {
        let path = self.path_for(name)?;
        let io_err = |source| SinkError::Io {
            name: name.to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(&path, image).map_err(io_err)?;
        debug!(path = %path.display(), bytes = image.len(), "persisted image");
        Ok(())
    }
}

/// Keeps images in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    images: BTreeMap<String, String>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Image stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.images.get(name).map(String::as_str)
    }

    /// Stored names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.images.keys().map(String::as_str)
    }

    /// Number of stored images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Check if nothing was stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageSink for MemorySink {
    fn persist(&mut self, name: &str, image: &str) -> Result<(), SinkError> {
        if name.is_empty() {
            return Err(SinkError::InvalidName(String::new()));
        }
        debug!(name, bytes = image.len(), "stored image in memory");
        self.images.insert(name.to_string(), image.to_string());
        Ok(())
    }
}

/// Export `chart` and hand the image to `sink` under `name`.
pub fn save_chart<S>(chart: &mut ChartSurface, sink: &mut S, name: &str) -> Result<(), PlotError>
where
    S: ImageSink + ?Sized,
{
    let image = chart.export_image();
    sink.persist(name, &image)?;
    Ok(())
}
