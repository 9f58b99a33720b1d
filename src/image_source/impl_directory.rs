use crate::error::ClassifyError;
use crate::image_source::interface::ImageSource;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

pub struct ImageSourceDirectory {
    logger: Arc<dyn Logger + Send + Sync>,
    dir: PathBuf,
}

impl ImageSourceDirectory {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, dir: impl Into<PathBuf>) -> Self {
        Self {
            logger: logger.with_namespace("image_source").with_namespace("directory"),
            dir: dir.into(),
        }
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let exact = self.dir.join(name);
        if exact.is_file() {
            return Some(exact);
        }

        EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{}.{}", name, ext)))
            .find(|path| path.is_file())
    }
}

impl ImageSource for ImageSourceDirectory {
    fn load(&self, name: &str) -> Result<DynamicImage, ClassifyError> {
        let path = self.resolve(name).ok_or_else(|| ClassifyError::AssetLoad {
            name: name.to_string(),
            reason: format!("not found in {}", self.dir.display()),
        })?;

        let _ = self.logger.info(&format!("Loading {}", path.display()));

        open(name, &path)
    }
}

fn open(name: &str, path: &Path) -> Result<DynamicImage, ClassifyError> {
    image::open(path).map_err(|e| ClassifyError::AssetLoad {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
