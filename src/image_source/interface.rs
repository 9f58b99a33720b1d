use crate::error::ClassifyError;
use image::DynamicImage;

/// Resolves an image name to decoded pixels.
pub trait ImageSource {
    fn load(&self, name: &str) -> Result<DynamicImage, ClassifyError>;
}
