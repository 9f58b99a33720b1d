use crate::error::ClassifyError;
use crate::image_source::interface::ImageSource;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, Rgb, RgbImage};
use std::collections::HashMap;
use std::sync::Arc;

const PALETTE: [[u8; 3]; 3] = [[200, 60, 60], [60, 170, 80], [70, 90, 200]];

pub struct ImageSourceFake {
    logger: Arc<dyn Logger + Send + Sync>,
    images: HashMap<String, DynamicImage>,
}

impl ImageSourceFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, images: Vec<(String, DynamicImage)>) -> Self {
        Self {
            logger: logger.with_namespace("image_source").with_namespace("fake"),
            images: images.into_iter().collect(),
        }
    }

    /// One solid-colour 320x240 image per name, cycling through a small palette.
    pub fn solid_colors(logger: Arc<dyn Logger + Send + Sync>, names: &[String]) -> Self {
        let images = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let color = PALETTE[i % PALETTE.len()];
                let image = RgbImage::from_pixel(320, 240, Rgb(color));
                (name.clone(), DynamicImage::ImageRgb8(image))
            })
            .collect();

        Self::new(logger, images)
    }
}

impl ImageSource for ImageSourceFake {
    fn load(&self, name: &str) -> Result<DynamicImage, ClassifyError> {
        let _ = self.logger.info(&format!("Loading {}", name));

        self.images
            .get(name)
            .cloned()
            .ok_or_else(|| ClassifyError::AssetLoad {
                name: name.to_string(),
                reason: "no such image".to_string(),
            })
    }
}
