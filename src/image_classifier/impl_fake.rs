use crate::image_classifier::interface::{Classification, ImageClassifier, Tensor};
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Scores every label with noise seeded from the tensor, so equal images get equal scores.
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    labels: Vec<String>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, labels: Vec<String>) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            labels,
        }
    }
}

fn seed(tensor: &Tensor) -> u64 {
    tensor.iter().fold(17u64, |acc, value| {
        acc.wrapping_mul(31).wrapping_add(u64::from(value.to_bits()))
    })
}

impl ImageClassifier for ImageClassifierFake {
    fn predict(
        &self,
        tensor: &Tensor,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Classifying image with fake classifier...")?;

        let mut rng = StdRng::seed_from_u64(seed(tensor));

        let confidence_dist = Uniform::new(0.0f32, 1.0)?;

        let classifications = self
            .labels
            .iter()
            .map(|label| Classification {
                label: label.clone(),
                confidence: confidence_dist.sample(&mut rng),
            })
            .collect();

        Ok(classifications)
    }
}
