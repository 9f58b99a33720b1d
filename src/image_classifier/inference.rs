use crate::config::Config;
use crate::error::ClassifyError;
use crate::image_classifier::interface::{Classification, ImageClassifier, Tensor};
use crate::image_classifier::preprocess::resize_image_to_tensor;
use crate::image_source::interface::ImageSource;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Glue between an image name and the label the classifier likes best.
#[derive(Clone)]
pub struct InferenceAdapter {
    logger: Arc<dyn Logger + Send + Sync>,
    image_source: Arc<dyn ImageSource + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    input_width: u32,
    input_height: u32,
}

impl InferenceAdapter {
    pub fn new(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_source: Arc<dyn ImageSource + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("inference"),
            image_source,
            image_classifier,
            input_width: config.model_input_width,
            input_height: config.model_input_height,
        }
    }

    pub fn classify(&self, image_name: &str) -> Result<Classification, ClassifyError> {
        let image = self.image_source.load(image_name)?;
        let tensor = resize_image_to_tensor(&image, self.input_width, self.input_height)?;

        self.predict(&tensor)
    }

    pub fn predict(&self, tensor: &Tensor) -> Result<Classification, ClassifyError> {
        let predictions = self
            .image_classifier
            .predict(tensor)
            .map_err(|e| ClassifyError::ClassifierInvocation(e.to_string()))?;

        let _ = self.logger.info(&format!("{:?}", predictions));

        let best = top_prediction(predictions)?;

        let _ = self.logger.info(&format!(
            "Predicted class: {} with score: {}",
            best.label, best.confidence
        ));

        Ok(best)
    }
}

/// Highest confidence wins; the earliest entry wins a tie. NaN scores never win.
pub fn top_prediction(predictions: Vec<Classification>) -> Result<Classification, ClassifyError> {
    let mut best: Option<Classification> = None;

    for prediction in predictions {
        let is_better = match &best {
            Some(current) => prediction.confidence > current.confidence,
            None => !prediction.confidence.is_nan(),
        };
        if is_better {
            best = Some(prediction);
        }
    }

    best.ok_or(ClassifyError::NoPrediction)
}
