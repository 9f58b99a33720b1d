use crate::image_classifier::interface::{Classification, ImageClassifier, Tensor};
use crate::library::logger::interface::Logger;
use std::path::Path;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    input_shape: [usize; 4],
    labels: Vec<String>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        model_path: &Path,
        input_width: u32,
        input_height: u32,
        labels: Vec<String>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let input_shape = [1, input_height as usize, input_width as usize, 3];

        let model = tract_onnx::onnx()
            .model_for_path(model_path)?
            .with_input_fact(0, f32::fact(input_shape).into())?
            .into_optimized()?
            .into_runnable()?;

        let logger = logger.with_namespace("image_classifier").with_namespace("tract");
        logger.info(&format!("Loaded model {}", model_path.display()))?;

        Ok(Self {
            model,
            input_shape,
            labels,
            logger,
        })
    }
}

fn check_input_shape(shape: &[usize], expected: &[usize; 4]) -> Result<(), String> {
    if shape != &expected[..] {
        return Err(format!(
            "input shape {:?} does not match model input {:?}",
            shape, expected
        ));
    }
    Ok(())
}

fn label_scores(labels: &[String], scores: &[f32]) -> Result<Vec<Classification>, String> {
    if scores.len() != labels.len() {
        return Err(format!(
            "model produced {} scores for {} labels",
            scores.len(),
            labels.len()
        ));
    }

    Ok(labels
        .iter()
        .zip(scores)
        .map(|(label, &confidence)| Classification {
            label: label.clone(),
            confidence,
        })
        .collect())
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn predict(
        &self,
        tensor: &Tensor,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        check_input_shape(tensor.shape(), &self.input_shape)?;

        let values: Vec<f32> = tensor.iter().copied().collect();
        let input = tract_onnx::prelude::Tensor::from_shape(&self.input_shape, &values)?;

        let outputs = self.model.run(tvec!(input.into_tvalue()))?;
        let scores = outputs[0].to_array_view::<f32>()?;

        self.logger
            .info(&format!("Output shape {:?}", scores.shape()))?;

        let scores: Vec<f32> = scores.iter().copied().collect();

        Ok(label_scores(&self.labels, &scores)?)
    }
}
