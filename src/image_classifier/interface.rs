/// Model input, laid out NHWC: `[1, height, width, 3]`.
pub type Tensor = ndarray::Array4<f32>;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

pub trait ImageClassifier {
    /// Scores for every label the model knows, in model order.
    fn predict(
        &self,
        tensor: &Tensor,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;
}
