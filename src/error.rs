#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error("could not load image \"{name}\": {reason}")]
    AssetLoad { name: String, reason: String },

    #[error("could not resize {from_width}x{from_height} image to {to_width}x{to_height}")]
    Resize {
        from_width: u32,
        from_height: u32,
        to_width: u32,
        to_height: u32,
    },

    #[error("could not convert image to tensor: {0}")]
    TensorConversion(String),

    #[error("classifier failed: {0}")]
    ClassifierInvocation(String),

    #[error("Failed to find a prediction.")]
    NoPrediction,
}
