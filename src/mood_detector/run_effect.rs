use super::main::MoodDetector;
use crate::mood_detector::core::{Effect, Msg};

impl MoodDetector {
    pub fn run_effect(&self, effect: Effect) -> Msg {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::ClassifyImage { image_name } => {
                let result = self.inference.classify(&image_name);

                if let Err(error) = &result {
                    let _ = self
                        .logger
                        .error(&format!("Classifying {} failed: {}", image_name, error));
                }

                Msg::ClassifyDone(result)
            }
        }
    }
}
