use crate::mood_detector::core::{Model, Outcome};

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub image_name: String,
    pub position: String,
    pub result: String,
}

pub fn render(model: &Model) -> Screen {
    let result = match &model.outcome {
        Outcome::Unclassified => String::new(),
        Outcome::Classified(classification) => classification.label.clone(),
        Outcome::Failed(error) => format!("Error: {}", error),
    };

    Screen {
        image_name: model.current_image().to_string(),
        position: format!("{}/{}", model.images.index() + 1, model.images.len()),
        result,
    }
}
