use crate::error::ClassifyError;
use crate::image_classifier::interface::Classification;
use crate::library::cyclic_sequence::CyclicSequence;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Outcome {
    #[default]
    Unclassified,
    Classified(Classification),
    Failed(ClassifyError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub images: CyclicSequence<String>,
    /// Last finished classification; kept on screen while the next one runs.
    pub outcome: Outcome,
    pub classifying: bool,
}

impl Model {
    pub fn current_image(&self) -> &str {
        self.images.current()
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    BackPressed,
    NextPressed,
    ClassifyPressed,
    ClassifyDone(Result<Classification, ClassifyError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ClassifyImage { image_name: String },
}

pub fn init(images: CyclicSequence<String>) -> (Model, Vec<Effect>) {
    (
        Model {
            images,
            outcome: Outcome::default(),
            classifying: false,
        },
        vec![],
    )
}

pub fn transition(model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match (model.classifying, msg) {
        (_, Msg::BackPressed) => {
            let mut model = model;
            model.images.retreat();
            (model, vec![])
        }
        (_, Msg::NextPressed) => {
            let mut model = model;
            model.images.advance();
            (model, vec![])
        }

        (false, Msg::ClassifyPressed) => {
            let image_name = model.current_image().to_string();
            (
                Model {
                    classifying: true,
                    ..model
                },
                vec![Effect::ClassifyImage { image_name }],
            )
        }
        // one classification at a time
        (true, Msg::ClassifyPressed) => (model, vec![]),

        (true, Msg::ClassifyDone(result)) => {
            let outcome = match result {
                Ok(classification) => Outcome::Classified(classification),
                Err(error) => Outcome::Failed(error),
            };
            (
                Model {
                    outcome,
                    classifying: false,
                    ..model
                },
                vec![],
            )
        }
        (false, Msg::ClassifyDone(_)) => (model, vec![]),
    }
}
