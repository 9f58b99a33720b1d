use crate::error::ClassifyError;
use crate::image_classifier::inference::InferenceAdapter;
use crate::image_source::interface::ImageSource;
use crate::library::cyclic_sequence::CyclicSequence;
use crate::library::logger::interface::Logger;
use crate::mood_detector::core::{init, transition, Effect, Model, Msg};
use crate::mood_detector::render::{render, Screen};
use image::DynamicImage;
use std::collections::VecDeque;
use std::sync::Arc;

pub struct MoodDetector {
    pub model: Model,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub image_source: Arc<dyn ImageSource + Send + Sync>,
    pub inference: InferenceAdapter,
}

impl MoodDetector {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        image_source: Arc<dyn ImageSource + Send + Sync>,
        inference: InferenceAdapter,
        images: CyclicSequence<String>,
    ) -> Self {
        let (model, effects) = init(images);

        let mut detector = Self {
            model,
            logger: logger.with_namespace("mood_detector"),
            image_source,
            inference,
        };

        let msgs = detector.run_effects(effects);
        detector.dispatch_all(msgs);
        detector
    }

    /// Applies `msg` and every message its effects produce before returning.
    pub fn dispatch(&mut self, msg: Msg) {
        self.dispatch_all(VecDeque::from([msg]));
    }

    fn dispatch_all(&mut self, mut queue: VecDeque<Msg>) {
        while let Some(msg) = queue.pop_front() {
            let _ = self.logger.info(&format!(
                "\nold model:\n\t{:?}\n\nmsg:\n\t{:?}",
                self.model, msg,
            ));

            let (new_model, effects) = transition(self.model.clone(), msg);

            let _ = self.logger.info(&format!(
                "\nnew model:\n\t{:?}\n\neffects:\n\t{:?}",
                new_model, effects
            ));

            self.model = new_model;

            queue.extend(self.run_effects(effects));
        }
    }

    fn run_effects(&self, effects: Vec<Effect>) -> VecDeque<Msg> {
        effects
            .into_iter()
            .map(|effect| self.run_effect(effect))
            .collect()
    }

    pub fn screen(&self) -> Screen {
        render(&self.model)
    }

    pub fn current_image(&self) -> Result<DynamicImage, ClassifyError> {
        self.image_source.load(self.model.current_image())
    }
}
