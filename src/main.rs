use config::Config;
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::inference::InferenceAdapter;
use image_classifier::interface::ImageClassifier;
use image_source::impl_directory::ImageSourceDirectory;
use image_source::impl_fake::ImageSourceFake;
use image_source::interface::ImageSource;
use library::cyclic_sequence::CyclicSequence;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use mood_detector::main::MoodDetector;
use std::sync::Arc;
use ui::{impl_console::UiConsole, impl_gui};

mod config;
mod error;
mod image_classifier;
mod image_source;
mod library;
mod mood_detector;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default().with_env_overrides();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_source = build_image_source(&config, logger.clone())?;

    let image_classifier = build_image_classifier(&config, logger.clone())?;

    let images = CyclicSequence::new(config.image_names.clone())
        .ok_or("at least one image name must be configured")?;

    let inference = InferenceAdapter::new(
        &config,
        logger.clone(),
        image_source.clone(),
        image_classifier,
    );

    let mood_detector = MoodDetector::new(logger, image_source, inference, images);

    if std::env::args().any(|arg| arg == "--console") {
        UiConsole::new(mood_detector).run()
    } else {
        impl_gui::run(&config, mood_detector)
    }
}

fn build_image_source(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<dyn ImageSource + Send + Sync>, Box<dyn std::error::Error + Send + Sync>> {
    if config.assets_dir.is_dir() {
        return Ok(Arc::new(ImageSourceDirectory::new(
            logger,
            config.assets_dir.clone(),
        )));
    }

    logger.info(&format!(
        "{} not found, using generated images",
        config.assets_dir.display()
    ))?;

    Ok(Arc::new(ImageSourceFake::solid_colors(
        logger,
        &config.image_names,
    )))
}

#[cfg(feature = "tract")]
fn build_image_classifier(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<dyn ImageClassifier + Send + Sync>, Box<dyn std::error::Error + Send + Sync>> {
    use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;

    match &config.model_path {
        Some(model_path) => Ok(Arc::new(ImageClassifierTractOnnx::new(
            logger,
            model_path,
            config.model_input_width,
            config.model_input_height,
            config.labels.clone(),
        )?)),
        None => Ok(Arc::new(ImageClassifierFake::new(
            logger,
            config.labels.clone(),
        ))),
    }
}

#[cfg(not(feature = "tract"))]
fn build_image_classifier(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<dyn ImageClassifier + Send + Sync>, Box<dyn std::error::Error + Send + Sync>> {
    if config.model_path.is_some() {
        logger.info("Built without the `tract` feature, ignoring model path")?;
    }

    Ok(Arc::new(ImageClassifierFake::new(
        logger,
        config.labels.clone(),
    )))
}
