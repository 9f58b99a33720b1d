use crate::error::ClassifyError;
use crate::image_classifier::inference::top_prediction;
use crate::mood_detector::core::{Msg, Outcome};
use crate::mood_detector::tests::fixture::{classification, Fixture, ImageClassifierStub};

fn mood_scores() -> Vec<(&'static str, f32)> {
    vec![("happy", 0.2), ("angry", 0.9), ("sad", 0.1)]
}

#[test]
fn test_selects_highest_score() {
    let f = Fixture::new(ImageClassifierStub::returning(mood_scores()));

    let result = f.inference.classify("image1");

    assert_eq!(result, Ok(classification("angry", 0.9)));
}

#[test]
fn test_classifier_receives_model_shaped_tensor() {
    let f = Fixture::new(ImageClassifierStub::returning(mood_scores()));

    f.inference.classify("image2").unwrap();

    let shapes = f.image_classifier.shapes.lock().unwrap();
    assert_eq!(*shapes, vec![vec![1, 224, 224, 3]]);
}

#[test]
fn test_empty_result_is_no_prediction() {
    let f = Fixture::new(ImageClassifierStub::returning(vec![]));

    let result = f.inference.classify("image1");

    assert_eq!(result, Err(ClassifyError::NoPrediction));
    assert_eq!(
        ClassifyError::NoPrediction.to_string(),
        "Failed to find a prediction."
    );
}

#[test]
fn test_classifier_failure_is_reported() {
    let f = Fixture::new(ImageClassifierStub::failing("model not loaded"));

    let result = f.inference.classify("image1");

    assert_eq!(
        result,
        Err(ClassifyError::ClassifierInvocation(
            "model not loaded".to_string()
        ))
    );
}

#[test]
fn test_missing_asset_never_reaches_classifier() {
    let f = Fixture::new(ImageClassifierStub::returning(mood_scores()));

    let result = f.inference.classify("image404");

    assert!(matches!(result, Err(ClassifyError::AssetLoad { .. })));
    assert!(f.image_classifier.shapes.lock().unwrap().is_empty());
}

#[test]
fn test_first_maximum_wins_ties() {
    let result = top_prediction(vec![
        classification("sad", 0.5),
        classification("happy", 0.5),
        classification("angry", 0.1),
    ]);

    assert_eq!(result, Ok(classification("sad", 0.5)));
}

#[test]
fn test_nan_scores_are_skipped() {
    let result = top_prediction(vec![
        classification("sad", f32::NAN),
        classification("happy", 0.3),
    ]);

    assert_eq!(result, Ok(classification("happy", 0.3)));

    let result = top_prediction(vec![classification("sad", f32::NAN)]);
    assert_eq!(result, Err(ClassifyError::NoPrediction));
}

#[test]
fn test_detector_shows_predicted_label() {
    let mut f = Fixture::new(ImageClassifierStub::returning(mood_scores()));

    f.mood_detector.dispatch(Msg::ClassifyPressed);

    assert!(!f.mood_detector.model.classifying);
    assert_eq!(f.mood_detector.screen().result, "angry");
}

#[test]
fn test_detector_shows_missing_asset_reason() {
    let available = vec!["image1".to_string(), "image3".to_string()];
    let mut f = Fixture::with_images(
        available,
        ImageClassifierStub::returning(mood_scores()),
    );

    f.mood_detector.dispatch(Msg::NextPressed);
    f.mood_detector.dispatch(Msg::ClassifyPressed);

    assert!(matches!(
        f.mood_detector.model.outcome,
        Outcome::Failed(ClassifyError::AssetLoad { .. })
    ));
    let screen = f.mood_detector.screen();
    assert_eq!(screen.image_name, "image2");
    assert!(screen.result.contains("image2"));
    assert!(screen.result.contains("no such image"));

    // the next image still classifies
    f.mood_detector.dispatch(Msg::NextPressed);
    f.mood_detector.dispatch(Msg::ClassifyPressed);
    assert_eq!(f.mood_detector.screen().result, "angry");
}

#[test]
fn test_detector_loads_current_image() {
    let mut f = Fixture::new(ImageClassifierStub::returning(mood_scores()));

    f.mood_detector.dispatch(Msg::BackPressed);
    let image = f.mood_detector.current_image().unwrap();

    assert_eq!((image.width(), image.height()), (320, 240));
}
