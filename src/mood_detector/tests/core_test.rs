use crate::error::ClassifyError;
use crate::library::cyclic_sequence::CyclicSequence;
use crate::mood_detector::core::{init, transition, Effect, Model, Msg, Outcome};
use crate::mood_detector::render::render;
use crate::mood_detector::tests::fixture::{asset_error, classification};

fn images() -> CyclicSequence<String> {
    CyclicSequence::new(vec![
        "image1".to_string(),
        "image2".to_string(),
        "image3".to_string(),
    ])
    .unwrap()
}

fn initial() -> Model {
    init(images()).0
}

#[test]
fn test_init() {
    let (model, effects) = init(images());

    assert_eq!(model.current_image(), "image1");
    assert_eq!(model.outcome, Outcome::Unclassified);
    assert!(!model.classifying);
    assert!(effects.is_empty());
}

#[test]
fn test_next_cycles_through_images() {
    let mut model = initial();
    let mut seen = vec![];

    for _ in 0..4 {
        seen.push(model.current_image().to_string());
        let (next, effects) = transition(model, Msg::NextPressed);
        assert!(effects.is_empty());
        model = next;
    }

    assert_eq!(seen, vec!["image1", "image2", "image3", "image1"]);
}

#[test]
fn test_back_from_first_goes_to_last() {
    let (model, effects) = transition(initial(), Msg::BackPressed);

    assert_eq!(model.current_image(), "image3");
    assert!(effects.is_empty());

    let (model, _) = transition(model, Msg::BackPressed);
    assert_eq!(model.current_image(), "image2");
}

#[test]
fn test_classify_requests_current_image() {
    let (model, _) = transition(initial(), Msg::NextPressed);

    let (model, effects) = transition(model, Msg::ClassifyPressed);

    assert!(model.classifying);
    assert_eq!(
        effects,
        vec![Effect::ClassifyImage {
            image_name: "image2".to_string()
        }]
    );
}

#[test]
fn test_classify_ignored_while_in_flight() {
    let (model, _) = transition(initial(), Msg::ClassifyPressed);

    let (model, effects) = transition(model, Msg::ClassifyPressed);

    assert!(model.classifying);
    assert!(effects.is_empty());
}

#[test]
fn test_label_kept_until_classification_finishes() {
    let model = Model {
        outcome: Outcome::Classified(classification("happy", 0.7)),
        ..initial()
    };

    let (model, _) = transition(model, Msg::ClassifyPressed);
    assert_eq!(render(&model).result, "happy");

    let (model, effects) = transition(
        model,
        Msg::ClassifyDone(Ok(classification("angry", 0.9))),
    );

    assert!(!model.classifying);
    assert!(effects.is_empty());
    assert_eq!(model.outcome, Outcome::Classified(classification("angry", 0.9)));
    assert_eq!(render(&model).result, "angry");
}

#[test]
fn test_failed_classification_is_shown_as_error() {
    let (model, _) = transition(initial(), Msg::ClassifyPressed);

    let (model, _) = transition(model, Msg::ClassifyDone(Err(asset_error("image1"))));

    assert_eq!(model.outcome, Outcome::Failed(asset_error("image1")));
    let screen = render(&model);
    assert!(screen.result.starts_with("Error: "));
    assert!(screen.result.contains("no such image"));

    // still usable afterwards
    let (model, effects) = transition(model, Msg::ClassifyPressed);
    assert!(model.classifying);
    assert_eq!(effects.len(), 1);
}

#[test]
fn test_stray_result_is_ignored() {
    let (model, effects) = transition(initial(), Msg::ClassifyDone(Err(ClassifyError::NoPrediction)));

    assert_eq!(model, initial());
    assert!(effects.is_empty());
}

#[test]
fn test_navigation_allowed_while_classifying() {
    let (model, _) = transition(initial(), Msg::ClassifyPressed);

    let (model, effects) = transition(model, Msg::NextPressed);

    assert!(model.classifying);
    assert_eq!(model.current_image(), "image2");
    assert!(effects.is_empty());
}

#[test]
fn test_render_position() {
    let (model, _) = transition(initial(), Msg::BackPressed);

    let screen = render(&model);

    assert_eq!(screen.image_name, "image3");
    assert_eq!(screen.position, "3/3");
    assert_eq!(screen.result, "");
}
