use bhasha::domain::{EngineKind, RecognitionResult};

#[test]
fn given_confidence_above_one_when_creating_result_then_clamped_to_one() {
    let result = RecognitionResult::new("hi".to_string(), 1.7, EngineKind::Primary);
    assert_eq!(result.confidence, 1.0);
}

#[test]
fn given_negative_or_nan_confidence_when_creating_result_then_clamped_to_zero() {
    let negative = RecognitionResult::new("hi".to_string(), -0.2, EngineKind::Fallback);
    let nan = RecognitionResult::new("hi".to_string(), f32::NAN, EngineKind::Fallback);
    assert_eq!(negative.confidence, 0.0);
    assert_eq!(nan.confidence, 0.0);
}

#[test]
fn given_engine_kinds_when_displayed_then_use_lowercase_names() {
    assert_eq!(EngineKind::Primary.to_string(), "primary");
    assert_eq!(EngineKind::Fallback.as_str(), "fallback");
}
