pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 2.0;
pub const DEFAULT_SPEED: f32 = 1.0;
/// Below this speed the backend's native slow voice is used instead of tempo scaling.
pub const SLOW_MODE_THRESHOLD: f32 = 0.8;
/// Ceiling for the configurable text limit.
pub const MAX_TEXT_CHARS: usize = 5000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthesisRequestError {
    #[error("text must not be empty")]
    EmptyText,
    #[error("text is {actual} characters, maximum is {max}")]
    TextTooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    text: String,
    language: String,
    speed: f32,
}

impl SynthesisRequest {
    /// Validates `text` against `max_chars` (counted in chars, not bytes) and
    /// clamps `speed` into range.
    pub fn new(
        text: impl Into<String>,
        language: impl Into<String>,
        speed: Option<f32>,
        max_chars: usize,
    ) -> Result<Self, SynthesisRequestError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SynthesisRequestError::EmptyText);
        }
        let chars = text.chars().count();
        if chars > max_chars {
            return Err(SynthesisRequestError::TextTooLong {
                max: max_chars,
                actual: chars,
            });
        }

        Ok(Self {
            text,
            language: language.into(),
            speed: clamp_speed(speed.unwrap_or(DEFAULT_SPEED)),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn uses_native_slow_mode(&self) -> bool {
        self.speed < SLOW_MODE_THRESHOLD
    }

    /// Tempo factor to apply after synthesis, if any.
    pub fn tempo_factor(&self) -> Option<f32> {
        if self.uses_native_slow_mode() || (self.speed - DEFAULT_SPEED).abs() < f32::EPSILON {
            None
        } else {
            Some(self.speed)
        }
    }
}

fn clamp_speed(speed: f32) -> f32 {
    if speed.is_finite() {
        speed.clamp(MIN_SPEED, MAX_SPEED)
    } else {
        DEFAULT_SPEED
    }
}
