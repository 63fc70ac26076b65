use std::fmt;

/// Which recognition backend produced a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    Primary,
    Fallback,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Primary => "primary",
            EngineKind::Fallback => "fallback",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    pub text: String,
    pub confidence: f32,
    pub engine_used: EngineKind,
}

impl RecognitionResult {
    /// Confidence is clamped into `[0, 1]`; NaN collapses to zero.
    pub fn new(text: String, confidence: f32, engine_used: EngineKind) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            text,
            confidence,
            engine_used,
        }
    }
}
