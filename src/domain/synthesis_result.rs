use super::ArtifactName;

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisResult {
    pub artifact: ArtifactName,
    pub duration_secs: f64,
}

impl SynthesisResult {
    pub fn file_name(&self) -> String {
        self.artifact.file_name()
    }

    pub fn media_type(&self) -> &'static str {
        self.artifact.format().media_type()
    }
}
