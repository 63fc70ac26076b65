use std::fmt;

use uuid::Uuid;

use super::{ArtifactFormat, AudioId};

/// Storage key of a synthesis artifact: `{uuid}.{ext}`.
///
/// Client-supplied names only round-trip through [`ArtifactName::parse`], so a
/// key can never contain path separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactName {
    id: AudioId,
    format: ArtifactFormat,
}

impl ArtifactName {
    pub fn new(id: AudioId, format: ArtifactFormat) -> Self {
        Self { id, format }
    }

    pub fn parse(name: &str) -> Option<Self> {
        let (stem, ext) = name.rsplit_once('.')?;
        let uuid = Uuid::parse_str(stem).ok()?;
        let format = ArtifactFormat::from_extension(ext)?;
        Some(Self::new(AudioId::from_uuid(uuid), format))
    }

    pub fn id(&self) -> AudioId {
        self.id
    }

    pub fn format(&self) -> ArtifactFormat {
        self.format
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.id.as_uuid(), self.format.extension())
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}
