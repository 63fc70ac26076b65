use std::fmt;

/// Container of a stored synthesis artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactFormat {
    Mp3,
    Wav,
}

impl ArtifactFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactFormat::Mp3 => "mp3",
            ArtifactFormat::Wav => "wav",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ArtifactFormat::Mp3 => "audio/mpeg",
            ArtifactFormat::Wav => "audio/wav",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "wav" => Some(Self::Wav),
            _ => None,
        }
    }

    /// Identifies the container from its leading bytes.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WAVE" {
            return Some(Self::Wav);
        }
        if data.starts_with(b"ID3") {
            return Some(Self::Mp3);
        }
        match data {
            [0xFF, second, ..] if second & 0xE0 == 0xE0 => Some(Self::Mp3),
            _ => None,
        }
    }
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
