use bytes::Bytes;

/// Raw audio as received from a client, with whatever content type it claimed.
#[derive(Debug, Clone)]
pub struct AudioBlob {
    data: Bytes,
    content_type: Option<String>,
}

impl AudioBlob {
    pub fn new(data: impl Into<Bytes>, content_type: Option<String>) -> Self {
        Self {
            data: data.into(),
            content_type,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the declared content type belongs to the `audio/` family.
    pub fn is_audio_content_type(content_type: &str) -> bool {
        content_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("audio/")
    }
}
