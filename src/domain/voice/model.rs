use serde::{Deserialize, Serialize};

pub const DEFAULT_FILE_NAME: &str = "audio";
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// One uploaded audio sample, forwarded to the provider as-is
#[derive(Clone, PartialEq)]
pub struct AudioSample {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl AudioSample {
    /// Build a sample, falling back to generic metadata when the upload carried none
    pub fn new(file_name: Option<String>, content_type: Option<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
            content_type: content_type
                .filter(|ct| !ct.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// Audio payloads can be megabytes; only their size is useful in logs.
impl std::fmt::Debug for AudioSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioSample")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// A validated voice cloning request. Construct through [`CloneRequest::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct CloneRequest {
    pub name: String,
    pub description: Option<String>,
    pub remove_background_noise: bool,
    pub files: Vec<AudioSample>,
}

impl CloneRequest {
    /// Validate the request: the name must not be blank and at least one file is required
    pub fn new(
        name: String,
        description: Option<String>,
        remove_background_noise: bool,
        files: Vec<AudioSample>,
    ) -> Result<Self, String> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err("Voice name is required".to_string());
        }

        if files.is_empty() {
            return Err("At least one audio file is required".to_string());
        }

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            name,
            description,
            remove_background_noise,
            files,
        })
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(AudioSample::len).sum()
    }
}

/// Response for POST /api/voice/clone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloneResult {
    pub voice_id: String,
    pub requires_verification: bool,
}
