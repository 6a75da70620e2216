use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One generation call: which model to run and what to feed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
        }
    }

    /// Rejects empty fields. Content checks such as prompt length are left to
    /// the service.
    pub fn validate(&self) -> Result<()> {
        if self.model.is_empty() {
            return Err(Error::validation("model name must not be empty"));
        }
        // URL path normalization drops these, leaving no model segment.
        if self.model == "." || self.model == ".." {
            return Err(Error::validation(format!(
                "model name {:?} is not a valid path segment",
                self.model
            )));
        }
        if self.prompt.is_empty() {
            return Err(Error::validation("prompt must not be empty"));
        }
        Ok(())
    }

    /// JSON body sent to `/v1/llm/{model}`. The model travels in the path.
    pub(crate) fn body(&self) -> PromptBody<'_> {
        PromptBody {
            prompt: &self.prompt,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PromptBody<'a> {
    pub prompt: &'a str,
}

/// Generated text, returned exactly as the service produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub result: String,
}
