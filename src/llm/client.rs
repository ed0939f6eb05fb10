//! Note generator interface and provider selection

use async_trait::async_trait;

use crate::config::Settings;
use crate::consult::ConsultationRecord;
use crate::llm::deepseek::DeepSeekClient;
use crate::{PawnoteError, Result};

/// Turns a consultation record into a discharge note.
#[async_trait]
pub trait NoteGenerator: Send + Sync {
    async fn generate(&self, record: &ConsultationRecord) -> Result<String>;
}

/// Build a note generator from runtime settings.
pub fn build_generator(settings: &Settings) -> Result<Box<dyn NoteGenerator>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "deepseek" => Ok(Box::new(DeepSeekClient::from_settings(settings)?)),
        other => Err(PawnoteError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: deepseek",
            other
        ))),
    }
}
