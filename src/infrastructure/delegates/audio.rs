//! Audio source delegate.

use std::sync::Arc;

use crate::domain::delegates::{AudioSourceDelegate, AudioTransformer, OPUS_SILENCE_FRAME};
use crate::domain::entities::ApiSession;

pub struct RestAudioSourceDelegate {
    session: Arc<ApiSession>,
    transformers: Vec<Box<dyn AudioTransformer>>,
    muted: bool,
}

impl RestAudioSourceDelegate {
    pub fn new(session: Arc<ApiSession>) -> Self {
        Self {
            session,
            transformers: Vec::new(),
            muted: false,
        }
    }
}

impl AudioSourceDelegate for RestAudioSourceDelegate {
    fn session(&self) -> &ApiSession {
        &self.session
    }

    fn add_transformer(&mut self, transformer: Box<dyn AudioTransformer>) {
        tracing::debug!(transformer = transformer.name(), "Audio transformer added");
        self.transformers.push(transformer);
    }

    fn remove_transformer(&mut self, name: &str) -> bool {
        let before = self.transformers.len();
        self.transformers.retain(|t| t.name() != name);
        self.transformers.len() != before
    }

    fn remove_all_transformers(&mut self) {
        self.transformers.clear();
    }

    fn has_transformers(&self) -> bool {
        !self.transformers.is_empty()
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn process_frame(&self, frame: Vec<u8>) -> Vec<u8> {
        if self.muted {
            return OPUS_SILENCE_FRAME.to_vec();
        }
        self.transformers
            .iter()
            .fold(frame, |frame, transformer| transformer.transform(frame))
    }
}
