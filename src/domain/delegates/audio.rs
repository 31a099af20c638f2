//! Audio source delegate.

use crate::domain::entities::ApiSession;

/// Opus frame of silence, sent while a source is muted.
pub const OPUS_SILENCE_FRAME: [u8; 3] = [0xF8, 0xFF, 0xFE];

/// Transforms encoded audio frames, e.g. to change volume or pause.
pub trait AudioTransformer: Send + Sync {
    /// Name used to find and remove the transformer again.
    fn name(&self) -> &str;
    fn transform(&self, frame: Vec<u8>) -> Vec<u8>;
}

/// Plumbing shared by every audio source of a session.
pub trait AudioSourceDelegate: Send {
    fn session(&self) -> &ApiSession;

    /// Append a transformer; frames pass through transformers in insertion
    /// order.
    fn add_transformer(&mut self, transformer: Box<dyn AudioTransformer>);

    /// Remove all transformers with this name. Returns whether any was
    /// removed.
    fn remove_transformer(&mut self, name: &str) -> bool;
    fn remove_all_transformers(&mut self);
    fn has_transformers(&self) -> bool;
    fn set_muted(&mut self, muted: bool);
    fn is_muted(&self) -> bool;

    /// Run a frame through the transformer chain, or replace it with
    /// silence while muted.
    fn process_frame(&self, frame: Vec<u8>) -> Vec<u8>;
}
