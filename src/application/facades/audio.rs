//! Audio sources.

use crate::application::context::ApiContext;
use crate::domain::delegates::{AudioSourceDelegate, AudioTransformer, DelegateFactoryExt};
use crate::shared::error::DelegateError;

/// Frame plumbing of a long-lived audio source.
///
/// Unlike the builders this is kept around while audio plays, so its
/// methods take `&mut self` instead of consuming it.
pub struct AudioSource {
    delegate: Box<dyn AudioSourceDelegate>,
}

impl AudioSource {
    pub fn new(ctx: &ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            delegate: ctx
                .factory()
                .create_audio_source_delegate(ctx.session().clone())?,
        })
    }

    pub fn add_transformer(&mut self, transformer: impl AudioTransformer + 'static) {
        self.delegate.add_transformer(Box::new(transformer));
    }

    pub fn remove_transformer(&mut self, name: &str) -> bool {
        self.delegate.remove_transformer(name)
    }

    pub fn remove_all_transformers(&mut self) {
        self.delegate.remove_all_transformers();
    }

    pub fn has_transformers(&self) -> bool {
        self.delegate.has_transformers()
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.delegate.set_muted(muted);
    }

    pub fn is_muted(&self) -> bool {
        self.delegate.is_muted()
    }

    pub fn process_frame(&self, frame: Vec<u8>) -> Vec<u8> {
        self.delegate.process_frame(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::testing::context;
    use crate::domain::delegates::OPUS_SILENCE_FRAME;
    use crate::domain::rest::MockTransport;
    use pretty_assertions::assert_eq;

    struct Halve;

    impl AudioTransformer for Halve {
        fn name(&self) -> &str {
            "halve"
        }

        fn transform(&self, frame: Vec<u8>) -> Vec<u8> {
            frame.into_iter().map(|b| b / 2).collect()
        }
    }

    #[test]
    fn test_transform_then_mute() {
        let ctx = context(MockTransport::new());
        let mut source = AudioSource::new(&ctx).unwrap();
        source.add_transformer(Halve);
        assert_eq!(source.process_frame(vec![10, 20]), vec![5, 10]);

        source.set_muted(true);
        assert_eq!(source.process_frame(vec![10, 20]), OPUS_SILENCE_FRAME.to_vec());

        assert!(source.remove_transformer("halve"));
        assert!(!source.has_transformers());
    }
}
