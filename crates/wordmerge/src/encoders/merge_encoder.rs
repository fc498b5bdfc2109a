//! # Merge Replay Encoder

use std::sync::Arc;

use crate::{
    encoders::TokenEncoder,
    segmentation::{
        SymbolWord,
        markers::{is_end_of_word, strip_end_of_word},
    },
    types::TokenType,
    vocab::BpeModel,
};

/// Encoder which replays the learned merges over each word, in learned order.
///
/// Symbols missing from the vocabulary encode as the unknown token.
#[derive(Debug, Clone)]
pub struct MergeEncoder<T: TokenType> {
    model: Arc<BpeModel<T>>,
}

impl<T: TokenType> MergeEncoder<T> {
    /// Create a new encoder over a shared model.
    pub fn new(model: Arc<BpeModel<T>>) -> Self {
        Self { model }
    }

    /// The underlying model.
    pub fn model(&self) -> &Arc<BpeModel<T>> {
        &self.model
    }

    /// Segment a word into its final symbols, without id lookup.
    pub fn segment_word(
        &self,
        word: &str,
    ) -> SymbolWord {
        let mut symbols = SymbolWord::from_word(word);
        self.model.merges().apply(&mut symbols);
        symbols
    }
}

impl<T: TokenType> TokenEncoder<T> for MergeEncoder<T> {
    fn encode_append_word(
        &self,
        word: &str,
        tokens: &mut Vec<T>,
    ) {
        let vocab = self.model.vocab();
        tokens.extend(
            self.segment_word(word)
                .symbols()
                .iter()
                .filter(|s| !is_end_of_word(s))
                .map(|s| vocab.token_or_unk(strip_end_of_word(s))),
        );
    }
}
