//! # Symbol Table Decoder

use std::sync::Arc;

use crate::{decoders::TokenDecoder, types::TokenType, vocab::BpeModel};

/// Decoder which maps ids back through the vocabulary's id table.
///
/// Ids missing from the vocabulary decode as the unknown token's text.
#[derive(Debug, Clone)]
pub struct SymbolDecoder<T: TokenType> {
    model: Arc<BpeModel<T>>,
}

impl<T: TokenType> SymbolDecoder<T> {
    /// Create a new decoder over a shared model.
    pub fn new(model: Arc<BpeModel<T>>) -> Self {
        Self { model }
    }

    /// The underlying model.
    pub fn model(&self) -> &Arc<BpeModel<T>> {
        &self.model
    }
}

impl<T: TokenType> TokenDecoder<T> for SymbolDecoder<T> {
    fn decode_append_symbols(
        &self,
        tokens: &[T],
        text: &mut String,
    ) {
        let vocab = self.model.vocab();
        for &token in tokens {
            text.push_str(vocab.symbol_or_unk(token));
        }
    }
}
