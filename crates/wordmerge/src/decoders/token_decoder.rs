//! # Token Decoder Trait

use crate::{
    errors::WMResult,
    segmentation::markers::WORD_START_MARKER,
    types::TokenType,
};

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decode tokens into their raw concatenated symbols, appending to `text`.
    ///
    /// Word-start markers are left in place.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    /// * `text` - The target buffer to append to.
    fn decode_append_symbols(
        &self,
        tokens: &[T],
        text: &mut String,
    );

    /// Decodes tokens into a string.
    ///
    /// Every word-start marker becomes a space, and outer whitespace is trimmed;
    /// so runs of whitespace in the original text come back as single spaces.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    ///
    /// ## Returns
    /// A `Result` containing the decoded text.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    fn try_decode_to_string<S: AsRef<[T]>>(
        &self,
        tokens: S,
    ) -> WMResult<String> {
        let tokens = tokens.as_ref();
        let mut raw = String::with_capacity(tokens.len() * 4);
        self.decode_append_symbols(tokens, &mut raw);

        Ok(raw.replace(WORD_START_MARKER, " ").trim().to_string())
    }

    /// Decodes a batch of tokens.
    ///
    /// ## Arguments
    /// * `batch` - A batch of tokens.
    ///
    /// ## Returns
    /// A `Result` containing one decoded string per item.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[Vec<T>],
    ) -> WMResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}
