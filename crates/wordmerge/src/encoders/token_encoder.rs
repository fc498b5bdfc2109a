//! # Token Encoder Trait

use crate::{errors::WMResult, segmentation::split_words, types::TokenType};

/// A trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Encode a single whitespace-free word, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `word` - The word to encode.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_word(
        &self,
        word: &str,
        tokens: &mut Vec<T>,
    );

    /// Encode text, appending to a target buffer.
    ///
    /// Word boundaries are not encoded separately; each word's first
    /// symbol carries the word-start marker.
    ///
    /// ## Arguments
    /// * `text` - The string slice to encode.
    /// * `tokens` - The target token buffer to append to.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        for word in split_words(text) {
            self.encode_append_word(word, tokens);
        }
    }

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A `Result` containing the vector of tokens or an error.
    fn try_encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> WMResult<Vec<T>> {
        let text = text.as_ref();
        let mut tokens = Vec::with_capacity(text.len() / 2);

        self.encode_append(text, &mut tokens);
        Ok(tokens)
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    ///
    /// ## Returns
    /// A `Result` containing the vector of token vectors or an error.
    fn try_encode_batch(
        &self,
        batch: &[String],
    ) -> WMResult<Vec<Vec<T>>> {
        batch.iter().map(|s| self.try_encode(s)).collect()
    }
}
