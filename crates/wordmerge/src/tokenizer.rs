//! # Tokenizer
//!
//! [`BpeTokenizer`] ties training and the codec together behind an
//! explicit `Untrained -> Trained` lifecycle.

use std::sync::Arc;

use crate::{
    decoders::{SymbolDecoder, TokenDecoder},
    encoders::{MergeEncoder, TokenEncoder},
    errors::{WMResult, WordmergeError},
    segmentation::markers::DEFAULT_UNK_TOKEN,
    training::BpeTrainerOptions,
    types::{Symbol, TokenType},
    vocab::{BpeModel, MergeList, SymbolVocab},
};

/// The lifecycle state of a [`BpeTokenizer`].
#[derive(Debug, Clone, Default)]
pub enum TokenizerState<T: TokenType> {
    /// No model; encode and decode fail with [`WordmergeError::NotTrained`].
    #[default]
    Untrained,

    /// A trained model, with its codec.
    Trained {
        /// The encoder.
        encoder: MergeEncoder<T>,

        /// The decoder.
        decoder: SymbolDecoder<T>,
    },
}

impl<T: TokenType> TokenizerState<T> {
    /// Build the trained state for a model.
    pub fn trained(model: Arc<BpeModel<T>>) -> Self {
        Self::Trained {
            encoder: MergeEncoder::new(model.clone()),
            decoder: SymbolDecoder::new(model),
        }
    }
}

/// A word-level BPE tokenizer.
///
/// Training replaces any previous model wholesale. Encode and decode only
/// read the shared model, so a trained tokenizer can be shared across
/// threads; training takes `&mut self` and so is serialized by the caller.
///
/// ```rust
/// use wordmerge::BpeTokenizer;
///
/// let mut tokenizer: BpeTokenizer = BpeTokenizer::default();
/// tokenizer
///     .train(["the quick brown fox", "the quick blue hare"], 30)
///     .unwrap();
///
/// let tokens = tokenizer.encode("the quick brown fox").unwrap();
/// assert_eq!(tokenizer.decode(&tokens).unwrap(), "the quick brown fox");
/// ```
#[derive(Debug, Clone)]
pub struct BpeTokenizer<T: TokenType = u32> {
    unk_token: Symbol,
    state: TokenizerState<T>,
}

impl<T: TokenType> Default for BpeTokenizer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_UNK_TOKEN)
    }
}

impl<T: TokenType> BpeTokenizer<T> {
    /// Create a new, untrained tokenizer.
    ///
    /// ## Arguments
    /// * `unk_token` - the reserved unknown token used by the next training run.
    pub fn new<S: Into<Symbol>>(unk_token: S) -> Self {
        Self {
            unk_token: unk_token.into(),
            state: TokenizerState::Untrained,
        }
    }

    /// Create a trained tokenizer from an existing model.
    pub fn from_model(model: BpeModel<T>) -> Self {
        Self {
            unk_token: model.unk_token().clone(),
            state: TokenizerState::trained(Arc::new(model)),
        }
    }

    /// The reserved unknown token.
    pub fn unk_token(&self) -> &Symbol {
        &self.unk_token
    }

    /// The current lifecycle state.
    pub fn state(&self) -> &TokenizerState<T> {
        &self.state
    }

    /// Has a model been trained or loaded?
    pub fn is_trained(&self) -> bool {
        matches!(self.state, TokenizerState::Trained { .. })
    }

    /// The trained model, if any.
    pub fn model(&self) -> Option<&Arc<BpeModel<T>>> {
        match &self.state {
            TokenizerState::Untrained => None,
            TokenizerState::Trained { encoder, .. } => Some(encoder.model()),
        }
    }

    /// The learned merges, if trained.
    pub fn merges(&self) -> Option<&MergeList> {
        self.model().map(|m| m.merges())
    }

    /// The vocabulary, if trained.
    pub fn vocab(&self) -> Option<&SymbolVocab<T>> {
        self.model().map(|m| m.vocab())
    }

    /// Train on a corpus of lines, replacing any previous model.
    ///
    /// On error the previous state is left untouched.
    ///
    /// Every base character is kept when the alphabet plus the unknown token
    /// fits in `vocab_size`. Otherwise only the `vocab_size - 1` most frequent
    /// characters are kept, and the dropped ones encode as the unknown token;
    /// training lines that use them no longer decode back to themselves.
    ///
    /// Word and pair counts are `u64`.
    ///
    /// ## Arguments
    /// * `corpus` - lines of text.
    /// * `vocab_size` - the target vocab size, including the unknown token.
    ///
    /// ## Returns
    /// * [`WordmergeError::InvalidArgument`] if `vocab_size < 2`,
    /// * [`WordmergeError::EmptyInput`] if the corpus has no words.
    pub fn train<I>(
        &mut self,
        corpus: I,
        vocab_size: usize,
    ) -> WMResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut trainer = BpeTrainerOptions::new(vocab_size)
            .with_unk_token(self.unk_token.clone())
            .init::<u64>();
        trainer.update_from_samples(corpus);

        let model = trainer.train::<T>()?;
        log::info!(
            "Trained tokenizer: {} merges, {} vocab entries",
            model.merges().len(),
            model.vocab().len()
        );

        self.state = TokenizerState::trained(Arc::new(model));
        Ok(())
    }

    /// Encode text into token ids.
    ///
    /// ## Returns
    /// [`WordmergeError::NotTrained`] before training, for any input.
    pub fn encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> WMResult<Vec<T>> {
        match &self.state {
            TokenizerState::Untrained => Err(WordmergeError::NotTrained),
            TokenizerState::Trained { encoder, .. } => encoder.try_encode(text),
        }
    }

    /// Decode token ids into text.
    ///
    /// ## Returns
    /// [`WordmergeError::NotTrained`] before training, for any input.
    pub fn decode<S: AsRef<[T]>>(
        &self,
        tokens: S,
    ) -> WMResult<String> {
        match &self.state {
            TokenizerState::Untrained => Err(WordmergeError::NotTrained),
            TokenizerState::Trained { decoder, .. } => decoder.try_decode_to_string(tokens),
        }
    }

    /// Save the trained model as JSON.
    #[cfg(feature = "io")]
    pub fn save<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> WMResult<()> {
        let model = self.model().ok_or(WordmergeError::NotTrained)?;
        crate::vocab::io::save_model_path(model, path)
    }

    /// Load a trained tokenizer from a JSON model.
    #[cfg(feature = "io")]
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> WMResult<Self> {
        Ok(Self::from_model(crate::vocab::io::load_model_path(path)?))
    }
}
