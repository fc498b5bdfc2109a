//! # Trained BPE Model

use crate::{
    errors::{WMResult, WordmergeError},
    types::{Symbol, TokenType},
    vocab::{MergeList, SymbolVocab},
};

/// The persisted output of training: the ordered merges plus the vocabulary.
///
/// Immutable once built; shared read-only between encoders and decoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BpeModel<T: TokenType> {
    merges: MergeList,
    vocab: SymbolVocab<T>,
}

impl<T: TokenType> BpeModel<T> {
    /// Build a model.
    ///
    /// ## Arguments
    /// * `merges` - the learned merges, in learned order.
    /// * `vocab` - the symbol vocabulary.
    ///
    /// ## Returns
    /// A `Result` containing the model, or [`WordmergeError::VocabConflict`]
    /// if a merge involves the end-of-word marker.
    pub fn new(
        merges: MergeList,
        vocab: SymbolVocab<T>,
    ) -> WMResult<Self> {
        if let Some((a, b)) = merges.find_marker_merge() {
            return Err(WordmergeError::VocabConflict(format!(
                "merge ({a:?}, {b:?}) crosses the end-of-word marker"
            )));
        }

        Ok(Self { merges, vocab })
    }

    /// The ordered merge list.
    pub fn merges(&self) -> &MergeList {
        &self.merges
    }

    /// The symbol vocabulary.
    pub fn vocab(&self) -> &SymbolVocab<T> {
        &self.vocab
    }

    /// The reserved unknown token.
    pub fn unk_token(&self) -> &Symbol {
        self.vocab.unk_token()
    }

    /// Release the parts.
    pub fn into_parts(self) -> (MergeList, SymbolVocab<T>) {
        (self.merges, self.vocab)
    }
}
