//! # Ordered Merge List

use crate::{
    segmentation::{SymbolWord, markers::is_end_of_word},
    types::{Symbol, SymbolPair, concat_pair},
};

/// The learned merges, in the exact order they were learned.
///
/// Order is significant: encoding replays merges in this order
/// to reproduce the segmentation seen during training.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeList {
    merges: Vec<SymbolPair>,
}

impl From<Vec<SymbolPair>> for MergeList {
    fn from(merges: Vec<SymbolPair>) -> Self {
        Self { merges }
    }
}

impl<'a> IntoIterator for &'a MergeList {
    type Item = &'a SymbolPair;
    type IntoIter = core::slice::Iter<'a, SymbolPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.merges.iter()
    }
}

impl MergeList {
    /// Append a newly learned merge.
    pub fn push(
        &mut self,
        pair: SymbolPair,
    ) {
        self.merges.push(pair);
    }

    /// The number of merges.
    pub fn len(&self) -> usize {
        self.merges.len()
    }

    /// Are there no merges?
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty()
    }

    /// Iterate the merges in learned order.
    pub fn iter(&self) -> core::slice::Iter<'_, SymbolPair> {
        self.merges.iter()
    }

    /// View the merges as a slice.
    pub fn as_slice(&self) -> &[SymbolPair] {
        &self.merges
    }

    /// Iterate the merged symbols, in learned order.
    pub fn merged_symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.merges.iter().map(concat_pair)
    }

    /// Apply every merge, in order, to a word.
    pub fn apply(
        &self,
        word: &mut SymbolWord,
    ) {
        word.apply_merges(&self.merges);
    }

    /// Find the first merge which involves the end-of-word marker.
    ///
    /// A trained list never contains one; loaded lists are checked.
    pub fn find_marker_merge(&self) -> Option<&SymbolPair> {
        self.merges
            .iter()
            .find(|(a, b)| is_end_of_word(a) || is_end_of_word(b))
    }
}
