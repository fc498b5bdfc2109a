//! # Word Segmentation
//!
//! The shared primitive of training and encoding: text is split on
//! whitespace into words, and each word becomes a [`SymbolWord`] of
//! ``[▁, c1, .., cn, </w>]`` which merges are then applied to.

pub mod markers;

mod symbol_word;
#[doc(inline)]
pub use symbol_word::SymbolWord;

/// Split text into whitespace-delimited words; empty tokens are dropped.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Split text into marked [`SymbolWord`]s.
pub fn segment_words(text: &str) -> impl Iterator<Item = SymbolWord> {
    split_words(text).map(SymbolWord::from_word)
}
