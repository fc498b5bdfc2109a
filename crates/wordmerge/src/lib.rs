//! # `wordmerge` Subword Tokenizer
//!
//! A word-level Byte Pair Encoding tokenizer over Unicode code points.
//!
//! Training learns an ordered list of symbol-pair merges and a vocabulary
//! from a corpus of lines; encoding replays those merges over each
//! whitespace-delimited word and maps the resulting symbols to ids.
//!
//! See:
//! * [`BpeTokenizer`] for the train / encode / decode lifecycle.
//! * [`training`] to learn a [`vocab::BpeModel`].
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into text.
//! * [`segmentation`] for the shared word / symbol primitives.
//! * [`vocab`] to manage merge lists, vocabularies, and model io.
//!
//! ## Word Markers
//!
//! Each word `w` is segmented as ``[▁, w[0], .., w[n-1], </w>]``:
//! * ``▁`` (U+2581) stands in for the whitespace before the word; decoding
//!   turns it back into a space.
//! * ``</w>`` ends the word; no merge may cross it, and it is never emitted.
//!
//! Decoding therefore normalizes whitespace: runs collapse to one space,
//! and the outer whitespace is trimmed.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust
//! use wordmerge::BpeTokenizer;
//!
//! let mut tokenizer: BpeTokenizer = BpeTokenizer::default();
//! tokenizer.train(["hello world"], 10).unwrap();
//!
//! let tokens = tokenizer.encode("unknown token").unwrap();
//! let unk_id = tokenizer.vocab().unwrap().unk_id();
//! assert!(tokens.contains(&unk_id));
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod segmentation;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{WMResult, WordmergeError};
#[doc(inline)]
pub use tokenizer::{BpeTokenizer, TokenizerState};
#[doc(inline)]
pub use types::{Symbol, SymbolPair, TokenType};
#[doc(inline)]
pub use vocab::{BpeModel, MergeList, SymbolVocab};
