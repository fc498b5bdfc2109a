//! # Vocabulary
//!
//! * [`MergeList`] - the ordered ``(Symbol, Symbol)`` merges.
//! * [`SymbolVocab`] - the ``{ Symbol <-> T }`` id table.
//! * [`BpeModel`] - the pair of both; the output of training.

#[cfg(feature = "io")]
pub mod io;

mod bpe_model;
mod merge_list;
mod symbol_vocab;

#[doc(inline)]
pub use bpe_model::BpeModel;
#[doc(inline)]
pub use merge_list::MergeList;
#[doc(inline)]
pub use symbol_vocab::SymbolVocab;
