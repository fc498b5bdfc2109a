//! # Vocabulary Training
//!
//! Support for learning a [`crate::vocab::BpeModel`] from a text corpus.
//!
//! Training:
//! 1. splits each line on whitespace into words, and counts them;
//! 2. marks each word as ``[▁, c1, .., cn, </w>]``;
//! 3. repeatedly merges the most frequent adjacent pair (never one touching
//!    ``</w>``), until the vocabulary reaches the target size or no pair remains;
//! 4. numbers the unknown token `0`, and the surviving symbols in
//!    lexicographic order from `1`.
//!
//! Ties between equally frequent pairs go to the pair encountered first,
//! scanning words in first-occurrence order and pairs left to right.
//! Two runs over the same corpus always produce the same model.
//!
//! ## Training Example
//!
//! ```rust
//! use wordmerge::training::BpeTrainerOptions;
//! use wordmerge::vocab::BpeModel;
//!
//! let mut trainer = BpeTrainerOptions::new(30).init::<u32>();
//! trainer.update_from_samples(["the quick brown fox", "the quick blue hare"]);
//!
//! let model: BpeModel<u32> = trainer.train().expect("training failed");
//! assert!(model.vocab().len() <= 30);
//! ```
//!
//! The trainer has no parallelism; the full word table is held in memory.

pub mod utility;

mod bpe_trainer;
mod training_types;

#[doc(inline)]
pub use bpe_trainer::{BpeTrainer, BpeTrainerOptions, MIN_VOCAB_SIZE, TrainResults};
#[doc(inline)]
pub use training_types::CountType;
