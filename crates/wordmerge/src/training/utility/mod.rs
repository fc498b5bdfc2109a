//! # Trainer Implementation Utilities

mod pair_stats;
#[doc(inline)]
pub use pair_stats::PairStats;

mod word_counter;
#[doc(inline)]
pub use word_counter::WordCounter;

mod word_table;
#[doc(inline)]
pub use word_table::WordTable;
