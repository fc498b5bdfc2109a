//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use compact_str::CompactString;
use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a token id.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max token in a vocabulary is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A vocabulary symbol.
///
/// Symbols are immutable once built; short symbols are stored inline,
/// which keeps the repeated clone/concat traffic of training cheap.
pub type Symbol = CompactString;

/// An ordered pair of adjacent symbols.
pub type SymbolPair = (Symbol, Symbol);

/// Concatenate a pair into its merged symbol.
pub fn concat_pair(pair: &SymbolPair) -> Symbol {
    let (a, b) = pair;
    let mut merged = Symbol::with_capacity(a.len() + b.len());
    merged.push_str(a);
    merged.push_str(b);
    merged
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WMHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WMHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type WMHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WMHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type WMHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WMHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Static check that a type is `Send` and `Sync`.
pub fn static_is_send_sync_check<S: Send + Sync>(_: &S) {}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_token_types() {
        struct IsToken<T: TokenType>(PhantomData<T>);

        let _: IsToken<u16>;
        let _: IsToken<u32>;
        let _: IsToken<u64>;
        let _: IsToken<usize>;
    }

    #[test]
    fn test_concat_pair() {
        let pair: SymbolPair = ("\u{2581}t".into(), "he".into());
        assert_eq!(concat_pair(&pair), "\u{2581}the");
    }
}
