//! # Symbol Word Buffer

use crate::{
    segmentation::markers::{END_OF_WORD_MARKER, WORD_START_MARKER_STR, is_end_of_word},
    types::{Symbol, SymbolPair, concat_pair},
};

/// A mutable sequence of symbols for one whitespace-delimited word.
///
/// Built as ``[▁, c1, .., cn, </w>]``; iteratively rewritten by merges,
/// both during training and when encoding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolWord {
    symbols: Vec<Symbol>,
}

impl<S: Into<Symbol>> FromIterator<S> for SymbolWord {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl SymbolWord {
    /// Build the marked symbol sequence for a single word.
    ///
    /// # Arguments
    /// * `word` - a whitespace-free word; each code point becomes one symbol.
    pub fn from_word(word: &str) -> Self {
        let mut symbols: Vec<Symbol> = Vec::with_capacity(word.len() + 2);
        symbols.push(WORD_START_MARKER_STR.into());

        let mut buf = [0u8; 4];
        symbols.extend(word.chars().map(|c| Symbol::from(&*c.encode_utf8(&mut buf))));

        symbols.push(END_OF_WORD_MARKER.into());
        Self { symbols }
    }

    /// View the symbols as a slice.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Release the symbols.
    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }

    /// Get the number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Is this word empty?
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get an iterator over every adjacent symbol pair.
    pub fn pairs(&self) -> impl Iterator<Item = (&Symbol, &Symbol)> {
        self.symbols.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Get an iterator over the adjacent pairs which may be merged.
    ///
    /// Pairs touching the end-of-word marker are never eligible.
    pub fn eligible_pairs(&self) -> impl Iterator<Item = (&Symbol, &Symbol)> {
        self.pairs()
            .filter(|(a, b)| !is_end_of_word(a) && !is_end_of_word(b))
    }

    /// Does this word contain `pair` as adjacent symbols?
    pub fn contains_pair(
        &self,
        pair: &SymbolPair,
    ) -> bool {
        let (a, b) = pair;
        self.pairs().any(|(x, y)| x == a && y == b)
    }

    /// Merge all non-overlapping occurrences of `pair`, scanning left to right.
    ///
    /// # Arguments
    /// * `pair` - the pair to replace with its concatenation.
    ///
    /// # Returns
    /// `true` if any occurrence was replaced.
    pub fn merge_pair(
        &mut self,
        pair: &SymbolPair,
    ) -> bool {
        if !self.contains_pair(pair) {
            return false;
        }

        let (a, b) = pair;
        let replacement = concat_pair(pair);

        let old = std::mem::take(&mut self.symbols);
        self.symbols.reserve(old.len());

        let mut iter = old.into_iter().peekable();
        while let Some(current) = iter.next() {
            if &current == a && iter.peek() == Some(b) {
                // Skip 'b'.
                iter.next();
                self.symbols.push(replacement.clone());
            } else {
                self.symbols.push(current);
            }
        }

        true
    }

    /// Replay a sequence of merges, in order, each exactly once.
    ///
    /// # Arguments
    /// * `merges` - the learned merges, in learned order.
    pub fn apply_merges<'a, I>(
        &mut self,
        merges: I,
    ) where
        I: IntoIterator<Item = &'a SymbolPair>,
    {
        for pair in merges {
            if self.symbols.len() < 2 {
                break;
            }
            self.merge_pair(pair);
        }
    }
}
