//! # Pair Statistics

use crate::{
    segmentation::SymbolWord,
    training::CountType,
    types::{SymbolPair, WMHashMap},
};

/// Insertion-ordered ``{ SymbolPair -> C }`` aggregate counts.
///
/// Pairs are kept in the order they are first encountered: words in table
/// order, pairs left to right within each word.
#[derive(Debug, Clone)]
pub struct PairStats<C: CountType> {
    index: WMHashMap<SymbolPair, usize>,
    counts: Vec<(SymbolPair, C)>,
}

impl<C: CountType> Default for PairStats<C> {
    fn default() -> Self {
        Self {
            index: Default::default(),
            counts: Vec::new(),
        }
    }
}

impl<C: CountType> PairStats<C> {
    /// Build [`PairStats`] from a word table.
    ///
    /// # Arguments
    /// * `words` - a sequence of words; assumed to be unique.
    /// * `counts` - `counts[i]` is the count of `words[i]`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(words, counts)))]
    pub fn from_word_table(
        words: &[SymbolWord],
        counts: &[C],
    ) -> Self {
        let mut stats = Self::default();
        let zero = C::zero();

        for (word, &count) in words.iter().zip(counts) {
            if count == zero {
                continue;
            }
            for (a, b) in word.eligible_pairs() {
                stats.add((a.clone(), b.clone()), count);
            }
        }

        stats
    }

    /// Add `count` to a pair's aggregate; saturates at `C::max_value()`.
    pub fn add(
        &mut self,
        pair: SymbolPair,
        count: C,
    ) {
        match self.index.get(&pair) {
            Some(&idx) => {
                let total = &mut self.counts[idx].1;
                *total = total.saturating_add(count);
            }
            None => {
                self.index.insert(pair.clone(), self.counts.len());
                self.counts.push((pair, count));
            }
        }
    }

    /// The number of distinct pairs.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Are there no pairs?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Look up a pair's aggregate count.
    pub fn get(
        &self,
        pair: &SymbolPair,
    ) -> Option<C> {
        self.index.get(pair).map(|&idx| self.counts[idx].1)
    }

    /// Iterate ``(pair, count)`` in first-encountered order.
    pub fn iter(&self) -> impl Iterator<Item = (&SymbolPair, C)> {
        self.counts.iter().map(|(p, c)| (p, *c))
    }

    /// Select the most frequent pair.
    ///
    /// Ties go to the pair encountered first.
    pub fn best_pair(&self) -> Option<(&SymbolPair, C)> {
        let zero = C::zero();
        let mut best: Option<(&SymbolPair, C)> = None;
        for (pair, count) in self.iter() {
            if count == zero {
                continue;
            }
            match best {
                Some((_, best_count)) if best_count >= count => {}
                _ => best = Some((pair, count)),
            }
        }
        best
    }
}
