//! # Word Frequency Table

use crate::{
    segmentation::{SymbolWord, markers::is_end_of_word},
    training::{CountType, utility::PairStats},
    types::{Symbol, SymbolPair, WMHashMap},
};

/// The ``{ SymbolWord -> C }`` frequency table rewritten by each merge.
///
/// Holds one entry per distinct source word, so merging never makes
/// two entries equal; entries stay in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTable<C: CountType> {
    words: Vec<SymbolWord>,
    counts: Vec<C>,
}

impl<C: CountType> FromIterator<(SymbolWord, C)> for WordTable<C> {
    fn from_iter<I: IntoIterator<Item = (SymbolWord, C)>>(iter: I) -> Self {
        let (words, counts) = iter.into_iter().unzip();
        Self { words, counts }
    }
}

impl<C: CountType> WordTable<C> {
    /// The words, in first-occurrence order.
    pub fn words(&self) -> &[SymbolWord] {
        &self.words
    }

    /// The counts; `counts()[i]` is the count of `words()[i]`.
    pub fn counts(&self) -> &[C] {
        &self.counts
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Compute the current pair statistics.
    pub fn pair_stats(&self) -> PairStats<C> {
        PairStats::from_word_table(&self.words, &self.counts)
    }

    /// Weighted frequencies of every distinct symbol, excluding the end-of-word marker.
    ///
    /// ## Returns
    /// ``(symbol, count)`` pairs, in first-encountered order.
    pub fn symbol_counts(&self) -> Vec<(Symbol, C)> {
        let mut index: WMHashMap<Symbol, usize> = Default::default();
        let mut out: Vec<(Symbol, C)> = Vec::new();

        for (word, &count) in self.words.iter().zip(&self.counts) {
            for symbol in word.symbols() {
                if is_end_of_word(symbol) {
                    continue;
                }
                match index.get(symbol) {
                    Some(&idx) => out[idx].1 = out[idx].1.saturating_add(count),
                    None => {
                        index.insert(symbol.clone(), out.len());
                        out.push((symbol.clone(), count));
                    }
                }
            }
        }

        out
    }

    /// Merge every non-overlapping occurrence of `pair` in every word.
    ///
    /// ## Returns
    /// The number of words which changed.
    pub fn merge_pair(
        &mut self,
        pair: &SymbolPair,
    ) -> usize {
        self.words
            .iter_mut()
            .map(|word| word.merge_pair(pair))
            .filter(|&changed| changed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> WordTable<u32> {
        [
            (SymbolWord::from_word("low"), 5),
            (SymbolWord::from_word("lower"), 2),
            (SymbolWord::from_word("newest"), 6),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_symbol_counts() {
        let table = table();
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());

        let counts = table.symbol_counts();
        assert_eq!(
            counts
                .iter()
                .map(|(s, c)| (s.as_str(), *c))
                .collect::<Vec<_>>(),
            vec![
                ("\u{2581}", 13),
                ("l", 7),
                ("o", 7),
                ("w", 13),
                ("e", 14),
                ("r", 2),
                ("n", 6),
                ("s", 6),
                ("t", 6),
            ]
        );
    }

    #[test]
    fn test_merge_pair() {
        let mut table = table();

        let changed = table.merge_pair(&("l".into(), "o".into()));
        assert_eq!(changed, 2);

        assert_eq!(table.words()[0].symbols(), &["\u{2581}", "lo", "w", "</w>"]);
        assert_eq!(
            table.words()[1].symbols(),
            &["\u{2581}", "lo", "w", "e", "r", "</w>"]
        );
        assert_eq!(table.counts(), &[5, 2, 6]);

        let stats = table.pair_stats();
        assert_eq!(stats.get(&("lo".into(), "w".into())), Some(7));
        assert_eq!(stats.get(&("l".into(), "o".into())), None);
    }
}
