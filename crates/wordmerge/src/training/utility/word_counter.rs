//! # Word Counter

use crate::{
    segmentation::{SymbolWord, split_words},
    training::CountType,
    types::{Symbol, WMHashMap},
};

/// Insertion-ordered word counter.
///
/// Words are kept in first-occurrence order across all samples;
/// that order is what makes merge tie-breaking deterministic.
#[derive(Debug, Clone)]
pub struct WordCounter<C: CountType> {
    index: WMHashMap<Symbol, usize>,
    entries: Vec<(Symbol, C)>,
}

impl<C: CountType> Default for WordCounter<C> {
    fn default() -> Self {
        Self {
            index: Default::default(),
            entries: Vec::new(),
        }
    }
}

impl<C: CountType> WordCounter<C> {
    /// Create a new word counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Have no words been counted?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate ``(word, count)`` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, C)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Release the counts, in first-occurrence order.
    pub fn release(self) -> Vec<(Symbol, C)> {
        self.entries
    }

    /// Count a single word; saturates at `C::max_value()`.
    pub fn add_word(
        &mut self,
        word: &str,
    ) {
        match self.index.get(word) {
            Some(&idx) => {
                let total = &mut self.entries[idx].1;
                *total = total.saturating_add(C::one());
            }
            None => {
                let key: Symbol = word.into();
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, C::one()));
            }
        }
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        for word in split_words(text.as_ref()) {
            self.add_word(word);
        }
    }

    /// Update word counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Convert to marked ``(SymbolWord, count)`` pairs, in first-occurrence order.
    pub fn to_symbol_word_counts(&self) -> impl Iterator<Item = (SymbolWord, C)> + '_ {
        self.entries
            .iter()
            .map(|(w, c)| (SymbolWord::from_word(w), *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counter() {
        let mut wc: WordCounter<u64> = WordCounter::new();
        assert!(wc.is_empty());

        let samples = vec!["Hello world", "  Foo world\tbar world ", ""];
        wc.update_from_samples(samples.iter());

        assert_eq!(wc.len(), 4);
        assert_eq!(
            wc.iter().collect::<Vec<_>>(),
            vec![("Hello", 1), ("world", 3), ("Foo", 1), ("bar", 1)]
        );

        let counts = wc.release();
        assert_eq!(counts[1], ("world".into(), 3));
    }

    #[test]
    fn test_word_counter_saturates() {
        let mut wc: WordCounter<u8> = WordCounter::new();
        wc.update_from_samples(std::iter::repeat_n("ab cd ab", 200));

        assert_eq!(
            wc.iter().collect::<Vec<_>>(),
            vec![("ab", u8::MAX), ("cd", 200)]
        );
    }

    #[test]
    fn test_to_symbol_word_counts() {
        let mut wc: WordCounter<u32> = WordCounter::new();
        wc.update_from_text("ab ab c");

        let words: Vec<(SymbolWord, u32)> = wc.to_symbol_word_counts().collect();
        assert_eq!(
            words,
            vec![
                (SymbolWord::from_word("ab"), 2),
                (SymbolWord::from_word("c"), 1),
            ]
        );
    }
}
