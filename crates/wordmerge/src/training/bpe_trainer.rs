//! # Vocab Trainer

use crate::{
    errors::{WMResult, WordmergeError},
    segmentation::markers::DEFAULT_UNK_TOKEN,
    training::{
        CountType,
        utility::{WordCounter, WordTable},
    },
    types::{Symbol, TokenType, WMHashSet, concat_pair},
    vocab::{BpeModel, MergeList, SymbolVocab},
};

/// The smallest usable vocab size: the unknown token plus one symbol.
pub const MIN_VOCAB_SIZE: usize = 2;

/// Options for [`BpeTrainer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BpeTrainerOptions {
    /// The target vocab size, including the unknown token.
    pub vocab_size: usize,

    /// The reserved unknown token.
    pub unk_token: Symbol,
}

impl BpeTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `vocab_size` - The target vocabulary size.
    ///
    /// ## Returns
    /// A new `BpeTrainerOptions` instance, using [`DEFAULT_UNK_TOKEN`].
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            unk_token: DEFAULT_UNK_TOKEN.into(),
        }
    }

    /// Sets the vocab size.
    ///
    /// ## Arguments
    /// * `vocab_size` - The desired vocabulary size; must be >= 2.
    ///
    /// ## Returns
    /// The updated `BpeTrainerOptions` instance.
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Sets the unknown token.
    ///
    /// ## Arguments
    /// * `unk_token` - The reserved unknown token.
    ///
    /// ## Returns
    /// The updated `BpeTrainerOptions` instance.
    pub fn with_unk_token<S: Into<Symbol>>(
        self,
        unk_token: S,
    ) -> Self {
        Self {
            unk_token: unk_token.into(),
            ..self
        }
    }

    /// Initializes a [`BpeTrainer`] from these options.
    pub fn init<C: CountType>(self) -> BpeTrainer<C> {
        BpeTrainer::new(self)
    }
}

/// Raw training output, before id assignment.
#[derive(Debug, Clone)]
pub struct TrainResults {
    /// The learned merges, in learned order.
    pub merges: MergeList,

    /// Every surviving symbol, excluding the unknown token.
    pub symbols: WMHashSet<Symbol>,
}

/// Trainer for learning word-level symbol pair merges.
///
/// Each call to [`BpeTrainer::train`] owns its word and pair tables
/// for its duration; nothing is shared between runs.
///
/// # Parameters
/// * `C` - the type used to store counts in the word counts.
#[derive(Debug, Clone)]
pub struct BpeTrainer<C: CountType = u32> {
    /// Trainer options.
    pub options: BpeTrainerOptions,

    /// The word counter.
    pub word_counter: WordCounter<C>,
}

impl<C: CountType> BpeTrainer<C> {
    /// Initializes a [`BpeTrainer`].
    pub fn new(options: BpeTrainerOptions) -> Self {
        Self {
            options,
            word_counter: WordCounter::new(),
        }
    }

    /// Update word counts inplace from a sample iterator.
    ///
    /// ## Arguments
    /// * `samples` - An iterator over lines of text.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, samples)))]
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.word_counter.update_from_samples(samples);
    }

    /// Build the initial symbol set; the unknown token plus every base symbol.
    ///
    /// If that already exceeds the target size, only the most frequent
    /// base symbols are kept (ties broken lexicographically).
    fn initial_symbols(
        &self,
        table: &WordTable<C>,
    ) -> WMHashSet<Symbol> {
        let vocab_size = self.options.vocab_size;
        let unk_token = &self.options.unk_token;

        let mut alphabet = table.symbol_counts();
        alphabet.retain(|(s, _)| s != unk_token);

        if alphabet.len() + 1 > vocab_size {
            log::warn!(
                "Alphabet of {} symbols exceeds vocab size {}; keeping the {} most frequent",
                alphabet.len(),
                vocab_size,
                vocab_size - 1
            );
            alphabet.sort_by(|(a, ac), (b, bc)| bc.cmp(ac).then_with(|| a.cmp(b)));
            alphabet.truncate(vocab_size - 1);
        }

        alphabet.into_iter().map(|(s, _)| s).collect()
    }

    /// Learn merges until the target vocab size is reached,
    /// or no eligible pair remains.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    fn train_basic_merges(&self) -> WMResult<TrainResults> {
        let vocab_size = self.options.vocab_size;
        if vocab_size < MIN_VOCAB_SIZE {
            return Err(WordmergeError::InvalidArgument { vocab_size });
        }
        if self.word_counter.is_empty() {
            return Err(WordmergeError::EmptyInput);
        }

        let mut table: WordTable<C> = self.word_counter.to_symbol_word_counts().collect();
        log::info!("Starting BPE training: {} distinct words", table.len());

        let mut symbols = self.initial_symbols(&table);
        let mut merges = MergeList::default();

        // The unknown token occupies one slot.
        let target = vocab_size - 1;
        let mut last_log_percent = 0;

        log::info!(
            "Starting merge loop: {} base symbols, target {}",
            symbols.len(),
            target
        );
        while symbols.len() < target {
            let stats = table.pair_stats();
            let Some((pair, count)) = stats.best_pair() else {
                log::info!("No mergeable pairs remain; stopping early");
                break;
            };
            let pair = pair.clone();

            let changed = table.merge_pair(&pair);
            let merged = concat_pair(&pair);
            log::debug!(
                "merge {}: {:?} + {:?} -> {:?} (frequency: {count}, words: {changed})",
                merges.len(),
                pair.0,
                pair.1,
                merged
            );

            // The unknown token already holds its own slot.
            if merged != self.options.unk_token {
                symbols.insert(merged);
            }
            merges.push(pair);

            // Log progress every 10%.
            let current_percent = (symbols.len() * 100) / target;
            if current_percent / 10 > last_log_percent / 10 {
                log::info!(
                    "Progress: {}% ({}/{} symbols, {} merges)",
                    current_percent.min(100),
                    symbols.len(),
                    target,
                    merges.len()
                );
                last_log_percent = current_percent;
            }
        }

        log::info!(
            "Finished training: {} merges completed, {} symbols",
            merges.len(),
            symbols.len()
        );
        Ok(TrainResults { merges, symbols })
    }

    /// Trains a [`BpeModel<T>`].
    ///
    /// The resulting model will contain:
    /// * the learned merges, in learned order,
    /// * a vocabulary of the unknown token at id `0`, followed by every
    ///   surviving symbol in lexicographic order.
    ///
    /// ## Returns
    /// A `Result` containing the model, or:
    /// * [`WordmergeError::InvalidArgument`] if `vocab_size < 2`,
    /// * [`WordmergeError::EmptyInput`] if no words were counted.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn train<T: TokenType>(self) -> WMResult<BpeModel<T>> {
        let TrainResults { merges, symbols } = self.train_basic_merges()?;
        let vocab = SymbolVocab::from_symbols(&self.options.unk_token, symbols)?;
        BpeModel::new(merges, vocab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BpeTokenizer, types::SymbolPair};

    fn pair(
        a: &str,
        b: &str,
    ) -> SymbolPair {
        (a.into(), b.into())
    }

    #[test]
    fn test_trainer_options() {
        let options = BpeTrainerOptions::new(1000);

        assert_eq!(options.vocab_size, 1000);
        assert_eq!(options.unk_token, DEFAULT_UNK_TOKEN);

        let options = options.with_vocab_size(2000).with_unk_token("[UNK]");

        assert_eq!(options.vocab_size, 2000);
        assert_eq!(options.unk_token, "[UNK]");
    }

    #[test]
    fn test_invalid_vocab_size() {
        for vocab_size in [0, 1] {
            let mut trainer = BpeTrainerOptions::new(vocab_size).init::<u32>();
            trainer.update_from_samples(["hello"]);
            assert!(matches!(
                trainer.train::<u32>(),
                Err(WordmergeError::InvalidArgument { vocab_size: v }) if v == vocab_size
            ));
        }
    }

    #[test]
    fn test_empty_input() {
        let mut trainer = BpeTrainerOptions::new(10).init::<u32>();
        trainer.update_from_samples(["", "  \t ", "\n"]);
        assert!(matches!(
            trainer.train::<u32>(),
            Err(WordmergeError::EmptyInput)
        ));
    }

    #[test]
    fn test_train_merges() {
        let mut trainer = BpeTrainerOptions::new(12).init::<u32>();
        trainer.update_from_samples(["aaab aab", "ab"]);

        let model = trainer.train::<u16>().unwrap();

        // Base: <unk>, ▁, a, b; 8 merges requested, 6 possible.
        // The first three pairs tie at 3; (▁, a) is encountered first.
        assert_eq!(
            model.merges().as_slice(),
            &[
                pair("\u{2581}", "a"),
                pair("\u{2581}a", "a"),
                pair("\u{2581}aa", "a"),
                pair("\u{2581}aaa", "b"),
                pair("\u{2581}aa", "b"),
                pair("\u{2581}a", "b"),
            ]
        );
        assert_eq!(
            model.vocab().symbols(),
            &[
                "<unk>",
                "a",
                "b",
                "\u{2581}",
                "\u{2581}a",
                "\u{2581}aa",
                "\u{2581}aaa",
                "\u{2581}aaab",
                "\u{2581}aab",
                "\u{2581}ab",
            ]
        );
    }

    #[test]
    fn test_alphabet_truncated_to_vocab_size() {
        let mut trainer = BpeTrainerOptions::new(2).init::<u32>();
        trainer.update_from_samples(["hello"]);
        let model = trainer.clone().train::<u32>().unwrap();
        assert!(model.merges().is_empty());
        assert_eq!(model.vocab().symbols(), &["<unk>", "l"]);

        // Ties at frequency 1 break lexicographically.
        let model = BpeTrainer {
            options: trainer.options.clone().with_vocab_size(3),
            ..trainer
        }
        .train::<u32>()
        .unwrap();
        assert_eq!(model.vocab().symbols(), &["<unk>", "e", "l"]);
    }

    #[test]
    fn test_custom_unk_token() {
        let mut trainer = BpeTrainerOptions::new(10)
            .with_unk_token("a")
            .init::<u32>();
        trainer.update_from_samples(["ab"]);

        let model = trainer.train::<u32>().unwrap();
        assert_eq!(model.unk_token(), "a");
        assert_eq!(model.vocab().lookup_token("a"), Some(0));
        assert_eq!(model.vocab().symbols()[0], "a");
        assert!(model.vocab().len() <= 10);
    }

    #[test]
    fn test_merge_spelling_unk_token() {
        let mut tokenizer: BpeTokenizer = BpeTokenizer::new("ab");
        tokenizer.train(["ab cab dab"], 9).unwrap();

        // (a, b) is learned, but "ab" keeps only its id-0 slot.
        assert_eq!(
            tokenizer.merges().unwrap().as_slice(),
            &[
                pair("a", "b"),
                pair("\u{2581}", "ab"),
                pair("\u{2581}", "c"),
                pair("\u{2581}c", "ab"),
            ]
        );
        assert_eq!(
            tokenizer.vocab().unwrap().symbols(),
            &[
                "ab",
                "a",
                "b",
                "c",
                "d",
                "\u{2581}",
                "\u{2581}ab",
                "\u{2581}c",
                "\u{2581}cab",
            ]
        );

        assert_eq!(tokenizer.encode("ab zab").unwrap(), vec![6, 5, 0, 0]);
    }

    #[test]
    fn test_narrow_counts_saturate() {
        let mut trainer = BpeTrainerOptions::new(6).init::<u8>();
        trainer.update_from_samples(std::iter::repeat_n("ab ab", 200));

        let model = trainer.train::<u32>().unwrap();
        assert_eq!(
            model.merges().as_slice(),
            &[pair("\u{2581}", "a"), pair("\u{2581}a", "b")]
        );
    }

    #[test]
    fn test_deterministic() {
        let corpus = [
            "the quick brown fox jumps over the lazy dog",
            "the lazy dog sleeps",
            "quick quick quick",
        ];

        let train = || {
            let mut trainer = BpeTrainerOptions::new(40).init::<u64>();
            trainer.update_from_samples(corpus);
            trainer.train::<u32>().unwrap()
        };

        assert_eq!(train(), train());
    }
}
