//! # Symbol Vocabulary ``{ Symbol <-> T }``

use crate::{
    errors::{WMResult, WordmergeError},
    types::{Symbol, TokenType, WMHashMap},
};

/// Token vocabulary as a bidirectional ``{ Symbol <-> T }`` map.
///
/// Ids are dense: the unknown token is always id `0`, and every
/// other symbol is numbered in lexicographic order from `1`.
#[derive(Debug, Clone)]
pub struct SymbolVocab<T: TokenType> {
    symbol_to_token: WMHashMap<Symbol, T>,
    token_to_symbol: Vec<Symbol>,
}

impl<T: TokenType> PartialEq for SymbolVocab<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.token_to_symbol == other.token_to_symbol
    }
}

impl<T: TokenType> Eq for SymbolVocab<T> {}

impl<T: TokenType> SymbolVocab<T> {
    /// Build a vocabulary from an unordered symbol set.
    ///
    /// ## Arguments
    /// * `unk_token` - the reserved unknown token; assigned id `0`.
    /// * `symbols` - the trained symbols; duplicates and `unk_token` are ignored.
    ///
    /// ## Returns
    /// A `Result` containing the new vocabulary, or
    /// [`WordmergeError::VocabSizeOverflow`] if the ids do not fit `T`.
    pub fn from_symbols<I, S>(
        unk_token: &str,
        symbols: I,
    ) -> WMResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let mut ordered: Vec<Symbol> = symbols
            .into_iter()
            .map(Into::into)
            .filter(|s| s != unk_token)
            .collect();
        ordered.sort_unstable();
        ordered.dedup();
        ordered.insert(0, unk_token.into());

        Self::from_ordered_symbols(ordered)
    }

    /// Build a vocabulary from symbols already ordered by id.
    ///
    /// ## Arguments
    /// * `symbols` - `symbols[i]` has id `i`; `symbols[0]` is the unknown token.
    ///
    /// ## Returns
    /// A `Result` containing the new vocabulary, or an error if the list
    /// is empty, contains duplicates, or does not fit `T`.
    pub fn from_ordered_symbols(symbols: Vec<Symbol>) -> WMResult<Self> {
        if symbols.is_empty() {
            return Err(WordmergeError::VocabConflict(
                "vocabulary must contain the unknown token".to_string(),
            ));
        }

        let size = symbols.len();
        if T::from_usize(size - 1).is_none() {
            return Err(WordmergeError::VocabSizeOverflow { size });
        }

        let mut symbol_to_token: WMHashMap<Symbol, T> = Default::default();
        symbol_to_token.reserve(size);

        for (idx, symbol) in symbols.iter().enumerate() {
            let token = T::from_usize(idx).ok_or(WordmergeError::VocabSizeOverflow { size })?;
            if let Some(prev) = symbol_to_token.insert(symbol.clone(), token) {
                return Err(WordmergeError::VocabConflict(format!(
                    "duplicate symbol {symbol:?} at ids {prev} and {token}"
                )));
            }
        }

        Ok(Self {
            symbol_to_token,
            token_to_symbol: symbols,
        })
    }

    /// The reserved unknown token.
    pub fn unk_token(&self) -> &Symbol {
        &self.token_to_symbol[0]
    }

    /// The id of the reserved unknown token.
    pub fn unk_id(&self) -> T {
        T::zero()
    }

    /// The number of entries, including the unknown token.
    pub fn len(&self) -> usize {
        self.token_to_symbol.len()
    }

    /// Is the vocabulary empty?
    ///
    /// A constructed vocabulary always holds the unknown token.
    pub fn is_empty(&self) -> bool {
        self.token_to_symbol.is_empty()
    }

    /// All symbols, ordered by id.
    pub fn symbols(&self) -> &[Symbol] {
        &self.token_to_symbol
    }

    /// Iterate ``(token, symbol)`` entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &Symbol)> {
        self.token_to_symbol
            .iter()
            .enumerate()
            .filter_map(|(idx, s)| T::from_usize(idx).map(|t| (t, s)))
    }

    /// Look up the id for a symbol.
    pub fn lookup_token(
        &self,
        symbol: &str,
    ) -> Option<T> {
        self.symbol_to_token.get(symbol).copied()
    }

    /// Look up the id for a symbol, substituting the unknown id.
    pub fn token_or_unk(
        &self,
        symbol: &str,
    ) -> T {
        self.lookup_token(symbol).unwrap_or_else(|| self.unk_id())
    }

    /// Look up the symbol for an id.
    pub fn lookup_symbol(
        &self,
        token: T,
    ) -> Option<&Symbol> {
        token
            .to_usize()
            .and_then(|idx| self.token_to_symbol.get(idx))
    }

    /// Look up the symbol for an id, substituting the unknown token.
    pub fn symbol_or_unk(
        &self,
        token: T,
    ) -> &Symbol {
        self.lookup_symbol(token)
            .unwrap_or_else(|| self.unk_token())
    }
}
