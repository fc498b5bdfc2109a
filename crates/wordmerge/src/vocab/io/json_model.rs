//! # JSON Model IO

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{
    errors::{WMResult, WordmergeError},
    types::{Symbol, SymbolPair, TokenType},
    vocab::{BpeModel, SymbolVocab},
};

/// The serialized form of a [`BpeModel`].
///
/// ```json
/// { "unk_token": "<unk>", "merges": [["▁", "t"], ...], "symbols": ["<unk>", ...] }
/// ```
///
/// `symbols` is ordered by id; `symbols[0]` must be `unk_token`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ModelDocument {
    /// The reserved unknown token.
    pub unk_token: Symbol,

    /// The merges, in learned order.
    pub merges: Vec<SymbolPair>,

    /// The vocabulary symbols, ordered by id.
    pub symbols: Vec<Symbol>,
}

impl<T: TokenType> From<&BpeModel<T>> for ModelDocument {
    fn from(model: &BpeModel<T>) -> Self {
        Self {
            unk_token: model.unk_token().clone(),
            merges: model.merges().as_slice().to_vec(),
            symbols: model.vocab().symbols().to_vec(),
        }
    }
}

impl ModelDocument {
    /// Validate and convert into a [`BpeModel`].
    pub fn into_model<T: TokenType>(self) -> WMResult<BpeModel<T>> {
        if self.symbols.first() != Some(&self.unk_token) {
            return Err(WordmergeError::VocabConflict(format!(
                "unknown token {:?} must have id 0",
                self.unk_token
            )));
        }

        let vocab = SymbolVocab::<T>::from_ordered_symbols(self.symbols)?;
        BpeModel::new(self.merges.into(), vocab)
    }
}

/// Write a [`BpeModel`] as JSON.
///
/// # Arguments
/// * `model` - the model to save.
/// * `writer` - the target writer.
pub fn write_model<T, W>(
    model: &BpeModel<T>,
    writer: &mut W,
) -> WMResult<()>
where
    T: TokenType,
    W: Write,
{
    serde_json::to_writer_pretty(&mut *writer, &ModelDocument::from(model))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Read a [`BpeModel`] from JSON.
///
/// # Arguments
/// * `reader` - the source reader.
pub fn read_model<T, R>(reader: R) -> WMResult<BpeModel<T>>
where
    T: TokenType,
    R: Read,
{
    let doc: ModelDocument = serde_json::from_reader(reader)?;
    doc.into_model()
}

/// Save a [`BpeModel`] to a JSON file.
///
/// # Arguments
/// * `model` - the model to save.
/// * `path` - the path to save the model to.
pub fn save_model_path<T, P>(
    model: &BpeModel<T>,
    path: P,
) -> WMResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_model(model, &mut writer)
}

/// Load a [`BpeModel`] from a JSON file.
///
/// # Arguments
/// * `path` - the path to the model file.
pub fn load_model_path<T, P>(path: P) -> WMResult<BpeModel<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    read_model(BufReader::new(File::open(path)?))
}
