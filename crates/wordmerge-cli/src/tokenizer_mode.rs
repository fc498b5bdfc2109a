/// The tokenizer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerMode {
    /// Encode from text to tokens.
    Encode,

    /// Decode from tokens to text.
    Decode,
}

/// Tokenizer mode argument group.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TokenizerModeArgs {
    /// Encode from text to tokens.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    encode: bool,

    /// Decode from tokens to text.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    decode: bool,
}

impl TokenizerModeArgs {
    /// Get the tokenizer mode.
    ///
    /// Clap requires exactly one of the flags; encode wins otherwise.
    pub fn mode(&self) -> TokenizerMode {
        if self.decode && !self.encode {
            TokenizerMode::Decode
        } else {
            TokenizerMode::Encode
        }
    }
}
