//! # Token Decoders

mod symbol_decoder;
mod token_decoder;

#[doc(inline)]
pub use symbol_decoder::SymbolDecoder;
#[doc(inline)]
pub use token_decoder::TokenDecoder;
