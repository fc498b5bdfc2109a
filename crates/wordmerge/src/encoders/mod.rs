//! # Token Encoders

mod merge_encoder;
mod token_encoder;

#[doc(inline)]
pub use merge_encoder::MergeEncoder;
#[doc(inline)]
pub use token_encoder::TokenEncoder;
