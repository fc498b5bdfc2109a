//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel encoders and decoders.
//!
//! A trained model is read-only, so batches may be encoded and decoded
//! concurrently against one shared model.

mod rayon_decoder;
mod rayon_encoder;

pub use rayon_decoder::ParallelRayonDecoder;
pub use rayon_encoder::ParallelRayonEncoder;
