//! # Parallel Decoder

use std::marker::PhantomData;

use crate::{decoders::TokenDecoder, errors::WMResult, types::TokenType};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches when available.
#[derive(Clone)]
pub struct ParallelRayonDecoder<T: TokenType, D: TokenDecoder<T>> {
    /// Wrapped decoder.
    pub inner: D,

    _marker: PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Create a new parallel token decoder.
    ///
    /// ## Arguments
    /// * `inner` - The token decoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonDecoder` instance.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, D> TokenDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    fn decode_append_symbols(
        &self,
        tokens: &[T],
        text: &mut String,
    ) {
        self.inner.decode_append_symbols(tokens, text)
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[Vec<T>],
    ) -> WMResult<Vec<String>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        decoders::SymbolDecoder,
        encoders::{MergeEncoder, TokenEncoder},
        training::BpeTrainerOptions,
        types::static_is_send_sync_check,
    };

    #[test]
    fn test_decoder() {
        type T = u32;

        let samples = vec![
            "the quick brown fox".to_string(),
            "the quick blue hare".to_string(),
        ];

        let mut trainer = BpeTrainerOptions::new(30).init::<u32>();
        trainer.update_from_samples(&samples);
        let model = Arc::new(trainer.train::<T>().unwrap());

        let encoder = MergeEncoder::new(model.clone());
        let decoder = ParallelRayonDecoder::new(SymbolDecoder::new(model));
        static_is_send_sync_check(&decoder);

        let batch = encoder.try_encode_batch(&samples).unwrap();
        assert_eq!(decoder.try_decode_batch_to_strings(&batch).unwrap(), samples);
    }
}
