#![allow(missing_docs)]

use std::sync::Arc;

use wordmerge::{
    BpeTokenizer,
    WordmergeError,
    decoders::{SymbolDecoder, TokenDecoder},
    encoders::{MergeEncoder, TokenEncoder},
    training::BpeTrainerOptions,
};

#[test]
fn train_and_encode_decode_roundtrip() {
    let corpus = ["the quick brown fox", "the quick blue hare"];

    let mut tokenizer: BpeTokenizer = BpeTokenizer::default();
    tokenizer.train(corpus, 30).unwrap();

    let encoded = tokenizer.encode("the quick brown fox").unwrap();
    let decoded = tokenizer.decode(&encoded).unwrap();

    assert_eq!(decoded, "the quick brown fox");
}

#[test]
fn roundtrip_normalizes_whitespace() {
    let mut tokenizer: BpeTokenizer = BpeTokenizer::default();
    tokenizer
        .train(["the quick brown fox", "the quick blue hare"], 30)
        .unwrap();

    let encoded = tokenizer.encode("  the\tquick \n\n blue   fox ").unwrap();
    assert_eq!(tokenizer.decode(&encoded).unwrap(), "the quick blue fox");
}

#[test]
fn raises_when_not_trained() {
    let tokenizer: BpeTokenizer = BpeTokenizer::default();

    assert!(matches!(
        tokenizer.encode("hello"),
        Err(WordmergeError::NotTrained)
    ));
    assert!(matches!(
        tokenizer.decode([0u32]),
        Err(WordmergeError::NotTrained)
    ));
}

#[test]
fn unknown_token_handling() {
    let mut tokenizer: BpeTokenizer = BpeTokenizer::default();
    tokenizer.train(["hello world"], 10).unwrap();

    let encoded = tokenizer.encode("unknown token").unwrap();
    let unk_id = tokenizer.vocab().unwrap().unk_id();
    assert!(encoded.contains(&unk_id));

    // "u", "n", "k", "t" are unseen; "n" appears 4 times, "k" twice.
    assert_eq!(encoded.iter().filter(|&&t| t == unk_id).count(), 8);
}

#[test]
fn decode_substitutes_unknown_ids() {
    let mut tokenizer: BpeTokenizer = BpeTokenizer::default();
    tokenizer.train(["hello world"], 10).unwrap();

    let vocab = tokenizer.vocab().unwrap();
    let mut ids = tokenizer.encode("world").unwrap();
    ids.push(vocab.len() as u32 + 7);

    assert_eq!(tokenizer.decode(&ids).unwrap(), "world<unk>");
}

#[test]
fn vocab_size_two_boundary() {
    let mut tokenizer: BpeTokenizer = BpeTokenizer::default();
    tokenizer.train(["hello world"], 2).unwrap();

    let vocab = tokenizer.vocab().unwrap();
    assert_eq!(vocab.len(), 2);
    let symbols: Vec<&str> = vocab.symbols().iter().map(|s| s.as_str()).collect();
    assert_eq!(symbols, vec!["<unk>", "l"]);
    assert!(tokenizer.merges().unwrap().is_empty());

    // Characters dropped from the alphabet, "▁" included, encode as unknown.
    let encoded = tokenizer.encode("hello").unwrap();
    assert_eq!(encoded, vec![0, 0, 0, 1, 1, 0]);
    assert_eq!(
        tokenizer.decode(&encoded).unwrap(),
        "<unk><unk><unk>ll<unk>"
    );
}

#[test]
fn invalid_arguments() {
    let mut tokenizer: BpeTokenizer = BpeTokenizer::default();

    assert!(matches!(
        tokenizer.train(["hello"], 1),
        Err(WordmergeError::InvalidArgument { vocab_size: 1 })
    ));
    assert!(matches!(
        tokenizer.train(Vec::<String>::new(), 10),
        Err(WordmergeError::EmptyInput)
    ));
    assert!(matches!(
        tokenizer.train(["", " \t "], 10),
        Err(WordmergeError::EmptyInput)
    ));
}

#[test]
fn saturated_vocabulary_stops_early() {
    let mut tokenizer: BpeTokenizer = BpeTokenizer::default();
    tokenizer.train(["ab"], 1000).unwrap();

    // <unk>, ▁, a, b, ▁a, ▁ab
    let vocab = tokenizer.vocab().unwrap();
    assert_eq!(vocab.len(), 6);
    assert_eq!(tokenizer.merges().unwrap().len(), 2);
    assert_eq!(
        tokenizer.encode("ab").unwrap(),
        vec![vocab.lookup_token("\u{2581}ab").unwrap()]
    );
}

#[test]
fn encoding_is_shared_read_only() {
    let mut trainer = BpeTrainerOptions::new(40).init::<u32>();
    trainer.update_from_samples(["the quick brown fox", "the lazy dog"]);
    let model = Arc::new(trainer.train::<u32>().unwrap());

    let encoder = MergeEncoder::new(model.clone());
    let decoder = SymbolDecoder::new(model);

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["the quick dog", "the lazy fox", "brown"]
            .into_iter()
            .map(|text| {
                let encoder = &encoder;
                let decoder = &decoder;
                scope.spawn(move || {
                    let tokens = encoder.try_encode(text).unwrap();
                    (text, decoder.try_decode_to_string(&tokens).unwrap())
                })
            })
            .collect();

        for handle in handles {
            let (text, decoded) = handle.join().unwrap();
            assert_eq!(decoded, text);
        }
    });
}
