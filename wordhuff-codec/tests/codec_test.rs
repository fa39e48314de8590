//! Integration tests for the word-level Huffman codec.

use proptest::prelude::*;
use std::collections::HashMap;
use wordhuff_codec::{HuffmanCodec, Node};
use wordhuff_core::{BitSequence, FrequencyTable, WordHuffError, text_length};
use wordhuff_count::{CountConfig, FrequencyCounter};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn freqs(entries: &[(&str, u64)]) -> FrequencyTable {
    entries.iter().map(|&(w, c)| (w, c)).collect()
}

#[test]
fn test_count_then_encode_pipeline() {
    init_logger();
    let text = "it was the best of times it was the worst of times \
                it was the age of wisdom it was the age of foolishness";
    let words: Vec<&str> = text.split_whitespace().collect();

    let counter = FrequencyCounter::new(CountConfig::new(4)).expect("pool");
    let table = counter.count(&words).expect("count failed");
    let codec = HuffmanCodec::build(&table).expect("build failed");

    let bits = codec.compress(&words).expect("compression failed");
    assert_eq!(bits.len() as u64, codec.code_table().weighted_length(&table).unwrap());

    let decoded = codec.decompress(&bits).expect("decompression failed");
    assert_eq!(decoded, words);

    // Uncompressed text size against the packed output.
    let original_bytes = text_length(&words);
    assert_eq!(original_bytes, words.join(" ").len() as u64);
    assert!(bits.as_bytes().len() as u64 * 4 < original_bytes);

    // Frequent words get the shortest codes.
    let it_len = codec.code("it").unwrap().len();
    let wisdom_len = codec.code("wisdom").unwrap().len();
    assert!(it_len <= wisdom_len);
}

#[test]
fn test_text_round_trip_through_string_form() {
    let codec = HuffmanCodec::build(&freqs(&[("the", 5), ("cat", 2), ("sat", 1)])).unwrap();
    let bits = codec.compress(&["sat", "the", "cat"]).unwrap();
    let text = bits.to_string();
    assert_eq!(text, "00101");

    let parsed: BitSequence = text.parse().unwrap();
    assert_eq!(codec.decompress(&parsed).unwrap(), vec!["sat", "the", "cat"]);
}

#[test]
fn test_error_cases() {
    assert!(matches!(
        HuffmanCodec::build(&freqs(&[("x", 1)])),
        Err(WordHuffError::InvalidInput { .. })
    ));

    let ab = HuffmanCodec::build(&freqs(&[("a", 1), ("b", 1)])).unwrap();
    assert!(matches!(
        ab.compress(&["z"]),
        Err(WordHuffError::UnknownSymbol { word }) if word == "z"
    ));

    let abc = HuffmanCodec::build(&freqs(&[("a", 1), ("b", 1), ("c", 1)])).unwrap();
    // c = 0, a = 10, b = 11: the trailing "1" stops at the node above a and b.
    assert_eq!(abc.code("c").unwrap().to_string(), "0");
    let bits: BitSequence = "01".parse().unwrap();
    assert!(matches!(
        abc.decompress(&bits),
        Err(WordHuffError::TruncatedInput { bit_position: 2 })
    ));
}

#[test]
fn test_root_is_internal_and_weights_sum() {
    fn check(node: &Node) -> u64 {
        match node {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal {
                weight,
                left,
                right,
            } => {
                let sum = check(left) + check(right);
                assert_eq!(*weight, sum);
                sum
            }
        }
    }

    let codec = HuffmanCodec::build(&freqs(&[("a", 3), ("b", 9), ("c", 1), ("d", 4), ("e", 4)]))
        .unwrap();
    assert!(!codec.root().is_leaf());
    assert_eq!(check(codec.root()), 21);
}

#[test]
fn test_zero_counts_still_get_codes() {
    let codec = HuffmanCodec::build(&freqs(&[("never", 0), ("rare", 0), ("common", 10)])).unwrap();
    let bits = codec.compress(&["never", "common", "rare"]).unwrap();
    assert_eq!(codec.decompress(&bits).unwrap(), vec!["never", "common", "rare"]);
}

fn vocabulary() -> impl Strategy<Value = HashMap<String, u64>> {
    prop::collection::hash_map("[a-z]{1,6}", 0..50u64, 2..24)
}

proptest! {
    #[test]
    fn test_codes_are_unique_and_prefix_free(map in vocabulary()) {
        let codec = HuffmanCodec::build(&FrequencyTable::from(map.clone())).unwrap();
        let codes: Vec<(&str, &BitSequence)> = codec.code_table().iter().collect();

        prop_assert_eq!(codes.len(), map.len());
        for (i, (_, a)) in codes.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for (j, (_, b)) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.is_prefix_of(b));
                }
            }
        }
    }

    #[test]
    fn test_round_trip(map in vocabulary(), picks in prop::collection::vec(any::<prop::sample::Index>(), 1..64)) {
        let codec = HuffmanCodec::build(&FrequencyTable::from(map.clone())).unwrap();
        let mut vocab: Vec<&String> = map.keys().collect();
        vocab.sort();
        let words: Vec<&str> = picks.iter().map(|i| i.get(&vocab).as_str()).collect();

        let bits = codec.compress(&words).unwrap();
        prop_assert_eq!(codec.decompress(&bits).unwrap(), words);
    }

    #[test]
    fn test_build_is_deterministic(map in vocabulary()) {
        let first = HuffmanCodec::build(&FrequencyTable::from(map.clone())).unwrap();
        // Fresh map, fresh hasher seed.
        let reordered: HashMap<String, u64> = map.iter().map(|(k, v)| (k.clone(), *v)).collect();
        let second = HuffmanCodec::build(&FrequencyTable::from(reordered)).unwrap();
        prop_assert_eq!(first.code_table(), second.code_table());
    }

    #[test]
    fn test_higher_count_never_gets_longer_code(map in vocabulary()) {
        let codec = HuffmanCodec::build(&FrequencyTable::from(map.clone())).unwrap();
        for (x, &fx) in &map {
            for (y, &fy) in &map {
                if fx > fy {
                    let lx = codec.code(x).unwrap().len();
                    let ly = codec.code(y).unwrap().len();
                    prop_assert!(lx <= ly, "{}:{} has {} bits, {}:{} has {}", x, fx, lx, y, fy, ly);
                }
            }
        }
    }
}
