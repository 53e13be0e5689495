//! Concrete end-to-end scenarios over canonically written sections.
//!
//! Each test writes a section with the crate's encoder and drives the
//! lookup primitives against it, checking exact expected values rather
//! than round-trip identities (those live in the property suite).

use gramdex::testing::build_token_store;
use gramdex::{
    bitselect, encode_frequencies, encode_monotonic, encode_partitioned, lookup_frequency,
    lookup_monotonic, lookup_pair_monotonic, lookup_pair_partition, lookup_partition, mapping,
    search_monotonic, search_partition,
};

use crate::common::{QUANTUM_SWEEP, REFERENCE_SEQUENCE, REFERENCE_VOCAB};

#[test]
fn trie_exact_and_missing_words() {
    let store = build_token_store(REFERENCE_VOCAB);
    for &(word, id) in REFERENCE_VOCAB {
        assert_eq!(mapping(&store, word), Some(id), "word {:?}", word);
    }
    // Close misses around stored words.
    assert_eq!(mapping(&store, b"abe"), None);
    assert_eq!(mapping(&store, b"ordi"), None);
    assert_eq!(mapping(&store, b"ordins"), None);
    assert_eq!(mapping(&store, b"o"), None);
    assert_eq!(mapping(&store, b"z"), None);
    // The root is an interim node.
    assert_eq!(mapping(&store, b""), None);
}

#[test]
fn monotonic_lookups_across_quanta() {
    for quantum in QUANTUM_SWEEP {
        let buf = encode_monotonic(&REFERENCE_SEQUENCE, None, quantum).unwrap();
        assert_eq!(lookup_monotonic(&buf, quantum, 0), 0);
        assert_eq!(lookup_monotonic(&buf, quantum, 3), 10);
        assert_eq!(lookup_monotonic(&buf, quantum, 7), 1000);
        assert_eq!(search_monotonic(&buf, quantum, 0, 8, 100), Some(6));
        assert_eq!(search_monotonic(&buf, quantum, 0, 8, 5), None);
    }
}

#[test]
fn monotonic_pair_mid_sequence() {
    let buf = encode_monotonic(&REFERENCE_SEQUENCE, None, 4).unwrap();
    assert_eq!(lookup_pair_monotonic(&buf, 4, 5), (12, 100));
}

#[test]
fn partitioned_agrees_with_flat_encoding() {
    let flat = encode_monotonic(&REFERENCE_SEQUENCE, None, 2).unwrap();
    let part = encode_partitioned(&REFERENCE_SEQUENCE, 4, 2).unwrap();
    for ix in 0..REFERENCE_SEQUENCE.len() as u32 {
        assert_eq!(
            lookup_partition(&part, 4, 2, ix),
            lookup_monotonic(&flat, 2, ix),
            "index {}",
            ix
        );
    }
    // Index 3 is the last slot of chunk 0, so the pair spans the boundary
    // and takes the two-lookup branch.
    assert_eq!(lookup_pair_partition(&part, 4, 2, 3), (10, 11));
    assert_eq!(search_partition(&part, 4, 2, 0, 8, 100), Some(6));
}

#[test]
fn frequency_stream_scenario() {
    // Written from ranks whose tally order yields the table [0, 5, 7, 99]
    // and codeword indexes [0, 1, 2, 2, 1, 0, 3].
    let ranks = [0u16, 5, 7, 7, 5, 0, 99];
    let buf = encode_frequencies(&ranks, 4).unwrap();
    assert_eq!(lookup_frequency(&buf, 4, 0), 0);
    assert_eq!(lookup_frequency(&buf, 4, 3), 7);
    assert_eq!(lookup_frequency(&buf, 4, 6), 99);
}

#[test]
fn bitselect_reference_pattern() {
    let buf = [0b1010_0101u8, 0b0000_0010];
    let expected = [0u32, 2, 5, 7, 9];
    for (k, &pos) in expected.iter().enumerate() {
        assert_eq!(bitselect(&buf, k as u32 + 1), pos);
    }
}
