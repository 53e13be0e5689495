// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. It holds
//! the canonical store-assembly helpers so every test and bench builds
//! artifacts the same way instead of hand-rolling layouts.

#![doc(hidden)]

use crate::header::StoreHeader;
use crate::trie::TrieBuilder;

/// Assemble a complete artifact holding the given token/id pairs:
/// signature, section offset table, section marker, packed trie.
///
/// Panics on out-of-contract input; tests pass well-formed entries.
pub fn build_token_store(entries: &[(&[u8], u32)]) -> Vec<u8> {
    let mut builder = TrieBuilder::new();
    for &(word, value) in entries {
        builder.insert(word, value).unwrap();
    }
    let mut buf = Vec::new();
    let mut header = StoreHeader::default();
    header.write(&mut buf).unwrap();
    push_section_marker(&mut buf, b"[trie]");
    header.trie = buf.len() as u32;
    builder.write_into(&mut buf);

    // Patch the header now that the section position is known.
    let mut patched = Vec::new();
    header.write(&mut patched).unwrap();
    buf[..patched.len()].copy_from_slice(&patched);
    buf
}

/// Word-align the buffer, then append a 16-byte zero-padded ASCII marker.
/// Markers only aid hexdump reading; no decoder consumes them.
pub fn push_section_marker(buf: &mut Vec<u8>, label: &[u8]) {
    while buf.len() & 3 != 0 {
        buf.push(0);
    }
    let mut marker = [0u8; 16];
    marker[..label.len()].copy_from_slice(label);
    buf.extend_from_slice(&marker);
}

/// Deterministic non-decreasing sequence with uneven gaps, for list
/// fixtures. Mixes short steps with large jumps so both the dense and
/// sparse paths of the high-bits scan get exercised.
pub fn uneven_sequence(n: usize) -> Vec<u64> {
    let mut value = 0u64;
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            value += state >> 59;
            value
        })
        .collect()
}

/// Deterministic rank sequence with a skewed distribution, for frequency
/// stream fixtures.
pub fn skewed_ranks(n: usize) -> Vec<u16> {
    let mut state = 0x9E37_79B9u32;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(0x2C92_77B5).wrapping_add(0xAC56_4B05);
            // Square a small draw so low ranks dominate.
            let draw = (state >> 27) as u16;
            (draw * draw) >> 5
        })
        .collect()
}
