// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Artifact header and store parameters.
//!
//! A store file opens with a 16-byte signature and a table of ten `u32`
//! section offsets, trie first. The header is the single source of truth
//! for where sections live: the lookup primitives themselves take section
//! base offsets from their callers, so this is the one place that maps
//! section names to positions. Everything after the offset table is
//! section payload.
//!
//! Quantum sizes are not stored in the artifact; they are configuration the
//! writer and reader agree on out-of-band. [`StoreParams`] is that
//! agreement as a serializable value, with defaults matching the canonical
//! writer.

use std::io::{self, Read, Write};

use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Signature bytes opening every store artifact.
pub const MAGIC: [u8; 16] = *b"gramdex 01.00.00";

/// Number of `u32` section offsets following the signature.
pub const NUM_SECTIONS: usize = 10;

/// Offset table entry for a section the artifact does not carry.
pub const NO_SECTION: u32 = 0;

// ============================================================================
// STORE PARAMETERS
// ============================================================================

/// Quantum sizes the artifact was written with.
///
/// Carried out-of-band by higher layers (typically persisted beside the
/// artifact) and passed to every lookup. Any power of two works; the
/// defaults are the canonical writer's choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreParams {
    /// Skip-index density of plain monotonic lists.
    pub ef_quantum: u32,
    /// Chunk size of partitioned lists (their inner lists use
    /// `ef_quantum`).
    pub partition_quantum: u32,
    /// Quantum-index density of frequency codeword streams.
    pub freq_quantum: u32,
}

impl Default for StoreParams {
    fn default() -> Self {
        Self {
            ef_quantum: 128,
            partition_quantum: 1 << 11,
            freq_quantum: 1024,
        }
    }
}

// ============================================================================
// HEADER
// ============================================================================

/// The section offset table at the front of a store artifact.
///
/// Offsets are absolute byte positions within the artifact. The trie offset
/// comes first; [`crate::trie::mapping`] reads it directly. A zero offset
/// means the section is absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreHeader {
    pub trie: u32,
    pub freq_buckets: u32,
    pub unigram_ptrs: u32,
    pub bigrams: u32,
    pub bigram_ptrs: u32,
    pub trigrams: u32,
    pub unigram_freqs: u32,
    pub bigram_freqs: u32,
    pub trigram_freqs: u32,
    pub vocab: u32,
}

impl StoreHeader {
    /// Signature plus offset table: 16 + 10 * 4.
    pub const SIZE: usize = 16 + 4 * NUM_SECTIONS;

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&MAGIC)?;
        for offset in self.offsets() {
            w.write_all(&offset.to_le_bytes())?;
        }
        Ok(())
    }

    pub fn read<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut magic = [0u8; 16];
        r.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid store signature: {:?}", magic),
            ));
        }
        let mut buf = [0u8; 4 * NUM_SECTIONS];
        r.read_exact(&mut buf)?;
        let off =
            |i: usize| u32::from_le_bytes([buf[4 * i], buf[4 * i + 1], buf[4 * i + 2], buf[4 * i + 3]]);
        Ok(Self {
            trie: off(0),
            freq_buckets: off(1),
            unigram_ptrs: off(2),
            bigrams: off(3),
            bigram_ptrs: off(4),
            trigrams: off(5),
            unigram_freqs: off(6),
            bigram_freqs: off(7),
            trigram_freqs: off(8),
            vocab: off(9),
        })
    }

    /// The offsets in table order.
    pub fn offsets(&self) -> [u32; NUM_SECTIONS] {
        [
            self.trie,
            self.freq_buckets,
            self.unigram_ptrs,
            self.bigrams,
            self.bigram_ptrs,
            self.trigrams,
            self.unigram_freqs,
            self.bigram_freqs,
            self.trigram_freqs,
            self.vocab,
        ]
    }
}
