// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-side lookup core for a static n-gram frequency store.
//!
//! The store is one immutable byte buffer, typically a read-only memory map
//! held open by the caller. It packs a vocabulary trie, frequency-rank
//! codeword streams, and Elias-Fano id sequences; this crate is the set of
//! primitives that decode them in place. Nothing here allocates beyond
//! small stack scratch, nothing mutates, and every call is a pure function
//! of the buffer and its integer arguments, so lookups can run from any
//! number of threads against one mapping without synchronization.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   ┌───────────────┐   ┌────────────────┐
//! │ bits.rs  │──▶│ monotonic.rs  │──▶│ partitioned.rs │
//! │ retrieve │   │ Elias-Fano    │   │ chunked lists  │
//! │bitselect │   │ + search      │   │ + search       │
//! └──────────┘   └───────────────┘   └────────────────┘
//!       │
//!       ▼
//! ┌──────────┐   ┌──────────┐   ┌───────────┐
//! │ freqs.rs │   │ trie.rs  │   │ header.rs │
//! │ rank     │   │ token →  │   │ signature,│
//! │ streams  │   │ id       │   │ sections  │
//! └──────────┘   └──────────┘   └───────────┘
//! ```
//!
//! Each lookup module also carries the canonical encoder for its section,
//! so tests and fixtures build bit-exact artifacts with the same code that
//! documents the layout.
//!
//! # Contracts
//!
//! The lookup primitives do not validate. Malformed buffers or
//! out-of-range indexes are outside the contract and end in a panic or
//! garbage, by design: these run in the innermost loops of n-gram scoring.
//! The [`contracts`] module offers debug-mode invariant checks callers can
//! opt into, and the encoders are fully validated paths.
//!
//! # Usage
//!
//! ```ignore
//! use gramdex::{mapping, lookup_frequency, StoreParams};
//!
//! let params = StoreParams::default();
//! let id = mapping(&map, b"hestur");
//! let rank = lookup_frequency(&map[freqs_base..], params.freq_quantum, id.unwrap());
//! ```

pub mod bits;
pub mod contracts;
pub mod freqs;
pub mod header;
pub mod monotonic;
pub mod partitioned;
pub mod testing;
pub mod trie;

pub use bits::{bitselect, retrieve, BitWriter};
pub use freqs::{encode_frequencies, lookup_frequency};
pub use header::{StoreHeader, StoreParams, MAGIC};
pub use monotonic::{
    encode_monotonic, lookup_monotonic, lookup_pair_monotonic, search_monotonic,
    search_monotonic_prefix,
};
pub use partitioned::{
    encode_partitioned, lookup_partition, lookup_pair_partition, search_partition,
    search_partition_prefix,
};
pub use trie::{mapping, TrieBuilder};
