// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode invariant checks over store sections.
//!
//! The lookup primitives trust their buffers completely; that is the
//! performance contract. These functions are the opt-in counterweight:
//! callers holding a freshly mapped or freshly written section can assert
//! its invariants once, up front, in builds where it matters. All checks:
//!
//! 1. Are **zero-cost in release builds** (they use `debug_assert!`)
//! 2. Fail loudly during development instead of decoding garbage
//! 3. Check the same invariants the encoders enforce on the way in
//!
//! The expensive checks decode whole sections; run them per artifact, not
//! per lookup.

use crate::bits::{read_u16, read_u32};
use crate::monotonic::lookup_monotonic;
use crate::partitioned::lookup_partition;
use crate::trie::{node_size, FLAG_CHILDLESS, FLAG_SINGLE, MAX_CHILDREN, NO_VALUE, VALUE_MASK};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

// The node header bit layout only works if the pieces tile exactly: two
// flags, a 7-bit ordinal, a 23-bit value, and an all-ones value sentinel.
const _: () = {
    assert!(FLAG_SINGLE | FLAG_CHILDLESS | (0x7F << 23) | VALUE_MASK == u32::MAX);
    assert!(FLAG_SINGLE & FLAG_CHILDLESS == 0);
    assert!((0x7F << 23) & VALUE_MASK == 0);
    assert!(NO_VALUE == VALUE_MASK);
    assert!(MAX_CHILDREN == 0x7F);
};

// ============================================================================
// MONOTONIC LIST CONTRACTS
// ============================================================================

/// Check a monotonic list header: a positive element count and at least
/// one low bit, as the canonical encoder guarantees.
#[inline]
pub fn check_monotonic_header(buf: &[u8]) {
    let n = read_u32(buf, 0);
    let lb = read_u16(buf, 4);
    debug_assert!(n > 0, "Contract violation: monotonic list with n = 0");
    debug_assert!(
        lb >= 1,
        "Contract violation: monotonic list with lb = 0 (n = {})",
        n
    );
}

/// Decode the whole list and check it never decreases. O(n · lookup).
#[inline]
pub fn check_monotonic_nondecreasing(buf: &[u8], quantum: u32) {
    check_monotonic_header(buf);
    let n = read_u32(buf, 0);
    let mut prev = 0u64;
    for ix in 0..n {
        let value = lookup_monotonic(buf, quantum, ix);
        debug_assert!(
            value >= prev,
            "Contract violation: monotonic list decreases at {}: {} < {}",
            ix,
            value,
            prev
        );
        prev = value;
    }
}

// ============================================================================
// PARTITIONED LIST CONTRACTS
// ============================================================================

/// Check a partition directory: every chunk offset lands inside the buffer
/// and past the directory itself, in increasing order.
#[inline]
pub fn check_partition_directory(buf: &[u8]) {
    let chunks = read_u32(buf, 0) as usize;
    debug_assert!(chunks > 0, "Contract violation: partitioned list with no chunks");
    let directory_end = 4 * (1 + chunks);
    let mut prev = 0u32;
    for q in 0..chunks {
        let offset = read_u32(buf, 4 * (1 + q));
        debug_assert!(
            offset as usize >= directory_end && (offset as usize) < buf.len(),
            "Contract violation: chunk {} offset {} outside the buffer ({} bytes)",
            q,
            offset,
            buf.len()
        );
        debug_assert!(
            offset > prev,
            "Contract violation: chunk {} offset {} not increasing (previous {})",
            q,
            offset,
            prev
        );
        prev = offset;
    }
}

/// Decode all `n` elements and check they never decrease. O(n · lookup).
#[inline]
pub fn check_partition_nondecreasing(buf: &[u8], outer_quantum: u32, inner_quantum: u32, n: u32) {
    check_partition_directory(buf);
    let mut prev = 0u64;
    for ix in 0..n {
        let value = lookup_partition(buf, outer_quantum, inner_quantum, ix);
        debug_assert!(
            value >= prev,
            "Contract violation: partitioned list decreases at {}: {} < {}",
            ix,
            value,
            prev
        );
        prev = value;
    }
}

// ============================================================================
// TRIE CONTRACTS
// ============================================================================

/// Check every node reachable from `node_off`: child counts within the
/// 7-bit bound, child first bytes strictly increasing, and single-byte
/// fragments carrying a nonzero ordinal.
pub fn check_trie_node(map: &[u8], node_off: usize) {
    let hdr = read_u32(map, node_off);
    if hdr & FLAG_CHILDLESS != 0 {
        return;
    }
    let num_children = map[node_off + 4] as usize;
    debug_assert!(
        num_children <= MAX_CHILDREN,
        "Contract violation: node at {} has {} children (max {})",
        node_off,
        num_children,
        MAX_CHILDREN
    );
    let mut child_off = read_u32(map, node_off + 5) as usize;
    let mut prev_byte = 0u8;
    for i in 0..num_children {
        let first = first_fragment_byte(map, child_off);
        debug_assert!(
            first != 0,
            "Contract violation: child {} of node at {} has a zero first byte",
            i,
            node_off
        );
        debug_assert!(
            first > prev_byte,
            "Contract violation: children of node at {} not strictly ordered ({} after {})",
            node_off,
            first,
            prev_byte
        );
        prev_byte = first;
        check_trie_node(map, child_off);
        child_off += node_size(map, child_off);
    }
}

/// Check the whole trie of an artifact, starting at the root the header
/// names.
#[inline]
pub fn check_trie(map: &[u8]) {
    let root = read_u32(map, crate::header::MAGIC.len()) as usize;
    check_trie_node(map, root);
}

fn first_fragment_byte(map: &[u8], node_off: usize) -> u8 {
    let hdr = read_u32(map, node_off);
    if hdr & FLAG_SINGLE != 0 {
        ((hdr >> 23) & 0x7F) as u8
    } else if hdr & FLAG_CHILDLESS != 0 {
        map[node_off + 4]
    } else {
        map[node_off + 4 + 1 + 4]
    }
}
