// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Frequency ranks packed as variable-width codewords.
//!
//! Each n-gram's frequency rank is stored as a codeword from the minimal
//! sequence 0, 1, 00, 01, 10, 11, 000, ... with the shortest codes handed
//! to the most common ranks. Codewords have no self-delimiting prefix;
//! instead a parallel *start-bit* stream carries a `1` at the first bit of
//! every codeword. The distance between consecutive start bits is therefore
//! both the delimiter and the width of the codeword, and one stream serves
//! as directory and width oracle at once.
//!
//! Layout (little-endian, packed):
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ num_ranks: u16                              │
//! │ rank table: u16 × num_ranks                 │
//! │ m: u32                                      │
//! │ quantum index: u32 × m                      │  start-bit offsets
//! │ cw_bytes: u32                               │
//! │ codeword stream: cw_bytes bytes             │
//! │ start-bit stream: cw_bytes bytes            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The two bit streams end with a terminator (a final `1` start bit over a
//! `0` codeword bit) so the width of the last real codeword is still the
//! gap to the next set bit, and both streams stay the same byte length.

use std::io;

use crate::bits::{bitselect, read_u16, read_u32, retrieve, BitWriter};

// ============================================================================
// LOOKUP
// ============================================================================

/// Return the frequency rank stored at `index`.
///
/// `quantum` must match the density the stream was written with.
pub fn lookup_frequency(buf: &[u8], quantum: u32, index: u32) -> u32 {
    let num_ranks = read_u16(buf, 0) as usize;
    let ranks_off = 2;
    let mut p = 2 * (num_ranks + 1);
    let m = read_u32(buf, p) as usize;
    let qindex_off = p + 4;
    p += 4 * (1 + m);
    let cw_bytes = read_u32(buf, p) as usize;
    // Codeword stream begins at p + 4; the start-bit stream of equal length
    // follows it, so a byte at start-bit position k has its codeword twin
    // exactly cw_bytes earlier.
    let mut sp = p + 4 + cw_bytes;
    let mut skip = index;
    let q = index / quantum;
    if q > 0 {
        // Jump to the byte containing the quantum's first start bit, then
        // count the earlier codewords' bits still in that byte back in.
        let hbit = read_u32(buf, qindex_off + 4 * (q as usize - 1));
        sp += (hbit >> 3) as usize;
        let mask = ((1u32 << (hbit & 0x07)) - 1) as u8;
        skip = skip - q * quantum + (buf[sp] & mask).count_ones();
    }
    // Walk whole bytes while they hold fewer start bits than we must skip.
    loop {
        let ones = buf[sp].count_ones();
        if ones >= skip {
            break;
        }
        sp += 1;
        skip -= ones;
    }
    // Start bits are numbered from 1 within the remaining stream; the gap
    // to the following start bit is the codeword width.
    let start = bitselect(&buf[sp..], skip + 1);
    let end = bitselect(&buf[sp..], skip + 2);
    let width = end - start;
    let cw = retrieve(&buf[sp - cw_bytes..], start as usize, width);
    // Invert the codeword allocation: table index = cw + 2^width - 2.
    let rank_index = ((1u32 << width) + cw - 2) as usize;
    read_u16(buf, ranks_off + 2 * rank_index) as u32
}

// ============================================================================
// ENCODING
// ============================================================================

/// Encode a sequence of frequency ranks.
///
/// Ranks are tallied and ordered by descending occurrence count (first
/// appearance breaks ties), so the most common ranks get the shortest
/// codewords; the table maps codeword indexes back to rank values.
pub fn encode_frequencies(ranks: &[u16], quantum: u32) -> io::Result<Vec<u8>> {
    if ranks.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Frequency stream must not be empty",
        ));
    }
    // Tally in first-seen order so equal counts sort deterministically.
    let mut tally: Vec<(u16, u32)> = Vec::new();
    for &rank in ranks {
        match tally.iter_mut().find(|(r, _)| *r == rank) {
            Some((_, count)) => *count += 1,
            None => tally.push((rank, 1)),
        }
    }
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    if tally.len() >= 1 << 16 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Too many distinct ranks: {}", tally.len()),
        ));
    }
    // Codeword per rank: the ix-th most common rank gets width
    // floor(log2(ix+2)) and value ix + 2 - 2^width, yielding the sequence
    // 0, 1, 00, 01, 10, 11, 000, ...
    let codebook: Vec<(u16, u32, u32)> = tally
        .iter()
        .enumerate()
        .map(|(ix, &(rank, _))| {
            let width = (ix as u32 + 2).ilog2();
            (rank, ix as u32 + 2 - (1 << width), width)
        })
        .collect();
    let width_of = |rank: u16| -> (u32, u32) {
        let &(_, cw, width) = codebook.iter().find(|&&(r, _, _)| r == rank).unwrap();
        (cw, width)
    };

    let mut cwbits = BitWriter::new();
    let mut startbits = BitWriter::new();
    let mut qindex: Vec<u32> = Vec::new();
    for (ix, &rank) in ranks.iter().enumerate() {
        if ix % quantum as usize == 0 && ix > 0 {
            qindex.push(startbits.num_bits() as u32);
        }
        let (cw, width) = width_of(rank);
        cwbits.push(cw as u64, width);
        // A single 1 at the codeword's start position, zeros after.
        startbits.push(1, width);
    }
    // Terminator: the last codeword still needs a following start bit.
    startbits.push(1, 1);
    cwbits.push(0, 1);

    let cwbits = cwbits.into_bytes();
    let startbits = startbits.into_bytes();
    debug_assert_eq!(cwbits.len(), startbits.len());

    let mut out = Vec::new();
    out.extend_from_slice(&(tally.len() as u16).to_le_bytes());
    for &(rank, _) in &tally {
        out.extend_from_slice(&rank.to_le_bytes());
    }
    out.extend_from_slice(&(qindex.len() as u32).to_le_bytes());
    for &bit_pos in &qindex {
        out.extend_from_slice(&bit_pos.to_le_bytes());
    }
    out.extend_from_slice(&(cwbits.len() as u32).to_le_bytes());
    out.extend_from_slice(&cwbits);
    out.extend_from_slice(&startbits);
    Ok(out)
}
