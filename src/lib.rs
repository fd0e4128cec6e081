// alncig: Conversion between pairwise alignments, edit operation sequences,
// and CIGAR strings.
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//

//! alncig is a library and a command-line client for converting between
//! three equivalent representations of a pairwise sequence alignment:
//!
//!   - Two aligned rows of characters containing gap markers (`-`).
//!   - A per-column sequence of edit operations (match, deletion, insertion).
//!   - The run-length encoded CIGAR string used in alignment file formats.
//!
//! alncig only transcodes alignments that are already given; it does not
//! compute alignments and does not validate the sequence alphabet.
//!
//! ## Usage
//!
//! ### Command line
//!
//! The alncig CLI supports the following subcommands:
//!   - `alncig to-cig` convert aligned rows to raw sequences and a CIGAR string.
//!   - `alncig from-cig` reconstruct aligned rows from raw sequences and a CIGAR string.
//!
//! Both read stdin and write stdout unless an input path or `-o` is given.
//!
//! ### Rust API
//!
//! The core conversions live in [align] and [cigar] and operate on plain
//! values. The stream functions [to_cig] and [from_cig] process entire
//! record streams from structs that implement [BufRead](std::io::BufRead)
//! and [Write](std::io::Write).
//!
//! ```rust
//! use alncig::{align, cigar};
//!
//! let edits = align::extract_edits("ACCACAGT-CATA", "A-CAGAGTACAAA").unwrap();
//! assert_eq!(cigar::render_text(&edits), "1M1D6M1I4M");
//!
//! let back = cigar::parse_to_edits("1M1D6M1I4M").unwrap();
//! let (row_a, row_b) = align::render("ACCACAGTCATA", "ACAGAGTACAAA", &back).unwrap();
//! assert_eq!(row_a, "ACCACAGT-CATA");
//! assert_eq!(row_b, "A-CAGAGTACAAA");
//! ```
//!

use std::io::BufRead;
use std::io::Write;

pub mod align;
pub mod cigar;
pub mod parser;
pub mod printer;

type E = Box<dyn std::error::Error>;

/// Character marking a gapped column in an aligned row.
pub const GAP: char = '-';

/// A single edit operation in a pairwise alignment column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Consume one symbol from both sequences.
    Match,
    /// Consume from the first sequence only; the second row carries a gap.
    Delete,
    /// Consume from the second sequence only; the first row carries a gap.
    Insert,
}

impl EditOp {
    /// Convert to the single-character CIGAR label.
    pub fn to_char(&self) -> char {
        match self {
            Self::Match => 'M',
            Self::Delete => 'D',
            Self::Insert => 'I',
        }
    }

    /// Parse from a single-character CIGAR label.
    pub fn from_char(c: char) -> Result<Self, String> {
        match c {
            'M' => Ok(Self::Match),
            'D' => Ok(Self::Delete),
            'I' => Ok(Self::Insert),
            _ => Err(format!("'{}' is not a valid edit operation", c)),
        }
    }
}

impl std::fmt::Display for EditOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Convert an edit operation sequence to its textual form, eg. `"MDMM"`.
pub fn edits_to_str(edits: &[EditOp]) -> String {
    edits.iter().map(|op| op.to_char()).collect()
}

/// Parse an edit operation sequence from its textual form.
pub fn edits_from_str(text: &str) -> Result<Vec<EditOp>, E> {
    text.chars()
        .map(|c| EditOp::from_char(c).map_err(E::from))
        .collect()
}

/// One plain text alignment record: two raw sequences and the CIGAR text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AlnRecord {
    /// First raw sequence, no gap markers.
    pub seq_a: String,
    /// Second raw sequence, no gap markers.
    pub seq_b: String,
    /// CIGAR text encoding the alignment of `seq_a` against `seq_b`.
    pub cigar: String,
}

/// Convert a stream of aligned-row blocks into tab-separated records.
///
/// Reads blocks of two rows plus a blank separator line from `conn_in` and
/// writes one `seq_a<TAB>seq_b<TAB>cigar` line per block to `conn_out`, with
/// the gap markers stripped from the sequences.
///
/// Returns the number of records written.
///
pub fn to_cig<R: BufRead, W: Write>(
    conn_in: &mut R,
    conn_out: &mut W,
) -> Result<usize, E> {
    let pairs = parser::read_rows(conn_in)?;
    for (row_a, row_b) in &pairs {
        let edits = align::extract_edits(row_a, row_b)?;
        let record = AlnRecord {
            seq_a: align::strip_gaps(row_a),
            seq_b: align::strip_gaps(row_b),
            cigar: cigar::render_text(&edits),
        };
        printer::format_table_line(&record, conn_out)?;
    }
    conn_out.flush()?;
    Ok(pairs.len())
}

/// Reconstruct aligned-row blocks from a stream of tab-separated records.
///
/// Reads `seq_a<TAB>seq_b<TAB>cigar` lines from `conn_in` and writes the two
/// reconstructed aligned rows plus a blank separator line per record to
/// `conn_out`.
///
/// Returns the number of records written.
///
pub fn from_cig<R: BufRead, W: Write>(
    conn_in: &mut R,
    conn_out: &mut W,
) -> Result<usize, E> {
    let records = parser::read_table(conn_in)?;
    for record in &records {
        let edits = cigar::parse_to_edits(&record.cigar)?;
        let (row_a, row_b) = align::render(&record.seq_a, &record.seq_b, &edits)?;
        printer::format_rows_block(&row_a, &row_b, conn_out)?;
    }
    conn_out.flush()?;
    Ok(records.len())
}
