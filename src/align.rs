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

//! Transcoding between aligned rows and edit operation sequences.

use crate::EditOp;
use crate::GAP;

type E = Box<dyn std::error::Error>;

#[derive(Debug, Clone)]
pub struct RowLengthMismatch {
    pub len_a: usize,
    pub len_b: usize,
}

impl std::fmt::Display for RowLengthMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "aligned rows differ in length: {} vs {}",
            self.len_a, self.len_b
        )
    }
}

impl std::error::Error for RowLengthMismatch {}

#[derive(Debug, Clone)]
pub struct DoubleGap {
    pub column: usize,
}

impl std::fmt::Display for DoubleGap {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "column {} is gapped in both rows", self.column)
    }
}

impl std::error::Error for DoubleGap {}

#[derive(Debug, Clone)]
pub struct SequenceExhausted {
    /// Which input ran out: `"first"` or `"second"`.
    pub sequence: &'static str,
    /// Index of the edit operation that could not be applied.
    pub op_index: usize,
}

impl std::fmt::Display for SequenceExhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "edit operation {} reads past the end of the {} sequence",
            self.op_index, self.sequence
        )
    }
}

impl std::error::Error for SequenceExhausted {}

/// Extract the edit operations from two aligned rows.
///
/// A gap marker in `row_a` yields [EditOp::Insert], a gap marker in `row_b`
/// yields [EditOp::Delete], and any other column yields [EditOp::Match].
///
/// Errors with [RowLengthMismatch] if the rows have different lengths, and
/// with [DoubleGap] if a column carries a gap marker in both rows.
///
pub fn extract_edits(row_a: &str, row_b: &str) -> Result<Vec<EditOp>, E> {
    let (len_a, len_b) = (row_a.chars().count(), row_b.chars().count());
    if len_a != len_b {
        return Err(RowLengthMismatch { len_a, len_b }.into());
    }

    let mut edits: Vec<EditOp> = Vec::with_capacity(len_a);
    for (column, (a, b)) in row_a.chars().zip(row_b.chars()).enumerate() {
        let op = match (a == GAP, b == GAP) {
            (true, true) => return Err(DoubleGap { column }.into()),
            (true, false) => EditOp::Insert,
            (false, true) => EditOp::Delete,
            (false, false) => EditOp::Match,
        };
        edits.push(op);
    }
    Ok(edits)
}

/// Reconstruct the two aligned rows from raw sequences and edit operations.
///
/// Walks `edits` with one consumption cursor per sequence: [EditOp::Match]
/// consumes from both, [EditOp::Delete] from `seq_a` only, [EditOp::Insert]
/// from `seq_b` only. The skipped positions are filled with gap markers.
///
/// Errors with [SequenceExhausted] if `edits` consumes more symbols than a
/// sequence provides.
///
pub fn render(seq_a: &str, seq_b: &str, edits: &[EditOp]) -> Result<(String, String), E> {
    render_local(seq_a, 0, seq_b, edits)
}

/// Reconstruct aligned rows for a read placed at an offset in a reference.
///
/// Same walk as [render], except the first cursor starts at character
/// `offset` into `reference`. Only the window of `reference` consumed by
/// `edits` appears in the output, so a read can be rendered against a
/// position inside a long reference without copying a substring first.
///
pub fn render_local(
    reference: &str,
    offset: usize,
    read: &str,
    edits: &[EditOp],
) -> Result<(String, String), E> {
    let mut ref_chars = reference.chars().skip(offset);
    let mut read_chars = read.chars();

    let mut row_a = String::with_capacity(edits.len());
    let mut row_b = String::with_capacity(edits.len());
    for (op_index, op) in edits.iter().enumerate() {
        match op {
            EditOp::Match => {
                row_a.push(ref_chars.next().ok_or(SequenceExhausted {
                    sequence: "first",
                    op_index,
                })?);
                row_b.push(read_chars.next().ok_or(SequenceExhausted {
                    sequence: "second",
                    op_index,
                })?);
            }
            EditOp::Delete => {
                row_a.push(ref_chars.next().ok_or(SequenceExhausted {
                    sequence: "first",
                    op_index,
                })?);
                row_b.push(GAP);
            }
            EditOp::Insert => {
                row_a.push(GAP);
                row_b.push(read_chars.next().ok_or(SequenceExhausted {
                    sequence: "second",
                    op_index,
                })?);
            }
        }
    }
    Ok((row_a, row_b))
}

/// Remove the gap markers from an aligned row.
pub fn strip_gaps(row: &str) -> String {
    row.chars().filter(|c| *c != GAP).collect()
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn extract_edits_mixed_gaps() {
        use crate::edits_to_str;
        use super::extract_edits;

        let got = extract_edits("ACCACAGT-CATA", "A-CAGAGTACAAA").unwrap();
        assert_eq!(edits_to_str(&got), "MDMMMMMMIMMMM");

        let got = extract_edits("acca-aagt--a", "a-caaatgtcca").unwrap();
        assert_eq!(edits_to_str(&got), "MDMMIMMMMIIM");
    }

    #[test]
    fn extract_edits_gap_runs() {
        use crate::edits_to_str;
        use super::extract_edits;

        let got = extract_edits("acgttcga", "aaa---aa").unwrap();
        assert_eq!(edits_to_str(&got), "MMMDDDMM");
    }

    #[test]
    fn extract_edits_length_mismatch() {
        use super::extract_edits;

        assert!(extract_edits("ab", "abc").is_err());
    }

    #[test]
    fn extract_edits_double_gap() {
        use super::extract_edits;

        assert!(extract_edits("a-c", "g-t").is_err());
    }

    #[test]
    fn render_whole_sequences() {
        use crate::edits_from_str;
        use super::render;

        let edits = edits_from_str("MDMMMMMMIMMMM").unwrap();
        let (row_a, row_b) = render("ACCACAGTCATA", "ACAGAGTACAAA", &edits).unwrap();
        assert_eq!(row_a, "ACCACAGT-CATA");
        assert_eq!(row_b, "A-CAGAGTACAAA");

        let edits = edits_from_str("MDMMIMMMMIIM").unwrap();
        let (row_a, row_b) = render("accaaagta", "acaaatgtcca", &edits).unwrap();
        assert_eq!(row_a, "acca-aagt--a");
        assert_eq!(row_b, "a-caaatgtcca");
    }

    #[test]
    fn render_empty_second_sequence() {
        use crate::EditOp;
        use super::render;

        let (row_a, row_b) = render("a", "", &[EditOp::Delete]).unwrap();
        assert_eq!(row_a, "a");
        assert_eq!(row_b, "-");
    }

    #[test]
    fn render_exhausts_sequence() {
        use crate::EditOp::*;
        use super::render;

        assert!(render("AC", "A", &[Match, Match]).is_err());
        assert!(render("A", "AC", &[Match, Match]).is_err());
        assert!(render("", "A", &[Insert, Insert]).is_err());
    }

    #[test]
    fn render_local_offset_window() {
        use crate::edits_from_str;
        use super::render_local;

        let edits = edits_from_str("MDMMMMMMIMMMM").unwrap();
        let (row_a, row_b) =
            render_local("GTAACCACAGTCATA", 3, "ACAGAGTACAAA", &edits).unwrap();
        assert_eq!(row_a, "ACCACAGT-CATA");
        assert_eq!(row_b, "A-CAGAGTACAAA");
    }

    #[test]
    fn render_local_offset_past_reference() {
        use crate::EditOp;
        use super::render_local;

        assert!(render_local("ACGT", 4, "A", &[EditOp::Match]).is_err());
    }

    #[test]
    fn render_round_trips_extract() {
        use crate::edits_from_str;
        use super::extract_edits;
        use super::render;
        use super::strip_gaps;

        let edits = edits_from_str("MMMDDDMM").unwrap();
        let (row_a, row_b) = render("acgttcga", "aaaaa", &edits).unwrap();
        assert_eq!(extract_edits(&row_a, &row_b).unwrap(), edits);
        assert_eq!(strip_gaps(&row_a), "acgttcga");
        assert_eq!(strip_gaps(&row_b), "aaaaa");
    }

    #[test]
    fn strip_gaps_removes_markers() {
        use super::strip_gaps;

        assert_eq!(strip_gaps("ACCACAGT-CATA"), "ACCACAGTCATA");
        assert_eq!(strip_gaps("----"), "");
        assert_eq!(strip_gaps(""), "");
    }
}
