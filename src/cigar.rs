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

//! Run-length transcoding between edit operation sequences and CIGAR strings.
//!
//! The textual grammar is `(Count Op)*` with `Count` a positive decimal
//! integer and `Op` one of `M`, `D`, `I`, concatenated with no separators,
//! eg. `"1M1D6M1I4M"`.

use crate::EditOp;

type E = Box<dyn std::error::Error>;

#[derive(Debug, Clone)]
pub struct MalformedCigar {
    /// Byte offset of the offending character in the input text.
    pub position: usize,
    pub reason: String,
}

impl std::fmt::Display for MalformedCigar {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "malformed CIGAR at position {}: {}",
            self.position, self.reason
        )
    }
}

impl std::error::Error for MalformedCigar {}

/// Parse CIGAR text into `(count, op)` tokens.
///
/// Scans the text left to right; each token is a maximal run of decimal
/// digits followed by one operation label. Empty input yields no tokens.
///
/// Errors with [MalformedCigar] on a label with no leading digits, a count
/// of zero, an unknown label, or trailing digits with no label.
///
pub fn parse_tokens(text: &str) -> Result<Vec<(usize, EditOp)>, E> {
    let mut tokens: Vec<(usize, EditOp)> = Vec::new();
    let mut num = String::new();
    for (position, c) in text.char_indices() {
        if c.is_ascii_digit() {
            num.push(c);
            continue;
        }
        if num.is_empty() {
            return Err(MalformedCigar {
                position,
                reason: format!("operation '{}' has no leading count", c),
            }
            .into());
        }
        let count: usize = num.parse()?;
        if count == 0 {
            return Err(MalformedCigar {
                position,
                reason: "count must be positive".to_string(),
            }
            .into());
        }
        let op = EditOp::from_char(c).map_err(|reason| MalformedCigar { position, reason })?;
        tokens.push((count, op));
        num.clear();
    }
    if !num.is_empty() {
        return Err(MalformedCigar {
            position: text.len(),
            reason: "trailing count with no operation".to_string(),
        }
        .into());
    }
    Ok(tokens)
}

/// Expand `(count, op)` tokens into the full edit operation sequence.
pub fn expand(tokens: &[(usize, EditOp)]) -> Vec<EditOp> {
    let mut edits: Vec<EditOp> = Vec::with_capacity(tokens.iter().map(|(n, _)| n).sum());
    for (count, op) in tokens {
        edits.extend(std::iter::repeat(*op).take(*count));
    }
    edits
}

/// Partition an edit operation sequence into maximal runs of the same op.
///
/// Concatenating the runs in order reconstructs the input exactly.
///
pub fn group_runs(edits: &[EditOp]) -> Vec<Vec<EditOp>> {
    let mut runs: Vec<Vec<EditOp>> = Vec::new();
    for op in edits {
        match runs.last_mut() {
            Some(run) if run[0] == *op => run.push(*op),
            _ => runs.push(vec![*op]),
        }
    }
    runs
}

/// Compact an edit operation sequence into `(count, op)` tokens.
///
/// One token per maximal run, so the result is canonical: no two adjacent
/// tokens share an operation.
///
pub fn compact(edits: &[EditOp]) -> Vec<(usize, EditOp)> {
    group_runs(edits)
        .iter()
        .map(|run| (run.len(), run[0]))
        .collect()
}

/// Render `(count, op)` tokens as CIGAR text.
pub fn render(tokens: &[(usize, EditOp)]) -> String {
    tokens
        .iter()
        .map(|(count, op)| format!("{}{}", count, op))
        .collect()
}

/// Encode an edit operation sequence directly as CIGAR text.
pub fn render_text(edits: &[EditOp]) -> String {
    render(&compact(edits))
}

/// Expand CIGAR text directly into the edit operation sequence it describes.
pub fn parse_to_edits(text: &str) -> Result<Vec<EditOp>, E> {
    Ok(expand(&parse_tokens(text)?))
}
