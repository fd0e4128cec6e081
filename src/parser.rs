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

//! Parsers for the two plain text record formats.
//!
//! `to-cig` input is blocks of two aligned rows followed by a blank
//! separator line. `from-cig` input is one tab-separated
//! `seq_a<TAB>seq_b<TAB>cigar` record per line.

use std::io::BufRead;
use std::io::Read;

use crate::AlnRecord;

type E = Box<dyn std::error::Error>;

#[derive(Debug, Clone)]
pub struct MalformedRecord {
    pub reason: String,
}

impl std::fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "malformed record: {}", self.reason)
    }
}

impl std::error::Error for MalformedRecord {}

/// Parse a single tab-separated record line.
///
/// Splits on tab so that empty sequences and an empty CIGAR survive as
/// empty fields. Errors with [MalformedRecord] if the line does not hold
/// exactly three fields.
///
pub fn read_table_line<R: Read>(conn: &mut R) -> Result<AlnRecord, E> {
    let separator: char = '\t';
    let mut contents: String = String::new();
    conn.read_to_string(&mut contents)?;
    if contents.ends_with('\n') {
        contents.pop();
    }

    let mut fields = contents.split(separator);
    let mut next_field = |name: &str| -> Result<String, E> {
        match fields.next() {
            Some(field) => Ok(field.to_string()),
            None => Err(MalformedRecord {
                reason: format!("missing the {} field", name),
            }
            .into()),
        }
    };

    let seq_a = next_field("first sequence")?;
    let seq_b = next_field("second sequence")?;
    let cigar = next_field("CIGAR")?;
    if fields.next().is_some() {
        return Err(MalformedRecord {
            reason: "more than three fields".to_string(),
        }
        .into());
    }

    Ok(AlnRecord { seq_a, seq_b, cigar })
}

/// Read all tab-separated records from a stream, one per line.
pub fn read_table<R: BufRead>(conn: &mut R) -> Result<Vec<AlnRecord>, E> {
    let mut records: Vec<AlnRecord> = Vec::new();
    for line in conn.lines() {
        let line = line?;
        records.push(read_table_line(&mut line.as_bytes())?);
    }
    Ok(records)
}

/// Read all aligned-row blocks from a stream.
///
/// A block is two rows followed by a blank separator line; the separator
/// may be omitted after the final block. Extra blank lines between blocks
/// are skipped. Errors with [MalformedRecord] if a block has a first row
/// but no second, or if the line after the second row is not blank.
///
pub fn read_rows<R: BufRead>(conn: &mut R) -> Result<Vec<(String, String)>, E> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut lines = conn.lines();
    while let Some(line) = lines.next() {
        let row_a = line?;
        if row_a.is_empty() {
            continue;
        }
        let row_b = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(MalformedRecord {
                    reason: "block is missing its second row".to_string(),
                }
                .into())
            }
        };
        if let Some(line) = lines.next() {
            let separator = line?;
            if !separator.is_empty() {
                return Err(MalformedRecord {
                    reason: "blocks must be separated by a blank line".to_string(),
                }
                .into());
            }
        }
        pairs.push((row_a, row_b));
    }
    Ok(pairs)
}
