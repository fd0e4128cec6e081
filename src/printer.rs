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

//! Formatters for the two plain text record formats.

use std::io::Write;

use crate::AlnRecord;

type E = Box<dyn std::error::Error>;

/// Format a single record as a tab-separated line.
///
/// Writes bytes containing `seq_a<TAB>seq_b<TAB>cigar` and a trailing
/// newline to `conn`.
///
pub fn format_table_line<W: Write>(record: &AlnRecord, conn: &mut W) -> Result<(), E> {
    let separator: char = '\t';
    let mut formatted: String = String::new();

    formatted += &record.seq_a;
    formatted.push(separator);
    formatted += &record.seq_b;
    formatted.push(separator);
    formatted += &record.cigar;
    formatted += "\n";

    conn.write_all(formatted.as_bytes())?;
    Ok(())
}

/// Format many records as tab-separated lines.
pub fn format_table<W: Write>(records: &[AlnRecord], conn: &mut W) -> Result<(), E> {
    for record in records {
        format_table_line(record, conn)?;
    }
    conn.flush()?;
    Ok(())
}

/// Format one pair of aligned rows as a block.
///
/// Writes bytes containing the two rows and a blank separator line to
/// `conn`.
///
pub fn format_rows_block<W: Write>(row_a: &str, row_b: &str, conn: &mut W) -> Result<(), E> {
    let mut formatted: String = String::new();

    formatted += row_a;
    formatted += "\n";
    formatted += row_b;
    formatted += "\n\n";

    conn.write_all(formatted.as_bytes())?;
    Ok(())
}

/// Format many pairs of aligned rows as blocks.
pub fn format_rows<W: Write>(pairs: &[(String, String)], conn: &mut W) -> Result<(), E> {
    for (row_a, row_b) in pairs {
        format_rows_block(row_a, row_b, conn)?;
    }
    conn.flush()?;
    Ok(())
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn format_table_line_full_record() {
        use crate::AlnRecord;
        use super::format_table_line;

        let data = AlnRecord {
            seq_a: "ACCACAGTCATA".to_string(),
            seq_b: "ACAGAGTACAAA".to_string(),
            cigar: "1M1D6M1I4M".to_string(),
        };
        let expected: Vec<u8> = b"ACCACAGTCATA\tACAGAGTACAAA\t1M1D6M1I4M\n".to_vec();

        let mut got: Vec<u8> = Vec::new();
        format_table_line(&data, &mut got).unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn format_table_line_empty_fields() {
        use crate::AlnRecord;
        use super::format_table_line;

        let data = AlnRecord::default();
        let expected: Vec<u8> = b"\t\t\n".to_vec();

        let mut got: Vec<u8> = Vec::new();
        format_table_line(&data, &mut got).unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn format_rows_block_rows_and_separator() {
        use super::format_rows_block;

        let expected: Vec<u8> = b"ACCACAGT-CATA\nA-CAGAGTACAAA\n\n".to_vec();

        let mut got: Vec<u8> = Vec::new();
        format_rows_block("ACCACAGT-CATA", "A-CAGAGTACAAA", &mut got).unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn format_round_trips_parser() {
        use crate::AlnRecord;
        use crate::parser::read_table;
        use crate::parser::read_rows;
        use super::format_rows;
        use super::format_table;

        let records = vec![
            AlnRecord {
                seq_a: "AC".to_string(),
                seq_b: "GT".to_string(),
                cigar: "2M".to_string(),
            },
            AlnRecord::default(),
        ];
        let mut table: Vec<u8> = Vec::new();
        format_table(&records, &mut table).unwrap();
        assert_eq!(read_table(&mut table.as_slice()).unwrap(), records);

        let pairs = vec![
            ("AC-T".to_string(), "ACGT".to_string()),
            ("G".to_string(), "-".to_string()),
        ];
        let mut blocks: Vec<u8> = Vec::new();
        format_rows(&pairs, &mut blocks).unwrap();
        assert_eq!(read_rows(&mut blocks.as_slice()).unwrap(), pairs);
    }
}
