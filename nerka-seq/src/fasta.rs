//! FASTA reading and writing.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use needletail::parse_fastx_file;
use nerka_core::{NerkaError, Result};

/// One FASTA record: header line (without `>`) and uppercased sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FastaRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

/// Read all records from a FASTA file, preserving file order.
///
/// Sequences are uppercased. Multi-line sequences are joined.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed, or if two
/// records share a header.
pub fn read_fasta(path: impl AsRef<Path>) -> Result<Vec<FastaRecord>> {
    let path = path.as_ref();
    let mut reader = parse_fastx_file(path).map_err(|e| NerkaError::Parse(e.to_string()))?;

    let mut records = Vec::new();
    let mut seen = HashSet::new();
    while let Some(record) = reader.next() {
        let record = record.map_err(|e| NerkaError::Parse(e.to_string()))?;
        let id = String::from_utf8_lossy(record.id()).into_owned();
        if !seen.insert(id.clone()) {
            return Err(NerkaError::Parse(format!("duplicate FASTA header: {id}")));
        }
        let seq = record.seq().to_ascii_uppercase();
        records.push(FastaRecord { id, seq });
    }
    Ok(records)
}

/// Default line width for [`write_fasta`].
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Write records to a FASTA file, wrapping sequence lines at `width`
/// characters.
///
/// # Errors
///
/// Returns an error if `width` is zero or the file cannot be written.
pub fn write_fasta(
    path: impl AsRef<Path>,
    records: &[FastaRecord],
    width: usize,
) -> Result<()> {
    if width == 0 {
        return Err(NerkaError::InvalidInput(
            "line width must be at least 1".into(),
        ));
    }
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    for record in records {
        writeln!(out, ">{}", record.id)?;
        for chunk in record.seq.chunks(width) {
            out.write_all(chunk)?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}
