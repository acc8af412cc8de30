//! Standard-code codon translation.

use nerka_core::{NerkaError, Result};

// A=0, C=1, G=2, U=3
fn base_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'U' => Some(3),
        _ => None,
    }
}

// Codon order: AAA, AAC, AAG, AAU, ACA, ... (index = b1*16 + b2*4 + b3).
const STANDARD_AA: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// Translate one codon under the standard genetic code.
///
/// Returns `b'*'` for stop codons and `b'X'` for codons containing a
/// non-RNA symbol.
pub fn translate_codon(codon: &[u8; 3]) -> u8 {
    match (
        base_index(codon[0]),
        base_index(codon[1]),
        base_index(codon[2]),
    ) {
        (Some(b1), Some(b2), Some(b3)) => STANDARD_AA[b1 * 16 + b2 * 4 + b3],
        _ => b'X',
    }
}

/// How stop codons are handled during translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopBehavior {
    /// End translation at the first stop codon (not included).
    Truncate,
    /// Emit `*` and keep translating.
    Keep,
    /// Skip the stop codon and keep translating.
    Ignore,
}

/// Transcribe DNA to RNA: uppercase, `T` becomes `U`.
pub fn dna_to_rna(dna: &[u8]) -> Vec<u8> {
    dna.iter()
        .map(|b| match b.to_ascii_uppercase() {
            b'T' => b'U',
            other => other,
        })
        .collect()
}

/// Translate RNA to a protein string.
///
/// Reading starts at `frame` (0, 1, or 2); a trailing partial codon is
/// dropped. Codons containing non-RNA symbols translate to `X`.
///
/// # Errors
///
/// Returns an error for frames outside `0..=2`.
pub fn translate_rna(rna: &[u8], frame: usize, stop_behavior: StopBehavior) -> Result<Vec<u8>> {
    if frame > 2 {
        return Err(NerkaError::InvalidInput(format!(
            "frame must be 0, 1, or 2, got {frame}"
        )));
    }
    let mut protein = Vec::new();
    let mut chunks = rna[frame.min(rna.len())..].chunks_exact(3);
    for codon in &mut chunks {
        let aa = translate_codon(&[codon[0], codon[1], codon[2]]);
        if aa == b'*' {
            match stop_behavior {
                StopBehavior::Truncate => break,
                StopBehavior::Keep => protein.push(b'*'),
                StopBehavior::Ignore => {}
            }
            continue;
        }
        protein.push(aa);
    }
    Ok(protein)
}

/// Transcribe then translate in one step.
pub fn translate_dna(dna: &[u8], frame: usize, stop_behavior: StopBehavior) -> Result<Vec<u8>> {
    translate_rna(&dna_to_rna(dna), frame, stop_behavior)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcription() {
        assert_eq!(dna_to_rna(b"acgt"), b"ACGU");
        assert_eq!(dna_to_rna(b"TTTT"), b"UUUU");
    }

    #[test]
    fn translates_start_codon() {
        assert_eq!(translate_codon(b"AUG"), b'M');
        assert_eq!(translate_codon(b"UAA"), b'*');
        assert_eq!(translate_codon(b"NNN"), b'X');
    }

    #[test]
    fn basic_translation() {
        let protein = translate_rna(b"AUGGGCUUU", 0, StopBehavior::Truncate).unwrap();
        assert_eq!(protein, b"MGF");
    }

    #[test]
    fn truncates_at_stop() {
        let protein = translate_rna(b"AUGUAAGGC", 0, StopBehavior::Truncate).unwrap();
        assert_eq!(protein, b"M");
    }

    #[test]
    fn keeps_stop() {
        let protein = translate_rna(b"AUGUAAGGC", 0, StopBehavior::Keep).unwrap();
        assert_eq!(protein, b"M*G");
    }

    #[test]
    fn ignores_stop() {
        let protein = translate_rna(b"AUGUAAGGC", 0, StopBehavior::Ignore).unwrap();
        assert_eq!(protein, b"MG");
    }

    #[test]
    fn reading_frames() {
        // Frame 1 skips the leading base.
        let protein = translate_rna(b"GAUGGGC", 1, StopBehavior::Truncate).unwrap();
        assert_eq!(protein, b"MG");
    }

    #[test]
    fn invalid_frame_rejected() {
        assert!(translate_rna(b"AUG", 3, StopBehavior::Truncate).is_err());
    }

    #[test]
    fn partial_codon_dropped() {
        let protein = translate_rna(b"AUGGG", 0, StopBehavior::Truncate).unwrap();
        assert_eq!(protein, b"M");
    }

    #[test]
    fn frame_beyond_input_is_empty() {
        let protein = translate_rna(b"AU", 2, StopBehavior::Truncate).unwrap();
        assert!(protein.is_empty());
    }

    #[test]
    fn unknown_codon_is_x() {
        let protein = translate_rna(b"AUGNNN", 0, StopBehavior::Truncate).unwrap();
        assert_eq!(protein, b"MX");
    }

    #[test]
    fn dna_convenience() {
        let protein = translate_dna(b"ATGGGCTTT", 0, StopBehavior::Truncate).unwrap();
        assert_eq!(protein, b"MGF");
    }
}
