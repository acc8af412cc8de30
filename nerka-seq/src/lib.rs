//! Sequence handling: FASTA I/O, codon translation, and RNA secondary
//! structure prediction.
//!
//! ```
//! use nerka_seq::nussinov;
//!
//! assert_eq!(nussinov(b"GGGAAAUCCC", 4), "(((....)))");
//! ```

mod codon;
mod fasta;
mod rna_fold;

pub use codon::{dna_to_rna, translate_codon, translate_dna, translate_rna, StopBehavior};
pub use fasta::{read_fasta, write_fasta, FastaRecord, DEFAULT_LINE_WIDTH};
pub use rna_fold::{nussinov, nussinov_pairs, PairTable};
