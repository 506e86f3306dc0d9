#![warn(missing_docs)]

//! Convert pairwise alignments between edit strings and gapped rows.
//!
//! An edit string holds one tag per alignment column:
//! * `M`: symbol from both sequences.
//! * `D`: symbol from the first sequence against a gap.
//! * `I`: gap against a symbol from the second sequence.
//!
//! ```
//! let (row1, row2) = rs_edits::expand("ACCACAGTCATA", "ACAGAGTACAAA", "MDMMMMMMIMMMM").unwrap();
//! assert_eq!((row1.as_str(), row2.as_str()), ("ACCACAGT-CATA", "A-CAGAGTACAAA"));
//! assert_eq!(rs_edits::compress(&row1, &row2).unwrap(), "MDMMMMMMIMMMM");
//! ```

pub mod align;
pub mod cigar;
pub mod config;
pub mod error;
pub mod mode;

pub use align::Alignment;
pub use cigar::EditOp;
pub use config::AlignConfig;
pub use error::{AlignError, ErrorKind, Result};

/// Expand raw sequences into aligned rows with the strict [`AlignConfig::default`].
pub fn expand(
    seq1: impl AsRef<str>,
    seq2: impl AsRef<str>,
    edits: impl AsRef<str>,
) -> Result<(String, String)> {
    align::expand(&AlignConfig::default(), seq1, seq2, edits)
        .map(|alignment| (alignment.row1, alignment.row2))
}

/// Compress aligned rows into an edit string with the strict [`AlignConfig::default`].
pub fn compress(row1: impl AsRef<str>, row2: impl AsRef<str>) -> Result<String> {
    align::compress(&AlignConfig::default(), row1, row2)
}
