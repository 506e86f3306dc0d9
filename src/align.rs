//! Expansion and compression of pairwise alignments.

use std::{fmt, str::Chars};

use log::{debug, trace};

use crate::{
    cigar::{format_edits, run_length, CigarFormat, EditOp},
    config::AlignConfig,
    error::{AlignError, Result},
    mode::{DoubleGap, TrailingInput},
};

/// Pairwise alignment as two gapped rows of equal length.
///
/// Column `i` is `row1[i]` against `row2[i]`. Either may be the gap placeholder, but not both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    /// First sequence with gaps.
    pub row1: String,
    /// Second sequence with gaps.
    pub row2: String,
}

/// Expand two ungapped sequences into aligned rows following an edit string.
///
/// * @param `config`: [`AlignConfig`] configuration.
/// * @param `seq1`: First sequence. Read by `M` and `D`.
/// * @param `seq2`: Second sequence. Read by `M` and `I`.
/// * @param `edits`: Edit string over `M`, `D`, `I`.
///
/// ### Example
/// ```
/// use rs_edits::{align::expand, AlignConfig};
///
/// let alignment = expand(
///     &AlignConfig::default(),
///     "ACCACAGTCATA",
///     "ACAGAGTACAAA",
///     "MDMMMMMMIMMMM",
/// ).unwrap();
/// assert_eq!(alignment.row1, "ACCACAGT-CATA");
/// assert_eq!(alignment.row2, "A-CAGAGTACAAA");
/// ```
pub fn expand(
    config: &AlignConfig,
    seq1: impl AsRef<str>,
    seq2: impl AsRef<str>,
    edits: impl AsRef<str>,
) -> Result<Alignment> {
    let edits = edits.as_ref();
    debug!("Expanding edit string of {} operation(s).", edits.chars().count());
    // Tags are parsed as they are consumed so an invalid one reports its own column.
    let ops = edits
        .chars()
        .enumerate()
        .map(|(column, op)| EditOp::from_char(op, column));
    expand_iter(config, seq1.as_ref(), seq2.as_ref(), ops)
}

/// Same as [`expand`] with already parsed [`EditOp`]s.
pub fn expand_ops(
    config: &AlignConfig,
    seq1: impl AsRef<str>,
    seq2: impl AsRef<str>,
    ops: &[EditOp],
) -> Result<Alignment> {
    debug!("Expanding {} edit operation(s).", ops.len());
    expand_iter(config, seq1.as_ref(), seq2.as_ref(), ops.iter().copied().map(Ok))
}

/// Pull the next symbol of a sequence, counting how many were read so far.
/// * The gap placeholder is not a symbol of a raw sequence.
fn take_symbol(
    symbols: &mut Chars<'_>,
    read: &mut usize,
    sequence: u8,
    column: usize,
    gap: char,
) -> Result<char> {
    let Some(symbol) = symbols.next() else {
        trace!("Sequence {sequence} exhausted after {read} symbol(s) at column {column}.");
        return Err(AlignError::OutOfData {
            sequence,
            column,
            position: *read,
        });
    };
    if symbol == gap {
        trace!("Sequence {sequence} holds a gap at position {read}.");
        return Err(AlignError::GapInSequence {
            sequence,
            position: *read,
            gap,
        });
    }
    *read += 1;
    Ok(symbol)
}

fn expand_iter(
    config: &AlignConfig,
    seq1: &str,
    seq2: &str,
    ops: impl IntoIterator<Item = Result<EditOp>>,
) -> Result<Alignment> {
    let (mut symbols1, mut symbols2) = (seq1.chars(), seq2.chars());
    let (mut read1, mut read2) = (0, 0);
    let mut alignment = Alignment {
        row1: String::with_capacity(seq1.len() + seq2.len()),
        row2: String::with_capacity(seq1.len() + seq2.len()),
    };

    for (column, op) in ops.into_iter().enumerate() {
        let op = op?;
        let symbol1 = if op.consumes_first() {
            take_symbol(&mut symbols1, &mut read1, 1, column, config.gap)?
        } else {
            config.gap
        };
        let symbol2 = if op.consumes_second() {
            take_symbol(&mut symbols2, &mut read2, 2, column, config.gap)?
        } else {
            config.gap
        };
        alignment.row1.push(symbol1);
        alignment.row2.push(symbol2);
    }

    if config.trailing_input == TrailingInput::Reject {
        for (sequence, rest) in [(1, symbols1), (2, symbols2)] {
            let remaining = rest.count();
            if remaining > 0 {
                trace!("Sequence {sequence} has {remaining} unread symbol(s).");
                return Err(AlignError::UnconsumedInput {
                    sequence,
                    remaining,
                });
            }
        }
    }

    Ok(alignment)
}

/// Classify one column.
fn classify(config: &AlignConfig, symbol1: char, symbol2: char, column: usize) -> Result<EditOp> {
    match (symbol1 == config.gap, symbol2 == config.gap) {
        (true, true) => match config.double_gap {
            DoubleGap::Reject => {
                trace!("Double gap at column {column}.");
                Err(AlignError::DoubleGap { column })
            }
            DoubleGap::Insert => Ok(EditOp::Insert),
        },
        (true, false) => Ok(EditOp::Insert),
        (false, true) => Ok(EditOp::Delete),
        (false, false) => Ok(EditOp::Match),
    }
}

/// Compress two aligned rows into [`EditOp`]s, one per column.
///
/// Rows are compared by length in symbols before any column is classified.
pub fn compress_ops(
    config: &AlignConfig,
    row1: impl AsRef<str>,
    row2: impl AsRef<str>,
) -> Result<Vec<EditOp>> {
    let (row1, row2) = (row1.as_ref(), row2.as_ref());
    let (row1_len, row2_len) = (row1.chars().count(), row2.chars().count());
    debug!("Compressing aligned rows of {row1_len} and {row2_len} symbol(s).");

    if row1_len != row2_len {
        return Err(AlignError::RowLengthMismatch { row1_len, row2_len });
    }

    row1.chars()
        .zip(row2.chars())
        .enumerate()
        .map(|(column, (symbol1, symbol2))| classify(config, symbol1, symbol2, column))
        .collect()
}

/// Compress two aligned rows into an edit string.
///
/// ### Example
/// ```
/// use rs_edits::{align::compress, AlignConfig};
///
/// let edits = compress(&AlignConfig::default(), "ACCACAGT-CATA", "A-CAGAGTACAAA").unwrap();
/// assert_eq!(edits, "MDMMMMMMIMMMM");
/// ```
pub fn compress(
    config: &AlignConfig,
    row1: impl AsRef<str>,
    row2: impl AsRef<str>,
) -> Result<String> {
    compress_ops(config, row1, row2).map(|ops| format_edits(&ops))
}

impl Alignment {
    /// Width of the alignment in columns.
    pub fn len(&self) -> usize {
        self.row1.chars().count()
    }

    /// Alignment has no columns.
    pub fn is_empty(&self) -> bool {
        self.row1.is_empty()
    }

    /// Edit operations reconstructing this alignment.
    pub fn edit_ops(&self, config: &AlignConfig) -> Result<Vec<EditOp>> {
        compress_ops(config, &self.row1, &self.row2)
    }

    /// Edit string reconstructing this alignment.
    pub fn edits(&self, config: &AlignConfig) -> Result<String> {
        compress(config, &self.row1, &self.row2)
    }

    /// Both rows with the gap placeholder removed.
    pub fn ungapped(&self, config: &AlignConfig) -> (String, String) {
        let strip = |row: &str| -> String { row.chars().filter(|c| *c != config.gap).collect() };
        (strip(&self.row1), strip(&self.row2))
    }

    /// Render alignment as a CIGAR string.
    /// * `D` consumes the first row only and `I` the second row only.
    ///
    /// ### Example
    /// ```
    /// use rs_edits::{align::Alignment, cigar::CigarFormat, AlignConfig};
    ///
    /// let alignment = Alignment { row1: "ACG-T".to_owned(), row2: "AGGAT".to_owned() };
    /// let config = AlignConfig::default();
    /// assert_eq!(alignment.as_cigar(&config, CigarFormat::Standard).unwrap(), "3M1I1M");
    /// assert_eq!(alignment.as_cigar(&config, CigarFormat::Extended).unwrap(), "1=1X1=1I1=");
    /// ```
    pub fn as_cigar(&self, config: &AlignConfig, format: CigarFormat) -> Result<String> {
        let ops = self.edit_ops(config)?;
        let cigar = match format {
            CigarFormat::Standard => run_length(ops.iter().map(|op| op.as_char())),
            CigarFormat::Extended => run_length(
                ops.iter()
                    .zip(self.row1.chars().zip(self.row2.chars()))
                    .map(|(op, (symbol1, symbol2))| match op {
                        EditOp::Match if symbol1 == symbol2 => '=',
                        EditOp::Match => 'X',
                        _ => op.as_char(),
                    }),
            ),
        };
        Ok(cigar)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.row1)?;
        write!(f, "{}", self.row2)
    }
}
