//! Error types.

use thiserror::Error;

/// Broad category of an [`AlignError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Edit string asks for more symbols than a sequence has.
    OutOfData,
    /// Tag outside of `M`, `D`, `I` (or a malformed CIGAR run).
    InvalidOperation,
    /// Rows of different length or a double-gap column.
    MalformedAlignment,
    /// Edit string ended with symbols left in a sequence.
    UnconsumedInput,
    /// Raw sequence holds the gap placeholder.
    GapInSequence,
}

/// Errors produced while converting between edit strings and aligned rows.
///
/// Sequences are numbered `1` and `2`. Columns and positions are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// Edit string reads past the end of a sequence.
    #[error("Edit at column {column} reads symbol {position} of sequence {sequence}, which is exhausted.")]
    OutOfData {
        /// Exhausted sequence, `1` or `2`.
        sequence: u8,
        /// Column of the offending tag.
        column: usize,
        /// Symbols read from the sequence so far.
        position: usize,
    },

    /// Tag is not one of `M`, `D`, `I`.
    #[error("Invalid edit operation {op:?} at column {column}.")]
    InvalidOperation {
        /// Offending tag.
        op: char,
        /// Position in the edit string.
        column: usize,
    },

    /// Rows have a different number of symbols.
    #[error("Aligned rows differ in length ({row1_len} vs {row2_len}).")]
    RowLengthMismatch {
        /// Symbols in first row.
        row1_len: usize,
        /// Symbols in second row.
        row2_len: usize,
    },

    /// Both rows hold the gap placeholder.
    #[error("Column {column} is a gap in both rows.")]
    DoubleGap {
        /// Offending column.
        column: usize,
    },

    /// Edit string under-counts a sequence.
    #[error("Edit string ended with {remaining} unread symbol(s) in sequence {sequence}.")]
    UnconsumedInput {
        /// Sequence with leftover symbols, `1` or `2`.
        sequence: u8,
        /// Number of unread symbols.
        remaining: usize,
    },

    /// Raw sequence read by the edit string holds the gap placeholder.
    #[error("Sequence {sequence} holds the gap placeholder {gap:?} at position {position}.")]
    GapInSequence {
        /// Offending sequence, `1` or `2`.
        sequence: u8,
        /// Position of the placeholder in the sequence.
        position: usize,
        /// Configured gap placeholder.
        gap: char,
    },

    /// CIGAR string cannot be parsed.
    #[error("Invalid CIGAR string at offset {offset}: {reason}")]
    InvalidCigar {
        /// Byte offset into the CIGAR string.
        offset: usize,
        /// What is wrong with it.
        reason: &'static str,
    },
}

impl AlignError {
    /// Category of error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AlignError::OutOfData { .. } => ErrorKind::OutOfData,
            AlignError::InvalidOperation { .. } | AlignError::InvalidCigar { .. } => {
                ErrorKind::InvalidOperation
            }
            AlignError::RowLengthMismatch { .. } | AlignError::DoubleGap { .. } => {
                ErrorKind::MalformedAlignment
            }
            AlignError::UnconsumedInput { .. } => ErrorKind::UnconsumedInput,
            AlignError::GapInSequence { .. } => ErrorKind::GapInSequence,
        }
    }
}

/// Result of codec operations.
pub type Result<T> = std::result::Result<T, AlignError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_kind() {
        let err = AlignError::RowLengthMismatch {
            row1_len: 3,
            row2_len: 2,
        };
        assert_eq!(err.kind(), ErrorKind::MalformedAlignment);
        assert_eq!(AlignError::DoubleGap { column: 0 }.kind(), ErrorKind::MalformedAlignment);
        assert_eq!(
            AlignError::InvalidCigar {
                offset: 0,
                reason: "missing count"
            }
            .kind(),
            ErrorKind::InvalidOperation
        );
    }

    #[test]
    fn test_error_message() {
        let err = AlignError::OutOfData {
            sequence: 2,
            column: 1,
            position: 1,
        };
        assert_eq!(
            err.to_string(),
            "Edit at column 1 reads symbol 1 of sequence 2, which is exhausted."
        );
    }
}
