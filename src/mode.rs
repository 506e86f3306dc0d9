//! Strictness policies for malformed input.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// What to do with symbols left unread once the edit string is exhausted?
pub enum TrailingInput {
    #[default]
    /// Fail with [`AlignError::UnconsumedInput`](crate::error::AlignError::UnconsumedInput).
    /// * A correct edit string consumes both sequences exactly.
    Reject,
    /// Drop the leftover symbols silently.
    ///
    /// ### Example
    /// `AC`, `A` and `M`
    /// * Rows would be `A` and `A`.
    /// * `C` is never read and does not appear in the alignment.
    Ignore,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// How to classify a column holding the gap placeholder in both rows?
pub enum DoubleGap {
    #[default]
    /// Fail with [`AlignError::DoubleGap`](crate::error::AlignError::DoubleGap).
    /// * Such a column encodes no edit operation.
    Reject,
    /// Classify as [`EditOp::Insert`](crate::cigar::EditOp::Insert).
    /// * First row is checked for a gap before the second.
    /// * The column does not survive re-expansion.
    Insert,
}
