//! Codec configuration.

use crate::mode::{DoubleGap, TrailingInput};

/// Default gap placeholder.
pub const GAP: char = '-';

#[derive(Debug, Clone, PartialEq, Eq)]
/// Alignment codec configuration.
pub struct AlignConfig {
    /// Placeholder marking a gap in an aligned row. Must not appear in raw sequences.
    pub gap: char,
    /// Handling of unread symbols after expansion, [`TrailingInput`].
    pub trailing_input: TrailingInput,
    /// Handling of gap-against-gap columns during compression, [`DoubleGap`].
    pub double_gap: DoubleGap,
}

impl Default for AlignConfig {
    fn default() -> Self {
        AlignConfig {
            gap: GAP,
            trailing_input: TrailingInput::default(),
            double_gap: DoubleGap::default(),
        }
    }
}

impl AlignConfig {
    /// Configuration that accepts leftover input and double-gap columns.
    ///
    /// ```
    /// use rs_edits::{align::expand, AlignConfig};
    ///
    /// let alignment = expand(&AlignConfig::lenient(), "AC", "A", "M").unwrap();
    /// assert_eq!(alignment.row1, "A");
    /// ```
    pub fn lenient() -> Self {
        AlignConfig {
            trailing_input: TrailingInput::Ignore,
            double_gap: DoubleGap::Insert,
            ..Default::default()
        }
    }
}
