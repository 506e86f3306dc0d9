//! Edit operation tags and CIGAR strings.

use std::fmt;

use crate::error::{AlignError, Result};

/// Describes CIGAR format.
/// * See http://samtools.github.io/hts-specs/SAMv1.pdf
/// * See http://drive5.com/usearch/manual/cigar.html
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CigarFormat {
    #[default]
    /// Match: 'M', Insertion: 'I', Deletion: 'D', Mismatch: 'M'.
    Standard,
    /// Match: '=', Insertion: 'I', Deletion: 'D', Mismatch: 'X'.
    Extended,
}

/// One column of a pairwise alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    /// Both rows hold a symbol. Encoded as `M`.
    Match,
    /// Symbol from first sequence against a gap. Encoded as `D`.
    ///
    /// ### Example:
    /// * First:  `ATCG`
    /// * Second: `A-CG`
    Delete,
    /// Gap against a symbol from second sequence. Encoded as `I`.
    ///
    /// ### Example:
    /// * First:  `A-CG`
    /// * Second: `ATCG`
    Insert,
}

impl EditOp {
    /// Parse a single edit string tag found at `column`.
    ///
    /// ```
    /// use rs_edits::cigar::EditOp;
    ///
    /// assert_eq!(EditOp::from_char('D', 0).unwrap(), EditOp::Delete);
    /// assert!(EditOp::from_char('X', 3).is_err());
    /// ```
    pub fn from_char(op: char, column: usize) -> Result<Self> {
        match op {
            'M' => Ok(EditOp::Match),
            'D' => Ok(EditOp::Delete),
            'I' => Ok(EditOp::Insert),
            _ => Err(AlignError::InvalidOperation { op, column }),
        }
    }

    /// Tag letter of this operation.
    pub fn as_char(self) -> char {
        match self {
            EditOp::Match => 'M',
            EditOp::Delete => 'D',
            EditOp::Insert => 'I',
        }
    }

    /// Does this column take a symbol from the first sequence?
    pub fn consumes_first(self) -> bool {
        matches!(self, EditOp::Match | EditOp::Delete)
    }

    /// Does this column take a symbol from the second sequence?
    pub fn consumes_second(self) -> bool {
        matches!(self, EditOp::Match | EditOp::Insert)
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parse an edit string such as `MDMMI` into [`EditOp`]s.
pub fn parse_edits(edits: &str) -> Result<Vec<EditOp>> {
    edits
        .chars()
        .enumerate()
        .map(|(column, op)| EditOp::from_char(op, column))
        .collect()
}

/// Write [`EditOp`]s back out as an edit string.
pub fn format_edits(ops: &[EditOp]) -> String {
    ops.iter().map(|op| op.as_char()).collect()
}

/// Upper bound on columns a parsed CIGAR string may expand to.
pub const MAX_CIGAR_COLUMNS: usize = 1 << 31;

/// Run-length encode pre-rendered CIGAR letters. `1M1D2M`.
pub(crate) fn run_length(letters: impl IntoIterator<Item = char>) -> String {
    let mut cigar = String::new();
    let mut letters = letters.into_iter();
    let Some(mut current) = letters.next() else {
        return cigar;
    };
    let mut count: usize = 1;

    for letter in letters {
        if letter == current {
            count += 1;
        } else {
            cigar.push_str(&format!("{count}{current}"));
            current = letter;
            count = 1;
        }
    }
    cigar.push_str(&format!("{count}{current}"));
    cigar
}

/// Expand a CIGAR string into one [`EditOp`] per column.
/// * `M`, `=` and `X` all become [`EditOp::Match`].
/// * `D` consumes the first sequence only, `I` the second only.
/// * Expansion beyond [`MAX_CIGAR_COLUMNS`] columns is rejected.
///
/// ```
/// use rs_edits::cigar::{format_edits, parse_cigar};
///
/// let ops = parse_cigar("1M1D6M1I4M").unwrap();
/// assert_eq!(format_edits(&ops), "MDMMMMMMIMMMM");
/// ```
pub fn parse_cigar(cigar: &str) -> Result<Vec<EditOp>> {
    let mut ops = vec![];
    let mut count: Option<usize> = None;

    for (offset, c) in cigar.char_indices() {
        if let Some(digit) = c.to_digit(10) {
            let next = count
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|n| n.checked_add(digit as usize))
                .ok_or(AlignError::InvalidCigar {
                    offset,
                    reason: "run length overflows",
                })?;
            count = Some(next);
            continue;
        }
        let op = match c {
            'M' | '=' | 'X' => EditOp::Match,
            'D' => EditOp::Delete,
            'I' => EditOp::Insert,
            _ => {
                return Err(AlignError::InvalidCigar {
                    offset,
                    reason: "unknown operation",
                })
            }
        };
        match count.take() {
            None => {
                return Err(AlignError::InvalidCigar {
                    offset,
                    reason: "missing run length",
                })
            }
            Some(0) => {
                return Err(AlignError::InvalidCigar {
                    offset,
                    reason: "zero run length",
                })
            }
            Some(n) => {
                let too_large = AlignError::InvalidCigar {
                    offset,
                    reason: "run length too large",
                };
                match ops.len().checked_add(n) {
                    Some(total) if total <= MAX_CIGAR_COLUMNS => {}
                    _ => return Err(too_large),
                }
                ops.try_reserve(n).map_err(|_| too_large)?;
                ops.extend(std::iter::repeat(op).take(n));
            }
        }
    }

    if count.is_some() {
        return Err(AlignError::InvalidCigar {
            offset: cigar.len(),
            reason: "run length without operation",
        });
    }
    Ok(ops)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_edit_op_chars() {
        for op in [EditOp::Match, EditOp::Delete, EditOp::Insert] {
            assert_eq!(EditOp::from_char(op.as_char(), 0).unwrap(), op);
        }
        assert_eq!(EditOp::Insert.to_string(), "I");
    }

    #[test]
    fn test_edit_op_lowercase_invalid() {
        assert_eq!(
            EditOp::from_char('m', 5),
            Err(AlignError::InvalidOperation { op: 'm', column: 5 })
        );
    }

    #[test]
    fn test_consumes() {
        assert!(EditOp::Match.consumes_first() && EditOp::Match.consumes_second());
        assert!(EditOp::Delete.consumes_first() && !EditOp::Delete.consumes_second());
        assert!(!EditOp::Insert.consumes_first() && EditOp::Insert.consumes_second());
    }

    #[test]
    fn test_parse_edits_reports_column() {
        assert_eq!(
            parse_edits("MMDQ"),
            Err(AlignError::InvalidOperation { op: 'Q', column: 3 })
        );
        assert_eq!(format_edits(&parse_edits("MDI").unwrap()), "MDI");
    }

    #[test]
    fn test_run_length() {
        assert_eq!(run_length("MDMMMMMMIMMMM".chars()), "1M1D6M1I4M");
        assert_eq!(run_length("".chars()), "");
    }

    #[test]
    fn test_parse_cigar_extended() {
        let ops = parse_cigar("2=1X1I").unwrap();
        assert_eq!(
            ops,
            [EditOp::Match, EditOp::Match, EditOp::Match, EditOp::Insert]
        );
        assert!(parse_cigar("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_cigar_invalid() {
        assert!(matches!(
            parse_cigar("M"),
            Err(AlignError::InvalidCigar { offset: 0, .. })
        ));
        assert!(matches!(
            parse_cigar("3M0D"),
            Err(AlignError::InvalidCigar { offset: 3, .. })
        ));
        assert!(matches!(
            parse_cigar("3M2S"),
            Err(AlignError::InvalidCigar { offset: 3, .. })
        ));
        assert!(matches!(
            parse_cigar("3M2"),
            Err(AlignError::InvalidCigar { offset: 3, .. })
        ));
    }

    #[test]
    fn test_parse_cigar_huge_run() {
        assert_eq!(
            parse_cigar("18446744073709551615M"),
            Err(AlignError::InvalidCigar {
                offset: 20,
                reason: "run length too large"
            })
        );
        // One column past the limit, spread over two runs.
        let cigar = format!("1D{MAX_CIGAR_COLUMNS}I");
        assert!(matches!(
            parse_cigar(&cigar),
            Err(AlignError::InvalidCigar {
                reason: "run length too large",
                ..
            })
        ));
    }
}
