//! Utility module with colorforge's errors.

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for some range.
/// The only range used by this crate is `0..=9` for the codes of
/// [`Category`](crate::Category).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: impl Into<usize>, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

// ====================================================================================================================

/// An erroneous color format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A hexadecimal color with an unexpected number of digits. For example,
    /// `#ff` is missing a digit, whereas `#💩00` has the correct length but
    /// contains an unsuitable character.
    UnexpectedCharacters,

    /// A hexadecimal color with a digit that is not actually a hexadecimal
    /// digit. For example, `#0g0` has a malformed first coordinate.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnexpectedCharacters => {
                f.write_str("hex color should comprise 3 or 6 ASCII digits but does not")
            }
            MalformedHex => {
                f.write_str("hex color coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}
