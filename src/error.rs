use std::{
    error::Error,
    fmt::{self, Display},
};

/// The error type returned by the encoding operations of
/// [`PercentEncoder`](crate::PercentEncoder).
///
/// Encoding is all-or-nothing: when any of these errors is returned, no
/// result string is produced and any characters already delivered to a
/// caller-supplied sink must be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A high surrogate code unit was not immediately followed by a low
    /// surrogate code unit.
    InvalidSurrogatePair {
        /// Position of the high surrogate in the input, in code units.
        position: usize,
        /// The high surrogate code unit.
        high: u16,
        /// The code unit that followed, or `None` if the input ended.
        low: Option<u16>,
    },
    /// The transcoder could not interpret the input under its encoding
    /// rules.
    MalformedInput {
        /// The number of offending code units.
        length: usize,
    },
    /// The input is valid text, but has no representation in the target
    /// byte encoding.
    UnmappableCharacter {
        /// The number of code units forming the unmappable character.
        length: usize,
    },
}

impl Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            EncodeError::InvalidSurrogatePair {
                position,
                high,
                low: Some(low),
            } => write!(
                f,
                "invalid UTF-16: code unit {} is a high surrogate (U+{:04X}), \
                 but code unit {} is not a low surrogate (U+{:04X})",
                position,
                high,
                position + 1,
                low
            ),
            EncodeError::InvalidSurrogatePair {
                position,
                high,
                low: None,
            } => write!(
                f,
                "invalid UTF-16: the input ends with an unpaired high \
                 surrogate (U+{:04X}) at code unit {}",
                high, position
            ),
            EncodeError::MalformedInput { length } => {
                write!(f, "malformed input sequence of {} code unit(s)", length)
            }
            EncodeError::UnmappableCharacter { length } => write!(
                f,
                "input character of {} code unit(s) cannot be mapped to the \
                 target encoding",
                length
            ),
        }
    }
}

impl Error for EncodeError {}
