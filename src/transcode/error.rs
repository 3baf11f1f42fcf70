use std::{
    error::Error,
    fmt::{self, Display},
};

/// The tagged outcome of a failed transcoding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    /// The input code units do not form valid text under the transcoder's
    /// rules.
    Malformed {
        /// The number of offending code units.
        length: usize,
    },
    /// The input is valid text with no representation in the target
    /// encoding.
    Unmappable {
        /// The number of code units forming the unmappable character.
        length: usize,
    },
    /// The transcoder produced more bytes than it declared through
    /// [`max_transcoded_len`](super::Transcoder::max_transcoded_len).
    ///
    /// The engine sizes its buffer to make this impossible, so this variant
    /// signals a defect in the transcoder, not a property of the input.
    Overflow,
}

impl Display for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TranscodeError::Malformed { length } => {
                write!(f, "malformed input sequence of {} code unit(s)", length)
            }
            TranscodeError::Unmappable { length } => write!(
                f,
                "character of {} code unit(s) cannot be mapped to the target \
                 encoding",
                length
            ),
            TranscodeError::Overflow => {
                write!(f, "transcoder exceeded its declared output bound")
            }
        }
    }
}

impl Error for TranscodeError {}
