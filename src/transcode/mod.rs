//! Conversion of text characters to bytes under a configurable encoding.
//!
//! The encoder engine does not know how characters become bytes; it drives
//! a [`Transcoder`] over each run of unsafe characters and percent-escapes
//! whatever bytes come out. [`Utf8Transcoder`] covers the common case of
//! UTF-8 output; [`CharsetTranscoder`] covers every encoding of the WHATWG
//! Encoding Standard through `encoding_rs`, with a choice between strict
//! error reporting and lossy substitution.

mod charset;
mod error;
mod transcoder;
mod utf8;

// Interfaces
pub use self::{error::TranscodeError, transcoder::Transcoder};

// Transcoders
pub use self::charset::CharsetTranscoder;
pub use self::utf8::Utf8Transcoder;
