//! A percent-encoder for URL components.
//!
//! This crate provides `PercentEncoder`, the engine that turns a sequence of
//! UTF-16 code units into percent-encoded output: every character outside a
//! caller-supplied set of safe characters is converted to bytes by a
//! pluggable [`Transcoder`] and written out as uppercase `%XX` escape
//! triplets, while safe characters pass through verbatim. It is the core
//! primitive for encoding URL path segments, query keys and values,
//! fragments, and similar components.
//!
//! Which characters are safe for a particular URL component is deliberately
//! not decided here; the caller supplies a [`SafeChars`] set. Output is
//! delivered through the [`Sink`] abstraction one character at a time, so
//! the engine works equally well for string building and for streaming.
//!
//! [`Transcoder`]: transcode::Transcoder
//!
//! # Examples
//!
//! ```
//! use pct_encode::{PercentEncoder, SafeChars};
//! use pct_encode::transcode::Utf8Transcoder;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), pct_encode::EncodeError> {
//! let safe: SafeChars = ('a'..='z')
//!     .chain('A'..='Z')
//!     .chain('0'..='9')
//!     .collect();
//!
//! let mut encoder = PercentEncoder::new(Arc::new(safe), Utf8Transcoder);
//!
//! assert_eq!(encoder.encode_str("abc123")?, "abc123");
//! assert_eq!(encoder.encode_str("grand café")?, "grand%20caf%C3%A9");
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![warn(future_incompatible)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![doc(test(no_crate_inject, attr(deny(warnings, rust_2018_idioms))))]

pub mod transcode;

mod encoder;
mod error;
mod safe;
mod sink;

pub use self::encoder::PercentEncoder;
pub use self::error::EncodeError;
pub use self::safe::SafeChars;
pub use self::sink::{Sink, StringSink};
