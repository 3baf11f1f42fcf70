//! The percent-encoding engine.

use crate::transcode::{TranscodeError, Transcoder};
use crate::{EncodeError, SafeChars, Sink, StringSink};

use bytes::BytesMut;

use std::char;
use std::mem;
use std::sync::Arc;

/// Capacity of the pending-character buffer: one unsafe BMP character or
/// one unsafe surrogate pair awaiting transcoding.
const PENDING_CAPACITY: usize = 2;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A percent-encoder over a safe-character set and a charset transcoder.
///
/// Input is scanned as UTF-16 code units. Characters in the safe set pass
/// through to the sink verbatim; every other character (including both
/// units of a surrogate pair, which are handled as one character) is
/// converted to bytes by the transcoder and emitted as one uppercase `%XX`
/// triplet per byte.
///
/// An encoder owns its transcoder and scratch buffers and reuses them
/// across calls, so it is cheap to call in a loop but **not** safe for
/// concurrent use: serialize access externally, or keep one instance per
/// thread. The safe set is behind an [`Arc`] and can be shared freely
/// between instances.
pub struct PercentEncoder<T> {
    safe_chars: Arc<SafeChars>,
    transcoder: T,
    /// 1-2 code units forming one logical unsafe character.
    pending: [u16; PENDING_CAPACITY],
    pending_len: usize,
    byte_buf: BytesMut,
    byte_buf_cap: usize,
    scratch: Vec<u16>,
}

impl<T: Transcoder> PercentEncoder<T> {
    /// Creates an encoder from a safe-character set and a transcoder.
    ///
    /// The byte buffer is sized once, from the transcoder's declared
    /// worst-case output for a surrogate pair, and reused for every flush.
    pub fn new(safe_chars: Arc<SafeChars>, transcoder: T) -> Self {
        let byte_buf_cap = transcoder.max_transcoded_len(PENDING_CAPACITY);
        PercentEncoder {
            safe_chars,
            transcoder,
            pending: [0; PENDING_CAPACITY],
            pending_len: 0,
            byte_buf: BytesMut::with_capacity(byte_buf_cap),
            byte_buf_cap,
            scratch: Vec::new(),
        }
    }

    /// Encodes `input`, returning the result as a string.
    ///
    /// The output is accumulated in a [`StringSink`] pre-sized to the input
    /// length, which the output length can never be below.
    ///
    /// # Errors
    ///
    /// See [`encode_to`](PercentEncoder::encode_to). No partial result is
    /// returned on error.
    pub fn encode(&mut self, input: &[u16]) -> Result<String, EncodeError> {
        let mut sink = StringSink::with_capacity(input.len());
        self.encode_to(input, &mut sink)?;
        Ok(sink.into_string())
    }

    /// Encodes a string slice, returning the result as a string.
    ///
    /// The input is expanded to UTF-16 code units in a scratch buffer that
    /// is reused across calls. A `&str` cannot contain unpaired surrogates,
    /// so of the errors listed on [`encode_to`](PercentEncoder::encode_to)
    /// only [`EncodeError::UnmappableCharacter`] can occur here.
    pub fn encode_str(&mut self, input: &str) -> Result<String, EncodeError> {
        let mut units = mem::take(&mut self.scratch);
        units.clear();
        units.extend(input.encode_utf16());
        let result = self.encode(&units);
        self.scratch = units;
        result
    }

    /// Encodes `input`, delivering output characters to `sink` in order.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::InvalidSurrogatePair`] if a high surrogate is not
    ///   immediately followed by a low surrogate;
    /// - [`EncodeError::MalformedInput`] and
    ///   [`EncodeError::UnmappableCharacter`] as reported by the
    ///   transcoder.
    ///
    /// Encoding aborts on the first error. Characters already delivered to
    /// the sink must be discarded by the caller; no partial output is
    /// valid.
    pub fn encode_to<S: Sink>(
        &mut self,
        input: &[u16],
        sink: &mut S,
    ) -> Result<(), EncodeError> {
        self.pending_len = 0;

        let mut i = 0;
        while i < input.len() {
            let unit = input[i];

            if self.safe_chars.contains(unit) {
                if self.pending_len > 0 {
                    // The escaped run precedes this character in the
                    // output.
                    self.flush_pending(sink)?;
                }
                // Safe-set membership goes by `char`, so `unit` cannot be
                // a surrogate code unit.
                sink.put_char(unsafe {
                    char::from_u32_unchecked(u32::from(unit))
                });
                i += 1;
                continue;
            }

            self.pending[self.pending_len] = unit;
            self.pending_len += 1;

            if is_high_surrogate(unit) {
                match input.get(i + 1).copied() {
                    Some(low) if is_low_surrogate(low) => {
                        // The pair is one logical character; take it whole
                        // so it can never be split across two flushes.
                        self.pending[self.pending_len] = low;
                        self.pending_len += 1;
                        i += 1;
                    }
                    low => {
                        return Err(EncodeError::InvalidSurrogatePair {
                            position: i,
                            high: unit,
                            low,
                        });
                    }
                }
            }

            if PENDING_CAPACITY - self.pending_len < 2 {
                // No room left for a surrogate pair on the next loop.
                self.flush_pending(sink)?;
            }

            i += 1;
        }

        if self.pending_len > 0 {
            self.flush_pending(sink)?;
        }
        Ok(())
    }

    /// Transcodes the pending code units and emits them to `sink` as `%XX`
    /// triplets, one per byte, in transcoder output order.
    ///
    /// The transcoder is reset first and must fully drain into the byte
    /// buffer. The pending buffer is cleared on success.
    fn flush_pending<S: Sink>(&mut self, sink: &mut S) -> Result<(), EncodeError> {
        self.byte_buf.clear();
        self.transcoder.reset();
        let result = self
            .transcoder
            .transcode(&self.pending[..self.pending_len], &mut self.byte_buf);
        match result {
            Ok(()) => {}
            Err(TranscodeError::Malformed { length }) => {
                return Err(EncodeError::MalformedInput { length });
            }
            Err(TranscodeError::Unmappable { length }) => {
                return Err(EncodeError::UnmappableCharacter { length });
            }
            Err(TranscodeError::Overflow) => {
                // The buffer is sized from the transcoder's own declared
                // maximum, so a correct transcoder cannot get here.
                panic!("transcoder overran a buffer sized to its declared maximum");
            }
        }
        debug_assert!(
            self.byte_buf.len() <= self.byte_buf_cap,
            "transcoded output exceeds the sized maximum"
        );

        for &b in self.byte_buf.iter() {
            sink.put_char('%');
            sink.put_char(HEX_DIGITS[usize::from(b >> 4)] as char);
            sink.put_char(HEX_DIGITS[usize::from(b & 0xF)] as char);
        }

        self.pending_len = 0;
        Ok(())
    }
}

fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}
