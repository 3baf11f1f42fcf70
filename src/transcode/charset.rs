use super::{TranscodeError, Transcoder};

use bytes::BytesMut;
use encoding_rs::{CoderResult, Encoder, EncoderResult, Encoding};

use std::fmt;

/// Worst-case output per code unit for a lossy substitution: an unmappable
/// BMP character becomes a numeric character reference of up to 8 bytes
/// (`&#65535;`), an astral character up to 10 bytes for its 2 units.
const NUMERIC_REF_BYTES_PER_UNIT: usize = 8;

/// A transcoder backed by an `encoding_rs` encoder, covering every encoding
/// of the WHATWG Encoding Standard that can be encoded to.
///
/// The handling of characters the target encoding cannot represent is the
/// collaborator's policy choice, made at construction:
///
/// - [`strict`](CharsetTranscoder::strict) reports them as
///   [`TranscodeError::Unmappable`];
/// - [`lossy`](CharsetTranscoder::lossy) substitutes the numeric character
///   reference (`&#…;`) prescribed by the Encoding Standard and never fails.
///
/// Unpaired surrogates are replaced with U+FFFD by `encoding_rs` itself, so
/// this transcoder does not report `Malformed`; the encoder engine rejects
/// unpaired high surrogates before transcoding.
pub struct CharsetTranscoder {
    encoder: Encoder,
    lossy: bool,
}

impl CharsetTranscoder {
    /// Creates a transcoder that reports unmappable characters as errors.
    pub fn strict(encoding: &'static Encoding) -> Self {
        CharsetTranscoder {
            encoder: encoding.new_encoder(),
            lossy: false,
        }
    }

    /// Creates a transcoder that substitutes numeric character references
    /// for unmappable characters.
    pub fn lossy(encoding: &'static Encoding) -> Self {
        CharsetTranscoder {
            encoder: encoding.new_encoder(),
            lossy: true,
        }
    }

    /// The target encoding.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoder.encoding()
    }
}

impl Transcoder for CharsetTranscoder {
    fn max_transcoded_len(&self, units: usize) -> usize {
        let bound = if self.lossy {
            // The base bound covers shift sequences and finalization;
            // numeric character references for unmappables come on top.
            self.encoder
                .max_buffer_length_from_utf16_if_no_unmappables(units)
                .map(|n| n + NUMERIC_REF_BYTES_PER_UNIT * units)
        } else {
            self.encoder
                .max_buffer_length_from_utf16_without_replacement(units)
        };
        bound.unwrap_or(usize::MAX)
    }

    fn reset(&mut self) {
        self.encoder = self.encoder.encoding().new_encoder();
    }

    fn transcode(
        &mut self,
        input: &[u16],
        output: &mut BytesMut,
    ) -> Result<(), TranscodeError> {
        let offset = output.len();
        output.resize(offset + self.max_transcoded_len(input.len()), 0);

        if self.lossy {
            let (result, _read, written, _replaced) =
                self.encoder
                    .encode_from_utf16(input, &mut output[offset..], true);
            output.truncate(offset + written);
            match result {
                CoderResult::InputEmpty => Ok(()),
                CoderResult::OutputFull => Err(TranscodeError::Overflow),
            }
        } else {
            let (result, _read, written) = self
                .encoder
                .encode_from_utf16_without_replacement(
                    input,
                    &mut output[offset..],
                    true,
                );
            output.truncate(offset + written);
            match result {
                EncoderResult::InputEmpty => Ok(()),
                EncoderResult::OutputFull => Err(TranscodeError::Overflow),
                EncoderResult::Unmappable(c) => Err(TranscodeError::Unmappable {
                    length: c.len_utf16(),
                }),
            }
        }
    }
}

impl fmt::Debug for CharsetTranscoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharsetTranscoder")
            .field("encoding", &self.encoding().name())
            .field("lossy", &self.lossy)
            .finish()
    }
}
