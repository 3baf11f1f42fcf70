use super::TranscodeError;

use bytes::BytesMut;

/// Converts a bounded run of UTF-16 code units to bytes under a specific
/// text encoding.
///
/// A transcoder is owned by one encoder instance and is not shared: it may
/// keep mutable state between calls, and the engine calls
/// [`reset`](Transcoder::reset) before every conversion so that no state
/// leaks from one run into the next.
pub trait Transcoder {
    /// An upper bound on the number of bytes produced by transcoding
    /// `units` code units, including any finalization output.
    ///
    /// The engine sizes its byte buffer from this bound; producing more
    /// bytes than declared is a programming error, reported as
    /// [`TranscodeError::Overflow`].
    fn max_transcoded_len(&self, units: usize) -> usize;

    /// Discards any conversion state left over from a previous run.
    fn reset(&mut self);

    /// Converts `input` to bytes, appending them to `output`.
    ///
    /// The input is a complete run: the transcoder must fully drain and
    /// finalize, leaving no bytes buffered internally. The run is short,
    /// at most one character's worth of code units.
    fn transcode(
        &mut self,
        input: &[u16],
        output: &mut BytesMut,
    ) -> Result<(), TranscodeError>;
}
