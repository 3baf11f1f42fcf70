use super::{TranscodeError, Transcoder};

use bytes::{BufMut, BytesMut};

use std::char;

/// A stateless transcoder producing UTF-8, the byte encoding mandated for
/// URLs by the WHATWG URL Standard.
///
/// A lone surrogate in the input is reported as
/// [`TranscodeError::Malformed`]; this transcoder never substitutes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Utf8Transcoder;

impl Transcoder for Utf8Transcoder {
    fn max_transcoded_len(&self, units: usize) -> usize {
        // A BMP character is at most 3 bytes of UTF-8; a surrogate pair's
        // 4 bytes stay within 2 units * 3.
        3 * units
    }

    fn reset(&mut self) {}

    fn transcode(
        &mut self,
        input: &[u16],
        output: &mut BytesMut,
    ) -> Result<(), TranscodeError> {
        for decoded in char::decode_utf16(input.iter().copied()) {
            match decoded {
                Ok(c) => {
                    let mut utf8 = [0u8; 4];
                    output.put_slice(c.encode_utf8(&mut utf8).as_bytes());
                }
                Err(_) => {
                    return Err(TranscodeError::Malformed { length: 1 });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcoded(input: &[u16]) -> Result<Vec<u8>, TranscodeError> {
        let mut out = BytesMut::new();
        Utf8Transcoder.transcode(input, &mut out)?;
        Ok(out.to_vec())
    }

    #[test]
    fn bmp_characters() {
        assert_eq!(transcoded(&[0x20]).unwrap(), b" ");
        assert_eq!(transcoded(&[0xE9]).unwrap(), [0xC3, 0xA9]);
        assert_eq!(transcoded(&[0x20AC]).unwrap(), [0xE2, 0x82, 0xAC]);
    }

    #[test]
    fn surrogate_pair() {
        // U+1F600
        assert_eq!(
            transcoded(&[0xD83D, 0xDE00]).unwrap(),
            [0xF0, 0x9F, 0x98, 0x80]
        );
    }

    #[test]
    fn lone_surrogate_is_malformed() {
        assert_eq!(
            transcoded(&[0xDC00]),
            Err(TranscodeError::Malformed { length: 1 })
        );
        assert_eq!(
            transcoded(&[0xD800]),
            Err(TranscodeError::Malformed { length: 1 })
        );
    }

    #[test]
    fn output_stays_within_declared_bound() {
        for input in &[&[0x7F][..], &[0xE9][..], &[0xD83D, 0xDE00][..]] {
            let bound = Utf8Transcoder.max_transcoded_len(input.len());
            assert!(transcoded(input).unwrap().len() <= bound);
        }
    }
}
