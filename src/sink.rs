//! Destinations for encoded output.

/// A destination that receives encoded output one character at a time.
///
/// The encoder calls [`put_char`](Sink::put_char) exactly once per output
/// character, in the order the characters appear in the logical output.
/// Implementations are free to aggregate the characters however they like;
/// no batching is performed or required.
pub trait Sink {
    /// Accepts the next output character.
    fn put_char(&mut self, c: char);
}

/// A [`Sink`] that accumulates output into a growable string.
///
/// This is the implementation behind
/// [`PercentEncoder::encode`](crate::PercentEncoder::encode). It can also be
/// held by the caller and reused across calls to amortize allocations:
/// [`clear`](StringSink::clear) resets the contents while keeping the
/// allocated capacity.
#[derive(Debug, Default)]
pub struct StringSink {
    buf: String,
}

impl StringSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates an empty sink with at least the given capacity, in bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        StringSink {
            buf: String::with_capacity(capacity),
        }
    }

    /// Clears the accumulated contents, retaining the allocated capacity.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Reserves capacity for at least `additional` more bytes of output.
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    /// Returns the accumulated contents.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the sink, returning the accumulated contents.
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Sink for StringSink {
    #[inline]
    fn put_char(&mut self, c: char) {
        self.buf.push(c);
    }
}
