//! The output sink shared by every renderer taking part in one deparse.

use core::fmt;

/// Append-only SQL text accumulator.
///
/// A buffer is passed by `&mut` through every rendering call, so the core
/// deparser, the order-by deparser and a statement deparser all write into
/// the same instance.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SqlBuffer {
    buf: String,
}

impl SqlBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Creates an empty buffer with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Appends text.
    #[inline]
    pub fn push(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Appends a single character.
    #[inline]
    pub fn push_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// Appends `sep` unless `i` is the first position.
    #[inline]
    pub fn push_sep(&mut self, i: usize, sep: &str) {
        if i > 0 {
            self.buf.push_str(sep);
        }
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Returns the length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the buffer, returning the text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Write for SqlBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.push_char(c);
        Ok(())
    }
}

impl fmt::Display for SqlBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl From<SqlBuffer> for String {
    fn from(buffer: SqlBuffer) -> Self {
        buffer.buf
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write as _;

    use super::*;

    #[test]
    fn test_push_and_sep() {
        let mut out = SqlBuffer::new();
        for (i, part) in ["a", "b", "c"].iter().enumerate() {
            out.push_sep(i, ", ");
            out.push(part);
        }
        out.push_char(';');
        assert_eq!(out.as_str(), "a, b, c;");
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn test_write_macro() {
        let mut out = SqlBuffer::with_capacity(16);
        assert!(out.is_empty());
        write!(out, "?{}", 3).unwrap();
        assert_eq!(out.into_string(), "?3");
    }
}
