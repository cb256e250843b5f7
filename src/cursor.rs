/// Immutable position in a string being parsed
///
/// A cursor never changes in place. Every advance produces a new cursor, which
/// is what lets combinators backtrack for free: a failed attempt simply drops
/// the cursors it produced and the caller keeps using the one it started with.
///
/// The offset is a byte offset into `source` and always sits on a char
/// boundary. Counts passed to [`Cursor::peek`] and [`Cursor::advance`] are in
/// chars.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    offset: usize,
}

impl<'code> Cursor<'code> {
    /// Create a cursor at the start of `source`
    pub fn new(source: &'code str) -> Self {
        Self { source, offset: 0 }
    }

    /// Returns the next `n` chars, clipped to the end of input
    pub fn peek(&self, n: usize) -> &'code str {
        let rest = self.remaining();
        let end = rest
            .char_indices()
            .nth(n)
            .map_or(rest.len(), |(index, _)| index);
        &rest[..end]
    }

    /// Returns a new cursor moved forward by `n` chars
    ///
    /// Saturates at the end of input.
    pub fn advance(self, n: usize) -> Self {
        let consumed = self.peek(n).len();
        Self {
            source: self.source,
            offset: self.offset + consumed,
        }
    }

    pub fn at_end(&self) -> bool {
        self.offset == self.source.len()
    }

    /// Byte offset into the source
    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn source(&self) -> &'code str {
        self.source
    }

    /// The unconsumed part of the input
    pub fn remaining(&self) -> &'code str {
        &self.source[self.offset..]
    }
}
