use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::value::{Match, MatchValue, TAG, Tag};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that matches an exact string, case-sensitively
///
/// The empty string always matches and consumes nothing.
pub struct Literal<F = Tag, T = Match> {
    expected: Cow<'static, str>,
    len: usize,
    formatter: F,
    _child: PhantomData<fn() -> T>,
}

impl<F, T> Literal<F, T> {
    pub fn new(expected: impl Into<Cow<'static, str>>, formatter: F) -> Self {
        let expected = expected.into();
        Self {
            len: expected.chars().count(),
            expected,
            formatter,
            _child: PhantomData,
        }
    }
}

impl<F, T, U> Parser for Literal<F, T>
where
    F: Fn(MatchValue<T>) -> U,
{
    type Output = U;

    fn parse<'code>(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError> {
        if cursor.peek(self.len) != self.expected {
            return Err(ParseError::NoMatch);
        }

        // Clone is cheap here - just copies the reference for &'static str
        let value = MatchValue::Literal(self.expected.clone());
        Ok(((self.formatter)(value), cursor.advance(self.len)))
    }
}

/// Match `expected` exactly, producing [`Match::Literal`]
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected, TAG)
}

/// Match `expected` exactly and pass the tagged value through `formatter`
pub fn literal_with<F, T, U>(expected: impl Into<Cow<'static, str>>, formatter: F) -> Literal<F, T>
where
    F: Fn(MatchValue<T>) -> U,
{
    Literal::new(expected, formatter)
}
