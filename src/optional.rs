use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::value::{Match, MatchValue, TAG, Tag};

/// Parser combinator that tries a parser once and never fails on a mismatch
///
/// On a mismatch the value is `Optional(None)` and the cursor stays put.
/// Misuse errors from the inner parser still propagate.
pub struct Optional<P, F = Tag> {
    parser: P,
    formatter: F,
}

impl<P, F> Optional<P, F> {
    pub fn new(parser: P, formatter: F) -> Self {
        Optional { parser, formatter }
    }
}

impl<P, F, U> Parser for Optional<P, F>
where
    P: Parser,
    F: Fn(MatchValue<P::Output>) -> U,
{
    type Output = U;

    fn parse<'code>(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError> {
        let (inner, cursor) = match self.parser.parse(cursor) {
            Ok((value, next_cursor)) => (Some(value), next_cursor),
            Err(error) if error.is_mismatch() => (None, cursor),
            Err(error) => return Err(error),
        };

        Ok(((self.formatter)(MatchValue::Optional(inner)), cursor))
    }
}

/// Match `parser` if possible, producing [`Match::Optional`]
pub fn optional<P>(parser: P) -> Optional<P>
where
    P: Parser<Output = Match>,
{
    Optional::new(parser, TAG)
}

/// Match `parser` if possible and pass the tagged value through `formatter`
pub fn optional_with<P, F, U>(parser: P, formatter: F) -> Optional<P, F>
where
    P: Parser,
    F: Fn(MatchValue<P::Output>) -> U,
{
    Optional::new(parser, formatter)
}
