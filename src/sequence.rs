use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::value::{Match, MatchValue, TAG, Tag};

/// Parser combinator that applies parsers one after another
///
/// Each parser starts where the previous one stopped. The first failure fails
/// the whole sequence; since cursors are immutable, the caller is left exactly
/// where it started. An empty sequence matches without consuming anything.
///
/// All parsers share one type. Use [`crate::ParserExt::boxed`] to mix
/// different parser types with a common output.
pub struct Sequence<P, F = Tag> {
    parsers: Vec<P>,
    formatter: F,
}

impl<P, F> Sequence<P, F> {
    pub fn new(parsers: impl IntoIterator<Item = P>, formatter: F) -> Self {
        Sequence {
            parsers: parsers.into_iter().collect(),
            formatter,
        }
    }
}

impl<P, F, U> Parser for Sequence<P, F>
where
    P: Parser,
    F: Fn(MatchValue<P::Output>) -> U,
{
    type Output = U;

    fn parse<'code>(
        &self,
        mut cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError> {
        let mut results = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok(((self.formatter)(MatchValue::Sequence(results)), cursor))
    }
}

/// Match every parser in order, producing [`Match::Sequence`]
pub fn sequence<P>(parsers: impl IntoIterator<Item = P>) -> Sequence<P>
where
    P: Parser<Output = Match>,
{
    Sequence::new(parsers, TAG)
}

/// Match every parser in order and pass the tagged value through `formatter`
pub fn sequence_with<P, F, U>(parsers: impl IntoIterator<Item = P>, formatter: F) -> Sequence<P, F>
where
    P: Parser,
    F: Fn(MatchValue<P::Output>) -> U,
{
    Sequence::new(parsers, formatter)
}
