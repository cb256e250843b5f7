use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::value::{Match, MatchValue, TAG, Tag};
use log::debug;

/// Parser combinator that applies a parser greedily, as many times as it matches
///
/// Succeeds when at least `minimum` applications matched. `minimum` of 0 is
/// "zero or more", 1 is "one or more". The returned cursor is the one left by
/// the last successful application.
///
/// A match that consumes nothing is kept and ends the loop, since applying the
/// same parser at the same position would match forever. That unbounded run
/// satisfies any `minimum`, so the list is not padded out to it.
pub struct Repetition<P, F = Tag> {
    parser: P,
    minimum: usize,
    formatter: F,
}

impl<P, F> Repetition<P, F> {
    pub fn new(parser: P, minimum: usize, formatter: F) -> Self {
        Repetition {
            parser,
            minimum,
            formatter,
        }
    }
}

impl<P, F, U> Parser for Repetition<P, F>
where
    P: Parser,
    F: Fn(MatchValue<P::Output>) -> U,
{
    type Output = U;

    fn parse<'code>(
        &self,
        mut cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError> {
        let mut results = Vec::new();
        let mut unbounded = false;

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    if next_cursor.position() == cursor.position() {
                        debug!(
                            "repetition matched nothing at byte {}, stopping after {} matches",
                            cursor.position(),
                            results.len()
                        );
                        unbounded = true;
                        break;
                    }
                    cursor = next_cursor;
                }
                Err(error) if error.is_mismatch() => break,
                Err(error) => return Err(error),
            }
        }

        if !unbounded && results.len() < self.minimum {
            return Err(ParseError::NoMatch);
        }

        Ok(((self.formatter)(MatchValue::Repetition(results)), cursor))
    }
}

/// Match `parser` at least `minimum` times, producing [`Match::Repetition`]
pub fn repetition<P>(parser: P, minimum: usize) -> Repetition<P>
where
    P: Parser<Output = Match>,
{
    Repetition::new(parser, minimum, TAG)
}

/// Match `parser` at least `minimum` times and pass the tagged value through `formatter`
pub fn repetition_with<P, F, U>(parser: P, minimum: usize, formatter: F) -> Repetition<P, F>
where
    P: Parser,
    F: Fn(MatchValue<P::Output>) -> U,
{
    Repetition::new(parser, minimum, formatter)
}
