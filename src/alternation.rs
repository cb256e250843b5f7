use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::value::{Match, MatchValue, TAG, Tag};

/// Parser combinator that tries parsers in order and keeps the first match
///
/// Every alternative starts from the same cursor. Order is the only
/// disambiguation: the first parser that matches wins, even if a later one
/// would consume more.
pub struct Alternation<P, F = Tag> {
    parsers: Vec<P>,
    formatter: F,
}

impl<P, F> Alternation<P, F> {
    pub fn new(parsers: impl IntoIterator<Item = P>, formatter: F) -> Self {
        Alternation {
            parsers: parsers.into_iter().collect(),
            formatter,
        }
    }
}

impl<P, F, U> Parser for Alternation<P, F>
where
    P: Parser,
    F: Fn(MatchValue<P::Output>) -> U,
{
    type Output = U;

    fn parse<'code>(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError> {
        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    let value = (self.formatter)(MatchValue::Alternation(value));
                    return Ok((value, next_cursor));
                }
                Err(error) if error.is_mismatch() => continue,
                Err(error) => return Err(error),
            }
        }

        Err(ParseError::NoMatch)
    }
}

/// Match the first of `parsers` that matches, producing [`Match::Alternation`]
pub fn alternation<P>(parsers: impl IntoIterator<Item = P>) -> Alternation<P>
where
    P: Parser<Output = Match>,
{
    Alternation::new(parsers, TAG)
}

/// Match the first of `parsers` that matches and pass the tagged value through `formatter`
pub fn alternation_with<P, F, U>(
    parsers: impl IntoIterator<Item = P>,
    formatter: F,
) -> Alternation<P, F>
where
    P: Parser,
    F: Fn(MatchValue<P::Output>) -> U,
{
    Alternation::new(parsers, formatter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParserExt;
    use crate::char_class::char_class;
    use crate::literal::literal;
    use crate::registry::Registry;

    #[test]
    fn test_first_succeeds() {
        let parser = alternation([literal("a"), literal("b")]);
        let (result, cursor) = parser.parse(Cursor::new("abc")).unwrap();

        assert_eq!(
            result,
            Match::Alternation(Box::new(Match::Literal("a".into())))
        );
        assert_eq!(cursor.remaining(), "bc");
    }

    #[test]
    fn test_second_succeeds() {
        let parser = alternation([literal("a"), literal("b")]);
        let (result, cursor) = parser.parse(Cursor::new("bcd")).unwrap();

        assert_eq!(result.text(), "b");
        assert_eq!(cursor.remaining(), "cd");
    }

    #[test]
    fn test_all_fail() {
        let parser = alternation([literal("a"), literal("b")]);
        assert_eq!(parser.parse(Cursor::new("xyz")), Err(ParseError::NoMatch));
    }

    #[test]
    fn test_empty_alternation_fails() {
        let parser = alternation(Vec::<crate::literal::Literal>::new());
        assert_eq!(parser.parse(Cursor::new("")), Err(ParseError::NoMatch));
    }

    #[test]
    fn test_first_match_wins_over_longer() {
        let parser = alternation([literal("a"), literal("ab")]);
        let (result, cursor) = parser.parse(Cursor::new("ab")).unwrap();

        assert_eq!(result.text(), "a");
        assert_eq!(cursor.remaining(), "b");
    }

    #[test]
    fn test_each_alternative_starts_fresh() {
        let parser = alternation([literal("abx"), literal("aby")]);
        let (result, _) = parser.parse(Cursor::new("aby")).unwrap();

        assert_eq!(result.text(), "aby");
    }

    #[test]
    fn test_mixed_parser_types() {
        let parser = alternation([literal("0").boxed(), char_class("1-9").unwrap().boxed()]);
        let (result, _) = parser.parse(Cursor::new("7")).unwrap();

        assert_eq!(result, Match::Alternation(Box::new(Match::CharClass('7'))));
    }

    #[test]
    fn test_misuse_is_not_skipped() {
        let registry: Registry = Registry::new();
        let parser = alternation([
            registry.reference("missing").boxed(),
            literal("a").boxed(),
        ]);

        assert!(matches!(
            parser.parse(Cursor::new("a")),
            Err(ParseError::UnboundReference { .. })
        ));
    }
}
