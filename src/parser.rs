use crate::cursor::Cursor;
use crate::error::ParseError;
use log::debug;
use std::marker::PhantomData;
use std::sync::Arc;

/// Core parser trait for parser combinators
///
/// A parser looks at the input from `cursor` onwards and either matches a
/// prefix of it, returning a value and a cursor past the consumed input, or
/// fails. Parsers hold no mutable state, so one grammar value can be applied
/// to any number of inputs, from any number of threads.
pub trait Parser {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// On success the returned cursor is never behind `cursor`. Failure
    /// consumes nothing: the caller still holds the cursor it passed in.
    fn parse<'code>(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    fn parse<'code>(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    fn parse<'code>(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Output = P::Output;

    fn parse<'code>(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError> {
        (**self).parse(cursor)
    }
}

/// Type-erased parser, for mixing parser types in one `sequence` or `alternation`
pub type BoxedParser<T> = Box<dyn Parser<Output = T> + Send + Sync>;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse<'code>(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Parser built from a plain function over cursors
pub struct FromFn<F, T> {
    function: F,
    _output: PhantomData<fn() -> T>,
}

impl<F, T> Parser for FromFn<F, T>
where
    F: for<'code> Fn(Cursor<'code>) -> Result<(T, Cursor<'code>), ParseError>,
{
    type Output = T;

    fn parse<'code>(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError> {
        (self.function)(cursor)
    }
}

/// Wrap a function as a parser
///
/// The function must honour the parser contract: never return a cursor
/// behind the one it was given.
pub fn from_fn<F, T>(function: F) -> FromFn<F, T>
where
    F: for<'code> Fn(Cursor<'code>) -> Result<(T, Cursor<'code>), ParseError>,
{
    FromFn {
        function,
        _output: PhantomData,
    }
}

/// Extension methods available on every parser
pub trait ParserExt: Parser + Sized {
    /// Transform the output without changing what is matched
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    /// Erase the parser's concrete type
    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<P> ParserExt for P where P: Parser {}

/// Run `parser` over the whole of `input`
///
/// A parser that matches only a prefix of `input` counts as no match.
pub fn parse<P>(parser: &P, input: &str) -> Result<P::Output, ParseError>
where
    P: Parser + ?Sized,
{
    let (value, cursor) = parser.parse(Cursor::new(input))?;
    if cursor.at_end() {
        Ok(value)
    } else {
        debug!(
            "parse stopped at byte {} of {}, rejecting trailing input",
            cursor.position(),
            input.len()
        );
        Err(ParseError::NoMatch)
    }
}
