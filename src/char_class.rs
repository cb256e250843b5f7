use crate::cursor::Cursor;
use crate::error::{ParseError, PatternError};
use crate::parser::Parser;
use crate::value::{Match, MatchValue, TAG, Tag};
use std::marker::PhantomData;
use std::str::{Chars, FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    Single(char),
    Range(char, char),
    Digit,
    Word,
    Space,
}

impl Item {
    fn contains(self, c: char) -> bool {
        match self {
            Item::Single(s) => c == s,
            Item::Range(start, end) => (start..=end).contains(&c),
            Item::Digit => c.is_ascii_digit(),
            Item::Word => c.is_ascii_alphanumeric() || c == '_',
            Item::Space => c.is_whitespace(),
        }
    }
}

/// A compiled single-character class such as `a-zA-Z0-9_` or `^"\\`
///
/// Syntax follows the inside of a regex bracket expression: single chars,
/// `a-z` ranges, a leading `^` to negate, `-` taken literally at either end,
/// and backslash escapes including the `\d`, `\w` and `\s` shorthands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    negated: bool,
    items: Vec<Item>,
}

impl CharSet {
    pub fn contains(&self, c: char) -> bool {
        self.items.iter().any(|item| item.contains(c)) != self.negated
    }
}

enum Atom {
    Char(char),
    Shorthand(char, Item),
}

fn next_atom(pattern: &str, chars: &mut Chars<'_>, c: char) -> Result<Atom, PatternError> {
    if c != '\\' {
        return Ok(Atom::Char(c));
    }
    let escaped = chars.next().ok_or_else(|| PatternError::TrailingEscape {
        pattern: pattern.to_string(),
    })?;
    Ok(match escaped {
        'd' => Atom::Shorthand(escaped, Item::Digit),
        'w' => Atom::Shorthand(escaped, Item::Word),
        's' => Atom::Shorthand(escaped, Item::Space),
        'n' => Atom::Char('\n'),
        't' => Atom::Char('\t'),
        'r' => Atom::Char('\r'),
        other => Atom::Char(other),
    })
}

impl FromStr for CharSet {
    type Err = PatternError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        // A lone `^` is just the caret itself
        let (negated, body) = match pattern.strip_prefix('^') {
            Some(rest) if !rest.is_empty() => (true, rest),
            _ => (false, pattern),
        };

        let mut items = Vec::new();
        let mut chars = body.chars();
        while let Some(c) = chars.next() {
            let start = match next_atom(pattern, &mut chars, c)? {
                Atom::Shorthand(_, item) => {
                    items.push(item);
                    continue;
                }
                Atom::Char(start) => start,
            };

            let mut lookahead = chars.clone();
            let end = match (lookahead.next(), lookahead.next()) {
                (Some('-'), Some(end)) => end,
                _ => {
                    items.push(Item::Single(start));
                    continue;
                }
            };
            chars = lookahead;

            match next_atom(pattern, &mut chars, end)? {
                Atom::Shorthand(shorthand, _) => {
                    return Err(PatternError::ShorthandInRange {
                        pattern: pattern.to_string(),
                        shorthand,
                    });
                }
                Atom::Char(end) if end < start => {
                    return Err(PatternError::ReversedRange {
                        pattern: pattern.to_string(),
                        start,
                        end,
                    });
                }
                Atom::Char(end) => items.push(Item::Range(start, end)),
            }
        }

        Ok(CharSet { negated, items })
    }
}

/// Parser that matches exactly one char belonging to a [`CharSet`]
pub struct CharClass<F = Tag, T = Match> {
    set: CharSet,
    formatter: F,
    _child: PhantomData<fn() -> T>,
}

impl<F, T> CharClass<F, T> {
    pub fn new(set: CharSet, formatter: F) -> Self {
        Self {
            set,
            formatter,
            _child: PhantomData,
        }
    }

    pub fn set(&self) -> &CharSet {
        &self.set
    }
}

impl<F, T, U> Parser for CharClass<F, T>
where
    F: Fn(MatchValue<T>) -> U,
{
    type Output = U;

    fn parse<'code>(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError> {
        // At end of input the peek is empty and never a member
        match cursor.peek(1).chars().next() {
            Some(c) if self.set.contains(c) => Ok((
                (self.formatter)(MatchValue::CharClass(c)),
                cursor.advance(1),
            )),
            _ => Err(ParseError::NoMatch),
        }
    }
}

/// Match one char from `pattern`, producing [`Match::CharClass`]
pub fn char_class(pattern: &str) -> Result<CharClass, PatternError> {
    Ok(CharClass::new(pattern.parse()?, TAG))
}

/// Match one char from `pattern` and pass the tagged value through `formatter`
pub fn char_class_with<F, T, U>(
    pattern: &str,
    formatter: F,
) -> Result<CharClass<F, T>, PatternError>
where
    F: Fn(MatchValue<T>) -> U,
{
    Ok(CharClass::new(pattern.parse()?, formatter))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pattern: &str) -> CharSet {
        pattern.parse().unwrap()
    }

    #[test]
    fn test_single_range() {
        let digits = set("0-9");
        assert!(digits.contains('0'));
        assert!(digits.contains('9'));
        assert!(!digits.contains('a'));
        assert!(!digits.contains('/'));
    }

    #[test]
    fn test_combined_ranges_and_chars() {
        let ident = set("a-zA-Z0-9_");
        for c in ['a', 'z', 'A', 'Z', '5', '_'] {
            assert!(ident.contains(c), "{c} should be in class");
        }
        assert!(!ident.contains('-'));
        assert!(!ident.contains(' '));
    }

    #[test]
    fn test_negation() {
        let not_quote = set("^\"\\\\");
        assert!(not_quote.contains('a'));
        assert!(!not_quote.contains('"'));
        assert!(!not_quote.contains('\\'));
    }

    #[test]
    fn test_lone_caret_is_literal() {
        let caret = set("^");
        assert!(caret.contains('^'));
        assert!(!caret.contains('a'));
    }

    #[test]
    fn test_caret_not_first_is_literal() {
        let s = set("a^");
        assert!(s.contains('^'));
        assert!(s.contains('a'));
    }

    #[test]
    fn test_dash_at_edges_is_literal() {
        let signs = set("+-");
        assert!(signs.contains('+'));
        assert!(signs.contains('-'));
        assert!(!signs.contains(','));

        let leading = set("-a");
        assert!(leading.contains('-'));
        assert!(leading.contains('a'));
    }

    #[test]
    fn test_escapes() {
        let s = set("\\-\\]\\n");
        assert!(s.contains('-'));
        assert!(s.contains(']'));
        assert!(s.contains('\n'));
        assert!(!s.contains('n'));
    }

    #[test]
    fn test_shorthands() {
        let s = set("\\d\\s");
        assert!(s.contains('7'));
        assert!(s.contains(' '));
        assert!(s.contains('\t'));
        assert!(!s.contains('x'));

        let word = set("\\w");
        assert!(word.contains('_'));
        assert!(word.contains('Q'));
        assert!(!word.contains('.'));
    }

    #[test]
    fn test_invalid_patterns() {
        assert_eq!("".parse::<CharSet>(), Err(PatternError::Empty));
        assert!(matches!(
            "ab\\".parse::<CharSet>(),
            Err(PatternError::TrailingEscape { .. })
        ));
        assert!(matches!(
            "z-a".parse::<CharSet>(),
            Err(PatternError::ReversedRange {
                start: 'z',
                end: 'a',
                ..
            })
        ));
        assert!(matches!(
            "a-\\d".parse::<CharSet>(),
            Err(PatternError::ShorthandInRange { shorthand: 'd', .. })
        ));
    }

    #[test]
    fn test_parser_matches_one_char() {
        let parser = char_class("0-9").unwrap();
        let (result, cursor) = parser.parse(Cursor::new("42")).unwrap();

        assert_eq!(result, Match::CharClass('4'));
        assert_eq!(cursor.remaining(), "2");
    }

    #[test]
    fn test_parser_fails_on_non_member() {
        let parser = char_class("0-9").unwrap();
        assert_eq!(parser.parse(Cursor::new("x")), Err(ParseError::NoMatch));
    }

    #[test]
    fn test_parser_fails_at_end_of_input() {
        let parser = char_class("^a").unwrap();
        assert_eq!(parser.parse(Cursor::new("")), Err(ParseError::NoMatch));
    }

    #[test]
    fn test_parser_unicode() {
        let parser = char_class("α-ω").unwrap();
        let (result, cursor) = parser.parse(Cursor::new("λx")).unwrap();

        assert_eq!(result, Match::CharClass('λ'));
        assert_eq!(cursor.remaining(), "x");
    }

    #[test]
    fn test_formatter() {
        let parser = char_class_with("0-9", |value: MatchValue<u32>| match value {
            MatchValue::CharClass(c) => c.to_digit(10).unwrap_or(0),
            _ => 0,
        })
        .unwrap();

        let (digit, _) = parser.parse(Cursor::new("7")).unwrap();
        assert_eq!(digit, 7);
    }
}
