//! # TagComb - Tagged Parser Combinators
//!
//! A small parser combinator engine for embedding grammars directly in code.
//!
//! Six combinators build every grammar: [`literal`], [`char_class`],
//! [`sequence`], [`repetition`], [`optional`] and [`alternation`]. Each one
//! produces a tagged value ([`MatchValue`]) and passes it through a formatter;
//! the default formatter builds a [`Match`] tree that mirrors the grammar. The
//! `*_with` constructors take a custom formatter instead, and enclosing
//! combinators see the formatted values of their children.
//!
//! Recursive grammars go through a [`Registry`]: [`Registry::reference`] gives
//! a parser that looks its rule up when it runs, not when it is built.
//!
//! ```
//! use tagcomb::{Match, ParserExt, alternation, char_class, literal, parse, repetition, sequence};
//!
//! // number = "0" | [1-9] [0-9]*
//! let number = alternation([
//!     literal("0").boxed(),
//!     sequence([
//!         char_class("1-9").unwrap().boxed(),
//!         repetition(char_class("0-9").unwrap(), 0).boxed(),
//!     ])
//!     .boxed(),
//! ]);
//!
//! let result = parse(&number, "2017").unwrap();
//! assert_eq!(result.text(), "2017");
//! assert!(matches!(result, Match::Alternation(_)));
//!
//! // Leading zeros are not part of the grammar
//! assert!(parse(&number, "007").is_err());
//! ```
//!
//! Failure is either [`ParseError::NoMatch`], the input did not fit, or a
//! misuse error such as a reference to a rule that was never defined. Only
//! `NoMatch` is absorbed by `optional`, `alternation` and `repetition`.

pub mod alternation;
pub mod char_class;
pub mod cursor;
pub mod error;
pub mod literal;
pub mod optional;
pub mod parser;
pub mod reference;
pub mod registry;
pub mod repetition;
pub mod sequence;
pub mod value;

pub use alternation::{Alternation, alternation, alternation_with};
pub use char_class::{CharClass, CharSet, char_class, char_class_with};
pub use cursor::Cursor;
pub use error::{ParseError, PatternError};
pub use literal::{Literal, literal, literal_with};
pub use optional::{Optional, optional, optional_with};
pub use parser::{BoxedParser, FromFn, Map, Parser, ParserExt, from_fn, parse};
pub use reference::{Reference, reference};
pub use registry::Registry;
pub use repetition::{Repetition, repetition, repetition_with};
pub use sequence::{Sequence, sequence, sequence_with};
pub use value::{Match, MatchValue, Tag};
