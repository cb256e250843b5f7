use thiserror::Error;

/// Why a parser did not produce a match
///
/// There are two classes of failure. [`ParseError::NoMatch`] is the ordinary
/// outcome of input that does not fit the grammar; combinators such as
/// `optional` and `alternation` absorb it and try something else. The other
/// variants report a grammar that was wired up wrong. They are never absorbed
/// and always reach the caller of [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input does not match the grammar")]
    NoMatch,

    #[error("reference to unbound rule `{name}`")]
    UnboundReference { name: String },

    #[error("reference to rule `{name}` outlived its registry")]
    RegistryDropped { name: String },
}

impl ParseError {
    /// True for an ordinary grammar mismatch, false for misuse
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ParseError::NoMatch)
    }
}

/// A character class pattern that could not be compiled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("character class pattern is empty")]
    Empty,

    #[error("character class pattern `{pattern}` ends with a lone backslash")]
    TrailingEscape { pattern: String },

    #[error("range `{start}-{end}` in character class `{pattern}` is out of order")]
    ReversedRange {
        pattern: String,
        start: char,
        end: char,
    },

    #[error("shorthand `\\{shorthand}` cannot bound a range in character class `{pattern}`")]
    ShorthandInRange { pattern: String, shorthand: char },
}
