use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The tagged value a combinator hands to its formatter
///
/// `T` is the type its children produced, which is already whatever their own
/// formatters returned. Leaf variants carry the matched input directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchValue<T> {
    Literal(Cow<'static, str>),
    CharClass(char),
    Sequence(Vec<T>),
    Repetition(Vec<T>),
    Optional(Option<T>),
    Alternation(T),
}

/// Default formatter: builds the plain [`Match`] tree
pub type Tag<T = Match> = fn(MatchValue<T>) -> Match;

pub(crate) const TAG: Tag = Match::from;

/// The un-formatted result tree
///
/// Serializes as nested tagged maps, e.g. `{"sequence":[{"charClass":"2"},{"literal":"+"}]}`
/// and `{"optional":null}` for an absent optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Match {
    Literal(Cow<'static, str>),
    CharClass(char),
    Sequence(Vec<Match>),
    Repetition(Vec<Match>),
    Optional(Option<Box<Match>>),
    Alternation(Box<Match>),
}

impl Match {
    /// Name of the combinator that produced this node
    pub fn kind(&self) -> &'static str {
        match self {
            Match::Literal(_) => "literal",
            Match::CharClass(_) => "charClass",
            Match::Sequence(_) => "sequence",
            Match::Repetition(_) => "repetition",
            Match::Optional(_) => "optional",
            Match::Alternation(_) => "alternation",
        }
    }

    /// All matched input under this node, in order
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Match::Literal(text) => out.push_str(text),
            Match::CharClass(c) => out.push(*c),
            Match::Sequence(children) | Match::Repetition(children) => {
                for child in children {
                    child.write_text(out);
                }
            }
            Match::Optional(child) => {
                if let Some(child) = child {
                    child.write_text(out);
                }
            }
            Match::Alternation(child) => child.write_text(out),
        }
    }
}

impl From<MatchValue<Match>> for Match {
    fn from(value: MatchValue<Match>) -> Self {
        match value {
            MatchValue::Literal(text) => Match::Literal(text),
            MatchValue::CharClass(c) => Match::CharClass(c),
            MatchValue::Sequence(children) => Match::Sequence(children),
            MatchValue::Repetition(children) => Match::Repetition(children),
            MatchValue::Optional(child) => Match::Optional(child.map(Box::new)),
            MatchValue::Alternation(child) => Match::Alternation(Box::new(child)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_match_value() {
        let value = MatchValue::Optional(Some(Match::Literal("+".into())));
        assert_eq!(
            Match::from(value),
            Match::Optional(Some(Box::new(Match::Literal("+".into()))))
        );

        let value: MatchValue<Match> = MatchValue::Optional(None);
        assert_eq!(Match::from(value), Match::Optional(None));
    }

    #[test]
    fn test_text_concatenates_in_order() {
        let tree = Match::Sequence(vec![
            Match::CharClass('2'),
            Match::Optional(None),
            Match::Alternation(Box::new(Match::Literal("+".into()))),
            Match::Repetition(vec![Match::CharClass('1'), Match::CharClass('7')]),
        ]);
        assert_eq!(tree.text(), "2+17");
    }

    #[test]
    fn test_kind() {
        assert_eq!(Match::CharClass('a').kind(), "charClass");
        assert_eq!(Match::Repetition(vec![]).kind(), "repetition");
    }
}
