use crate::parser::Parser;
use crate::reference::Reference;
use crate::value::Match;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub(crate) type Rule<T> = Arc<dyn Parser<Output = T> + Send + Sync>;
pub(crate) type Rules<T> = RwLock<HashMap<String, Rule<T>>>;

/// Named parsers for grammars that refer to themselves
///
/// A registry is a shared handle: clones see the same rules. Parsers built by
/// [`Registry::reference`] look their rule up each time they run, so a rule can
/// be referenced before it is defined, including from inside its own
/// definition.
///
/// References hold the registry weakly, so self-referencing rules do not keep
/// it alive. Keep a `Registry` handle for as long as its references are used;
/// once the last handle is dropped, running a reference fails with
/// [`ParseError::RegistryDropped`](crate::error::ParseError::RegistryDropped).
///
/// ```
/// use tagcomb::{ParserExt, Registry, alternation, literal, parse, sequence};
///
/// // parens = "(" parens ")" | ""
/// let registry: Registry = Registry::new();
/// registry.define(
///     "parens",
///     alternation([
///         sequence([
///             literal("(").boxed(),
///             registry.reference("parens").boxed(),
///             literal(")").boxed(),
///         ])
///         .boxed(),
///         literal("").boxed(),
///     ]),
/// );
///
/// let parens = registry.reference("parens");
/// assert!(parse(&parens, "((()))").is_ok());
/// assert!(parse(&parens, "(()").is_err());
/// ```
pub struct Registry<T = Match> {
    rules: Arc<Rules<T>>,
}

impl<T: 'static> Registry<T> {
    pub fn new() -> Self {
        Self {
            rules: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Bind `name` to `parser`, replacing any earlier binding
    ///
    /// Returns true if a previous binding was replaced.
    pub fn define<P>(&self, name: impl Into<String>, parser: P) -> bool
    where
        P: Parser<Output = T> + Send + Sync + 'static,
    {
        self.write().insert(name.into(), Arc::new(parser)).is_some()
    }

    /// A parser that runs whatever is bound to `name` at the time it is invoked
    pub fn reference(&self, name: impl Into<String>) -> Reference<T> {
        Reference::new(Arc::downgrade(&self.rules), name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Bound names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the map half-updated, so
    // poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Rule<T>>> {
        self.rules.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Rule<T>>> {
        self.rules.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: 'static> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
        }
    }
}

impl<T: 'static> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names())
            .finish()
    }
}
