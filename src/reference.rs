use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::registry::{Registry, Rules};
use log::trace;
use std::sync::{PoisonError, Weak};

/// A parser that defers to a named rule, looked up each time it runs
///
/// The reference adds nothing to the result: it returns exactly what the
/// bound rule returns. It holds the registry weakly, so a rule that refers to
/// itself does not keep its own registry alive.
pub struct Reference<T> {
    rules: Weak<Rules<T>>,
    name: String,
}

impl<T> Reference<T> {
    pub(crate) fn new(rules: Weak<Rules<T>>, name: String) -> Self {
        Self { rules, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Clone for Reference<T> {
    fn clone(&self) -> Self {
        Self {
            rules: Weak::clone(&self.rules),
            name: self.name.clone(),
        }
    }
}

impl<T: 'static> Parser for Reference<T> {
    type Output = T;

    fn parse<'code>(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError> {
        let rules = self
            .rules
            .upgrade()
            .ok_or_else(|| ParseError::RegistryDropped {
                name: self.name.clone(),
            })?;

        // The lock is released before dispatch so the rule can recurse
        let rule = rules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&self.name)
            .cloned()
            .ok_or_else(|| ParseError::UnboundReference {
                name: self.name.clone(),
            })?;

        trace!("rule `{}` at byte {}", self.name, cursor.position());
        rule.parse(cursor)
    }
}

/// Create a reference to `name` in `registry`
pub fn reference<T: 'static>(registry: &Registry<T>, name: impl Into<String>) -> Reference<T> {
    registry.reference(name)
}
