//! Named model variables.

use indexmap::IndexMap;
use thiserror::Error;

use crate::Expr;

/// An insertion-ordered mapping from variable name to expression.
///
/// Each submodel builds one of these and the model builder merges them into
/// the model's global variable set. Iteration follows insertion order.
///
/// [`insert`](Self::insert) and [`extend`](Self::extend) follow dictionary
/// update semantics: re-inserting a key replaces its expression but keeps its
/// original position. Use [`try_merge`](Self::try_merge) when two sources must
/// agree on every key they share.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableMap {
    entries: IndexMap<String, Expr>,
}

/// A key was registered twice with different expressions.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("variable `{name}` is already registered as `{existing}`, not `{incoming}`")]
pub struct VariableConflict {
    pub name: String,
    pub existing: Expr,
    pub incoming: Expr,
}

impl VariableMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a variable, returning the expression it replaced, if any.
    pub fn insert(&mut self, name: impl Into<String>, expr: Expr) -> Option<Expr> {
        let name = name.into();
        let previous = self.entries.insert(name.clone(), expr);
        if let Some(previous) = &previous
            && let Some(current) = self.entries.get(&name)
            && previous != current
        {
            log::warn!("variable `{name}` redefined from `{previous}` to `{current}`");
        }
        previous
    }

    /// Inserts every entry of `other`, in order, replacing existing keys.
    pub fn extend(&mut self, other: VariableMap) {
        for (name, expr) in other.entries {
            self.insert(name, expr);
        }
    }

    /// Inserts every entry of `other`, rejecting conflicting redefinitions.
    ///
    /// A key present in both maps is accepted only if both expressions are
    /// structurally equal. On conflict nothing is inserted.
    ///
    /// # Errors
    ///
    /// Returns a [`VariableConflict`] for the first key, in `other`'s order,
    /// whose expressions differ.
    pub fn try_merge(&mut self, other: VariableMap) -> Result<(), VariableConflict> {
        for (name, incoming) in &other.entries {
            if let Some(existing) = self.entries.get(name)
                && existing != incoming
            {
                return Err(VariableConflict {
                    name: name.clone(),
                    existing: existing.clone(),
                    incoming: incoming.clone(),
                });
            }
        }

        for (name, expr) in other.entries {
            self.entries.entry(name).or_insert(expr);
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Expr> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the variable names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns `(name, expression)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expr)> {
        self.entries.iter().map(|(name, expr)| (name.as_str(), expr))
    }
}

impl<K: Into<String>> FromIterator<(K, Expr)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (K, Expr)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, expr) in iter {
            map.insert(name, expr);
        }
        map
    }
}

impl IntoIterator for VariableMap {
    type Item = (String, Expr);
    type IntoIter = indexmap::map::IntoIter<String, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::Shape;

    use super::*;

    fn var(name: &str) -> Expr {
        Expr::variable(name, Shape::Scalar)
    }

    #[test]
    fn preserves_insertion_order() {
        let map: VariableMap = [("b", var("b")), ("a", var("a")), ("c", var("c"))]
            .into_iter()
            .collect();

        assert_eq!(map.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut map = VariableMap::new();
        map.insert("x", var("x"));
        map.insert("y", var("y"));

        let replaced = map.insert("x", Expr::constant(1.0));

        assert_eq!(replaced, Some(var("x")));
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(map.get("x"), Some(&Expr::constant(1.0)));
    }

    #[test]
    fn extend_appends_new_keys() {
        let mut map = VariableMap::new();
        map.insert("x", var("x"));

        let mut other = VariableMap::new();
        other.insert("y", var("y"));
        other.insert("x", var("x"));
        map.extend(other);

        assert_eq!(map.names().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn merge_accepts_identical_definitions() -> Result<(), VariableConflict> {
        let mut map = VariableMap::new();
        map.insert("x", var("x"));

        let mut other = VariableMap::new();
        other.insert("x", var("x"));
        other.insert("y", var("y"));
        map.try_merge(other)?;

        assert_eq!(map.names().collect::<Vec<_>>(), vec!["x", "y"]);
        Ok(())
    }

    #[test]
    fn merge_rejects_conflicts_atomically() {
        let mut map = VariableMap::new();
        map.insert("x", var("x"));

        let mut other = VariableMap::new();
        other.insert("y", var("y"));
        other.insert("x", Expr::constant(2.0));

        let conflict = map.try_merge(other).unwrap_err();
        assert_eq!(conflict.name, "x");
        assert_eq!(conflict.incoming, Expr::constant(2.0));
        assert!(!map.contains("y"));
    }
}
