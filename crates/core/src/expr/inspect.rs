use std::{collections::HashSet, sync::Arc};

use super::{Expr, Kind};

impl Expr {
    /// Returns the names of the distinct variables this expression reads.
    ///
    /// Names are listed in depth-first order of first appearance. Shared
    /// subexpressions are visited once.
    #[must_use]
    pub fn variables(&self) -> Vec<&str> {
        let mut visited = HashSet::new();
        let mut names = Vec::new();
        let mut stack = vec![self];

        while let Some(expr) = stack.pop() {
            if !visited.insert(Arc::as_ptr(&expr.0)) {
                continue;
            }
            if let Kind::Variable(name) = expr.kind()
                && !names.contains(&&**name)
            {
                names.push(&**name);
            }
            stack.extend(expr.children().into_iter().rev());
        }

        names
    }

    /// Returns true if `variable` is reachable from this expression.
    ///
    /// Reachability is by node identity, not by name.
    #[must_use]
    pub fn depends_on(&self, variable: &Expr) -> bool {
        let mut visited = HashSet::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            if expr.ptr_eq(variable) {
                return true;
            }
            if visited.insert(Arc::as_ptr(&expr.0)) {
                stack.extend(expr.children());
            }
        }
        false
    }
}
