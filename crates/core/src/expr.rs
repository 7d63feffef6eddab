//! Immutable symbolic expression graphs.
//!
//! An [`Expr`] is a cheap handle to a node in a directed acyclic graph.
//! Cloning an `Expr` shares the node, so a variable read by several derived
//! quantities appears once in memory and is reachable from each of them.
//!
//! Expressions are built with explicit builder methods rather than operator
//! overloading. Each builder checks shapes and returns a new node, leaving its
//! operands untouched:
//!
//! ```
//! use galvani_core::{Expr, ExpressionError, Shape};
//!
//! # fn main() -> Result<(), ExpressionError> {
//! let c = Expr::variable("Electrolyte concentration", Shape::Vector(10));
//! let two_c = c.mul(&Expr::constant(2.0))?;
//!
//! assert_eq!(two_c.shape(), Shape::Vector(10));
//! assert_eq!(two_c.to_string(), "(Electrolyte concentration * 2)");
//! # Ok(())
//! # }
//! ```

mod display;
mod inspect;

use std::{collections::HashSet, sync::Arc};

use crate::{ExpressionError, Field, Shape};

/// A node in a symbolic expression graph.
#[derive(Clone)]
pub struct Expr(Arc<Node>);

#[derive(Debug)]
struct Node {
    kind: Kind,
    shape: Shape,
}

/// The operation a node represents.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    /// A named placeholder for an unknown quantity.
    Variable(Arc<str>),
    /// A constant value, broadcast over the node's shape.
    Constant(f64),
    Negate(Expr),
    Binary(BinaryOp, Expr, Expr),
    Power(Expr, i32),
    Function(UnaryFunction, Expr),
    /// Spatial gradient, from node values to interior edges.
    Gradient(Expr),
    /// Spatial divergence, from edge values to nodes.
    Divergence(Expr),
    /// Average along the through-cell direction.
    XAverage(Expr),
    Concatenation(Vec<Expr>),
}

/// Elementwise binary arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "divide",
        }
    }
}

/// Elementwise unary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryFunction {
    Sinh,
    Ln,
}

impl Expr {
    fn new(kind: Kind, shape: Shape) -> Self {
        Self(Arc::new(Node { kind, shape }))
    }

    /// Creates a named variable.
    pub fn variable(name: impl Into<Arc<str>>, shape: Shape) -> Self {
        Self::new(Kind::Variable(name.into()), shape)
    }

    /// Creates a scalar constant.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(Kind::Constant(value), Shape::Scalar)
    }

    /// Creates a constant broadcast over `shape`.
    #[must_use]
    pub fn full(value: f64, shape: Shape) -> Self {
        Self::new(Kind::Constant(value), shape)
    }

    /// Returns the operation this node represents.
    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.0.kind
    }

    /// Returns the shape of this node.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.0.shape
    }

    /// Returns the variable name if this node is a variable.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self.kind() {
            Kind::Variable(name) => Some(&**name),
            _ => None,
        }
    }

    /// Returns true if both handles refer to the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Expr) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the direct operands of this node, in order.
    #[must_use]
    pub fn children(&self) -> Vec<&Expr> {
        match self.kind() {
            Kind::Variable(_) | Kind::Constant(_) => Vec::new(),
            Kind::Negate(x)
            | Kind::Power(x, _)
            | Kind::Function(_, x)
            | Kind::Gradient(x)
            | Kind::Divergence(x)
            | Kind::XAverage(x) => vec![x],
            Kind::Binary(_, lhs, rhs) => vec![lhs, rhs],
            Kind::Concatenation(parts) => parts.iter().collect(),
        }
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::IncompatibleShapes`] if the shapes cannot be
    /// broadcast together.
    pub fn add(&self, rhs: &Expr) -> Result<Expr, ExpressionError> {
        self.binary(BinaryOp::Add, rhs)
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::IncompatibleShapes`] if the shapes cannot be
    /// broadcast together.
    pub fn sub(&self, rhs: &Expr) -> Result<Expr, ExpressionError> {
        self.binary(BinaryOp::Sub, rhs)
    }

    /// Elementwise product.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::IncompatibleShapes`] if the shapes cannot be
    /// broadcast together.
    pub fn mul(&self, rhs: &Expr) -> Result<Expr, ExpressionError> {
        self.binary(BinaryOp::Mul, rhs)
    }

    /// Elementwise quotient.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::IncompatibleShapes`] if the shapes cannot be
    /// broadcast together.
    pub fn divide(&self, rhs: &Expr) -> Result<Expr, ExpressionError> {
        self.binary(BinaryOp::Div, rhs)
    }

    fn binary(&self, op: BinaryOp, rhs: &Expr) -> Result<Expr, ExpressionError> {
        let (left, right) = (self.shape(), rhs.shape());
        let shape = left
            .broadcast(right)
            .ok_or(ExpressionError::IncompatibleShapes {
                operation: op.name(),
                left,
                right,
            })?;
        Ok(Self::new(Kind::Binary(op, self.clone(), rhs.clone()), shape))
    }

    #[must_use]
    pub fn neg(&self) -> Expr {
        Self::new(Kind::Negate(self.clone()), self.shape())
    }

    #[must_use]
    pub fn powi(&self, exponent: i32) -> Expr {
        Self::new(Kind::Power(self.clone(), exponent), self.shape())
    }

    #[must_use]
    pub fn sinh(&self) -> Expr {
        self.function(UnaryFunction::Sinh)
    }

    #[must_use]
    pub fn ln(&self) -> Expr {
        self.function(UnaryFunction::Ln)
    }

    fn function(&self, function: UnaryFunction) -> Expr {
        Self::new(Kind::Function(function, self.clone()), self.shape())
    }

    /// Multiplies by a scalar constant.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Expr {
        Self::new(
            Kind::Binary(BinaryOp::Mul, self.clone(), Expr::constant(factor)),
            self.shape(),
        )
    }

    /// Gradient from `n` node values to `n - 1` interior edges.
    ///
    /// A single node has no interior edges, so its gradient is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::UnexpectedShape`] unless `self` is a vector
    /// with at least one value.
    pub fn gradient(&self) -> Result<Expr, ExpressionError> {
        match self.shape() {
            Shape::Vector(n) if n >= 1 => {
                Ok(Self::new(Kind::Gradient(self.clone()), Shape::Vector(n - 1)))
            }
            found => Err(ExpressionError::UnexpectedShape {
                operation: "grad",
                expected: Shape::Vector(1),
                found,
            }),
        }
    }

    /// Divergence from `n + 1` edge values to `n` nodes.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::UnexpectedShape`] unless `self` is a vector
    /// with at least two values.
    pub fn divergence(&self) -> Result<Expr, ExpressionError> {
        match self.shape() {
            Shape::Vector(n) if n >= 2 => Ok(Self::new(
                Kind::Divergence(self.clone()),
                Shape::Vector(n - 1),
            )),
            found => Err(ExpressionError::UnexpectedShape {
                operation: "div",
                expected: Shape::Vector(2),
                found,
            }),
        }
    }

    /// Average along the through-cell direction, reducing to a scalar.
    #[must_use]
    pub fn x_average(&self) -> Expr {
        Self::new(Kind::XAverage(self.clone()), Shape::Scalar)
    }

    /// Joins expressions end to end.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::EmptyConcatenation`] if `parts` is empty.
    pub fn concatenation(parts: &[Expr]) -> Result<Expr, ExpressionError> {
        if parts.is_empty() {
            return Err(ExpressionError::EmptyConcatenation);
        }
        let len = parts.iter().map(|part| part.shape().len()).sum();
        Ok(Self::new(
            Kind::Concatenation(parts.to_vec()),
            Shape::Vector(len),
        ))
    }
}

impl PartialEq for Expr {
    /// Structural equality.
    ///
    /// Each pair of shared nodes is compared once, so the cost is linear in
    /// the size of the graphs rather than in the number of paths through them.
    fn eq(&self, other: &Self) -> bool {
        structurally_equal(self, other, &mut HashSet::new())
    }
}

type NodePair = (*const Node, *const Node);

/// Compares two graphs, skipping pairs of nodes already seen.
///
/// A pair in `seen` either compared equal or is an ancestor still being
/// compared. Graphs are acyclic, so the second case cannot recur below itself.
fn structurally_equal(lhs: &Expr, rhs: &Expr, seen: &mut HashSet<NodePair>) -> bool {
    if lhs.ptr_eq(rhs) {
        return true;
    }
    if !seen.insert((Arc::as_ptr(&lhs.0), Arc::as_ptr(&rhs.0))) {
        return true;
    }
    if lhs.shape() != rhs.shape() {
        return false;
    }

    let mut same = |a: &Expr, b: &Expr| structurally_equal(a, b, seen);
    match (lhs.kind(), rhs.kind()) {
        (Kind::Variable(a), Kind::Variable(b)) => a == b,
        (Kind::Constant(a), Kind::Constant(b)) => a == b,
        (Kind::Negate(a), Kind::Negate(b))
        | (Kind::Gradient(a), Kind::Gradient(b))
        | (Kind::Divergence(a), Kind::Divergence(b))
        | (Kind::XAverage(a), Kind::XAverage(b)) => same(a, b),
        (Kind::Binary(op_a, l_a, r_a), Kind::Binary(op_b, l_b, r_b)) => {
            op_a == op_b && same(l_a, l_b) && same(r_a, r_b)
        }
        (Kind::Power(a, n), Kind::Power(b, m)) => n == m && same(a, b),
        (Kind::Function(f, a), Kind::Function(g, b)) => f == g && same(a, b),
        (Kind::Concatenation(a), Kind::Concatenation(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| same(a, b))
        }
        _ => false,
    }
}

impl Field for Expr {
    fn scalar(value: f64) -> Self {
        Expr::constant(value)
    }

    fn shape(&self) -> Shape {
        Expr::shape(self)
    }

    fn zeros_like(&self) -> Self {
        Expr::full(0.0, Expr::shape(self))
    }

    fn add(&self, rhs: &Self) -> Result<Self, ExpressionError> {
        Expr::add(self, rhs)
    }

    fn sub(&self, rhs: &Self) -> Result<Self, ExpressionError> {
        Expr::sub(self, rhs)
    }

    fn mul(&self, rhs: &Self) -> Result<Self, ExpressionError> {
        Expr::mul(self, rhs)
    }

    fn divide(&self, rhs: &Self) -> Result<Self, ExpressionError> {
        Expr::divide(self, rhs)
    }

    fn neg(&self) -> Self {
        Expr::neg(self)
    }

    fn powi(&self, exponent: i32) -> Self {
        Expr::powi(self, exponent)
    }

    fn sinh(&self) -> Self {
        Expr::sinh(self)
    }

    fn ln(&self) -> Self {
        Expr::ln(self)
    }

    fn concatenate(parts: &[Self]) -> Result<Self, ExpressionError> {
        Expr::concatenation(parts)
    }

    fn scale(&self, factor: f64) -> Self {
        Expr::scale(self, factor)
    }
}
