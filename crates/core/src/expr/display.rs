use std::fmt;

use super::{BinaryOp, Expr, Kind, UnaryFunction};

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expr")
            .field("kind", self.kind())
            .field("shape", &self.shape())
            .finish()
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        };
        f.write_str(symbol)
    }
}

impl fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryFunction::Sinh => f.write_str("sinh"),
            UnaryFunction::Ln => f.write_str("log"),
        }
    }
}

/// Renders the expression in infix form.
///
/// Binary operations are always parenthesized, so the rendering is
/// unambiguous without precedence rules.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Kind::Variable(name) => f.write_str(name),
            Kind::Constant(value) => write!(f, "{value}"),
            Kind::Negate(x) => write!(f, "-{x}"),
            Kind::Binary(op, lhs, rhs) => write!(f, "({lhs} {op} {rhs})"),
            Kind::Power(x, exponent) => write!(f, "{x}**{exponent}"),
            Kind::Function(function, x) => write!(f, "{function}({x})"),
            Kind::Gradient(x) => write!(f, "grad({x})"),
            Kind::Divergence(x) => write!(f, "div({x})"),
            Kind::XAverage(x) => write!(f, "x-average({x})"),
            Kind::Concatenation(parts) => {
                f.write_str("concatenation(")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{part}")?;
                }
                f.write_str(")")
            }
        }
    }
}
