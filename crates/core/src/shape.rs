use std::fmt;

/// The shape of a field.
///
/// Fields are one-dimensional. A [`Shape::Scalar`] is a single value that
/// broadcasts against any vector, as does a vector of length one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    Vector(usize),
}

impl Shape {
    /// Returns the number of values a field of this shape holds.
    ///
    /// A scalar counts as one value, which is how it is laid out when
    /// concatenated with other fields.
    #[must_use]
    pub fn len(self) -> usize {
        match self {
            Shape::Scalar => 1,
            Shape::Vector(n) => n,
        }
    }

    /// Returns true if a field of this shape holds no values.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns true if this shape broadcasts against any other shape.
    #[must_use]
    pub fn is_broadcastable(self) -> bool {
        self.len() == 1
    }

    /// Returns the shape of an elementwise operation between two fields.
    ///
    /// Returns `None` if the shapes cannot be broadcast together.
    #[must_use]
    pub fn broadcast(self, other: Shape) -> Option<Shape> {
        match (self, other) {
            (Shape::Scalar, other) | (other, Shape::Scalar) => Some(other),
            (Shape::Vector(a), Shape::Vector(b)) if a == b => Some(self),
            (Shape::Vector(1), Shape::Vector(_)) => Some(other),
            (Shape::Vector(_), Shape::Vector(1)) => Some(self),
            _ => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => write!(f, "scalar"),
            Shape::Vector(n) => write!(f, "vector of length {n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_broadcasts_against_anything() {
        assert_eq!(
            Shape::Scalar.broadcast(Shape::Vector(4)),
            Some(Shape::Vector(4))
        );
        assert_eq!(
            Shape::Vector(3).broadcast(Shape::Scalar),
            Some(Shape::Vector(3))
        );
        assert_eq!(Shape::Scalar.broadcast(Shape::Scalar), Some(Shape::Scalar));
    }

    #[test]
    fn unit_vector_broadcasts() {
        assert_eq!(
            Shape::Vector(1).broadcast(Shape::Vector(5)),
            Some(Shape::Vector(5))
        );
        assert_eq!(
            Shape::Vector(5).broadcast(Shape::Vector(1)),
            Some(Shape::Vector(5))
        );
    }

    #[test]
    fn mismatched_vectors_do_not_broadcast() {
        assert_eq!(Shape::Vector(2).broadcast(Shape::Vector(3)), None);
    }

    #[test]
    fn scalar_counts_as_one_value() {
        assert_eq!(Shape::Scalar.len(), 1);
        assert!(Shape::Scalar.is_broadcastable());
        assert!(Shape::Vector(0).is_empty());
    }
}
