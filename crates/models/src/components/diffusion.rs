use galvani_core::{ExpressionError, Field, Operators};

use super::NeumannBoundary;

/// The one-dimensional diffusion equation.
///
/// Computes the time derivative of a diffusing quantity `c` with `n` node
/// values:
///
/// ```text
/// N    = [left, -grad(c), right]     (n + 1 edge values)
/// dcdt = -div(N) + source            (n node values)
/// ```
///
/// The boundary fluxes encode Neumann conditions. An absent `source` is zero.
///
/// # Errors
///
/// Returns an [`ExpressionError`] if a boundary flux is not a single value, or
/// if `c` or `source` does not match the shape the operators expect.
pub fn electrolyte_diffusion<F, O>(
    c: &F,
    operators: &O,
    flux_bcs: &NeumannBoundary<F>,
    source: Option<&F>,
) -> Result<F, ExpressionError>
where
    F: Field,
    O: Operators<F> + ?Sized,
{
    let internal_flux = operators.grad(c)?.neg();
    let flux = flux_bcs.enclose("electrolyte_diffusion", &internal_flux)?;

    let mut dcdt = operators.div(&flux)?.neg();
    if let Some(source) = source {
        dcdt = dcdt.add(source)?;
    }
    log::trace!(
        "electrolyte diffusion: c is a {}, flux is a {}",
        c.shape(),
        flux.shape()
    );

    if dcdt.shape() != c.shape() {
        return Err(ExpressionError::UnexpectedShape {
            operation: "electrolyte_diffusion",
            expected: c.shape(),
            found: dcdt.shape(),
        });
    }

    Ok(dcdt)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use galvani_core::{Expr, Shape, SymbolicOperators, UniformGrid};
    use ndarray::{Array1, array};

    #[test]
    fn preserves_length() -> Result<(), Box<dyn std::error::Error>> {
        for cells in [1, 2, 3, 10, 41] {
            let grid = UniformGrid::new(cells, 1.0)?;
            let c = grid.nodes().mapv(|x| x.powi(2));

            let dcdt = electrolyte_diffusion(&c, &grid, &NeumannBoundary::no_flux(), None)?;
            assert_eq!(dcdt.len(), cells);
        }

        Ok(())
    }

    #[test]
    fn conserves_mass_without_boundary_flux() -> Result<(), Box<dyn std::error::Error>> {
        let grid = UniformGrid::new(20, 1.0)?;
        let profiles: [Array1<f64>; 3] = [
            grid.nodes().mapv(|x| (3.0 * x).sin() + 2.0),
            grid.nodes().mapv(|x| (-10.0 * (x - 0.3).powi(2)).exp()),
            Array1::linspace(5.0, -1.0, 20),
        ];

        for c in &profiles {
            let dcdt = electrolyte_diffusion(c, &grid, &NeumannBoundary::no_flux(), None)?;
            assert_abs_diff_eq!(dcdt.sum(), 0.0, epsilon = 1e-9);
        }

        Ok(())
    }

    #[test]
    fn boundary_flux_enters_the_domain() -> Result<(), Box<dyn std::error::Error>> {
        let grid = UniformGrid::new(4, 1.0)?;
        let c = Array1::from_elem(4, 1.0);
        let bcs = NeumannBoundary::new(array![2.0], array![0.0]);

        // A uniform profile has no internal flux, so only the left cell changes.
        let dcdt = electrolyte_diffusion(&c, &grid, &bcs, None)?;
        assert_relative_eq!(dcdt[0], 2.0 / grid.spacing());
        assert_relative_eq!(dcdt[1], 0.0);
        assert_relative_eq!(dcdt.sum() * grid.spacing(), 2.0);

        Ok(())
    }

    #[test]
    fn single_cell_sees_only_boundary_fluxes() -> Result<(), Box<dyn std::error::Error>> {
        let grid = UniformGrid::new(1, 0.5)?;
        let bcs = NeumannBoundary::new(array![1.0], array![0.25]);

        let dcdt = electrolyte_diffusion(&array![3.0], &grid, &bcs, None)?;

        assert_eq!(dcdt.len(), 1);
        assert_relative_eq!(dcdt[0], -(0.25 - 1.0) / grid.spacing());

        Ok(())
    }

    #[test]
    fn builds_symbolic_single_cell_derivative() -> Result<(), ExpressionError> {
        let c = Expr::variable("c", Shape::Vector(1));
        let bcs = NeumannBoundary::new(Expr::constant(1.0), Expr::constant(0.0));

        let dcdt = electrolyte_diffusion(&c, &SymbolicOperators, &bcs, None)?;
        assert_eq!(dcdt.shape(), Shape::Vector(1));

        Ok(())
    }

    #[test]
    fn adds_the_source_term() -> Result<(), Box<dyn std::error::Error>> {
        let grid = UniformGrid::new(3, 1.0)?;
        let c = array![1.0, 1.0, 1.0];

        let no_flux = NeumannBoundary::no_flux();

        let scalar = electrolyte_diffusion(&c, &grid, &no_flux, Some(&Array1::scalar(0.5)))?;
        assert_eq!(scalar, array![0.5, 0.5, 0.5]);

        let field = array![1.0, 2.0, 3.0];
        let varying = electrolyte_diffusion(&c, &grid, &no_flux, Some(&field))?;
        assert_eq!(varying, field);

        Ok(())
    }

    #[test]
    fn rejects_mismatched_grid() -> Result<(), Box<dyn std::error::Error>> {
        let grid = UniformGrid::new(5, 1.0)?;
        let c = array![1.0, 2.0, 3.0];

        assert!(electrolyte_diffusion(&c, &grid, &NeumannBoundary::no_flux(), None).is_err());

        Ok(())
    }

    #[test]
    fn builds_symbolic_derivative() -> Result<(), ExpressionError> {
        let c = Expr::variable("Electrolyte concentration", Shape::Vector(8));
        let bcs = NeumannBoundary::new(
            Expr::constant(0.0),
            Expr::variable("j_right", Shape::Scalar),
        );

        let dcdt = electrolyte_diffusion(&c, &SymbolicOperators, &bcs, None)?;

        assert_eq!(dcdt.shape(), Shape::Vector(8));
        assert_eq!(dcdt.variables(), vec!["Electrolyte concentration", "j_right"]);
        assert_eq!(
            dcdt.to_string(),
            "-div(concatenation(0, -grad(Electrolyte concentration), j_right))"
        );

        Ok(())
    }
}
