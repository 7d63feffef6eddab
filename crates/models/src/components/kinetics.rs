use galvani_core::{ExpressionError, Field};

use crate::parameters::ElectrodeKinetics;

/// Interfacial reaction current densities across the cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionCurrents<F> {
    /// Negative electrode, separator, and positive electrode, end to end.
    pub total: F,
    /// Negative electrode contribution.
    pub negative: F,
    /// Positive electrode contribution.
    pub positive: F,
}

/// Butler-Volmer kinetics for a lead-acid cell.
///
/// Computes the reaction current density in each region from the acid
/// concentrations `cn`, `cs`, `cp` and the electrode potentials `en`, `ep`:
///
/// ```text
/// jn = iota_ref_n * cn * sinh(en - U_Pb(cn))
/// js = 0
/// jp = iota_ref_p * cp^2 * cw(cp) * sinh(ep - U_PbO2(cp))
/// ```
///
/// No reaction takes place in the separator, so its contribution is zero
/// whatever `cs` holds. The electrode contributions are returned separately
/// as well, for terms such as boundary fluxes that need them.
///
/// # Errors
///
/// Returns an [`ExpressionError`] if a concentration and its potential
/// cannot be broadcast together.
pub fn butler_volmer<F, P>(
    param: &P,
    cn: &F,
    cs: &F,
    cp: &F,
    en: &F,
    ep: &F,
) -> Result<ReactionCurrents<F>, ExpressionError>
where
    F: Field,
    P: ElectrodeKinetics<F> + ?Sized,
{
    let overpotential_n = en.sub(&param.u_pb(cn)?)?;
    let jn = param.iota_ref_n().mul(cn)?.mul(&overpotential_n.sinh())?;

    let js = cs.zeros_like();

    let overpotential_p = ep.sub(&param.u_pbo2(cp)?)?;
    let jp = param
        .iota_ref_p()
        .mul(&cp.powi(2))?
        .mul(&param.cw(cp)?)?
        .mul(&overpotential_p.sinh())?;

    let total = F::concatenate(&[jn.clone(), js, jp.clone()])?;
    log::trace!(
        "butler-volmer: {} + {} + {} values",
        jn.shape().len(),
        cs.shape().len(),
        jp.shape().len()
    );

    Ok(ReactionCurrents {
        total,
        negative: jn,
        positive: jp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use galvani_core::{Expr, Shape, expr::Kind};
    use ndarray::{Array1, array, s};

    use crate::parameters::LeadAcidParameters;

    struct Regions {
        cn: Array1<f64>,
        cs: Array1<f64>,
        cp: Array1<f64>,
        en: Array1<f64>,
        ep: Array1<f64>,
    }

    fn regions() -> Regions {
        Regions {
            cn: array![0.9, 1.0, 1.1],
            cs: array![1.0, 1.2],
            cp: array![1.3, 1.2, 1.1, 1.0],
            en: array![0.1, 0.0, -0.1],
            ep: array![1.7, 1.65, 1.6, 1.55],
        }
    }

    #[test]
    fn total_is_the_regions_end_to_end() -> Result<(), ExpressionError> {
        let params = LeadAcidParameters::default();
        let r = regions();

        let j = butler_volmer(&params, &r.cn, &r.cs, &r.cp, &r.en, &r.ep)?;

        assert_eq!(j.total.len(), r.cn.len() + r.cs.len() + r.cp.len());
        assert_eq!(j.total.slice(s![..3]), j.negative);
        assert_eq!(j.total.slice(s![3..5]), array![0.0, 0.0]);
        assert_eq!(j.total.slice(s![5..]), j.positive);

        Ok(())
    }

    #[test]
    fn separator_contribution_is_zero() -> Result<(), ExpressionError> {
        let params = LeadAcidParameters::default();
        let r = regions();

        for cs in [array![0.0, 0.0], array![5.0, -3.0], array![f64::MAX, 1.0e-9]] {
            let j = butler_volmer(&params, &r.cn, &cs, &r.cp, &r.en, &r.ep)?;
            assert!(j.total.slice(s![3..5]).iter().all(|&value| value == 0.0));
        }

        Ok(())
    }

    #[test]
    fn matches_reference_values() -> Result<(), ExpressionError> {
        let params = LeadAcidParameters::default();
        let r = regions();

        let j = butler_volmer(&params, &r.cn, &r.cs, &r.cp, &r.en, &r.ep)?;

        let (cn, en) = (r.cn[0], r.en[0]);
        let u_pb = -0.294 - 0.074 * cn.ln();
        assert_relative_eq!(j.negative[0], 0.08 * cn * (en - u_pb).sinh());

        let (cp, ep) = (r.cp[0], r.ep[0]);
        let u_pbo2 = 1.628 + 0.074 * cp.ln();
        let cw = (1.0 - 0.254 * cp) / 0.0989;
        assert_relative_eq!(
            j.positive[0],
            0.006 * cp.powi(2) * cw * (ep - u_pbo2).sinh(),
            max_relative = 1e-12
        );

        Ok(())
    }

    #[test]
    fn equilibrium_carries_no_current() -> Result<(), ExpressionError> {
        let params = LeadAcidParameters::default();
        let cn = array![1.0, 1.0];
        let cp = array![1.0];

        // At unit concentration each electrode sits at its reference potential.
        let en = Array1::from_elem(2, -0.294);
        let ep = array![1.628];

        let j = butler_volmer(&params, &cn, &array![1.0], &cp, &en, &ep)?;
        assert!(j.total.iter().all(|value| value.abs() < 1e-15));

        Ok(())
    }

    #[test]
    fn builds_symbolic_currents() -> Result<(), ExpressionError> {
        let params = LeadAcidParameters::default();
        let var = |name: &str, n| Expr::variable(name, Shape::Vector(n));
        let (cn, cs, cp) = (var("cn", 10), var("cs", 4), var("cp", 10));
        let (en, ep) = (var("en", 10), var("ep", 10));

        let j = butler_volmer(&params, &cn, &cs, &cp, &en, &ep)?;

        assert_eq!(j.total.shape(), Shape::Vector(24));
        assert_eq!(j.negative.variables(), vec!["cn", "en"]);
        assert_eq!(j.positive.variables(), vec!["cp", "ep"]);

        let Kind::Concatenation(parts) = j.total.kind() else {
            panic!("expected a concatenation, got {}", j.total);
        };
        assert!(parts[0].ptr_eq(&j.negative));
        assert_eq!(parts[1], Expr::full(0.0, Shape::Vector(4)));
        assert!(parts[2].ptr_eq(&j.positive));

        Ok(())
    }

    #[test]
    fn rejects_mismatched_electrode_fields() {
        let params = LeadAcidParameters::default();
        let r = regions();

        let short_en = array![0.1, 0.0];
        assert!(butler_volmer(&params, &r.cn, &r.cs, &r.cp, &short_en, &r.ep).is_err());
    }
}
