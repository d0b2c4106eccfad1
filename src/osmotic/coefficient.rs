//! Osmotic coefficient of seawater over SA/t/p grids.
//!
//! Units: Absolute Salinity in g/kg, in-situ temperature in °C (ITS-90), sea
//! pressure in dbar; the coefficient is dimensionless.
//!
//! Undefined is `f64::NAN`. Negative or NaN salinity, NaN temperature or
//! pressure, and zero salinity give NaN at that position only; the backend
//! is never called there. Shape problems and backend errors abort the call.

use log::trace;
use ndarray::{Array2, ArrayView2};

use crate::adapters::teos10::{Teos10Backend, sa_from_sp};
use crate::chemistry::{ideal_term, molality};
use crate::error::{OsmoticError, OsmoticResult};
use crate::models::Constants;
use crate::osmotic::conform::{Conformed, conform, conform_args};

/// Compute the osmotic coefficient of seawater on a grid.
///
/// `sa` and `t` must share one M×N shape; `p` is broadcast to it (scalar,
/// row, column, transposed column or full grid, see
/// [`conform`](crate::osmotic::conform::conform)). Units:
/// - `sa` is Absolute Salinity in g/kg
/// - `t` is in-situ temperature in °C (ITS-90)
/// - `p` is sea pressure in dbar
/// - the result is dimensionless and has the shape of `sa`
///
/// Positions with negative or NaN salinity, NaN temperature or pressure, or
/// zero salinity are NaN in the result; the backend is not called for them.
///
/// Returns an error if the shapes do not conform, or the first error the
/// backend reports.
pub fn osmotic_coefficient<'a, B: Teos10Backend>(
    backend: &B,
    sa: ArrayView2<'a, f64>,
    t: ArrayView2<'a, f64>,
    p: ArrayView2<'a, f64>,
) -> OsmoticResult<Array2<f64>, B::Error> {
    osmotic_coefficient_with(backend, &Constants::default(), sa, t, p)
}

/// As [`osmotic_coefficient`], with caller-supplied physical constants.
pub fn osmotic_coefficient_with<'a, B: Teos10Backend>(
    backend: &B,
    constants: &Constants,
    sa: ArrayView2<'a, f64>,
    t: ArrayView2<'a, f64>,
    p: ArrayView2<'a, f64>,
) -> OsmoticResult<Array2<f64>, B::Error> {
    let constants = constants.validated::<B::Error>()?;
    let grid = conform::<B::Error>(sa, t, p)?;
    evaluate(backend, &constants, &grid)
}

/// As [`osmotic_coefficient`], taking the grids as an argument list.
///
/// Fails with [`OsmoticError::ArgumentCount`] unless `args` holds exactly
/// SA, t and p. Always uses the TEOS-10 [`Constants::default`].
pub fn osmotic_coefficient_from_args<B: Teos10Backend>(
    backend: &B,
    args: &[ArrayView2<'_, f64>],
) -> OsmoticResult<Array2<f64>, B::Error> {
    let grid = conform_args::<B::Error>(args)?;
    evaluate(backend, &Constants::default(), &grid)
}

/// Compute the osmotic coefficient from Practical Salinity.
///
/// `sp` is converted to Reference Salinity, which stands in for Absolute
/// Salinity (see [`sa_from_sp`]), then evaluated like
/// [`osmotic_coefficient`].
pub fn osmotic_coefficient_from_sp<B: Teos10Backend>(
    backend: &B,
    sp: ArrayView2<'_, f64>,
    t: ArrayView2<'_, f64>,
    p: ArrayView2<'_, f64>,
) -> OsmoticResult<Array2<f64>, B::Error> {
    let sa = sp.mapv(sa_from_sp);
    osmotic_coefficient(backend, sa.view(), t.view(), p.view())
}

/// Osmotic coefficient at a single point with the TEOS-10 constants.
///
/// NaN where the grid functions would leave the position undefined.
pub fn osmotic_coefficient_scalar<B: Teos10Backend>(
    backend: &B,
    sa: f64,
    t: f64,
    p: f64,
) -> Result<f64, B::Error> {
    point(backend, &Constants::default(), sa, t, p)
}

/// Molality (mol/kg) of every position of an Absolute Salinity grid.
///
/// NaN where `sa` is negative or NaN. Uses the TEOS-10 mean molar mass of
/// sea salt; see [`molality_from_sa_with`] for other constants.
pub fn molality_from_sa(sa: ArrayView2<'_, f64>) -> Array2<f64> {
    molality_from_sa_with(&Constants::default(), sa)
}

/// As [`molality_from_sa`], with the molar mass taken from `constants`.
pub fn molality_from_sa_with(constants: &Constants, sa: ArrayView2<'_, f64>) -> Array2<f64> {
    sa.mapv(|s| molality(s, constants.sea_salt_molar_mass))
}

fn evaluate<B: Teos10Backend>(
    backend: &B,
    constants: &Constants,
    grid: &Conformed<'_>,
) -> OsmoticResult<Array2<f64>, B::Error> {
    let mut out = Array2::from_elem(grid.dim(), f64::NAN);
    let mut undefined = 0usize;

    for ((i, j), phi) in out.indexed_iter_mut() {
        *phi = point(
            backend,
            constants,
            grid.sa[[i, j]],
            grid.t[[i, j]],
            grid.p.get(i, j),
        )
        .map_err(OsmoticError::Evaluator)?;
        if phi.is_nan() {
            undefined += 1;
        }
    }
    trace!(
        "osmotic coefficient over {:?}: {undefined} undefined positions",
        grid.dim()
    );

    Ok(if grid.transposed {
        out.reversed_axes()
    } else {
        out
    })
}

/// (g(0, t, p) − μ_w(SA, t, p)) / (m·R·T), or NaN when masked.
fn point<B: Teos10Backend>(
    backend: &B,
    constants: &Constants,
    sa: f64,
    t: f64,
    p: f64,
) -> Result<f64, B::Error> {
    let m = molality(sa, constants.sea_salt_molar_mass);
    let part = ideal_term(m, t, constants.gas_constant, constants.t0);
    if sa.is_nan() || t.is_nan() || p.is_nan() || part.is_nan() || part == 0.0 {
        return Ok(f64::NAN);
    }

    // pure water reference: salinity argument is zero, not SA
    let g0 = backend.gibbs(0, 0, 0, 0.0, t, p)?;
    let mu_w = backend.chem_potential_water(sa, t, p)?;
    Ok((g0 - mu_w) / part)
}
