use gsw as gsw_teos10;

/// Thermodynamic evaluators the osmotic coefficient is built from.
///
/// Implementations wrap a TEOS-10 Gibbs function library. Both methods are
/// evaluated at a single point; the grid functions in
/// [`crate::osmotic::coefficient`] call them only for positions where every
/// input is defined.
///
/// # Arguments
/// * `sa` - Absolute Salinity [g/kg]
/// * `t` - In-situ temperature [°C]
/// * `p` - Sea pressure [dbar]
pub trait Teos10Backend {
    /// Error reported by the underlying library; it is handed back to the
    /// caller without translation.
    type Error: core::fmt::Debug;

    /// Partial derivative of the specific Gibbs function of seawater of
    /// order `ns` in SA, `nt` in t and `np` in p [J/kg for (0, 0, 0)].
    fn gibbs(&self, ns: u8, nt: u8, np: u8, sa: f64, t: f64, p: f64)
    -> Result<f64, Self::Error>;

    /// Chemical potential of water in seawater [J/kg].
    fn chem_potential_water(&self, sa: f64, t: f64, p: f64) -> Result<f64, Self::Error>;
}

/// Backend assembled from two closures.
///
/// Handy when the Gibbs library exposes free functions rather than a type.
///
/// ```rust
/// use osmotic_rs::adapters::teos10::{FnBackend, Teos10Backend};
///
/// let backend = FnBackend::new(
///     |_ns, _nt, _np, _sa, t, _p| Ok::<f64, ()>(-t),
///     |sa, t, _p| Ok(-t - sa),
/// );
/// assert_eq!(backend.gibbs(0, 0, 0, 0.0, 10.0, 0.0), Ok(-10.0));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnBackend<G, M> {
    gibbs: G,
    chem_potential_water: M,
}

impl<G, M, E> FnBackend<G, M>
where
    G: Fn(u8, u8, u8, f64, f64, f64) -> Result<f64, E>,
    M: Fn(f64, f64, f64) -> Result<f64, E>,
{
    pub fn new(gibbs: G, chem_potential_water: M) -> Self {
        Self {
            gibbs,
            chem_potential_water,
        }
    }
}

impl<G, M, E> Teos10Backend for FnBackend<G, M>
where
    G: Fn(u8, u8, u8, f64, f64, f64) -> Result<f64, E>,
    M: Fn(f64, f64, f64) -> Result<f64, E>,
    E: core::fmt::Debug,
{
    type Error = E;

    fn gibbs(&self, ns: u8, nt: u8, np: u8, sa: f64, t: f64, p: f64) -> Result<f64, E> {
        (self.gibbs)(ns, nt, np, sa, t, p)
    }

    fn chem_potential_water(&self, sa: f64, t: f64, p: f64) -> Result<f64, E> {
        (self.chem_potential_water)(sa, t, p)
    }
}

/// Absolute/Reference Salinity from Practical Salinity.
/// Note: This returns TEOS-10 Reference Salinity (SR) from SP and is used
/// as an approximation for Absolute Salinity (SA). For standard seawater
/// composition SR ≈ SA; use location-based SA conversions if available.
/// NaN input gives NaN.
pub fn sa_from_sp(sp: f64) -> f64 {
    if sp.is_nan() {
        return f64::NAN;
    }
    gsw_teos10::conversions::sr_from_sp(sp)
}
