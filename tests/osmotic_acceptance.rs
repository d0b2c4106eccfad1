use is_close::is_close;
use ndarray::{Array2, array};
use osmotic_rs::chemistry::{GAS_CONSTANT, SEA_SALT_MOLAR_MASS, T0, molality};
use osmotic_rs::{
    Constants, OsmoticError, Teos10Backend, molality_from_sa, osmotic_coefficient,
    osmotic_coefficient_from_sp, osmotic_coefficient_scalar, osmotic_coefficient_with,
    sa_from_sp,
};

#[derive(Debug, PartialEq)]
struct BackendError(&'static str);

/// Backend whose chemical potential is built so that the osmotic
/// coefficient comes out as `expected_phi(sa, t, p)`.
struct Synthetic;

fn pure_water_gibbs(t: f64, p: f64) -> f64 {
    -(1_000.0 + 4.0 * t) + 0.97 * p
}

fn expected_phi(sa: f64, t: f64, p: f64) -> f64 {
    0.9 + 0.001 * sa - 0.0005 * t + 1e-5 * p
}

impl Teos10Backend for Synthetic {
    type Error = BackendError;

    fn gibbs(&self, ns: u8, nt: u8, np: u8, sa: f64, t: f64, p: f64) -> Result<f64, BackendError> {
        if (ns, nt, np) != (0, 0, 0) {
            return Err(BackendError("derivative order"));
        }
        if sa != 0.0 {
            return Err(BackendError("gibbs needs pure water"));
        }
        if t > 40.0 {
            return Err(BackendError("temperature out of range"));
        }
        Ok(pure_water_gibbs(t, p))
    }

    fn chem_potential_water(&self, sa: f64, t: f64, p: f64) -> Result<f64, BackendError> {
        let part = molality(sa, SEA_SALT_MOLAR_MASS) * GAS_CONSTANT * (T0 + t);
        Ok(pure_water_gibbs(t, p) - expected_phi(sa, t, p) * part)
    }
}

fn same(a: &Array2<f64>, b: &Array2<f64>) -> bool {
    a.dim() == b.dim()
        && a.iter()
            .zip(b.iter())
            .all(|(x, y)| x == y || (x.is_nan() && y.is_nan()))
}

fn sample() -> (Array2<f64>, Array2<f64>) {
    let sa = array![[34.5, 35.0, 35.5, 36.0], [30.0, 31.0, 32.0, 33.0], [20.0, 25.0, 38.0, 40.0]];
    let t = array![[2.0, 4.0, 6.0, 8.0], [10.0, 12.0, 14.0, 16.0], [18.0, 20.0, 22.0, 24.0]];
    (sa, t)
}

#[test]
fn single_point_matches_formula() {
    let sa = array![[35.0]];
    let t = array![[10.0]];
    let p = array![[100.0]];
    let out = osmotic_coefficient(&Synthetic, sa.view(), t.view(), p.view()).unwrap();
    assert_eq!(out.dim(), (1, 1));
    let phi = out[[0, 0]];
    assert!(is_close!(phi, 0.931), "phi {phi}");
}

#[test]
fn scalar_entry_point_agrees_with_grid() {
    let grid = osmotic_coefficient(
        &Synthetic,
        array![[35.0]].view(),
        array![[10.0]].view(),
        array![[100.0]].view(),
    )
    .unwrap();
    let scalar = osmotic_coefficient_scalar(&Synthetic, 35.0, 10.0, 100.0).unwrap();
    assert_eq!(grid[[0, 0]], scalar);
    assert!(osmotic_coefficient_scalar(&Synthetic, 0.0, 10.0, 100.0).unwrap().is_nan());
}

#[test]
fn output_has_shape_of_salinity() {
    let (sa, t) = sample();
    let out = osmotic_coefficient(&Synthetic, sa.view(), t.view(), array![[50.0]].view()).unwrap();
    assert_eq!(out.dim(), sa.dim());
    for ((i, j), phi) in out.indexed_iter() {
        let expected = expected_phi(sa[[i, j]], t[[i, j]], 50.0);
        assert!(is_close!(*phi, expected), "({i}, {j}): {phi} vs {expected}");
    }
}

#[test]
fn scalar_pressure_equals_replicated_pressure() {
    let (sa, t) = sample();
    let scalar = osmotic_coefficient(&Synthetic, sa.view(), t.view(), array![[250.0]].view());
    let full = Array2::from_elem(sa.dim(), 250.0);
    let replicated = osmotic_coefficient(&Synthetic, sa.view(), t.view(), full.view());
    assert!(same(&scalar.unwrap(), &replicated.unwrap()));
}

#[test]
fn row_pressure_equals_replicated_rows() {
    let (sa, t) = sample();
    let row = array![[0.0, 100.0, 500.0, 1000.0]];
    let full = Array2::from_shape_fn(sa.dim(), |(_, j)| row[[0, j]]);
    let a = osmotic_coefficient(&Synthetic, sa.view(), t.view(), row.view()).unwrap();
    let b = osmotic_coefficient(&Synthetic, sa.view(), t.view(), full.view()).unwrap();
    assert!(same(&a, &b));
}

#[test]
fn column_pressure_equals_replicated_columns() {
    let (sa, t) = sample();
    let column = array![[10.0], [600.0], [2000.0]];
    let full = Array2::from_shape_fn(sa.dim(), |(i, _)| column[[i, 0]]);
    let a = osmotic_coefficient(&Synthetic, sa.view(), t.view(), column.view()).unwrap();
    let b = osmotic_coefficient(&Synthetic, sa.view(), t.view(), full.view()).unwrap();
    assert!(same(&a, &b));
}

#[test]
fn transposed_column_pressure_equals_replicated_columns() {
    let (sa, t) = sample();
    let transposed_column = array![[10.0, 600.0, 2000.0]];
    let full = Array2::from_shape_fn(sa.dim(), |(i, _)| transposed_column[[0, i]]);
    let a = osmotic_coefficient(&Synthetic, sa.view(), t.view(), transposed_column.view());
    let b = osmotic_coefficient(&Synthetic, sa.view(), t.view(), full.view());
    assert!(same(&a.unwrap(), &b.unwrap()));
}

#[test]
fn single_row_input_round_trips_orientation() {
    let sa = array![[33.0, 34.0, 0.0, 36.0, 37.0]];
    let t = array![[1.0, 5.0, 9.0, 13.0, 17.0]];
    let p = array![[0.0, 100.0, 200.0, 300.0, 400.0]];

    let row = osmotic_coefficient(&Synthetic, sa.view(), t.view(), p.view()).unwrap();
    assert_eq!(row.dim(), (1, 5));

    let column = osmotic_coefficient(&Synthetic, sa.t(), t.t(), p.t()).unwrap();
    assert_eq!(column.dim(), (5, 1));
    assert!(same(&row, &column.t().to_owned()));
}

#[test]
fn undefined_salinity_blanks_only_its_cell() {
    let (sa, t) = sample();
    let p = array![[100.0]];
    let clean = osmotic_coefficient(&Synthetic, sa.view(), t.view(), p.view()).unwrap();

    let mut dirty_sa = sa.clone();
    dirty_sa[[1, 1]] = -3.0;
    dirty_sa[[2, 3]] = f64::NAN;
    let dirty = osmotic_coefficient(&Synthetic, dirty_sa.view(), t.view(), p.view()).unwrap();

    for ((i, j), phi) in dirty.indexed_iter() {
        if (i, j) == (1, 1) || (i, j) == (2, 3) {
            assert!(phi.is_nan(), "({i}, {j}) should be undefined");
        } else {
            assert_eq!(*phi, clean[[i, j]]);
        }
    }
}

#[test]
fn undefined_temperature_or_pressure_blanks_cell() {
    let sa = array![[35.0, 35.0], [35.0, 35.0]];
    let t = array![[10.0, f64::NAN], [10.0, 10.0]];
    let p = array![[0.0, 0.0], [f64::NAN, 0.0]];
    let out = osmotic_coefficient(&Synthetic, sa.view(), t.view(), p.view()).unwrap();
    assert!(!out[[0, 0]].is_nan());
    assert!(out[[0, 1]].is_nan());
    assert!(out[[1, 0]].is_nan());
    assert!(!out[[1, 1]].is_nan());
}

#[test]
fn zero_salinity_is_undefined_not_infinite() {
    let sa = array![[0.0, 35.0]];
    let t = array![[10.0, 10.0]];
    let out = osmotic_coefficient(&Synthetic, sa.view(), t.view(), array![[0.0]].view()).unwrap();
    assert!(out[[0, 0]].is_nan());
    assert!(out[[0, 1]].is_finite());
    assert_eq!(molality_from_sa(sa.view())[[0, 0]], 0.0);
}

#[test]
fn backend_failure_aborts_the_call() {
    let sa = array![[35.0, 35.0]];
    let t = array![[10.0, 45.0]];
    let res = osmotic_coefficient(&Synthetic, sa.view(), t.view(), array![[0.0]].view());
    match res {
        Err(OsmoticError::Evaluator(e)) => {
            assert_eq!(e, BackendError("temperature out of range"))
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn practical_salinity_goes_through_reference_salinity() {
    let sp = array![[33.0, 35.0], [f64::NAN, 0.0]];
    let t = array![[10.0, 12.0], [14.0, 16.0]];
    let p = array![[100.0]];
    let from_sp = osmotic_coefficient_from_sp(&Synthetic, sp.view(), t.view(), p.view()).unwrap();
    let sa = sp.mapv(sa_from_sp);
    let from_sa = osmotic_coefficient(&Synthetic, sa.view(), t.view(), p.view()).unwrap();
    assert!(same(&from_sp, &from_sa));
    assert!(from_sp[[1, 0]].is_nan());
    assert!(from_sp[[1, 1]].is_nan());
}

#[test]
fn custom_gas_constant_rescales_result() {
    let sa = array![[35.0]];
    let t = array![[10.0]];
    let p = array![[100.0]];
    let constants = Constants {
        gas_constant: 2.0 * GAS_CONSTANT,
        ..Default::default()
    };
    let out = osmotic_coefficient_with(&Synthetic, &constants, sa.view(), t.view(), p.view())
        .unwrap();
    assert!(is_close!(out[[0, 0]], 0.931 / 2.0));
}

#[test]
fn grids_may_come_from_different_owners() {
    let p = array![[100.0]];
    let out = {
        let sa = array![[35.0, 36.0]];
        let out = {
            let t = array![[10.0, 12.0]];
            osmotic_coefficient(&Synthetic, sa.view(), t.view(), p.view()).unwrap()
        };
        assert_eq!(out.dim(), sa.dim());
        out
    };
    assert!(is_close!(out[[0, 0]], expected_phi(35.0, 10.0, 100.0)));
    assert!(is_close!(out[[0, 1]], expected_phi(36.0, 12.0, 100.0)));

    let constants = Constants::default();
    let t = array![[10.0]];
    let with = {
        let sa = array![[35.0]];
        osmotic_coefficient_with(&Synthetic, &constants, sa.view(), t.view(), p.view()).unwrap()
    };
    assert!(is_close!(with[[0, 0]], 0.931));
}
