//! Shape checks and broadcasting of the (SA, t, p) triple.
//!
//! SA and t must share one M×N shape. p may be smaller and is broadcast to
//! that shape by the first matching [`PressureBroadcast`] rule. Nothing is
//! copied: the broadcast is an index mapping over the caller's data, and the
//! single-row transpose only swaps view axes.

use log::debug;
use ndarray::{Array2, ArrayView2};

use crate::error::OsmoticError;

/// Number of input grids an evaluation takes (SA, t, p).
pub const ARG_COUNT: usize = 3;

/// How the pressure grid was fitted to the SA grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressureBroadcast {
    /// 1×1, replicated everywhere.
    Scalar,
    /// 1×N, replicated down all M rows.
    Row,
    /// M×1, replicated across all N columns.
    Column,
    /// 1×M, read as a transposed column and replicated across N columns.
    TransposedColumn,
    /// Already M×N.
    Full,
}

/// A grid whose source has extent 1 or the full extent along each axis.
#[derive(Clone, Debug)]
pub struct BroadcastView<'a> {
    src: ArrayView2<'a, f64>,
    dim: (usize, usize),
}

impl<'a> BroadcastView<'a> {
    fn new(src: ArrayView2<'a, f64>, dim: (usize, usize)) -> Self {
        debug_assert!(src.nrows() == 1 || src.nrows() == dim.0);
        debug_assert!(src.ncols() == 1 || src.ncols() == dim.1);
        Self { src, dim }
    }

    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    /// Value at row `i`, column `j` of the broadcast grid.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        let (rows, cols) = self.src.dim();
        let i = if rows == 1 { 0 } else { i };
        let j = if cols == 1 { 0 } else { j };
        self.src[[i, j]]
    }

    /// Materializes the broadcast grid.
    pub fn to_array(&self) -> Array2<f64> {
        Array2::from_shape_fn(self.dim, |(i, j)| self.get(i, j))
    }

    fn reversed_axes(self) -> Self {
        Self {
            src: self.src.reversed_axes(),
            dim: (self.dim.1, self.dim.0),
        }
    }
}

/// The conformed input triple.
///
/// `sa`, `t` and `p` share the dimensions returned by [`Conformed::dim`].
/// When `transposed` is set, those are the transposed dimensions of the
/// caller's SA and results must be transposed back.
#[derive(Clone, Debug)]
pub struct Conformed<'a> {
    pub sa: ArrayView2<'a, f64>,
    pub t: ArrayView2<'a, f64>,
    pub p: BroadcastView<'a>,
    pub rule: PressureBroadcast,
    pub transposed: bool,
}

impl Conformed<'_> {
    pub fn dim(&self) -> (usize, usize) {
        self.sa.dim()
    }
}

/// Checks the shapes of SA, t and p and fits p to the SA grid.
///
/// Single-row inputs (SA of shape 1×N) come back transposed to N×1 with
/// `transposed` set.
///
/// # Errors
/// [`OsmoticError::ShapeMismatch`] if t differs in shape from SA or if no
/// broadcast rule fits p.
pub fn conform<'a, E>(
    sa: ArrayView2<'a, f64>,
    t: ArrayView2<'a, f64>,
    p: ArrayView2<'a, f64>,
) -> Result<Conformed<'a>, OsmoticError<E>> {
    let (m, n) = sa.dim();
    if t.dim() != (m, n) {
        return Err(OsmoticError::ShapeMismatch {
            argument: "t",
            expected: (m, n),
            found: t.dim(),
        });
    }

    let (rule, p) = broadcast_pressure(p, m, n)?;
    let transposed = m == 1;
    debug!(
        "pressure {:?} conformed to {m}x{n} as {rule:?}, transposed={transposed}",
        p.src.dim()
    );

    if transposed {
        Ok(Conformed {
            sa: sa.reversed_axes(),
            t: t.reversed_axes(),
            p: p.reversed_axes(),
            rule,
            transposed,
        })
    } else {
        Ok(Conformed {
            sa,
            t,
            p,
            rule,
            transposed,
        })
    }
}

/// Like [`conform`], for a caller-assembled argument list.
///
/// # Errors
/// [`OsmoticError::ArgumentCount`] unless exactly three grids are given,
/// otherwise as [`conform`].
pub fn conform_args<'a, E>(
    args: &[ArrayView2<'a, f64>],
) -> Result<Conformed<'a>, OsmoticError<E>> {
    match args {
        [sa, t, p] => conform(sa.clone(), t.clone(), p.clone()),
        _ => Err(OsmoticError::ArgumentCount {
            expected: ARG_COUNT,
            found: args.len(),
        }),
    }
}

fn broadcast_pressure<'a, E>(
    p: ArrayView2<'a, f64>,
    m: usize,
    n: usize,
) -> Result<(PressureBroadcast, BroadcastView<'a>), OsmoticError<E>> {
    let rule = match p.dim() {
        (1, 1) => PressureBroadcast::Scalar,
        (1, cols) if cols == n => PressureBroadcast::Row,
        (rows, 1) if rows == m => PressureBroadcast::Column,
        (1, cols) if cols == m => PressureBroadcast::TransposedColumn,
        dim if dim == (m, n) => PressureBroadcast::Full,
        found => {
            return Err(OsmoticError::ShapeMismatch {
                argument: "p",
                expected: (m, n),
                found,
            });
        }
    };

    let src = match rule {
        PressureBroadcast::TransposedColumn => p.reversed_axes(),
        _ => p,
    };
    Ok((rule, BroadcastView::new(src, (m, n))))
}
