use serde::{Deserialize, Serialize};

use crate::chemistry::{GAS_CONSTANT, SEA_SALT_MOLAR_MASS, T0};
use crate::error::OsmoticError;

/// Physical constants used by the osmotic coefficient evaluation.
///
/// `Default` gives the TEOS-10 values. Missing fields fall back to those
/// values when deserializing, so a partial document only overrides what it
/// names.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constants {
    /// Molar gas constant, J/(mol·K).
    pub gas_constant: f64,
    /// Mean molar mass of sea salt, kg/mol.
    pub sea_salt_molar_mass: f64,
    /// Celsius zero point, K.
    pub t0: f64,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            gas_constant: GAS_CONSTANT,
            sea_salt_molar_mass: SEA_SALT_MOLAR_MASS,
            t0: T0,
        }
    }
}

impl Constants {
    /// Returns `self` unchanged if every constant is finite and positive.
    pub fn validated<E>(self) -> Result<Self, OsmoticError<E>> {
        for (name, value) in [
            ("gas_constant", self.gas_constant),
            ("sea_salt_molar_mass", self.sea_salt_molar_mass),
            ("t0", self.t0),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(OsmoticError::InvalidConstant { name, value });
            }
        }
        Ok(self)
    }
}
