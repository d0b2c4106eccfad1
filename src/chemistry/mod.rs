//! Chemistry module: physical constants and scalar helpers for seawater solute amounts.
//!
//! This module provides:
//! - The molar gas constant and the mean molar mass of sea salt used by TEOS-10
//! - The Celsius to Kelvin offset
//! - Molality of sea salt from Absolute Salinity
//! - The ideal-solution reference term `m·R·T` the osmotic coefficient is scaled by
//!
//! Units conventions:
//! - Absolute Salinity in g/kg of seawater
//! - Molality in mol/kg of pure water (solvent)
//! - Temperatures in °C on input, Kelvin internally
//!
//! Undefined values are `f64::NAN`. None of the functions panic or return
//! errors; negative salinities map to NaN and NaN inputs propagate.
//!
//! # Examples
//! ```rust
//! use osmotic_rs::chemistry::{molality, ideal_term, GAS_CONSTANT, SEA_SALT_MOLAR_MASS, T0};
//!
//! let m = molality(35.0, SEA_SALT_MOLAR_MASS);
//! assert!(m > 1.1 && m < 1.2);
//! assert!(molality(-1.0, SEA_SALT_MOLAR_MASS).is_nan());
//! assert_eq!(ideal_term(0.0, 10.0, GAS_CONSTANT, T0), 0.0);
//! ```

/// Molar gas constant R, J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314_472;
/// Mean molar mass of the sea-salt constituents M_S, kg/mol.
pub const SEA_SALT_MOLAR_MASS: f64 = 0.031_403_821_8;
/// Celsius zero point in Kelvin.
pub const T0: f64 = 273.15;
/// Grams per kilogram.
pub const G_PER_KG: f64 = 1000.0;

/// Molality (mol/kg) of sea salt from Absolute Salinity `sa` in g/kg.
///
/// `molar_mass` is the mean molar mass of sea salt in kg/mol. Returns NaN
/// for negative or NaN salinity.
pub fn molality(sa: f64, molar_mass: f64) -> f64 {
    if sa >= 0.0 {
        sa / (molar_mass * (G_PER_KG - sa))
    } else {
        f64::NAN
    }
}

/// Ideal-solution reference term `m·R·(T0 + t)` in J/kg.
pub fn ideal_term(molality: f64, t: f64, gas_constant: f64, t0: f64) -> f64 {
    molality * gas_constant * (t0 + t)
}
